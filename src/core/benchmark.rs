use itertools::izip;
use serde::Serialize;

use crate::{
    core::{contract::SEASONAL_REFERENCE_PRICES, month::Monthly},
    quantity::{energy::MegawattHours, money::Euros, rate::EuroPerMegawattHour},
};

pub const REFERENCE_FLAT_PRICE: EuroPerMegawattHour = EuroPerMegawattHour::new(50.0);
pub const REFERENCE_ENERGY_PRICE: EuroPerMegawattHour = EuroPerMegawattHour::new(35.0);
pub const REFERENCE_CAPACITY_PAYMENT: Euros = Euros::new(10_000.0);

/// One comparison row: what the current delivery would earn under fixed
/// reference terms.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Benchmark {
    pub contract: &'static str,
    pub terms: &'static str,
    pub revenue: Euros,
}

/// Revenue the current delivery sequence would earn under the three reference
/// contracts. Deliberately independent of the live contract selection: these
/// are fixed yardsticks, not recomputations under alternate choices.
pub fn against_references(delivered: &Monthly<MegawattHours>) -> [Benchmark; 3] {
    let total = delivered.total();
    [
        Benchmark {
            contract: "Fixed price",
            terms: "50 €/MWh flat",
            revenue: total * REFERENCE_FLAT_PRICE,
        },
        Benchmark {
            contract: "Seasonal price",
            terms: "reference seasonal curve",
            revenue: izip!(delivered.iter(), SEASONAL_REFERENCE_PRICES.iter())
                .map(|(delivered, price)| *delivered * *price)
                .sum(),
        },
        Benchmark {
            contract: "Capacity + energy",
            terms: "35 €/MWh + 10 000 €",
            revenue: total * REFERENCE_ENERGY_PRICE + REFERENCE_CAPACITY_PAYMENT,
        },
    ]
}
