use serde::{Deserialize, Serialize};

use crate::{
    core::month::Monthly,
    quantity::{money::Euros, rate::EuroPerMegawattHour},
};

/// Reference seasonal sales curve, January through December.
pub const SEASONAL_REFERENCE_PRICES: Monthly<EuroPerMegawattHour> = Monthly::from_values([
    70.0, 65.0, 60.0, 55.0, 40.0, 30.0, 25.0, 25.0, 35.0, 50.0, 60.0, 65.0,
]);

/// Terms the heat is sold under, one variant per contract kind on the table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case", rename_all_fields = "kebab-case")]
pub enum ContractTerms {
    /// One flat price, year-round.
    FixedPrice { price: EuroPerMegawattHour },

    /// The network's reference seasonal curve.
    SeasonalPrice,

    /// Fixed annual capacity fee plus a flat per-MWh energy payment.
    CapacityPlusEnergy {
        capacity_payment: Euros,
        energy_price: EuroPerMegawattHour,
    },

    /// No contract settled yet: the price curve is all zeroes.
    Unknown,
}

impl Default for ContractTerms {
    fn default() -> Self {
        Self::FixedPrice { price: EuroPerMegawattHour::new(50.0) }
    }
}

impl ContractTerms {
    pub fn price_curve(self) -> Monthly<EuroPerMegawattHour> {
        match self {
            Self::FixedPrice { price } => Monthly::from_fn(|_| price),
            Self::SeasonalPrice => SEASONAL_REFERENCE_PRICES,
            Self::CapacityPlusEnergy { energy_price, .. } => Monthly::from_fn(|_| energy_price),
            Self::Unknown => Monthly::from_fn(|_| EuroPerMegawattHour::ZERO),
        }
    }

    /// Annual fee on top of the per-MWh revenue. Zero for all but capacity contracts.
    pub fn capacity_payment(self) -> Euros {
        match self {
            Self::CapacityPlusEnergy { capacity_payment, .. } => capacity_payment,
            Self::FixedPrice { .. } | Self::SeasonalPrice | Self::Unknown => Euros::ZERO,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FixedPrice { .. } => "Fixed price",
            Self::SeasonalPrice => "Seasonal price",
            Self::CapacityPlusEnergy { .. } => "Capacity + energy",
            Self::Unknown => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::month::Month;

    #[test]
    fn test_fixed_curve_is_flat() {
        let curve =
            ContractTerms::FixedPrice { price: EuroPerMegawattHour::new(65.0) }.price_curve();
        assert!(curve.iter().all(|price| *price == EuroPerMegawattHour::new(65.0)));
    }

    #[test]
    fn test_seasonal_curve() {
        let curve = ContractTerms::SeasonalPrice.price_curve();
        assert_eq!(curve[Month::Jan], EuroPerMegawattHour::new(70.0));
        assert_eq!(curve[Month::Aug], EuroPerMegawattHour::new(25.0));
        assert_eq!(curve[Month::Dec], EuroPerMegawattHour::new(65.0));
    }

    #[test]
    fn test_capacity_curve_ignores_the_fee() {
        let terms = ContractTerms::CapacityPlusEnergy {
            capacity_payment: Euros::new(10_000.0),
            energy_price: EuroPerMegawattHour::new(35.0),
        };
        assert!(terms.price_curve().iter().all(|price| *price == EuroPerMegawattHour::new(35.0)));
        assert_eq!(terms.capacity_payment(), Euros::new(10_000.0));
    }

    #[test]
    fn test_only_capacity_contracts_pay_the_fee() {
        assert_eq!(ContractTerms::default().capacity_payment(), Euros::ZERO);
        assert_eq!(ContractTerms::SeasonalPrice.capacity_payment(), Euros::ZERO);
        assert_eq!(ContractTerms::Unknown.capacity_payment(), Euros::ZERO);
    }

    #[test]
    fn test_unknown_curve_is_zero() {
        let curve = ContractTerms::Unknown.price_curve();
        assert!(curve.iter().all(|price| *price == EuroPerMegawattHour::ZERO));
    }

    #[test]
    fn test_toml_round_trip() {
        let terms: ContractTerms = toml::from_str(
            "kind = \"capacity-plus-energy\"\ncapacity-payment = 10000\nenergy-price = 35\n",
        )
        .unwrap();
        assert_eq!(
            terms,
            ContractTerms::CapacityPlusEnergy {
                capacity_payment: Euros::new(10_000.0),
                energy_price: EuroPerMegawattHour::new(35.0),
            },
        );
    }
}
