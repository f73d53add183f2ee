use serde::Serialize;

use crate::{
    core::{
        demand::NETWORK_DEMAND,
        fuel::Fuel,
        month::{Month, Monthly},
        plan::PlanInputs,
    },
    quantity::{
        emission::{Tonnes, TonnesPerMegawattHour},
        energy::MegawattHours,
        money::Euros,
        rate::EuroPerMegawattHour,
    },
};

/// Flat thirty-day month approximation, as the sales model uses it.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// One table row: everything downstream rendering needs for a month.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct MonthRow {
    pub month: Month,
    pub production: MegawattHours,
    pub delivered: MegawattHours,
    pub demand_reference: MegawattHours,
    pub price: EuroPerMegawattHour,
    pub revenue: Euros,
}

impl MonthRow {
    /// A shutdown month delivering out of the thermal store.
    #[must_use]
    pub fn draws_from_storage(&self) -> bool {
        self.production == MegawattHours::ZERO && self.delivered > MegawattHours::ZERO
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AnnualSummary {
    /// Sum of monthly revenue, plus the capacity payment where the contract
    /// carries one.
    pub annual_revenue: Euros,
    pub co2_avoided: Tonnes,
    pub displaced_fuel: Fuel,
    pub emission_factor: TonnesPerMegawattHour,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[must_use]
pub struct Evaluation {
    pub months: Monthly<MonthRow>,
    pub summary: AnnualSummary,
}

impl Evaluation {
    pub fn production(&self) -> Monthly<MegawattHours> {
        Monthly::from_fn(|month| self.months[month].production)
    }

    pub fn delivered(&self) -> Monthly<MegawattHours> {
        Monthly::from_fn(|month| self.months[month].delivered)
    }
}

/// Evaluate a plan: production, delivery, revenue, and avoided emissions.
/// Pure and total over the whole input domain.
pub fn evaluate(inputs: &PlanInputs) -> Evaluation {
    let production = Monthly::from_fn(|month| {
        if inputs.active.is_active(month) {
            inputs.daily_output * DAYS_PER_MONTH
        } else {
            MegawattHours::ZERO
        }
    });

    // Shutdown months may still deliver out of the store; active months pass
    // their raw production straight through.
    let delivered = Monthly::from_fn(|month| {
        if production[month] == MegawattHours::ZERO {
            inputs.storage.carryover(production[month.previous()])
        } else {
            production[month]
        }
    });

    let prices = inputs.contract.price_curve();
    let months = Monthly::from_fn(|month| MonthRow {
        month,
        production: production[month],
        delivered: delivered[month],
        demand_reference: NETWORK_DEMAND[month],
        price: prices[month],
        revenue: delivered[month] * prices[month],
    });

    let annual_revenue = months.iter().map(|row| row.revenue).sum::<Euros>()
        + inputs.contract.capacity_payment();
    let emission_factor = inputs.fuel.emission_factor();

    Evaluation {
        months,
        summary: AnnualSummary {
            annual_revenue,
            co2_avoided: delivered.total() * emission_factor,
            displaced_fuel: inputs.fuel,
            emission_factor,
        },
    }
}
