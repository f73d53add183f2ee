use crate::{core::month::Monthly, quantity::energy::MegawattHours};

/// Simulated network heat demand per month, January through December.
/// Display-only reference: the planner never balances against it.
pub const NETWORK_DEMAND: Monthly<MegawattHours> = Monthly::from_values([
    400.0, 380.0, 350.0, 300.0, 200.0, 150.0, 100.0, 120.0, 200.0, 300.0, 350.0, 380.0,
]);
