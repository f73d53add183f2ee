use enumset::EnumSet;

use crate::{
    core::{
        contract::ContractTerms,
        fuel::Fuel,
        month::{Month, Monthly},
        storage::StorageConfig,
    },
    quantity::energy::MegawattHours,
};

/// Which months the plant produces at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct ActivityPlan(Monthly<bool>);

impl ActivityPlan {
    pub fn from_shutdowns(shutdown: EnumSet<Month>) -> Self {
        Self(Monthly::from_fn(|month| !shutdown.contains(month)))
    }

    #[must_use]
    pub fn is_active(self, month: Month) -> bool {
        self.0[month]
    }
}

/// The customary plan: year-round production with a July maintenance stop.
impl Default for ActivityPlan {
    fn default() -> Self {
        Self::from_shutdowns(EnumSet::only(Month::Jul))
    }
}

/// Everything one evaluation depends on. Immutable: the shell collects a new
/// set of inputs for every recomputation.
#[derive(Clone, Copy, Debug, PartialEq, bon::Builder)]
pub struct PlanInputs {
    #[builder(default)]
    pub active: ActivityPlan,

    /// Waste heat produced per active day.
    #[builder(default = MegawattHours::new(7.5))]
    pub daily_output: MegawattHours,

    #[builder(default)]
    pub contract: ContractTerms,

    #[builder(default)]
    pub storage: StorageConfig,

    /// Fuel displaced in the network, for avoided-emission accounting.
    #[builder(default)]
    pub fuel: Fuel,
}
