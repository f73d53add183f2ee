use serde::{Deserialize, Serialize};

use crate::quantity::energy::MegawattHours;

/// Share of the preceding month's raw production a shutdown month may deliver
/// from the thermal store.
pub const CARRYOVER_SHARE: f64 = 0.25;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    pub enabled: bool,
    pub capacity: MegawattHours,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { enabled: true, capacity: MegawattHours::new(50.0) }
    }
}

impl StorageConfig {
    pub const DISABLED: Self = Self { enabled: false, capacity: MegawattHours::ZERO };

    /// Heat a shutdown month can still deliver, given the previous month's
    /// raw production. Each shutdown month draws independently; the store is
    /// never tracked across months.
    pub fn carryover(self, previous_production: MegawattHours) -> MegawattHours {
        if self.enabled {
            self.capacity.min(previous_production * CARRYOVER_SHARE)
        } else {
            MegawattHours::ZERO
        }
    }
}
