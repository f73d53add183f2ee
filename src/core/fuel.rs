use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::quantity::emission::TonnesPerMegawattHour;

/// Fuel the delivered waste heat displaces in the network's boilers.
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Fuel {
    #[default]
    NaturalGas,
    LightOil,
    Biomass,
}

impl Fuel {
    pub const ALL: [Self; 3] = [Self::NaturalGas, Self::LightOil, Self::Biomass];

    /// Avoided CO₂ per displaced megawatt-hour.
    pub const fn emission_factor(self) -> TonnesPerMegawattHour {
        match self {
            Self::NaturalGas => TonnesPerMegawattHour::new(0.20),
            Self::LightOil => TonnesPerMegawattHour::new(0.27),
            Self::Biomass => TonnesPerMegawattHour::new(0.05),
        }
    }
}

impl Display for Fuel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NaturalGas => f.write_str("Natural Gas"),
            Self::LightOil => f.write_str("Light Oil"),
            Self::Biomass => f.write_str("Biomass"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emission_factors() {
        assert_eq!(Fuel::NaturalGas.emission_factor(), TonnesPerMegawattHour::new(0.20));
        assert_eq!(Fuel::LightOil.emission_factor(), TonnesPerMegawattHour::new(0.27));
        assert_eq!(Fuel::Biomass.emission_factor(), TonnesPerMegawattHour::new(0.05));
    }

    #[test]
    fn test_default() {
        assert_eq!(Fuel::default(), Fuel::NaturalGas);
    }
}
