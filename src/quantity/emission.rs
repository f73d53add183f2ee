use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

pub type Tonnes = Quantity<0, 0, 1>;

/// Tonnes of CO₂ avoided per megawatt-hour of displaced fuel heat.
pub type TonnesPerMegawattHour = Quantity<-1, 0, 1>;

impl Display for Tonnes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} t", self.0)
    }
}

impl Debug for Tonnes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for TonnesPerMegawattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} tCO₂/MWh", self.0)
    }
}

impl Debug for TonnesPerMegawattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
