use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{
    Quantity,
    emission::{Tonnes, TonnesPerMegawattHour},
    money::Euros,
    rate::EuroPerMegawattHour,
};

pub type MegawattHours = Quantity<1, 0, 0>;

impl Display for MegawattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} MWh", self.0)
    }
}

impl Debug for MegawattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Mul<EuroPerMegawattHour> for MegawattHours {
    type Output = Euros;

    fn mul(self, rhs: EuroPerMegawattHour) -> Self::Output {
        Euros::from(self.0 * rhs.0)
    }
}

impl Mul<TonnesPerMegawattHour> for MegawattHours {
    type Output = Tonnes;

    fn mul(self, rhs: TonnesPerMegawattHour) -> Self::Output {
        Tonnes::from(self.0 * rhs.0)
    }
}
