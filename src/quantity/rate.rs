use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Euro per megawatt-hour of delivered heat.
pub type EuroPerMegawattHour = Quantity<-1, 1, 0>;

impl Display for EuroPerMegawattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} €/MWh", self.0)
    }
}

impl Debug for EuroPerMegawattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(EuroPerMegawattHour::new(50.0).to_string(), "50 €/MWh");
    }
}
