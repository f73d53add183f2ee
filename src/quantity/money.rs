use std::fmt::{Debug, Display, Formatter};

use crate::{fmt::Grouped, quantity::Quantity};

pub type Euros = Quantity<0, 1, 0>;

impl Display for Euros {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} €", Grouped(self.0.0))
    }
}

impl Debug for Euros {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
