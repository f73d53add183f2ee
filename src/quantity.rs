pub mod emission;
pub mod energy;
pub mod money;
pub mod rate;

use std::ops::{Div, Mul};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Dimensioned scalar: energy (MWh), money (€), and mass (tCO₂) exponents.
#[derive(
    Clone,
    Copy,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
#[from(f64, OrderedFloat<f64>)]
#[must_use]
pub struct Quantity<const ENERGY: isize, const MONEY: isize, const MASS: isize>(
    pub OrderedFloat<f64>,
);

impl<const ENERGY: isize, const MONEY: isize, const MASS: isize>
    Quantity<ENERGY, MONEY, MASS>
{
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    pub const fn new(value: f64) -> Self {
        Self(OrderedFloat(value))
    }

    #[must_use]
    pub const fn into_inner(self) -> f64 {
        self.0.0
    }
}

/// The integer input controls produce whole-valued quantities.
impl<const ENERGY: isize, const MONEY: isize, const MASS: isize> From<u32>
    for Quantity<ENERGY, MONEY, MASS>
{
    fn from(value: u32) -> Self {
        Self(OrderedFloat(f64::from(value)))
    }
}

impl<const ENERGY: isize, const MONEY: isize, const MASS: isize> Mul<f64>
    for Quantity<ENERGY, MONEY, MASS>
{
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl<const ENERGY: isize, const MONEY: isize, const MASS: isize> Div<f64>
    for Quantity<ENERGY, MONEY, MASS>
{
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl<const ENERGY: isize, const MONEY: isize, const MASS: isize> Div<Self>
    for Quantity<ENERGY, MONEY, MASS>
{
    type Output = OrderedFloat<f64>;

    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}
