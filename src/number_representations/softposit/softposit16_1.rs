use ndarray::ScalarOperand;
use num_traits::{One, Zero};
use softposit::P16E1;
use std::{
    fmt::{Debug, Display, Formatter},
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

use crate::number_representations::core::BenchScalar;

/// posit<16,1> from the `softposit` crate.
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Softposit16_1(pub P16E1);

impl ScalarOperand for Softposit16_1 {}

impl BenchScalar for Softposit16_1 {
    const NAME: &'static str = "posit16";
    const BITS: u32 = 16;

    fn from_f64(value: f64) -> Self {
        Softposit16_1(<P16E1 as From<f64>>::from(value))
    }

    // NaR widens to NaN.
    fn to_f64(self) -> f64 {
        <f64 as From<P16E1>>::from(self.0)
    }
}

impl Neg for Softposit16_1 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Softposit16_1(-self.0)
    }
}

impl Add for Softposit16_1 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Softposit16_1(self.0 + rhs.0)
    }
}

impl Sub for Softposit16_1 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Softposit16_1(self.0 - rhs.0)
    }
}

impl Mul for Softposit16_1 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Softposit16_1(self.0 * rhs.0)
    }
}

impl Div for Softposit16_1 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        Softposit16_1(self.0 / rhs.0)
    }
}

impl AddAssign for Softposit16_1 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Softposit16_1 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Display for Softposit16_1 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for Softposit16_1 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Softposit16_1({})", self.0)
    }
}

impl Zero for Softposit16_1 {
    fn zero() -> Self {
        Softposit16_1(P16E1::ZERO)
    }
    fn is_zero(&self) -> bool {
        self.0 == P16E1::ZERO
    }
}

impl One for Softposit16_1 {
    fn one() -> Self {
        Softposit16_1(P16E1::ONE)
    }
}
