use ndarray::ScalarOperand;
use num_traits::{One, Zero};
use softposit::P32E2;
use std::{
    fmt::{Debug, Display, Formatter},
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

use crate::number_representations::core::BenchScalar;

/// posit<32,2> from the `softposit` crate.
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Softposit32_2(pub P32E2);

impl ScalarOperand for Softposit32_2 {}

impl BenchScalar for Softposit32_2 {
    const NAME: &'static str = "posit32";
    const BITS: u32 = 32;

    fn from_f64(value: f64) -> Self {
        Softposit32_2(<P32E2 as From<f64>>::from(value))
    }

    // NaR widens to NaN.
    fn to_f64(self) -> f64 {
        <f64 as From<P32E2>>::from(self.0)
    }
}

impl Neg for Softposit32_2 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Softposit32_2(-self.0)
    }
}

impl Add for Softposit32_2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Softposit32_2(self.0 + rhs.0)
    }
}

impl Sub for Softposit32_2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Softposit32_2(self.0 - rhs.0)
    }
}

impl Mul for Softposit32_2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Softposit32_2(self.0 * rhs.0)
    }
}

impl Div for Softposit32_2 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        Softposit32_2(self.0 / rhs.0)
    }
}

impl AddAssign for Softposit32_2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Softposit32_2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Display for Softposit32_2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for Softposit32_2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Softposit32_2({})", self.0)
    }
}

impl Zero for Softposit32_2 {
    fn zero() -> Self {
        Softposit32_2(P32E2::ZERO)
    }
    fn is_zero(&self) -> bool {
        self.0 == P32E2::ZERO
    }
}

impl One for Softposit32_2 {
    fn one() -> Self {
        Softposit32_2(P32E2::ONE)
    }
}
