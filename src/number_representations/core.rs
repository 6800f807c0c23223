use std::{
    fmt::{Debug, Display},
    ops::{AddAssign, Neg, SubAssign},
};

use ndarray::{LinalgScalar, ScalarOperand};

/// A scalar type that can populate the benchmark matrices.
///
/// Every type goes through `f64` on the way in and on the way out, so the
/// fill values and the error computation are shared by all representations.
pub trait BenchScalar:
    LinalgScalar
    + ScalarOperand
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + PartialOrd
    + Display
    + Debug
{
    const NAME: &'static str;
    /// Total storage width in bits.
    const BITS: u32;

    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;

    /// NaN and infinities for floats, NaR for posits.
    fn is_finite(self) -> bool {
        self.to_f64().is_finite()
    }
}
