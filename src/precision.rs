//! The sets of number representations a benchmark compares.

use crate::number_representations::{BenchScalar, Softposit16_1, Softposit32_2};

/// A posit type measured against a float type, both checked against a reference.
///
/// When the reference is the comparison type itself the comparison error is
/// identically zero and is not reported.
pub trait PrecisionSet {
    type Posit: BenchScalar;
    type Comparison: BenchScalar;
    type Reference: BenchScalar;

    fn label() -> String {
        format!(
            "{} vs {} (reference {})",
            <Self::Posit as BenchScalar>::NAME,
            <Self::Comparison as BenchScalar>::NAME,
            <Self::Reference as BenchScalar>::NAME
        )
    }

    fn reports_comparison_error() -> bool {
        <Self::Comparison as BenchScalar>::BITS < <Self::Reference as BenchScalar>::BITS
    }
}

/// posit<32,2> against `f32`, with an `f64` reference.
pub struct Posit32VsFloat32;

impl PrecisionSet for Posit32VsFloat32 {
    type Posit = Softposit32_2;
    type Comparison = f32;
    type Reference = f64;
}

/// posit<16,1> against `f32`, which also serves as the reference.
pub struct Posit16VsFloat32;

impl PrecisionSet for Posit16VsFloat32 {
    type Posit = Softposit16_1;
    type Comparison = f32;
    type Reference = f32;
}
