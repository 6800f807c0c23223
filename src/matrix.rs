//! Dense matrix helpers shared by every precision.

use ndarray::{Array2, Zip};

use crate::number_representations::BenchScalar;

/// A `rows` x `cols` matrix with every element set to `value`, rounded into `T`.
pub fn filled<T: BenchScalar>(rows: usize, cols: usize, value: f64) -> Array2<T> {
    Array2::from_elem((rows, cols), T::from_f64(value))
}

pub fn all_finite<T: BenchScalar>(matrix: &Array2<T>) -> bool {
    matrix.iter().all(|&v| v.is_finite())
}

/// Element-wise conversion into another precision, going through `f64`.
pub fn convert<T: BenchScalar, U: BenchScalar>(matrix: &Array2<T>) -> Array2<U> {
    matrix.mapv(|v| U::from_f64(v.to_f64()))
}

/// Mean over all elements of `|reference - computed|`, with the difference
/// taken in the reference precision and accumulated in `f64`.
///
/// An empty matrix has no error.
///
/// # Panics
///
/// Panics if the two matrices differ in shape.
pub fn mean_absolute_error<R: BenchScalar>(reference: &Array2<R>, computed: &Array2<R>) -> f64 {
    debug_assert_eq!(reference.shape(), computed.shape());
    if reference.is_empty() {
        return 0.0;
    }
    let total = Zip::from(reference)
        .and(computed)
        .fold(0.0, |acc, &r, &c| acc + (r - c).to_f64().abs());
    total / reference.len() as f64
}
