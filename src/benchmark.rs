//! Timing and accuracy of one matrix size in one precision set.

use std::{
    fmt::{self, Display, Formatter},
    hint,
    time::{Duration, Instant},
};

use log::debug;
use ndarray::Array2;

use crate::error::{BenchmarkError, BenchmarkResult};
use crate::matrix;
use crate::number_representations::BenchScalar;
use crate::precision::PrecisionSet;
use crate::stats::{ErrorAccumulator, TimingAccumulator, as_micros_f64};

/// Shape, repetition count and fill values of one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkCase {
    pub rows: usize,
    pub cols: usize,
    pub repetitions: u32,
    pub value_a: f64,
    pub value_b: f64,
}

impl BenchmarkCase {
    pub fn new(rows: usize, cols: usize, repetitions: u32, value_a: f64, value_b: f64) -> Self {
        Self {
            rows,
            cols,
            repetitions,
            value_a,
            value_b,
        }
    }

    /// Both operands share one shape and are multiplied together, so the
    /// shape has to be square and non-empty.
    pub fn validate(&self) -> BenchmarkResult<()> {
        if self.repetitions == 0 {
            return Err(BenchmarkError::InvalidRepetitions {
                value: self.repetitions,
            });
        }
        if self.rows == 0 || self.cols == 0 {
            return Err(BenchmarkError::EmptyMatrix {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows != self.cols {
            return Err(BenchmarkError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

/// Per-repetition means for one case.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    pub rows: usize,
    pub cols: usize,
    pub posit_time: Duration,
    pub comparison_time: Duration,
    pub posit_error: f64,
    /// Only present when the reference is wider than the comparison type.
    pub comparison_error: Option<f64>,
}

impl Display for BenchmarkReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "\t--------Matrix Size: {}x{}--------", self.rows, self.cols)?;
        writeln!(f, "\t Posit Time taken: {}", as_micros_f64(self.posit_time))?;
        writeln!(f, "\t Float Time taken: {}", as_micros_f64(self.comparison_time))?;
        writeln!(f, "\t Posit Mean Absolute Error: {:e}", self.posit_error)?;
        if let Some(error) = self.comparison_error {
            writeln!(f, "\t Float Mean Absolute Error: {:e}", error)?;
        }
        Ok(())
    }
}

/// Times product, sum and difference of `a` and `b` and hands back the product.
pub fn timed_operations<T: BenchScalar>(a: &Array2<T>, b: &Array2<T>) -> (Array2<T>, Duration) {
    let start = Instant::now();
    let product = a.dot(b);
    let sum = a + b;
    let difference = a - b;
    hint::black_box(sum);
    hint::black_box(difference);
    (product, start.elapsed())
}

/// Runs `case` in the precisions of `S`.
///
/// Returns early with a numeric error as soon as a repetition yields a
/// non-finite comparison product or non-finite posit operands; no error
/// metric is computed for that repetition.
pub fn run_benchmark<S: PrecisionSet>(case: &BenchmarkCase) -> BenchmarkResult<BenchmarkReport> {
    case.validate()?;
    let BenchmarkCase {
        rows,
        cols,
        repetitions,
        value_a,
        value_b,
    } = *case;
    debug!(
        "{} at {}x{}: {} repetitions, values ({}, {})",
        S::label(),
        rows,
        cols,
        repetitions,
        value_a,
        value_b
    );

    let posit_a = matrix::filled::<S::Posit>(rows, cols, value_a);
    let posit_b = matrix::filled::<S::Posit>(rows, cols, value_b);
    let comparison_a = matrix::filled::<S::Comparison>(rows, cols, value_a);
    let comparison_b = matrix::filled::<S::Comparison>(rows, cols, value_b);
    let reference_a = matrix::filled::<S::Reference>(rows, cols, value_a);
    let reference_b = matrix::filled::<S::Reference>(rows, cols, value_b);

    let with_comparison_error = S::reports_comparison_error();
    let mut posit_time = TimingAccumulator::default();
    let mut comparison_time = TimingAccumulator::default();
    let mut posit_error = ErrorAccumulator::default();
    let mut comparison_error = ErrorAccumulator::default();

    for repetition in 0..repetitions {
        let (posit_product, posit_elapsed) = timed_operations(&posit_a, &posit_b);
        let (comparison_product, comparison_elapsed) =
            timed_operations(&comparison_a, &comparison_b);
        posit_time.add(posit_elapsed);
        comparison_time.add(comparison_elapsed);
        debug!(
            "repetition {}: posit {:?}, float {:?}",
            repetition, posit_elapsed, comparison_elapsed
        );

        let reference = reference_a.dot(&reference_b);
        let posit_converted: Array2<S::Reference> = matrix::convert(&posit_product);

        if !matrix::all_finite(&comparison_product) {
            return Err(BenchmarkError::NonFiniteComparison { rows, cols });
        }
        if !matrix::all_finite(&posit_a) || !matrix::all_finite(&posit_b) {
            return Err(BenchmarkError::NonFinitePositInput { rows, cols });
        }

        posit_error.add(matrix::mean_absolute_error(&reference, &posit_converted));
        if with_comparison_error {
            let comparison_converted: Array2<S::Reference> = matrix::convert(&comparison_product);
            comparison_error.add(matrix::mean_absolute_error(
                &reference,
                &comparison_converted,
            ));
        }
    }

    Ok(BenchmarkReport {
        rows,
        cols,
        posit_time: posit_time.mean(repetitions),
        comparison_time: comparison_time.mean(repetitions),
        posit_error: posit_error.mean(repetitions),
        comparison_error: with_comparison_error.then(|| comparison_error.mean(repetitions)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number_representations::{Softposit16_1, Softposit32_2};
    use crate::precision::{Posit16VsFloat32, Posit32VsFloat32};
    use ndarray::ScalarOperand;
    use num_traits::{One, Zero};
    use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

    struct Posit16WithDoubleReference;

    impl PrecisionSet for Posit16WithDoubleReference {
        type Posit = Softposit16_1;
        type Comparison = f32;
        type Reference = f64;
    }

    /// An `f64` that maps non-finite literals to zero, so its products are always finite.
    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    struct Clamped(f64);

    impl BenchScalar for Clamped {
        const NAME: &'static str = "clamped";
        const BITS: u32 = 64;

        fn from_f64(value: f64) -> Self {
            Clamped(if value.is_finite() { value } else { 0.0 })
        }
        fn to_f64(self) -> f64 {
            self.0
        }
    }

    impl ScalarOperand for Clamped {}

    impl Zero for Clamped {
        fn zero() -> Self {
            Clamped(0.0)
        }
        fn is_zero(&self) -> bool {
            self.0 == 0.0
        }
    }

    impl One for Clamped {
        fn one() -> Self {
            Clamped(1.0)
        }
    }

    impl Add for Clamped {
        type Output = Self;
        fn add(self, rhs: Self) -> Self::Output {
            Clamped(self.0 + rhs.0)
        }
    }

    impl Sub for Clamped {
        type Output = Self;
        fn sub(self, rhs: Self) -> Self::Output {
            Clamped(self.0 - rhs.0)
        }
    }

    impl Mul for Clamped {
        type Output = Self;
        fn mul(self, rhs: Self) -> Self::Output {
            Clamped(self.0 * rhs.0)
        }
    }

    impl Div for Clamped {
        type Output = Self;
        fn div(self, rhs: Self) -> Self::Output {
            Clamped(self.0 / rhs.0)
        }
    }

    impl Neg for Clamped {
        type Output = Self;
        fn neg(self) -> Self::Output {
            Clamped(-self.0)
        }
    }

    impl AddAssign for Clamped {
        fn add_assign(&mut self, rhs: Self) {
            self.0 += rhs.0;
        }
    }

    impl SubAssign for Clamped {
        fn sub_assign(&mut self, rhs: Self) {
            self.0 -= rhs.0;
        }
    }

    impl Display for Clamped {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    struct Posit32WithClampedComparison;

    impl PrecisionSet for Posit32WithClampedComparison {
        type Posit = Softposit32_2;
        type Comparison = Clamped;
        type Reference = f64;
    }


    #[test]
    fn test_rejects_zero_repetitions() {
        let case = BenchmarkCase::new(10, 10, 0, 1.0, 2.0);
        let err = run_benchmark::<Posit32VsFloat32>(&case).unwrap_err();
        assert!(matches!(err, BenchmarkError::InvalidRepetitions { value: 0 }));
    }

    #[test]
    fn test_rejects_bad_shapes() {
        let empty = BenchmarkCase::new(0, 0, 1, 1.0, 2.0);
        assert!(matches!(
            empty.validate(),
            Err(BenchmarkError::EmptyMatrix { rows: 0, cols: 0 })
        ));
        let rectangular = BenchmarkCase::new(2, 3, 1, 1.0, 2.0);
        assert!(matches!(
            rectangular.validate(),
            Err(BenchmarkError::NotSquare { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn test_exact_products_have_no_error() {
        let case = BenchmarkCase::new(10, 10, 5, 1.0, 2.0);
        let report = run_benchmark::<Posit32VsFloat32>(&case).unwrap();
        assert_eq!((report.rows, report.cols), (10, 10));
        assert_eq!(report.posit_error, 0.0);
        assert_eq!(report.comparison_error, Some(0.0));
    }

    #[test]
    fn test_tiny_values_are_not_reported_non_finite() {
        let case = BenchmarkCase::new(20, 20, 2, 1.0e-5, 2.0e-5);
        let report = run_benchmark::<Posit32VsFloat32>(&case).unwrap();
        assert!(report.posit_error.is_finite());
        assert!(report.posit_error < 1.0e-12);
        assert!(report.comparison_error.unwrap() < 1.0e-12);

        assert!(run_benchmark::<Posit16VsFloat32>(&case).is_ok());
    }

    #[test]
    fn test_overflowing_float_product_stops_early() {
        let case = BenchmarkCase::new(10, 10, 3, 1.0e20, 1.0e20);
        let err = run_benchmark::<Posit32VsFloat32>(&case).unwrap_err();
        assert!(matches!(
            err,
            BenchmarkError::NonFiniteComparison { rows: 10, cols: 10 }
        ));
        assert!(err.is_numeric());
    }

    #[test]
    fn test_nan_input_stops_early() {
        let case = BenchmarkCase::new(5, 5, 1, f64::NAN, 1.0);
        let err = run_benchmark::<Posit16VsFloat32>(&case).unwrap_err();
        assert!(matches!(
            err,
            BenchmarkError::NonFiniteComparison { rows: 5, cols: 5 }
        ));
    }

    #[test]
    fn test_nar_posit_input_stops_early() {
        let case = BenchmarkCase::new(5, 5, 2, f64::NAN, 1.0);
        let err = run_benchmark::<Posit32WithClampedComparison>(&case).unwrap_err();
        assert!(matches!(
            err,
            BenchmarkError::NonFinitePositInput { rows: 5, cols: 5 }
        ));
        assert!(err.is_numeric());
    }

    #[test]
    fn test_small_errors_use_exponent_notation() {
        let report = BenchmarkReport {
            rows: 10,
            cols: 10,
            posit_time: Duration::from_micros(1),
            comparison_time: Duration::from_micros(1),
            posit_error: 1.6548e-16,
            comparison_error: None,
        };
        assert!(
            report
                .to_string()
                .contains("\t Posit Mean Absolute Error: 1.6548e-16\n")
        );
    }

    #[test]
    fn test_narrow_posit_is_less_accurate_than_f32() {
        let case = BenchmarkCase::new(10, 10, 1, 1.0 / 3.0, 1.0);
        let report = run_benchmark::<Posit16WithDoubleReference>(&case).unwrap();
        let float_error = report.comparison_error.unwrap();
        assert!(
            report.posit_error > float_error,
            "posit16 error {} should exceed f32 error {}",
            report.posit_error,
            float_error
        );
    }

    #[test]
    fn test_two_precision_report_omits_float_error() {
        let case = BenchmarkCase::new(10, 10, 2, 1.0, 2.0);
        let report = run_benchmark::<Posit16VsFloat32>(&case).unwrap();
        assert_eq!(report.comparison_error, None);
        assert!(!report.to_string().contains("Float Mean Absolute Error"));
    }

    #[test]
    fn test_report_layout() {
        let report = BenchmarkReport {
            rows: 20,
            cols: 20,
            posit_time: Duration::from_micros(150),
            comparison_time: Duration::from_micros(3),
            posit_error: 0.5,
            comparison_error: Some(0.25),
        };
        assert_eq!(
            report.to_string(),
            "\t--------Matrix Size: 20x20--------\n\
             \t Posit Time taken: 150\n\
             \t Float Time taken: 3\n\
             \t Posit Mean Absolute Error: 5e-1\n\
             \t Float Mean Absolute Error: 2.5e-1\n"
        );
    }
}
