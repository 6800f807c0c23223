use crate::number_representations::core::BenchScalar;

impl BenchScalar for f64 {
    const NAME: &'static str = "f64";
    const BITS: u32 = 64;

    fn from_f64(value: f64) -> Self {
        value
    }
    fn to_f64(self) -> f64 {
        self
    }
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}
