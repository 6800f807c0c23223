use crate::number_representations::core::BenchScalar;

impl BenchScalar for f32 {
    const NAME: &'static str = "f32";
    const BITS: u32 = 32;

    fn from_f64(value: f64) -> Self {
        value as f32
    }
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}
