pub mod core;
pub mod float;
pub mod softposit;

pub use self::core::BenchScalar;
pub use self::softposit::{softposit16_1::Softposit16_1, softposit32_2::Softposit32_2};
