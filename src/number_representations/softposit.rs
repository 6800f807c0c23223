pub mod softposit16_1;
pub mod softposit32_2;
