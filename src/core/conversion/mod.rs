pub mod adc;
pub mod dac;

pub use adc::*;
pub use dac::*;
