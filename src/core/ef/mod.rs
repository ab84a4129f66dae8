pub mod thermocouple;

pub use thermocouple::*;
