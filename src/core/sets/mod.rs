pub mod thermocouple_type;

pub use thermocouple_type::*;
