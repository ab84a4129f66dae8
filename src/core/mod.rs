pub mod conversion;
pub mod data_types;
pub mod ef;
pub mod error;
pub mod ffi;
pub mod func;
pub mod sets;

pub use conversion::*;
pub use data_types::*;
pub use ef::Thermocouple;
pub use error::*;
pub use sets::*;

/// Returned by the numeric entry points when a voltage lies outside every
/// calibrated segment of the selected thermocouple type. Degrees Celsius.
pub const OUT_OF_RANGE: f64 = -1000.0;
