//! C entry points for firmware that cannot consume Rust types directly.
//!
//! The thermocouple type is passed as its ASCII letter (`'K'`), and every
//! failure is reported as [`OUT_OF_RANGE`].

use log::warn;

use crate::core::{Thermocouple, ThermocoupleType, OUT_OF_RANGE};

fn lookup(type_code: u8) -> Option<Thermocouple> {
    match ThermocoupleType::try_from(type_code) {
        Ok(kind) => Some(Thermocouple(kind)),
        Err(error) => {
            warn!("Rejecting conversion request, {}", error);
            None
        }
    }
}

#[no_mangle]
pub extern "C" fn thermocouple_get_temperature(
    type_code: u8,
    millivolts: f64,
    cold_junction: f64,
) -> f64 {
    lookup(type_code)
        .map(|thermocouple| thermocouple.get_temperature(millivolts, cold_junction))
        .unwrap_or(OUT_OF_RANGE)
}

#[no_mangle]
pub extern "C" fn thermocouple_get_temperature_f32(
    type_code: u8,
    millivolts: f32,
    cold_junction: f32,
) -> f32 {
    lookup(type_code)
        .map(|thermocouple| thermocouple.get_temperature_f32(millivolts, cold_junction))
        .unwrap_or(OUT_OF_RANGE as f32)
}
