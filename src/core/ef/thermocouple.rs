//! Thermocouple linearisation using the rational function approximations
//! published by Mosaic Industries, seen [here](http://www.mosaic-industries.com/embedded-systems/microcontroller-projects/temperature-measurement/thermocouple/calibration-table).
//!
//! Compared to the NIST ITS-90 inverse polynomials these need a handful of
//! multiplications and a single division per reading, with lower error.
//!
//! ```rust
//! use thermocouple::prelude::*;
//!
//! // 10mV across a type K junction whose terminals sit at 25°C.
//! let celsius = Thermocouple::TYPE_K.get_temperature(10.0, 25.0);
//! assert!(celsius > 270.0 && celsius < 271.0);
//!
//! // Voltages outside the calibrated range produce the sentinel.
//! assert_eq!(Thermocouple::TYPE_K.get_temperature(90.0, 25.0), OUT_OF_RANGE);
//! ```

use num::{Float, NumCast};
use serde::{Deserialize, Serialize};

use crate::core::{Adc, Conversion, Dac, Error, ThermocoupleType, TypeProfile, VoltageRange};

/// A thermocouple of a given type. Holds no state between readings, so one
/// value may be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Thermocouple(pub ThermocoupleType);

impl Thermocouple {
    pub const TYPE_B: Thermocouple = Thermocouple(ThermocoupleType::TypeB);
    pub const TYPE_E: Thermocouple = Thermocouple(ThermocoupleType::TypeE);
    pub const TYPE_J: Thermocouple = Thermocouple(ThermocoupleType::TypeJ);
    pub const TYPE_K: Thermocouple = Thermocouple(ThermocoupleType::TypeK);
    pub const TYPE_N: Thermocouple = Thermocouple(ThermocoupleType::TypeN);
    pub const TYPE_R: Thermocouple = Thermocouple(ThermocoupleType::TypeR);
    pub const TYPE_S: Thermocouple = Thermocouple(ThermocoupleType::TypeS);
    pub const TYPE_T: Thermocouple = Thermocouple(ThermocoupleType::TypeT);

    pub const fn kind(&self) -> ThermocoupleType {
        self.0
    }

    pub fn profile(&self) -> &'static TypeProfile {
        self.0.profile()
    }

    /// Voltage (mV) the thermocouple would produce between 0°C and the
    /// cold junction at `celsius`. Never range checked.
    pub fn cold_junction_voltage(&self, celsius: f64) -> f64 {
        self.profile().cold_junction_voltage(celsius)
    }

    /// Converts a voltage that already includes the cold-junction term.
    pub fn compute_temperature(&self, millivolts: f64) -> Conversion {
        self.profile().compute_temperature(millivolts)
    }

    /// Converts a measured voltage (mV) with the cold junction at
    /// `cold_junction` (°C) into a temperature.
    pub fn temperature(&self, millivolts: f64, cold_junction: f64) -> Conversion {
        let compensation = self.cold_junction_voltage(cold_junction);
        self.compute_temperature(millivolts + compensation)
    }

    /// As [`Thermocouple::temperature`], reporting an out of range voltage as
    /// [`Error::OutOfRange`].
    pub fn try_temperature(&self, millivolts: f64, cold_junction: f64) -> Result<f64, Error> {
        let compensated = millivolts + self.cold_junction_voltage(cold_junction);
        self.compute_temperature(compensated)
            .temperature()
            .ok_or(Error::OutOfRange {
                thermocouple: self.0,
                millivolts: compensated,
            })
    }

    /// Temperature in °C, or [`crate::core::OUT_OF_RANGE`].
    pub fn get_temperature(&self, millivolts: f64, cold_junction: f64) -> f64 {
        self.temperature(millivolts, cold_junction).or_sentinel()
    }

    /// Reduced precision entry point. The arithmetic is still carried out in
    /// `f64`; only the inputs and the result are `f32`.
    pub fn get_temperature_f32(&self, millivolts: f32, cold_junction: f32) -> f32 {
        self.get_temperature_as(millivolts, cold_junction)
    }

    /// Widens to `f64`, converts, then narrows back to `F`. A value that
    /// cannot be represented either way becomes NaN, which in turn converts
    /// to the sentinel.
    pub fn get_temperature_as<F: Float>(&self, millivolts: F, cold_junction: F) -> F {
        let millivolts = millivolts.to_f64().unwrap_or(f64::NAN);
        let cold_junction = cold_junction.to_f64().unwrap_or(f64::NAN);

        let celsius = self.get_temperature(millivolts, cold_junction);
        <F as NumCast>::from(celsius).unwrap_or_else(F::nan)
    }

    /// The compensated voltage interval the tables cover.
    pub fn millivolt_domain(&self) -> VoltageRange {
        self.profile().domain()
    }
}

impl From<ThermocoupleType> for Thermocouple {
    fn from(kind: ThermocoupleType) -> Self {
        Thermocouple(kind)
    }
}

/// The context is the cold-junction temperature (°C).
impl Adc<f64> for Thermocouple {
    type Digital = Conversion;

    #[inline]
    fn to_digital(&self, cold_junction: f64, millivolts: f64) -> Self::Digital {
        self.temperature(millivolts, cold_junction)
    }
}

impl Dac for Thermocouple {
    type Digital = f64;

    #[inline]
    fn to_voltage(&self, cold_junction: Self::Digital) -> f64 {
        self.cold_junction_voltage(cold_junction)
    }
}
