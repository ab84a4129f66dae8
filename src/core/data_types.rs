use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{func, Adc, Dac, ThermocoupleType, OUT_OF_RANGE};

/// One fitted segment of the inverse (voltage to temperature) conversion.
///
/// `p` holds `p1..p4` and `q` holds `q1..q3` in the order they are published.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoefficientSet {
    pub t0: f64,
    pub v0: f64,
    pub p: [f64; 4],
    pub q: [f64; 3],
}

/// The cold-junction fit: the same shape as [`CoefficientSet`] without `q3`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColdJunctionCoefficients {
    pub t0: f64,
    pub v0: f64,
    pub p: [f64; 4],
    pub q: [f64; 2],
}

/// Which end of a [`VoltageRange`] is closed.
///
/// The published tables are not uniform here, so a shared boundary voltage
/// belongs to whichever segment the type's rule assigns it to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Inclusivity {
    /// `[low, high)`
    ClosedLow,
    /// `(low, high]`
    ClosedHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoltageRange {
    pub low: f64,
    pub high: f64,
    pub inclusivity: Inclusivity,
}

impl VoltageRange {
    /// NaN is never contained.
    #[inline]
    pub fn contains(&self, millivolts: f64) -> bool {
        match self.inclusivity {
            Inclusivity::ClosedLow => self.low <= millivolts && millivolts < self.high,
            Inclusivity::ClosedHigh => self.low < millivolts && millivolts <= self.high,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub range: VoltageRange,
    pub coefficients: CoefficientSet,
}

/// The complete calibration of one thermocouple type.
///
/// Instances are generated at build time into [`crate::prelude::tables`] and
/// are only ever borrowed; see [`ThermocoupleType::profile`].
#[derive(Debug, PartialEq, Serialize)]
pub struct TypeProfile {
    pub kind: ThermocoupleType,
    pub alloys: &'static str,
    pub cold_junction: ColdJunctionCoefficients,
    pub segments: &'static [Segment],
}

impl TypeProfile {
    /// Voltage equivalent (mV) of the cold junction sitting at `celsius`.
    ///
    /// Inputs are not range checked. Far outside the fit's ambient range the
    /// result is numerically meaningless, but it is never the sentinel.
    pub fn cold_junction_voltage(&self, celsius: f64) -> f64 {
        func::cold_junction(celsius, &self.cold_junction)
    }

    /// The first segment whose range contains `millivolts`.
    pub fn segment_for(&self, millivolts: f64) -> Option<&'static Segment> {
        self.segments
            .iter()
            .find(|segment| segment.range.contains(millivolts))
    }

    /// Converts an already compensated voltage into a temperature.
    pub fn compute_temperature(&self, millivolts: f64) -> Conversion {
        match self.segment_for(millivolts) {
            Some(segment) => {
                trace!(
                    "Type {} {}mV selected segment {:?}",
                    self.kind,
                    millivolts,
                    segment.range
                );
                Conversion::Temperature(func::inverse(millivolts, &segment.coefficients))
            }
            None => {
                debug!(
                    "{}mV lies outside the calibrated domain of type {}",
                    millivolts, self.kind
                );
                Conversion::OutOfRange
            }
        }
    }

    /// The calibrated millivolt domain as `(low, high)`, using the same
    /// inclusivity as the segments.
    pub fn domain(&self) -> VoltageRange {
        let low = self.segments.first().map(|s| s.range.low).unwrap_or(f64::NAN);
        let high = self.segments.last().map(|s| s.range.high).unwrap_or(f64::NAN);
        let inclusivity = self
            .segments
            .first()
            .map(|s| s.range.inclusivity)
            .unwrap_or(Inclusivity::ClosedLow);

        VoltageRange {
            low,
            high,
            inclusivity,
        }
    }

    /// The voltages shared by neighbouring segments, in increasing order.
    pub fn boundaries(&self) -> impl Iterator<Item = f64> + '_ {
        self.segments
            .windows(2)
            .map(|pair| pair[0].range.high)
    }
}

impl Adc<()> for TypeProfile {
    type Digital = Conversion;

    #[inline]
    fn to_digital(&self, _: (), millivolts: f64) -> Self::Digital {
        self.compute_temperature(millivolts)
    }
}

impl Dac for TypeProfile {
    type Digital = f64;

    #[inline]
    fn to_voltage(&self, digital: Self::Digital) -> f64 {
        self.cold_junction_voltage(digital)
    }
}

/// The outcome of a conversion. There are no partial results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Conversion {
    Temperature(f64),
    OutOfRange,
}

impl Conversion {
    /// Interprets a value returned by one of the numeric entry points.
    pub fn from_sentinel(celsius: f64) -> Conversion {
        if celsius == OUT_OF_RANGE {
            Conversion::OutOfRange
        } else {
            Conversion::Temperature(celsius)
        }
    }

    /// Collapses into the numeric convention, using [`OUT_OF_RANGE`].
    pub fn or_sentinel(self) -> f64 {
        match self {
            Conversion::Temperature(celsius) => celsius,
            Conversion::OutOfRange => OUT_OF_RANGE,
        }
    }

    pub const fn temperature(self) -> Option<f64> {
        match self {
            Conversion::Temperature(celsius) => Some(celsius),
            Conversion::OutOfRange => None,
        }
    }

    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Conversion::OutOfRange)
    }
}

impl From<Conversion> for Option<f64> {
    fn from(conversion: Conversion) -> Self {
        conversion.temperature()
    }
}

/// A raw thermocouple reading as it arrives from an acquisition front end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub thermocouple: ThermocoupleType,
    /// Measured thermoelectric voltage, mV.
    pub millivolts: f64,
    /// Cold-junction temperature, °C.
    pub cold_junction: f64,
}

impl Reading {
    pub fn convert(&self) -> Conversion {
        crate::core::Thermocouple(self.thermocouple).temperature(self.millivolts, self.cold_junction)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn range(inclusivity: Inclusivity) -> VoltageRange {
        VoltageRange {
            low: -1.0,
            high: 2.0,
            inclusivity,
        }
    }

    #[test]
    fn closed_low_range() {
        let range = range(Inclusivity::ClosedLow);
        assert!(range.contains(-1.0));
        assert!(range.contains(0.5));
        assert!(!range.contains(2.0));
        assert!(!range.contains(-1.000001));
        assert!(!range.contains(f64::NAN));
    }

    #[test]
    fn closed_high_range() {
        let range = range(Inclusivity::ClosedHigh);
        assert!(!range.contains(-1.0));
        assert!(range.contains(0.5));
        assert!(range.contains(2.0));
        assert!(!range.contains(2.000001));
        assert!(!range.contains(f64::NAN));
    }

    #[test]
    fn sentinel_round_trip() {
        assert_eq!(Conversion::from_sentinel(OUT_OF_RANGE), Conversion::OutOfRange);
        assert_eq!(
            Conversion::from_sentinel(21.5),
            Conversion::Temperature(21.5)
        );
        assert_eq!(Conversion::OutOfRange.or_sentinel(), -1000.0);
        assert_eq!(Option::<f64>::from(Conversion::OutOfRange), None);
        assert_eq!(Conversion::Temperature(3.0).temperature(), Some(3.0));
        assert!(Conversion::OutOfRange.is_out_of_range());
    }

    #[test]
    fn profile_domain_and_boundaries() {
        let profile = ThermocoupleType::TypeK.profile();
        let domain = profile.domain();

        assert_eq!(domain.low, -6.404);
        assert_eq!(domain.high, 69.553);
        assert_eq!(domain.inclusivity, Inclusivity::ClosedHigh);
        assert_eq!(
            profile.boundaries().collect::<Vec<_>>(),
            vec![-3.554, 4.096, 16.397, 33.275]
        );
    }

    #[test]
    fn profile_as_adc_and_dac() {
        let profile = ThermocoupleType::TypeJ.profile();

        assert_eq!(
            profile.to_digital((), 13.592329),
            profile.compute_temperature(13.592329)
        );
        assert_eq!(profile.to_voltage(25.0), profile.cold_junction.v0);
    }

    #[test]
    fn reading_serialises() {
        let reading = Reading {
            thermocouple: ThermocoupleType::TypeK,
            millivolts: 10.0,
            cold_junction: 25.0,
        };

        let json = serde_json::to_string(&reading).unwrap();
        let decoded: Reading = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, reading);
        assert_eq!(decoded.convert(), reading.convert());

        let value = serde_json::to_value(Conversion::OutOfRange).unwrap();
        assert_eq!(value, serde_json::json!("OutOfRange"));
    }
}
