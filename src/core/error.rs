use std::fmt::{Display, Formatter};

use crate::core::ThermocoupleType;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The compensated voltage lies outside every calibrated segment.
    OutOfRange {
        thermocouple: ThermocoupleType,
        millivolts: f64,
    },
    UnknownType(String),
    UnknownTypeCode(u8),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::OutOfRange {
                thermocouple,
                millivolts,
            } => write!(
                f,
                "{millivolts}mV is outside the calibrated range of type {thermocouple}"
            ),
            Error::UnknownType(name) => write!(f, "unknown thermocouple type {name:?}"),
            Error::UnknownTypeCode(code) => write!(f, "unknown thermocouple type code {code:#04x}"),
        }
    }
}

impl std::error::Error for Error {}
