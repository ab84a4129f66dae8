use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Error, TypeProfile};
use crate::prelude::tables;

enum_from_primitive! {
    /// The standardised thermocouple letter designations.
    ///
    /// The discriminant is the ASCII letter, which is also the code accepted
    /// by the C entry points in [`crate::core::ffi`].
    #[repr(u8)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum ThermocoupleType {
        TypeB = b'B',
        TypeE = b'E',
        TypeJ = b'J',
        TypeK = b'K',
        TypeN = b'N',
        TypeR = b'R',
        TypeS = b'S',
        TypeT = b'T'
    }
}

impl ThermocoupleType {
    pub const ALL: [ThermocoupleType; 8] = [
        ThermocoupleType::TypeB,
        ThermocoupleType::TypeE,
        ThermocoupleType::TypeJ,
        ThermocoupleType::TypeK,
        ThermocoupleType::TypeN,
        ThermocoupleType::TypeR,
        ThermocoupleType::TypeS,
        ThermocoupleType::TypeT,
    ];

    /// The calibration data backing this type.
    pub fn profile(&self) -> &'static TypeProfile {
        match self {
            ThermocoupleType::TypeB => &tables::TYPE_B,
            ThermocoupleType::TypeE => &tables::TYPE_E,
            ThermocoupleType::TypeJ => &tables::TYPE_J,
            ThermocoupleType::TypeK => &tables::TYPE_K,
            ThermocoupleType::TypeN => &tables::TYPE_N,
            ThermocoupleType::TypeR => &tables::TYPE_R,
            ThermocoupleType::TypeS => &tables::TYPE_S,
            ThermocoupleType::TypeT => &tables::TYPE_T,
        }
    }

    pub const fn letter(&self) -> char {
        *self as u8 as char
    }
}

impl Display for ThermocoupleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for ThermocoupleType {
    type Err = Error;

    /// Accepts `K`, `k`, `TypeK` and `Type K`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let letter = trimmed
            .strip_prefix("Type")
            .or_else(|| trimmed.strip_prefix("type"))
            .map(str::trim_start)
            .unwrap_or(trimmed);

        let mut chars = letter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => ThermocoupleType::ALL
                .into_iter()
                .find(|kind| kind.letter() == c.to_ascii_uppercase())
                .ok_or_else(|| Error::UnknownType(value.to_string())),
            _ => Err(Error::UnknownType(value.to_string())),
        }
    }
}

impl TryFrom<u8> for ThermocoupleType {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        use enum_primitive::FromPrimitive;

        ThermocoupleType::from_u8(code).ok_or(Error::UnknownTypeCode(code))
    }
}
