use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{check_range, decode_identifier, IdentifierKind, ParseIdError, RangeError};

/// A single numbered revolution of the platform.
///
/// The domain `[995, 112000]` starts at the first orbit carrying operational
/// data. Canonical form `O######`, six zero-padded digits.
///
/// Unlike paths and blocks, the prefix letter is mandatory on decode: a bare
/// number of this magnitude is too easy to mistake for another quantity, so
/// `"68050"` is rejected where `"O068050"` is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrbitId(u32);

impl OrbitId {
    /// Validate a raw number against the ORBIT domain.
    pub fn new(value: i64) -> Result<Self, RangeError> {
        check_range(IdentifierKind::Orbit, value)?;
        Ok(OrbitId(value as u32))
    }

    /// The raw orbit number.
    pub fn number(self) -> u32 {
        self.0
    }
}

impl fmt::Display for OrbitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "O{:06}", self.0)
    }
}

impl FromStr for OrbitId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = decode_identifier(IdentifierKind::Orbit, s)?;
        Ok(OrbitId::new(value)?)
    }
}

impl Serialize for OrbitId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for OrbitId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
