use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{check_range, decode_identifier, IdentifierKind, ParseIdError, RangeError};

/// One of the 180 fixed along-track segments of a path.
///
/// Canonical form `B###`; decoding tolerates the same spellings as
/// [`PathId`](super::PathId), the bare-digit form included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId(u16);

impl BlockId {
    /// Validate a raw number against the BLOCK domain `[1, 180]`.
    pub fn new(value: i64) -> Result<Self, RangeError> {
        check_range(IdentifierKind::Block, value)?;
        Ok(BlockId(value as u16))
    }

    pub(crate) fn new_unchecked(value: u16) -> Self {
        BlockId(value)
    }

    /// The raw block number.
    pub fn number(self) -> u16 {
        self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{:03}", self.0)
    }
}

impl FromStr for BlockId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = decode_identifier(IdentifierKind::Block, s)?;
        Ok(BlockId::new(value)?)
    }
}

impl Serialize for BlockId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BlockId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
