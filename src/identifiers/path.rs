//! Ground-track (PATH) identifier: validating constructor, canonical codec,
//! and the bare-digit alternate form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{check_range, decode_identifier, IdentifierKind, ParseIdError, RangeError};

/// One of the 233 fixed ground tracks of the repeat cycle.
///
/// A `PathId` can only be obtained through range-checked construction
/// ([`PathId::new`]) or decoding ([`FromStr`]), so holding one is proof that
/// the number lies within the PATH domain `[1, 233]`.
///
/// The canonical string form is the uppercase prefix letter followed by three
/// zero-padded digits. Decoding tolerates surrounding whitespace, a lowercase
/// prefix, whitespace after the prefix, and the bare-digit spelling.
///
/// ```
/// use misrkit::PathId;
///
/// let path: PathId = " p 004 ".parse().unwrap();
/// assert_eq!(path, PathId::new(4).unwrap());
/// assert_eq!(path.to_string(), "P004");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathId(u16);

impl PathId {
    /// Validate a raw number against the PATH domain.
    ///
    /// Arguments
    /// -----------------
    /// * `value`: the raw path number
    ///
    /// Return
    /// ----------
    /// * The validated identifier, or a [`RangeError`] carrying the offending
    ///   value and both bounds.
    pub fn new(value: i64) -> Result<Self, RangeError> {
        check_range(IdentifierKind::Path, value)?;
        Ok(PathId(value as u16))
    }

    /// Build a `PathId` from a number already proven to lie in the domain.
    /// Reserved for iteration between two validated endpoints.
    pub(crate) fn new_unchecked(value: u16) -> Self {
        PathId(value)
    }

    /// The raw path number.
    pub fn number(self) -> u16 {
        self.0
    }

    /// The bare-digit alternate form (`"004"`), for call sites writing paths
    /// without the prefix letter. [`FromStr`] accepts both spellings.
    pub fn bare(self) -> String {
        format!("{:03}", self.0)
    }
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{:03}", self.0)
    }
}

impl FromStr for PathId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = decode_identifier(IdentifierKind::Path, s)?;
        Ok(PathId::new(value)?)
    }
}

impl Serialize for PathId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PathId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
