//! # Identifier validation and codecs
//!
//! This module defines the three identifier families of the acquisition grid and their
//! string codecs:
//!
//! - [`PathId`] — one of the 233 fixed ground tracks (`P004`)
//! - [`BlockId`] — one of the 180 along-track segments of a path (`B111`)
//! - [`OrbitId`] — a single numbered revolution (`O068050`)
//!
//! ## Overview
//!
//! Each identifier is a newtype obtainable only through range-checked construction
//! (`new`) or decoding (`FromStr`), so holding one is proof that the number lies
//! inside its closed domain. Encoding through `Display` always yields the canonical
//! form: the uppercase prefix letter followed by the zero-padded number.
//!
//! Decoding is deliberately more tolerant than encoding: outer whitespace, a
//! lowercase prefix letter, and whitespace between the prefix and the digits are
//! all accepted. Paths and blocks additionally accept the bare-digit spelling;
//! an orbit number without its `O` prefix is rejected, a bare count of that
//! magnitude being too easy to mistake for another quantity.
//!
//! Every tolerated spelling re-encodes to the same canonical string, so decoding
//! then encoding acts as a normalizer for identifier text of any provenance.

pub mod block;
pub mod orbit;
pub mod path;

pub use block::BlockId;
pub use orbit::OrbitId;
pub use path::PathId;

use std::fmt;

use thiserror::Error;

use crate::constants::{BLOCK_MAX, BLOCK_MIN, ORBIT_MAX, ORBIT_MIN, PATH_MAX, PATH_MIN};

/// The three identifier families of the acquisition grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Path,
    Block,
    Orbit,
}

impl IdentifierKind {
    /// Prefix letter of the canonical string form.
    pub fn prefix(self) -> char {
        match self {
            IdentifierKind::Path => 'P',
            IdentifierKind::Block => 'B',
            IdentifierKind::Orbit => 'O',
        }
    }

    /// Closed bounds of the numeric domain.
    pub fn bounds(self) -> (i64, i64) {
        match self {
            IdentifierKind::Path => (PATH_MIN, PATH_MAX),
            IdentifierKind::Block => (BLOCK_MIN, BLOCK_MAX),
            IdentifierKind::Orbit => (ORBIT_MIN, ORBIT_MAX),
        }
    }

    /// Whether the prefix letter is mandatory on decode.
    fn prefix_required(self) -> bool {
        matches!(self, IdentifierKind::Orbit)
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierKind::Path => write!(f, "PATH"),
            IdentifierKind::Block => write!(f, "BLOCK"),
            IdentifierKind::Orbit => write!(f, "ORBIT"),
        }
    }
}

/// A numeric identifier lying outside the closed bounds of its domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} {value} is outside the valid range [{min}, {max}]")]
pub struct RangeError {
    pub kind: IdentifierKind,
    pub value: i64,
    pub min: i64,
    pub max: i64,
}

/// String-level decoding errors shared by the identifier `FromStr` impls.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseIdError {
    #[error("empty {0} identifier")]
    Empty(IdentifierKind),

    #[error("missing mandatory '{}' prefix in {} identifier: {:?}", .kind.prefix(), .kind, .input)]
    MissingPrefix { kind: IdentifierKind, input: String },

    #[error("non-numeric {kind} identifier: {input:?}")]
    NotANumber { kind: IdentifierKind, input: String },

    #[error(transparent)]
    OutOfRange(#[from] RangeError),
}

/// Check a raw number against the closed bounds of an identifier domain.
pub(crate) fn check_range(kind: IdentifierKind, value: i64) -> Result<(), RangeError> {
    let (min, max) = kind.bounds();
    if value < min || value > max {
        return Err(RangeError {
            kind,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Tolerant decode shared by the identifier `FromStr` impls.
///
/// Outer whitespace is trimmed, the prefix letter is stripped case-insensitively
/// when present, whitespace inside the remainder is removed, and the remainder
/// is parsed as an integer. Range validation is left to the caller.
pub(crate) fn decode_identifier(kind: IdentifierKind, input: &str) -> Result<i64, ParseIdError> {
    let trimmed = input.trim();
    let Some(first) = trimmed.chars().next() else {
        return Err(ParseIdError::Empty(kind));
    };

    let remainder = if first.eq_ignore_ascii_case(&kind.prefix()) {
        &trimmed[first.len_utf8()..]
    } else if kind.prefix_required() {
        return Err(ParseIdError::MissingPrefix {
            kind,
            input: trimmed.to_string(),
        });
    } else {
        trimmed
    };

    let digits: String = remainder.chars().filter(|c| !c.is_whitespace()).collect();
    digits.parse::<i64>().map_err(|_| ParseIdError::NotANumber {
        kind,
        input: trimmed.to_string(),
    })
}
