//! # Range normalization
//!
//! This module defines the ordered range types ([`PathRange`], [`BlockRange`],
//! [`DateRange`]) and the [`normalize`] step that turns a raw path/date request
//! into the canonical query parameters the orbit catalog adapters consume.
//!
//! ## Overview
//!
//! Users hand over two path numbers and two `YYYY-MM-DD` dates in whatever order
//! they come. Normalization:
//!
//! 1. validates both paths against the PATH domain,
//! 2. parses both dates,
//! 3. swaps the paths into ascending order,
//! 4. swaps the dates into chronological order (compared on day ordinals),
//! 5. floors the window to the mission epoch (2000-02-24),
//! 6. expands it to whole days: 00:00:00 on the first day, 23:59:59 on the last.
//!
//! Every failure is reported before any catalog call is attempted, and the
//! caller's inputs are never mutated. Swapping and epoch flooring are silent
//! corrections: out-of-order requests and requests reaching before the first
//! day of data are legitimate, only out-of-domain values are errors.

use std::fmt;

use hifitime::Epoch;

use crate::constants::MISSION_EPOCH_MJD;
use crate::identifiers::{BlockId, PathId};
use crate::misrkit_errors::MisrKitError;
use crate::time::{self, day_ordinal};

// -------------------------------------------------------------------------------------------------
// Path range
// -------------------------------------------------------------------------------------------------

/// An ascending pair of path identifiers, endpoints included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathRange {
    first: PathId,
    last: PathId,
}

impl PathRange {
    /// Build the range, swapping the endpoints into ascending order.
    pub fn new(a: PathId, b: PathId) -> Self {
        if a <= b {
            PathRange { first: a, last: b }
        } else {
            PathRange { first: b, last: a }
        }
    }

    pub fn first(&self) -> PathId {
        self.first
    }

    pub fn last(&self) -> PathId {
        self.last
    }

    /// Number of paths in the range, endpoints included.
    pub fn len(&self) -> usize {
        (self.last.number() - self.first.number()) as usize + 1
    }

    pub fn contains(&self, path: PathId) -> bool {
        self.first <= path && path <= self.last
    }

    /// Iterate the paths in ascending order. Intermediate identifiers are
    /// rebuilt without re-validation: both endpoints are already proven valid
    /// and the domain is contiguous.
    pub fn iter(&self) -> impl Iterator<Item = PathId> {
        (self.first.number()..=self.last.number()).map(PathId::new_unchecked)
    }
}

impl fmt::Display for PathRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.first, self.last)
    }
}

// -------------------------------------------------------------------------------------------------
// Block range
// -------------------------------------------------------------------------------------------------

/// An ascending pair of block identifiers, endpoints included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    first: BlockId,
    last: BlockId,
}

impl BlockRange {
    /// Build the range, swapping the endpoints into ascending order.
    pub fn new(a: BlockId, b: BlockId) -> Self {
        if a <= b {
            BlockRange { first: a, last: b }
        } else {
            BlockRange { first: b, last: a }
        }
    }

    pub fn first(&self) -> BlockId {
        self.first
    }

    pub fn last(&self) -> BlockId {
        self.last
    }

    /// Number of blocks in the range, endpoints included.
    pub fn len(&self) -> usize {
        (self.last.number() - self.first.number()) as usize + 1
    }

    pub fn contains(&self, block: BlockId) -> bool {
        self.first <= block && block <= self.last
    }

    /// Iterate the blocks in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = BlockId> {
        (self.first.number()..=self.last.number()).map(BlockId::new_unchecked)
    }
}

impl fmt::Display for BlockRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.first, self.last)
    }
}

// -------------------------------------------------------------------------------------------------
// Date range
// -------------------------------------------------------------------------------------------------

/// A chronologically ascending pair of instants bounding whole UTC days.
///
/// Construction reorders the two dates, floors both to the mission epoch, and
/// expands them to the start and end of their calendar days, the window
/// grammar the orbit catalog expects. A window lying entirely before the
/// epoch collapses to the epoch day itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    start: Epoch,
    end: Epoch,
}

impl DateRange {
    /// Build the normalized window from two calendar-day instants.
    ///
    /// Arguments
    /// -----------------
    /// * `a`, `b`: two instants, each standing for its UTC calendar day, in
    ///   either order
    ///
    /// Return
    /// ----------
    /// * the window running from 00:00:00 on the earlier day to 23:59:59 on
    ///   the later day, with both days floored to the mission epoch
    pub fn new(a: Epoch, b: Epoch) -> Self {
        let (start, end) = if day_ordinal(&a) > day_ordinal(&b) {
            (b, a)
        } else {
            (a, b)
        };

        let start = clamp_to_mission_epoch(start);
        let end = clamp_to_mission_epoch(end);

        DateRange {
            start: time::start_of_day(&start),
            end: time::end_of_day(&end),
        }
    }

    /// Start of the window (00:00:00 UTC on the first day).
    pub fn start(&self) -> Epoch {
        self.start
    }

    /// End of the window (23:59:59 UTC on the last day).
    pub fn end(&self) -> Epoch {
        self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}]",
            time::format_catalog_timestamp(&self.start),
            time::format_catalog_timestamp(&self.end)
        )
    }
}

fn clamp_to_mission_epoch(date: Epoch) -> Epoch {
    if day_ordinal(&date) < MISSION_EPOCH_MJD {
        time::mission_epoch()
    } else {
        date
    }
}

// -------------------------------------------------------------------------------------------------
// Request normalization
// -------------------------------------------------------------------------------------------------

/// Normalize a raw orbit-listing request into canonical query parameters.
///
/// The two paths are validated and swapped into ascending order; the two
/// `YYYY-MM-DD` dates are parsed, compared on their day ordinals and swapped
/// into chronological order; the window is floored to the mission epoch
/// (2000-02-24) and expanded to start-of-day / end-of-day instants.
///
/// No catalog query happens here: the caller runs one query per path of the
/// returned range, in ascending order (see
/// [`OrbitListing::query`](crate::orbit_catalog::OrbitListing::query)).
///
/// ```
/// use misrkit::normalize;
/// use misrkit::time::format_catalog_timestamp;
///
/// let (paths, dates) = normalize(169, 168, "2010-01-31", "2010-01-01").unwrap();
/// assert_eq!(paths.first().to_string(), "P168");
/// assert_eq!(paths.last().to_string(), "P169");
/// assert_eq!(format_catalog_timestamp(&dates.start()), "2010-01-01T00:00:00Z");
/// assert_eq!(format_catalog_timestamp(&dates.end()), "2010-01-31T23:59:59Z");
/// ```
///
/// Arguments
/// -----------------
/// * `path_1`, `path_2`: raw path numbers, in either order
/// * `date_1`, `date_2`: calendar dates in `YYYY-MM-DD` form, in either order
///
/// Return
/// ----------
/// * The ascending [`PathRange`] and normalized [`DateRange`], or the first
///   validation error encountered.
///
/// See also
/// ------------
/// * [`PathId::new`] – PATH domain validation.
/// * [`parse_civil_date`](crate::time::parse_civil_date) – Date grammar.
pub fn normalize(
    path_1: i64,
    path_2: i64,
    date_1: &str,
    date_2: &str,
) -> Result<(PathRange, DateRange), MisrKitError> {
    let first = PathId::new(path_1)?;
    let second = PathId::new(path_2)?;

    let start = time::parse_civil_date(date_1)?;
    let end = time::parse_civil_date(date_2)?;

    Ok((PathRange::new(first, second), DateRange::new(start, end)))
}
