use hifitime::Epoch;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::{MISSION_EPOCH_DAY, MISSION_EPOCH_MONTH, MISSION_EPOCH_YEAR, MJD};

/// A date string the time helpers could not turn into an epoch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseDateError {
    #[error("invalid date {0:?}, expected format: YYYY-MM-DD")]
    InvalidDateFormat(String),

    #[error("invalid timestamp {0:?}, expected format: YYYY-MM-DDTHH:MM:SSZ")]
    InvalidTimestampFormat(String),

    #[error("date {0:?} does not exist in the calendar")]
    NonExistentDate(String),
}

/// Transformation from a date in the format YYYY-MM-DD to an Epoch at midnight UTC
///
/// Argument
/// --------
/// * `date`: a string slice representing a date in the format YYYY-MM-DD
///
/// Return
/// ------
/// * the corresponding Epoch at 00:00:00 UTC, or a [`ParseDateError`] if the
///   string is malformed or names a day that does not exist
pub fn parse_civil_date(date: &str) -> Result<Epoch, ParseDateError> {
    let trimmed = date.trim();
    let (year, month, day) = split_civil_date(trimmed)
        .ok_or_else(|| ParseDateError::InvalidDateFormat(trimmed.to_string()))?;

    Epoch::maybe_from_gregorian_utc(year, month, day, 0, 0, 0, 0)
        .map_err(|_| ParseDateError::NonExistentDate(trimmed.to_string()))
}

/// Transformation from a timestamp in the format YYYY-MM-DDTHH:MM:SSZ to an Epoch
///
/// Argument
/// --------
/// * `timestamp`: a string slice representing an UTC instant, the grammar the
///   orbit catalog speaks
///
/// Return
/// ------
/// * the corresponding Epoch, or a [`ParseDateError`]
pub fn parse_catalog_timestamp(timestamp: &str) -> Result<Epoch, ParseDateError> {
    let trimmed = timestamp.trim();
    let malformed = || ParseDateError::InvalidTimestampFormat(trimmed.to_string());

    let body = trimmed.strip_suffix('Z').ok_or_else(malformed)?;
    let (date_part, time_part) = body.split_once('T').ok_or_else(malformed)?;

    let (year, month, day) = split_civil_date(date_part).ok_or_else(malformed)?;

    let mut fields = time_part.split(':');
    let hour = parse_time_field(fields.next()).ok_or_else(malformed)?;
    let minute = parse_time_field(fields.next()).ok_or_else(malformed)?;
    let second = parse_time_field(fields.next()).ok_or_else(malformed)?;
    if fields.next().is_some() {
        return Err(malformed());
    }

    Epoch::maybe_from_gregorian_utc(year, month, day, hour, minute, second, 0)
        .map_err(|_| ParseDateError::NonExistentDate(trimmed.to_string()))
}

/// Render an Epoch in the format YYYY-MM-DDTHH:MM:SSZ (UTC, whole seconds).
pub fn format_catalog_timestamp(epoch: &Epoch) -> String {
    let (year, month, day, hour, minute, second, _) = epoch.to_gregorian_utc();
    format!("{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}Z")
}

/// The mission epoch, 2000-02-24T00:00:00 UTC: the first date of operational
/// data acquisition, and the floor applied to every normalized date range.
pub fn mission_epoch() -> Epoch {
    Epoch::from_gregorian_utc_at_midnight(
        MISSION_EPOCH_YEAR,
        MISSION_EPOCH_MONTH,
        MISSION_EPOCH_DAY,
    )
}

/// Linear day ordinal of an instant: the Modified Julian Day number of the
/// UTC calendar day it falls on. Two instants compare as "same day" exactly
/// when their ordinals are equal.
pub fn day_ordinal(epoch: &Epoch) -> MJD {
    epoch.to_mjd_utc_days().floor()
}

/// Midnight UTC on the calendar day of `epoch`.
pub(crate) fn start_of_day(epoch: &Epoch) -> Epoch {
    let (year, month, day, ..) = epoch.to_gregorian_utc();
    Epoch::from_gregorian_utc_at_midnight(year, month, day)
}

/// The last whole second (23:59:59 UTC) of the calendar day of `epoch`.
pub(crate) fn end_of_day(epoch: &Epoch) -> Epoch {
    let (year, month, day, ..) = epoch.to_gregorian_utc();
    Epoch::from_gregorian_utc(year, month, day, 23, 59, 59, 0)
}

fn split_civil_date(date: &str) -> Option<(i32, u8, u8)> {
    let mut fields = date.split('-');
    let year = i32::from_str(fields.next()?).ok()?;
    let month = u8::from_str(fields.next()?).ok()?;
    let day = u8::from_str(fields.next()?).ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some((year, month, day))
}

fn parse_time_field(field: Option<&str>) -> Option<u8> {
    u8::from_str(field?).ok()
}
