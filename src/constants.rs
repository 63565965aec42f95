//! # Constants and type definitions for MisrKit
//!
//! This module centralizes the **identifier domains**, the **mission epoch**, and the common type
//! definitions used throughout the `misrkit` library.
//!
//! ## Overview
//!
//! - Closed bounds of the PATH, BLOCK and ORBIT identifier domains
//! - The mission epoch (first date of operational data acquisition), both as
//!   calendar parts and as a Modified Julian Date
//! - Core type aliases used across the crate
//! - Container types for storing per-path orbit sequences
//!
//! These definitions are used by all main modules, including the identifier codecs,
//! the range normalizer, and the orbit catalog adapters.

use crate::identifiers::orbit::OrbitId;
use smallvec::SmallVec;

// -------------------------------------------------------------------------------------------------
// Identifier domains
// -------------------------------------------------------------------------------------------------

/// Smallest legal PATH number
pub const PATH_MIN: i64 = 1;

/// Largest legal PATH number; the repeat cycle covers 233 fixed ground tracks
pub const PATH_MAX: i64 = 233;

/// Smallest legal BLOCK number
pub const BLOCK_MIN: i64 = 1;

/// Largest legal BLOCK number; each path is divided into 180 along-track blocks
pub const BLOCK_MAX: i64 = 180;

/// First orbit carrying operational data
pub const ORBIT_MIN: i64 = 995;

/// Upper bound of the orbit numbering accepted by the processing chain
pub const ORBIT_MAX: i64 = 112_000;

// -------------------------------------------------------------------------------------------------
// Mission epoch
// -------------------------------------------------------------------------------------------------

/// Calendar year of the mission epoch (2000-02-24, first operational acquisition)
pub const MISSION_EPOCH_YEAR: i32 = 2000;

/// Calendar month of the mission epoch
pub const MISSION_EPOCH_MONTH: u8 = 2;

/// Calendar day of the mission epoch
pub const MISSION_EPOCH_DAY: u8 = 24;

/// Mission epoch as a Modified Julian Date (2000-02-24T00:00:00 UTC)
pub const MISSION_EPOCH_MJD: f64 = 51_598.0;

// -------------------------------------------------------------------------------------------------
// Type aliases and data containers
// -------------------------------------------------------------------------------------------------

/// Modified Julian Date (days)
pub type MJD = f64;

/// A small, inline-optimized container for the orbits acquired over a single path.
pub type Orbits = SmallVec<[OrbitId; 8]>;
