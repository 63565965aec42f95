//! # Orbit catalog access
//!
//! The orbit catalog is the external service answering the question "which
//! orbits acquired this path within this window?". This module defines:
//!
//! - [`OrbitCatalog`] — the adapter seam every catalog backend implements
//! - [`CatalogSource`] / [`CatalogHandle`] — descriptor parsing and uniform
//!   dispatch over the HTTP and file backends
//! - [`OrbitListing`] — per-path orbit sequences assembled from one catalog
//!   call per path
//!
//! One call covers one path. Callers holding a path range issue one call per
//! path in ascending order; the first failure aborts the whole listing and is
//! reported with the path that failed.

use std::collections::BTreeMap;
use std::fmt;

use camino::Utf8PathBuf;
use hifitime::Epoch;
use itertools::Itertools;
use thiserror::Error;

use crate::constants::Orbits;
use crate::identifiers::{OrbitId, PathId};
use crate::misrkit_errors::MisrKitError;
use crate::ranges::{DateRange, PathRange};

pub mod file_catalog;
pub mod http_catalog;
pub(crate) mod record;

pub use file_catalog::FileOrbitCatalog;
pub use http_catalog::HttpOrbitCatalog;

/// Failures surfaced by an orbit catalog adapter.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP ureq error: {0}")]
    UreqHttpError(#[from] ureq::Error),

    #[error("unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("unable to decode catalog records: {0}")]
    RecordDecoding(#[from] csv::Error),

    #[error("catalog answered for {got} while {queried} was queried")]
    UnexpectedPath { queried: PathId, got: PathId },
}

/// Black-box seam to the external orbit catalog.
///
/// An adapter answers which orbits acquired `path` within the inclusive
/// `[start, end]` window, in the order the catalog reports them. It performs
/// no retries and no reordering of its own.
pub trait OrbitCatalog {
    fn list_orbits(&self, path: PathId, start: Epoch, end: Epoch) -> Result<Orbits, CatalogError>;
}

/// Where a catalog lives, parsed from a descriptor string.
///
/// * `http://…` or `https://…` — a remote catalog queried over HTTP
/// * `file:<path>` — a local catalog table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Http(String),
    File(Utf8PathBuf),
}

impl TryFrom<&str> for CatalogSource {
    type Error = MisrKitError;

    fn try_from(descriptor: &str) -> Result<Self, Self::Error> {
        let trimmed = descriptor.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Ok(CatalogSource::Http(trimmed.to_string()))
        } else if let Some(table) = trimmed.strip_prefix("file:") {
            Ok(CatalogSource::File(Utf8PathBuf::from(table)))
        } else {
            Err(MisrKitError::InvalidCatalogSource(trimmed.to_string()))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Http(endpoint) => write!(f, "{endpoint}"),
            CatalogSource::File(table) => write!(f, "file:{table}"),
        }
    }
}

/// Uniform dispatch over the catalog adapter implementations.
#[derive(Debug, Clone)]
pub enum CatalogHandle {
    Http(HttpOrbitCatalog),
    File(FileOrbitCatalog),
}

impl CatalogHandle {
    /// Open the adapter selected by `source`. The HTTP adapter performs no
    /// I/O here; the file adapter reads and decodes its table once.
    pub fn open(source: &CatalogSource) -> Result<Self, CatalogError> {
        match source {
            CatalogSource::Http(endpoint) => {
                Ok(CatalogHandle::Http(HttpOrbitCatalog::new(endpoint)))
            }
            CatalogSource::File(table) => Ok(CatalogHandle::File(FileOrbitCatalog::open(table)?)),
        }
    }
}

impl OrbitCatalog for CatalogHandle {
    fn list_orbits(&self, path: PathId, start: Epoch, end: Epoch) -> Result<Orbits, CatalogError> {
        match self {
            CatalogHandle::Http(catalog) => catalog.list_orbits(path, start, end),
            CatalogHandle::File(catalog) => catalog.list_orbits(path, start, end),
        }
    }
}

/// Per-path orbit sequences assembled from one catalog call per path.
///
/// Paths iterate in ascending order; each sequence keeps the order the
/// catalog returned it in. All counts are derived from the stored sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitListing {
    entries: BTreeMap<PathId, Orbits>,
}

impl OrbitListing {
    /// Query `catalog` once per path of `paths`, in ascending order, over the
    /// `dates` window.
    ///
    /// The first adapter failure aborts the whole listing and is surfaced as
    /// [`MisrKitError::CatalogQuery`] annotated with the failing path.
    pub fn query<C>(catalog: &C, paths: &PathRange, dates: &DateRange) -> Result<Self, MisrKitError>
    where
        C: OrbitCatalog + ?Sized,
    {
        let mut entries = BTreeMap::new();
        for path in paths.iter() {
            let orbits = catalog
                .list_orbits(path, dates.start(), dates.end())
                .map_err(|source| MisrKitError::CatalogQuery { path, source })?;
            entries.insert(path, orbits);
        }
        Ok(OrbitListing { entries })
    }

    /// The orbit sequence reported for `path`, if the path is in the listing.
    pub fn orbits(&self, path: PathId) -> Option<&[OrbitId]> {
        self.entries.get(&path).map(|orbits| orbits.as_slice())
    }

    /// Number of orbits reported for `path` (0 when the path is absent).
    pub fn count(&self, path: PathId) -> usize {
        self.entries.get(&path).map_or(0, |orbits| orbits.len())
    }

    /// Number of paths in the listing, empty sequences included.
    pub fn num_paths(&self) -> usize {
        self.entries.len()
    }

    /// Total number of orbits across all paths.
    pub fn total_orbits(&self) -> usize {
        self.entries.values().map(|orbits| orbits.len()).sum()
    }

    /// `true` when no path reported any orbit.
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(|orbits| orbits.is_empty())
    }

    /// Iterate `(path, orbits)` pairs in ascending path order.
    pub fn iter(&self) -> impl Iterator<Item = (PathId, &[OrbitId])> {
        self.entries
            .iter()
            .map(|(path, orbits)| (*path, orbits.as_slice()))
    }
}

impl fmt::Display for OrbitListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (path, orbits) in &self.entries {
            if orbits.is_empty() {
                writeln!(f, "{path}: no orbits")?;
            } else {
                writeln!(
                    f,
                    "{path}: {} ({} orbits)",
                    orbits.iter().join(" "),
                    orbits.len()
                )?;
            }
        }
        Ok(())
    }
}
