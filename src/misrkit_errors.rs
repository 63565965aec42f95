use thiserror::Error;

use crate::identifiers::{ParseIdError, PathId, RangeError};
use crate::orbit_catalog::CatalogError;
use crate::time::ParseDateError;

/// Errors surfaced by the `misrkit` library.
#[derive(Error, Debug)]
pub enum MisrKitError {
    #[error("identifier out of range: {0}")]
    OutOfRange(#[from] RangeError),

    #[error("unable to decode identifier: {0}")]
    IdentifierDecoding(#[from] ParseIdError),

    #[error("unable to parse date: {0}")]
    DateParsing(#[from] ParseDateError),

    #[error("invalid orbit catalog source: {0:?}")]
    InvalidCatalogSource(String),

    #[error("unable to open the orbit catalog: {0}")]
    CatalogOpen(#[from] CatalogError),

    #[error("orbit catalog query failed for {path}: {source}")]
    CatalogQuery { path: PathId, source: CatalogError },
}

impl PartialEq for MisrKitError {
    fn eq(&self, other: &Self) -> bool {
        use MisrKitError::*;
        match (self, other) {
            (OutOfRange(a), OutOfRange(b)) => a == b,
            (IdentifierDecoding(a), IdentifierDecoding(b)) => a == b,
            (DateParsing(a), DateParsing(b)) => a == b,
            (InvalidCatalogSource(a), InvalidCatalogSource(b)) => a == b,

            // catalog payloads wrap HTTP and I/O errors, which are not
            // comparable: same variant counts as equal
            (CatalogOpen(_), CatalogOpen(_)) => true,
            (CatalogQuery { path: a, .. }, CatalogQuery { path: b, .. }) => a == b,

            _ => false,
        }
    }
}
