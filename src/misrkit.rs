//! # MisrKit: the orbit listing façade
//!
//! This module defines the [`MisrKit`](crate::misrkit::MisrKit) struct, the small entry point
//! wiring together:
//!
//! 1. **Catalog source selection** — a descriptor string parsed eagerly into a
//!    [`CatalogSource`](crate::orbit_catalog::CatalogSource).
//! 2. **Catalog access** — a lazy, cached handle over the chosen source
//!    ([`CatalogHandle`](crate::orbit_catalog::CatalogHandle)).
//! 3. **The end-to-end listing operation** — request normalization followed by one
//!    catalog query per path.
//!
//! The design emphasizes *lazy initialization* and *idempotent caching*: the catalog
//! is opened on first use via [`OnceCell`](once_cell::sync::OnceCell), then reused for
//! the lifetime of the context.
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use misrkit::MisrKit;
//!
//! // Instantiate the context with a catalog source descriptor
//! let kit = MisrKit::new("file:tables/orbit_table.csv").unwrap();
//!
//! // Normalize the raw request and run one catalog query per path
//! let listing = kit.orbits_in_range(169, 168, "2010-01-31", "2010-01-01").unwrap();
//! println!("{listing}");
//! ```
//!
//! ## See also
//! ------------
//! * [`normalize`](crate::ranges::normalize) – Request normalization.
//! * [`OrbitListing`](crate::orbit_catalog::OrbitListing) – Per-path assembly.
//! * [`OrbitCatalog`](crate::orbit_catalog::OrbitCatalog) – The adapter seam.

use once_cell::sync::OnceCell;

use crate::misrkit_errors::MisrKitError;
use crate::orbit_catalog::{CatalogHandle, CatalogSource, OrbitListing};
use crate::ranges::normalize;

#[derive(Debug, Clone)]
pub struct MisrKit {
    /// Where the orbit catalog lives, parsed from the descriptor string.
    catalog_source: CatalogSource,

    /// Lazily-opened catalog handle (thread-safe, initialized at most once).
    catalog: OnceCell<CatalogHandle>,
}

impl MisrKit {
    /// Construct a new [`MisrKit`] context.
    ///
    /// The descriptor is parsed eagerly; the catalog itself is **not** opened
    /// yet. It is lazily initialized the first time
    /// [`get_catalog`](crate::misrkit::MisrKit::get_catalog) is called.
    ///
    /// Arguments
    /// -----------------
    /// * `catalog_source`: a source descriptor resolvable into a
    ///   [`CatalogSource`] (e.g. `"https://orbit-catalog.example/orbits"` or
    ///   `"file:tables/orbit_table.csv"`).
    ///
    /// Return
    /// ----------
    /// * A new [`MisrKit`] instance, or
    ///   [`MisrKitError::InvalidCatalogSource`] if the descriptor matches
    ///   neither adapter.
    pub fn new(catalog_source: &str) -> Result<Self, MisrKitError> {
        Ok(MisrKit {
            catalog_source: catalog_source.try_into()?,
            catalog: OnceCell::new(),
        })
    }

    /// The parsed catalog source.
    pub fn catalog_source(&self) -> &CatalogSource {
        &self.catalog_source
    }

    /// Get the lazily-initialized catalog handle.
    ///
    /// If this is the first call, the catalog is opened and cached in an
    /// internal [`OnceCell`]. Subsequent calls return the same handle.
    ///
    /// Return
    /// ----------
    /// * `&CatalogHandle` on success, or the open error.
    ///
    /// See also
    /// ------------
    /// * [`CatalogHandle::open`] – Source-specific opening.
    pub fn get_catalog(&self) -> Result<&CatalogHandle, MisrKitError> {
        self.catalog.get_or_try_init(|| {
            CatalogHandle::open(&self.catalog_source).map_err(MisrKitError::from)
        })
    }

    /// List the orbits acquiring each path of a path range within a date range.
    ///
    /// The raw request is normalized first (paths validated and reordered,
    /// dates reordered, floored to the mission epoch and expanded to whole
    /// days), then the catalog is queried once per path in ascending order.
    ///
    /// Arguments
    /// -----------------
    /// * `path_1`, `path_2`: raw path numbers, in either order.
    /// * `date_1`, `date_2`: calendar dates in `YYYY-MM-DD` form, in either order.
    ///
    /// Return
    /// ----------
    /// * The assembled [`OrbitListing`], or the first normalization or query
    ///   error encountered.
    ///
    /// See also
    /// ------------
    /// * [`normalize`](crate::ranges::normalize) – The normalization step.
    /// * [`OrbitListing::query`] – The per-path query loop.
    pub fn orbits_in_range(
        &self,
        path_1: i64,
        path_2: i64,
        date_1: &str,
        date_2: &str,
    ) -> Result<OrbitListing, MisrKitError> {
        let (paths, dates) = normalize(path_1, path_2, date_1, date_2)?;
        let catalog = self.get_catalog()?;
        OrbitListing::query(catalog, &paths, &dates)
    }
}

#[cfg(test)]
mod misrkit_test {
    use super::*;

    #[test]
    fn test_descriptor_is_parsed_eagerly() {
        let kit = MisrKit::new("https://orbit-catalog.example/orbits").unwrap();
        assert_eq!(
            kit.catalog_source(),
            &CatalogSource::Http("https://orbit-catalog.example/orbits".to_string())
        );

        let kit = MisrKit::new("file:tables/orbit_table.csv").unwrap();
        assert_eq!(
            kit.catalog_source(),
            &CatalogSource::File("tables/orbit_table.csv".into())
        );
    }

    #[test]
    fn test_unknown_descriptor_is_rejected() {
        let err = MisrKit::new("ftp://catalog.example/table").unwrap_err();
        assert_eq!(
            err,
            MisrKitError::InvalidCatalogSource("ftp://catalog.example/table".to_string())
        );
    }
}
