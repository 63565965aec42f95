pub mod constants;
pub mod identifiers;
pub mod misrkit;
pub mod misrkit_errors;
pub mod orbit_catalog;
pub mod ranges;
pub mod time;

pub use constants::Orbits;
pub use identifiers::{BlockId, OrbitId, PathId};
pub use misrkit::MisrKit;
pub use misrkit_errors::MisrKitError;
pub use orbit_catalog::{CatalogHandle, CatalogSource, OrbitCatalog, OrbitListing};
pub use ranges::{normalize, BlockRange, DateRange, PathRange};
