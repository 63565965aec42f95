use hifitime::Epoch;
use serde::{Deserialize, Deserializer};

use crate::constants::Orbits;
use crate::identifiers::{OrbitId, PathId};
use crate::time::parse_catalog_timestamp;

use super::CatalogError;

/// One row of the catalog table: the acquisition of `path` by `orbit` at `time`.
///
/// Identifier fields go through the canonical string codecs, the timestamp
/// through the catalog grammar parser, so a malformed field surfaces as a
/// decode error carrying the offending text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct OrbitRecord {
    pub path: PathId,
    pub orbit: OrbitId,
    #[serde(deserialize_with = "catalog_timestamp")]
    pub time: Epoch,
}

fn catalog_timestamp<'de, D>(deserializer: D) -> Result<Epoch, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_catalog_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// Decode a CSV catalog body into the orbit sequence for `queried`.
///
/// Row order is preserved. A row naming a different path than the one queried
/// is a protocol violation reported as [`CatalogError::UnexpectedPath`].
pub(crate) fn decode_orbit_records(body: &[u8], queried: PathId) -> Result<Orbits, CatalogError> {
    let mut csv_reader = csv::Reader::from_reader(body);
    let mut orbits = Orbits::new();

    for record in csv_reader.deserialize::<OrbitRecord>() {
        let record = record?;
        if record.path != queried {
            return Err(CatalogError::UnexpectedPath {
                queried,
                got: record.path,
            });
        }
        orbits.push(record.orbit);
    }
    Ok(orbits)
}
