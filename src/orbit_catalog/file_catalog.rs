//! File-backed orbit catalog adapter: the whole table is read and decoded at
//! open, queries filter the rows in memory.

use camino::Utf8Path;
use hifitime::Epoch;

use crate::constants::Orbits;
use crate::identifiers::PathId;

use super::record::OrbitRecord;
use super::{CatalogError, OrbitCatalog};

/// A local catalog table in the same `path,orbit,time` CSV schema the HTTP
/// catalog serves.
#[derive(Debug, Clone)]
pub struct FileOrbitCatalog {
    records: Vec<OrbitRecord>,
}

impl FileOrbitCatalog {
    /// Read and decode the whole table. Any malformed row fails the open.
    ///
    /// Arguments
    /// ---------
    /// * `table`: path to the CSV table
    ///
    /// Return
    /// ------
    /// * the adapter, or the I/O or decode error
    pub fn open(table: &Utf8Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(table)?;
        let mut csv_reader = csv::Reader::from_reader(content.as_bytes());
        let records = csv_reader
            .deserialize::<OrbitRecord>()
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FileOrbitCatalog { records })
    }

    /// Number of rows in the table.
    pub fn num_records(&self) -> usize {
        self.records.len()
    }
}

impl OrbitCatalog for FileOrbitCatalog {
    fn list_orbits(&self, path: PathId, start: Epoch, end: Epoch) -> Result<Orbits, CatalogError> {
        Ok(self
            .records
            .iter()
            .filter(|record| record.path == path && record.time >= start && record.time <= end)
            .map(|record| record.orbit)
            .collect())
    }
}
