use std::cell::RefCell;
use std::collections::HashMap;

use hifitime::Epoch;
use misrkit::orbit_catalog::{CatalogError, OrbitCatalog};
use misrkit::{OrbitId, Orbits, PathId};

/// In-memory catalog stub recording every query it receives.
pub struct StubCatalog {
    orbits_by_path: HashMap<u16, Vec<u32>>,
    fail_for: Option<u16>,
    pub calls: RefCell<Vec<(PathId, Epoch, Epoch)>>,
}

impl StubCatalog {
    pub fn new(entries: &[(u16, &[u32])]) -> Self {
        let orbits_by_path = entries
            .iter()
            .map(|(path, orbits)| (*path, orbits.to_vec()))
            .collect();

        StubCatalog {
            orbits_by_path,
            fail_for: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Make the stub fail whenever `path` is queried.
    pub fn failing_for(mut self, path: u16) -> Self {
        self.fail_for = Some(path);
        self
    }

    /// The paths queried so far, in call order.
    pub fn queried_paths(&self) -> Vec<PathId> {
        self.calls
            .borrow()
            .iter()
            .map(|(path, _, _)| *path)
            .collect()
    }
}

impl OrbitCatalog for StubCatalog {
    fn list_orbits(&self, path: PathId, start: Epoch, end: Epoch) -> Result<Orbits, CatalogError> {
        self.calls.borrow_mut().push((path, start, end));

        if self.fail_for == Some(path.number()) {
            return Err(CatalogError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                "stub catalog failure",
            )));
        }

        Ok(self
            .orbits_by_path
            .get(&path.number())
            .map(|orbits| {
                orbits
                    .iter()
                    .map(|orbit| OrbitId::new(i64::from(*orbit)).unwrap())
                    .collect()
            })
            .unwrap_or_default())
    }
}
