//! HTTP orbit catalog adapter.
//!
//! Queries a remote catalog endpoint with one GET request per path:
//!
//! ```text
//! {endpoint}?path=P###&start=YYYY-MM-DDTHH:MM:SSZ&end=YYYY-MM-DDTHH:MM:SSZ
//! ```
//!
//! The response body is a CSV table with a `path,orbit,time` header, decoded
//! through the identifier codecs. The client is a [`ureq::Agent`] with a
//! global timeout; a slow or failing call is surfaced immediately, retries
//! are the caller's decision.

use std::time::Duration;

use hifitime::Epoch;
use ureq::Agent;

use crate::constants::Orbits;
use crate::identifiers::PathId;
use crate::time::format_catalog_timestamp;

use super::record::decode_orbit_records;
use super::{CatalogError, OrbitCatalog};

/// Global timeout applied to every catalog request.
const CATALOG_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct HttpOrbitCatalog {
    endpoint: String,
    http_client: Agent,
}

impl HttpOrbitCatalog {
    /// Create the adapter for a catalog endpoint. No request is made here.
    pub fn new(endpoint: &str) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(CATALOG_TIMEOUT))
            .build();

        HttpOrbitCatalog {
            endpoint: endpoint.to_string(),
            http_client: config.into(),
        }
    }

    /// The catalog endpoint queried by this adapter.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn query_url(&self, path: PathId, start: &Epoch, end: &Epoch) -> String {
        format!(
            "{}?path={}&start={}&end={}",
            self.endpoint,
            path,
            format_catalog_timestamp(start),
            format_catalog_timestamp(end),
        )
    }
}

impl OrbitCatalog for HttpOrbitCatalog {
    fn list_orbits(&self, path: PathId, start: Epoch, end: Epoch) -> Result<Orbits, CatalogError> {
        let url = self.query_url(path, &start, &end);

        let body = self
            .http_client
            .get(url.as_str())
            .call()?
            .body_mut()
            .read_to_string()?;

        decode_orbit_records(body.as_bytes(), path)
    }
}
