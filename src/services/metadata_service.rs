//! Link metadata lookup for linkdeck.
//!
//! Queries the external metadata endpoint for a URL's title, image, and
//! description. The lookup is best-effort and injectable: callers fall back
//! to default metadata on any failure, and tests substitute a deterministic
//! stub.

use std::time::Duration;

use crate::types::errors::MetadataError;
use crate::types::metadata::LinkMetadata;

/// Request timeout for the lookup endpoint.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Trait defining the metadata lookup port.
pub trait MetadataServiceTrait {
    /// One lookup per added link. Any error means "no metadata", never a
    /// fatal failure; callers substitute defaults.
    fn fetch(&self, url: &str) -> Result<LinkMetadata, MetadataError>;
}

/// Metadata service backed by the HTTP lookup endpoint.
///
/// The call blocks the adding operation for at most [`FETCH_TIMEOUT`]; the
/// core is single-threaded, so nothing else can mutate state meanwhile.
pub struct HttpMetadataService {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpMetadataService {
    /// Creates a service pointed at the given endpoint base,
    /// e.g. `http://127.0.0.1:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.into(),
            client,
        }
    }
}

impl MetadataServiceTrait for HttpMetadataService {
    fn fetch(&self, url: &str) -> Result<LinkMetadata, MetadataError> {
        let response = self
            .client
            .get(format!("{}/api/metadata", self.base_url))
            .query(&[("url", url)])
            .send()
            .map_err(|e| MetadataError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MetadataError::HttpStatus(response.status().as_u16()));
        }

        response
            .json::<LinkMetadata>()
            .map_err(|e| MetadataError::ParseError(e.to_string()))
    }
}

/// Deterministic metadata service for tests and offline operation.
pub struct StaticMetadataService {
    metadata: Option<LinkMetadata>,
}

impl StaticMetadataService {
    /// A service that fails every lookup, forcing fallback metadata.
    pub fn unavailable() -> Self {
        Self { metadata: None }
    }

    /// A service returning the same metadata for every URL.
    pub fn with(metadata: LinkMetadata) -> Self {
        Self {
            metadata: Some(metadata),
        }
    }
}

impl MetadataServiceTrait for StaticMetadataService {
    fn fetch(&self, _url: &str) -> Result<LinkMetadata, MetadataError> {
        match &self.metadata {
            Some(metadata) => Ok(metadata.clone()),
            None => Err(MetadataError::NetworkError(
                "metadata lookup disabled".to_string(),
            )),
        }
    }
}
