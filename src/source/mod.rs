//! Node feed: raw records, coordinate derivation and the background loader.

mod loader;
mod normalize;
mod record;

pub use loader::{fetch_or_empty, NodeLoader};
pub use normalize::{normalize_batch, PositionedNode};
pub use record::{parse_batch, NodeRecord};

use crate::error::CloudError;

/// Something that can produce a batch of node records.
///
/// Implementations may block; the session only calls them from a
/// [`NodeLoader`] thread.
pub trait NodeSource: Send {
    /// Fetch the full batch.
    ///
    /// # Errors
    ///
    /// Returns a [`CloudError`] describing why no batch could be produced.
    fn fetch(&self) -> Result<Vec<NodeRecord>, CloudError>;

    /// Human-readable description for logs.
    fn describe(&self) -> String {
        "node source".to_owned()
    }
}

/// A fixed, in-memory batch.
#[derive(Debug, Clone, Default)]
pub struct StaticNodeSource {
    records: Vec<NodeRecord>,
}

impl StaticNodeSource {
    /// Serve `records` on every fetch.
    #[must_use]
    pub fn new(records: Vec<NodeRecord>) -> Self {
        Self { records }
    }
}

impl NodeSource for StaticNodeSource {
    fn fetch(&self) -> Result<Vec<NodeRecord>, CloudError> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("{} static records", self.records.len())
    }
}

/// The node feed served over HTTP.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct HttpNodeSource {
    url: String,
}

#[cfg(feature = "fetch")]
impl HttpNodeSource {
    /// Fetch from `url` (expects a JSON `{"nodes": [...]}` body).
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[cfg(feature = "fetch")]
impl NodeSource for HttpNodeSource {
    fn fetch(&self) -> Result<Vec<NodeRecord>, CloudError> {
        let body = ureq::get(&self.url)
            .call()
            .map_err(|e| CloudError::Fetch(format!("GET {}: {e}", self.url)))?
            .into_body()
            .read_to_string()
            .map_err(|e| {
                CloudError::Fetch(format!("reading {}: {e}", self.url))
            })?;
        parse_batch(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
