//! Resource resolution for local-file track data.
//!
//! Turning a local path into something a browser can fetch is delegated to an
//! external [`ResourceProvider`] (typically an in-process file server); this
//! module only classifies strings as remote vs local, verifies local files
//! exist, and keeps the issued [`Resource`] handles registered for the
//! lifetime of a [`ResourceSession`] so the provider's cleanup policy can
//! rely on them staying reachable.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A servable handle issued by a [`ResourceProvider`].
#[derive(Debug, Clone)]
pub struct Resource {
    /// URL a client can fetch over HTTP.
    pub url: String,
}

/// Error type providers report; propagated unchanged, never retried here.
pub type ProviderError = Box<dyn std::error::Error + Send + Sync>;

/// External capability that turns an absolute local path into a fetchable
/// URL.
pub trait ResourceProvider {
    fn create(&mut self, path: &Path) -> std::result::Result<Resource, ProviderError>;
}

/// Whether a string is a remote reference.
///
/// Deliberately a loose prefix check, not a URI-scheme parse, matching the
/// original widget's behavior: anything starting with `http` (which covers
/// `https`) is treated as already servable.
pub fn is_href(s: &str) -> bool {
    s.starts_with("http")
}

/// An independent resolution session owning a provider and the registry of
/// resources it has issued.
///
/// The registry is append-only; eviction and cleanup belong to the provider.
pub struct ResourceSession {
    provider: Box<dyn ResourceProvider>,
    resources: Vec<Resource>,
}

impl ResourceSession {
    pub fn new(provider: Box<dyn ResourceProvider>) -> Self {
        Self {
            provider,
            resources: Vec::new(),
        }
    }

    /// Resolve a file path or URL to a servable URL.
    ///
    /// Remote references pass through unchanged. Local paths are
    /// absolutized, must name an existing regular file, and are handed to
    /// the provider; the issued resource is registered with this session.
    pub fn resolve_file_or_url(&mut self, path_or_url: &str) -> Result<String> {
        if is_href(path_or_url) {
            return Ok(path_or_url.to_string());
        }
        let path = std::path::absolute(path_or_url)
            .map_err(|_| Error::FileNotFound(PathBuf::from(path_or_url)))?;
        if !path.is_file() {
            return Err(Error::FileNotFound(path));
        }
        let resource = self
            .provider
            .create(&path)
            .map_err(Error::ResourceProvider)?;
        let url = resource.url.clone();
        tracing::debug!(path = %path.display(), %url, "issued resource for local file");
        self.resources.push(resource);
        Ok(url)
    }

    /// Resources issued through this session so far, in issue order.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }
}
