//! Remote service clients for pipdeck.
//!
//! Two collaborators sit behind this crate:
//!
//! - The public package index, queried read-only to check that a package
//!   exists before anything is installed ([`IndexClient`]).
//! - The local bridge service, which owns the actual list/install/uninstall
//!   operations and requires an access token ([`BridgeClient`]).
//!
//! Each operation issues exactly one HTTP request and maps the response status
//! onto [`ClientError`]. There are no retries and no caching.
//!
//! # Seams
//!
//! The application layer only depends on the [`PackageIndex`] and
//! [`PackageBridge`] traits, so tests can swap in recording fakes.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bridge;
mod error;
mod index;
mod package;

use std::future::Future;

pub use bridge::{API_KEY_HEADER, BridgeClient, DEFAULT_BRIDGE_URL};
pub use error::{ClientError, TransportError};
pub use index::{DEFAULT_INDEX_URL, INDEX_TIMEOUT, IndexClient};
pub use package::{InstalledPackage, PackageMetadata};
use reqwest::Url;

/// Read-only package existence and metadata lookup.
pub trait PackageIndex: Send + Sync {
    /// Look up a package by its exact name.
    ///
    /// # Errors
    ///
    /// [`ClientError::NotFound`] if the index does not know the package,
    /// [`ClientError::Transport`] for any other failure.
    fn lookup(&self, name: &str)
    -> impl Future<Output = Result<PackageMetadata, ClientError>> + Send;
}

/// Authenticated package management on the local bridge service.
pub trait PackageBridge: Send + Sync {
    /// List every installed package.
    fn list(&self) -> impl Future<Output = Result<Vec<InstalledPackage>, ClientError>> + Send;

    /// Install a package by name. Returns the service's confirmation message.
    fn install(&self, name: &str) -> impl Future<Output = Result<String, ClientError>> + Send;

    /// Uninstall a package by name. Returns the service's confirmation message.
    fn uninstall(&self, name: &str) -> impl Future<Output = Result<String, ClientError>> + Send;
}

/// Build `base/<segments...>`, percent-encoding each segment.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, TransportError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| TransportError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Parse a configured base URL.
pub(crate) fn parse_base(base_url: &str) -> Result<Url, TransportError> {
    Url::parse(base_url).map_err(|e| TransportError::InvalidUrl(format!("{base_url}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_segments() {
        let base = parse_base("http://127.0.0.1:5000").unwrap();
        let url = endpoint(&base, &["libraries", "numpy"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/libraries/numpy");
    }

    #[test]
    fn endpoint_keeps_base_path_and_encodes_segments() {
        let base = parse_base("https://mirror.example/simple/").unwrap();
        let url = endpoint(&base, &["pypi", "a/b", "json"]).unwrap();
        assert_eq!(url.as_str(), "https://mirror.example/simple/pypi/a%2Fb/json");
    }

    #[test]
    fn non_hierarchical_base_is_rejected() {
        let base = parse_base("mailto:someone@example.com").unwrap();
        assert!(matches!(endpoint(&base, &["libraries"]), Err(TransportError::InvalidUrl(_))));
    }

    #[test]
    fn garbage_base_is_rejected() {
        assert!(matches!(parse_base("not a url"), Err(TransportError::InvalidUrl(_))));
    }
}
