//! Wire types shared by the clients and the application layer.

use serde::Deserialize;

/// A package reported by the bridge service.
///
/// Snapshot entry; the application replaces its whole list on every refresh.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct InstalledPackage {
    /// Distribution name.
    pub name: String,
    /// Installed version string.
    pub version: String,
}

impl InstalledPackage {
    /// Create a package entry.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self { name: name.into(), version: version.into() }
    }
}

/// Package metadata returned by the index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageMetadata {
    /// Canonical package name.
    pub name: String,
    /// Latest released version.
    pub version: String,
    /// One-line summary. `None` if the index has none.
    #[serde(default)]
    pub summary: Option<String>,
    /// Author. `None` if unset.
    #[serde(default)]
    pub author: Option<String>,
    /// Project home page. `None` if unset.
    #[serde(default)]
    pub home_page: Option<String>,
}

/// Envelope of the index's JSON document; only `info` is used.
#[derive(Debug, Deserialize)]
pub(crate) struct IndexDocument {
    pub(crate) info: PackageMetadata,
}

/// Success body of the bridge's install and uninstall endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct Confirmation {
    pub(crate) message: String,
}
