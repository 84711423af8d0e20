//! Package index lookup client.

use std::time::Duration;

use reqwest::{StatusCode, Url};

use crate::{
    ClientError, PackageIndex, PackageMetadata, TransportError, endpoint, package::IndexDocument,
    parse_base,
};

/// Public index used when none is configured.
pub const DEFAULT_INDEX_URL: &str = "https://pypi.org";

/// Per-request timeout for index lookups.
pub const INDEX_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the public package index JSON API.
#[derive(Debug, Clone)]
pub struct IndexClient {
    http: reqwest::Client,
    base_url: Url,
}

impl IndexClient {
    /// Create a client for the index at `base_url` with the standard timeout.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, INDEX_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base_url = parse_base(base_url)?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    /// Base URL requests are built from.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl PackageIndex for IndexClient {
    async fn lookup(&self, name: &str) -> Result<PackageMetadata, ClientError> {
        let url = endpoint(&self.base_url, &["pypi", name, "json"])?;
        tracing::debug!(%url, "index lookup");

        let response = self.http.get(url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(ClientError::NotFound { name: name.to_owned() }),
            status if status.is_success() => {
                let document: IndexDocument = response.json().await?;
                Ok(document.info)
            },
            status => Err(TransportError::Status { status: status.as_u16() }.into()),
        }
    }
}
