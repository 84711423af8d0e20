//! Local bridge service client.
//!
//! The bridge exposes three endpoints, all behind the `X-API-KEY` header:
//!
//! - `GET /libraries` returns a JSON array of `{name, version}`
//! - `POST /libraries` with `{"name": ...}` installs a package
//! - `DELETE /libraries/<name>` uninstalls a package
//!
//! Install and uninstall answer with a confirmation body on success. On
//! failure the body is surfaced verbatim in [`TransportError::Rejected`].

use std::time::Duration;

use reqwest::{Response, StatusCode, Url};
use serde_json::json;

use crate::{
    ClientError, InstalledPackage, PackageBridge, TransportError, endpoint, package::Confirmation,
    parse_base,
};

/// Where the bridge service listens by default.
pub const DEFAULT_BRIDGE_URL: &str = "http://127.0.0.1:5000";

/// Header carrying the access token.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Authenticated client for the bridge service.
#[derive(Clone)]
pub struct BridgeClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl std::fmt::Debug for BridgeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BridgeClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl BridgeClient {
    /// Create a client for the bridge at `base_url`.
    ///
    /// Every request is bounded by `timeout`.
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let base_url = parse_base(base_url)?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url, api_key: api_key.into() })
    }

    /// Base URL requests are built from.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Access token, or [`ClientError::Auth`] if none is configured.
    fn api_key(&self) -> Result<&str, ClientError> {
        if self.api_key.is_empty() { Err(ClientError::Auth) } else { Ok(&self.api_key) }
    }

    /// Send a mutation and turn the response into a confirmation message.
    async fn confirm(&self, request: reqwest::RequestBuilder) -> Result<String, ClientError> {
        let response = request.header(API_KEY_HEADER, self.api_key()?).send().await?;
        let response = reject_failures(response).await?;
        let body = response.text().await?;
        Ok(confirmation_message(body))
    }
}

impl PackageBridge for BridgeClient {
    async fn list(&self) -> Result<Vec<InstalledPackage>, ClientError> {
        let url = endpoint(&self.base_url, &["libraries"])?;
        tracing::debug!(%url, "listing installed packages");

        let response = self.http.get(url).header(API_KEY_HEADER, self.api_key()?).send().await?;
        let response = reject_failures(response).await?;
        Ok(response.json().await?)
    }

    async fn install(&self, name: &str) -> Result<String, ClientError> {
        let url = endpoint(&self.base_url, &["libraries"])?;
        tracing::debug!(%url, package = name, "requesting install");

        self.confirm(self.http.post(url).json(&json!({ "name": name }))).await
    }

    async fn uninstall(&self, name: &str) -> Result<String, ClientError> {
        let url = endpoint(&self.base_url, &["libraries", name])?;
        tracing::debug!(%url, package = name, "requesting uninstall");

        self.confirm(self.http.delete(url)).await
    }
}

/// Map non-success statuses to errors, keeping the body verbatim.
async fn reject_failures(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
        return Err(ClientError::Auth);
    }

    let body = response.text().await.map_err(TransportError::from)?;
    Err(TransportError::Rejected { status: status.as_u16(), body }.into())
}

/// Extract `message` from a JSON confirmation, or fall back to the raw text.
fn confirmation_message(body: String) -> String {
    match serde_json::from_str::<Confirmation>(&body) {
        Ok(confirmation) => confirmation.message,
        Err(_) => body.trim_end().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_confirmation_uses_message_field() {
        let body = r#"{"message": "Installed flask", "output": "Collecting flask..."}"#;
        assert_eq!(confirmation_message(body.into()), "Installed flask");
    }

    #[test]
    fn plain_confirmation_is_passed_through() {
        assert_eq!(confirmation_message("Installed flask\n".into()), "Installed flask");
    }

    #[test]
    fn debug_output_hides_token() {
        let client =
            BridgeClient::new(DEFAULT_BRIDGE_URL, "s3cret", Duration::from_secs(1)).unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("127.0.0.1:5000"));
    }

    #[test]
    fn empty_token_is_an_auth_error() {
        let client = BridgeClient::new(DEFAULT_BRIDGE_URL, "", Duration::from_secs(1)).unwrap();
        assert_eq!(client.api_key(), Err(ClientError::Auth));
    }
}
