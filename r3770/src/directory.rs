//! Chain-metadata registry client.
//!
//! [`ChainDirectory`] fetches per-chain metadata (display name, public RPC
//! endpoint) from a remote registry keyed by decimal chain id. Every
//! lookup is a single `GET {base}/v1/chains/{chainId}`; there is no retry
//! and no caching — the metadata picks the RPC endpoint that verification
//! trusts, so staleness is not acceptable.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ChainLookupError, ResolutionError};

/// Default chain-metadata registry.
pub const DEFAULT_REGISTRY_URL: &str = "https://safe-client.gnosis.io/";

/// Metadata describing a chain, as served by the registry.
///
/// The registry body carries more fields than these; everything beyond
/// what resolution needs is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainMetadata {
    /// Decimal chain identifier, echoed back by the registry.
    pub chain_id: String,
    /// Human-readable display name (e.g. `"Ethereum Mainnet"`).
    pub chain_name: String,
    /// Public RPC endpoint for the chain. May be absent or empty.
    #[serde(default)]
    pub public_rpc_uri: RpcUri,
}

/// Wrapper object the registry uses for RPC endpoint URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcUri {
    /// The endpoint URL; empty when the registry has none to offer.
    #[serde(default)]
    pub value: String,
}

impl ChainMetadata {
    /// Returns the chain's RPC endpoint, or `None` when the registry
    /// supplied none.
    #[must_use]
    pub fn rpc_endpoint(&self) -> Option<&str> {
        let value = self.public_rpc_uri.value.trim();
        (!value.is_empty()).then_some(value)
    }
}

/// A client for the chain-metadata registry.
#[derive(Clone, Debug)]
pub struct ChainDirectory {
    /// Registry base URL (e.g. `https://safe-client.gnosis.io/`).
    base_url: Url,
    /// Shared reqwest HTTP client.
    client: Client,
    /// Optional per-request timeout.
    timeout: Option<Duration>,
}

impl Default for ChainDirectory {
    fn default() -> Self {
        Self::new(Url::parse(DEFAULT_REGISTRY_URL).expect("default registry URL is valid"))
    }
}

impl ChainDirectory {
    /// Creates a directory client against the given registry base URL.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            client: Client::new(),
            timeout: None,
        }
    }

    /// Returns the registry base URL.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the configured per-request timeout, if any.
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Sets a timeout for all future registry requests.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Fetches metadata for the given decimal chain id.
    ///
    /// Success requires an HTTP 200 and a non-empty body that decodes as
    /// [`ChainMetadata`]. A single failed attempt is terminal.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::ChainLookup`] carrying the chain id and
    /// the underlying cause.
    #[cfg_attr(
        feature = "telemetry",
        tracing::instrument(name = "r3770.directory.lookup", skip(self), err)
    )]
    pub async fn lookup(&self, chain_id: &str) -> Result<ChainMetadata, ResolutionError> {
        self.lookup_inner(chain_id)
            .await
            .map_err(|source| ResolutionError::chain_lookup(chain_id, source))
    }

    async fn lookup_inner(&self, chain_id: &str) -> Result<ChainMetadata, ChainLookupError> {
        let url = self.base_url.join(&format!("v1/chains/{chain_id}"))?;

        let mut request = self.client.get(url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        let response = request.send().await?;

        if response.status() != StatusCode::OK {
            return Err(ChainLookupError::Status(response.status()));
        }
        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(ChainLookupError::EmptyBody);
        }
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Converts a string URL into a `ChainDirectory`, normalizing the base to
/// end with a single trailing slash so relative joins behave.
impl TryFrom<&str> for ChainDirectory {
    type Error = url::ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut normalized = value.trim_end_matches('/').to_string();
        normalized.push('/');
        Ok(Self::new(Url::parse(&normalized)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn mainnet_body() -> serde_json::Value {
        serde_json::json!({
            "chainId": "1",
            "chainName": "Ethereum Mainnet",
            "publicRpcUri": { "value": "https://rpc.example/eth" },
            "shortName": "eth"
        })
    }

    fn directory_for(server: &MockServer) -> ChainDirectory {
        ChainDirectory::try_from(server.uri().as_str()).unwrap()
    }

    #[tokio::test]
    async fn lookup_returns_metadata_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/chains/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mainnet_body()))
            .mount(&server)
            .await;

        let metadata = directory_for(&server).lookup("1").await.unwrap();
        assert_eq!(metadata.chain_id, "1");
        assert_eq!(metadata.chain_name, "Ethereum Mainnet");
        assert_eq!(metadata.rpc_endpoint(), Some("https://rpc.example/eth"));
    }

    #[tokio::test]
    async fn unknown_chain_fails_lookup() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/chains/999999999"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = directory_for(&server)
            .lookup("999999999")
            .await
            .unwrap_err();
        assert!(
            matches!(err, ResolutionError::ChainLookup { ref chain_id, .. } if chain_id == "999999999")
        );
    }

    #[tokio::test]
    async fn empty_body_fails_lookup() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/chains/1"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let err = directory_for(&server).lookup("1").await.unwrap_err();
        assert!(matches!(err, ResolutionError::ChainLookup { .. }));
    }

    #[tokio::test]
    async fn malformed_body_fails_lookup() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/chains/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = directory_for(&server).lookup("1").await.unwrap_err();
        assert!(matches!(err, ResolutionError::ChainLookup { .. }));
    }

    #[test]
    fn empty_rpc_uri_is_no_endpoint() {
        let metadata: ChainMetadata = serde_json::from_value(serde_json::json!({
            "chainId": "100",
            "chainName": "Gnosis Chain",
            "publicRpcUri": { "value": "" }
        }))
        .unwrap();
        assert_eq!(metadata.rpc_endpoint(), None);

        let metadata: ChainMetadata = serde_json::from_value(serde_json::json!({
            "chainId": "100",
            "chainName": "Gnosis Chain"
        }))
        .unwrap();
        assert_eq!(metadata.rpc_endpoint(), None);
    }
}
