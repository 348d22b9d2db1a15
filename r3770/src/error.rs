//! Error types for account reference resolution.
//!
//! Every failure is terminal: the pipeline performs no retries and no
//! partial recovery. Each variant of [`ResolutionError`] corresponds to one
//! stage of the pipeline, with the underlying cause attached as a `source`
//! where one exists.

use alloy_primitives::{Address, AddressError};
use reqwest::StatusCode;

/// Errors produced while resolving an account reference.
#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    /// The input does not match any of the three recognized shapes
    /// (`0x…` / `name`, `chainId:0x…`, `eip155:chainId:0x…`).
    #[error("invalid account reference format: {input:?}")]
    InvalidFormat {
        /// The rejected input string.
        input: String,
    },

    /// Chain metadata could not be loaded, or an RPC call against the
    /// chain's endpoint failed at the transport level.
    #[error("could not load chain info for chain {chain_id}")]
    ChainLookup {
        /// The chain identifier the lookup was keyed by.
        chain_id: String,
        /// The underlying failure.
        #[source]
        source: ChainLookupError,
    },

    /// A literal address token failed hex or EIP-55 checksum validation.
    #[error("invalid address token {token:?}")]
    InvalidAddress {
        /// The rejected token.
        token: String,
        /// The underlying validation failure.
        #[source]
        source: AddressError,
    },

    /// A name token could not be resolved to an address, including when
    /// the chain's metadata carries no usable RPC endpoint.
    #[error("could not resolve name {name:?} on chain {chain_id}")]
    UnresolvableName {
        /// The name that failed to resolve.
        name: String,
        /// The chain the resolution was attempted on.
        chain_id: String,
    },

    /// The address is syntactically valid but has no deployed code on the
    /// target chain. An externally owned account with no history is
    /// indistinguishable from an unused address here.
    #[error("account {address} is not available on {chain_name}")]
    AccountNotFound {
        /// The verified-absent address.
        address: Address,
        /// Display name of the chain that was checked.
        chain_name: String,
    },
}

impl ResolutionError {
    /// Creates a [`ResolutionError::ChainLookup`] for the given chain.
    pub fn chain_lookup<C, E>(chain_id: C, source: E) -> Self
    where
        C: Into<String>,
        E: Into<ChainLookupError>,
    {
        Self::ChainLookup {
            chain_id: chain_id.into(),
            source: source.into(),
        }
    }

    /// Creates a [`ResolutionError::UnresolvableName`].
    pub fn unresolvable_name<N, C>(name: N, chain_id: C) -> Self
    where
        N: Into<String>,
        C: Into<String>,
    {
        Self::UnresolvableName {
            name: name.into(),
            chain_id: chain_id.into(),
        }
    }
}

/// Causes of a [`ResolutionError::ChainLookup`] failure.
///
/// Covers both halves of the pipeline's network surface: the chain-metadata
/// registry fetch and the JSON-RPC calls made against the endpoint the
/// metadata names.
#[derive(Debug, thiserror::Error)]
pub enum ChainLookupError {
    /// A URL could not be constructed or parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The registry request failed at the HTTP transport level.
    #[error("registry request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The registry responded with a non-200 status.
    #[error("registry returned status {0}")]
    Status(StatusCode),

    /// The registry responded with an empty body.
    #[error("registry returned an empty body")]
    EmptyBody,

    /// The registry body could not be decoded as chain metadata.
    #[error("malformed chain metadata: {0}")]
    Decode(#[from] serde_json::Error),

    /// The chain metadata carries no RPC endpoint, so the address could
    /// not be verified against the chain.
    #[error("chain metadata carries no RPC endpoint")]
    MissingRpcEndpoint,

    /// A JSON-RPC call failed at the transport level.
    #[error("RPC request failed: {0}")]
    Rpc(#[from] alloy_transport::TransportError),

    /// A contract call (name resolution) failed.
    #[error("contract call failed: {0}")]
    Contract(#[from] alloy_contract::Error),
}
