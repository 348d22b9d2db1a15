//! The resolution pipeline.
//!
//! [`AccountResolver`] ties the pieces together: parse the reference, load
//! chain metadata, turn the token into an address (checksum validation for
//! literals, ENS for names), then verify the address has deployed code on
//! the target chain before handing back a [`ResolvedAccount`].
//!
//! Each `resolve` call is strictly sequential and fully self-contained:
//! the RPC connection is constructed after chain metadata is known, used
//! for at most two requests, and dropped on return. Nothing is shared
//! between concurrent calls.

use alloy_primitives::Address;
use alloy_provider::{Provider, RootProvider};
use alloy_rpc_client::RpcClient;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::address;
use crate::directory::ChainDirectory;
use crate::ens;
use crate::error::{ChainLookupError, ResolutionError};
use crate::reference::{AccountReference, AccountToken};

/// A fully resolved and verified account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAccount {
    /// The account address. `Display` renders the EIP-55 checksummed form.
    pub address: Address,
    /// Display name of the chain the account lives on.
    pub chain_name: String,
}

/// Resolves account references to verified on-chain accounts.
#[derive(Debug, Clone, Default)]
pub struct AccountResolver {
    directory: ChainDirectory,
}

impl AccountResolver {
    /// Creates a resolver backed by the given chain directory.
    #[must_use]
    pub const fn new(directory: ChainDirectory) -> Self {
        Self { directory }
    }

    /// Returns the chain directory this resolver consults.
    pub const fn directory(&self) -> &ChainDirectory {
        &self.directory
    }

    /// Resolves a reference string into a verified account.
    ///
    /// A [`ResolvedAccount`] is only returned for addresses with non-empty
    /// code on the target chain. An externally owned account with no
    /// transaction history reads back as empty code and is reported as
    /// [`ResolutionError::AccountNotFound`]; this is an accepted
    /// limitation of the code-existence heuristic.
    ///
    /// # Errors
    ///
    /// See [`ResolutionError`] for the failure taxonomy. All failures are
    /// terminal; nothing is retried.
    #[cfg_attr(
        feature = "telemetry",
        tracing::instrument(name = "r3770.resolve", skip(self), err)
    )]
    pub async fn resolve(&self, input: &str) -> Result<ResolvedAccount, ResolutionError> {
        let reference: AccountReference = input.parse()?;
        let (chain_id, token) = reference.into_parts();

        let metadata = self.directory.lookup(&chain_id).await?;

        // Resolve the token to an address, holding on to the connection
        // when name resolution already opened one.
        let mut connection: Option<RootProvider> = None;
        let address = match &token {
            AccountToken::Address(literal) => address::parse_literal(literal)?,
            AccountToken::Name(name) => {
                let endpoint = metadata.rpc_endpoint().ok_or_else(|| {
                    ResolutionError::unresolvable_name(name.as_str(), chain_id.as_str())
                })?;
                let provider = connect(endpoint)
                    .map_err(|source| ResolutionError::chain_lookup(chain_id.as_str(), source))?;
                let resolved = ens::resolve_name(&provider, name)
                    .await
                    .map_err(|source| ResolutionError::chain_lookup(chain_id.as_str(), source))?
                    .ok_or_else(|| {
                        ResolutionError::unresolvable_name(name.as_str(), chain_id.as_str())
                    })?;
                connection = Some(provider);
                resolved
            }
        };

        let provider = match connection {
            Some(provider) => provider,
            None => {
                let endpoint = metadata.rpc_endpoint().ok_or_else(|| {
                    ResolutionError::chain_lookup(
                        chain_id.as_str(),
                        ChainLookupError::MissingRpcEndpoint,
                    )
                })?;
                connect(endpoint)
                    .map_err(|source| ResolutionError::chain_lookup(chain_id.as_str(), source))?
            }
        };

        let code = provider
            .get_code_at(address)
            .await
            .map_err(|source| ResolutionError::chain_lookup(chain_id.as_str(), source))?;
        if code.is_empty() {
            return Err(ResolutionError::AccountNotFound {
                address,
                chain_name: metadata.chain_name,
            });
        }

        Ok(ResolvedAccount {
            address,
            chain_name: metadata.chain_name,
        })
    }
}

/// Connects a single-call provider to an RPC endpoint.
///
/// The underlying client speaks batched JSON-RPC over HTTP, though each
/// resolution issues its requests sequentially.
fn connect(endpoint: &str) -> Result<RootProvider, ChainLookupError> {
    let url: Url = endpoint.parse()?;
    Ok(RootProvider::new(RpcClient::new_http(url)))
}
