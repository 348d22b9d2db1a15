#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! EIP-3770 account reference resolution for EVM chains.
//!
//! Takes a human-supplied account reference — a bare hex address, an ENS
//! name, or a chain-qualified identifier (`eip155:1:0x…` / `1:0x…`) — and
//! resolves it to a canonical checksummed address plus the display name of
//! the chain it lives on, verifying along the way that the address has
//! deployed code on that chain.
//!
//! # Pipeline
//!
//! 1. Parse the reference into a chain id and token ([`reference`])
//! 2. Fetch chain metadata from the registry ([`directory`])
//! 3. Validate the literal token ([`address`]) or resolve the name via
//!    ENS over the chain's RPC endpoint ([`ens`])
//! 4. Check the resolved address for deployed code ([`resolver`])
//!
//! Every failure is a typed [`ResolutionError`]; nothing is retried or
//! cached, and each call's network connections are scoped to that call.
//!
//! # Example
//!
//! ```no_run
//! use r3770::AccountResolver;
//!
//! # async fn run() -> Result<(), r3770::ResolutionError> {
//! let resolver = AccountResolver::default();
//! let account = resolver.resolve("eip155:1:0x6B175474E89094C44Da98b954EedeAC495271d0F").await?;
//! println!("{} on {}", account.address, account.chain_name);
//! # Ok(())
//! # }
//! ```
//!
//! # Feature Flags
//!
//! - `telemetry` - `tracing` instrumentation of the pipeline

pub mod address;
pub mod directory;
pub mod ens;
pub mod error;
pub mod reference;
pub mod resolver;

pub use directory::{ChainDirectory, ChainMetadata};
pub use error::{ChainLookupError, ResolutionError};
pub use reference::{AccountReference, AccountToken};
pub use resolver::{AccountResolver, ResolvedAccount};
