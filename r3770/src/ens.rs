//! ENS name resolution against the canonical registry.
//!
//! Implements the two-hop EIP-137 lookup: `resolver(node)` on the registry
//! to find the name's resolver contract, then `addr(node)` on that
//! resolver. Only the minimal interface surface is declared.
//!
//! Names are ASCII-lowercased before hashing; full ENSIP-15 normalization
//! is out of scope.

use alloy_primitives::{Address, B256, address, keccak256};
use alloy_provider::Provider;
use alloy_sol_types::sol;

/// The canonical ENS registry deployment on the primary chain.
pub const ENS_REGISTRY: Address = address!("00000000000C2E074eC69A0dFb2997BA6C7d2e1e");

sol! {
    /// ENS registry, `resolver` lookup only.
    ///
    /// Reference: <https://eips.ethereum.org/EIPS/eip-137>
    #[allow(missing_docs)]
    #[derive(Debug)]
    #[sol(rpc)]
    interface IEnsRegistry {
        function resolver(bytes32 node) external view returns (address);
    }
}

sol! {
    /// Address-record half of an ENS resolver.
    #[allow(missing_docs)]
    #[derive(Debug)]
    #[sol(rpc)]
    interface IAddrResolver {
        function addr(bytes32 node) external view returns (address);
    }
}

/// Computes the EIP-137 namehash of a dot-separated name.
///
/// The empty name hashes to the zero node; labels are hashed right to
/// left, folding each keccak-256 label hash into the running node.
#[must_use]
pub fn namehash(name: &str) -> B256 {
    let mut node = B256::ZERO;
    if name.is_empty() {
        return node;
    }
    for label in name.rsplit('.') {
        let label_hash = keccak256(label.as_bytes());
        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(node.as_slice());
        buf[32..].copy_from_slice(label_hash.as_slice());
        node = keccak256(buf);
    }
    node
}

/// Resolves a name to an address through the canonical registry.
///
/// Returns `Ok(None)` when the registry has no resolver for the name or
/// the resolver holds no address record (both read back as the zero
/// address on-chain).
///
/// # Errors
///
/// Returns the underlying [`alloy_contract::Error`] when either call
/// fails, typically at the RPC transport level.
pub async fn resolve_name<P>(provider: &P, name: &str) -> Result<Option<Address>, alloy_contract::Error>
where
    P: Provider,
{
    let node = namehash(&name.to_ascii_lowercase());

    let registry = IEnsRegistry::new(ENS_REGISTRY, provider);
    let resolver_address = registry.resolver(node).call().await?;
    if resolver_address.is_zero() {
        return Ok(None);
    }

    let resolver = IAddrResolver::new(resolver_address, provider);
    let resolved = resolver.addr(node).call().await?;
    Ok((!resolved.is_zero()).then_some(resolved))
}
