//! Parsing of human-supplied account references.
//!
//! An account reference names an account in one of three shapes:
//!
//! - `0xabc…` or `vitalik.eth` — a bare token, assumed to live on the
//!   primary chain (`"1"`)
//! - `137:0xabc…` — a chain-qualified literal address
//! - `eip155:137:0xabc…` — the full EIP-3770 form
//!
//! Parsing only disambiguates the shape; literal address tokens are not
//! checksum-validated here, and name tokens are not resolved. Both happen
//! downstream in [`crate::resolver`], once chain metadata is available.

use std::str::FromStr;

use crate::error::ResolutionError;

/// The chain assumed when an input carries no chain qualifier.
pub const DEFAULT_CHAIN_ID: &str = "1";

/// The only namespace tag accepted in the three-segment form.
pub const EIP155_NAMESPACE: &str = "eip155";

/// A parsed account reference: a chain identifier plus the token naming
/// the account on that chain.
///
/// The chain identifier is guaranteed to be a non-empty decimal string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountReference {
    chain_id: String,
    token: AccountToken,
}

/// The account-naming half of a reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountToken {
    /// A literal address token, not yet checksum-validated.
    Address(String),
    /// A name to be resolved through the chain's RPC endpoint.
    Name(String),
}

impl AccountReference {
    /// Returns the decimal chain identifier.
    #[must_use]
    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    /// Returns the account token.
    #[must_use]
    pub const fn token(&self) -> &AccountToken {
        &self.token
    }

    /// Consumes the reference and returns its (chain id, token) parts.
    #[must_use]
    pub fn into_parts(self) -> (String, AccountToken) {
        (self.chain_id, self.token)
    }
}

impl FromStr for AccountReference {
    type Err = ResolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ResolutionError::InvalidFormat { input: s.to_owned() };

        let parts: Vec<&str> = s.split(':').collect();
        let (chain_id, token) = match parts.as_slice() {
            // Bare token on the primary chain. Only here can a token be a
            // name; qualified forms always carry a literal address.
            [token] => {
                let token = if token.starts_with("0x") {
                    AccountToken::Address((*token).to_owned())
                } else {
                    AccountToken::Name((*token).to_owned())
                };
                (DEFAULT_CHAIN_ID.to_owned(), token)
            }
            [chain_id, token] => (
                (*chain_id).to_owned(),
                AccountToken::Address((*token).to_owned()),
            ),
            [namespace, chain_id, token] if *namespace == EIP155_NAMESPACE => (
                (*chain_id).to_owned(),
                AccountToken::Address((*token).to_owned()),
            ),
            _ => return Err(invalid()),
        };

        if !is_decimal(&chain_id) {
            return Err(invalid());
        }
        let empty = match &token {
            AccountToken::Address(t) | AccountToken::Name(t) => t.is_empty(),
        };
        if empty {
            return Err(invalid());
        }

        Ok(Self { chain_id, token })
    }
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
