//! Validation and normalization of literal address tokens.
//!
//! Acceptance follows the rules wallets use: the token must be `0x` plus
//! 40 hex digits; a uniformly-cased body is normalized without a checksum
//! check, while a mixed-case body must carry a valid EIP-55 checksum.

use std::str::FromStr;

use alloy_primitives::hex::FromHexError;
use alloy_primitives::{Address, AddressError};

use crate::error::ResolutionError;

/// Parses a literal address token into a canonical [`Address`].
///
/// The returned address renders in EIP-55 checksummed form via `Display`.
///
/// # Errors
///
/// Returns [`ResolutionError::InvalidAddress`] when the token is missing
/// the `0x` prefix, has the wrong length, contains non-hex characters, or
/// carries an invalid checksum.
pub fn parse_literal(token: &str) -> Result<Address, ResolutionError> {
    parse_inner(token).map_err(|source| ResolutionError::InvalidAddress {
        token: token.to_owned(),
        source,
    })
}

fn parse_inner(token: &str) -> Result<Address, AddressError> {
    let body = token
        .strip_prefix("0x")
        .filter(|body| body.len() == Address::len_bytes() * 2)
        .ok_or_else(|| AddressError::from(FromHexError::InvalidStringLength))?;

    let has_upper = body.bytes().any(|b| b.is_ascii_uppercase());
    let has_lower = body.bytes().any(|b| b.is_ascii_lowercase());
    if has_upper && has_lower {
        Address::parse_checksummed(token, None)
    } else {
        Address::from_str(body).map_err(AddressError::from)
    }
}
