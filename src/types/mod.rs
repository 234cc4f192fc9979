//! Core value types shared by the validation engine and the ownership guard
//!
//! Addresses are 20-byte account references in the EVM style. The all-zero
//! address is the null sentinel: it never refers to a real account and is
//! used both as the "does not exist" value in validation and as the terminal
//! owner after renouncement.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Unsigned token amount
pub type Amount = u128;

/// Unix timestamp in seconds, as reported by the execution environment
pub type Timestamp = u64;

/// Largest representable amount, used as the open upper bound in checks
pub const MAX_AMOUNT: Amount = Amount::MAX;

/// 20-byte account address
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The null sentinel address
    pub const ZERO: Address = Address([0u8; 20]);

    /// Returns true if this is the null sentinel
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Raw bytes of the address
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }
}

/// Address parse error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressParseError {
    /// Hex decoding failed
    #[error("invalid hex in address: {0}")]
    InvalidHex(String),

    /// Decoded byte length is not 20
    #[error("invalid address length: got {0} bytes, expected 20")]
    InvalidLength(usize),
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes =
            hex::decode(stripped).map_err(|e| AddressParseError::InvalidHex(e.to_string()))?;
        let array: [u8; 20] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| AddressParseError::InvalidLength(bytes.len()))?;
        Ok(Address(array))
    }
}
