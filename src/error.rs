//! Router Guard Error Types

use crate::types::{Address, Amount, Timestamp};
use thiserror::Error;

/// Errors raised by the validation engine and the ownership guard
///
/// Every variant carries the diagnostic fields a caller needs to identify
/// which argument violated which bound, without replaying the operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// Address failed a null-sentinel or protected-address check
    #[error("invalid address: {0}")]
    InvalidAddress(Address),

    /// Numeric value outside its required bound
    #[error("invalid amount: got {got}, expected {min}..={max}")]
    InvalidAmount {
        got: Amount,
        min: Amount,
        max: Amount,
    },

    /// Zero-length sequence where at least one element is required
    #[error("empty array")]
    EmptyArray,

    /// Swap path length out of bounds
    #[error("invalid path: length {length}, expected {min_len}..={max_len}")]
    InvalidPath {
        length: usize,
        min_len: usize,
        max_len: usize,
    },

    /// Repeated address at two positions in a swap path
    #[error("duplicate address {address} in path at positions {first} and {second}")]
    DuplicateAddressInPath {
        address: Address,
        first: usize,
        second: usize,
    },

    /// Deadline in the past, or further out than the allowed extension
    #[error("deadline expired: deadline {deadline}, now {now}")]
    DeadlineExpired { deadline: Timestamp, now: Timestamp },

    /// Slippage minimum exceeds the desired amount on one side
    #[error(
        "insufficient liquidity amounts: desired ({amount_a}, {amount_b}), minimums ({min_a}, {min_b})"
    )]
    InsufficientLiquidityAmounts {
        amount_a: Amount,
        amount_b: Amount,
        min_a: Amount,
        min_b: Amount,
    },

    /// Zero slippage minimum against a nonzero desired amount
    #[error("invalid slippage: got {got}, minimum {min}")]
    InvalidSlippage { got: Amount, min: Amount },

    /// Parallel arrays that must be indexed together differ in length
    #[error("array length mismatch: {left} != {right}")]
    ArrayLengthMismatch { left: usize, right: usize },

    /// Caller is not the current owner (or ownership has been renounced)
    #[error("unauthorized caller: {caller}")]
    Unauthorized { caller: Address },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for router guard operations
pub type Result<T> = std::result::Result<T, RouterError>;
