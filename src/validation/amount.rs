//! Numeric bound checks for amounts and sequence lengths

use crate::error::{Result, RouterError};
use crate::types::{Amount, MAX_AMOUNT};

/// Check that an amount is strictly positive
pub fn ensure_positive(amount: Amount) -> Result<()> {
    if amount == 0 {
        return Err(RouterError::InvalidAmount {
            got: amount,
            min: 1,
            max: MAX_AMOUNT,
        });
    }
    Ok(())
}

/// Check that an amount is positive and no greater than `max`
pub fn ensure_bounded(amount: Amount, max: Amount) -> Result<()> {
    if amount == 0 || amount > max {
        return Err(RouterError::InvalidAmount {
            got: amount,
            min: 1,
            max,
        });
    }
    Ok(())
}

/// Check that an amount meets a minimum floor
pub fn ensure_at_least(amount: Amount, min: Amount) -> Result<()> {
    if amount < min {
        return Err(RouterError::InvalidAmount {
            got: amount,
            min,
            max: MAX_AMOUNT,
        });
    }
    Ok(())
}

/// Check that a sequence length is within `1..=max`
///
/// An empty sequence is its own error kind; an oversized one reports the
/// violated length bound.
pub fn ensure_sequence_length(length: usize, max: usize) -> Result<()> {
    if length == 0 {
        return Err(RouterError::EmptyArray);
    }
    if length > max {
        return Err(RouterError::InvalidAmount {
            got: length as Amount,
            min: 1,
            max: max as Amount,
        });
    }
    Ok(())
}

/// Check that two parallel sequences have equal length
pub fn ensure_lengths_match(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(RouterError::ArrayLengthMismatch { left, right });
    }
    Ok(())
}
