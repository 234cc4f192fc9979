//! Slippage and liquidity amount policy
//!
//! Liquidity operations carry a (desired, minimum) pair per side. The
//! minimum must never exceed the desired amount, and a zero minimum against
//! a nonzero desired amount is rejected as a misconfigured order rather than
//! accepted as "any price" — an accidental zero there would strip all
//! slippage protection from the caller.

use crate::error::{Result, RouterError};
use crate::types::{Address, Amount};
use crate::validation::amount::{ensure_at_least, ensure_positive};
use crate::validation::path;

/// Check slippage consistency on both sides of a two-sided operation
///
/// Per side, ordering first: `min <= desired`, then the zero-minimum policy.
/// Side A is fully checked before side B.
pub fn ensure_slippage_consistent(
    desired_a: Amount,
    min_a: Amount,
    desired_b: Amount,
    min_b: Amount,
) -> Result<()> {
    ensure_side(desired_a, min_a, desired_b, min_b, Side::A)?;
    ensure_side(desired_a, min_a, desired_b, min_b, Side::B)?;
    Ok(())
}

enum Side {
    A,
    B,
}

fn ensure_side(
    desired_a: Amount,
    min_a: Amount,
    desired_b: Amount,
    min_b: Amount,
    side: Side,
) -> Result<()> {
    let (desired, min) = match side {
        Side::A => (desired_a, min_a),
        Side::B => (desired_b, min_b),
    };
    if min > desired {
        return Err(RouterError::InsufficientLiquidityAmounts {
            amount_a: desired_a,
            amount_b: desired_b,
            min_a,
            min_b,
        });
    }
    if desired > 0 && min == 0 {
        return Err(RouterError::InvalidSlippage { got: 0, min: 1 });
    }
    Ok(())
}

/// Composite check for a liquidity operation's amounts
///
/// Fixed order, short-circuiting: desired A positive, desired B positive,
/// slippage consistency on both sides, then the minimum-viable-liquidity
/// floor on A and on B.
pub fn ensure_liquidity_amounts(
    desired_a: Amount,
    desired_b: Amount,
    min_a: Amount,
    min_b: Amount,
    floor: Amount,
) -> Result<()> {
    ensure_positive(desired_a)?;
    ensure_positive(desired_b)?;
    ensure_slippage_consistent(desired_a, min_a, desired_b, min_b)?;
    ensure_at_least(desired_a, floor)?;
    ensure_at_least(desired_b, floor)?;
    Ok(())
}

/// Composite check for a swap's amounts and route
///
/// `amount_out_min` is deliberately unconstrained: zero is a valid
/// "accept any output" value for swaps, unlike the liquidity minimums.
pub fn ensure_swap_amounts(amount_in: Amount, route: &[Address], max_path_len: usize) -> Result<()> {
    ensure_positive(amount_in)?;
    path::ensure_well_formed(route, max_path_len)?;
    Ok(())
}
