//! Stateless precondition checks over caller-supplied router inputs
//!
//! Each check is total and side-effect-free: it either returns `Ok(())` or
//! exactly one typed [`RouterError`](crate::error::RouterError) describing
//! the first violated rule. Composite checks evaluate their sub-checks in a
//! fixed order and short-circuit; no partial validation result exists.
//!
//! Business-logic operations (swaps, liquidity changes) run the relevant
//! checks before touching any state, so a failure here means nothing has
//! happened yet.

pub mod address;
pub mod amount;
pub mod deadline;
pub mod liquidity;
pub mod path;

pub use address::{ensure_exists, ensure_not_protected, ensure_recipient, ensure_token_pair};
pub use amount::{
    ensure_at_least, ensure_bounded, ensure_lengths_match, ensure_positive, ensure_sequence_length,
};
pub use deadline::ensure_valid as ensure_deadline_valid;
pub use liquidity::{ensure_liquidity_amounts, ensure_slippage_consistent, ensure_swap_amounts};
pub use path::{ensure_well_formed as ensure_path_well_formed, MIN_PATH_LENGTH};
