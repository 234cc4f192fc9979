//! DEX Router Guard - Pre-execution validation and access control
//!
//! This crate provides the input-sanitization layer a DEX router runs before
//! any state-mutating operation (swaps, liquidity changes, ownership
//! changes), plus the single-owner guard that gates administrative calls.
//! Business execution lives elsewhere and must only proceed once every
//! invoked check has returned `Ok`.
//!
//! ## Design Principles
//!
//! 1. **Stateless checks**: every validation is a pure function of its
//!    arguments plus ambient time
//! 2. **Binary outcomes**: a check succeeds silently or fails with exactly
//!    one typed error naming the first violated rule
//! 3. **Fail before effect**: composites short-circuit, so a failure means
//!    no state has changed
//! 4. **Injected time**: ambient time comes from a [`engine::Clock`], read
//!    once per validation call

pub mod config;
pub mod engine;
pub mod error;
pub mod ownership;
pub mod types;
pub mod validation;

pub use config::ValidationLimits;
pub use engine::{AddLiquidityParams, Clock, FixedClock, PreflightEngine, SwapParams, SystemClock};
pub use error::{Result, RouterError};
pub use ownership::{OwnershipGuard, OwnershipTransferred};
pub use types::{Address, Amount, Timestamp, MAX_AMOUNT};
