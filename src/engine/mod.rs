//! Preflight engine: validation checks bound to deployment context
//!
//! The free functions in [`crate::validation`] take every bound explicitly.
//! `PreflightEngine` binds the deployment-fixed pieces once (limits, the
//! protected factory and router addresses, a clock) and exposes the check
//! sequences the router's entry points run before mutating anything.
//!
//! Ambient time is read from the injected clock exactly once per validation
//! call, so a deadline cannot be re-evaluated against a different "now"
//! within one call.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::config::ValidationLimits;
use crate::error::Result;
use crate::types::{Address, Amount, Timestamp};
use crate::validation::{address, deadline, liquidity, path};

/// Source of ambient time
pub trait Clock: Clone + Send + Sync + 'static {
    fn now(&self) -> Timestamp;
}

/// Wall-clock time from the execution environment
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// Fixed time source for deterministic tests
#[derive(Clone)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

/// Arguments to an add-liquidity preflight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddLiquidityParams {
    pub token_a: Address,
    pub token_b: Address,
    pub amount_a_desired: Amount,
    pub amount_b_desired: Amount,
    pub amount_a_min: Amount,
    pub amount_b_min: Amount,
    pub to: Address,
    pub deadline: Timestamp,
}

/// Arguments to a swap preflight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapParams {
    pub amount_in: Amount,
    /// Deliberately unchecked: zero means "accept any output"
    pub amount_out_min: Amount,
    pub route: Vec<Address>,
    pub to: Address,
    pub deadline: Timestamp,
}

/// Validation engine bound to one deployment's limits and infrastructure
pub struct PreflightEngine<C: Clock = SystemClock> {
    limits: ValidationLimits,
    factory: Address,
    router: Address,
    clock: C,
}

impl PreflightEngine<SystemClock> {
    /// Engine on wall-clock time
    pub fn new(limits: ValidationLimits, factory: Address, router: Address) -> Self {
        Self::with_clock(limits, factory, router, SystemClock)
    }
}

impl<C: Clock> PreflightEngine<C> {
    /// Engine with an injected clock
    pub fn with_clock(limits: ValidationLimits, factory: Address, router: Address, clock: C) -> Self {
        Self {
            limits,
            factory,
            router,
            clock,
        }
    }

    /// Limits this engine applies
    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    /// Check a deadline against the clock and the configured extension cap
    pub fn validate_deadline(&self, when: Timestamp) -> Result<()> {
        deadline::ensure_valid(when, self.clock.now(), self.limits.max_deadline_extension)
    }

    /// Check a recipient against the protected factory/router addresses
    pub fn validate_recipient(&self, to: Address) -> Result<()> {
        address::ensure_recipient(to, self.factory, self.router)
    }

    /// Check a swap route against the configured length cap
    pub fn validate_path(&self, route: &[Address]) -> Result<()> {
        path::ensure_well_formed(route, self.limits.max_path_length)
    }

    /// Full preflight for an add-liquidity operation
    ///
    /// Order: token pair, liquidity amounts (with the configured floor),
    /// recipient, deadline. First failure aborts; nothing has mutated yet
    /// by contract.
    pub fn validate_add_liquidity(&self, params: &AddLiquidityParams) -> Result<()> {
        debug!(token_a = %params.token_a, token_b = %params.token_b, "add-liquidity preflight");
        address::ensure_token_pair(params.token_a, params.token_b)?;
        liquidity::ensure_liquidity_amounts(
            params.amount_a_desired,
            params.amount_b_desired,
            params.amount_a_min,
            params.amount_b_min,
            self.limits.min_liquidity,
        )?;
        address::ensure_recipient(params.to, self.factory, self.router)?;
        deadline::ensure_valid(
            params.deadline,
            self.clock.now(),
            self.limits.max_deadline_extension,
        )?;
        Ok(())
    }

    /// Full preflight for a swap operation
    ///
    /// Order: swap amounts and route, recipient, deadline.
    pub fn validate_swap(&self, params: &SwapParams) -> Result<()> {
        debug!(amount_in = params.amount_in, hops = params.route.len(), "swap preflight");
        liquidity::ensure_swap_amounts(
            params.amount_in,
            &params.route,
            self.limits.max_path_length,
        )?;
        address::ensure_recipient(params.to, self.factory, self.router)?;
        deadline::ensure_valid(
            params.deadline,
            self.clock.now(),
            self.limits.max_deadline_extension,
        )?;
        Ok(())
    }
}
