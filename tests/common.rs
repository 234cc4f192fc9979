#![allow(dead_code)]

use dex_router_guard::engine::{AddLiquidityParams, FixedClock, PreflightEngine, SwapParams};
use dex_router_guard::{Address, Timestamp, ValidationLimits};

pub const NOW: Timestamp = 1_700_000_000;

pub fn addr(n: u8) -> Address {
    Address([n; 20])
}

pub fn factory() -> Address {
    addr(0xfa)
}

pub fn router() -> Address {
    addr(0xf0)
}

pub fn fixed_engine() -> PreflightEngine<FixedClock> {
    PreflightEngine::with_clock(
        ValidationLimits::default(),
        factory(),
        router(),
        FixedClock(NOW),
    )
}

pub struct AddLiquidityBuilder {
    params: AddLiquidityParams,
}

impl AddLiquidityBuilder {
    pub fn new() -> Self {
        Self {
            params: AddLiquidityParams {
                token_a: addr(1),
                token_b: addr(2),
                amount_a_desired: 10_000,
                amount_b_desired: 20_000,
                amount_a_min: 9_500,
                amount_b_min: 19_000,
                to: addr(3),
                deadline: NOW + 600,
            },
        }
    }

    pub fn tokens(mut self, a: Address, b: Address) -> Self {
        self.params.token_a = a;
        self.params.token_b = b;
        self
    }

    pub fn desired(mut self, a: u128, b: u128) -> Self {
        self.params.amount_a_desired = a;
        self.params.amount_b_desired = b;
        self
    }

    pub fn minimums(mut self, a: u128, b: u128) -> Self {
        self.params.amount_a_min = a;
        self.params.amount_b_min = b;
        self
    }

    pub fn to(mut self, to: Address) -> Self {
        self.params.to = to;
        self
    }

    pub fn deadline(mut self, deadline: Timestamp) -> Self {
        self.params.deadline = deadline;
        self
    }

    pub fn build(self) -> AddLiquidityParams {
        self.params
    }
}

pub fn swap_params(route: Vec<Address>) -> SwapParams {
    SwapParams {
        amount_in: 1_000,
        amount_out_min: 0,
        route,
        to: addr(9),
        deadline: NOW + 600,
    }
}
