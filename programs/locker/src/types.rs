use anchor_lang::prelude::*;

// Fixed-point values stored inside a position record. The AMM owns their
// arithmetic; the locker only carries them between slots.

pub const LIQUIDITY_DENOMINATOR: u128 = 1_000_000;

#[zero_copy]
#[derive(Default, std::fmt::Debug, PartialEq, Eq, PartialOrd, Ord, AnchorSerialize, AnchorDeserialize)]
pub struct Liquidity {
    pub v: u128,
}

#[zero_copy]
#[derive(Default, std::fmt::Debug, PartialEq, Eq, PartialOrd, Ord, AnchorSerialize, AnchorDeserialize)]
pub struct FeeGrowth {
    pub v: u128,
}

#[zero_copy]
#[derive(Default, std::fmt::Debug, PartialEq, Eq, PartialOrd, Ord, AnchorSerialize, AnchorDeserialize)]
pub struct SecondsPerLiquidity {
    pub v: u128,
}

#[zero_copy]
#[derive(Default, std::fmt::Debug, PartialEq, Eq, PartialOrd, Ord, AnchorSerialize, AnchorDeserialize)]
pub struct TokenAmount {
    pub v: u64,
}

impl Liquidity {
    pub fn from_integer(integer: u128) -> Self {
        Self {
            v: integer * LIQUIDITY_DENOMINATOR,
        }
    }
}

impl TokenAmount {
    pub fn new(v: u64) -> Self {
        Self { v }
    }
}
