use super::DerivedAccountSize;
use crate::types::{FeeGrowth, Liquidity, SecondsPerLiquidity, TokenAmount};
use crate::{size, stored_zero_copy_account};
use anchor_lang::prelude::*;

/// Liquidity position record, byte-compatible with the AMM's slot accounts.
/// `id` is assigned once by the AMM; `owner` names the custodian whose list
/// currently holds the record.
#[account(zero_copy(unsafe))]
#[repr(packed)]
#[derive(PartialEq, Default, Debug)]
pub struct Position {
    pub owner: Pubkey,
    pub pool: Pubkey,
    pub id: u128,
    pub liquidity: Liquidity,
    pub lower_tick_index: i32,
    pub upper_tick_index: i32,
    pub fee_growth_inside_x: FeeGrowth,
    pub fee_growth_inside_y: FeeGrowth,
    pub seconds_per_liquidity_inside: SecondsPerLiquidity,
    pub last_slot: u64,
    pub tokens_owed_x: TokenAmount,
    pub tokens_owed_y: TokenAmount,
    pub bump: u8,
}

size!(Position);
stored_zero_copy_account!(Position);

impl Position {
    /// Compares every field except custody and slot bookkeeping.
    pub fn same_position(&self, other: &Position) -> bool {
        self.pool == other.pool
            && { self.id } == { other.id }
            && { self.liquidity } == { other.liquidity }
            && { self.lower_tick_index } == { other.lower_tick_index }
            && { self.upper_tick_index } == { other.upper_tick_index }
            && { self.fee_growth_inside_x } == { other.fee_growth_inside_x }
            && { self.fee_growth_inside_y } == { other.fee_growth_inside_y }
            && { self.seconds_per_liquidity_inside } == { other.seconds_per_liquidity_inside }
            && { self.last_slot } == { other.last_slot }
            && { self.tokens_owed_x } == { other.tokens_owed_x }
            && { self.tokens_owed_y } == { other.tokens_owed_y }
    }
}
