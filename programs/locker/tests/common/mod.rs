#![allow(dead_code)]

use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use locker::address::{lock_authority, verify_lock_authority};
use locker::engine::{ClaimFeeAccounts, ClaimedFees, FeeEngine};
use locker::queries::get_user_locks;
use locker::structs::{Locks, Position, PositionList};
use locker::{ErrorCode, FeeGrowth, Ledger, Liquidity, TokenAmount, LIQUIDITY_DENOMINATOR};
use std::collections::HashMap;
use std::fmt::Debug;

pub const START_TIMESTAMP: i64 = 1_700_000_000;
pub const POOL_DISABLED: u32 = 6040;
pub const LOWER_TICK: i32 = -9780;
pub const UPPER_TICK: i32 = 32343;

#[derive(Clone, Copy, Debug, Default)]
pub struct TestPool {
    pub token_x: Pubkey,
    pub token_y: Pubkey,
    pub fee_growth_global_x: FeeGrowth,
    pub fee_growth_global_y: FeeGrowth,
    pub disabled: bool,
}

/// Minimal AMM: opens positions into owner lists and settles fees from a
/// per-pool fee growth counter.
#[derive(Default)]
pub struct TestMarket {
    pub pools: HashMap<Pubkey, TestPool>,
    pub balances: HashMap<Pubkey, u64>,
    next_position_id: u128,
}

impl TestMarket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_pool(&mut self) -> Pubkey {
        let pool = Pubkey::new_unique();
        self.pools.insert(
            pool,
            TestPool {
                token_x: Pubkey::new_unique(),
                token_y: Pubkey::new_unique(),
                ..Default::default()
            },
        );
        pool
    }

    pub fn pool(&self, pool: &Pubkey) -> TestPool {
        self.pools[pool]
    }

    pub fn accrue_fees(&mut self, pool: &Pubkey, growth_x: u128, growth_y: u128) {
        let state = self.pools.get_mut(pool).unwrap();
        state.fee_growth_global_x.v += growth_x;
        state.fee_growth_global_y.v += growth_y;
    }

    pub fn disable_pool(&mut self, pool: &Pubkey) {
        self.pools.get_mut(pool).unwrap().disabled = true;
    }

    pub fn balance(&self, account: &Pubkey) -> u64 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Opens a position for `owner` in `pool` and returns its id.
    pub fn create_position(&mut self, ledger: &mut Ledger, owner: &Pubkey, pool: &Pubkey) -> u128 {
        let state = self.pool(pool);
        let id = self.next_position_id;
        self.next_position_id += 1;

        PositionList::create_if_absent(ledger, owner, owner).unwrap();
        PositionList::append(
            ledger,
            owner,
            Position {
                owner: *owner,
                pool: *pool,
                id,
                liquidity: Liquidity::from_integer(1),
                lower_tick_index: LOWER_TICK,
                upper_tick_index: UPPER_TICK,
                fee_growth_inside_x: state.fee_growth_global_x,
                fee_growth_inside_y: state.fee_growth_global_y,
                ..Default::default()
            },
        )
        .unwrap();
        id
    }

    pub fn create_positions(
        &mut self,
        ledger: &mut Ledger,
        owner: &Pubkey,
        pool: &Pubkey,
        count: usize,
    ) -> Vec<u128> {
        (0..count)
            .map(|_| self.create_position(ledger, owner, pool))
            .collect()
    }
}

impl FeeEngine for TestMarket {
    fn claim_fee(
        &mut self,
        ledger: &mut Ledger,
        accounts: ClaimFeeAccounts,
        signer_seeds: &[&[u8]],
        _index: u32,
        lower_tick_index: i32,
        upper_tick_index: i32,
    ) -> Result<ClaimedFees> {
        if !verify_lock_authority(signer_seeds, &accounts.position_owner) {
            return Err(ProgramError::MissingRequiredSignature.into());
        }
        let pool = *self
            .pools
            .get(&accounts.pool)
            .ok_or(ProgramError::InvalidAccountData)?;
        if pool.disabled {
            return Err(ProgramError::Custom(POOL_DISABLED).into());
        }

        let mut position: Position = ledger.load(&accounts.position)?;
        if position.owner != accounts.position_owner
            || position.pool != accounts.pool
            || { position.lower_tick_index } != lower_tick_index
            || { position.upper_tick_index } != upper_tick_index
        {
            return Err(ProgramError::InvalidAccountData.into());
        }

        let liquidity = { position.liquidity }.v;
        let growth_x = pool.fee_growth_global_x.v - { position.fee_growth_inside_x }.v;
        let growth_y = pool.fee_growth_global_y.v - { position.fee_growth_inside_y }.v;
        let amount_x = { position.tokens_owed_x }.v
            + (growth_x * liquidity / LIQUIDITY_DENOMINATOR) as u64;
        let amount_y = { position.tokens_owed_y }.v
            + (growth_y * liquidity / LIQUIDITY_DENOMINATOR) as u64;

        position.fee_growth_inside_x = pool.fee_growth_global_x;
        position.fee_growth_inside_y = pool.fee_growth_global_y;
        position.tokens_owed_x = TokenAmount::new(0);
        position.tokens_owed_y = TokenAmount::new(0);
        ledger.store(&accounts.position, &position)?;

        *self.balances.entry(accounts.account_x).or_default() += amount_x;
        *self.balances.entry(accounts.account_y).or_default() += amount_y;

        Ok(ClaimedFees { amount_x, amount_y })
    }
}

pub fn setup() -> (Ledger, TestMarket, Pubkey) {
    let mut ledger = Ledger::new();
    ledger.warp_to_timestamp(START_TIMESTAMP);
    let mut market = TestMarket::new();
    let pool = market.create_pool();
    (ledger, market, pool)
}

pub fn now(ledger: &Ledger) -> u64 {
    Locks::now(ledger.clock()).unwrap()
}

pub fn assert_error<T: Debug>(result: Result<T>, expected: ErrorCode) {
    assert_eq!(result.unwrap_err(), Error::from(expected));
}

pub fn ids(ledger: &Ledger, authority: &Pubkey) -> Vec<u128> {
    if !PositionList::exists(ledger, authority) {
        return vec![];
    }
    PositionList::positions(ledger, authority)
        .unwrap()
        .iter()
        .map(|position| position.id)
        .collect()
}

pub fn sorted(mut ids: Vec<u128>) -> Vec<u128> {
    ids.sort_unstable();
    ids
}

pub fn lock_ids(ledger: &Ledger, owner: &Pubkey) -> Vec<u128> {
    get_user_locks(ledger, owner)
        .map(|locks| locks.iter().map(|lock| lock.position_id).collect())
        .unwrap_or_default()
}

/// List density and registry/list agreement for one owner.
pub fn assert_consistent(ledger: &Ledger, owner: &Pubkey) {
    let (authority, _) = lock_authority(owner);

    for custodian in [*owner, authority] {
        if !PositionList::exists(ledger, &custodian) {
            continue;
        }
        let positions = PositionList::positions(ledger, &custodian).unwrap();
        assert_eq!(positions.len() as u32, PositionList::head(ledger, &custodian).unwrap());
        for position in &positions {
            assert_eq!(position.owner, custodian);
        }
    }

    assert_eq!(sorted(lock_ids(ledger, owner)), sorted(ids(ledger, &authority)));
}
