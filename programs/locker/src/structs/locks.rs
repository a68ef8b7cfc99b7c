use super::{DerivedAccountIdent, DerivedAccountSize};
use crate::ErrorCode;
use crate::{derive_account_ident, derive_account_size, stored_account};
use anchor_lang::prelude::*;

pub const MAX_CONFIRMATION_TIMEOUT: u64 = 300;

/// Lock registry of a single owner, stored at the owner's lock authority.
/// `positions` always mirrors the authority's position list: one entry per
/// position the authority holds.
#[account]
#[derive(PartialEq, Default, Debug, InitSpace)]
pub struct Locks {
    #[max_len(10)]
    pub positions: Vec<LockedPosition>,
    pub bump: u8,
}

#[derive(PartialEq, Copy, Clone, Default, Debug, AnchorSerialize, AnchorDeserialize, InitSpace)]
pub struct LockedPosition {
    pub position_id: u128,
    pub end_timestamp: u64,
}

derive_account_ident!(Locks);
derive_account_size!(Locks);
derive_account_size!(LockedPosition);
stored_account!(Locks);

impl Locks {
    pub const MAX_LOCKS: usize = 10;

    pub fn new(bump: u8) -> Self {
        Self {
            positions: Vec::with_capacity(Self::MAX_LOCKS),
            bump,
        }
    }

    pub fn is_full(&self) -> bool {
        self.positions.len() >= Self::MAX_LOCKS
    }

    pub fn end_timestamp(now: u64, lock_duration: u64) -> Result<u64> {
        Ok(now.checked_add(lock_duration).ok_or(ErrorCode::InvalidLockDuration)?)
    }

    pub fn add_lock(&mut self, position_id: u128, end_timestamp: u64) -> Result<()> {
        require!(!self.is_full(), ErrorCode::ExceededLockLimit);

        self.positions.push(LockedPosition {
            position_id,
            end_timestamp,
        });

        Ok(())
    }

    pub fn is_expired(&self, index: usize, now: u64) -> Result<bool> {
        let lock = self.positions.get(index).ok_or(ErrorCode::LockNotFound)?;
        Ok(lock.end_timestamp <= now)
    }

    pub fn get_index(&self, position_id: u128) -> Result<usize> {
        Ok(self
            .positions
            .iter()
            .position(|lock| lock.position_id == position_id)
            .ok_or(ErrorCode::LockNotFound)?)
    }

    /// Swap-removes the lock of `position_id`: the last entry takes its place.
    pub fn remove_lock(&mut self, position_id: u128) -> Result<LockedPosition> {
        let index = self.get_index(position_id)?;
        Ok(self.positions.swap_remove(index))
    }

    pub fn now(clock: &Clock) -> Result<u64> {
        Ok(u64::try_from(clock.unix_timestamp).map_err(|_| ErrorCode::ClockError)?)
    }

    /// Longest duration a lock requested at `now` can carry and still be
    /// accepted once the transaction lands.
    pub fn max_lock_duration(now: u64) -> u64 {
        u64::MAX
            .saturating_sub(now)
            .saturating_sub(MAX_CONFIRMATION_TIMEOUT)
    }
}
