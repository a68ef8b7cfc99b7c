use anchor_lang::prelude::*;

pub mod address;
pub mod engine;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod queries;
pub mod structs;
pub mod types;

pub use errors::ErrorCode;
pub use instructions::*;
pub use ledger::Ledger;
pub use types::*;

declare_id!("34CS5UnQfoNmJ2MUgBc2VuM3BYFv7oYJTbEsbKrp3Zia");

/// The AMM program that owns position lists and position slots.
pub mod invariant {
    use anchor_lang::prelude::*;

    declare_id!("8HJq6TfDVvZQJWu2RzjvV9W1yNkJNCng2iYQWCxkp7bL");
}

/// A single call into the locker: the accounts it names, the keys that signed
/// it and the ledger it runs against.
pub struct Invocation<'a, T> {
    pub ledger: &'a mut Ledger,
    pub signers: &'a [Pubkey],
    pub accounts: T,
}

impl<'a, T> Invocation<'a, T> {
    pub fn new(ledger: &'a mut Ledger, signers: &'a [Pubkey], accounts: T) -> Self {
        Self {
            ledger,
            signers,
            accounts,
        }
    }
}

pub mod locker {
    use super::*;
    use crate::engine::{ClaimedFees, FeeEngine};

    pub fn initialize_user_locks(ix: Invocation<InitializeUserLocks>) -> Result<()> {
        ix.accounts.process(ix.ledger, ix.signers)
    }

    pub fn lock_position(
        ix: Invocation<LockPosition>,
        index: u32,
        lock_duration: u64,
    ) -> Result<()> {
        ix.accounts
            .process(ix.ledger, ix.signers, index, lock_duration)
    }

    pub fn unlock_position(ix: Invocation<UnlockPosition>, index: u32) -> Result<()> {
        ix.accounts.process(ix.ledger, ix.signers, index)
    }

    pub fn claim_fee<E: FeeEngine>(
        ix: Invocation<ClaimFee>,
        engine: &mut E,
        index: u32,
        lower_tick_index: i32,
        upper_tick_index: i32,
    ) -> Result<ClaimedFees> {
        ix.accounts.process(
            ix.ledger,
            engine,
            ix.signers,
            index,
            lower_tick_index,
            upper_tick_index,
        )
    }
}
