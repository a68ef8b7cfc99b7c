//! Deterministic account addresses.
//!
//! Every address is a program derived address: a hash of a seed tag, the
//! identity the account belongs to and, for position slots, the slot index.
//! The tags keep the lock authority, list and slot namespaces disjoint, and
//! the fixed width of the identity and index seeds keeps distinct
//! `(identity, index)` pairs from producing the same seed bytes.

use crate::invariant;
use crate::structs::{DerivedAccountIdent, Locks};
use anchor_lang::prelude::*;

pub const POSITION_LIST_SEED: &[u8] = b"positionlistv1";
pub const POSITION_SEED: &[u8] = b"positionv1";

/// Lock authority of `owner`. The same address holds the owner's lock
/// registry and is the custodian of every position the owner has locked.
pub fn lock_authority(owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[Locks::IDENT, owner.as_ref()], &crate::ID)
}

pub fn position_list_address(authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POSITION_LIST_SEED, authority.as_ref()], &invariant::ID)
}

pub fn position_address(authority: &Pubkey, index: u32) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[POSITION_SEED, authority.as_ref(), &index.to_le_bytes()],
        &invariant::ID,
    )
}

/// Re-derives a lock authority from its signer seeds, the way the AMM checks a
/// delegated signature.
pub fn verify_lock_authority(seeds: &[&[u8]], authority: &Pubkey) -> bool {
    Pubkey::create_program_address(seeds, &crate::ID)
        .map(|derived| derived == *authority)
        .unwrap_or(false)
}
