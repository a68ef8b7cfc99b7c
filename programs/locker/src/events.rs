use anchor_lang::prelude::*;

#[event]
pub struct LockPositionEvent {
    pub owner: Pubkey,
    pub authority: Pubkey,
    pub position_id: u128,
    pub end_timestamp: u64,
}

#[event]
pub struct UnlockPositionEvent {
    pub owner: Pubkey,
    pub authority: Pubkey,
    pub position_id: u128,
    pub current_timestamp: u64,
}

#[event]
pub struct ClaimLockedFeeEvent {
    pub owner: Pubkey,
    pub authority: Pubkey,
    pub position_id: u128,
    pub amount_x: u64,
    pub amount_y: u64,
}
