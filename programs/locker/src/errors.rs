use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Invalid lock duration")]
    InvalidLockDuration = 0, // 1770
    #[msg("Lock not expired")]
    LockNotExpired = 1, // 1771
    #[msg("Couldnt retrieve current timestamp")]
    ClockError = 2, // 1772
    #[msg("Invalid Position")]
    InvalidPosition = 3, // 1773
    #[msg("Lock not found")]
    LockNotFound = 4, // 1774
    #[msg("Too many locks")]
    ExceededLockLimit = 5, // 1775
    #[msg("Position index out of range")]
    InvalidPositionIndex = 6, // 1776
    #[msg("Missing signature of the position owner")]
    Unauthorized = 7, // 1777
    #[msg("Position list does not exist")]
    PositionListNotFound = 8, // 1778
    #[msg("Position list is full")]
    PositionListFull = 9, // 1779
}
