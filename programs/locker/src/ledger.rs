use anchor_lang::prelude::*;
use anchor_lang::Discriminator;
use std::collections::BTreeMap;

/// Account types the ledger knows how to encode.
pub trait StoredAccount: Discriminator + Sized {
    fn unpack(data: &[u8]) -> Result<Self>;
    fn pack(&self) -> Result<Vec<u8>>;
}

/// Keyed account store every instruction runs against.
///
/// Accounts are addressed by `Pubkey` and hold the same bytes an on-chain
/// account would: an 8 byte discriminator followed by the serialized struct.
/// The clock is the only sysvar instructions read.
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    accounts: BTreeMap<Pubkey, Vec<u8>>,
    clock: Clock,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn set_clock(&mut self, clock: Clock) {
        self.clock = clock;
    }

    pub fn warp_to_timestamp(&mut self, unix_timestamp: i64) {
        self.clock.unix_timestamp = unix_timestamp;
    }

    pub fn exists(&self, key: &Pubkey) -> bool {
        self.accounts.contains_key(key)
    }

    pub fn load<T: StoredAccount>(&self, key: &Pubkey) -> Result<T> {
        let data = self
            .accounts
            .get(key)
            .ok_or(anchor_lang::error::ErrorCode::AccountNotInitialized)?;
        T::unpack(data)
    }

    pub fn store<T: StoredAccount>(&mut self, key: &Pubkey, account: &T) -> Result<()> {
        let data = account.pack()?;
        self.accounts.insert(*key, data);
        Ok(())
    }

    /// Creates the account unless one already lives at `key`. Returns whether
    /// a new account was written; an existing account is left untouched.
    pub fn create_if_absent<T: StoredAccount>(&mut self, key: &Pubkey, init: &T) -> Result<bool> {
        if self.exists(key) {
            return Ok(false);
        }
        self.store(key, init)?;
        Ok(true)
    }

    pub fn close(&mut self, key: &Pubkey) -> bool {
        self.accounts.remove(key).is_some()
    }

    /// Every account whose data starts with `T`'s discriminator, in key order.
    pub fn program_accounts<T: StoredAccount>(&self) -> Result<Vec<(Pubkey, T)>> {
        self.accounts
            .iter()
            .filter(|(_, data)| data.starts_with(&T::DISCRIMINATOR))
            .map(|(key, data)| Ok((*key, T::unpack(data)?)))
            .collect()
    }

    /// Runs `f` as one transaction: if it fails, every account write it made
    /// is discarded.
    pub fn atomic<R, F>(&mut self, f: F) -> Result<R>
    where
        F: FnOnce(&mut Ledger) -> Result<R>,
    {
        let snapshot = self.accounts.clone();
        let result = f(self);
        if result.is_err() {
            self.accounts = snapshot;
        }
        result
    }
}
