pub mod locks;
pub mod position;
pub mod position_list;

pub use locks::*;
pub use position::*;
pub use position_list::*;

pub trait DerivedAccountIdent {
    const IDENT: &'static [u8];
}
pub trait DerivedAccountSize {
    const LEN: usize;
}

#[macro_export]
macro_rules! derive_account_size {
    ($name:ident) => {
        impl DerivedAccountSize for $name {
            const LEN: usize = $name::INIT_SPACE + 8;
        }
    };
}

#[macro_export]
macro_rules! derive_account_ident {
    ($name:ident) => {
        impl DerivedAccountIdent for $name {
            const IDENT: &'static [u8] = stringify!($name).as_bytes();
        }
    };
    ($name:ident, $custom_ident:expr) => {
        impl DerivedAccountIdent for $name {
            const IDENT: &'static [u8] = $custom_ident;
        }
    };
}

/// Ledger encoding for borsh accounts declared with `#[account]`.
#[macro_export]
macro_rules! stored_account {
    ($name:ident) => {
        impl $crate::ledger::StoredAccount for $name {
            fn unpack(data: &[u8]) -> anchor_lang::Result<Self> {
                let mut data: &[u8] = data;
                <$name as anchor_lang::AccountDeserialize>::try_deserialize(&mut data)
            }

            fn pack(&self) -> anchor_lang::Result<Vec<u8>> {
                let mut data = Vec::with_capacity(<$name as DerivedAccountSize>::LEN);
                anchor_lang::AccountSerialize::try_serialize(self, &mut data)?;
                Ok(data)
            }
        }
    };
}

/// Ledger encoding for packed accounts declared with `#[account(zero_copy(unsafe))]`.
#[macro_export]
macro_rules! stored_zero_copy_account {
    ($name:ident) => {
        impl $crate::ledger::StoredAccount for $name {
            fn unpack(data: &[u8]) -> anchor_lang::Result<Self> {
                let size = std::mem::size_of::<$name>();
                if data.len() < 8 {
                    return Err(anchor_lang::error::ErrorCode::AccountDiscriminatorNotFound.into());
                }
                if data[..8] != <$name as anchor_lang::Discriminator>::DISCRIMINATOR {
                    return Err(anchor_lang::error::ErrorCode::AccountDiscriminatorMismatch.into());
                }
                if data.len() < 8 + size {
                    return Err(anchor_lang::error::ErrorCode::AccountDidNotDeserialize.into());
                }
                Ok(bytemuck::pod_read_unaligned::<$name>(&data[8..8 + size]))
            }

            fn pack(&self) -> anchor_lang::Result<Vec<u8>> {
                let mut data = Vec::with_capacity(<$name as DerivedAccountSize>::LEN);
                data.extend_from_slice(&<$name as anchor_lang::Discriminator>::DISCRIMINATOR);
                data.extend_from_slice(bytemuck::bytes_of(self));
                Ok(data)
            }
        }
    };
}

/// Size of a zero-copy account: discriminator plus the packed struct.
#[macro_export]
macro_rules! size {
    ($name: ident) => {
        impl DerivedAccountSize for $name {
            const LEN: usize = std::mem::size_of::<$name>() + 8;
        }
    };
}
