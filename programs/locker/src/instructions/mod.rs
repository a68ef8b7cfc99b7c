pub mod claim_fee;
pub mod init_locks;
pub mod lock_position;
pub mod unlock_position;

pub use claim_fee::*;
pub use init_locks::*;
pub use lock_position::*;
pub use unlock_position::*;
