//! defines the internal domain model used to implement the business logic
//!
//! NOTE: the domain model is separate from the interface model. That being said, the interface model
//! closely mirrors the domain model.

mod access_gate;
mod block_height;
mod fee_switch;
mod ledger;
mod lock;
mod lock_idx;
mod pool_id;
mod seconds;
mod staking_pool;
mod staking_pools;
mod time_lock_vault;
mod timestamp;
mod token_amount;

pub use access_gate::AccessGate;
pub use block_height::BlockHeight;
pub use fee_switch::FeeSwitch;
pub use ledger::Ledger;
pub use lock::Lock;
pub use lock_idx::LockIdx;
pub use pool_id::PoolId;
pub use seconds::Seconds;
pub use staking_pool::{Payout, StakingPool};
pub use staking_pools::StakingPools;
pub use time_lock_vault::TimeLockVault;
pub use timestamp::Timestamp;
pub use token_amount::TokenAmount;
