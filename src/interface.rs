//! defines the interfaces that the contract exposes externally

pub mod access_gate;
pub mod contract_owner;
pub mod fungible_token;
mod model;
pub mod staking_pools;
pub mod time_lock_vault;

pub use access_gate::AccessGate;
pub use contract_owner::ContractOwner;
pub use fungible_token::FungibleToken;
pub use model::*;
pub use staking_pools::StakingPools;
pub use time_lock_vault::TimeLockVault;
