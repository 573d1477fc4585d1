use crate::interface::{PoolId, Timestamp, TokenAmount};
use near_sdk::{
    serde::{Deserialize, Serialize},
    AccountId,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct StakingPoolInfo {
    pub id: PoolId,
    pub owner_id: AccountId,
    /// custody account that holds the pool's reserve and staked tokens
    pub account_id: AccountId,
    pub created_at: Timestamp,
    /// stakes are accepted until the pool matures - claims are accepted once the pool has matured
    pub matures_at: Timestamp,
    /// remaining reward reserve
    pub reserve: TokenAmount,
    pub total_staked: TokenAmount,
    pub initialized: bool,
}
