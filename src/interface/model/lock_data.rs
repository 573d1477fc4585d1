use crate::interface::{Seconds, Timestamp, TokenAmount};
use near_sdk::{
    serde::{Deserialize, Serialize},
    AccountId,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct LockData {
    /// token contract account ID
    pub token: AccountId,
    pub owner_id: AccountId,
    pub amount: TokenAmount,
    pub start_time: Timestamp,
    pub duration: Seconds,
    /// `start_time + duration`
    pub matures_at: Timestamp,
    /// set once the lock has been unlocked
    pub consumed: bool,
}
