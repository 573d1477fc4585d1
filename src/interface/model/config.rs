use crate::interface::{Seconds, TokenAmount};
use near_sdk::serde::{Deserialize, Serialize};

/// Config change request - only the fields that are set are applied.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(crate = "near_sdk::serde")]
pub struct Config {
    pub restricted_transfer_threshold: Option<TokenAmount>,
    pub staking_maturity: Option<Seconds>,
    /// basis points, i.e., 100 bps = 1%
    pub swap_fee_bps: Option<u16>,
}
