use crate::interface::{self, TokenAmount};
use near_sdk::{
    json_types::ValidAccountId,
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(crate = "near_sdk::serde")]
pub struct ContractSettings {
    /// minted to the owner at issuance - the supply is fixed
    pub total_supply: TokenAmount,
    /// defaults to the predecessor account
    pub owner_id: Option<ValidAccountId>,
    /// overrides the default config
    pub config: Option<interface::Config>,
}
