use crate::{
    domain::{Seconds, TokenAmount},
    errors::Error,
    interface,
};
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};

#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq)]
pub struct Config {
    restricted_transfer_threshold: TokenAmount,
    staking_maturity: Seconds,
    swap_fee_bps: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            restricted_transfer_threshold: TokenAmount(1_000_000),
            staking_maturity: Seconds::days(30),
            // 5%
            swap_fee_bps: 500,
        }
    }
}

impl Config {
    pub const MAX_FEE_BPS: u16 = 10_000;

    /// while transfers are restricted, receivers that are not whitelisted can receive at most this
    /// amount per transfer
    pub fn restricted_transfer_threshold(&self) -> TokenAmount {
        self.restricted_transfer_threshold
    }

    /// how long a staking pool accepts stakes after it is created
    pub fn staking_maturity(&self) -> Seconds {
        self.staking_maturity
    }

    pub fn swap_fee_bps(&self) -> u16 {
        self.swap_fee_bps
    }

    /// applies the fields that are set
    ///
    /// ## Errors
    /// [`Error::InvalidConfig`] if the swap fee is greater than 100% - in which case the config is
    /// left unchanged
    pub fn merge(&mut self, config: interface::Config) -> Result<(), Error> {
        if let Some(bps) = config.swap_fee_bps {
            if bps > Self::MAX_FEE_BPS {
                return Err(Error::InvalidConfig);
            }
        }

        if let Some(threshold) = config.restricted_transfer_threshold {
            self.restricted_transfer_threshold = threshold.into();
        }
        if let Some(maturity) = config.staking_maturity {
            self.staking_maturity = maturity.into();
        }
        if let Some(bps) = config.swap_fee_bps {
            self.swap_fee_bps = bps;
        }
        Ok(())
    }
}

impl From<Config> for interface::Config {
    fn from(config: Config) -> Self {
        Self {
            restricted_transfer_threshold: Some(config.restricted_transfer_threshold.into()),
            staking_maturity: Some(config.staking_maturity.into()),
            swap_fee_bps: Some(config.swap_fee_bps),
        }
    }
}
