use anchor_lang::prelude::*;

use crate::error::LotteryError;

// 8 discriminator + 4 * 32 authorities + 2 request_confirmations + 4 callback_compute_budget
// + 1 bump + 3 * 8 counters
pub const CONFIG_ACCOUNT_SIZE: usize = 8 + 32 + 32 + 32 + 32 + 2 + 4 + 1 + 8 + 8 + 8;

#[account]
pub struct Config {
    pub payout_authority: Pubkey,
    pub management_authority: Pubkey,
    pub upgrade_authority: Pubkey,
    /// Key the randomness oracle signs its responses with.
    pub oracle_authority: Pubkey,
    pub request_confirmations: u16,
    pub callback_compute_budget: u32,
    pub bump: u8,
    pub pool_counter: u64,
    pub receipt_counter: u64,
    pub request_counter: u64,
}

impl Config {
    pub fn next_pool_id(&mut self) -> Result<u64> {
        Self::advance(&mut self.pool_counter)
    }

    pub fn next_receipt_id(&mut self) -> Result<u64> {
        Self::advance(&mut self.receipt_counter)
    }

    pub fn next_request_id(&mut self) -> Result<u64> {
        Self::advance(&mut self.request_counter)
    }

    /// Only the configured oracle may answer randomness requests.
    pub fn ensure_oracle_authority(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(
            *signer,
            self.oracle_authority,
            LotteryError::NotOracleAuthority
        );
        Ok(())
    }

    fn advance(counter: &mut u64) -> Result<u64> {
        let id = *counter;
        *counter = counter.checked_add(1).ok_or(LotteryError::Overflow)?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            payout_authority: Pubkey::new_unique(),
            management_authority: Pubkey::new_unique(),
            upgrade_authority: Pubkey::new_unique(),
            oracle_authority: Pubkey::new_unique(),
            request_confirmations: 3,
            callback_compute_budget: 200_000,
            bump: 255,
            pool_counter: 0,
            receipt_counter: 0,
            request_counter: 0,
        }
    }

    #[test]
    fn account_size_matches_layout() {
        let mut bytes = Vec::new();
        config().serialize(&mut bytes).unwrap();
        assert_eq!(bytes.len() + 8, CONFIG_ACCOUNT_SIZE);
    }

    #[test]
    fn counters_are_sequential_and_independent() {
        let mut config = config();
        assert_eq!(config.next_pool_id().unwrap(), 0);
        assert_eq!(config.next_pool_id().unwrap(), 1);
        assert_eq!(config.next_receipt_id().unwrap(), 0);
        assert_eq!(config.next_request_id().unwrap(), 0);
        assert_eq!(config.pool_counter, 2);
        assert_eq!(config.receipt_counter, 1);
        assert_eq!(config.request_counter, 1);
    }

    #[test]
    fn exhausted_counter_is_never_reused() {
        let mut config = config();
        config.receipt_counter = u64::MAX;
        assert!(config.next_receipt_id().is_err());
        assert_eq!(config.receipt_counter, u64::MAX);
    }

    #[test]
    fn only_the_oracle_authority_may_answer() {
        let config = config();
        assert!(config.ensure_oracle_authority(&config.oracle_authority).is_ok());
        for signer in [config.management_authority, Pubkey::new_unique()] {
            assert_eq!(
                config.ensure_oracle_authority(&signer).unwrap_err(),
                LotteryError::NotOracleAuthority.into()
            );
        }
    }
}
