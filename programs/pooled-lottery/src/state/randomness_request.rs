use anchor_lang::prelude::*;

use crate::{error::LotteryError, state::Pool};

// 8 discriminator + 8 request_id + 8 pool_id + 32 requester + 8 requested_at + 1 bump
pub const RANDOMNESS_REQUEST_ACCOUNT_SIZE: usize = 8 + 8 + 8 + 32 + 8 + 1;

/// Outstanding oracle request. Closed when the oracle answers, so a request id
/// can be fulfilled at most once.
#[account]
pub struct RandomnessRequest {
    pub request_id: u64,
    pub pool_id: u64,
    /// Paid the rent for this account and gets it back on fulfilment.
    pub requester: Pubkey,
    pub requested_at: i64,
    pub bump: u8,
}

impl RandomnessRequest {
    pub fn ensure_answers(&self, pool: &Pool) -> Result<()> {
        if pool.pool_id != self.pool_id {
            msg!("Request {} is for pool {}", self.request_id, self.pool_id);
            msg!("Given pool: {}", pool.pool_id);
            return err!(LotteryError::RequestPoolMismatch);
        }
        Ok(())
    }
}
