use anchor_lang::prelude::*;

use crate::{
    constants::{CONFIG_SEED, POOL_SEED, RANDOMNESS_REQUEST_SEED, RANDOM_WORD_COUNT},
    state::{Config, Pool, RandomnessRequest, RANDOMNESS_REQUEST_ACCOUNT_SIZE},
};

/// Outbound request picked up by the randomness oracle
#[event]
pub struct RandomnessRequested {
    pub request_id: u64,
    pub pool_id: u64,
    pub request_confirmations: u16,
    pub callback_compute_budget: u32,
    pub word_count: u32,
}

/// Event emitted when a pool stops waiting for expiry and starts waiting for randomness
#[event]
pub struct SettlementInitiated {
    pub pool_id: u64,
    pub request_id: u64,
    pub requester: Pubkey,
}

/// Requests randomness for an expired pool.
///
/// Anyone may call this once the pool has expired. The instruction does not wait
/// for the oracle: it records the outstanding request and returns, and the oracle
/// answers later through `fulfill_randomness`.
///
/// After execution:
/// - A `RandomnessRequest` PDA maps the new request id to the pool
/// - The pool is Initiated, so a second call fails instead of issuing a duplicate request
///
/// # Errors
/// - `PoolNotExpired` if the pool expiry hasn't been reached
/// - `SettlementAlreadyStarted` if the pool is already Initiated or Settled
pub fn initiate_settlement(ctx: Context<InitiateSettlement>, _pool_id: u64) -> Result<()> {
    let clock = Clock::get()?;
    ctx.accounts.pool.begin_settlement(clock.unix_timestamp)?;

    let config = &mut ctx.accounts.config;
    let request_id = config.next_request_id()?;
    let pool_id = ctx.accounts.pool.pool_id;

    ctx.accounts.randomness_request.set_inner(RandomnessRequest {
        request_id,
        pool_id,
        requester: ctx.accounts.requester.key(),
        requested_at: clock.unix_timestamp,
        bump: ctx.bumps.randomness_request,
    });

    emit!(RandomnessRequested {
        request_id,
        pool_id,
        request_confirmations: config.request_confirmations,
        callback_compute_budget: config.callback_compute_budget,
        word_count: RANDOM_WORD_COUNT,
    });
    emit!(SettlementInitiated {
        pool_id,
        request_id,
        requester: ctx.accounts.requester.key(),
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct InitiateSettlement<'info> {
    #[account(
        mut,
        seeds = [
            POOL_SEED,
            pool_id.to_le_bytes().as_ref(),
        ],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        init,
        payer = requester,
        space = RANDOMNESS_REQUEST_ACCOUNT_SIZE,
        seeds = [
            RANDOMNESS_REQUEST_SEED,
            config.request_counter.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub randomness_request: Account<'info, RandomnessRequest>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// Pays the rent of the request account until the oracle answers
    #[account(mut)]
    pub requester: Signer<'info>,

    pub system_program: Program<'info, System>,
}
