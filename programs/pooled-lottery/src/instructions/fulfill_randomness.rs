use anchor_lang::prelude::*;

use crate::{
    constants::{CONFIG_SEED, LEDGER_SEED, POOL_SEED, RANDOMNESS_REQUEST_SEED},
    error::LotteryError,
    math::RandomWord,
    state::{Config, Ledger, Pool, RandomnessRequest, SettlementOutcome},
};

/// Event emitted when a pool's draw is fixed
#[event]
pub struct PoolSettled {
    pub pool_id: u64,
    pub request_id: u64,
    /// Drawn ticket id; it only names a ticket when `has_winner` is set
    pub winning_ticket: u64,
    pub has_winner: bool,
    /// Fee credited to the fee reserve
    pub fee: u64,
    /// Lamports returned to the reinvestable balance
    pub reinvested: u64,
}

/// Oracle callback delivering the random words for an outstanding request.
///
/// Execution requirements:
/// 1. Signed by the oracle authority recorded in the config
/// 2. The request PDA for `request_id` still exists
/// 3. The pool it points to is Initiated
///
/// The request account is closed once the pool is settled, so replaying the
/// same request id fails at account resolution.
///
/// After execution:
/// - The fee is credited to the ledger
/// - Either the winning ticket is stored on the pool, or the pool's funds net of
///   fee go back to the reinvestable balance
/// - The pool is Settled
pub fn fulfill_randomness(
    ctx: Context<FulfillRandomness>,
    request_id: u64,
    random_words: Vec<[u8; 32]>,
) -> Result<()> {
    let accounts = &mut *ctx.accounts;
    let outcome = apply_randomness(
        &accounts.config,
        &accounts.oracle_authority.key(),
        &accounts.randomness_request,
        &mut accounts.pool,
        &mut accounts.ledger,
        &random_words,
    )?;

    accounts
        .randomness_request
        .close(accounts.requester.to_account_info())?;

    msg!(
        "Pool {} settled: ticket {} | winner: {}",
        accounts.pool.pool_id,
        outcome.winning_ticket,
        outcome.has_winner,
    );

    emit!(PoolSettled {
        pool_id: accounts.pool.pool_id,
        request_id,
        winning_ticket: outcome.winning_ticket,
        has_winner: outcome.has_winner,
        fee: outcome.fee,
        reinvested: outcome.reinvested,
    });

    Ok(())
}

/// Checks an oracle response against its request and settles the pool it answers.
pub fn apply_randomness(
    config: &Config,
    oracle_authority: &Pubkey,
    request: &RandomnessRequest,
    pool: &mut Pool,
    ledger: &mut Ledger,
    random_words: &[RandomWord],
) -> Result<SettlementOutcome> {
    config.ensure_oracle_authority(oracle_authority)?;
    request.ensure_answers(pool)?;
    let random_word = random_words
        .first()
        .ok_or(LotteryError::MissingRandomWord)?;

    pool.settle(ledger, random_word)
}

#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct FulfillRandomness<'info> {
    pub oracle_authority: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [
            RANDOMNESS_REQUEST_SEED,
            request_id.to_le_bytes().as_ref(),
        ],
        bump = randomness_request.bump,
        has_one = requester,
    )]
    pub randomness_request: Account<'info, RandomnessRequest>,

    #[account(
        mut,
        seeds = [
            POOL_SEED,
            randomness_request.pool_id.to_le_bytes().as_ref(),
        ],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, Ledger>,

    /// Receives the rent of the closed request account
    #[account(mut)]
    pub requester: SystemAccount<'info>,
}
