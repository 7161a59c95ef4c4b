use anchor_lang::prelude::*;

use crate::{
    constants::{CONFIG_SEED, LEDGER_SEED, POOL_SEED},
    error::LotteryError,
    state::{Config, Ledger, Pool, PoolTerms, POOL_ACCOUNT_SIZE},
};

/// Event emitted when a pool is created
#[event]
pub struct PoolCreated {
    pub pool_id: u64,
    /// Unix timestamp after which no tickets are sold and settlement may start
    pub expiry: i64,
    /// Price per ticket in lamports
    pub ticket_price: u64,
    /// Lamports moved from the reinvestable balance into this pool
    pub starting_jackpot: u64,
    pub no_winner_percent: u16,
    pub fee_percent: u16,
}

/// Instruction to open a new lottery pool
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `expiry` - Unix timestamp when sales end and settlement may begin
/// * `ticket_price` - Price per ticket in lamports
/// * `starting_jackpot` - Lamports seeded from the reinvestable balance
/// * `no_winner_percent` - Basis points of draws that produce no winner
/// * `fee_percent` - Basis points of the total jackpot kept as protocol fee
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. Validates caller is the management authority via config PDA
/// 2. Ensures ticket_price is at least 0.0001 SOL
/// 3. Ensures both percentages are below 10000 basis points
/// 4. Verifies expiry is at least one day ahead
/// 5. Debits the starting jackpot from the reinvestable balance, failing if it is short
///
/// # Implementation Notes
/// - Pool ids come from the config counter and are never reused
/// - The pool starts Idle with nothing deposited
pub fn create_pool(
    ctx: Context<CreatePool>,
    expiry: i64,
    ticket_price: u64,
    starting_jackpot: u64,
    no_winner_percent: u16,
    fee_percent: u16,
) -> Result<()> {
    let terms = PoolTerms {
        expiry,
        ticket_price,
        starting_jackpot,
        no_winner_percent,
        fee_percent,
    };
    let current_time = Clock::get()?.unix_timestamp;
    let pool_id = ctx.accounts.config.next_pool_id()?;

    let pool = Pool::open(pool_id, &terms, current_time, ctx.bumps.pool)?;
    ctx.accounts.ledger.debit_reinvestable(starting_jackpot)?;
    ctx.accounts.pool.set_inner(pool);

    emit!(PoolCreated {
        pool_id,
        expiry,
        ticket_price,
        starting_jackpot,
        no_winner_percent,
        fee_percent,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreatePool<'info> {
    #[account(
        init,
        payer = management_authority,
        space = POOL_ACCOUNT_SIZE,
        seeds = [
            POOL_SEED,
            config.pool_counter.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(mut)]
    pub management_authority: Signer<'info>,

    /// The config account storing authorities and the pool counter
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = management_authority @ LotteryError::NotProgramManagementAuthority,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, Ledger>,

    pub system_program: Program<'info, System>,
}
