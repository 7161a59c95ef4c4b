use anchor_lang::prelude::*;

use crate::{
    constants::{CONFIG_SEED, LEDGER_SEED, TREASURY_SEED},
    instructions::update_oracle_config::validate_oracle_settings,
    state::{
        Config, Ledger, Treasury, CONFIG_ACCOUNT_SIZE, LEDGER_ACCOUNT_SIZE,
        TREASURY_ACCOUNT_SIZE,
    },
};

/// Instruction to initialize the program configuration
/// This should be called once during program deployment
///
/// # Arguments
/// * `oracle_authority` - Key the randomness oracle signs its responses with
/// * `request_confirmations` - Confirmations the oracle waits for before answering
/// * `callback_compute_budget` - Compute units reserved for the fulfilment callback
///
/// # Security Considerations
/// - Creates the config, ledger and treasury PDAs, so it can only succeed once
/// - The caller of this instruction must be the owner of the program
/// - The management authority gates pool creation and oracle settings
/// - The payout authority is the only destination for collected fees
///
/// # Account Validations
/// * Config - New PDA storing authorities, oracle settings and id counters
/// * Ledger - New PDA with zeroed reinvestable and fee balances
/// * Treasury - New PDA that will hold all ticket payments
pub fn init_config(
    ctx: Context<InitConfig>,
    oracle_authority: Pubkey,
    request_confirmations: u16,
    callback_compute_budget: u32,
) -> Result<()> {
    validate_oracle_settings(request_confirmations, callback_compute_budget)?;

    let config = &mut ctx.accounts.config;
    config.payout_authority = ctx.accounts.payout_authority.key();
    config.management_authority = ctx.accounts.management_authority.key();
    config.upgrade_authority = ctx.accounts.upgrade_authority.key();
    config.oracle_authority = oracle_authority;
    config.request_confirmations = request_confirmations;
    config.callback_compute_budget = callback_compute_budget;
    config.bump = ctx.bumps.config;
    config.pool_counter = 0;
    config.receipt_counter = 0;
    config.request_counter = 0;

    ctx.accounts.ledger.set_inner(Ledger {
        available_amount: 0,
        available_fee: 0,
        bump: ctx.bumps.ledger,
    });
    ctx.accounts.treasury.bump = ctx.bumps.treasury;

    Ok(())
}

#[derive(Accounts)]
pub struct InitConfig<'info> {
    #[account(
        init,
        payer = upgrade_authority,
        space = CONFIG_ACCOUNT_SIZE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = upgrade_authority,
        space = LEDGER_ACCOUNT_SIZE,
        seeds = [LEDGER_SEED],
        bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        init,
        payer = upgrade_authority,
        space = TREASURY_ACCOUNT_SIZE,
        seeds = [TREASURY_SEED],
        bump
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub upgrade_authority: Signer<'info>,
    pub payout_authority: SystemAccount<'info>,
    pub management_authority: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}
