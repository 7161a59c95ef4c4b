use anchor_lang::prelude::*;

use crate::{
    constants::{CONFIG_SEED, MAX_CALLBACK_COMPUTE_BUDGET, MAX_REQUEST_CONFIRMATIONS},
    error::LotteryError,
    state::Config,
};

/// Event emitted whenever the oracle settings or the oracle key change
#[event]
pub struct OracleConfigUpdated {
    pub oracle_authority: Pubkey,
    pub request_confirmations: u16,
    pub callback_compute_budget: u32,
}

pub fn validate_oracle_settings(
    request_confirmations: u16,
    callback_compute_budget: u32,
) -> Result<()> {
    if request_confirmations == 0 || request_confirmations > MAX_REQUEST_CONFIRMATIONS {
        msg!("Request confirmations: {}", request_confirmations);
        return err!(LotteryError::InvalidRequestConfirmations);
    }
    if callback_compute_budget == 0 || callback_compute_budget > MAX_CALLBACK_COMPUTE_BUDGET {
        msg!("Callback compute budget: {}", callback_compute_budget);
        return err!(LotteryError::InvalidCallbackComputeBudget);
    }
    Ok(())
}

/// Changes the settings sent with every future randomness request.
/// Requests already in flight keep the settings they were issued with.
pub fn update_oracle_config(
    ctx: Context<UpdateOracleConfig>,
    request_confirmations: u16,
    callback_compute_budget: u32,
) -> Result<()> {
    validate_oracle_settings(request_confirmations, callback_compute_budget)?;

    let config = &mut ctx.accounts.config;
    config.request_confirmations = request_confirmations;
    config.callback_compute_budget = callback_compute_budget;

    emit_oracle_config(config);
    Ok(())
}

/// Replaces the key allowed to deliver randomness.
pub fn set_oracle_authority(
    ctx: Context<UpdateOracleConfig>,
    oracle_authority: Pubkey,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.oracle_authority = oracle_authority;

    emit_oracle_config(config);
    Ok(())
}

fn emit_oracle_config(config: &Config) {
    emit!(OracleConfigUpdated {
        oracle_authority: config.oracle_authority,
        request_confirmations: config.request_confirmations,
        callback_compute_budget: config.callback_compute_budget,
    });
}

#[derive(Accounts)]
pub struct UpdateOracleConfig<'info> {
    pub management_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = management_authority @ LotteryError::NotProgramManagementAuthority,
    )]
    pub config: Account<'info, Config>,
}
