use anchor_lang::prelude::*;

use crate::{
    constants::{CONFIG_SEED, LEDGER_SEED, TREASURY_SEED},
    error::LotteryError,
    state::{disburse, Config, Ledger, Treasury},
};

/// Event emitted when collected fees are withdrawn
#[event]
pub struct FeeWithdrawn {
    /// The account the fees were sent to
    pub payout_authority: Pubkey,
    /// Amount withdrawn in lamports
    pub amount: u64,
    /// Fee reserve left after the withdrawal
    pub remaining_fee: u64,
}

/// Instruction to withdraw collected protocol fees to the payout authority
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. Verifies the signer is the payout authority
/// 2. Fails if `amount` exceeds the fee reserve instead of clamping it
/// 3. Keeps the treasury rent exempt
///
/// Only the fee reserve can be withdrawn. Lamports backing open pools and the
/// reinvestable balance stay in the treasury.
pub fn withdraw_fee(ctx: Context<WithdrawFee>, amount: u64) -> Result<()> {
    ctx.accounts.ledger.debit_fee(amount)?;

    disburse(
        &ctx.accounts.treasury.to_account_info(),
        &ctx.accounts.payout_authority.to_account_info(),
        amount,
        &Rent::get()?,
    )?;

    emit!(FeeWithdrawn {
        payout_authority: ctx.accounts.payout_authority.key(),
        amount,
        remaining_fee: ctx.accounts.ledger.available_fee,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawFee<'info> {
    #[account(mut)]
    pub payout_authority: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = payout_authority @ LotteryError::NotPayoutAuthority,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,
}
