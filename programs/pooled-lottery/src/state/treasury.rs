use anchor_lang::prelude::*;

use crate::error::LotteryError;

// 8 discriminator, 1 bump
pub const TREASURY_ACCOUNT_SIZE: usize = 8 + 1;

/// Program-owned vault holding every lamport paid for tickets.
#[account]
pub struct Treasury {
    pub bump: u8,
}

/// Moves `amount` lamports out of the treasury while keeping it rent exempt.
///
/// Deducting directly only works because the treasury is owned by this program.
/// The runtime rejects a credit that leaves the recipient funded but below the
/// rent-exempt minimum, so an empty recipient must be sent at least that much.
pub fn disburse<'info>(
    treasury: &AccountInfo<'info>,
    recipient: &AccountInfo<'info>,
    amount: u64,
    rent: &Rent,
) -> Result<()> {
    let rent_lamports = rent.minimum_balance(treasury.data_len());
    let spendable = treasury.lamports().saturating_sub(rent_lamports);
    if amount > spendable {
        msg!("Treasury spendable balance: {}", spendable);
        msg!("Requested: {}", amount);
        return err!(LotteryError::InsufficientTreasuryBalance);
    }

    let credited = recipient
        .lamports()
        .checked_add(amount)
        .ok_or(LotteryError::Overflow)?;
    if !rent.is_exempt(credited, recipient.data_len()) {
        msg!("Recipient balance after payout: {}", credited);
        msg!("Rent-exempt minimum: {}", rent.minimum_balance(recipient.data_len()));
        return err!(LotteryError::RecipientNotRentExempt);
    }

    treasury.sub_lamports(amount)?;
    recipient.add_lamports(amount)?;
    Ok(())
}

/// Builds a standalone account for exercising instruction logic off-chain.
#[cfg(test)]
pub(crate) fn test_account(lamports: u64, data: Vec<u8>, owner: Pubkey) -> AccountInfo<'static> {
    AccountInfo::new(
        Box::leak(Box::new(Pubkey::new_unique())),
        false,
        true,
        Box::leak(Box::new(lamports)),
        Box::leak(data.into_boxed_slice()),
        Box::leak(Box::new(owner)),
        false,
        0,
    )
}
