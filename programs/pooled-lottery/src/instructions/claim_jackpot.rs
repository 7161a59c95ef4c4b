use anchor_lang::prelude::*;

use crate::{
    constants::{CONFIG_SEED, POOL_SEED, RECEIPT_SEED, TREASURY_SEED},
    error::LotteryError,
    state::{disburse, Config, Pool, Receipt, Treasury},
};

/// Event emitted when a winning receipt is paid out
#[event]
pub struct JackpotClaimed {
    pub pool_id: u64,
    /// The receipt owner that received the jackpot
    pub winner: Pubkey,
    pub receipt_id: u64,
    pub winning_ticket: u64,
    /// Lamports paid, net of the protocol fee
    pub jackpot: u64,
}

/// Pays the jackpot of a settled pool to the owner of the winning receipt.
/// Anyone may submit the claim; the lamports always go to the receipt owner.
///
/// This instruction can only be executed when:
/// 1. The receipt's pool is Settled
/// 2. The pool has a winning ticket and the receipt's range contains it
///
/// After execution:
/// - The pool account is closed before the jackpot leaves the treasury, so the
///   same pool cannot be claimed twice
/// - The receipt stays in place as a record of the purchase
pub fn claim_jackpot(ctx: Context<ClaimJackpot>, _receipt_id: u64) -> Result<()> {
    let accounts = &*ctx.accounts;
    let rent = Rent::get()?;

    let claimed = JackpotClaim::new(&accounts.pool, &accounts.receipt)?.execute(
        || {
            accounts
                .pool
                .close(accounts.management_authority.to_account_info())
        },
        |jackpot| {
            disburse(
                &accounts.treasury.to_account_info(),
                &accounts.owner.to_account_info(),
                jackpot,
                &rent,
            )
        },
    )?;

    emit!(claimed);

    Ok(())
}

/// A receipt's verified right to a pool's jackpot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JackpotClaim {
    pub pool_id: u64,
    pub receipt_id: u64,
    pub winner: Pubkey,
    pub winning_ticket: u64,
    pub jackpot: u64,
}

impl JackpotClaim {
    pub fn new(pool: &Pool, receipt: &Receipt) -> Result<Self> {
        let winning_ticket = pool.ensure_winner(receipt)?;
        Ok(JackpotClaim {
            pool_id: pool.pool_id,
            receipt_id: receipt.receipt_id,
            winner: receipt.owner,
            winning_ticket,
            jackpot: pool.jackpot()?,
        })
    }

    /// Retires the pool through `close_pool`, then hands the jackpot to `pay`.
    /// Nothing is paid unless the pool is gone first.
    pub fn execute<C, P>(self, close_pool: C, pay: P) -> Result<JackpotClaimed>
    where
        C: FnOnce() -> Result<()>,
        P: FnOnce(u64) -> Result<()>,
    {
        close_pool()?;
        pay(self.jackpot)?;

        Ok(JackpotClaimed {
            pool_id: self.pool_id,
            winner: self.winner,
            receipt_id: self.receipt_id,
            winning_ticket: self.winning_ticket,
            jackpot: self.jackpot,
        })
    }
}

/// Accounts required for the claim_jackpot instruction
#[derive(Accounts)]
#[instruction(receipt_id: u64)]
pub struct ClaimJackpot<'info> {
    #[account(
        seeds = [
            RECEIPT_SEED,
            receipt_id.to_le_bytes().as_ref(),
        ],
        bump = receipt.bump,
    )]
    pub receipt: Account<'info, Receipt>,

    /// The pool the receipt was bought in
    /// Closed by this instruction
    #[account(
        mut,
        seeds = [
            POOL_SEED,
            receipt.pool_id.to_le_bytes().as_ref(),
        ],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = management_authority,
    )]
    pub config: Account<'info, Config>,

    /// Paid the pool's rent at creation and gets it back when the pool closes
    #[account(mut)]
    pub management_authority: SystemAccount<'info>,

    /// CHECK: Only receives lamports; must be the owner recorded on the receipt.
    #[account(
        mut,
        address = receipt.owner @ LotteryError::ReceiptOwnerMismatch,
    )]
    pub owner: UncheckedAccount<'info>,
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use anchor_lang::{error::ErrorCode, system_program};

    use super::*;
    use crate::{
        math::word_from_u64,
        state::{treasury::test_account, Ledger, SettlementStep},
    };

    fn receipt(receipt_id: u64, ticket_id: u64, count: u64) -> Receipt {
        Receipt {
            receipt_id,
            owner: Pubkey::new_unique(),
            pool_id: 2,
            ticket_id,
            count,
            bump: 254,
        }
    }

    // Receipts 0 and 1 hold tickets [0, 3) and [3, 5); ticket 4 was drawn
    fn settled_pool() -> (Pool, Receipt, Receipt) {
        let mut pool = Pool {
            pool_id: 2,
            expiry: 1_700_000_000,
            ticket_price: 100,
            starting_jackpot: 0,
            no_winner_percent: 0,
            fee_percent: 1_000,
            deposited_amount: 500,
            winning_ticket: None,
            settlement_step: SettlementStep::Idle,
            bump: 255,
        };
        pool.begin_settlement(pool.expiry).unwrap();
        pool.settle(&mut Ledger::default(), &word_from_u64(4)).unwrap();
        (pool, receipt(0, 0, 3), receipt(1, 3, 2))
    }

    #[test]
    fn winning_receipt_claims_jackpot_net_of_fee() {
        let (pool, _, winner) = settled_pool();
        let claim = JackpotClaim::new(&pool, &winner).unwrap();
        assert_eq!(
            claim,
            JackpotClaim {
                pool_id: 2,
                receipt_id: 1,
                winner: winner.owner,
                winning_ticket: 4,
                jackpot: 450,
            }
        );
    }

    #[test]
    fn losing_receipt_cannot_claim() {
        let (pool, loser, _) = settled_pool();
        assert_eq!(
            JackpotClaim::new(&pool, &loser).unwrap_err(),
            LotteryError::NotWinningReceipt.into()
        );
    }

    #[test]
    fn pool_is_closed_before_payout() {
        let (pool, _, winner) = settled_pool();
        let steps = RefCell::new(Vec::new());

        let claimed = JackpotClaim::new(&pool, &winner)
            .unwrap()
            .execute(
                || {
                    steps.borrow_mut().push("close".to_string());
                    Ok(())
                },
                |jackpot| {
                    steps.borrow_mut().push(format!("pay {}", jackpot));
                    Ok(())
                },
            )
            .unwrap();

        assert_eq!(*steps.borrow(), vec!["close", "pay 450"]);
        assert_eq!(claimed.winner, winner.owner);
        assert_eq!(claimed.jackpot, 450);
    }

    #[test]
    fn nothing_is_paid_when_pool_cannot_close() {
        let (pool, _, winner) = settled_pool();
        let paid = RefCell::new(false);

        let res = JackpotClaim::new(&pool, &winner).unwrap().execute(
            || err!(ErrorCode::ConstraintMut),
            |_| {
                *paid.borrow_mut() = true;
                Ok(())
            },
        );

        assert_eq!(res.err(), Some(ErrorCode::ConstraintMut.into()));
        assert!(!*paid.borrow());
    }

    #[test]
    fn failed_payout_fails_the_claim() {
        let (pool, _, winner) = settled_pool();
        let res = JackpotClaim::new(&pool, &winner)
            .unwrap()
            .execute(|| Ok(()), |_| err!(LotteryError::RecipientNotRentExempt));
        assert_eq!(res.err(), Some(LotteryError::RecipientNotRentExempt.into()));
    }

    #[test]
    fn closed_pool_cannot_be_claimed_again() {
        let (pool, _, _) = settled_pool();
        let mut data = Vec::new();
        pool.try_serialize(&mut data).unwrap();
        let open: &'static AccountInfo<'static> =
            Box::leak(Box::new(test_account(1_500_000, data, crate::ID)));
        let loaded = Account::<Pool>::try_from(open).unwrap();
        assert_eq!(loaded.winning_ticket, Some(4));

        // what closing leaves behind: no lamports, no data, system owned
        let closed: &'static AccountInfo<'static> =
            Box::leak(Box::new(test_account(0, Vec::new(), system_program::ID)));
        assert_eq!(
            Account::<Pool>::try_from(closed).err(),
            Some(ErrorCode::AccountNotInitialized.into())
        );
    }
}
