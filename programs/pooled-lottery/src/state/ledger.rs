use anchor_lang::prelude::*;

use crate::error::LotteryError;

// 8 discriminator + 8 available_amount + 8 available_fee + 1 bump
pub const LEDGER_ACCOUNT_SIZE: usize = 8 + 8 + 8 + 1;

/// Program-wide accounting of funds that belong to no pool.
///
/// The lamports themselves sit in the treasury; the ledger records which share
/// of them may seed new jackpots and which share is protocol revenue.
#[account]
#[derive(Debug, Default)]
pub struct Ledger {
    /// Unclaimed proceeds of pools that settled without a winner.
    pub available_amount: u64,
    /// Fees collected at settlement and not yet withdrawn.
    pub available_fee: u64,
    pub bump: u8,
}

impl Ledger {
    /// Books the outcome of a settlement. Either both balances move or neither does.
    pub fn record_settlement(&mut self, fee: u64, reinvested: u64) -> Result<()> {
        let available_fee = self
            .available_fee
            .checked_add(fee)
            .ok_or(LotteryError::Overflow)?;
        let available_amount = self
            .available_amount
            .checked_add(reinvested)
            .ok_or(LotteryError::Overflow)?;

        self.available_fee = available_fee;
        self.available_amount = available_amount;
        Ok(())
    }

    pub fn debit_reinvestable(&mut self, amount: u64) -> Result<()> {
        let remaining = self.available_amount.checked_sub(amount);
        if remaining.is_none() {
            msg!("Reinvestable balance: {}", self.available_amount);
            msg!("Requested: {}", amount);
        }
        self.available_amount = remaining.ok_or(LotteryError::InsufficientReinvestableFunds)?;
        Ok(())
    }

    pub fn debit_fee(&mut self, amount: u64) -> Result<()> {
        let remaining = self.available_fee.checked_sub(amount);
        if remaining.is_none() {
            msg!("Fee reserve: {}", self.available_fee);
            msg!("Requested: {}", amount);
        }
        self.available_fee = remaining.ok_or(LotteryError::InsufficientFeeReserve)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_size_matches_layout() {
        let mut bytes = Vec::new();
        Ledger::default().serialize(&mut bytes).unwrap();
        assert_eq!(bytes.len() + 8, LEDGER_ACCOUNT_SIZE);
    }

    #[test]
    fn reinvestable_underflow_fails_without_change() {
        let mut ledger = Ledger {
            available_amount: 100,
            ..Ledger::default()
        };
        assert_eq!(
            ledger.debit_reinvestable(101).unwrap_err(),
            LotteryError::InsufficientReinvestableFunds.into()
        );
        assert_eq!(ledger.available_amount, 100);

        ledger.debit_reinvestable(100).unwrap();
        assert_eq!(ledger.available_amount, 0);
    }

    #[test]
    fn fee_reserve_underflow_fails_without_change() {
        let mut ledger = Ledger::default();
        ledger.record_settlement(40, 0).unwrap();
        assert_eq!(
            ledger.debit_fee(41).unwrap_err(),
            LotteryError::InsufficientFeeReserve.into()
        );
        assert_eq!(ledger.available_fee, 40);
    }

    #[test]
    fn settlement_overflow_leaves_both_balances_untouched() {
        let mut ledger = Ledger {
            available_amount: u64::MAX,
            available_fee: 10,
            bump: 0,
        };
        assert_eq!(
            ledger.record_settlement(5, 1).unwrap_err(),
            LotteryError::Overflow.into()
        );
        assert_eq!(ledger.available_amount, u64::MAX);
        assert_eq!(ledger.available_fee, 10);
    }
}
