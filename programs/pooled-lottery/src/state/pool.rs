use anchor_lang::prelude::*;

use crate::{
    constants::{BASIS_POINTS, MIN_POOL_DURATION, MIN_TICKET_PRICE, PURCHASE_CUTOFF},
    error::LotteryError,
    math::{calculate_fee, inflated_ticket_count, reduce_random_word, RandomWord},
    state::{Ledger, Receipt},
};

// Space calculation:
// 8 (discriminator) +
// 8 (pool_id) +
// 8 (expiry) +
// 8 (ticket_price) +
// 8 (starting_jackpot) +
// 2 (no_winner_percent) +
// 2 (fee_percent) +
// 8 (deposited_amount) +
// 9 (winning_ticket: Option<u64>) +
// 1 (settlement_step) +
// 1 (bump) =
// 63 total bytes
pub const POOL_ACCOUNT_SIZE: usize = 8 + 8 + 8 + 8 + 8 + 2 + 2 + 8 + 9 + 1 + 1;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettlementStep {
    Idle,
    Initiated,
    Settled,
}

/// Parameters chosen by the management authority when a pool is opened.
#[derive(Clone, Copy, Debug)]
pub struct PoolTerms {
    pub expiry: i64,
    pub ticket_price: u64,
    pub starting_jackpot: u64,
    pub no_winner_percent: u16,
    pub fee_percent: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettlementOutcome {
    /// Ticket drawn from the inflated range; only meaningful when `has_winner`.
    pub winning_ticket: u64,
    pub has_winner: bool,
    pub fee: u64,
    /// Amount returned to the ledger for future jackpots. Zero when someone won.
    pub reinvested: u64,
}

#[account]
#[derive(Debug)]
pub struct Pool {
    pub pool_id: u64,
    pub expiry: i64,
    pub ticket_price: u64,
    pub starting_jackpot: u64,
    pub no_winner_percent: u16,
    pub fee_percent: u16,
    /// Sum of all ticket payments. Always a multiple of `ticket_price`.
    pub deposited_amount: u64,
    pub winning_ticket: Option<u64>,
    pub settlement_step: SettlementStep,
    pub bump: u8,
}

impl Pool {
    /// Validates `terms` and builds a pool with no tickets sold.
    pub fn open(pool_id: u64, terms: &PoolTerms, now: i64, bump: u8) -> Result<Pool> {
        if terms.ticket_price < MIN_TICKET_PRICE {
            msg!("Ticket price: {}", terms.ticket_price);
            return err!(LotteryError::TicketPriceTooLow);
        }
        if terms.no_winner_percent >= BASIS_POINTS {
            msg!("No-winner percent: {}", terms.no_winner_percent);
            return err!(LotteryError::NoWinnerPercentTooHigh);
        }
        if terms.fee_percent >= BASIS_POINTS {
            msg!("Fee percent: {}", terms.fee_percent);
            return err!(LotteryError::FeePercentTooHigh);
        }
        let earliest_expiry = now
            .checked_add(MIN_POOL_DURATION)
            .ok_or(LotteryError::Overflow)?;
        if terms.expiry < earliest_expiry {
            msg!("Expiry: {}", terms.expiry);
            msg!("Earliest allowed: {}", earliest_expiry);
            return err!(LotteryError::ExpiryTooSoon);
        }

        Ok(Pool {
            pool_id,
            expiry: terms.expiry,
            ticket_price: terms.ticket_price,
            starting_jackpot: terms.starting_jackpot,
            no_winner_percent: terms.no_winner_percent,
            fee_percent: terms.fee_percent,
            deposited_amount: 0,
            winning_ticket: None,
            settlement_step: SettlementStep::Idle,
            bump,
        })
    }

    /// Number of fully paid tickets, which is also the id of the next ticket sold.
    pub fn ticket_count(&self) -> Result<u64> {
        self.deposited_amount
            .checked_div(self.ticket_price)
            .ok_or_else(|| error!(LotteryError::Overflow))
    }

    /// Checks that `payment` is exactly the price of `count` tickets.
    pub fn quote(&self, count: u64, payment: u64) -> Result<u64> {
        require!(count > 0, LotteryError::InvalidTicketCount);

        let expected = count
            .checked_mul(self.ticket_price)
            .ok_or(LotteryError::Overflow)?;
        if payment != expected {
            msg!("Expected payment: {}", expected);
            msg!("Given payment: {}", payment);
            return err!(LotteryError::PaymentMismatch);
        }
        Ok(expected)
    }

    /// Sales stop at expiry and are already closed during the final cutoff window.
    pub fn ensure_on_sale(&self, now: i64) -> Result<()> {
        if now >= self.expiry {
            msg!("Expiry: {}", self.expiry);
            msg!("Current time: {}", now);
            return err!(LotteryError::PoolExpired);
        }

        let remaining = self.expiry.checked_sub(now).ok_or(LotteryError::Overflow)?;
        if remaining < PURCHASE_CUTOFF {
            msg!("Seconds remaining: {}", remaining);
            return err!(LotteryError::PurchaseCutoffReached);
        }
        Ok(())
    }

    /// Adds a paid purchase and returns the first ticket id it was assigned.
    pub fn record_purchase(&mut self, payment: u64) -> Result<u64> {
        let first_ticket = self.ticket_count()?;
        self.deposited_amount = self
            .deposited_amount
            .checked_add(payment)
            .ok_or(LotteryError::Overflow)?;
        Ok(first_ticket)
    }

    pub fn begin_settlement(&mut self, now: i64) -> Result<()> {
        if now < self.expiry {
            msg!("Expiry: {}", self.expiry);
            msg!("Current time: {}", now);
            return err!(LotteryError::PoolNotExpired);
        }
        if self.settlement_step != SettlementStep::Idle {
            msg!("Pool id: {}", self.pool_id);
            return err!(LotteryError::SettlementAlreadyStarted);
        }

        self.settlement_step = SettlementStep::Initiated;
        Ok(())
    }

    /// Draws the winning ticket from `random_word` and books the fee and any
    /// reinvestable remainder on `ledger`.
    pub fn settle(
        &mut self,
        ledger: &mut Ledger,
        random_word: &RandomWord,
    ) -> Result<SettlementOutcome> {
        require!(
            self.settlement_step == SettlementStep::Initiated,
            LotteryError::SettlementNotInitiated
        );

        let tickets = self.ticket_count()?;
        let inflated_tickets = inflated_ticket_count(tickets, self.no_winner_percent)?;
        // nothing sold means nothing to draw
        let winning_ticket = if inflated_tickets == 0 {
            0
        } else {
            reduce_random_word(random_word, inflated_tickets)?
        };
        let has_winner = winning_ticket < tickets;

        let fee = self.fee()?;
        let reinvested = if has_winner { 0 } else { self.jackpot()? };
        ledger.record_settlement(fee, reinvested)?;

        self.winning_ticket = has_winner.then_some(winning_ticket);
        self.settlement_step = SettlementStep::Settled;

        Ok(SettlementOutcome {
            winning_ticket,
            has_winner,
            fee,
            reinvested,
        })
    }

    pub fn total_funds(&self) -> Result<u64> {
        self.starting_jackpot
            .checked_add(self.deposited_amount)
            .ok_or_else(|| error!(LotteryError::Overflow))
    }

    pub fn fee(&self) -> Result<u64> {
        calculate_fee(self.total_funds()?, self.fee_percent)
    }

    /// Everything in the pool net of the protocol fee.
    pub fn jackpot(&self) -> Result<u64> {
        self.total_funds()?
            .checked_sub(self.fee()?)
            .ok_or_else(|| error!(LotteryError::Overflow))
    }

    /// Succeeds with the winning ticket only if `receipt` holds it.
    pub fn ensure_winner(&self, receipt: &Receipt) -> Result<u64> {
        require!(
            receipt.pool_id == self.pool_id,
            LotteryError::ReceiptPoolMismatch
        );
        require!(
            self.settlement_step == SettlementStep::Settled,
            LotteryError::PoolNotSettled
        );

        match self.winning_ticket {
            Some(ticket) if receipt.holds_ticket(ticket) => Ok(ticket),
            _ => err!(LotteryError::NotWinningReceipt),
        }
    }
}
