use anchor_lang::{prelude::*, system_program};

use crate::{
    constants::{CONFIG_SEED, POOL_SEED, RECEIPT_SEED, TREASURY_SEED},
    state::{Config, Pool, Receipt, Treasury, RECEIPT_ACCOUNT_SIZE},
};

/// Event emitted when tickets are purchased
#[event]
pub struct TicketsPurchased {
    pub pool_id: u64,
    pub receipt_id: u64,
    /// The account credited with the tickets
    pub recipient: Pubkey,
    /// The account that paid
    pub buyer: Pubkey,
    /// Number of tickets purchased
    pub count: u64,
    /// Total amount paid in lamports
    pub payment: u64,
    /// First ticket id of this purchase
    pub ticket_id: u64,
}

/// Instruction to purchase tickets in a pool
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `pool_id` - The pool to buy into
/// * `count` - The number of tickets to purchase
/// * `recipient` - The account credited with the tickets
/// * `payment` - Lamports the buyer pays, must equal `count * ticket_price`
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. Validates ticket count is greater than 0
/// 2. Rejects any payment that is not exactly the price of the tickets
/// 3. Rejects purchases at or after expiry and inside the final hour
/// 4. Uses PDAs with proper seeds for the pool, receipt and treasury accounts
///
/// # Implementation Notes
/// - The receipt's first ticket is the pool's ticket count before this purchase,
///   and the pool account is write-locked for the whole transaction, so ranges
///   never overlap
/// - Updates state before performing external calls
pub fn buy_tickets(
    ctx: Context<BuyTickets>,
    _pool_id: u64,
    count: u64,
    recipient: Pubkey,
    payment: u64,
) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    let pool = &mut ctx.accounts.pool;

    pool.quote(count, payment)?;
    pool.ensure_on_sale(current_time)?;

    let ticket_id = pool.record_purchase(payment)?;
    let receipt_id = ctx.accounts.config.next_receipt_id()?;

    ctx.accounts.receipt.set_inner(Receipt {
        receipt_id,
        owner: recipient,
        pool_id: pool.pool_id,
        ticket_id,
        count,
        bump: ctx.bumps.receipt,
    });

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
            },
        ),
        payment,
    )?;

    emit!(TicketsPurchased {
        pool_id: ctx.accounts.pool.pool_id,
        receipt_id,
        recipient,
        buyer: ctx.accounts.buyer.key(),
        count,
        payment,
        ticket_id,
    });

    Ok(())
}

/// Accounts required for the buy_tickets instruction
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct BuyTickets<'info> {
    /// The pool that tickets are being purchased for
    #[account(
        mut,
        seeds = [
            POOL_SEED,
            pool_id.to_le_bytes().as_ref(),
        ],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    /// New receipt created for this purchase
    /// PDA with seeds ["receipt", receipt_counter]
    #[account(
        init,
        payer = buyer,
        space = RECEIPT_ACCOUNT_SIZE,
        seeds = [
            RECEIPT_SEED,
            config.receipt_counter.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub receipt: Account<'info, Receipt>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// Treasury account that receives payment for tickets
    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    /// The account paying for the tickets and the receipt account
    #[account(mut)]
    pub buyer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
