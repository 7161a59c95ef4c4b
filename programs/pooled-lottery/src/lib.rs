use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod math;
pub mod state;

declare_id!("9yspsAduTucxSPU5juaXj3BJpuSGFh2nwiaoXCj7t3yt");

#[program]
pub mod pooled_lottery {
    use super::*;

    pub fn init_config(
        ctx: Context<InitConfig>,
        oracle_authority: Pubkey,
        request_confirmations: u16,
        callback_compute_budget: u32,
    ) -> Result<()> {
        instructions::init_config::init_config(
            ctx,
            oracle_authority,
            request_confirmations,
            callback_compute_budget,
        )
    }

    pub fn create_pool(
        ctx: Context<CreatePool>,
        expiry: i64,
        ticket_price: u64,
        starting_jackpot: u64,
        no_winner_percent: u16,
        fee_percent: u16,
    ) -> Result<()> {
        instructions::create_pool::create_pool(
            ctx,
            expiry,
            ticket_price,
            starting_jackpot,
            no_winner_percent,
            fee_percent,
        )
    }

    pub fn buy_tickets(
        ctx: Context<BuyTickets>,
        pool_id: u64,
        count: u64,
        recipient: Pubkey,
        payment: u64,
    ) -> Result<()> {
        instructions::buy_tickets::buy_tickets(ctx, pool_id, count, recipient, payment)
    }

    pub fn initiate_settlement(ctx: Context<InitiateSettlement>, pool_id: u64) -> Result<()> {
        instructions::initiate_settlement::initiate_settlement(ctx, pool_id)
    }

    pub fn fulfill_randomness(
        ctx: Context<FulfillRandomness>,
        request_id: u64,
        random_words: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::fulfill_randomness::fulfill_randomness(ctx, request_id, random_words)
    }

    pub fn claim_jackpot(ctx: Context<ClaimJackpot>, receipt_id: u64) -> Result<()> {
        instructions::claim_jackpot::claim_jackpot(ctx, receipt_id)
    }

    pub fn withdraw_fee(ctx: Context<WithdrawFee>, amount: u64) -> Result<()> {
        instructions::withdraw_fee::withdraw_fee(ctx, amount)
    }

    pub fn update_oracle_config(
        ctx: Context<UpdateOracleConfig>,
        request_confirmations: u16,
        callback_compute_budget: u32,
    ) -> Result<()> {
        instructions::update_oracle_config::update_oracle_config(
            ctx,
            request_confirmations,
            callback_compute_budget,
        )
    }

    pub fn set_oracle_authority(
        ctx: Context<UpdateOracleConfig>,
        oracle_authority: Pubkey,
    ) -> Result<()> {
        instructions::update_oracle_config::set_oracle_authority(ctx, oracle_authority)
    }
}
