use anchor_lang::error_code;

#[error_code]
pub enum LotteryError {
    Overflow,
    InvalidTicketCount,
    #[msg("Ticket price is below the minimum allowed")]
    TicketPriceTooLow,
    #[msg("No-winner percent must be below 10000 basis points")]
    NoWinnerPercentTooHigh,
    #[msg("Fee percent must be below 10000 basis points")]
    FeePercentTooHigh,
    #[msg("Expiry must be at least one day in the future")]
    ExpiryTooSoon,
    #[msg("Payment does not match the price of the requested tickets")]
    PaymentMismatch,
    #[msg("Pool has expired")]
    PoolExpired,
    #[msg("Ticket sales close one hour before expiry")]
    PurchaseCutoffReached,
    #[msg("Pool has not expired yet")]
    PoolNotExpired,
    #[msg("Settlement has already been initiated for this pool")]
    SettlementAlreadyStarted,
    #[msg("Pool is not awaiting randomness")]
    SettlementNotInitiated,
    #[msg("Randomness request does not belong to this pool")]
    RequestPoolMismatch,
    #[msg("Oracle response did not contain a random word")]
    MissingRandomWord,
    #[msg("Cannot draw from an empty range")]
    EmptyDrawRange,
    #[msg("Pool has not been settled")]
    PoolNotSettled,
    #[msg("Receipt does not hold the winning ticket")]
    NotWinningReceipt,
    #[msg("Receipt does not belong to this pool")]
    ReceiptPoolMismatch,
    #[msg("Jackpot recipient is not the receipt owner")]
    ReceiptOwnerMismatch,
    #[msg("Not enough reinvestable funds to seed the jackpot")]
    InsufficientReinvestableFunds,
    #[msg("Not enough collected fees to withdraw")]
    InsufficientFeeReserve,
    #[msg("Treasury cannot cover the transfer and stay rent exempt")]
    InsufficientTreasuryBalance,
    #[msg("Payout would leave the recipient below the rent-exempt minimum")]
    RecipientNotRentExempt,
    #[msg("Request confirmations out of range")]
    InvalidRequestConfirmations,
    #[msg("Callback compute budget out of range")]
    InvalidCallbackComputeBudget,
    #[msg("Only the program management authority can perform this action")]
    NotProgramManagementAuthority,
    #[msg("Only the payout authority may be used to withdraw fees")]
    NotPayoutAuthority,
    #[msg("Only the oracle authority can deliver randomness")]
    NotOracleAuthority,
}
