// PDA seeds
pub const CONFIG_SEED: &[u8] = b"config";
pub const LEDGER_SEED: &[u8] = b"ledger";
pub const TREASURY_SEED: &[u8] = b"treasury";
pub const POOL_SEED: &[u8] = b"pool";
pub const RECEIPT_SEED: &[u8] = b"receipt";
pub const RANDOMNESS_REQUEST_SEED: &[u8] = b"randomness_request";

/// 100.00% expressed in basis points.
pub const BASIS_POINTS: u16 = 10_000;

// Pool creation limits
pub const MIN_TICKET_PRICE: u64 = 100_000; // 0.0001 SOL
pub const MIN_POOL_DURATION: i64 = 24 * 60 * 60; // 1 day in seconds

/// Purchases close this many seconds before expiry.
pub const PURCHASE_CUTOFF: i64 = 60 * 60;

// Oracle request settings
pub const RANDOM_WORD_COUNT: u32 = 1;
pub const MAX_REQUEST_CONFIRMATIONS: u16 = 200;
pub const MAX_CALLBACK_COMPUTE_BUDGET: u32 = 1_400_000;
