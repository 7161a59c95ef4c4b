pub use buy_tickets::*;
pub use claim_jackpot::*;
pub use create_pool::*;
pub use fulfill_randomness::*;
pub use init_config::*;
pub use initiate_settlement::*;
pub use update_oracle_config::*;
pub use withdraw_fee::*;

pub mod buy_tickets;
pub mod claim_jackpot;
pub mod create_pool;
pub mod fulfill_randomness;
pub mod init_config;
pub mod initiate_settlement;
pub mod update_oracle_config;
pub mod withdraw_fee;
