pub use config::*;
pub use ledger::*;
pub use pool::*;
pub use randomness_request::*;
pub use receipt::*;
pub use treasury::*;

pub mod config;
pub mod ledger;
pub mod pool;
pub mod randomness_request;
pub mod receipt;
pub mod treasury;
