pub mod claim_ledger;
pub mod ledger_config;

pub use claim_ledger::*;
pub use ledger_config::*;
