pub mod accrue_rewards;
pub mod add_claimee;
pub mod claim_views;
pub mod deposit_tokens;
pub mod initialize_ledger;
pub mod remove_claimee;
pub mod update_claim;
pub mod withdraw_accrued_tokens;
pub mod withdraw_tokens;

pub use accrue_rewards::*;
pub use add_claimee::*;
pub use claim_views::*;
pub use deposit_tokens::*;
pub use initialize_ledger::*;
pub use remove_claimee::*;
pub use update_claim::*;
pub use withdraw_accrued_tokens::*;
pub use withdraw_tokens::*;
