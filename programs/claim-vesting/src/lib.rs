#![allow(unexpected_cfgs)]

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use error::*;
pub use instructions::*;
pub use state::*;

declare_id!("6zGcbFHLWa7DUuXF3S7XtDHdi6b1991iraBi1dJwfoQA");

/// Cliff + linear vesting ledger for a single SPL mint.
///
/// One admin registers claimees with a total entitlement and a schedule; the
/// unlocked part accrues into each claim record and can be withdrawn from a
/// shared vault. The admin may only take out what is not owed to claimees.
#[program]
pub mod claim_vesting {
    use super::*;

    /// The signer becomes the admin.
    pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
        crate::instructions::initialize_ledger::initialize_ledger(ctx)
    }

    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        crate::instructions::deposit_tokens::deposit_tokens(ctx, amount)
    }

    /// Access Control: admin only
    pub fn add_claimee(
        ctx: Context<AddClaimee>,
        wallet: Pubkey,
        total_vested_amount: u64,
        claim_end: i64,
        claim_start: i64,
        cliff_end: i64,
    ) -> Result<()> {
        crate::instructions::add_claimee::add_claimee(
            ctx,
            wallet,
            total_vested_amount,
            claim_end,
            claim_start,
            cliff_end,
        )
    }

    /// Access Control: admin only
    pub fn remove_claimee(ctx: Context<RemoveClaimee>, wallet: Pubkey) -> Result<()> {
        crate::instructions::remove_claimee::remove_claimee(ctx, wallet)
    }

    pub fn accrue_rewards_for_account(ctx: Context<AccrueRewards>, wallet: Pubkey) -> Result<()> {
        crate::instructions::accrue_rewards::accrue_rewards_for_account(ctx, wallet)
    }

    /// Access Control: admin only
    pub fn change_total_vested_amount(
        ctx: Context<UpdateClaim>,
        wallet: Pubkey,
        new_amount: u64,
    ) -> Result<()> {
        crate::instructions::update_claim::change_total_vested_amount(ctx, wallet, new_amount)
    }

    /// Access Control: admin only
    pub fn change_vest_period(ctx: Context<UpdateClaim>, wallet: Pubkey, new_claim_end: i64) -> Result<()> {
        crate::instructions::update_claim::change_vest_period(ctx, wallet, new_claim_end)
    }

    /// Access Control: admin only. The claim must have been created with a cliff.
    pub fn change_cliff(ctx: Context<UpdateClaim>, wallet: Pubkey, new_cliff_end: i64) -> Result<()> {
        crate::instructions::update_claim::change_cliff(ctx, wallet, new_cliff_end)
    }

    pub fn withdraw_accrued_tokens(ctx: Context<WithdrawAccruedTokens>, wallet: Pubkey) -> Result<()> {
        crate::instructions::withdraw_accrued_tokens::withdraw_accrued_tokens(ctx, wallet)
    }

    /// Access Control: admin only
    pub fn withdraw_tokens(ctx: Context<WithdrawTokens>, amount: u64) -> Result<()> {
        crate::instructions::withdraw_tokens::withdraw_tokens(ctx, amount)
    }

    pub fn get_user_claim_amount(ctx: Context<ReadLedger>, wallet: Pubkey) -> Result<u64> {
        crate::instructions::claim_views::get_user_claim_amount(ctx, wallet)
    }

    pub fn get_user_claim_data(ctx: Context<ReadLedger>, wallet: Pubkey) -> Result<ClaimSnapshot> {
        crate::instructions::claim_views::get_user_claim_data(ctx, wallet)
    }

    pub fn get_total_outstanding(ctx: Context<ReadLedger>) -> Result<u64> {
        crate::instructions::claim_views::get_total_outstanding(ctx)
    }

    pub fn get_ledger_info(ctx: Context<ReadLedger>) -> Result<LedgerInfo> {
        crate::instructions::claim_views::get_ledger_info(ctx)
    }
}
