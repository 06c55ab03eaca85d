use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{CLAIM_LEDGER_SEED, LEDGER_CONFIG_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{ClaimLedger, ClaimSnapshot, LedgerConfig};

/// Live unlocked-but-unpaid amount for `wallet`. Does not write.
pub fn get_user_claim_amount(ctx: Context<ReadLedger>, wallet: Pubkey) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let ledger = ctx.accounts.claim_ledger.load()?;
    let claimable = ledger.claim_amount(&wallet, now)?;
    let record = ledger.get(&wallet)?;

    emit!(ClaimQuote {
        wallet,
        claimable,
        accrued_amount: record.accrued_amount,
        withdrawn_amount: record.withdrawn_amount,
        total_vested_amount: record.total_vested_amount,
        timestamp: now,
    });

    Ok(claimable)
}

/// Stored record fields, without live recomputation.
pub fn get_user_claim_data(ctx: Context<ReadLedger>, wallet: Pubkey) -> Result<ClaimSnapshot> {
    let ledger = ctx.accounts.claim_ledger.load()?;
    Ok(ClaimSnapshot::from(ledger.get(&wallet)?))
}

pub fn get_total_outstanding(ctx: Context<ReadLedger>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let ledger = ctx.accounts.claim_ledger.load()?;
    Ok(ledger.total_outstanding(now)?)
}

pub fn get_ledger_info(ctx: Context<ReadLedger>) -> Result<LedgerInfo> {
    let now = Clock::get()?.unix_timestamp;
    let cfg = &ctx.accounts.ledger_config;
    let ledger = ctx.accounts.claim_ledger.load()?;
    let vault_balance = ctx.accounts.vault.amount;

    Ok(LedgerInfo {
        admin: cfg.admin,
        mint: cfg.mint,
        vault: cfg.vault,
        vault_balance,
        total_outstanding: ledger.total_outstanding(now)?,
        total_committed: ledger.total_committed()?,
        available_reserve: ledger.available_reserve(vault_balance)?,
        claimee_count: ledger.count,
    })
}

#[derive(Accounts)]
pub struct ReadLedger<'info> {
    #[account(
        seeds = [LEDGER_CONFIG_SEED],
        bump = ledger_config.bump,
        has_one = claim_ledger @ VestingError::InvalidLedgerAccount,
    )]
    pub ledger_config: Account<'info, LedgerConfig>,

    #[account(
        seeds = [CLAIM_LEDGER_SEED, ledger_config.key().as_ref()],
        bump
    )]
    pub claim_ledger: AccountLoader<'info, ClaimLedger>,

    #[account(
        seeds = [VAULT_SEED, ledger_config.key().as_ref()],
        bump = ledger_config.vault_bump,
    )]
    pub vault: Account<'info, TokenAccount>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedgerInfo {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub vault_balance: u64,
    pub total_outstanding: u64,
    pub total_committed: u64,
    pub available_reserve: u64,
    pub claimee_count: u64,
}

#[event]
pub struct ClaimQuote {
    pub wallet: Pubkey,
    pub claimable: u64,
    pub accrued_amount: u64,
    pub withdrawn_amount: u64,
    pub total_vested_amount: u64,
    pub timestamp: i64,
}
