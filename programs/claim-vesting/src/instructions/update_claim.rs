use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{CLAIM_LEDGER_SEED, LEDGER_CONFIG_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{ClaimLedger, ClaimRecord, LedgerConfig};

// Each term change settles accrual under the old terms before applying the
// new one, so nothing already recognized is erased.

pub fn change_total_vested_amount(
    ctx: Context<UpdateClaim>,
    wallet: Pubkey,
    new_amount: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    apply(&ctx, wallet, now, ClaimTerm::TotalVestedAmount, |ledger| {
        ledger.change_total_vested_amount(&wallet, new_amount, now)
    })
}

pub fn change_vest_period(ctx: Context<UpdateClaim>, wallet: Pubkey, new_claim_end: i64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    apply(&ctx, wallet, now, ClaimTerm::VestPeriod, |ledger| {
        ledger.change_vest_period(&wallet, new_claim_end, now)
    })
}

pub fn change_cliff(ctx: Context<UpdateClaim>, wallet: Pubkey, new_cliff_end: i64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    apply(&ctx, wallet, now, ClaimTerm::Cliff, |ledger| {
        ledger.change_cliff(&wallet, new_cliff_end, now)
    })
}

fn apply<F>(ctx: &Context<UpdateClaim>, wallet: Pubkey, now: i64, term: ClaimTerm, change: F) -> Result<()>
where
    F: FnOnce(&mut ClaimLedger) -> crate::error::LedgerResult<&ClaimRecord>,
{
    let cfg = &ctx.accounts.ledger_config;
    cfg.require_admin(&ctx.accounts.admin.key())?;

    let mut ledger = ctx.accounts.claim_ledger.load_mut()?;
    let record = *change(&mut *ledger)?;
    let unfunded_amount = ledger.funding_shortfall(ctx.accounts.vault.amount)?;
    if unfunded_amount > 0 {
        msg!("vault is {} short of committed entitlements", unfunded_amount);
    }

    emit!(ClaimTermsChanged {
        wallet,
        term,
        total_vested_amount: record.total_vested_amount,
        claim_start: record.claim_start,
        claim_end: record.claim_end,
        cliff_end: record.cliff_end,
        accrued_amount: record.accrued_amount,
        terms_digest: record.terms_digest(),
        unfunded_amount,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateClaim<'info> {
    #[account(
        seeds = [LEDGER_CONFIG_SEED],
        bump = ledger_config.bump,
        has_one = claim_ledger @ VestingError::InvalidLedgerAccount,
    )]
    pub ledger_config: Account<'info, LedgerConfig>,

    #[account(
        mut,
        seeds = [CLAIM_LEDGER_SEED, ledger_config.key().as_ref()],
        bump
    )]
    pub claim_ledger: AccountLoader<'info, ClaimLedger>,

    #[account(
        seeds = [VAULT_SEED, ledger_config.key().as_ref()],
        bump = ledger_config.vault_bump,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimTerm {
    TotalVestedAmount,
    VestPeriod,
    Cliff,
}

#[event]
pub struct ClaimTermsChanged {
    pub wallet: Pubkey,
    pub term: ClaimTerm,
    pub total_vested_amount: u64,
    pub claim_start: i64,
    pub claim_end: i64,
    pub cliff_end: i64,
    pub accrued_amount: u64,
    pub terms_digest: [u8; 32],
    pub unfunded_amount: u64,
    pub timestamp: i64,
}
