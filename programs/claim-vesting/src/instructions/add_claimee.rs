use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{CLAIM_LEDGER_SEED, LEDGER_CONFIG_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{ClaimLedger, LedgerConfig};

pub fn add_claimee(
    ctx: Context<AddClaimee>,
    wallet: Pubkey,
    total_vested_amount: u64,
    claim_end: i64,
    claim_start: i64,
    cliff_end: i64,
) -> Result<()> {
    let cfg = &ctx.accounts.ledger_config;
    cfg.require_admin(&ctx.accounts.admin.key())?;

    let mut ledger = ctx.accounts.claim_ledger.load_mut()?;
    let record = *ledger.add_claimee(wallet, total_vested_amount, claim_end, claim_start, cliff_end)?;
    let unfunded_amount = ledger.funding_shortfall(ctx.accounts.vault.amount)?;
    if unfunded_amount > 0 {
        msg!("vault is {} short of committed entitlements", unfunded_amount);
    }

    emit!(ClaimeeAdded {
        wallet,
        total_vested_amount: record.total_vested_amount,
        claim_start: record.claim_start,
        claim_end: record.claim_end,
        cliff_end: record.cliff_end,
        terms_digest: record.terms_digest(),
        claimee_count: ledger.count,
        unfunded_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AddClaimee<'info> {
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

#[event]
pub struct ClaimeeAdded {
    pub wallet: Pubkey,
    pub total_vested_amount: u64,
    pub claim_start: i64,
    pub claim_end: i64,
    pub cliff_end: i64,
    pub terms_digest: [u8; 32],
    pub claimee_count: u64,
    /// Committed entitlements not covered by the vault balance.
    pub unfunded_amount: u64,
}
