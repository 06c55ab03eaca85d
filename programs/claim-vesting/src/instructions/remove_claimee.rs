use anchor_lang::prelude::*;

use crate::constants::{CLAIM_LEDGER_SEED, LEDGER_CONFIG_SEED};
use crate::error::VestingError;
use crate::state::{ClaimLedger, LedgerConfig};

/// Revokes a claim: accrual is settled to now, then frozen. Amounts accrued
/// up to this point stay withdrawable.
pub fn remove_claimee(ctx: Context<RemoveClaimee>, wallet: Pubkey) -> Result<()> {
    let cfg = &ctx.accounts.ledger_config;
    cfg.require_admin(&ctx.accounts.admin.key())?;

    let now = Clock::get()?.unix_timestamp;
    let mut ledger = ctx.accounts.claim_ledger.load_mut()?;
    let newly_revoked = ledger.remove_claimee(&wallet, now)?;
    let record = *ledger.get(&wallet)?;

    if !newly_revoked {
        msg!("claim for {} already revoked", wallet);
        return Ok(());
    }

    emit!(ClaimeeRevoked {
        admin: cfg.admin,
        wallet,
        accrued_amount: record.accrued_amount,
        withdrawn_amount: record.withdrawn_amount,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RemoveClaimee<'info> {
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

    pub admin: Signer<'info>,
}

#[event]
pub struct ClaimeeRevoked {
    pub admin: Pubkey,
    pub wallet: Pubkey,
    /// Frozen ceiling for the claimee's remaining withdrawals.
    pub accrued_amount: u64,
    pub withdrawn_amount: u64,
    pub timestamp: i64,
}
