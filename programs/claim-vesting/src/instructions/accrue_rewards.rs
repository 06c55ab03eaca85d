use anchor_lang::prelude::*;

use crate::constants::{CLAIM_LEDGER_SEED, LEDGER_CONFIG_SEED};
use crate::error::VestingError;
use crate::state::{ClaimLedger, LedgerConfig};

/// Permissionless: bookkeeping only, no funds move.
pub fn accrue_rewards_for_account(ctx: Context<AccrueRewards>, wallet: Pubkey) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let mut ledger = ctx.accounts.claim_ledger.load_mut()?;
    let added = ledger.accrue(&wallet, now)?;
    let record = *ledger.get(&wallet)?;

    if record.is_revoked() {
        msg!("claim for {} is revoked, accrual frozen", wallet);
        return Ok(());
    }

    emit!(RewardsAccrued {
        wallet,
        added,
        accrued_amount: record.accrued_amount,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AccrueRewards<'info> {
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
}

#[event]
pub struct RewardsAccrued {
    pub wallet: Pubkey,
    pub added: u64,
    pub accrued_amount: u64,
    pub timestamp: i64,
}
