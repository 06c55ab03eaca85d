use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{CLAIM_LEDGER_SEED, LEDGER_CONFIG_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{ClaimLedger, LedgerConfig};
use crate::utils::token::transfer_from_vault;

/// Pays `wallet` everything accrued and not yet withdrawn. Anyone may crank
/// this; tokens only ever go to the claimee's own token account.
pub fn withdraw_accrued_tokens(ctx: Context<WithdrawAccruedTokens>, wallet: Pubkey) -> Result<()> {
    let accounts = &ctx.accounts;
    let cfg = &accounts.ledger_config;
    require_keys_eq!(
        accounts.claimee_token_account.mint,
        cfg.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        accounts.claimee_token_account.owner,
        wallet,
        VestingError::InvalidTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;
    let mut ledger = accounts.claim_ledger.load_mut()?;
    let paid = ledger.withdraw_accrued(&wallet, now, |amount| {
        transfer_from_vault(
            cfg,
            &accounts.vault,
            &accounts.claimee_token_account,
            &accounts.mint,
            &accounts.token_program,
            amount,
        )
    })?;
    let record = *ledger.get(&wallet)?;

    emit!(AccruedTokensWithdrawn {
        wallet,
        amount: paid,
        withdrawn_total: record.withdrawn_amount,
        accrued_amount: record.accrued_amount,
        total_vested_amount: record.total_vested_amount,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawAccruedTokens<'info> {
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
        mut,
        seeds = [VAULT_SEED, ledger_config.key().as_ref()],
        bump = ledger_config.vault_bump,
        constraint = vault.mint == ledger_config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub claimee_token_account: Account<'info, TokenAccount>,

    #[account(
        constraint = mint.key() == ledger_config.mint @ VestingError::InvalidTokenMint,
    )]
    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct AccruedTokensWithdrawn {
    pub wallet: Pubkey,
    pub amount: u64,
    pub withdrawn_total: u64,
    pub accrued_amount: u64,
    pub total_vested_amount: u64,
    pub timestamp: i64,
}
