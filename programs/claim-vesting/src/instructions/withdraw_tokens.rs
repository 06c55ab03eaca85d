use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{CLAIM_LEDGER_SEED, LEDGER_CONFIG_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{ClaimLedger, LedgerConfig};
use crate::utils::token::transfer_from_vault;

/// Admin withdrawal from the shared reserve. Only the part of the vault not
/// committed to claimees can leave: unpaid entitlement of active claims and
/// unpaid accrual of revoked ones stay behind.
pub fn withdraw_tokens(ctx: Context<WithdrawTokens>, amount: u64) -> Result<()> {
    let accounts = &ctx.accounts;
    let cfg = &accounts.ledger_config;
    cfg.require_admin(&accounts.admin.key())?;
    require_keys_eq!(accounts.destination.mint, cfg.mint, VestingError::InvalidTokenMint);

    let ledger = accounts.claim_ledger.load()?;
    let vault_balance = accounts.vault.amount;
    let remaining_available = ledger.withdraw_reserve(amount, vault_balance, |amount| {
        transfer_from_vault(
            cfg,
            &accounts.vault,
            &accounts.destination,
            &accounts.mint,
            &accounts.token_program,
            amount,
        )
    })?;

    emit!(ReserveWithdrawn {
        admin: cfg.admin,
        destination: accounts.destination.key(),
        amount,
        vault_balance_before: vault_balance,
        remaining_available,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawTokens<'info> {
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
        mut,
        seeds = [VAULT_SEED, ledger_config.key().as_ref()],
        bump = ledger_config.vault_bump,
        constraint = vault.mint == ledger_config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub destination: Account<'info, TokenAccount>,

    #[account(
        constraint = mint.key() == ledger_config.mint @ VestingError::InvalidTokenMint,
    )]
    pub mint: Account<'info, Mint>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct ReserveWithdrawn {
    pub admin: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub vault_balance_before: u64,
    /// Reserve still free for the admin after this withdrawal.
    pub remaining_available: u64,
}
