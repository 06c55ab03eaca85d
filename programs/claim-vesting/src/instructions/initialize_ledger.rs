use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{CLAIM_LEDGER_SEED, LEDGER_CONFIG_SEED, VAULT_SEED};
use crate::state::{ClaimLedger, LedgerConfig};

/// The signer that creates the ledger becomes its admin.
pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
    let mut ledger = ctx.accounts.claim_ledger.load_init()?;
    ledger.count = 0;

    let cfg = &mut ctx.accounts.ledger_config;
    cfg.admin = ctx.accounts.admin.key();
    cfg.mint = ctx.accounts.mint.key();
    cfg.vault = ctx.accounts.vault.key();
    cfg.claim_ledger = ctx.accounts.claim_ledger.key();
    cfg.bump = ctx.bumps.ledger_config;
    cfg.vault_bump = ctx.bumps.vault;

    emit!(LedgerInitialized {
        admin: cfg.admin,
        mint: cfg.mint,
        vault: cfg.vault,
        claim_ledger: cfg.claim_ledger,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + LedgerConfig::SIZE,
        seeds = [LEDGER_CONFIG_SEED],
        bump
    )]
    pub ledger_config: Account<'info, LedgerConfig>,

    #[account(
        init,
        payer = admin,
        space = ClaimLedger::SPACE,
        seeds = [CLAIM_LEDGER_SEED, ledger_config.key().as_ref()],
        bump
    )]
    pub claim_ledger: AccountLoader<'info, ClaimLedger>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = ledger_config,
        seeds = [VAULT_SEED, ledger_config.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct LedgerInitialized {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub claim_ledger: Pubkey,
}
