use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};

use crate::constants::{LEDGER_CONFIG_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::LedgerConfig;

pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidAmount);

    let cfg = &ctx.accounts.ledger_config;
    cfg.require_admin(&ctx.accounts.admin.key())?;
    require_keys_eq!(
        ctx.accounts.admin_token_account.mint,
        cfg.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.admin_token_account.owner,
        ctx.accounts.admin.key(),
        VestingError::InvalidTokenAccount
    );

    token::transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.admin_token_account.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        amount,
        ctx.accounts.mint.decimals,
    )?;

    ctx.accounts.vault.reload()?;

    emit!(TokensDeposited {
        admin: cfg.admin,
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositTokens<'info> {
    #[account(seeds = [LEDGER_CONFIG_SEED], bump = ledger_config.bump)]
    pub ledger_config: Account<'info, LedgerConfig>,

    #[account(
        mut,
        seeds = [VAULT_SEED, ledger_config.key().as_ref()],
        bump = ledger_config.vault_bump,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        constraint = mint.key() == ledger_config.mint @ VestingError::InvalidTokenMint,
    )]
    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin_token_account: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensDeposited {
    pub admin: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
