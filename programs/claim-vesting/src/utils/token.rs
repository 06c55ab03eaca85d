use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};

use crate::constants::LEDGER_CONFIG_SEED;
use crate::error::{LedgerResult, VestingError};
use crate::state::LedgerConfig;

/// Moves `amount` out of the vault, signed by the ledger config PDA.
pub fn transfer_from_vault<'info>(
    ledger_config: &Account<'info, LedgerConfig>,
    vault: &Account<'info, TokenAccount>,
    destination: &Account<'info, TokenAccount>,
    mint: &Account<'info, Mint>,
    token_program: &Program<'info, Token>,
    amount: u64,
) -> LedgerResult<()> {
    let bump = [ledger_config.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[LEDGER_CONFIG_SEED, &bump]];

    token::transfer_checked(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            TransferChecked {
                from: vault.to_account_info(),
                mint: mint.to_account_info(),
                to: destination.to_account_info(),
                authority: ledger_config.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
        mint.decimals,
    )
    .map_err(|e| {
        msg!("vault transfer of {} failed: {}", amount, e);
        VestingError::TransferFailed
    })
}
