use anchor_lang::prelude::*;

use crate::error::{LedgerResult, VestingError};

/// Singleton ledger configuration PDA. Also the signing authority of the vault.
#[account]
pub struct LedgerConfig {
    /// Administrator identity, fixed at construction.
    pub admin: Pubkey,
    /// The single token mint the ledger vests.
    pub mint: Pubkey,
    /// Vault token account holding the shared reserve.
    pub vault: Pubkey,
    /// Zero-copy claim arena.
    pub claim_ledger: Pubkey,
    pub bump: u8,
    pub vault_bump: u8,
}

impl LedgerConfig {
    pub const SIZE: usize =
        32 + // admin
        32 + // mint
        32 + // vault
        32 + // claim_ledger
        1 +  // bump
        1;   // vault_bump

    pub fn require_admin(&self, key: &Pubkey) -> LedgerResult<()> {
        if *key != self.admin {
            return Err(VestingError::Unauthorized);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(admin: Pubkey) -> LedgerConfig {
        LedgerConfig {
            admin,
            mint: Pubkey::new_unique(),
            vault: Pubkey::new_unique(),
            claim_ledger: Pubkey::new_unique(),
            bump: 255,
            vault_bump: 254,
        }
    }

    #[test]
    fn admin_passes_the_guard() {
        let admin = Pubkey::new_unique();
        assert!(config(admin).require_admin(&admin).is_ok());
    }

    #[test]
    fn other_keys_are_unauthorized() {
        let cfg = config(Pubkey::new_unique());
        for key in [Pubkey::new_unique(), cfg.mint, Pubkey::default()] {
            let err = cfg.require_admin(&key).unwrap_err();
            assert!(matches!(err, VestingError::Unauthorized));
        }
    }
}
