//! Program-wide constants.

/// Max claimees stored in the claim ledger arena.
pub const MAX_CLAIMEES: usize = 64;

pub const LEDGER_CONFIG_SEED: &[u8] = b"ledger_config";
pub const CLAIM_LEDGER_SEED: &[u8] = b"claim_ledger";
pub const VAULT_SEED: &[u8] = b"vault";
