use anchor_lang::prelude::*;

/// Custom error codes for the claim vesting ledger.
#[error_code]
pub enum VestingError {
    #[msg("Claim not found for this identity")]
    NotFound,

    #[msg("Claim already exists for this identity")]
    AlreadyExists,

    #[msg("Invalid schedule: start/end/cliff out of order")]
    InvalidSchedule,

    #[msg("Unauthorized: admin signature required")]
    Unauthorized,

    #[msg("Claim is revoked")]
    Revoked,

    #[msg("Cliff can't be changed if not set previously")]
    NoCliffSet,

    #[msg("Nothing to withdraw")]
    NothingToWithdraw,

    #[msg("Amount exceeds reserve available to the admin")]
    InsufficientReserve,

    #[msg("Token transfer failed")]
    TransferFailed,

    #[msg("Claim ledger is full")]
    LedgerFull,

    #[msg("Invalid amount")]
    InvalidAmount,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Claim ledger account does not belong to this config")]
    InvalidLedgerAccount,

    #[msg("Math overflow")]
    MathOverflow,
}

/// Result type for the pure ledger core, which runs without an Anchor context.
pub type LedgerResult<T> = core::result::Result<T, VestingError>;
