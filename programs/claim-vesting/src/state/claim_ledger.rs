use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};

use crate::constants::MAX_CLAIMEES;
use crate::error::{LedgerResult, VestingError};
use crate::utils::accrual;

/// A single claimee's vesting record, stored in the claim ledger arena.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct ClaimRecord {
    pub wallet: Pubkey,
    /// Total entitlement in token base units.
    pub total_vested_amount: u64,
    pub claim_start: i64,
    pub claim_end: i64,
    /// 0 means no cliff.
    pub cliff_end: i64,
    /// Amount recognized as unlocked as of the last settlement.
    pub accrued_amount: u64,
    /// Amount already paid out to the claimee.
    pub withdrawn_amount: u64,
    /// Non-zero once revoked. Never cleared.
    pub claim_invalid: u8,
    pub _padding: [u8; 7],
}

impl ClaimRecord {
    pub fn is_revoked(&self) -> bool {
        self.claim_invalid != 0
    }

    pub fn has_cliff(&self) -> bool {
        self.cliff_end != 0
    }

    /// blake3 over the wallet and schedule terms. Accrual counters are excluded.
    pub fn terms_digest(&self) -> [u8; 32] {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.wallet.as_ref());
        hasher.update(&self.total_vested_amount.to_le_bytes());
        hasher.update(&self.claim_start.to_le_bytes());
        hasher.update(&self.claim_end.to_le_bytes());
        hasher.update(&self.cliff_end.to_le_bytes());
        *hasher.finalize().as_bytes()
    }
}

/// Checks `claim_start <= claim_end` and, when a cliff is set, `claim_start <= cliff_end <= claim_end`.
pub fn validate_schedule(claim_start: i64, claim_end: i64, cliff_end: i64) -> LedgerResult<()> {
    if claim_start < 0 || claim_start > claim_end {
        return Err(VestingError::InvalidSchedule);
    }
    if cliff_end != 0 && (cliff_end < claim_start || cliff_end > claim_end) {
        return Err(VestingError::InvalidSchedule);
    }
    Ok(())
}

/// Read-only view of a stored record, as returned by `get_user_claim_data`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimSnapshot {
    pub wallet: Pubkey,
    pub total_vested_amount: u64,
    pub claim_start: i64,
    pub claim_end: i64,
    pub cliff_end: i64,
    pub accrued_amount: u64,
    pub withdrawn_amount: u64,
    pub claim_invalid: bool,
}

impl From<&ClaimRecord> for ClaimSnapshot {
    fn from(r: &ClaimRecord) -> Self {
        Self {
            wallet: r.wallet,
            total_vested_amount: r.total_vested_amount,
            claim_start: r.claim_start,
            claim_end: r.claim_end,
            cliff_end: r.cliff_end,
            accrued_amount: r.accrued_amount,
            withdrawn_amount: r.withdrawn_amount,
            claim_invalid: r.is_revoked(),
        }
    }
}

/// Zero-copy PDA holding every claim record (<= MAX_CLAIMEES).
///
/// Records are appended in creation order and never removed; revocation only
/// flips `claim_invalid`. A record exists iff it sits in `entries[..count]`.
#[account(zero_copy)]
pub struct ClaimLedger {
    pub entries: [ClaimRecord; MAX_CLAIMEES],
    pub count: u64,
}

impl ClaimLedger {
    /// Space for discriminator + fixed entries array.
    pub const SPACE: usize = 8 + core::mem::size_of::<ClaimLedger>();

    pub fn len(&self) -> usize {
        self.count as usize
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn records(&self) -> &[ClaimRecord] {
        &self.entries[..self.len()]
    }

    pub fn get(&self, wallet: &Pubkey) -> LedgerResult<&ClaimRecord> {
        self.records()
            .iter()
            .find(|r| r.wallet == *wallet)
            .ok_or(VestingError::NotFound)
    }

    fn get_mut(&mut self, wallet: &Pubkey) -> LedgerResult<&mut ClaimRecord> {
        let len = self.len();
        self.entries[..len]
            .iter_mut()
            .find(|r| r.wallet == *wallet)
            .ok_or(VestingError::NotFound)
    }

    pub fn add_claimee(
        &mut self,
        wallet: Pubkey,
        total_vested_amount: u64,
        claim_end: i64,
        claim_start: i64,
        cliff_end: i64,
    ) -> LedgerResult<&ClaimRecord> {
        if wallet == Pubkey::default() {
            return Err(VestingError::InvalidPubkey);
        }
        if self.get(&wallet).is_ok() {
            return Err(VestingError::AlreadyExists);
        }
        validate_schedule(claim_start, claim_end, cliff_end)?;
        let idx = self.len();
        if idx >= MAX_CLAIMEES {
            return Err(VestingError::LedgerFull);
        }

        self.entries[idx] = ClaimRecord {
            wallet,
            total_vested_amount,
            claim_start,
            claim_end,
            cliff_end,
            accrued_amount: 0,
            withdrawn_amount: 0,
            claim_invalid: 0,
            _padding: [0u8; 7],
        };
        self.count = self.count.checked_add(1).ok_or(VestingError::MathOverflow)?;
        Ok(&self.entries[idx])
    }

    /// Settles accrual up to `now`, then freezes the claim.
    ///
    /// Returns `false` when the claim was already revoked (nothing changes).
    pub fn remove_claimee(&mut self, wallet: &Pubkey, now: i64) -> LedgerResult<bool> {
        let slot = self.get_mut(wallet)?;
        if slot.is_revoked() {
            return Ok(false);
        }
        let mut next = *slot;
        accrual::settle(&mut next, now)?;
        next.claim_invalid = 1;
        *slot = next;
        Ok(true)
    }

    /// Recognizes newly-unlocked entitlement. Returns the amount added to `accrued_amount`.
    ///
    /// A no-op on revoked claims.
    pub fn accrue(&mut self, wallet: &Pubkey, now: i64) -> LedgerResult<u64> {
        let slot = self.get_mut(wallet)?;
        let before = slot.accrued_amount;
        let after = accrual::settle(slot, now)?;
        after.checked_sub(before).ok_or(VestingError::MathOverflow)
    }

    /// Live unlocked-but-unpaid amount. Does not mutate.
    pub fn claim_amount(&self, wallet: &Pubkey, now: i64) -> LedgerResult<u64> {
        accrual::claimable_amount(self.get(wallet)?, now)
    }

    pub fn change_total_vested_amount(
        &mut self,
        wallet: &Pubkey,
        new_amount: u64,
        now: i64,
    ) -> LedgerResult<&ClaimRecord> {
        self.update_active(wallet, now, |r| {
            if new_amount < r.withdrawn_amount {
                return Err(VestingError::InvalidAmount);
            }
            r.total_vested_amount = new_amount;
            Ok(())
        })
    }

    pub fn change_vest_period(
        &mut self,
        wallet: &Pubkey,
        new_claim_end: i64,
        now: i64,
    ) -> LedgerResult<&ClaimRecord> {
        self.update_active(wallet, now, |r| {
            r.claim_end = new_claim_end;
            Ok(())
        })
    }

    pub fn change_cliff(
        &mut self,
        wallet: &Pubkey,
        new_cliff_end: i64,
        now: i64,
    ) -> LedgerResult<&ClaimRecord> {
        self.update_active(wallet, now, |r| {
            if !r.has_cliff() {
                return Err(VestingError::NoCliffSet);
            }
            if new_cliff_end == 0 {
                return Err(VestingError::InvalidSchedule);
            }
            r.cliff_end = new_cliff_end;
            Ok(())
        })
    }

    /// Settle under the old terms, apply `change`, re-validate, clamp accrual to the new cap.
    /// The stored record is only overwritten once every step has succeeded.
    fn update_active<F>(&mut self, wallet: &Pubkey, now: i64, change: F) -> LedgerResult<&ClaimRecord>
    where
        F: FnOnce(&mut ClaimRecord) -> LedgerResult<()>,
    {
        let slot = self.get_mut(wallet)?;
        if slot.is_revoked() {
            return Err(VestingError::Revoked);
        }

        let mut next = *slot;
        accrual::settle(&mut next, now)?;
        change(&mut next)?;
        validate_schedule(next.claim_start, next.claim_end, next.cliff_end)?;
        next.accrued_amount = next.accrued_amount.min(next.total_vested_amount);

        *slot = next;
        Ok(&*slot)
    }

    /// Sum over all claims of (effective unlocked amount at `now` - withdrawn).
    pub fn total_outstanding(&self, now: i64) -> LedgerResult<u64> {
        let mut sum: u64 = 0;
        for r in self.records() {
            sum = sum
                .checked_add(accrual::claimable_amount(r, now)?)
                .ok_or(VestingError::MathOverflow)?;
        }
        Ok(sum)
    }

    /// Sum over all claims of what the vault still has to pay out eventually.
    /// Never below `total_outstanding` at any time.
    pub fn total_committed(&self) -> LedgerResult<u64> {
        let mut sum: u64 = 0;
        for r in self.records() {
            sum = sum
                .checked_add(accrual::committed_amount(r)?)
                .ok_or(VestingError::MathOverflow)?;
        }
        Ok(sum)
    }

    /// Portion of `vault_balance` not committed to any claimee.
    pub fn available_reserve(&self, vault_balance: u64) -> LedgerResult<u64> {
        Ok(vault_balance.saturating_sub(self.total_committed()?))
    }

    /// How far `vault_balance` falls short of the committed total.
    pub fn funding_shortfall(&self, vault_balance: u64) -> LedgerResult<u64> {
        Ok(self.total_committed()?.saturating_sub(vault_balance))
    }

    /// Pays the claimee everything accrued and not yet withdrawn.
    ///
    /// `transfer` moves the tokens and runs last; the record is only advanced
    /// after it returns `Ok`. Returns the amount paid.
    pub fn withdraw_accrued<F>(&mut self, wallet: &Pubkey, now: i64, transfer: F) -> LedgerResult<u64>
    where
        F: FnOnce(u64) -> LedgerResult<()>,
    {
        let slot = self.get_mut(wallet)?;
        let mut next = *slot;
        accrual::settle(&mut next, now)?;

        let payable = next
            .accrued_amount
            .checked_sub(next.withdrawn_amount)
            .ok_or(VestingError::MathOverflow)?;
        if payable == 0 {
            return Err(VestingError::NothingToWithdraw);
        }

        transfer(payable)?;

        next.withdrawn_amount = next.accrued_amount;
        *slot = next;
        Ok(payable)
    }

    /// Admin withdrawal out of the uncommitted part of the vault. Returns the
    /// reserve still available afterwards.
    pub fn withdraw_reserve<F>(&self, amount: u64, vault_balance: u64, transfer: F) -> LedgerResult<u64>
    where
        F: FnOnce(u64) -> LedgerResult<()>,
    {
        if amount == 0 {
            return Err(VestingError::InvalidAmount);
        }
        let available = self.available_reserve(vault_balance)?;
        if amount > available {
            return Err(VestingError::InsufficientReserve);
        }

        transfer(amount)?;

        Ok(available - amount)
    }
}
