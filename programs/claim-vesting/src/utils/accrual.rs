//! Cliff + linear unlock math.
//! - before claim_start, or before cliff_end when a cliff is set: 0
//! - at or after claim_end: total_vested_amount
//! - otherwise total * (now - start) / (end - start), truncated

use crate::error::{LedgerResult, VestingError};
use crate::state::ClaimRecord;

/// Amount of `record`'s entitlement unlocked at `now` under its current terms.
pub fn unlocked_amount(record: &ClaimRecord, now: i64) -> LedgerResult<u64> {
    if now < record.claim_start || (record.has_cliff() && now < record.cliff_end) {
        return Ok(0);
    }
    // Also covers claim_start == claim_end.
    if now >= record.claim_end {
        return Ok(record.total_vested_amount);
    }

    let elapsed = span(record.claim_start, now)?;
    let duration = span(record.claim_start, record.claim_end)?;
    let v = (record.total_vested_amount as u128)
        .checked_mul(elapsed)
        .ok_or(VestingError::MathOverflow)?
        .checked_div(duration)
        .ok_or(VestingError::MathOverflow)?;
    u64::try_from(v).map_err(|_| VestingError::MathOverflow)
}

/// Folds the amount unlocked at `now` into `accrued_amount` and returns the new value.
/// Never lowers the counter. Revoked records are left untouched.
pub fn settle(record: &mut ClaimRecord, now: i64) -> LedgerResult<u64> {
    if record.is_revoked() {
        return Ok(record.accrued_amount);
    }
    let unlocked = unlocked_amount(record, now)?;
    if unlocked > record.accrued_amount {
        record.accrued_amount = unlocked;
    }
    Ok(record.accrued_amount)
}

/// Unlocked-but-unpaid amount at `now`, as if the record were settled first.
pub fn claimable_amount(record: &ClaimRecord, now: i64) -> LedgerResult<u64> {
    let mut settled = *record;
    settle(&mut settled, now)?;
    settled
        .accrued_amount
        .checked_sub(settled.withdrawn_amount)
        .ok_or(VestingError::MathOverflow)
}

/// Amount the vault must keep for this claim regardless of time: the unpaid
/// entitlement while active, the unpaid accrual once revoked.
pub fn committed_amount(record: &ClaimRecord) -> LedgerResult<u64> {
    let ceiling = if record.is_revoked() {
        record.accrued_amount
    } else {
        record.total_vested_amount.max(record.accrued_amount)
    };
    ceiling
        .checked_sub(record.withdrawn_amount)
        .ok_or(VestingError::MathOverflow)
}

fn span(from: i64, to: i64) -> LedgerResult<u128> {
    let d = to.checked_sub(from).ok_or(VestingError::MathOverflow)?;
    u128::try_from(d).map_err(|_| VestingError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::prelude::Pubkey;

    fn record(total: u64, start: i64, end: i64, cliff: i64) -> ClaimRecord {
        ClaimRecord {
            wallet: Pubkey::new_unique(),
            total_vested_amount: total,
            claim_start: start,
            claim_end: end,
            cliff_end: cliff,
            ..ClaimRecord::default()
        }
    }

    #[test]
    fn zero_before_start() {
        let r = record(1000, 1000, 2000, 0);
        assert_eq!(unlocked_amount(&r, 0).unwrap(), 0);
        assert_eq!(unlocked_amount(&r, 999).unwrap(), 0);
        assert_eq!(unlocked_amount(&r, 1000).unwrap(), 0);
    }

    #[test]
    fn linear_between_start_and_end() {
        let r = record(1000, 1000, 2000, 0);
        assert_eq!(unlocked_amount(&r, 1001).unwrap(), 1);
        assert_eq!(unlocked_amount(&r, 1500).unwrap(), 500);
        assert_eq!(unlocked_amount(&r, 1999).unwrap(), 999);
    }

    #[test]
    fn truncates_toward_zero() {
        let r = record(10, 0, 3, 0);
        assert_eq!(unlocked_amount(&r, 1).unwrap(), 3);
        assert_eq!(unlocked_amount(&r, 2).unwrap(), 6);
        assert_eq!(unlocked_amount(&r, 3).unwrap(), 10);
    }

    #[test]
    fn full_at_and_after_end() {
        let r = record(1000, 1000, 2000, 1500);
        assert_eq!(unlocked_amount(&r, 2000).unwrap(), 1000);
        assert_eq!(unlocked_amount(&r, i64::MAX).unwrap(), 1000);
    }

    #[test]
    fn cliff_gates_until_cliff_end() {
        let r = record(1000, 1000, 2000, 1400);
        assert_eq!(unlocked_amount(&r, 1200).unwrap(), 0);
        assert_eq!(unlocked_amount(&r, 1399).unwrap(), 0);
        // linear from claim_start once the cliff passes
        assert_eq!(unlocked_amount(&r, 1400).unwrap(), 400);
    }

    #[test]
    fn zero_length_window_unlocks_at_end() {
        let r = record(1000, 1500, 1500, 0);
        assert_eq!(unlocked_amount(&r, 1499).unwrap(), 0);
        assert_eq!(unlocked_amount(&r, 1500).unwrap(), 1000);
    }

    #[test]
    fn large_amounts_do_not_overflow() {
        let r = record(u64::MAX, 0, 1_000_000, 0);
        assert_eq!(unlocked_amount(&r, 500_000).unwrap(), u64::MAX / 2);
    }

    #[test]
    fn monotone_and_bounded_in_time() {
        let r = record(7_777, 100, 10_100, 3_000);
        let mut prev = 0;
        for now in (0..12_000).step_by(37) {
            let u = unlocked_amount(&r, now).unwrap();
            assert!(u >= prev);
            assert!(u <= r.total_vested_amount);
            prev = u;
        }
        assert_eq!(prev, r.total_vested_amount);
    }

    #[test]
    fn half_year_window_after_one_second() {
        let total = 10 * 1_000_000_000u64;
        let r = record(total, 1_700_000_000, 1_700_000_000 + 15_780_000, 0);
        let u = unlocked_amount(&r, 1_700_000_001).unwrap();
        assert_eq!(u, 633);
        assert!(u < total);
        assert_eq!(unlocked_amount(&r, 1_700_000_000 + 15_780_000).unwrap(), total);
    }

    #[test]
    fn settle_never_decreases() {
        let mut r = record(1000, 1000, 2000, 0);
        assert_eq!(settle(&mut r, 1600).unwrap(), 600);
        // terms extended after settlement; curve now lower at 1600
        r.claim_end = 3000;
        assert_eq!(settle(&mut r, 1600).unwrap(), 600);
        assert_eq!(settle(&mut r, 2500).unwrap(), 750);
    }

    #[test]
    fn settle_is_frozen_once_revoked() {
        let mut r = record(1000, 1000, 2000, 0);
        settle(&mut r, 1300).unwrap();
        r.claim_invalid = 1;
        assert_eq!(settle(&mut r, 2000).unwrap(), 300);
        assert_eq!(claimable_amount(&r, 9999).unwrap(), 300);
    }

    #[test]
    fn claimable_subtracts_withdrawn() {
        let mut r = record(1000, 1000, 2000, 0);
        r.accrued_amount = 400;
        r.withdrawn_amount = 400;
        assert_eq!(claimable_amount(&r, 1400).unwrap(), 0);
        assert_eq!(claimable_amount(&r, 1700).unwrap(), 300);
        // read-only
        assert_eq!(r.accrued_amount, 400);
    }

    #[test]
    fn committed_is_unpaid_entitlement_until_revoked() {
        let mut r = record(1000, 1000, 2000, 0);
        assert_eq!(committed_amount(&r).unwrap(), 1000);
        r.accrued_amount = 400;
        r.withdrawn_amount = 250;
        assert_eq!(committed_amount(&r).unwrap(), 750);

        r.claim_invalid = 1;
        assert_eq!(committed_amount(&r).unwrap(), 150);
        r.withdrawn_amount = 400;
        assert_eq!(committed_amount(&r).unwrap(), 0);
    }
}
