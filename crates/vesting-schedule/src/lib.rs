//! The TGE-percentage-plus-cliff-plus-linear schedule for token vesting.

use num::{BigUint, Zero};

/// The basis points denominator: 10000 bps = 100%.
pub const BPS_DENOMINATOR: u32 = 10_000;

/// A vesting schedule for a lump token grant.
///
/// A `tge_percentage_bps` slice of `total_amount` unlocks at `tge_timestamp`;
/// nothing more unlocks during the cliff; the remainder then vests linearly
/// over `vesting_seconds`.
///
/// Invariant: `tge_percentage_bps` is in `[0, 10000]`. Callers are expected
/// to validate inputs at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VestingSchedule {
    /// The total granted amount.
    pub total_amount: BigUint,
    /// The slice unlocked at TGE, in basis points of `total_amount`.
    pub tge_percentage_bps: u16,
    /// The cliff duration (counting from TGE).
    pub cliff_seconds: u64,
    /// The linear vesting duration (counting from after the cliff).
    pub vesting_seconds: u64,
    /// The TGE reference point, unix seconds. Zero means "not set yet".
    pub tge_timestamp: u64,
}

impl VestingSchedule {
    /// Compute the vested (unlocked) portion of the grant at
    /// `now_seconds`.
    ///
    /// Non-decreasing in `now_seconds` for a fixed schedule. Never panics:
    /// the full-vest check runs before the linear interpolation, so a zero
    /// `vesting_seconds` never reaches the division.
    pub fn vested_amount(&self, now_seconds: u64) -> BigUint {
        if self.total_amount.is_zero() || self.tge_timestamp == 0 || now_seconds == 0 {
            return BigUint::zero();
        }
        if now_seconds < self.tge_timestamp {
            return BigUint::zero();
        }
        let elapsed = now_seconds - self.tge_timestamp;

        let tge_amount = &self.total_amount * self.tge_percentage_bps / BPS_DENOMINATOR;
        if elapsed < self.cliff_seconds {
            return tge_amount;
        }

        let post_cliff = elapsed - self.cliff_seconds;
        if post_cliff >= self.vesting_seconds {
            return self.total_amount.clone();
        }

        let remaining = &self.total_amount - &tge_amount;
        tge_amount + remaining * post_cliff / self.vesting_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    fn sample_schedule() -> VestingSchedule {
        VestingSchedule {
            total_amount: big(1_000_000),
            tge_percentage_bps: 1000,
            cliff_seconds: 0,
            vesting_seconds: 1000,
            tge_timestamp: 10_000,
        }
    }

    #[test]
    fn worked_example() {
        // 10% TGE of 1_000_000 is 100_000; 500 of 1000 linear seconds vests
        // half of the remaining 900_000.
        assert_eq!(sample_schedule().vested_amount(10_500), big(550_000));
    }

    #[test]
    fn nothing_before_tge() {
        let schedule = sample_schedule();
        assert_eq!(schedule.vested_amount(9_999), big(0));
        assert_eq!(schedule.vested_amount(1), big(0));
    }

    #[test]
    fn tge_slice_at_tge() {
        assert_eq!(sample_schedule().vested_amount(10_000), big(100_000));
    }

    #[test]
    fn fully_vested_at_end() {
        let schedule = sample_schedule();
        let end = schedule.tge_timestamp + schedule.cliff_seconds + schedule.vesting_seconds;
        assert_eq!(schedule.vested_amount(end), big(1_000_000));
        assert_eq!(schedule.vested_amount(end + 1_000_000), big(1_000_000));
    }

    #[test]
    fn cliff_holds_the_tge_slice() {
        let schedule = VestingSchedule {
            total_amount: big(1_000_000),
            tge_percentage_bps: 1000,
            cliff_seconds: 100,
            vesting_seconds: 1000,
            tge_timestamp: 10_000,
        };
        assert_eq!(schedule.vested_amount(10_050), big(100_000));
        assert_eq!(schedule.vested_amount(10_099), big(100_000));
        // The first post-cliff second starts the linear tail.
        assert_eq!(schedule.vested_amount(10_100), big(100_000));
        assert_eq!(schedule.vested_amount(10_101), big(100_900));
    }

    #[test]
    fn cliff_only_schedule_never_divides_by_zero() {
        let schedule = VestingSchedule {
            total_amount: big(1_000_000),
            tge_percentage_bps: 1000,
            cliff_seconds: 100,
            vesting_seconds: 0,
            tge_timestamp: 10_000,
        };
        assert_eq!(schedule.vested_amount(10_050), big(100_000));
        assert_eq!(schedule.vested_amount(10_100), big(1_000_000));
    }

    #[test]
    fn zero_inputs_vest_nothing() {
        let mut schedule = sample_schedule();
        assert_eq!(schedule.vested_amount(0), big(0));
        schedule.tge_timestamp = 0;
        assert_eq!(schedule.vested_amount(10_500), big(0));
        let mut schedule = sample_schedule();
        schedule.total_amount = big(0);
        assert_eq!(schedule.vested_amount(10_500), big(0));
    }

    #[test]
    fn monotone_in_time() {
        let schedule = VestingSchedule {
            total_amount: big(999_999_999),
            tge_percentage_bps: 333,
            cliff_seconds: 77,
            vesting_seconds: 1234,
            tge_timestamp: 5_000,
        };
        let mut prev = big(0);
        for now in 4_900..7_000 {
            let next = schedule.vested_amount(now);
            assert!(next >= prev, "decreased at now={now}");
            prev = next;
        }
        assert_eq!(prev, schedule.total_amount);
    }

    #[test]
    fn full_bps_vests_everything_at_tge() {
        let mut schedule = sample_schedule();
        schedule.tge_percentage_bps = 10_000;
        assert_eq!(schedule.vested_amount(10_000), big(1_000_000));
    }

    #[test]
    fn interpolation_truncates_toward_zero() {
        let schedule = VestingSchedule {
            total_amount: big(10),
            tge_percentage_bps: 0,
            cliff_seconds: 0,
            vesting_seconds: 3,
            tge_timestamp: 100,
        };
        assert_eq!(schedule.vested_amount(101), big(3)); // 10/3 = 3.33..
        assert_eq!(schedule.vested_amount(102), big(6)); // 20/3 = 6.66..
        assert_eq!(schedule.vested_amount(103), big(10));
    }
}
