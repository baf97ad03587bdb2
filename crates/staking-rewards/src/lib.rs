//! Live staking reward accrual math.
//!
//! Pure functions over point-in-time chain state and wall-clock time.
//! All value arithmetic is done with [`BigUint`] so that 256-bit magnitudes
//! never overflow; floating point is never involved.

use num::{BigUint, CheckedSub, Zero};

/// A user's stake position, as read from the staking contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakeSnapshot {
    /// The amount of tokens the user has staked.
    pub staked_amount: BigUint,
    /// The accumulator checkpoint taken at the user's last stake/claim.
    pub reward_debt: BigUint,
    /// The reward already credited to the user by the contract.
    pub reward_earned: BigUint,
    /// When the user staked, unix seconds.
    pub staking_timestamp: u64,
}

/// The pool-wide state, as read from the staking contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolState {
    /// The total amount staked across all users.
    pub total_staked: BigUint,
    /// Reward emission per second.
    pub reward_per_second: BigUint,
    /// When the accumulator was last updated on-chain, unix seconds.
    pub last_reward_timestamp: u64,
    /// The monotonically increasing per-unit-staked reward index.
    pub accumulated_reward_per_unit: BigUint,
    /// The fixed-point scale of the accumulator.
    pub decimal_precision: BigUint,
}

/// Compute the user's total pending reward at `now_seconds`: the reward
/// already earned plus the share accrued since the pool's last on-chain
/// checkpoint.
///
/// A zero `decimal_precision` means rewards are not configured, and
/// the result is defined to be zero.
pub fn pending_reward(stake: &StakeSnapshot, pool: &PoolState, now_seconds: u64) -> BigUint {
    if pool.decimal_precision.is_zero() {
        return BigUint::zero();
    }
    if stake.staked_amount.is_zero() {
        return stake.reward_earned.clone();
    }

    // Project the accumulator forward to `now_seconds`.
    let mut live_accumulated = pool.accumulated_reward_per_unit.clone();
    if !pool.total_staked.is_zero()
        && !pool.reward_per_second.is_zero()
        && now_seconds > pool.last_reward_timestamp
    {
        let elapsed = BigUint::from(now_seconds - pool.last_reward_timestamp);
        live_accumulated +=
            elapsed * &pool.reward_per_second * &pool.decimal_precision / &pool.total_staked;
    }

    // The accumulator is monotone, but a stale snapshot can leave the debt
    // ahead of the projection; clamp at zero instead of underflowing.
    let delta = live_accumulated
        .checked_sub(&stake.reward_debt)
        .unwrap_or_else(BigUint::zero);

    let accrued = &stake.staked_amount * delta / &pool.decimal_precision;
    &stake.reward_earned + accrued
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    fn sample_pool() -> PoolState {
        PoolState {
            total_staked: big(1000),
            reward_per_second: big(5),
            last_reward_timestamp: 100,
            accumulated_reward_per_unit: big(0),
            decimal_precision: big(1_000_000_000_000),
        }
    }

    fn sample_stake() -> StakeSnapshot {
        StakeSnapshot {
            staked_amount: big(100),
            reward_debt: big(0),
            reward_earned: big(7),
            staking_timestamp: 50,
        }
    }

    #[test]
    fn accrues_over_time() {
        // 60s at 5/s over 1000 staked: the accumulator grows by 3e11,
        // a 100-token stake accrues 30, plus the 7 already earned.
        assert_eq!(
            pending_reward(&sample_stake(), &sample_pool(), 160),
            big(37)
        );
    }

    #[test]
    fn no_time_passed_anchor() {
        // At `last_reward_timestamp` the projected delta is zero, so the
        // result equals the one computed from the stored accumulator alone.
        let stake = sample_stake();
        let pool = sample_pool();
        let at_checkpoint = pending_reward(&stake, &pool, pool.last_reward_timestamp);
        let expected = &stake.reward_earned
            + &stake.staked_amount
                * (&pool.accumulated_reward_per_unit - &stake.reward_debt)
                / &pool.decimal_precision;
        assert_eq!(at_checkpoint, expected);
    }

    #[test]
    fn monotone_in_time() {
        let stake = sample_stake();
        let pool = sample_pool();
        let mut prev = pending_reward(&stake, &pool, pool.last_reward_timestamp);
        for now in pool.last_reward_timestamp..pool.last_reward_timestamp + 200 {
            let next = pending_reward(&stake, &pool, now);
            assert!(next >= prev, "decreased at now={now}");
            prev = next;
        }
    }

    #[test]
    fn zero_stake_passes_earned_through() {
        let stake = StakeSnapshot {
            staked_amount: big(0),
            reward_debt: big(12345),
            reward_earned: big(42),
            staking_timestamp: 0,
        };
        assert_eq!(pending_reward(&stake, &sample_pool(), 1_000_000), big(42));
    }

    #[test]
    fn zero_precision_means_not_configured() {
        let mut pool = sample_pool();
        pool.decimal_precision = big(0);
        assert_eq!(pending_reward(&sample_stake(), &pool, 160), big(0));
    }

    #[test]
    fn debt_ahead_of_accumulator_clamps_to_zero() {
        let mut stake = sample_stake();
        stake.reward_debt = big(u64::MAX);
        assert_eq!(
            pending_reward(&stake, &sample_pool(), 160),
            stake.reward_earned
        );
    }

    #[test]
    fn empty_pool_does_not_project() {
        let mut pool = sample_pool();
        pool.total_staked = big(0);
        let stake = sample_stake();
        // No projection; only the stored accumulator (zero here) applies.
        assert_eq!(pending_reward(&stake, &pool, 1_000_000), stake.reward_earned);
    }

    #[test]
    fn division_truncates() {
        // 7s * 3/s * 100 precision / 1000 staked = 2 (2.1 truncated) per unit,
        // 10 staked * 2 / 100 = 0 (0.2 truncated).
        let pool = PoolState {
            total_staked: big(1000),
            reward_per_second: big(3),
            last_reward_timestamp: 0,
            accumulated_reward_per_unit: big(0),
            decimal_precision: big(100),
        };
        let stake = StakeSnapshot {
            staked_amount: big(10),
            reward_debt: big(0),
            reward_earned: big(0),
            staking_timestamp: 0,
        };
        assert_eq!(pending_reward(&stake, &pool, 7), big(0));
    }
}
