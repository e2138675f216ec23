use anchor_lang::prelude::*;

use crate::{
    constants::{
        BPS_DENOMINATOR, DECAY_SCALE, DEFAULT_POOL, MAX_LOCK_PERIOD_MONTHS, POOL_COUNT,
        POOL_WEIGHTS,
    },
    error::EmissionsError,
    state::LockTier,
};

/// One step of the emission recurrence: `floor(amount * factor / DECAY_SCALE)`.
///
/// Successive periods must be derived from the previous period's truncated
/// value, never from `initial * factor^n`.
pub fn decay(amount: u64, decay_factor: u64) -> Result<u64> {
    let scaled = (amount as u128)
        .checked_mul(decay_factor as u128)
        .ok_or(EmissionsError::ArithmeticOverflow)?
        / DECAY_SCALE as u128;
    u64::try_from(scaled).map_err(|_| error!(EmissionsError::ArithmeticOverflow))
}

/// Splits `total` across the pool table in order. The remainder left by
/// integer division is credited to `DEFAULT_POOL`, so the shares always sum
/// to `total`.
pub fn split_by_weights(total: u64) -> Result<[u64; POOL_COUNT]> {
    let mut shares = [0u64; POOL_COUNT];
    let mut assigned: u64 = 0;
    let mut default_index = 0;

    for (i, (kind, weight)) in POOL_WEIGHTS.iter().enumerate() {
        let share = (total as u128)
            .checked_mul(*weight as u128)
            .ok_or(EmissionsError::ArithmeticOverflow)?
            / BPS_DENOMINATOR as u128;
        // share <= total since weight <= BPS_DENOMINATOR
        shares[i] = share as u64;
        assigned = assigned
            .checked_add(shares[i])
            .ok_or(EmissionsError::ArithmeticOverflow)?;
        if *kind == DEFAULT_POOL {
            default_index = i;
        }
    }

    let remainder = total
        .checked_sub(assigned)
        .ok_or(EmissionsError::ArithmeticOverflow)?;
    shares[default_index] = shares[default_index]
        .checked_add(remainder)
        .ok_or(EmissionsError::ArithmeticOverflow)?;

    Ok(shares)
}

/// Multiplier (basis points) of the highest tier whose `months` does not
/// exceed `lock_period_months`.
pub fn multiplier_bps(tiers: &[LockTier], lock_period_months: u32) -> Result<u32> {
    tiers
        .iter()
        .rev()
        .find(|tier| tier.months <= lock_period_months)
        .map(|tier| tier.multiplier_bps)
        .ok_or_else(|| error!(EmissionsError::InvalidLockPeriod))
}

pub fn staking_score(amount: u64, multiplier_bps: u32) -> Result<u64> {
    let score = (amount as u128)
        .checked_mul(multiplier_bps as u128)
        .ok_or(EmissionsError::ArithmeticOverflow)?
        / BPS_DENOMINATOR as u128;
    u64::try_from(score).map_err(|_| error!(EmissionsError::ArithmeticOverflow))
}

/// Tiers must be non-empty, strictly ascending in months and nondecreasing in
/// multiplier, with a non-zero first multiplier. Every tier must be reachable
/// by a lock of at most `MAX_LOCK_PERIOD_MONTHS`.
pub fn validate_lock_tiers(tiers: &[LockTier], max_tiers: usize) -> Result<()> {
    require!(
        !tiers.is_empty() && tiers.len() <= max_tiers,
        EmissionsError::InvalidLockTiers
    );
    require!(
        tiers[0].months > 0 && tiers[0].multiplier_bps > 0,
        EmissionsError::InvalidLockTiers
    );
    for pair in tiers.windows(2) {
        require!(
            pair[0].months < pair[1].months && pair[0].multiplier_bps <= pair[1].multiplier_bps,
            EmissionsError::InvalidLockTiers
        );
    }
    require!(
        tiers.iter().all(|tier| tier.months <= MAX_LOCK_PERIOD_MONTHS),
        EmissionsError::InvalidLockTiers
    );
    Ok(())
}
