use crate::state::{LockTier, PoolKind};

// ============================================================================
// SEEDS FOR PDA DERIVATION
// ============================================================================

pub const EMISSION_STATE_SEED: &[u8] = b"emissions_account";

pub const MERKLE_TREE_SEED: &[u8] = b"merkle_tree";

pub const CLAIM_STATUS_SEED: &[u8] = b"claim_status";

pub const POOL_ALLOCATOR_SEED: &[u8] = b"pool_allocator";

pub const POOL_VAULT_SEED: &[u8] = b"pool_vault";

pub const STAKING_LEDGER_SEED: &[u8] = b"staking_ledger";

pub const STAKE_RECORD_SEED: &[u8] = b"stake_record";

// ============================================================================
// EMISSION SCHEDULE
// ============================================================================

/// Denominator of the fixed-point decay factor (10 decimal places)
pub const DECAY_SCALE: u64 = 10_000_000_000;

/// First month's emissions (base units)
pub const DEFAULT_INITIAL_EMISSIONS: u64 = 3_000_000_000;

/// 0.8705505633 monthly decay
pub const DEFAULT_DECAY_FACTOR: u64 = 8_705_505_633;

// ============================================================================
// POOL ALLOCATION
// ============================================================================

pub const BPS_DENOMINATOR: u64 = 10_000;

pub const POOL_COUNT: usize = 4;

/// Ordered pool table. Weights are basis points and must sum to 10000.
pub const POOL_WEIGHTS: [(PoolKind, u16); POOL_COUNT] = [
    (PoolKind::GlobalTapping, 5_000),
    (PoolKind::StakingRewards, 3_000),
    (PoolKind::LootRaffle, 1_500),
    (PoolKind::Ecosystem, 500),
];

/// Receives the integer-division remainder of every allocation
pub const DEFAULT_POOL: PoolKind = PoolKind::GlobalTapping;

const _: () = {
    let mut sum = 0u64;
    let mut i = 0;
    while i < POOL_COUNT {
        sum += POOL_WEIGHTS[i].1 as u64;
        i += 1;
    }
    assert!(sum == BPS_DENOMINATOR);
};

// ============================================================================
// STAKING
// ============================================================================

pub const MAX_LOCK_TIERS: usize = 8;

pub const MAX_LOCK_PERIOD_MONTHS: u32 = 48;

/// 1 month 1.0x, 3 months 1.4x, 6 months 2.0x, 12 months 3.0x
pub const DEFAULT_LOCK_TIERS: [LockTier; 4] = [
    LockTier { months: 1, multiplier_bps: 10_000 },
    LockTier { months: 3, multiplier_bps: 14_000 },
    LockTier { months: 6, multiplier_bps: 20_000 },
    LockTier { months: 12, multiplier_bps: 30_000 },
];
