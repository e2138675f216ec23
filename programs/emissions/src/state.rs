use anchor_lang::prelude::*;

use crate::{
    constants::{DECAY_SCALE, MAX_LOCK_PERIOD_MONTHS, MAX_LOCK_TIERS, POOL_COUNT, POOL_WEIGHTS},
    error::EmissionsError,
    math,
    merkle::{self, Hash},
};

// ============================================================================
// EMISSION STATE - Monthly decaying mint schedule
// ============================================================================

#[account]
#[derive(InitSpace, Default)]
pub struct EmissionState {
    /// Mint authority of record; only this signer may advance the schedule
    pub authority: Pubkey,

    /// Token mint emissions are minted from
    pub mint: Pubkey,

    /// Month 0 emissions
    pub initial_emissions: u64,

    /// Monthly decay multiplier, fixed-point over DECAY_SCALE
    pub decay_factor: u64,

    /// Number of periods minted so far
    pub current_month: u32,

    /// Quantity the next mint will emit
    pub current_emissions: u64,

    pub total_minted: u64,

    pub total_burned: u64,

    pub last_mint_timestamp: i64,

    pub initialized: bool,

    pub bump: u8,
}

impl EmissionState {
    pub fn initialize(
        &mut self,
        authority: Pubkey,
        mint: Pubkey,
        initial_emissions: u64,
        decay_factor: u64,
        bump: u8,
    ) -> Result<()> {
        require!(!self.initialized, EmissionsError::AlreadyInitialized);
        require!(initial_emissions > 0, EmissionsError::InvalidAmount);
        require!(
            decay_factor > 0 && decay_factor <= DECAY_SCALE,
            EmissionsError::InvalidDecayFactor
        );

        self.authority = authority;
        self.mint = mint;
        self.initial_emissions = initial_emissions;
        self.decay_factor = decay_factor;
        self.current_month = 0;
        self.current_emissions = initial_emissions;
        self.total_minted = 0;
        self.total_burned = 0;
        self.last_mint_timestamp = 0;
        self.initialized = true;
        self.bump = bump;
        Ok(())
    }

    /// Closes the current period. Returns the quantity to mint for it.
    pub fn advance(&mut self, timestamp: i64) -> Result<u64> {
        require!(self.initialized, EmissionsError::NotInitialized);

        let minted = self.current_emissions;
        let next_emissions = math::decay(minted, self.decay_factor)?;
        let next_month = self
            .current_month
            .checked_add(1)
            .ok_or(EmissionsError::ArithmeticOverflow)?;
        let total_minted = self
            .total_minted
            .checked_add(minted)
            .ok_or(EmissionsError::ArithmeticOverflow)?;

        self.current_month = next_month;
        self.current_emissions = next_emissions;
        self.total_minted = total_minted;
        self.last_mint_timestamp = timestamp;
        Ok(minted)
    }

    /// True only for the recorded authority of an initialized schedule.
    pub fn is_authority(&self, key: &Pubkey) -> bool {
        self.initialized && self.authority == *key
    }

    pub fn record_burn(&mut self, amount: u64) -> Result<()> {
        require!(self.initialized, EmissionsError::NotInitialized);
        require!(amount > 0, EmissionsError::InvalidAmount);
        self.total_burned = self
            .total_burned
            .checked_add(amount)
            .ok_or(EmissionsError::ArithmeticOverflow)?;
        Ok(())
    }
}

// ============================================================================
// MERKLE DISTRIBUTOR - Root of (address, amount) reward leaves
// ============================================================================

#[account]
#[derive(InitSpace, Default)]
pub struct MerkleDistributor {
    pub authority: Pubkey,

    /// Immutable once initialized
    pub merkle_root: [u8; 32],

    pub total_claimed: u64,

    pub claim_count: u64,

    pub initialized: bool,

    pub bump: u8,
}

/// One per leaf hash. Existence with `claimed` set means the leaf was paid.
#[account]
#[derive(InitSpace, Default)]
pub struct ClaimStatus {
    pub leaf: [u8; 32],

    pub claimant: Pubkey,

    pub amount: u64,

    pub claimed: bool,

    pub claimed_at: i64,

    pub bump: u8,
}

impl MerkleDistributor {
    pub fn initialize(&mut self, authority: Pubkey, merkle_root: Hash, bump: u8) -> Result<()> {
        require!(!self.initialized, EmissionsError::AlreadyInitialized);

        self.authority = authority;
        self.merkle_root = merkle_root;
        self.total_claimed = 0;
        self.claim_count = 0;
        self.initialized = true;
        self.bump = bump;
        Ok(())
    }

    /// Checks the claim without mutating anything. Returns the leaf hash.
    pub fn verify_leaf(
        &self,
        status: &ClaimStatus,
        address: &Pubkey,
        amount: u64,
        proof: &[Hash],
    ) -> Result<Hash> {
        require!(self.initialized, EmissionsError::NotInitialized);
        require!(amount > 0, EmissionsError::InvalidAmount);
        require!(!status.claimed, EmissionsError::AlreadyClaimed);

        let leaf = merkle::hash_leaf(address, amount);
        require!(
            merkle::verify(proof, &self.merkle_root, leaf),
            EmissionsError::InvalidProof
        );
        Ok(leaf)
    }

    /// Marks a leaf returned by `verify_leaf` as paid.
    pub fn record_claim(
        &mut self,
        status: &mut ClaimStatus,
        leaf: Hash,
        address: Pubkey,
        amount: u64,
        timestamp: i64,
        bump: u8,
    ) -> Result<()> {
        require!(!status.claimed, EmissionsError::AlreadyClaimed);

        let total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(EmissionsError::ArithmeticOverflow)?;
        let claim_count = self
            .claim_count
            .checked_add(1)
            .ok_or(EmissionsError::ArithmeticOverflow)?;

        self.total_claimed = total_claimed;
        self.claim_count = claim_count;

        status.leaf = leaf;
        status.claimant = address;
        status.amount = amount;
        status.claimed = true;
        status.claimed_at = timestamp;
        status.bump = bump;
        Ok(())
    }

    /// Verifies and records in one step. Returns the authorized amount.
    ///
    /// Only the leaf's own address may mark it claimed without a payout.
    pub fn verify_and_claim(
        &mut self,
        status: &mut ClaimStatus,
        signer: &Pubkey,
        address: Pubkey,
        amount: u64,
        proof: &[Hash],
        timestamp: i64,
        bump: u8,
    ) -> Result<u64> {
        require!(*signer == address, EmissionsError::Unauthorized);
        let leaf = self.verify_leaf(status, &address, amount, proof)?;
        self.record_claim(status, leaf, address, amount, timestamp, bump)?;
        Ok(amount)
    }
}

// ============================================================================
// POOL ALLOCATOR - Basis-point split of funded emissions
// ============================================================================

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PoolKind {
    #[default]
    GlobalTapping,
    StakingRewards,
    LootRaffle,
    Ecosystem,
}

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pool {
    pub kind: PoolKind,

    /// Claimable right now
    pub balance: u64,

    /// Lifetime allocation; never decreases
    pub total_allocated: u64,
}

#[account]
#[derive(InitSpace, Default)]
pub struct PoolAllocator {
    pub admin: Pubkey,

    pub mint: Pubkey,

    /// Token account (PDA) holding every pool's tokens
    pub vault: Pubkey,

    /// Sum of all pool balances; the vault must always cover it
    pub outstanding: u64,

    /// Ordered as POOL_WEIGHTS
    pub pools: [Pool; POOL_COUNT],

    pub initialized: bool,

    pub bump: u8,

    pub vault_bump: u8,
}

impl PoolAllocator {
    pub fn initialize(
        &mut self,
        admin: Pubkey,
        mint: Pubkey,
        vault: Pubkey,
        bump: u8,
        vault_bump: u8,
    ) -> Result<()> {
        require!(!self.initialized, EmissionsError::AlreadyInitialized);

        self.admin = admin;
        self.mint = mint;
        self.vault = vault;
        self.outstanding = 0;
        for (pool, (kind, _)) in self.pools.iter_mut().zip(POOL_WEIGHTS.iter()) {
            *pool = Pool {
                kind: *kind,
                balance: 0,
                total_allocated: 0,
            };
        }
        self.initialized = true;
        self.bump = bump;
        self.vault_bump = vault_bump;
        Ok(())
    }

    pub fn pool(&self, kind: PoolKind) -> Result<&Pool> {
        self.pools
            .iter()
            .find(|pool| pool.kind == kind)
            .ok_or_else(|| error!(EmissionsError::NotInitialized))
    }

    /// Credits `total_amount` across the pools. `vault_balance` is the token
    /// amount currently held by the vault; it must already cover every
    /// outstanding balance plus this allocation.
    pub fn allocate(&mut self, total_amount: u64, vault_balance: u64) -> Result<[u64; POOL_COUNT]> {
        require!(self.initialized, EmissionsError::NotInitialized);
        require!(total_amount > 0, EmissionsError::InvalidAmount);

        let required = self
            .outstanding
            .checked_add(total_amount)
            .ok_or(EmissionsError::ArithmeticOverflow)?;
        require!(vault_balance >= required, EmissionsError::FundingIncomplete);

        let shares = math::split_by_weights(total_amount)?;
        let mut pools = self.pools;
        for (pool, share) in pools.iter_mut().zip(shares.iter()) {
            pool.balance = pool
                .balance
                .checked_add(*share)
                .ok_or(EmissionsError::ArithmeticOverflow)?;
            pool.total_allocated = pool
                .total_allocated
                .checked_add(*share)
                .ok_or(EmissionsError::ArithmeticOverflow)?;
        }

        self.pools = pools;
        self.outstanding = required;
        Ok(shares)
    }

    pub fn ensure_claimable(&self, kind: PoolKind, amount: u64) -> Result<()> {
        require!(self.initialized, EmissionsError::NotInitialized);
        require!(amount > 0, EmissionsError::InvalidAmount);
        require!(
            amount <= self.pool(kind)?.balance,
            EmissionsError::InsufficientPoolBalance
        );
        Ok(())
    }

    /// Debits a pool. Returns the pool's remaining balance.
    pub fn claim(&mut self, kind: PoolKind, amount: u64) -> Result<u64> {
        self.ensure_claimable(kind, amount)?;

        let outstanding = self
            .outstanding
            .checked_sub(amount)
            .ok_or(EmissionsError::ArithmeticOverflow)?;
        let pool = self
            .pools
            .iter_mut()
            .find(|pool| pool.kind == kind)
            .ok_or(EmissionsError::NotInitialized)?;
        pool.balance -= amount;
        let remaining = pool.balance;

        self.outstanding = outstanding;
        Ok(remaining)
    }
}

// ============================================================================
// STAKING LEDGER - Aggregate stake and lock-weighted scores
// ============================================================================

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LockTier {
    pub months: u32,

    /// 10_000 = 1.0x
    pub multiplier_bps: u32,
}

#[account]
#[derive(InitSpace, Default)]
pub struct StakingLedger {
    pub admin: Pubkey,

    /// Pool that receives trading fees
    pub trading_fee_pool: Pubkey,

    /// Admin-owned token account holding staked tokens
    pub custody: Pubkey,

    pub mint: Pubkey,

    /// Sum of every StakeRecord.amount_staked
    pub total_staked: u64,

    pub staker_count: u64,

    pub total_rewards_claimed: u64,

    /// Only the first `tier_count` entries are meaningful
    pub lock_tiers: [LockTier; MAX_LOCK_TIERS],

    pub tier_count: u8,

    pub initialized: bool,

    pub bump: u8,
}

#[account]
#[derive(InitSpace, Default)]
pub struct StakeRecord {
    pub owner: Pubkey,

    pub amount_staked: u64,

    pub lock_period_months: u32,

    /// amount_staked weighted by the lock multiplier
    pub staking_score: u64,

    pub staked_at: i64,

    pub bump: u8,
}

impl StakingLedger {
    pub fn initialize(
        &mut self,
        admin: Pubkey,
        trading_fee_pool: Pubkey,
        custody: Pubkey,
        mint: Pubkey,
        tiers: &[LockTier],
        bump: u8,
    ) -> Result<()> {
        require!(!self.initialized, EmissionsError::AlreadyInitialized);
        math::validate_lock_tiers(tiers, MAX_LOCK_TIERS)?;

        self.admin = admin;
        self.trading_fee_pool = trading_fee_pool;
        self.custody = custody;
        self.mint = mint;
        self.total_staked = 0;
        self.staker_count = 0;
        self.total_rewards_claimed = 0;
        self.lock_tiers = [LockTier::default(); MAX_LOCK_TIERS];
        self.lock_tiers[..tiers.len()].copy_from_slice(tiers);
        self.tier_count = tiers.len() as u8;
        self.initialized = true;
        self.bump = bump;
        Ok(())
    }

    pub fn tiers(&self) -> &[LockTier] {
        &self.lock_tiers[..self.tier_count as usize]
    }

    pub fn staking_score(&self, amount: u64, lock_period_months: u32) -> Result<u64> {
        require!(
            lock_period_months <= MAX_LOCK_PERIOD_MONTHS,
            EmissionsError::InvalidLockPeriod
        );
        let multiplier = math::multiplier_bps(self.tiers(), lock_period_months)?;
        math::staking_score(amount, multiplier)
    }

    /// Opens `record` for `owner`. Returns the staking score.
    pub fn stake(
        &mut self,
        record: &mut StakeRecord,
        owner: Pubkey,
        amount: u64,
        lock_period_months: u32,
        timestamp: i64,
        bump: u8,
    ) -> Result<u64> {
        require!(self.initialized, EmissionsError::NotInitialized);
        require!(record.owner == Pubkey::default(), EmissionsError::AlreadyStaked);
        require!(amount > 0, EmissionsError::InvalidAmount);

        let score = self.staking_score(amount, lock_period_months)?;
        let total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(EmissionsError::ArithmeticOverflow)?;
        let staker_count = self
            .staker_count
            .checked_add(1)
            .ok_or(EmissionsError::ArithmeticOverflow)?;

        self.total_staked = total_staked;
        self.staker_count = staker_count;

        record.owner = owner;
        record.amount_staked = amount;
        record.lock_period_months = lock_period_months;
        record.staking_score = score;
        record.staked_at = timestamp;
        record.bump = bump;
        Ok(score)
    }
}

// ============================================================================
// REWARD CLAIM - Merkle-authorized payout from a pool
// ============================================================================

/// Outcome of a successful `claim_reward`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewardClaim {
    pub leaf: Hash,

    /// Pool balance after the debit
    pub remaining: u64,
}

/// Verifies a reward leaf and debits `pool` for it. Every check (proof,
/// claimed flag, pool balance) passes before any account is written, so a
/// failed claim leaves all four accounts as they were. The caller moves the
/// tokens afterwards.
#[allow(clippy::too_many_arguments)]
pub fn claim_reward(
    distributor: &mut MerkleDistributor,
    status: &mut ClaimStatus,
    allocator: &mut PoolAllocator,
    ledger: &mut StakingLedger,
    address: Pubkey,
    amount: u64,
    pool: PoolKind,
    proof: &[Hash],
    timestamp: i64,
    bump: u8,
) -> Result<RewardClaim> {
    // Checks
    require!(ledger.initialized, EmissionsError::NotInitialized);
    let leaf = distributor.verify_leaf(status, &address, amount, proof)?;
    allocator.ensure_claimable(pool, amount)?;
    let total_rewards_claimed = ledger
        .total_rewards_claimed
        .checked_add(amount)
        .ok_or(EmissionsError::ArithmeticOverflow)?;

    // Effects
    distributor.record_claim(status, leaf, address, amount, timestamp, bump)?;
    let remaining = allocator.claim(pool, amount)?;
    ledger.total_rewards_claimed = total_rewards_claimed;

    Ok(RewardClaim { leaf, remaining })
}

// ============================================================================
// EVENTS - Emitted for off-chain indexing
// ============================================================================

#[event]
pub struct EmissionsInitialized {
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub initial_emissions: u64,
    pub decay_factor: u64,
}

#[event]
pub struct EmissionsMinted {
    pub month: u32,
    pub amount: u64,
    pub next_emissions: u64,
    pub total_minted: u64,
    pub timestamp: i64,
}

#[event]
pub struct TokensBurned {
    pub owner: Pubkey,
    pub amount: u64,
    pub total_burned: u64,
}

#[event]
pub struct MerkleRootInitialized {
    pub merkle_root: [u8; 32],
}

#[event]
pub struct LeafClaimed {
    pub leaf: [u8; 32],
    pub claimant: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct PoolsInitialized {
    pub admin: Pubkey,
    pub vault: Pubkey,
}

#[event]
pub struct PoolsFunded {
    pub total_amount: u64,
    pub shares: [u64; POOL_COUNT],
    pub outstanding: u64,
}

#[event]
pub struct PoolClaimed {
    pub pool: PoolKind,
    pub recipient: Pubkey,
    pub amount: u64,
    pub remaining: u64,
}

#[event]
pub struct StakingInitialized {
    pub admin: Pubkey,
    pub trading_fee_pool: Pubkey,
    pub custody: Pubkey,
}

#[event]
pub struct Staked {
    pub owner: Pubkey,
    pub amount: u64,
    pub lock_period_months: u32,
    pub staking_score: u64,
    pub total_staked: u64,
}
