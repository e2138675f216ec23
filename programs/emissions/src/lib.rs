pub mod constants;
pub mod contexts;
pub mod error;
pub mod instructions;
pub mod math;
pub mod merkle;
pub mod state;

use anchor_lang::prelude::*;

pub use contexts::*;
pub use error::*;
pub use state::*;

declare_id!("73TfMQcsW7C7r8S7Hxby98Fp75iJE8RkaNy2NtkJ2xZP");

/// Emissions: monthly token emissions and reward distribution
///
/// - Emission schedule: one mint per month, each period the previous one
///   decayed by a fixed-point factor and floored
/// - Merkle claims: (address, amount) leaves paid at most once
/// - Pool allocator: funded emissions split across named pools by basis points
/// - Staking ledger: custody of staked tokens with lock-weighted scores
#[program]
pub mod emissions {
    use super::*;

    /// Initialize the emission schedule (signer must be the mint authority)
    pub fn initialize_emissions(
        ctx: Context<InitializeEmissions>,
        initial_emissions: u64,
        decay_factor: u64,
    ) -> Result<()> {
        instructions::initialize_emissions::handler(ctx, initial_emissions, decay_factor)
    }

    /// Mint the current month's emissions and advance the schedule
    pub fn advance_and_mint(ctx: Context<AdvanceAndMint>) -> Result<()> {
        instructions::advance_and_mint::handler(ctx)
    }

    /// Burn tokens from the signer's account and record the burn
    pub fn burn_tokens(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
        instructions::burn_tokens::handler(ctx, amount)
    }

    /// Store the reward Merkle root (once)
    pub fn initialize_distributor(
        ctx: Context<InitializeDistributor>,
        merkle_root: [u8; 32],
    ) -> Result<()> {
        instructions::initialize_distributor::handler(ctx, merkle_root)
    }

    /// Verify a reward leaf and mark it claimed. Returns the authorized amount.
    pub fn verify_and_claim(
        ctx: Context<VerifyAndClaim>,
        address: Pubkey,
        amount: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<u64> {
        instructions::verify_and_claim::handler(ctx, address, amount, proof)
    }

    /// Create the pool allocator and its token vault (emission authority only)
    pub fn initialize_pools(ctx: Context<InitializePools>) -> Result<()> {
        instructions::initialize_pools::handler(ctx)
    }

    /// Split funded vault tokens across the pools (admin-only)
    pub fn allocate(ctx: Context<Allocate>, total_amount: u64) -> Result<()> {
        instructions::allocate::handler(ctx, total_amount)
    }

    /// Transfer out of a pool to any recipient (admin-only)
    pub fn claim_from_pool(ctx: Context<ClaimFromPool>, pool: PoolKind, amount: u64) -> Result<()> {
        instructions::claim_from_pool::handler(ctx, pool, amount)
    }

    /// Initialize the staking ledger
    pub fn initialize_staking(
        ctx: Context<InitializeStaking>,
        trading_fee_pool: Pubkey,
        lock_tiers: Vec<LockTier>,
    ) -> Result<()> {
        instructions::initialize_staking::handler(ctx, trading_fee_pool, lock_tiers)
    }

    /// Stake tokens for a lock period (one stake per user)
    pub fn stake(ctx: Context<Stake>, amount: u64, lock_period_months: u32) -> Result<()> {
        instructions::stake::handler(ctx, amount, lock_period_months)
    }

    /// Claim a Merkle-authorized reward from a pool
    pub fn claim_rewards(
        ctx: Context<ClaimRewards>,
        amount: u64,
        pool: PoolKind,
        address: Pubkey,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::claim_rewards::handler(ctx, amount, pool, address, proof)
    }
}
