use anchor_lang::prelude::*;
use crate::{
    constants::DEFAULT_LOCK_TIERS,
    contexts::InitializeStaking,
    state::{LockTier, StakingInitialized},
};

/// An empty `lock_tiers` selects the default multiplier table.
pub fn handler(
    ctx: Context<InitializeStaking>,
    trading_fee_pool: Pubkey,
    lock_tiers: Vec<LockTier>,
) -> Result<()> {
    let tiers: &[LockTier] = if lock_tiers.is_empty() {
        &DEFAULT_LOCK_TIERS
    } else {
        &lock_tiers
    };
    let staking_ledger = &mut ctx.accounts.staking_ledger;

    staking_ledger.initialize(
        ctx.accounts.admin.key(),
        trading_fee_pool,
        ctx.accounts.custody.key(),
        ctx.accounts.mint.key(),
        tiers,
        ctx.bumps.staking_ledger,
    )?;

    emit!(StakingInitialized {
        admin: staking_ledger.admin,
        trading_fee_pool,
        custody: staking_ledger.custody,
    });

    msg!("✅ Staking ledger initialized!");
    msg!("   Custody: {}", staking_ledger.custody);
    for tier in staking_ledger.tiers() {
        msg!("   {} months -> {} bps", tier.months, tier.multiplier_bps);
    }

    Ok(())
}
