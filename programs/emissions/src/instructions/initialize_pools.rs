use anchor_lang::prelude::*;
use crate::{contexts::InitializePools, state::PoolsInitialized};

pub fn handler(ctx: Context<InitializePools>) -> Result<()> {
    let pool_allocator = &mut ctx.accounts.pool_allocator;

    pool_allocator.initialize(
        ctx.accounts.admin.key(),
        ctx.accounts.mint.key(),
        ctx.accounts.vault.key(),
        ctx.bumps.pool_allocator,
        ctx.bumps.vault,
    )?;

    emit!(PoolsInitialized {
        admin: pool_allocator.admin,
        vault: pool_allocator.vault,
    });

    msg!("✅ Pools initialized!");
    msg!("   Vault: {}", pool_allocator.vault);
    for pool in pool_allocator.pools.iter() {
        msg!("   Pool: {:?}", pool.kind);
    }

    Ok(())
}
