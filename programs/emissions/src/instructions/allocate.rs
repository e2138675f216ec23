use anchor_lang::prelude::*;
use crate::{contexts::Allocate, state::PoolsFunded};

/// Splits `total_amount` of vault tokens across the pools. Only tokens already
/// sitting in the vault and not yet assigned to a pool can be allocated.
pub fn handler(ctx: Context<Allocate>, total_amount: u64) -> Result<()> {
    let vault_balance = ctx.accounts.vault.amount;
    let pool_allocator = &mut ctx.accounts.pool_allocator;

    let shares = pool_allocator.allocate(total_amount, vault_balance)?;

    emit!(PoolsFunded {
        total_amount,
        shares,
        outstanding: pool_allocator.outstanding,
    });

    msg!("📊 Allocated {} across pools", total_amount);
    for (pool, share) in pool_allocator.pools.iter().zip(shares.iter()) {
        msg!("   {:?}: +{} (balance {})", pool.kind, share, pool.balance);
    }

    Ok(())
}
