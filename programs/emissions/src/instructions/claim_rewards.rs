use anchor_lang::prelude::*;
use crate::{
    contexts::ClaimRewards,
    instructions::claim_from_pool::transfer_from_vault,
    state::{claim_reward, LeafClaimed, PoolClaimed, PoolKind},
};

/// Pays a Merkle-authorized reward out of `pool` to the token account of
/// `address`. Every check runs before the first mutation.
pub fn handler(
    mut ctx: Context<ClaimRewards>,
    amount: u64,
    pool: PoolKind,
    address: Pubkey,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let clock = Clock::get()?;

    // =========================================================================
    // 1. Checks + 2. Effects
    // =========================================================================
    let accounts = &mut ctx.accounts;
    let claim = claim_reward(
        &mut accounts.merkle_tree,
        &mut accounts.claim_status,
        &mut accounts.pool_allocator,
        &mut accounts.staking_ledger,
        address,
        amount,
        pool,
        &proof,
        clock.unix_timestamp,
        ctx.bumps.claim_status,
    )?;
    msg!("✓ Proof verified, {:?} debited {}", pool, amount);

    // =========================================================================
    // 3. Interactions
    // =========================================================================
    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.vault,
        &ctx.accounts.user_token_account,
        &ctx.accounts.pool_allocator,
        amount,
    )?;

    emit!(LeafClaimed {
        leaf: claim.leaf,
        claimant: address,
        amount,
        timestamp: clock.unix_timestamp,
    });
    emit!(PoolClaimed {
        pool,
        recipient: ctx.accounts.user_token_account.key(),
        amount,
        remaining: claim.remaining,
    });

    msg!("✅ Reward claimed for {}: {} from {:?}", address, amount, pool);

    Ok(())
}
