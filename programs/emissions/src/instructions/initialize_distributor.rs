use anchor_lang::prelude::*;
use crate::{contexts::InitializeDistributor, state::MerkleRootInitialized};

/// Stores the reward root built off-chain. The root cannot be replaced.
pub fn handler(ctx: Context<InitializeDistributor>, merkle_root: [u8; 32]) -> Result<()> {
    ctx.accounts.merkle_tree.initialize(
        ctx.accounts.authority.key(),
        merkle_root,
        ctx.bumps.merkle_tree,
    )?;

    emit!(MerkleRootInitialized { merkle_root });

    msg!("✅ Merkle root initialized: {:?}", merkle_root);

    Ok(())
}
