use anchor_lang::prelude::*;
use crate::{contexts::VerifyAndClaim, state::LeafClaimed};

/// Verifies `(address, amount)` against the stored root and marks the leaf
/// claimed. `address` must sign. Returns the authorized amount; moving tokens
/// is left to the caller.
pub fn handler(
    ctx: Context<VerifyAndClaim>,
    address: Pubkey,
    amount: u64,
    proof: Vec<[u8; 32]>,
) -> Result<u64> {
    let clock = Clock::get()?;
    let claimant = ctx.accounts.claimant.key();
    let merkle_tree = &mut ctx.accounts.merkle_tree;
    let claim_status = &mut ctx.accounts.claim_status;

    let authorized = merkle_tree.verify_and_claim(
        claim_status,
        &claimant,
        address,
        amount,
        &proof,
        clock.unix_timestamp,
        ctx.bumps.claim_status,
    )?;
    msg!("✓ Proof verified ({} siblings)", proof.len());

    emit!(LeafClaimed {
        leaf: claim_status.leaf,
        claimant: address,
        amount: authorized,
        timestamp: clock.unix_timestamp,
    });

    msg!("✅ Leaf claimed for {}: {}", address, authorized);

    Ok(authorized)
}
