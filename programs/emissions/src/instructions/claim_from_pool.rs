use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::{
    constants::POOL_ALLOCATOR_SEED,
    contexts::ClaimFromPool,
    state::{PoolAllocator, PoolClaimed, PoolKind},
};

pub fn handler(ctx: Context<ClaimFromPool>, pool: PoolKind, amount: u64) -> Result<()> {
    let remaining = ctx.accounts.pool_allocator.claim(pool, amount)?;

    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.vault,
        &ctx.accounts.recipient,
        &ctx.accounts.pool_allocator,
        amount,
    )?;

    emit!(PoolClaimed {
        pool,
        recipient: ctx.accounts.recipient.key(),
        amount,
        remaining,
    });

    msg!("💸 {:?} paid {} (remaining {})", pool, amount, remaining);

    Ok(())
}

/// Moves `amount` out of the pool vault, signed by the allocator PDA.
pub(crate) fn transfer_from_vault<'info>(
    token_program: &Program<'info, Token>,
    vault: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    pool_allocator: &Account<'info, PoolAllocator>,
    amount: u64,
) -> Result<()> {
    let bump = [pool_allocator.bump];
    let seeds: &[&[u8]] = &[POOL_ALLOCATOR_SEED, &bump];
    let signer = &[seeds];

    let cpi_accounts = Transfer {
        from: vault.to_account_info(),
        to: to.to_account_info(),
        authority: pool_allocator.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(token_program.to_account_info(), cpi_accounts, signer);
    token::transfer(cpi_ctx, amount)
}
