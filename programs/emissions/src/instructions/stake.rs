use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};
use crate::{contexts::Stake, state::Staked};

pub fn handler(ctx: Context<Stake>, amount: u64, lock_period_months: u32) -> Result<()> {
    let clock = Clock::get()?;
    let owner = ctx.accounts.user.key();
    let staking_ledger = &mut ctx.accounts.staking_ledger;
    let stake_record = &mut ctx.accounts.stake_record;

    let score = staking_ledger.stake(
        stake_record,
        owner,
        amount,
        lock_period_months,
        clock.unix_timestamp,
        ctx.bumps.stake_record,
    )?;
    let total_staked = staking_ledger.total_staked;

    let cpi_accounts = Transfer {
        from: ctx.accounts.user_token_account.to_account_info(),
        to: ctx.accounts.custody.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    emit!(Staked {
        owner,
        amount,
        lock_period_months,
        staking_score: score,
        total_staked,
    });

    msg!("🔒 Staked {} for {} months (score {})", amount, lock_period_months, score);
    msg!("   Total staked: {}", total_staked);

    Ok(())
}
