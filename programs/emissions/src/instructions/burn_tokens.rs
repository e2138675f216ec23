use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn};
use crate::{contexts::BurnTokens, state::TokensBurned};

pub fn handler(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
    ctx.accounts.emission_state.record_burn(amount)?;

    let cpi_accounts = Burn {
        mint: ctx.accounts.mint.to_account_info(),
        from: ctx.accounts.from.to_account_info(),
        authority: ctx.accounts.owner.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::burn(cpi_ctx, amount)?;

    let total_burned = ctx.accounts.emission_state.total_burned;
    emit!(TokensBurned {
        owner: ctx.accounts.owner.key(),
        amount,
        total_burned,
    });

    msg!("🔥 Burned {} (total burned: {})", amount, total_burned);

    Ok(())
}
