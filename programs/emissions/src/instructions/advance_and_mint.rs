use anchor_lang::prelude::*;
use anchor_spl::token::{self, MintTo};
use crate::{contexts::AdvanceAndMint, state::EmissionsMinted};

/// Mints the current period's emissions to `to`, then moves the schedule one
/// month forward with the next period derived from this one by floor decay.
pub fn handler(ctx: Context<AdvanceAndMint>) -> Result<()> {
    let clock = Clock::get()?;
    let emission_state = &mut ctx.accounts.emission_state;

    let amount = emission_state.advance(clock.unix_timestamp)?;
    let month = emission_state.current_month;
    let next_emissions = emission_state.current_emissions;
    let total_minted = emission_state.total_minted;

    if amount > 0 {
        let cpi_accounts = MintTo {
            mint: ctx.accounts.mint.to_account_info(),
            to: ctx.accounts.to.to_account_info(),
            authority: ctx.accounts.mint_authority.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
        token::mint_to(cpi_ctx, amount)?;
    }

    emit!(EmissionsMinted {
        month,
        amount,
        next_emissions,
        total_minted,
        timestamp: clock.unix_timestamp,
    });

    msg!("🪙 Minted {} for month {} (next: {})", amount, month, next_emissions);

    Ok(())
}
