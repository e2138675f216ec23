use anchor_lang::prelude::*;
use crate::{contexts::InitializeEmissions, state::EmissionsInitialized};

pub fn handler(
    ctx: Context<InitializeEmissions>,
    initial_emissions: u64,
    decay_factor: u64,
) -> Result<()> {
    let emission_state = &mut ctx.accounts.emission_state;

    emission_state.initialize(
        ctx.accounts.authority.key(),
        ctx.accounts.mint.key(),
        initial_emissions,
        decay_factor,
        ctx.bumps.emission_state,
    )?;

    emit!(EmissionsInitialized {
        authority: emission_state.authority,
        mint: emission_state.mint,
        initial_emissions,
        decay_factor,
    });

    msg!("✅ Emission schedule initialized!");
    msg!("   Initial emissions: {}", initial_emissions);
    msg!("   Decay factor: {} / 10^10", decay_factor);

    Ok(())
}
