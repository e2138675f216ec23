use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, error::EmissionsError, merkle, state::*};

// ============================================================================
// EMISSION SCHEDULE
// ============================================================================

/// Create the emission schedule PDA
#[derive(Accounts)]
pub struct InitializeEmissions<'info> {
    /// Becomes the mint authority of record
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + EmissionState::INIT_SPACE,
        seeds = [EMISSION_STATE_SEED],
        bump
    )]
    pub emission_state: Account<'info, EmissionState>,

    #[account(mint::authority = authority)]
    pub mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
}

/// Mint the current period's emissions and advance one month
#[derive(Accounts)]
pub struct AdvanceAndMint<'info> {
    #[account(
        mut,
        seeds = [EMISSION_STATE_SEED],
        bump = emission_state.bump,
        has_one = mint @ EmissionsError::InvalidTokenAccount,
        constraint = emission_state.is_authority(&mint_authority.key()) @ EmissionsError::Unauthorized
    )]
    pub emission_state: Account<'info, EmissionState>,

    #[account(mut)]
    pub mint: Account<'info, Mint>,

    /// Mint target
    #[account(mut, token::mint = mint)]
    pub to: Account<'info, TokenAccount>,

    pub mint_authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Burn tokens held by the signer
#[derive(Accounts)]
pub struct BurnTokens<'info> {
    #[account(
        mut,
        seeds = [EMISSION_STATE_SEED],
        bump = emission_state.bump,
        has_one = mint @ EmissionsError::InvalidTokenAccount
    )]
    pub emission_state: Account<'info, EmissionState>,

    #[account(mut)]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = owner
    )]
    pub from: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

// ============================================================================
// MERKLE CLAIMS
// ============================================================================

/// Store the Merkle root (once)
#[derive(Accounts)]
pub struct InitializeDistributor<'info> {
    /// Must be the emission authority
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [EMISSION_STATE_SEED],
        bump = emission_state.bump,
        constraint = emission_state.is_authority(&authority.key()) @ EmissionsError::Unauthorized
    )]
    pub emission_state: Account<'info, EmissionState>,

    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + MerkleDistributor::INIT_SPACE,
        seeds = [MERKLE_TREE_SEED],
        bump
    )]
    pub merkle_tree: Account<'info, MerkleDistributor>,

    pub system_program: Program<'info, System>,
}

/// Verify a leaf and mark it claimed (no transfer)
#[derive(Accounts)]
#[instruction(address: Pubkey, amount: u64)]
pub struct VerifyAndClaim<'info> {
    /// The leaf's own address
    #[account(
        mut,
        constraint = claimant.key() == address @ EmissionsError::Unauthorized
    )]
    pub claimant: Signer<'info>,

    #[account(
        mut,
        seeds = [MERKLE_TREE_SEED],
        bump = merkle_tree.bump
    )]
    pub merkle_tree: Account<'info, MerkleDistributor>,

    /// Claimed-set entry for this leaf
    #[account(
        init_if_needed,
        payer = claimant,
        space = 8 + ClaimStatus::INIT_SPACE,
        seeds = [CLAIM_STATUS_SEED, &merkle::hash_leaf(&address, amount)],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    pub system_program: Program<'info, System>,
}

// ============================================================================
// POOL ALLOCATION
// ============================================================================

/// Create the pool allocator and its vault
#[derive(Accounts)]
pub struct InitializePools<'info> {
    /// Must be the emission authority
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [EMISSION_STATE_SEED],
        bump = emission_state.bump,
        has_one = mint @ EmissionsError::InvalidTokenAccount,
        constraint = emission_state.is_authority(&admin.key()) @ EmissionsError::Unauthorized
    )]
    pub emission_state: Account<'info, EmissionState>,

    pub mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + PoolAllocator::INIT_SPACE,
        seeds = [POOL_ALLOCATOR_SEED],
        bump
    )]
    pub pool_allocator: Account<'info, PoolAllocator>,

    #[account(
        init_if_needed,
        payer = admin,
        seeds = [POOL_VAULT_SEED],
        bump,
        token::mint = mint,
        token::authority = pool_allocator
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// Split funded vault tokens across the pools
#[derive(Accounts)]
pub struct Allocate<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_ALLOCATOR_SEED],
        bump = pool_allocator.bump,
        has_one = admin @ EmissionsError::Unauthorized,
        has_one = vault @ EmissionsError::InvalidTokenAccount
    )]
    pub pool_allocator: Account<'info, PoolAllocator>,

    pub vault: Account<'info, TokenAccount>,
}

/// Admin transfer out of a pool
#[derive(Accounts)]
pub struct ClaimFromPool<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_ALLOCATOR_SEED],
        bump = pool_allocator.bump,
        has_one = admin @ EmissionsError::Unauthorized,
        has_one = vault @ EmissionsError::InvalidTokenAccount
    )]
    pub pool_allocator: Account<'info, PoolAllocator>,

    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = recipient.mint == pool_allocator.mint @ EmissionsError::InvalidTokenAccount
    )]
    pub recipient: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

// ============================================================================
// STAKING
// ============================================================================

/// Create the staking ledger
#[derive(Accounts)]
pub struct InitializeStaking<'info> {
    /// Must be the emission authority
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [EMISSION_STATE_SEED],
        bump = emission_state.bump,
        has_one = mint @ EmissionsError::InvalidTokenAccount,
        constraint = emission_state.is_authority(&admin.key()) @ EmissionsError::Unauthorized
    )]
    pub emission_state: Account<'info, EmissionState>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + StakingLedger::INIT_SPACE,
        seeds = [STAKING_LEDGER_SEED],
        bump
    )]
    pub staking_ledger: Account<'info, StakingLedger>,

    pub mint: Account<'info, Mint>,

    /// Admin-controlled account that holds staked tokens
    #[account(
        token::mint = mint,
        token::authority = admin
    )]
    pub custody: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
}

/// Lock tokens into custody and open a stake record
#[derive(Accounts)]
pub struct Stake<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [STAKING_LEDGER_SEED],
        bump = staking_ledger.bump,
        has_one = custody @ EmissionsError::InvalidTokenAccount
    )]
    pub staking_ledger: Account<'info, StakingLedger>,

    #[account(
        init_if_needed,
        payer = user,
        space = 8 + StakeRecord::INIT_SPACE,
        seeds = [STAKE_RECORD_SEED, user.key().as_ref()],
        bump
    )]
    pub stake_record: Account<'info, StakeRecord>,

    #[account(
        mut,
        token::mint = staking_ledger.mint,
        token::authority = user
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub custody: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// Merkle-authorized reward payout from a pool
#[derive(Accounts)]
#[instruction(amount: u64, pool: PoolKind, address: Pubkey)]
pub struct ClaimRewards<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [STAKING_LEDGER_SEED],
        bump = staking_ledger.bump
    )]
    pub staking_ledger: Account<'info, StakingLedger>,

    #[account(
        mut,
        seeds = [MERKLE_TREE_SEED],
        bump = merkle_tree.bump
    )]
    pub merkle_tree: Account<'info, MerkleDistributor>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + ClaimStatus::INIT_SPACE,
        seeds = [CLAIM_STATUS_SEED, &merkle::hash_leaf(&address, amount)],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    #[account(
        mut,
        seeds = [POOL_ALLOCATOR_SEED],
        bump = pool_allocator.bump,
        has_one = vault @ EmissionsError::InvalidTokenAccount
    )]
    pub pool_allocator: Account<'info, PoolAllocator>,

    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    /// Must belong to the address in the leaf
    #[account(
        mut,
        constraint = user_token_account.owner == address @ EmissionsError::Unauthorized,
        constraint = user_token_account.mint == pool_allocator.mint @ EmissionsError::InvalidTokenAccount
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
