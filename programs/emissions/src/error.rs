use anchor_lang::prelude::*;

#[error_code]
pub enum EmissionsError {
    #[msg("Account has already been initialized")]
    AlreadyInitialized,

    #[msg("Account has not been initialized")]
    NotInitialized,

    #[msg("Invalid Merkle proof")]
    InvalidProof,

    #[msg("This leaf has already been claimed")]
    AlreadyClaimed,

    #[msg("Pool balance is too low for this claim")]
    InsufficientPoolBalance,

    #[msg("Signer is not authorized for this operation")]
    Unauthorized,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Decay factor must be in (0, 1]")]
    InvalidDecayFactor,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Vault funding does not cover the requested allocation")]
    FundingIncomplete,

    #[msg("User already has an active stake")]
    AlreadyStaked,

    #[msg("Lock period is outside the supported range")]
    InvalidLockPeriod,

    #[msg("Lock tiers must be ascending in months and nondecreasing in multiplier")]
    InvalidLockTiers,

    #[msg("Token account mint or owner does not match")]
    InvalidTokenAccount,
}
