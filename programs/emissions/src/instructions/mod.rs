pub mod advance_and_mint;
pub mod allocate;
pub mod burn_tokens;
pub mod claim_from_pool;
pub mod claim_rewards;
pub mod initialize_distributor;
pub mod initialize_emissions;
pub mod initialize_pools;
pub mod initialize_staking;
pub mod stake;
pub mod verify_and_claim;
