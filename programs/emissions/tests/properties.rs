use anchor_lang::prelude::Pubkey;
use proptest::prelude::*;

use emissions::{
    constants::{DECAY_SCALE, DEFAULT_LOCK_TIERS, MAX_LOCK_PERIOD_MONTHS, POOL_COUNT},
    math, merkle,
    state::{
        claim_reward, ClaimStatus, EmissionState, MerkleDistributor, PoolAllocator, PoolKind,
        StakingLedger,
    },
};

fn pool_kind() -> impl Strategy<Value = PoolKind> {
    prop_oneof![
        Just(PoolKind::GlobalTapping),
        Just(PoolKind::StakingRewards),
        Just(PoolKind::LootRaffle),
        Just(PoolKind::Ecosystem),
    ]
}

#[derive(Debug, Clone)]
enum PoolOp {
    Allocate(u64),
    Claim(PoolKind, u64),
}

fn pool_op() -> impl Strategy<Value = PoolOp> {
    prop_oneof![
        (1u64..1_000_000_000).prop_map(PoolOp::Allocate),
        (pool_kind(), 1u64..1_000_000_000).prop_map(|(kind, amount)| PoolOp::Claim(kind, amount)),
    ]
}

/// Root of the tree in which `leaf` has the proof `siblings`. Level `i` pairs
/// the running node with sibling `i`, left on even levels and right on odd ones.
fn chain_tree(leaf: [u8; 32], siblings: &[[u8; 32]]) -> [u8; 32] {
    let mut running = leaf;
    for (i, sibling) in siblings.iter().enumerate() {
        running = if i % 2 == 0 {
            merkle::hash_nodes(&running, sibling)
        } else {
            merkle::hash_nodes(sibling, &running)
        };
    }
    running
}

proptest! {
    /// n advances equal the n-fold iterated floor recurrence.
    #[test]
    fn emissions_follow_iterated_floor(
        initial in 1u64..=u64::MAX / 128,
        factor in 1u64..=DECAY_SCALE,
        months in 0usize..64,
    ) {
        let mut state = EmissionState::default();
        state.initialize(Pubkey::new_unique(), Pubkey::new_unique(), initial, factor, 0).unwrap();

        let mut expected = initial;
        let mut minted: u128 = 0;
        for _ in 0..months {
            let amount = state.advance(0).unwrap();
            prop_assert_eq!(amount, expected);
            minted += amount as u128;
            expected = ((expected as u128 * factor as u128) / DECAY_SCALE as u128) as u64;
        }

        prop_assert_eq!(state.current_month as usize, months);
        prop_assert_eq!(state.current_emissions, expected);
        prop_assert_eq!(state.total_minted as u128, minted);
    }

    /// Emissions never increase from one month to the next.
    #[test]
    fn emissions_are_nonincreasing(initial in 1u64..=u64::MAX, factor in 1u64..=DECAY_SCALE) {
        let next = math::decay(initial, factor).unwrap();
        prop_assert!(next <= initial);
    }

    /// Allocation shares always sum to the allocated amount.
    #[test]
    fn split_is_exact(total in any::<u64>()) {
        let shares = math::split_by_weights(total).unwrap();
        let sum: u128 = shares.iter().map(|share| *share as u128).sum();
        prop_assert_eq!(sum, total as u128);
    }

    /// Pool balances never exceed their lifetime allocation, never go negative,
    /// and `outstanding` is always their sum.
    #[test]
    fn pool_invariants_hold(ops in prop::collection::vec(pool_op(), 1..40)) {
        let mut allocator = PoolAllocator::default();
        allocator
            .initialize(Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique(), 0, 0)
            .unwrap();
        let mut vault: u64 = 0;

        for op in ops {
            match op {
                PoolOp::Allocate(amount) => {
                    vault += amount;
                    allocator.allocate(amount, vault).unwrap();
                }
                PoolOp::Claim(kind, amount) => {
                    let before = allocator.pool(kind).unwrap().balance;
                    match allocator.claim(kind, amount) {
                        Ok(remaining) => {
                            prop_assert_eq!(remaining, before - amount);
                            vault -= amount;
                        }
                        Err(_) => {
                            prop_assert!(amount > before);
                            prop_assert_eq!(allocator.pool(kind).unwrap().balance, before);
                        }
                    }
                }
            }

            let sum: u64 = allocator.pools.iter().map(|pool| pool.balance).sum();
            prop_assert_eq!(allocator.outstanding, sum);
            prop_assert!(allocator.outstanding <= vault);
            for pool in allocator.pools.iter() {
                prop_assert!(pool.balance <= pool.total_allocated);
            }
        }
        prop_assert_eq!(allocator.pools.len(), POOL_COUNT);
    }

    /// Any single-bit change to the address, amount or a proof node is rejected.
    #[test]
    fn proof_is_sound(
        address in prop::array::uniform32(any::<u8>()),
        amount in any::<u64>(),
        siblings in prop::collection::vec(prop::array::uniform32(any::<u8>()), 0..6),
        target in any::<prop::sample::Index>(),
        bit in 0usize..8,
        byte in 0usize..32,
    ) {
        let address = Pubkey::new_from_array(address);
        let root = chain_tree(merkle::hash_leaf(&address, amount), &siblings);
        prop_assert!(merkle::verify(&siblings, &root, merkle::hash_leaf(&address, amount)));

        let mut flipped_address = address.to_bytes();
        flipped_address[byte] ^= 1 << bit;
        let flipped_address = Pubkey::new_from_array(flipped_address);
        prop_assert!(!merkle::verify(&siblings, &root, merkle::hash_leaf(&flipped_address, amount)));

        let flipped_amount = amount ^ (1u64 << (byte % 8 * 8 + bit));
        prop_assert!(!merkle::verify(&siblings, &root, merkle::hash_leaf(&address, flipped_amount)));

        if !siblings.is_empty() {
            let mut proof = siblings.clone();
            let node = target.index(proof.len());
            proof[node][byte] ^= 1 << bit;
            prop_assert!(!merkle::verify(&proof, &root, merkle::hash_leaf(&address, amount)));
        }
    }

    /// A verified leaf can be paid once; every later attempt is rejected.
    #[test]
    fn claims_are_single_use(
        amount in 1u64..=u64::MAX,
        siblings in prop::collection::vec(prop::array::uniform32(any::<u8>()), 0..6),
        retries in 1usize..4,
    ) {
        let address = Pubkey::new_unique();
        let root = chain_tree(merkle::hash_leaf(&address, amount), &siblings);
        let mut distributor = MerkleDistributor::default();
        distributor.initialize(Pubkey::new_unique(), root, 0).unwrap();
        let mut status = ClaimStatus::default();

        prop_assert!(distributor.verify_and_claim(&mut status, &address, address, amount, &siblings, 0, 0).is_ok());
        for _ in 0..retries {
            prop_assert!(distributor.verify_and_claim(&mut status, &address, address, amount, &siblings, 0, 0).is_err());
        }
        prop_assert_eq!(distributor.claim_count, 1);
    }

    /// The staking score depends only on (amount, lock period) and grows with
    /// the lock period.
    #[test]
    fn staking_score_is_pure_and_monotone(
        amount in 1u64..=u64::MAX / 4,
        months in 1u32..=MAX_LOCK_PERIOD_MONTHS,
        longer in 0u32..=MAX_LOCK_PERIOD_MONTHS,
    ) {
        let mut ledger = StakingLedger::default();
        ledger
            .initialize(
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                &DEFAULT_LOCK_TIERS,
                0,
            )
            .unwrap();

        let score = ledger.staking_score(amount, months).unwrap();
        prop_assert_eq!(score, ledger.staking_score(amount, months).unwrap());
        prop_assert!(score >= amount);

        let longer = months.max(longer);
        prop_assert!(ledger.staking_score(amount, longer).unwrap() >= score);
    }

    /// A reward claim either debits the pool and consumes the leaf, or leaves
    /// every account as it was.
    #[test]
    fn reward_claim_is_all_or_nothing(
        funded in 1u64..1_000_000,
        amount in 1u64..1_000_000,
        kind in pool_kind(),
    ) {
        let address = Pubkey::new_unique();
        let sibling = [3u8; 32];
        let root = chain_tree(merkle::hash_leaf(&address, amount), &[sibling]);
        let mut distributor = MerkleDistributor::default();
        distributor.initialize(Pubkey::new_unique(), root, 0).unwrap();
        let mut allocator = PoolAllocator::default();
        allocator
            .initialize(Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique(), 0, 0)
            .unwrap();
        allocator.allocate(funded, funded).unwrap();
        let mut ledger = StakingLedger::default();
        ledger
            .initialize(
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                &DEFAULT_LOCK_TIERS,
                0,
            )
            .unwrap();
        let mut status = ClaimStatus::default();
        let before = allocator.pool(kind).unwrap().balance;

        let result = claim_reward(
            &mut distributor,
            &mut status,
            &mut allocator,
            &mut ledger,
            address,
            amount,
            kind,
            &[sibling],
            0,
            0,
        );

        if amount <= before {
            prop_assert_eq!(result.unwrap().remaining, before - amount);
            prop_assert!(status.claimed);
            prop_assert_eq!(allocator.outstanding, funded - amount);
            prop_assert_eq!(ledger.total_rewards_claimed, amount);
        } else {
            prop_assert!(result.is_err());
            prop_assert!(!status.claimed);
            prop_assert_eq!(distributor.total_claimed, 0);
            prop_assert_eq!(allocator.pool(kind).unwrap().balance, before);
            prop_assert_eq!(allocator.outstanding, funded);
            prop_assert_eq!(ledger.total_rewards_claimed, 0);
        }
    }
}
