//! Merkle proof verification for reward claims.
//!
//! Leaf: `sha256(address || amount_le_u64)`.
//!
//! Node ordering is fixed by proof position, not by sorting: at step `i` the
//! running hash is the left input when `i` is even and the right input when
//! `i` is odd. Off-chain tree builders must emit proofs in this order.

use anchor_lang::prelude::*;
use sha2::{Digest, Sha256};

pub type Hash = [u8; 32];

pub fn hash_leaf(address: &Pubkey, amount: u64) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(address.as_ref());
    hasher.update(amount.to_le_bytes());
    hasher.finalize().into()
}

pub fn hash_nodes(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

/// Folds `proof` over `leaf`. An empty proof yields the leaf itself.
pub fn compute_root(leaf: Hash, proof: &[Hash]) -> Hash {
    proof.iter().enumerate().fold(leaf, |running, (index, sibling)| {
        if index % 2 == 0 {
            hash_nodes(&running, sibling)
        } else {
            hash_nodes(sibling, &running)
        }
    })
}

pub fn verify(proof: &[Hash], root: &Hash, leaf: Hash) -> bool {
    compute_root(leaf, proof) == *root
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const ROOT: Hash = [
        0x3e, 0x42, 0x1d, 0x00, 0x40, 0x0c, 0xe1, 0xcf, 0x19, 0x96, 0x82, 0xf7, 0x4d, 0x3e, 0xb3,
        0x53, 0xa0, 0xc4, 0x97, 0x8a, 0x99, 0xb7, 0x3c, 0x65, 0xa5, 0x6a, 0xee, 0xaa, 0x81, 0xb8,
        0x18, 0x9e,
    ];

    const SIBLING: Hash = [
        0xbc, 0xc3, 0x5f, 0xbd, 0x0b, 0xa0, 0x79, 0x39, 0x27, 0x03, 0x9c, 0x72, 0xd1, 0xfa, 0x6d,
        0x4a, 0x48, 0xa2, 0xb9, 0x38, 0xcd, 0x7a, 0x52, 0x6b, 0x05, 0x0d, 0x21, 0x07, 0x47, 0x35,
        0x29, 0x8a,
    ];

    fn claimant() -> Pubkey {
        Pubkey::from_str("2vxsF9eTA7gYc5oE1Fnnsqj9AG1NvbpDADmDxtEZ1bQQ").unwrap()
    }

    #[test]
    fn known_two_leaf_tree_verifies() {
        let leaf = hash_leaf(&claimant(), 5);
        assert!(verify(&[SIBLING], &ROOT, leaf));
    }

    #[test]
    fn wrong_amount_or_address_fails() {
        assert!(!verify(&[SIBLING], &ROOT, hash_leaf(&claimant(), 6)));
        assert!(!verify(&[SIBLING], &ROOT, hash_leaf(&Pubkey::default(), 5)));
    }

    #[test]
    fn sibling_order_matters() {
        let leaf = hash_leaf(&claimant(), 5);
        assert_ne!(hash_nodes(&SIBLING, &leaf), ROOT);
        assert_eq!(hash_nodes(&leaf, &SIBLING), ROOT);
    }

    #[test]
    fn empty_proof_only_matches_single_leaf_tree() {
        let leaf = hash_leaf(&claimant(), 5);
        assert!(verify(&[], &leaf, leaf));
        assert!(!verify(&[], &ROOT, leaf));
    }

    #[test]
    fn odd_steps_put_running_hash_on_the_right() {
        let leaf = hash_leaf(&claimant(), 1);
        let (a, b, c) = ([1u8; 32], [2u8; 32], [3u8; 32]);

        let step0 = hash_nodes(&leaf, &a);
        let step1 = hash_nodes(&b, &step0);
        let step2 = hash_nodes(&step1, &c);

        assert_eq!(compute_root(leaf, &[a, b, c]), step2);
    }

    #[test]
    fn every_single_bit_flip_in_proof_is_rejected() {
        let leaf = hash_leaf(&claimant(), 5);
        for byte in 0..32 {
            for bit in 0..8 {
                let mut sibling = SIBLING;
                sibling[byte] ^= 1 << bit;
                assert!(!verify(&[sibling], &ROOT, leaf));
            }
        }
    }
}
