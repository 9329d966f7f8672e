use anchor_lang::solana_program::keccak;
use merkle_verifier::{hash_node, LEAF_PREFIX};
use rs_merkle::Hasher;

/// rs_merkle hasher matching the merkle verifier program bit for bit.
///
/// - Leaves: `keccak256(0x00 || data)`, where `data` is the packed
///   `index || account || amount` of a [`merkle_verifier::BalanceLeaf`].
/// - Internal nodes: `keccak256(0x01 || min(l, r) || max(l, r))`.
/// - A node without a sibling is promoted unchanged.
#[derive(Clone)]
pub struct BalanceHasher;

impl Hasher for BalanceHasher {
    type Hash = [u8; 32];

    fn hash(data: &[u8]) -> [u8; 32] {
        keccak::hashv(&[&[LEAF_PREFIX], data]).0
    }

    fn concat_and_hash(left: &Self::Hash, right: Option<&Self::Hash>) -> Self::Hash {
        match right {
            Some(right) => hash_node(left, right),
            None => *left,
        }
    }
}
