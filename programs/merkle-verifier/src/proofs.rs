use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

use crate::constants::INTERNAL_PREFIX;
use crate::error::ErrorCode;
use crate::BalanceLeaf;

const INDEX_LEN: usize = 8;
const NODE_LEN: usize = 32;

/// Parent of two nodes: `keccak256(0x01 || min(a, b) || max(a, b))`.
///
/// Sorting the pair means a proof carries no left/right flags.
pub fn hash_node(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    keccak::hashv(&[&[INTERNAL_PREFIX], lo, hi]).0
}

/// Decoded Merkle claim argument: `index_le (8 bytes) || proof nodes (32 bytes each)`.
///
/// Proof nodes are ordered from the leaf level upward.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationData {
    pub index: u64,
    pub proof: Vec<[u8; 32]>,
}

impl VerificationData {
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        require!(
            bytes.len() >= INDEX_LEN && (bytes.len() - INDEX_LEN) % NODE_LEN == 0,
            ErrorCode::InvalidVerificationData
        );

        let (index_bytes, nodes) = bytes.split_at(INDEX_LEN);
        let mut index = [0u8; INDEX_LEN];
        index.copy_from_slice(index_bytes);

        let proof = nodes
            .chunks_exact(NODE_LEN)
            .map(|chunk| {
                let mut node = [0u8; NODE_LEN];
                node.copy_from_slice(chunk);
                node
            })
            .collect();

        Ok(Self {
            index: u64::from_le_bytes(index),
            proof,
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(INDEX_LEN + self.proof.len() * NODE_LEN);
        bytes.extend_from_slice(&self.index.to_le_bytes());
        for node in &self.proof {
            bytes.extend_from_slice(node);
        }
        bytes
    }

    /// Receipt seed for this claim: the little-endian leaf index.
    pub fn receipt_key(&self) -> [u8; 8] {
        self.index.to_le_bytes()
    }
}

/// Fold `proof` over the leaf hash and compare with `root`.
pub fn verify_balance_proof(proof: &[[u8; 32]], root: &[u8; 32], leaf: &BalanceLeaf) -> bool {
    let computed = proof
        .iter()
        .fold(leaf.to_hash(), |node, sibling| hash_node(&node, sibling));
    computed == *root
}
