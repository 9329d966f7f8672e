use std::collections::HashMap;

use anchor_lang::prelude::Pubkey;
use merkle_verifier::{BalanceLeaf, VerificationData};
use rs_merkle::MerkleTree;

use crate::{BalanceHasher, BalanceTreeError};

/// Prover side of the merkle verifier: builds the root to configure and the
/// proofs claimants submit.
///
/// Leaves keep the order they were given in. The root therefore depends on that
/// order, and callers that rebuild a tree must feed the same sequence.
#[derive(Clone)]
pub struct BalanceTree {
    tree: MerkleTree<BalanceHasher>,
    leaves: Vec<BalanceLeaf>,
    /// Leaf index -> position in `leaves`
    positions: HashMap<u64, usize>,
    root: [u8; 32],
}

impl BalanceTree {
    pub fn new(leaves: Vec<BalanceLeaf>) -> Result<Self, BalanceTreeError> {
        if leaves.is_empty() {
            return Err(BalanceTreeError::Empty);
        }

        let mut positions = HashMap::with_capacity(leaves.len());
        for (position, leaf) in leaves.iter().enumerate() {
            if positions.insert(leaf.index, position).is_some() {
                return Err(BalanceTreeError::DuplicateIndex(leaf.index));
            }
        }

        let leaf_hashes: Vec<[u8; 32]> = leaves.iter().map(BalanceLeaf::to_hash).collect();
        let tree = MerkleTree::<BalanceHasher>::from_leaves(&leaf_hashes);
        // A non-empty tree always has a root.
        let root = tree.root().ok_or(BalanceTreeError::Empty)?;

        Ok(Self {
            tree,
            leaves,
            positions,
            root,
        })
    }

    /// Convenience for the common "list of (account, amount)" input: leaf
    /// indices are assigned 0, 1, 2, ... in order.
    pub fn from_balances(balances: &[(Pubkey, u64)]) -> Result<Self, BalanceTreeError> {
        Self::new(
            balances
                .iter()
                .enumerate()
                .map(|(index, (account, amount))| {
                    BalanceLeaf::new(index as u64, *account, *amount)
                })
                .collect(),
        )
    }

    pub fn root(&self) -> [u8; 32] {
        self.root
    }

    pub fn leaves(&self) -> &[BalanceLeaf] {
        &self.leaves
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Sum of all leaf amounts: what the vault must be funded with.
    pub fn total_amount(&self) -> u128 {
        self.leaves.iter().map(|leaf| leaf.amount as u128).sum()
    }

    pub fn leaf(&self, index: u64) -> Option<&BalanceLeaf> {
        self.positions
            .get(&index)
            .and_then(|position| self.leaves.get(*position))
    }

    /// Sibling hashes from the leaf level up. Levels where the leaf's ancestor
    /// had no sibling contribute nothing.
    pub fn proof(
        &self,
        index: u64,
        account: &Pubkey,
        amount: u64,
    ) -> Result<Vec<[u8; 32]>, BalanceTreeError> {
        let position = self
            .positions
            .get(&index)
            .copied()
            .filter(|position| {
                let leaf = &self.leaves[*position];
                leaf.account == *account && leaf.amount == amount
            })
            .ok_or(BalanceTreeError::LeafNotFound { index })?;

        Ok(self.tree.proof(&[position]).proof_hashes().to_vec())
    }

    /// The `verification_data` argument of the merkle verifier's `claim`.
    pub fn verification_data(
        &self,
        index: u64,
        account: &Pubkey,
        amount: u64,
    ) -> Result<Vec<u8>, BalanceTreeError> {
        let proof = self.proof(index, account, amount)?;
        Ok(VerificationData { index, proof }.to_bytes())
    }
}
