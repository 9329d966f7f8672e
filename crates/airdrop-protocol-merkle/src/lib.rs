pub mod balance_tree;
pub mod error;
pub mod hasher;

pub use balance_tree::BalanceTree;
pub use error::BalanceTreeError;
pub use hasher::BalanceHasher;

// The leaf type and on-chain verification live in the verifier program
pub use merkle_verifier::{hash_node, verify_balance_proof, BalanceLeaf, VerificationData};
