use anchor_lang::prelude::*;

/// Seed prefix for claim receipts: `["Receipt", verifier_state, index_le]`.
#[constant]
pub const RECEIPT_SEED_PREFIX: &[u8] = b"Receipt";

/// Domain tag hashed in front of every leaf.
pub const LEAF_PREFIX: u8 = 0x00;

/// Domain tag hashed in front of every internal node.
pub const INTERNAL_PREFIX: u8 = 0x01;
