use anchor_lang::prelude::*;

/// Seed prefix for claim receipts: `["Receipt", verifier_state, vote_record]`.
#[constant]
pub const RECEIPT_SEED_PREFIX: &[u8] = b"Receipt";
