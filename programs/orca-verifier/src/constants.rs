use anchor_lang::prelude::*;

/// Seed prefix for position receipts: `["Receipt", verifier_state, position]`.
#[constant]
pub const RECEIPT_SEED_PREFIX: &[u8] = b"Receipt";

/// Whirlpool positions track this many reward emissions.
pub const REWARD_SLOTS: u8 = 3;
