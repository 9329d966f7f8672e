pub mod balance_leaf;
pub mod constants;
pub mod error;
pub mod instructions;
pub mod proofs;
pub mod state;

pub use balance_leaf::*;
pub use constants::{INTERNAL_PREFIX, LEAF_PREFIX, RECEIPT_SEED_PREFIX};
pub use error::ErrorCode;
pub use instructions::*;
pub use proofs::*;
pub use state::*;

use anchor_lang::prelude::*;

declare_id!("9UxgB2fF4sYkrzCjk6cwojuQhuwCVYWKWif6fqyMcPqq");

#[program]
pub mod merkle_verifier {
    use super::instructions;
    use super::*;

    // depositor, in the configure transaction
    pub fn init(ctx: Context<Init>, seed: [u8; 32], root: [u8; 32]) -> Result<()> {
        instructions::handle_init(ctx, seed, root)
    }

    // claimant named in the tree
    pub fn claim(ctx: Context<Claim>, amount: u64, verification_data: Vec<u8>) -> Result<()> {
        instructions::handle_claim(ctx, amount, verification_data)
    }
}
