pub mod error;
pub mod instructions;
pub mod state;

pub use error::ErrorCode;
pub use instructions::*;
pub use state::*;

use anchor_lang::prelude::*;

declare_id!("J9Mk1ANPFve17GJctkyg8rUnnT7Cg28Sb28pKwZe1Bs3");

#[program]
pub mod basic_verifier {
    use super::instructions;
    use super::*;

    // depositor, in the configure transaction
    pub fn init(ctx: Context<Init>, seed: [u8; 32]) -> Result<()> {
        instructions::handle_init(ctx, seed)
    }

    // anyone
    pub fn claim(ctx: Context<Claim>, amount: u64) -> Result<()> {
        instructions::handle_claim(ctx, amount)
    }
}
