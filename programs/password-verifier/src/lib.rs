pub mod error;
pub mod instructions;
pub mod state;

pub use error::ErrorCode;
pub use instructions::*;
pub use state::*;

use anchor_lang::prelude::*;

declare_id!("CsJikdT2xLx2bUasZ4xcE7AkpoF3oe7FkUdN7XQ3DnR1");

#[program]
pub mod password_verifier {
    use super::instructions;
    use super::*;

    // depositor, in the configure transaction
    pub fn init(ctx: Context<Init>, seed: [u8; 32], password_hash: [u8; 32]) -> Result<()> {
        instructions::handle_init(ctx, seed, password_hash)
    }

    // anyone who knows the password
    pub fn claim(ctx: Context<Claim>, amount: u64, password: String) -> Result<()> {
        instructions::handle_claim(ctx, amount, password)
    }
}
