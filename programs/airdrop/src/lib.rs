pub mod constants;
#[cfg(feature = "cpi")]
pub mod delegate;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

pub use constants::VAULT_SEED_PREFIX;
pub use error::ErrorCode;
pub use events::*;
pub use instructions::*;
pub use state::*;

use anchor_lang::prelude::*;

declare_id!("6k5LMbY9jsXEG1XhYmRRZZrYfeYJXAtVfGBwxL1FeKe");

#[program]
pub mod airdrop {
    use super::instructions;
    use super::*;

    // depositor
    pub fn configure(
        ctx: Context<Configure>,
        seed: [u8; 32],
        verifier_signature: Pubkey,
    ) -> Result<()> {
        instructions::handle_configure(ctx, seed, verifier_signature)
    }

    // bound verifier (via CPI)
    pub fn claim(ctx: Context<Claim>, amount: u64, proof: Vec<u8>) -> Result<()> {
        instructions::handle_claim(ctx, amount, proof)
    }

    // close authority
    pub fn close(ctx: Context<CloseAirdrop>) -> Result<()> {
        instructions::handle_close(ctx)
    }
}
