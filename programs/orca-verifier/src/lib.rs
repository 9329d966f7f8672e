pub mod constants;
pub mod error;
pub mod instructions;
pub mod rewards;
pub mod state;
pub mod whirlpool;

pub use constants::{RECEIPT_SEED_PREFIX, REWARD_SLOTS};
pub use error::ErrorCode;
pub use instructions::*;
pub use state::*;

use anchor_lang::prelude::*;

declare_id!("HvByJP2GSQyGbHfLtU7cve5mVmHdsB8owXNGfmckb9hT");

#[program]
pub mod orca_verifier {
    use super::instructions;
    use super::*;

    // depositor, in the configure transaction
    pub fn init(ctx: Context<Init>, seed: [u8; 32], pool: Pubkey, reward_index: u8) -> Result<()> {
        instructions::handle_init(ctx, seed, pool, reward_index)
    }

    // anyone; idempotent
    pub fn init_receipt(ctx: Context<InitReceipt>) -> Result<()> {
        instructions::handle_init_receipt(ctx)
    }

    // position holder
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::handle_claim(ctx)
    }
}
