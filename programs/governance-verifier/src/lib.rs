pub mod constants;
pub mod eligibility;
pub mod error;
pub mod instructions;
pub mod spl_governance;
pub mod state;

pub use constants::RECEIPT_SEED_PREFIX;
pub use eligibility::*;
pub use error::ErrorCode;
pub use instructions::*;
pub use state::*;

use anchor_lang::prelude::*;

declare_id!("AaSJ4ddbHNn8GCfUKUti7tK3MC16vTxDzLZvTp71Vxg7");

#[program]
pub mod governance_verifier {
    use super::instructions;
    use super::*;

    // depositor, in the configure transaction
    pub fn init(
        ctx: Context<Init>,
        seed: [u8; 32],
        governance: Pubkey,
        eligibility_start: i64,
        eligibility_end: i64,
        amount_per_voter: u64,
    ) -> Result<()> {
        instructions::handle_init(
            ctx,
            seed,
            governance,
            eligibility_start,
            eligibility_end,
            amount_per_voter,
        )
    }

    // voter
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::handle_claim(ctx)
    }
}
