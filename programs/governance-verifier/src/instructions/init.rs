use airdrop::AirdropState;
use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::state::GovernanceVerifierState;

#[derive(Accounts)]
#[instruction(seed: [u8; 32])]
pub struct Init<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        seeds = [seed.as_ref()],
        seeds::program = airdrop::ID,
        bump = airdrop_state.bump,
    )]
    pub airdrop_state: Account<'info, AirdropState>,

    #[account(
        init,
        payer = payer,
        space = 8 + GovernanceVerifierState::INIT_SPACE,
        seeds = [airdrop_state.key().as_ref()],
        bump
    )]
    pub verifier_state: Account<'info, GovernanceVerifierState>,

    /// CHECK: Address-only PDA. It never holds data; it signs core claims.
    #[account(
        seeds = [verifier_state.key().as_ref()],
        bump,
        constraint = signature.key() == airdrop_state.verifier_signature @ ErrorCode::SignatureMismatch,
    )]
    pub signature: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_init(
    ctx: Context<Init>,
    _seed: [u8; 32],
    governance: Pubkey,
    eligibility_start: i64,
    eligibility_end: i64,
    amount_per_voter: u64,
) -> Result<()> {
    require!(
        eligibility_start <= eligibility_end,
        ErrorCode::InvalidEligibilityWindow
    );
    require!(amount_per_voter > 0, ErrorCode::InvalidAmountPerVoter);

    ctx.accounts.verifier_state.set_inner(GovernanceVerifierState {
        airdrop_state: ctx.accounts.airdrop_state.key(),
        signature_bump: ctx.bumps.signature,
        bump: ctx.bumps.verifier_state,
        governance,
        eligibility_start,
        eligibility_end,
        amount_per_voter,
        reserved: [0u8; 128],
    });

    msg!(
        "Governance verifier bound to airdrop {}: governance {}, window [{}, {}], {} per voter",
        ctx.accounts.airdrop_state.key(),
        governance,
        eligibility_start,
        eligibility_end,
        amount_per_voter
    );

    Ok(())
}
