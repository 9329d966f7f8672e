use airdrop::AirdropState;
use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::state::OrcaVerifierState;
use crate::REWARD_SLOTS;

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
        space = 8 + OrcaVerifierState::INIT_SPACE,
        seeds = [airdrop_state.key().as_ref()],
        bump
    )]
    pub verifier_state: Account<'info, OrcaVerifierState>,

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
    pool: Pubkey,
    reward_index: u8,
) -> Result<()> {
    require!(reward_index < REWARD_SLOTS, ErrorCode::InvalidRewardIndex);

    ctx.accounts.verifier_state.set_inner(OrcaVerifierState {
        airdrop_state: ctx.accounts.airdrop_state.key(),
        signature_bump: ctx.bumps.signature,
        bump: ctx.bumps.verifier_state,
        pool,
        reward_index,
    });

    msg!(
        "Orca verifier bound to airdrop {}: pool {}, reward {}",
        ctx.accounts.airdrop_state.key(),
        pool,
        reward_index
    );

    Ok(())
}
