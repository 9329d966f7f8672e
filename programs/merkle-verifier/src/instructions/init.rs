use airdrop::AirdropState;
use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::state::MerkleVerifierState;

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
        space = 8 + MerkleVerifierState::INIT_SPACE,
        seeds = [airdrop_state.key().as_ref()],
        bump
    )]
    pub verifier_state: Account<'info, MerkleVerifierState>,

    /// CHECK: Address-only PDA. It never holds data; it signs core claims.
    #[account(
        seeds = [verifier_state.key().as_ref()],
        bump,
        constraint = signature.key() == airdrop_state.verifier_signature @ ErrorCode::SignatureMismatch,
    )]
    pub signature: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_init(ctx: Context<Init>, _seed: [u8; 32], root: [u8; 32]) -> Result<()> {
    ctx.accounts.verifier_state.set_inner(MerkleVerifierState {
        airdrop_state: ctx.accounts.airdrop_state.key(),
        signature_bump: ctx.bumps.signature,
        bump: ctx.bumps.verifier_state,
        root,
    });

    msg!(
        "Merkle verifier bound to airdrop {} with root {:?}",
        ctx.accounts.airdrop_state.key(),
        root
    );

    Ok(())
}
