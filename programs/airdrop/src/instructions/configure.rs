use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::events::AirdropConfigured;
use crate::state::AirdropState;
use crate::VAULT_SEED_PREFIX;

#[derive(Accounts)]
#[instruction(seed: [u8; 32])]
pub struct Configure<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: Only recorded. This key is later required to sign `close`.
    pub close_authority: UncheckedAccount<'info>,

    /// Fails with "already in use" if the seed was configured before, closed or not.
    #[account(
        init,
        payer = payer,
        space = 8 + AirdropState::INIT_SPACE,
        seeds = [seed.as_ref()],
        bump
    )]
    pub airdrop_state: Account<'info, AirdropState>,

    pub mint: Account<'info, Mint>,

    /// The vault token account. The AirdropState PDA is its token authority.
    #[account(
        init,
        payer = payer,
        token::mint = mint,
        token::authority = airdrop_state,
        seeds = [
            VAULT_SEED_PREFIX,
            airdrop_state.key().as_ref()
        ],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handle_configure(
    ctx: Context<Configure>,
    seed: [u8; 32],
    verifier_signature: Pubkey,
) -> Result<()> {
    let airdrop_state = &mut ctx.accounts.airdrop_state;
    airdrop_state.set_inner(AirdropState {
        vault: ctx.accounts.vault.key(),
        vault_bump: ctx.bumps.vault,
        seed,
        close_authority: ctx.accounts.close_authority.key(),
        verifier_signature,
        mint: ctx.accounts.mint.key(),
        bump: ctx.bumps.airdrop_state,
        closed: false,
    });

    msg!(
        "Configured airdrop {} with vault {} bound to verifier {}",
        airdrop_state.key(),
        airdrop_state.vault,
        verifier_signature
    );

    emit!(AirdropConfigured {
        airdrop_state: airdrop_state.key(),
        vault: airdrop_state.vault,
        mint: airdrop_state.mint,
        verifier_signature,
        close_authority: airdrop_state.close_authority,
    });

    Ok(())
}
