use airdrop::delegate::{claim_from_vault, VaultClaim};
use airdrop::program::Airdrop;
use airdrop::AirdropState;
use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::error::ErrorCode;
use crate::state::PasswordVerifierState;

#[derive(Accounts)]
pub struct Claim<'info> {
    pub claimant: Signer<'info>,

    #[account(
        seeds = [airdrop_state.key().as_ref()],
        bump = verifier_state.bump,
        has_one = airdrop_state,
    )]
    pub verifier_state: Account<'info, PasswordVerifierState>,

    pub airdrop_state: Account<'info, AirdropState>,

    /// CHECK: Must be the airdrop vault; the core program validates its contents.
    #[account(mut, address = airdrop_state.vault)]
    pub vault: UncheckedAccount<'info>,

    #[account(mut)]
    pub recipient: Account<'info, TokenAccount>,

    /// CHECK: Signer PDA for the core claim CPI.
    #[account(
        seeds = [verifier_state.key().as_ref()],
        bump = verifier_state.signature_bump,
    )]
    pub signature: UncheckedAccount<'info>,

    pub airdrop_program: Program<'info, Airdrop>,
    pub token_program: Program<'info, Token>,
}

/// Pays `amount` to `recipient` when `password` hashes to the configured value.
///
/// There is no receipt: the same password can be presented any number of times
/// until the vault runs dry.
pub fn handle_claim(ctx: Context<Claim>, amount: u64, password: String) -> Result<()> {
    require!(
        ctx.accounts.verifier_state.accepts(&password),
        ErrorCode::InvalidPassword
    );

    claim_from_vault(
        VaultClaim {
            airdrop_program: ctx.accounts.airdrop_program.to_account_info(),
            airdrop_state: ctx.accounts.airdrop_state.to_account_info(),
            vault: ctx.accounts.vault.to_account_info(),
            recipient: ctx.accounts.recipient.to_account_info(),
            signature: ctx.accounts.signature.to_account_info(),
            token_program: ctx.accounts.token_program.to_account_info(),
        },
        ctx.accounts.verifier_state.key(),
        ctx.accounts.verifier_state.signature_bump,
        amount,
        Vec::new(),
    )
}
