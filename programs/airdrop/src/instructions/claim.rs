use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::ErrorCode;
use crate::events::TokensClaimed;
use crate::state::AirdropState;

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(
        seeds = [airdrop_state.seed.as_ref()],
        bump = airdrop_state.bump,
        has_one = vault @ ErrorCode::VaultMismatch,
        constraint = !airdrop_state.closed @ ErrorCode::AlreadyClosed,
    )]
    pub airdrop_state: Account<'info, AirdropState>,

    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = recipient.mint == airdrop_state.mint @ ErrorCode::MintMismatch,
    )]
    pub recipient: Account<'info, TokenAccount>,

    /// The bound verifier's CPI-authority PDA. It can only sign through
    /// `invoke_signed` from the verifier program that derived it.
    #[account(
        constraint = signature.key() == airdrop_state.verifier_signature @ ErrorCode::SignatureMismatch,
    )]
    pub signature: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Pays `amount` from the vault to `recipient`.
///
/// No eligibility logic lives here: a valid signature from the bound verifier
/// is the whole authorization. `proof` is carried for the transaction record.
pub fn handle_claim(ctx: Context<Claim>, amount: u64, proof: Vec<u8>) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    require!(
        ctx.accounts.vault.amount >= amount,
        ErrorCode::InsufficientVaultBalance
    );

    let airdrop_state = &ctx.accounts.airdrop_state;
    let airdrop_state_seeds = &[airdrop_state.seed.as_ref(), &[airdrop_state.bump]];
    let signer_seeds = &[&airdrop_state_seeds[..]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.recipient.to_account_info(),
                authority: airdrop_state.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    msg!(
        "Claimed {} tokens to {} ({} proof bytes)",
        amount,
        ctx.accounts.recipient.key(),
        proof.len()
    );

    emit!(TokensClaimed {
        airdrop_state: airdrop_state.key(),
        recipient: ctx.accounts.recipient.key(),
        amount,
    });

    Ok(())
}
