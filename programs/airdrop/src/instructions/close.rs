use anchor_lang::prelude::*;
use anchor_spl::token::{self, CloseAccount, Token, TokenAccount, Transfer};

use crate::error::ErrorCode;
use crate::events::AirdropClosed;
use crate::state::AirdropState;

#[derive(Accounts)]
pub struct CloseAirdrop<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [airdrop_state.seed.as_ref()],
        bump = airdrop_state.bump,
        has_one = vault @ ErrorCode::VaultMismatch,
        constraint = airdrop_state.close_authority == authority.key() @ ErrorCode::InvalidCloseAuthority,
        constraint = !airdrop_state.closed @ ErrorCode::AlreadyClosed,
    )]
    pub airdrop_state: Account<'info, AirdropState>,

    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    /// Receives whatever is left in the vault.
    #[account(
        mut,
        constraint = recovery.mint == airdrop_state.mint @ ErrorCode::MintMismatch,
    )]
    pub recovery: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Drains the vault into `recovery`, closes the vault and marks the AirdropState closed.
///
/// The AirdropState stays allocated with `closed` set, so the seed can never be
/// configured again and later claims or closes are rejected.
pub fn handle_close(ctx: Context<CloseAirdrop>) -> Result<()> {
    let airdrop_state = &ctx.accounts.airdrop_state;
    let airdrop_state_seeds = &[airdrop_state.seed.as_ref(), &[airdrop_state.bump]];
    let signer_seeds = &[&airdrop_state_seeds[..]];

    let recovered_amount = ctx.accounts.vault.amount;

    if recovered_amount > 0 {
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.recovery.to_account_info(),
                    authority: airdrop_state.to_account_info(),
                },
                signer_seeds,
            ),
            recovered_amount,
        )?;
    }

    token::close_account(CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        CloseAccount {
            account: ctx.accounts.vault.to_account_info(),
            destination: ctx.accounts.authority.to_account_info(),
            authority: airdrop_state.to_account_info(),
        },
        signer_seeds,
    ))?;

    let airdrop_state = &mut ctx.accounts.airdrop_state;
    airdrop_state.closed = true;

    msg!(
        "Closed airdrop {}, recovered {} tokens",
        airdrop_state.key(),
        recovered_amount
    );

    emit!(AirdropClosed {
        airdrop_state: airdrop_state.key(),
        recovery: ctx.accounts.recovery.key(),
        recovered_amount,
    });

    Ok(())
}
