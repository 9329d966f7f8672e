use airdrop::delegate::{claim_from_vault, VaultClaim};
use airdrop::program::Airdrop;
use airdrop::AirdropState;
use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::error::ErrorCode;
use crate::rewards::accrued_reward;
use crate::state::{OrcaReceipt, OrcaVerifierState};
use crate::whirlpool::{Position, WHIRLPOOL_PROGRAM_ID};
use crate::RECEIPT_SEED_PREFIX;

#[derive(Accounts)]
pub struct Claim<'info> {
    /// Holder of the position NFT.
    pub claimant: Signer<'info>,

    #[account(
        seeds = [airdrop_state.key().as_ref()],
        bump = verifier_state.bump,
        has_one = airdrop_state,
    )]
    pub verifier_state: Box<Account<'info, OrcaVerifierState>>,

    pub airdrop_state: Box<Account<'info, AirdropState>>,

    /// CHECK: Must be the airdrop vault; the core program validates its contents.
    #[account(mut, address = airdrop_state.vault)]
    pub vault: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = recipient.owner == claimant.key() @ ErrorCode::RecipientMismatch,
    )]
    pub recipient: Box<Account<'info, TokenAccount>>,

    /// CHECK: Signer PDA for the core claim CPI.
    #[account(
        seeds = [verifier_state.key().as_ref()],
        bump = verifier_state.signature_bump,
    )]
    pub signature: UncheckedAccount<'info>,

    /// CHECK: Owner checked here, contents parsed in the handler.
    #[account(owner = WHIRLPOOL_PROGRAM_ID @ ErrorCode::InvalidPositionData)]
    pub position: UncheckedAccount<'info>,

    /// The claimant's token account holding the position NFT.
    #[account(
        constraint = position_token_account.owner == claimant.key() @ ErrorCode::NotPositionOwner,
        constraint = position_token_account.amount == 1 @ ErrorCode::NotPositionOwner,
    )]
    pub position_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [
            RECEIPT_SEED_PREFIX,
            verifier_state.key().as_ref(),
            position.key().as_ref(),
        ],
        bump,
        has_one = verifier_state,
        has_one = position,
    )]
    pub receipt: Box<Account<'info, OrcaReceipt>>,

    pub airdrop_program: Program<'info, Airdrop>,
    pub token_program: Program<'info, Token>,
}

/// Pays the reward accrued by the position since its receipt checkpoint.
pub fn handle_claim(ctx: Context<Claim>) -> Result<()> {
    let position = Position::unpack(&ctx.accounts.position.try_borrow_data()?)
        .ok_or(ErrorCode::InvalidPositionData)?;

    let verifier_state = &ctx.accounts.verifier_state;
    require_keys_eq!(position.whirlpool, verifier_state.pool, ErrorCode::PoolMismatch);
    require_keys_eq!(
        ctx.accounts.position_token_account.mint,
        position.position_mint,
        ErrorCode::PositionMintMismatch
    );

    let checkpoint_now = position
        .reward_checkpoint(verifier_state.reward_index)
        .ok_or(ErrorCode::InvalidRewardIndex)?;
    let amount = accrued_reward(
        position.liquidity,
        checkpoint_now,
        ctx.accounts.receipt.reward_checkpoint,
    )
    .ok_or(ErrorCode::MathOverflow)?;
    require!(amount > 0, ErrorCode::NothingToClaim);

    msg!(
        "Position {} accrued {} since checkpoint {}",
        ctx.accounts.position.key(),
        amount,
        ctx.accounts.receipt.reward_checkpoint
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
        verifier_state.key(),
        verifier_state.signature_bump,
        amount,
        ctx.accounts.position.key().to_bytes().to_vec(),
    )?;

    let receipt = &mut ctx.accounts.receipt;
    receipt.reward_checkpoint = checkpoint_now;
    receipt.total_claimed = receipt
        .total_claimed
        .checked_add(amount)
        .ok_or(ErrorCode::MathOverflow)?;
    receipt.last_claimed_at = Clock::get()?.unix_timestamp;

    Ok(())
}
