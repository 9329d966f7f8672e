use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::state::{OrcaReceipt, OrcaVerifierState};
use crate::whirlpool::{Position, WHIRLPOOL_PROGRAM_ID};
use crate::RECEIPT_SEED_PREFIX;

#[derive(Accounts)]
pub struct InitReceipt<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    pub verifier_state: Account<'info, OrcaVerifierState>,

    /// CHECK: Owner checked here, contents parsed in the handler.
    #[account(owner = WHIRLPOOL_PROGRAM_ID @ ErrorCode::InvalidPositionData)]
    pub position: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + OrcaReceipt::INIT_SPACE,
        seeds = [
            RECEIPT_SEED_PREFIX,
            verifier_state.key().as_ref(),
            position.key().as_ref(),
        ],
        bump
    )]
    pub receipt: Account<'info, OrcaReceipt>,

    pub system_program: Program<'info, System>,
}

/// Starts tracking a position from its current reward checkpoint.
///
/// Rewards accrued before this call are not claimable. Calling it again for the
/// same position leaves the receipt untouched.
pub fn handle_init_receipt(ctx: Context<InitReceipt>) -> Result<()> {
    if !ctx.accounts.receipt.is_fresh() {
        msg!("Receipt for position {} already exists", ctx.accounts.position.key());
        return Ok(());
    }

    let position = Position::unpack(&ctx.accounts.position.try_borrow_data()?)
        .ok_or(ErrorCode::InvalidPositionData)?;
    let verifier_state = &ctx.accounts.verifier_state;
    require_keys_eq!(position.whirlpool, verifier_state.pool, ErrorCode::PoolMismatch);

    let reward_checkpoint = position
        .reward_checkpoint(verifier_state.reward_index)
        .ok_or(ErrorCode::InvalidRewardIndex)?;

    ctx.accounts.receipt.set_inner(OrcaReceipt {
        verifier_state: ctx.accounts.verifier_state.key(),
        position: ctx.accounts.position.key(),
        reward_checkpoint,
        total_claimed: 0,
        last_claimed_at: Clock::get()?.unix_timestamp,
    });

    msg!(
        "Tracking position {} from checkpoint {}",
        ctx.accounts.position.key(),
        reward_checkpoint
    );

    Ok(())
}
