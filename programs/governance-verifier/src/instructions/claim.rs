use airdrop::delegate::{claim_from_vault, VaultClaim};
use airdrop::program::Airdrop;
use airdrop::AirdropState;
use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::eligibility::{check_vote_eligibility, VoteClaim};
use crate::error::ErrorCode;
use crate::spl_governance::{ProposalV2, VoteRecordV2};
use crate::state::{GovernanceReceipt, GovernanceVerifierState};
use crate::RECEIPT_SEED_PREFIX;

#[derive(Accounts)]
pub struct Claim<'info> {
    /// The voter. Pays for the receipt.
    #[account(mut)]
    pub claimant: Signer<'info>,

    #[account(
        seeds = [airdrop_state.key().as_ref()],
        bump = verifier_state.bump,
        has_one = airdrop_state,
        has_one = governance,
    )]
    pub verifier_state: Box<Account<'info, GovernanceVerifierState>>,

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

    /// CHECK: Pinned by `verifier_state.governance`. Only its owner is read.
    pub governance: UncheckedAccount<'info>,

    /// CHECK: Owner checked here, contents parsed in the handler.
    #[account(owner = *governance.owner @ ErrorCode::InvalidAccountOwner)]
    pub proposal: UncheckedAccount<'info>,

    /// CHECK: Owner checked here, contents parsed in the handler.
    #[account(owner = *governance.owner @ ErrorCode::InvalidAccountOwner)]
    pub vote_record: UncheckedAccount<'info>,

    /// Creation fails with "already in use" when this vote was already paid.
    #[account(
        init,
        payer = claimant,
        space = 8 + GovernanceReceipt::INIT_SPACE,
        seeds = [
            RECEIPT_SEED_PREFIX,
            verifier_state.key().as_ref(),
            vote_record.key().as_ref(),
        ],
        bump
    )]
    pub receipt: Box<Account<'info, GovernanceReceipt>>,

    pub airdrop_program: Program<'info, Airdrop>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// Pays `amount_per_voter` to a voter on an eligible proposal, once per vote record.
pub fn handle_claim(ctx: Context<Claim>) -> Result<()> {
    let proposal = ProposalV2::unpack(&ctx.accounts.proposal.try_borrow_data()?)
        .ok_or(ErrorCode::InvalidProposal)?;
    let vote_record = VoteRecordV2::unpack(&ctx.accounts.vote_record.try_borrow_data()?)
        .ok_or(ErrorCode::InvalidVoteRecord)?;

    let verifier_state = &ctx.accounts.verifier_state;
    check_vote_eligibility(
        &VoteClaim {
            governance: &verifier_state.governance,
            claimant: &ctx.accounts.claimant.key(),
            proposal_address: &ctx.accounts.proposal.key(),
            proposal: &proposal,
            vote_record: &vote_record,
        },
        verifier_state.eligibility_start,
        verifier_state.eligibility_end,
    )?;

    let amount = verifier_state.amount_per_voter;
    msg!(
        "Vote {} on proposal {} is eligible for {}",
        ctx.accounts.vote_record.key(),
        ctx.accounts.proposal.key(),
        amount
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
        ctx.accounts.vote_record.key().to_bytes().to_vec(),
    )?;

    ctx.accounts.receipt.set_inner(GovernanceReceipt {
        verifier_state: ctx.accounts.verifier_state.key(),
        recipient: ctx.accounts.claimant.key(),
        vote_record: ctx.accounts.vote_record.key(),
        proposal: ctx.accounts.proposal.key(),
        claimed_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
