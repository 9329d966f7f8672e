use airdrop::delegate::{claim_from_vault, VaultClaim};
use airdrop::program::Airdrop;
use airdrop::AirdropState;
use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::error::ErrorCode;
use crate::proofs::{verify_balance_proof, VerificationData};
use crate::state::{MerkleReceipt, MerkleVerifierState};
use crate::{BalanceLeaf, RECEIPT_SEED_PREFIX};

#[derive(Accounts)]
#[instruction(amount: u64, verification_data: Vec<u8>)]
pub struct Claim<'info> {
    /// The account named in the balance leaf. Pays for the receipt.
    #[account(mut)]
    pub claimant: Signer<'info>,

    #[account(
        seeds = [airdrop_state.key().as_ref()],
        bump = verifier_state.bump,
        has_one = airdrop_state,
    )]
    pub verifier_state: Box<Account<'info, MerkleVerifierState>>,

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

    /// Creation fails with "already in use" when this index was claimed before.
    #[account(
        init,
        payer = claimant,
        space = 8 + MerkleReceipt::INIT_SPACE,
        seeds = [
            RECEIPT_SEED_PREFIX,
            verifier_state.key().as_ref(),
            verification_data.get(..8).unwrap_or_default(),
        ],
        bump
    )]
    pub receipt: Box<Account<'info, MerkleReceipt>>,

    pub airdrop_program: Program<'info, Airdrop>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handle_claim(ctx: Context<Claim>, amount: u64, verification_data: Vec<u8>) -> Result<()> {
    let data = VerificationData::parse(&verification_data)?;

    let leaf = BalanceLeaf::new(data.index, ctx.accounts.claimant.key(), amount);
    require!(
        verify_balance_proof(&data.proof, &ctx.accounts.verifier_state.root, &leaf),
        ErrorCode::InvalidProof
    );
    msg!(
        "Merkle proof verified for index {} ({} nodes)",
        data.index,
        data.proof.len()
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
        verification_data,
    )?;

    ctx.accounts.receipt.set_inner(MerkleReceipt {
        verifier_state: ctx.accounts.verifier_state.key(),
        recipient: ctx.accounts.claimant.key(),
        index: data.index,
        amount,
        claimed_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
