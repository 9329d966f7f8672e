use anchor_lang::prelude::*;

#[account] // seeds [airdrop_state]
#[derive(InitSpace)]
pub struct GovernanceVerifierState {
    pub airdrop_state: Pubkey,
    pub signature_bump: u8,
    pub bump: u8,

    /// SPL Governance account whose proposals qualify. Its owner is the
    /// governance program that proposals and vote records must belong to.
    pub governance: Pubkey,

    /// Inclusive bounds on a proposal's `voting_at`, unix seconds.
    pub eligibility_start: i64,
    pub eligibility_end: i64,

    pub amount_per_voter: u64,

    /// Written as zeros.
    pub reserved: [u8; 128],
}

/// One payout per vote record.
#[account] // seeds ["Receipt", verifier_state, vote_record]
#[derive(InitSpace)]
pub struct GovernanceReceipt {
    pub verifier_state: Pubkey,
    pub recipient: Pubkey,
    pub vote_record: Pubkey,
    pub proposal: Pubkey,
    pub claimed_at: i64,
}
