use anchor_lang::prelude::*;

#[account] // seeds [airdrop_state]
#[derive(InitSpace)]
pub struct MerkleVerifierState {
    pub airdrop_state: Pubkey,
    pub signature_bump: u8,
    pub bump: u8,

    /// Root of the balance tree. See [`crate::BalanceLeaf`] for the leaf encoding.
    pub root: [u8; 32],
}

/// Proof that a leaf index was paid out. Its existence blocks a second claim.
#[account] // seeds ["Receipt", verifier_state, index.to_le_bytes()]
#[derive(InitSpace)]
pub struct MerkleReceipt {
    pub verifier_state: Pubkey,
    pub recipient: Pubkey,
    pub index: u64,
    pub amount: u64,
    pub claimed_at: i64,
}
