use anchor_lang::prelude::*;

#[account] // seeds [airdrop_state]
#[derive(InitSpace)]
pub struct OrcaVerifierState {
    pub airdrop_state: Pubkey,
    pub signature_bump: u8,
    pub bump: u8,

    /// Whirlpool whose positions qualify.
    pub pool: Pubkey,

    /// Which of the pool's reward emissions drives payouts.
    pub reward_index: u8,
}

/// Per-position claim progress.
#[account] // seeds ["Receipt", verifier_state, position]
#[derive(InitSpace)]
pub struct OrcaReceipt {
    pub verifier_state: Pubkey,
    pub position: Pubkey,

    /// Reward growth (Q64.64 per unit of liquidity) already paid out.
    pub reward_checkpoint: u128,

    pub total_claimed: u64,
    pub last_claimed_at: i64,
}

impl OrcaReceipt {
    /// `init_if_needed` hands back a zeroed account on first use.
    pub fn is_fresh(&self) -> bool {
        self.verifier_state == Pubkey::default()
    }
}
