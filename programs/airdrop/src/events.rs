use anchor_lang::prelude::*;

#[event]
pub struct AirdropConfigured {
    pub airdrop_state: Pubkey,
    pub vault: Pubkey,
    pub mint: Pubkey,
    pub verifier_signature: Pubkey,
    pub close_authority: Pubkey,
}

#[event]
pub struct TokensClaimed {
    pub airdrop_state: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
}

#[event]
pub struct AirdropClosed {
    pub airdrop_state: Pubkey,
    pub recovery: Pubkey,
    pub recovered_amount: u64,
}
