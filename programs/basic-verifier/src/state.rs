use anchor_lang::prelude::*;

#[account] // seeds [airdrop_state]
#[derive(InitSpace)]
pub struct BasicVerifierState {
    pub airdrop_state: Pubkey,
    pub signature_bump: u8,
    pub bump: u8,
}
