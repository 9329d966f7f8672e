use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

#[account] // seeds [airdrop_state]
#[derive(InitSpace)]
pub struct PasswordVerifierState {
    pub airdrop_state: Pubkey,
    pub signature_bump: u8,
    pub bump: u8,

    /// keccak256 of the UTF-8 password bytes.
    pub password_hash: [u8; 32],
}

/// Hash a password the way `PasswordVerifierState::password_hash` stores it.
pub fn hash_password(password: &str) -> [u8; 32] {
    keccak::hash(password.as_bytes()).0
}

impl PasswordVerifierState {
    pub fn accepts(&self, password: &str) -> bool {
        hash_password(password) == self.password_hash
    }
}
