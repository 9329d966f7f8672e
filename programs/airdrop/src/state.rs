use anchor_lang::prelude::*;

#[account] // seed [seed]
#[derive(InitSpace)]
pub struct AirdropState {
    /// The token account holding the deposited balance.
    pub vault: Pubkey,

    /// Bump seed for the vault PDA.
    pub vault_bump: u8,

    /// Caller-chosen campaign seed. This is the only seed of the AirdropState PDA.
    pub seed: [u8; 32],

    /// The key allowed to close the airdrop and recover the remaining balance.
    pub close_authority: Pubkey,

    /// CPI-authority PDA of the verifier program bound to this airdrop.
    /// Only a transaction signed by this address may move tokens out of the vault.
    pub verifier_signature: Pubkey,

    /// The mint of the tokens being distributed.
    pub mint: Pubkey,

    /// Bump seed for the AirdropState PDA.
    pub bump: u8,

    /// Set by `close`. The account stays allocated so the seed cannot be configured again.
    pub closed: bool,
}
