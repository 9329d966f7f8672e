use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("The signing verifier does not match the verifier bound to this airdrop.")]
    SignatureMismatch,
    #[msg("The vault does not have enough tokens to fulfill this claim.")]
    InsufficientVaultBalance,
    #[msg("Only the close authority may close this airdrop.")]
    InvalidCloseAuthority,
    #[msg("The vault account does not belong to this airdrop.")]
    VaultMismatch,
    #[msg("The token account mint does not match the airdrop mint.")]
    MintMismatch,
    #[msg("Claim amount must be greater than zero.")]
    InvalidAmount,
    #[msg("The airdrop has been closed.")]
    AlreadyClosed,
}
