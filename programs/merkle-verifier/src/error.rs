use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("The airdrop is bound to a different verifier signature.")]
    SignatureMismatch,
    #[msg("Verification data must be an 8-byte index followed by 32-byte proof nodes.")]
    InvalidVerificationData,
    #[msg("Invalid Merkle proof provided.")]
    InvalidProof,
    #[msg("The recipient token account is not owned by the claimant.")]
    RecipientMismatch,
}
