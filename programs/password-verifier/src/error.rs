use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("The airdrop is bound to a different verifier signature.")]
    SignatureMismatch,
    #[msg("The password does not match the configured hash.")]
    InvalidPassword,
}
