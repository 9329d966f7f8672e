use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("The airdrop is bound to a different verifier signature.")]
    SignatureMismatch,
    #[msg("Reward index must be 0, 1 or 2.")]
    InvalidRewardIndex,
    #[msg("Account is not a Whirlpool position.")]
    InvalidPositionData,
    #[msg("The position belongs to a different pool.")]
    PoolMismatch,
    #[msg("The token account does not hold this position's NFT.")]
    PositionMintMismatch,
    #[msg("The claimant does not hold the position NFT.")]
    NotPositionOwner,
    #[msg("No rewards have accrued since the last claim.")]
    NothingToClaim,
    #[msg("Reward calculation overflowed.")]
    MathOverflow,
    #[msg("The recipient token account is not owned by the claimant.")]
    RecipientMismatch,
}
