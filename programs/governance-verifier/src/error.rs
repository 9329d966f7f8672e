use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("The airdrop is bound to a different verifier signature.")]
    SignatureMismatch,
    #[msg("Eligibility start must not be after eligibility end.")]
    InvalidEligibilityWindow,
    #[msg("Account is not owned by the governance program.")]
    InvalidAccountOwner,
    #[msg("Account is not a ProposalV2.")]
    InvalidProposal,
    #[msg("Account is not a VoteRecordV2.")]
    InvalidVoteRecord,
    #[msg("The proposal belongs to a different governance.")]
    GovernanceMismatch,
    #[msg("The vote record belongs to a different proposal.")]
    ProposalMismatch,
    #[msg("The vote record was cast by someone other than the claimant.")]
    VoterMismatch,
    #[msg("Voting on this proposal did not start within the eligibility window.")]
    VoteOutsideEligibilityWindow,
    #[msg("The recipient token account is not owned by the claimant.")]
    RecipientMismatch,
    #[msg("Amount per voter must be greater than zero.")]
    InvalidAmountPerVoter,
}
