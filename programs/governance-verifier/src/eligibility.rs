use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::spl_governance::{ProposalV2, VoteRecordV2};

/// A proposal qualifies when voting started inside `[start, end]`.
/// Proposals that never reached voting have no `voting_at` and never qualify.
pub fn voting_within_window(voting_at: Option<i64>, start: i64, end: i64) -> bool {
    matches!(voting_at, Some(t) if start <= t && t <= end)
}

/// The account relationships a governance claim must satisfy.
pub struct VoteClaim<'a> {
    pub governance: &'a Pubkey,
    pub claimant: &'a Pubkey,
    pub proposal_address: &'a Pubkey,
    pub proposal: &'a ProposalV2,
    pub vote_record: &'a VoteRecordV2,
}

pub fn check_vote_eligibility(
    claim: &VoteClaim,
    eligibility_start: i64,
    eligibility_end: i64,
) -> Result<()> {
    require_keys_eq!(
        claim.proposal.governance,
        *claim.governance,
        ErrorCode::GovernanceMismatch
    );
    require_keys_eq!(
        claim.vote_record.proposal,
        *claim.proposal_address,
        ErrorCode::ProposalMismatch
    );
    require_keys_eq!(
        claim.vote_record.governing_token_owner,
        *claim.claimant,
        ErrorCode::VoterMismatch
    );
    require!(
        voting_within_window(claim.proposal.voting_at, eligibility_start, eligibility_end),
        ErrorCode::VoteOutsideEligibilityWindow
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spl_governance::tests::sample_proposal;
    use crate::spl_governance::VOTE_RECORD_V2;

    const START: i64 = 1_700_000_000;
    const END: i64 = 1_700_086_400;

    struct Fixture {
        governance: Pubkey,
        claimant: Pubkey,
        proposal_address: Pubkey,
        proposal: ProposalV2,
        vote_record: VoteRecordV2,
    }

    impl Fixture {
        fn new(voting_at: Option<i64>) -> Self {
            let governance = Pubkey::new_unique();
            let claimant = Pubkey::new_unique();
            let proposal_address = Pubkey::new_unique();
            Self {
                governance,
                claimant,
                proposal_address,
                proposal: sample_proposal(governance, voting_at),
                vote_record: VoteRecordV2 {
                    account_type: VOTE_RECORD_V2,
                    proposal: proposal_address,
                    governing_token_owner: claimant,
                    is_relinquished: false,
                    voter_weight: 1,
                },
            }
        }

        fn check(&self) -> Result<()> {
            check_vote_eligibility(
                &VoteClaim {
                    governance: &self.governance,
                    claimant: &self.claimant,
                    proposal_address: &self.proposal_address,
                    proposal: &self.proposal,
                    vote_record: &self.vote_record,
                },
                START,
                END,
            )
        }
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        assert!(voting_within_window(Some(START), START, END));
        assert!(voting_within_window(Some(END), START, END));
        assert!(!voting_within_window(Some(START - 1), START, END));
        assert!(!voting_within_window(Some(END + 1), START, END));
        assert!(!voting_within_window(None, START, END));
    }

    #[test]
    fn test_eligible_vote() {
        assert!(Fixture::new(Some(START + 60)).check().is_ok());
    }

    #[test]
    fn test_vote_outside_window_is_rejected() {
        let err = Fixture::new(Some(END + 60)).check().unwrap_err();
        assert_eq!(err, ErrorCode::VoteOutsideEligibilityWindow.into());
    }

    #[test]
    fn test_proposal_that_never_voted_is_rejected() {
        let err = Fixture::new(None).check().unwrap_err();
        assert_eq!(err, ErrorCode::VoteOutsideEligibilityWindow.into());
    }

    #[test]
    fn test_foreign_governance_is_rejected() {
        let mut fixture = Fixture::new(Some(START));
        fixture.proposal.governance = Pubkey::new_unique();
        let err = fixture.check().unwrap_err();
        assert_eq!(err, ErrorCode::GovernanceMismatch.into());
    }

    #[test]
    fn test_vote_on_other_proposal_is_rejected() {
        let mut fixture = Fixture::new(Some(START));
        fixture.vote_record.proposal = Pubkey::new_unique();
        let err = fixture.check().unwrap_err();
        assert_eq!(err, ErrorCode::ProposalMismatch.into());
    }

    #[test]
    fn test_someone_elses_vote_is_rejected() {
        let mut fixture = Fixture::new(Some(START));
        fixture.claimant = Pubkey::new_unique();
        let err = fixture.check().unwrap_err();
        assert_eq!(err, ErrorCode::VoterMismatch.into());
    }
}
