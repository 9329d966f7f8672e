use governance_verifier::spl_governance::{
    self, GovernanceV2, ProposalV2, RealmV2, VoteRecordV2, ACCOUNT_TYPE_OFFSET, PROPOSAL_V2,
    PROPOSAL_GOVERNANCE_OFFSET, PROPOSAL_GOVERNING_TOKEN_MINT_OFFSET,
};
use governance_verifier::voting_within_window;
use solana_sdk::account::Account;
use solana_sdk::pubkey::Pubkey;
use tracing::{debug, info};

use crate::{AccountReader, MemcmpFilter, SdkError, SdkResult};

/// A vote that satisfies the governance verifier for one voter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibleVote {
    pub governance_program: Pubkey,
    pub proposal: Pubkey,
    pub token_owner_record: Pubkey,
    pub vote_record: Pubkey,
    pub voting_at: i64,
}

/// Finds the proposal a voter can claim against under a governance.
pub struct GovernanceLookup<'a, R: AccountReader> {
    reader: &'a R,
}

impl<'a, R: AccountReader> GovernanceLookup<'a, R> {
    pub fn new(reader: &'a R) -> Self {
        Self { reader }
    }

    /// Scans the governance's community proposals, earliest vote first, and
    /// returns the first one whose voting started inside `[start, end]` and
    /// that `voter` cast a vote on.
    pub fn find_eligible_vote(
        &self,
        governance: &Pubkey,
        voter: &Pubkey,
        eligibility_start: i64,
        eligibility_end: i64,
    ) -> SdkResult<EligibleVote> {
        self.find_eligible_votes(governance, voter, eligibility_start, eligibility_end)?
            .into_iter()
            .next()
            .ok_or(SdkError::NoEligibleProposal {
                governance: *governance,
                voter: *voter,
            })
    }

    /// Every vote `voter` cast on an in-window proposal, earliest vote first.
    pub fn find_eligible_votes(
        &self,
        governance: &Pubkey,
        voter: &Pubkey,
        eligibility_start: i64,
        eligibility_end: i64,
    ) -> SdkResult<Vec<EligibleVote>> {
        let governance_account = self.require_account(governance)?;
        let governance_program = governance_account.owner;
        let governance_data = GovernanceV2::unpack(&governance_account.data)
            .ok_or_else(|| SdkError::invalid_data(governance, "not a GovernanceV2 account"))?;

        let realm_account = self.require_account(&governance_data.realm)?;
        if realm_account.owner != governance_program {
            return Err(SdkError::invalid_data(
                &governance_data.realm,
                "realm is not owned by the governance program",
            ));
        }
        let realm = RealmV2::unpack(&realm_account.data)
            .ok_or_else(|| SdkError::invalid_data(&governance_data.realm, "not a RealmV2 account"))?;

        let (token_owner_record, _) = spl_governance::find_token_owner_record_address(
            &governance_program,
            &governance_data.realm,
            &realm.community_mint,
            voter,
        );

        let filters = [
            MemcmpFilter::new(ACCOUNT_TYPE_OFFSET, vec![PROPOSAL_V2]),
            MemcmpFilter::new(PROPOSAL_GOVERNANCE_OFFSET, governance.to_bytes()),
            MemcmpFilter::new(
                PROPOSAL_GOVERNING_TOKEN_MINT_OFFSET,
                realm.community_mint.to_bytes(),
            ),
        ];
        let mut proposals: Vec<(Pubkey, ProposalV2)> = self
            .reader
            .get_program_accounts(&governance_program, &filters)?
            .into_iter()
            .filter_map(|(address, account)| match ProposalV2::unpack(&account.data) {
                Some(proposal) => Some((address, proposal)),
                None => {
                    debug!("Skipping unparsable proposal {}", address);
                    None
                }
            })
            .collect();

        // None sorts first; those never qualify and are skipped below.
        proposals.sort_by_key(|(address, proposal)| (proposal.voting_at, *address));

        let mut votes = Vec::new();
        for (proposal_address, proposal) in &proposals {
            let Some(voting_at) = proposal.voting_at else {
                continue;
            };
            if !voting_within_window(proposal.voting_at, eligibility_start, eligibility_end) {
                debug!(
                    "Proposal {} voted at {} outside [{}, {}]",
                    proposal_address, voting_at, eligibility_start, eligibility_end
                );
                continue;
            }

            let (vote_record, _) = spl_governance::find_vote_record_address(
                &governance_program,
                proposal_address,
                &token_owner_record,
            );
            if self.is_vote_by(&vote_record, &governance_program, proposal_address, voter)? {
                info!(
                    "Voter {} is eligible through proposal {}",
                    voter, proposal_address
                );
                votes.push(EligibleVote {
                    governance_program,
                    proposal: *proposal_address,
                    token_owner_record,
                    vote_record,
                    voting_at,
                });
            }
        }

        Ok(votes)
    }

    fn require_account(&self, address: &Pubkey) -> SdkResult<Account> {
        self.reader
            .get_account(address)?
            .ok_or(SdkError::AccountNotFound(*address))
    }

    fn is_vote_by(
        &self,
        vote_record: &Pubkey,
        governance_program: &Pubkey,
        proposal: &Pubkey,
        voter: &Pubkey,
    ) -> SdkResult<bool> {
        let Some(account) = self.reader.get_account(vote_record)? else {
            return Ok(false);
        };
        if account.owner != *governance_program {
            return Ok(false);
        }
        Ok(VoteRecordV2::unpack(&account.data)
            .is_some_and(|v| v.proposal == *proposal && v.governing_token_owner == *voter))
    }
}
