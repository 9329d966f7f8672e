#![cfg(feature = "test-sbf")]

use std::collections::HashMap;

use airdrop_protocol_sdk::{ClaimProof, GovernanceLookup, VerifierConfig};
use airdrop_protocol_testing::{assert_account_in_use, assert_custom_error, error_code, TestFixture};
use anchor_lang::AnchorSerialize;
use governance_verifier::spl_governance::{
    self, GovernanceV2, ProposalState, ProposalV2, RealmV2, VoteRecordV2, VoteType, GOVERNANCE_V2,
    PROPOSAL_V2, REALM_V2, VOTE_RECORD_V2,
};
use solana_account::Account;
use solana_pubkey::Pubkey;
use solana_signer::Signer;

const SEED: [u8; 32] = [5; 32];
const START: i64 = 1_700_000_000;
const END: i64 = 1_700_604_800;
const AMOUNT_PER_VOTER: u64 = 250;

/// Governance accounts planted both in the VM and in a map the lookup reads.
struct Dao {
    program: Pubkey,
    realm: Pubkey,
    governance: Pubkey,
    community_mint: Pubkey,
    accounts: HashMap<Pubkey, Account>,
}

fn encode<T: AnchorSerialize>(value: &T) -> Vec<u8> {
    let mut data = Vec::new();
    value.serialize(&mut data).unwrap();
    data
}

impl Dao {
    fn new(test: &mut TestFixture) -> Self {
        let mut dao = Self {
            program: Pubkey::new_unique(),
            realm: Pubkey::new_unique(),
            governance: Pubkey::new_unique(),
            community_mint: Pubkey::new_unique(),
            accounts: HashMap::new(),
        };
        let governance = GovernanceV2 {
            account_type: GOVERNANCE_V2,
            realm: dao.realm,
        };
        dao.plant(test, dao.governance, encode(&governance));
        let realm = RealmV2 {
            account_type: REALM_V2,
            community_mint: dao.community_mint,
        };
        dao.plant(test, dao.realm, encode(&realm));
        dao
    }

    fn plant(&mut self, test: &mut TestFixture, address: Pubkey, data: Vec<u8>) {
        let account = Account {
            lamports: 10_000_000,
            data,
            owner: self.program,
            executable: false,
            rent_epoch: 0,
        };
        test.set_account(address, account.clone());
        self.accounts.insert(address, account);
    }

    fn proposal(&mut self, test: &mut TestFixture, voting_at: i64) -> Pubkey {
        let proposal = ProposalV2 {
            account_type: PROPOSAL_V2,
            governance: self.governance,
            governing_token_mint: self.community_mint,
            state: ProposalState::Succeeded,
            token_owner_record: Pubkey::new_unique(),
            signatories_count: 1,
            signatories_signed_off_count: 1,
            vote_type: VoteType::SingleChoice,
            options: vec![],
            deny_vote_weight: Some(0),
            reserved1: 0,
            abstain_vote_weight: None,
            start_voting_at: None,
            draft_at: START - 3_600,
            signing_off_at: Some(voting_at),
            voting_at: Some(voting_at),
            voting_at_slot: Some(1),
        };
        let address = Pubkey::new_unique();
        self.plant(test, address, encode(&proposal));
        address
    }

    fn vote(&mut self, test: &mut TestFixture, proposal: &Pubkey, voter: &Pubkey) -> Pubkey {
        let (token_owner_record, _) = spl_governance::find_token_owner_record_address(
            &self.program,
            &self.realm,
            &self.community_mint,
            voter,
        );
        let (address, _) =
            spl_governance::find_vote_record_address(&self.program, proposal, &token_owner_record);
        let record = VoteRecordV2 {
            account_type: VOTE_RECORD_V2,
            proposal: *proposal,
            governing_token_owner: *voter,
            is_relinquished: false,
            voter_weight: 1_000,
        };
        self.plant(test, address, encode(&record));
        address
    }

    fn config(&self) -> VerifierConfig {
        VerifierConfig::Governance {
            governance: self.governance,
            eligibility_start: START,
            eligibility_end: END,
            amount_per_voter: AMOUNT_PER_VOTER,
        }
    }
}

#[tokio::test]
async fn test_governance_voter_claims_once() {
    let mut test = TestFixture::new(1_000).unwrap();
    let mut dao = Dao::new(&mut test);
    test.configure(SEED, 1_000, dao.config()).unwrap();

    let voter = test.new_wallet();
    let proposal = dao.proposal(&mut test, START + 60);
    let vote_record = dao.vote(&mut test, &proposal, &voter.pubkey());

    let vote = GovernanceLookup::new(&dao.accounts)
        .find_eligible_vote(&dao.governance, &voter.pubkey(), START, END)
        .expect("voter should be eligible");
    assert_eq!(vote.vote_record, vote_record);

    let proof = ClaimProof::governance(&dao.governance, &vote);
    test.claim(&voter, SEED, 0, proof.clone())
        .expect("claim should succeed");
    assert_eq!(test.claimant_balance(&voter.pubkey()), AMOUNT_PER_VOTER);

    let replay = test.claim(&voter, SEED, 0, proof);
    assert_account_in_use(&replay);
    assert_eq!(test.vault_balance(&SEED), 1_000 - AMOUNT_PER_VOTER);
}

#[tokio::test]
async fn test_governance_vote_outside_window_rejected() {
    let mut test = TestFixture::new(1_000).unwrap();
    let mut dao = Dao::new(&mut test);
    test.configure(SEED, 1_000, dao.config()).unwrap();

    let voter = test.new_wallet();
    let proposal = dao.proposal(&mut test, END + 1);
    let vote_record = dao.vote(&mut test, &proposal, &voter.pubkey());

    let proof = ClaimProof::Governance {
        governance: dao.governance,
        proposal,
        vote_record,
    };
    let result = test.claim(&voter, SEED, 0, proof);

    assert_custom_error(
        &result,
        error_code(governance_verifier::ErrorCode::VoteOutsideEligibilityWindow),
    );
    assert_eq!(test.vault_balance(&SEED), 1_000);
}

#[tokio::test]
async fn test_governance_someone_elses_vote_rejected() {
    let mut test = TestFixture::new(1_000).unwrap();
    let mut dao = Dao::new(&mut test);
    test.configure(SEED, 1_000, dao.config()).unwrap();

    let voter = test.new_wallet();
    let impostor = test.new_wallet();
    let proposal = dao.proposal(&mut test, START + 60);
    let vote_record = dao.vote(&mut test, &proposal, &voter.pubkey());

    let proof = ClaimProof::Governance {
        governance: dao.governance,
        proposal,
        vote_record,
    };
    let result = test.claim(&impostor, SEED, 0, proof);

    assert_custom_error(
        &result,
        error_code(governance_verifier::ErrorCode::VoterMismatch),
    );
}

#[tokio::test]
async fn test_governance_zero_amount_per_voter_rejected() {
    let mut test = TestFixture::new(1_000).unwrap();
    let dao = Dao::new(&mut test);
    let config = VerifierConfig::Governance {
        governance: dao.governance,
        eligibility_start: START,
        eligibility_end: END,
        amount_per_voter: 0,
    };

    let result = test.configure(SEED, 1_000, config);

    assert_custom_error(
        &result,
        error_code(governance_verifier::ErrorCode::InvalidAmountPerVoter),
    );
    assert!(test.fetch_airdrop_state(&SEED).is_none());
    assert_eq!(test.token_balance(&test.depositor_token_account), 1_000);
}
