//! Read-only views of SPL Governance accounts.
//!
//! Only the leading fields this program needs are modelled. Deserialization
//! reads the prefix and ignores whatever follows, so accounts written by newer
//! governance releases still parse as long as the prefix is unchanged.

use anchor_lang::prelude::*;

pub const GOVERNANCE_SEED: &[u8] = b"governance";

/// `GovernanceAccountType` discriminants (first byte of every account).
pub const VOTE_RECORD_V2: u8 = 12;
pub const PROPOSAL_V2: u8 = 14;
pub const REALM_V2: u8 = 16;
pub const GOVERNANCE_V2: u8 = 18;

/// Byte offsets usable in `getProgramAccounts` memcmp filters.
pub const ACCOUNT_TYPE_OFFSET: usize = 0;
pub const PROPOSAL_GOVERNANCE_OFFSET: usize = 1;
pub const PROPOSAL_GOVERNING_TOKEN_MINT_OFFSET: usize = 33;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProposalState {
    Draft,
    SigningOff,
    Voting,
    Succeeded,
    Executing,
    Completed,
    Cancelled,
    Defeated,
    ExecutingWithErrors,
    Vetoed,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MultiChoiceType {
    FullWeight,
    Weighted,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteType {
    SingleChoice,
    MultiChoice {
        choice_type: MultiChoiceType,
        min_voter_options: u8,
        max_voter_options: u8,
        max_winning_options: u8,
    },
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionVoteResult {
    None,
    Succeeded,
    Defeated,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProposalOption {
    pub label: String,
    pub vote_weight: u64,
    pub vote_result: OptionVoteResult,
    pub transactions_executed_count: u16,
    pub transactions_count: u16,
    pub transactions_next_index: u16,
}

/// `ProposalV2` through `voting_at_slot`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProposalV2 {
    pub account_type: u8,
    pub governance: Pubkey,
    pub governing_token_mint: Pubkey,
    pub state: ProposalState,
    pub token_owner_record: Pubkey,
    pub signatories_count: u8,
    pub signatories_signed_off_count: u8,
    pub vote_type: VoteType,
    pub options: Vec<ProposalOption>,
    pub deny_vote_weight: Option<u64>,
    pub reserved1: u8,
    pub abstain_vote_weight: Option<u64>,
    pub start_voting_at: Option<i64>,
    pub draft_at: i64,
    pub signing_off_at: Option<i64>,
    pub voting_at: Option<i64>,
    pub voting_at_slot: Option<u64>,
}

/// `VoteRecordV2` through `voter_weight`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct VoteRecordV2 {
    pub account_type: u8,
    pub proposal: Pubkey,
    pub governing_token_owner: Pubkey,
    pub is_relinquished: bool,
    pub voter_weight: u64,
}

/// `GovernanceV2` through `realm`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct GovernanceV2 {
    pub account_type: u8,
    pub realm: Pubkey,
}

/// `RealmV2` through `community_mint`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RealmV2 {
    pub account_type: u8,
    pub community_mint: Pubkey,
}

fn unpack_prefix<T: AnchorDeserialize>(data: &[u8]) -> Option<T> {
    let mut reader = data;
    T::deserialize(&mut reader).ok()
}

impl ProposalV2 {
    pub fn unpack(data: &[u8]) -> Option<Self> {
        unpack_prefix::<Self>(data).filter(|p| p.account_type == PROPOSAL_V2)
    }
}

impl VoteRecordV2 {
    pub fn unpack(data: &[u8]) -> Option<Self> {
        unpack_prefix::<Self>(data).filter(|v| v.account_type == VOTE_RECORD_V2)
    }
}

impl GovernanceV2 {
    pub fn unpack(data: &[u8]) -> Option<Self> {
        unpack_prefix::<Self>(data).filter(|g| g.account_type == GOVERNANCE_V2)
    }
}

impl RealmV2 {
    pub fn unpack(data: &[u8]) -> Option<Self> {
        unpack_prefix::<Self>(data).filter(|r| r.account_type == REALM_V2)
    }
}

/// `["governance", realm, governing_token_mint, governing_token_owner]`
pub fn find_token_owner_record_address(
    governance_program: &Pubkey,
    realm: &Pubkey,
    governing_token_mint: &Pubkey,
    governing_token_owner: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            GOVERNANCE_SEED,
            realm.as_ref(),
            governing_token_mint.as_ref(),
            governing_token_owner.as_ref(),
        ],
        governance_program,
    )
}

/// `["governance", proposal, token_owner_record]`
pub fn find_vote_record_address(
    governance_program: &Pubkey,
    proposal: &Pubkey,
    token_owner_record: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            GOVERNANCE_SEED,
            proposal.as_ref(),
            token_owner_record.as_ref(),
        ],
        governance_program,
    )
}
