use airdrop::VAULT_SEED_PREFIX;
use governance_verifier::spl_governance;
use merkle_verifier::RECEIPT_SEED_PREFIX;
use orca_verifier::whirlpool;
use solana_sdk::pubkey::Pubkey;

use crate::{Policy, ProgramIds};

/// Every address a campaign needs, derived from its seed and policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampaignAddresses {
    pub policy: Policy,
    pub verifier_program: Pubkey,
    pub airdrop_state: Pubkey,
    pub vault: Pubkey,
    pub verifier_state: Pubkey,
    /// The verifier's CPI authority, bound into the AirdropState at configure time.
    pub signature: Pubkey,
}

#[derive(Debug, Clone, Default)]
pub struct AddressFinder {
    pub program_ids: ProgramIds,
}

impl AddressFinder {
    pub fn new(program_ids: ProgramIds) -> Self {
        Self { program_ids }
    }

    pub fn find_airdrop_state_address(&self, seed: &[u8; 32]) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[seed.as_ref()], &self.program_ids.airdrop)
    }

    pub fn find_vault_address(&self, airdrop_state: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[VAULT_SEED_PREFIX, airdrop_state.as_ref()],
            &self.program_ids.airdrop,
        )
    }

    pub fn find_verifier_state_address(
        &self,
        policy: Policy,
        airdrop_state: &Pubkey,
    ) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[airdrop_state.as_ref()],
            &policy.program_id(&self.program_ids),
        )
    }

    pub fn find_signature_address(&self, policy: Policy, verifier_state: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[verifier_state.as_ref()],
            &policy.program_id(&self.program_ids),
        )
    }

    /// `["Receipt", verifier_state, key]` under the policy's program.
    pub fn find_receipt_address(
        &self,
        policy: Policy,
        verifier_state: &Pubkey,
        key: &[u8],
    ) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[RECEIPT_SEED_PREFIX, verifier_state.as_ref(), key],
            &policy.program_id(&self.program_ids),
        )
    }

    pub fn find_merkle_receipt_address(&self, verifier_state: &Pubkey, index: u64) -> (Pubkey, u8) {
        self.find_receipt_address(Policy::Merkle, verifier_state, &index.to_le_bytes())
    }

    pub fn find_governance_receipt_address(
        &self,
        verifier_state: &Pubkey,
        vote_record: &Pubkey,
    ) -> (Pubkey, u8) {
        self.find_receipt_address(Policy::Governance, verifier_state, vote_record.as_ref())
    }

    pub fn find_orca_receipt_address(
        &self,
        verifier_state: &Pubkey,
        position: &Pubkey,
    ) -> (Pubkey, u8) {
        self.find_receipt_address(Policy::Orca, verifier_state, position.as_ref())
    }

    pub fn find_position_address(&self, position_mint: &Pubkey) -> (Pubkey, u8) {
        whirlpool::find_position_address(&self.program_ids.whirlpool_program, position_mint)
    }

    pub fn find_token_owner_record_address(
        &self,
        governance_program: &Pubkey,
        realm: &Pubkey,
        governing_token_mint: &Pubkey,
        governing_token_owner: &Pubkey,
    ) -> (Pubkey, u8) {
        spl_governance::find_token_owner_record_address(
            governance_program,
            realm,
            governing_token_mint,
            governing_token_owner,
        )
    }

    pub fn find_vote_record_address(
        &self,
        governance_program: &Pubkey,
        proposal: &Pubkey,
        token_owner_record: &Pubkey,
    ) -> (Pubkey, u8) {
        spl_governance::find_vote_record_address(governance_program, proposal, token_owner_record)
    }

    pub fn find_associated_token_address(&self, owner: &Pubkey, mint: &Pubkey) -> Pubkey {
        Pubkey::find_program_address(
            &[
                owner.as_ref(),
                self.program_ids.token_program.as_ref(),
                mint.as_ref(),
            ],
            &self.program_ids.associated_token_program,
        )
        .0
    }

    pub fn campaign(&self, seed: &[u8; 32], policy: Policy) -> CampaignAddresses {
        let (airdrop_state, _) = self.find_airdrop_state_address(seed);
        let (vault, _) = self.find_vault_address(&airdrop_state);
        let (verifier_state, _) = self.find_verifier_state_address(policy, &airdrop_state);
        let (signature, _) = self.find_signature_address(policy, &verifier_state);

        CampaignAddresses {
            policy,
            verifier_program: policy.program_id(&self.program_ids),
            airdrop_state,
            vault,
            verifier_state,
            signature,
        }
    }
}
