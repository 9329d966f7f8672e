/*!
# Airdrop Client

Advisory reads of airdrop accounts. Nothing here is linearizable with
submission: a receipt may appear or a vault may drain between a read and the
transaction it informs. The programs enforce correctness on-chain.
*/

use airdrop::AirdropState;
use anchor_lang::AccountDeserialize;
use anchor_spl::token::TokenAccount;
use governance_verifier::GovernanceVerifierState;
use orca_verifier::OrcaReceipt;
use solana_client::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use tracing::debug;

use crate::{
    AccountReader, AddressFinder, ClaimProof, GovernanceLookup, LookupConfig, Policy,
    RpcAccountReader, SdkError, SdkResult,
};

pub struct AirdropClient<R: AccountReader> {
    reader: R,
    address_finder: AddressFinder,
}

impl AirdropClient<RpcAccountReader> {
    /// Client over JSON-RPC with confirmed commitment and default retries.
    pub fn new(rpc_url: String) -> Self {
        Self::new_with_commitment(
            rpc_url,
            AddressFinder::default(),
            CommitmentConfig::confirmed(),
            LookupConfig::default(),
        )
    }

    pub fn new_with_commitment(
        rpc_url: String,
        address_finder: AddressFinder,
        commitment: CommitmentConfig,
        lookup_config: LookupConfig,
    ) -> Self {
        let rpc_client = RpcClient::new_with_commitment(rpc_url, commitment);
        Self::with_reader(RpcAccountReader::new(rpc_client, lookup_config), address_finder)
    }
}

impl<R: AccountReader> AirdropClient<R> {
    pub fn with_reader(reader: R, address_finder: AddressFinder) -> Self {
        Self {
            reader,
            address_finder,
        }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn address_finder(&self) -> &AddressFinder {
        &self.address_finder
    }

    /// Reads and deserializes an Anchor account, checking its discriminator.
    pub fn get_anchor_account<T: AccountDeserialize>(
        &self,
        address: &Pubkey,
    ) -> SdkResult<Option<T>> {
        let Some(account) = self.reader.get_account(address)? else {
            return Ok(None);
        };
        let value = T::try_deserialize(&mut account.data.as_slice())
            .map_err(|e| SdkError::invalid_data(address, e.to_string()))?;
        Ok(Some(value))
    }

    pub fn get_airdrop_state(&self, seed: &[u8; 32]) -> SdkResult<Option<AirdropState>> {
        let (address, _) = self.address_finder.find_airdrop_state_address(seed);
        self.get_anchor_account(&address)
    }

    /// `None` once the airdrop has been closed (or was never configured).
    pub fn get_vault_balance(&self, seed: &[u8; 32]) -> SdkResult<Option<u64>> {
        let (airdrop_state, _) = self.address_finder.find_airdrop_state_address(seed);
        let (vault, _) = self.address_finder.find_vault_address(&airdrop_state);
        let balance = self
            .get_anchor_account::<TokenAccount>(&vault)?
            .map(|account| account.amount);
        debug!("Vault {} balance: {:?}", vault, balance);
        Ok(balance)
    }

    pub fn receipt_exists(&self, policy: Policy, seed: &[u8; 32], key: &[u8]) -> SdkResult<bool> {
        let campaign = self.address_finder.campaign(seed, policy);
        let (receipt, _) =
            self.address_finder
                .find_receipt_address(policy, &campaign.verifier_state, key);
        Ok(self.reader.get_account(&receipt)?.is_some())
    }

    pub fn merkle_leaf_claimed(&self, seed: &[u8; 32], index: u64) -> SdkResult<bool> {
        self.receipt_exists(Policy::Merkle, seed, &index.to_le_bytes())
    }

    pub fn get_orca_receipt(
        &self,
        seed: &[u8; 32],
        position: &Pubkey,
    ) -> SdkResult<Option<OrcaReceipt>> {
        let campaign = self.address_finder.campaign(seed, Policy::Orca);
        let (receipt, _) = self
            .address_finder
            .find_orca_receipt_address(&campaign.verifier_state, position);
        self.get_anchor_account(&receipt)
    }

    /// Orca claim proof for the position minted as `position_mint`, held in
    /// the claimant's associated token account.
    pub fn orca_claim_proof(
        &self,
        seed: &[u8; 32],
        claimant: &Pubkey,
        position_mint: &Pubkey,
    ) -> SdkResult<ClaimProof> {
        let (position, _) = self.address_finder.find_position_address(position_mint);
        let position_token_account = self
            .address_finder
            .find_associated_token_address(claimant, position_mint);
        let receipt_exists = self.get_orca_receipt(seed, &position)?.is_some();

        Ok(ClaimProof::Orca {
            position,
            position_token_account,
            receipt_exists,
        })
    }

    /// Governance claim proof for `voter`, using the window stored in the
    /// airdrop's verifier state. Votes that already hold a receipt are skipped.
    pub fn governance_claim_proof(&self, seed: &[u8; 32], voter: &Pubkey) -> SdkResult<ClaimProof> {
        let campaign = self.address_finder.campaign(seed, Policy::Governance);
        let verifier_state: GovernanceVerifierState = self
            .get_anchor_account(&campaign.verifier_state)?
            .ok_or(SdkError::AccountNotFound(campaign.verifier_state))?;

        let votes = GovernanceLookup::new(&self.reader).find_eligible_votes(
            &verifier_state.governance,
            voter,
            verifier_state.eligibility_start,
            verifier_state.eligibility_end,
        )?;
        for vote in &votes {
            if self.receipt_exists(Policy::Governance, seed, vote.vote_record.as_ref())? {
                debug!("Vote {} already claimed", vote.vote_record);
                continue;
            }
            return Ok(ClaimProof::governance(&verifier_state.governance, vote));
        }

        Err(SdkError::NoEligibleProposal {
            governance: verifier_state.governance,
            voter: *voter,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use anchor_lang::{AccountSerialize, Discriminator};
    use solana_sdk::account::Account;
    use spl_token::solana_program::program_pack::Pack;
    use governance_verifier::GovernanceReceipt;
    use spl_token::state::{Account as SplAccount, AccountState};

    use super::*;
    use crate::governance_lookup::tests::{Dao, END, START};

    const SEED: [u8; 32] = [4u8; 32];

    fn anchor_account<T: AccountSerialize>(owner: Pubkey, value: &T) -> Account {
        let mut data = Vec::new();
        value.try_serialize(&mut data).unwrap();
        Account {
            lamports: 1_000_000,
            data,
            owner,
            executable: false,
            rent_epoch: 0,
        }
    }

    fn client_with(accounts: HashMap<Pubkey, Account>) -> AirdropClient<HashMap<Pubkey, Account>> {
        AirdropClient::with_reader(accounts, AddressFinder::default())
    }

    #[test]
    fn test_missing_airdrop_reads_as_none() {
        let client = client_with(HashMap::new());
        assert!(client.get_airdrop_state(&SEED).unwrap().is_none());
        assert!(client.get_vault_balance(&SEED).unwrap().is_none());
        assert!(!client.merkle_leaf_claimed(&SEED, 0).unwrap());
    }

    #[test]
    fn test_reads_airdrop_state_and_vault_balance() {
        let finder = AddressFinder::default();
        let campaign = finder.campaign(&SEED, Policy::Basic);
        let mint = Pubkey::new_unique();

        let state = AirdropState {
            vault: campaign.vault,
            vault_bump: 254,
            seed: SEED,
            close_authority: Pubkey::new_unique(),
            verifier_signature: campaign.signature,
            mint,
            bump: 255,
            closed: false,
        };

        let mut vault_data = vec![0u8; SplAccount::LEN];
        SplAccount {
            mint,
            owner: campaign.airdrop_state,
            amount: 4_200,
            state: AccountState::Initialized,
            ..Default::default()
        }
        .pack_into_slice(&mut vault_data);

        let mut accounts = HashMap::new();
        accounts.insert(campaign.airdrop_state, anchor_account(airdrop::ID, &state));
        accounts.insert(
            campaign.vault,
            Account {
                lamports: 2_039_280,
                data: vault_data,
                owner: spl_token::ID,
                executable: false,
                rent_epoch: 0,
            },
        );

        let client = client_with(accounts);
        let read = client.get_airdrop_state(&SEED).unwrap().unwrap();
        assert_eq!(read.verifier_signature, campaign.signature);
        assert_eq!(read.mint, mint);
        assert_eq!(client.get_vault_balance(&SEED).unwrap(), Some(4_200));
    }

    #[test]
    fn test_wrong_discriminator_is_invalid_data() {
        let finder = AddressFinder::default();
        let (airdrop_state, _) = finder.find_airdrop_state_address(&SEED);

        let mut data = OrcaReceipt::DISCRIMINATOR.to_vec();
        data.extend_from_slice(&[0u8; 256]);

        let mut accounts = HashMap::new();
        accounts.insert(
            airdrop_state,
            Account {
                lamports: 1,
                data,
                owner: airdrop::ID,
                executable: false,
                rent_epoch: 0,
            },
        );

        let client = client_with(accounts);
        assert!(matches!(
            client.get_airdrop_state(&SEED),
            Err(SdkError::InvalidAccountData { .. })
        ));
    }

    #[test]
    fn test_orca_claim_proof_tracks_receipt() {
        let finder = AddressFinder::default();
        let campaign = finder.campaign(&SEED, Policy::Orca);
        let claimant = Pubkey::new_unique();
        let position_mint = Pubkey::new_unique();
        let (position, _) = finder.find_position_address(&position_mint);

        let client = client_with(HashMap::new());
        let proof = client
            .orca_claim_proof(&SEED, &claimant, &position_mint)
            .unwrap();
        assert_eq!(
            proof,
            ClaimProof::Orca {
                position,
                position_token_account: finder
                    .find_associated_token_address(&claimant, &position_mint),
                receipt_exists: false,
            }
        );

        let receipt = OrcaReceipt {
            verifier_state: campaign.verifier_state,
            position,
            reward_checkpoint: 1 << 64,
            total_claimed: 10,
            last_claimed_at: 1_700_000_000,
        };
        let (receipt_address, _) =
            finder.find_orca_receipt_address(&campaign.verifier_state, &position);
        let mut accounts = HashMap::new();
        accounts.insert(receipt_address, anchor_account(orca_verifier::ID, &receipt));

        let client = client_with(accounts);
        let proof = client
            .orca_claim_proof(&SEED, &claimant, &position_mint)
            .unwrap();
        assert!(matches!(
            proof,
            ClaimProof::Orca {
                receipt_exists: true,
                ..
            }
        ));
        assert_eq!(
            client
                .get_orca_receipt(&SEED, &position)
                .unwrap()
                .unwrap()
                .total_claimed,
            10
        );
    }

    fn with_governance_verifier(dao: &mut Dao) -> AirdropClient<HashMap<Pubkey, Account>> {
        let campaign = AddressFinder::default().campaign(&SEED, Policy::Governance);
        let state = GovernanceVerifierState {
            airdrop_state: campaign.airdrop_state,
            signature_bump: 254,
            bump: 255,
            governance: dao.governance,
            eligibility_start: START,
            eligibility_end: END,
            amount_per_voter: 50,
            reserved: [0u8; 128],
        };
        dao.accounts.insert(
            campaign.verifier_state,
            anchor_account(governance_verifier::ID, &state),
        );
        client_with(dao.accounts.clone())
    }

    #[test]
    fn test_governance_proof_skips_claimed_votes() {
        let mut dao = Dao::new();
        let voter = Pubkey::new_unique();
        let first = dao.add_proposal(Some(START + 10));
        let second = dao.add_proposal(Some(START + 20));
        let first_vote = dao.add_vote(&first, &voter);
        let second_vote = dao.add_vote(&second, &voter);

        let client = with_governance_verifier(&mut dao);
        assert_eq!(
            client.governance_claim_proof(&SEED, &voter).unwrap(),
            ClaimProof::Governance {
                governance: dao.governance,
                proposal: first,
                vote_record: first_vote,
            }
        );

        let campaign = AddressFinder::default().campaign(&SEED, Policy::Governance);
        let (first_receipt, _) = AddressFinder::default()
            .find_governance_receipt_address(&campaign.verifier_state, &first_vote);
        let receipt = GovernanceReceipt {
            verifier_state: campaign.verifier_state,
            recipient: voter,
            vote_record: first_vote,
            proposal: first,
            claimed_at: START + 30,
        };
        dao.accounts.insert(
            first_receipt,
            anchor_account(governance_verifier::ID, &receipt),
        );
        let client = with_governance_verifier(&mut dao);
        assert_eq!(
            client.governance_claim_proof(&SEED, &voter).unwrap(),
            ClaimProof::Governance {
                governance: dao.governance,
                proposal: second,
                vote_record: second_vote,
            }
        );

        let (second_receipt, _) = AddressFinder::default()
            .find_governance_receipt_address(&campaign.verifier_state, &second_vote);
        dao.accounts.insert(
            second_receipt,
            anchor_account(governance_verifier::ID, &receipt),
        );
        let client = with_governance_verifier(&mut dao);
        assert!(matches!(
            client.governance_claim_proof(&SEED, &voter),
            Err(SdkError::NoEligibleProposal { .. })
        ));
    }

    #[test]
    fn test_governance_proof_requires_verifier_state() {
        let client = client_with(HashMap::new());
        let campaign = AddressFinder::default().campaign(&SEED, Policy::Governance);

        assert!(matches!(
            client.governance_claim_proof(&SEED, &Pubkey::new_unique()),
            Err(SdkError::AccountNotFound(key)) if key == campaign.verifier_state
        ));
    }
}
