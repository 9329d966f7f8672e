#![cfg(feature = "test-sbf")]

use airdrop_protocol_sdk::{build_orca_init_receipt_ix, ClaimProof, VerifierConfig};
use airdrop_protocol_testing::{assert_custom_error, error_code, TestFixture};
use orca_verifier::whirlpool::{Position, PositionRewardInfo, WHIRLPOOL_PROGRAM_ID};
use orca_verifier::OrcaReceipt;
use solana_account::Account;
use solana_keypair::Keypair;
use solana_pubkey::Pubkey;
use solana_signer::Signer;

const SEED: [u8; 32] = [6; 32];
const REWARD_INDEX: u8 = 1;
const ONE: u128 = 1 << 64;
const LIQUIDITY: u128 = 1_000;

struct OrcaAirdrop {
    test: TestFixture,
    pool: Pubkey,
    owner: Keypair,
    position: Pubkey,
    position_mint: Pubkey,
    position_token_account: Pubkey,
}

impl OrcaAirdrop {
    fn new() -> Self {
        let mut test = TestFixture::new(100_000).unwrap();
        let pool = Pubkey::new_unique();
        test.configure(
            SEED,
            100_000,
            VerifierConfig::Orca {
                pool,
                reward_index: REWARD_INDEX,
            },
        )
        .unwrap();

        let owner = test.new_wallet();
        let (position_mint, position_token_account) =
            test.mint_new_token_to(&owner.pubkey(), 0, 1).unwrap();
        let (position, _) = test.address_finder.find_position_address(&position_mint);

        let mut airdrop = Self {
            test,
            pool,
            owner,
            position,
            position_mint,
            position_token_account,
        };
        airdrop.set_reward_checkpoint(5 * ONE);
        airdrop
    }

    fn set_reward_checkpoint(&mut self, checkpoint: u128) {
        let mut reward_infos = [PositionRewardInfo::default(); 3];
        reward_infos[REWARD_INDEX as usize].growth_inside_checkpoint = checkpoint;

        let position = Position {
            whirlpool: self.pool,
            position_mint: self.position_mint,
            liquidity: LIQUIDITY,
            tick_lower_index: -128,
            tick_upper_index: 128,
            fee_growth_checkpoint_a: 0,
            fee_owed_a: 0,
            fee_growth_checkpoint_b: 0,
            fee_owed_b: 0,
            reward_infos,
        };
        self.test.set_account(
            self.position,
            Account {
                lamports: 10_000_000,
                data: position.pack(),
                owner: WHIRLPOOL_PROGRAM_ID,
                executable: false,
                rent_epoch: 0,
            },
        );
    }

    fn init_receipt(&mut self) {
        let (ix, _, _) = build_orca_init_receipt_ix(
            &self.test.address_finder,
            &self.owner.pubkey(),
            SEED,
            &self.position,
        )
        .unwrap();
        let owner = self.owner.insecure_clone();
        self.test
            .send_instructions(&[ix], &owner)
            .expect("init_receipt should succeed");
    }

    fn proof(&self, receipt_exists: bool) -> ClaimProof {
        ClaimProof::Orca {
            position: self.position,
            position_token_account: self.position_token_account,
            receipt_exists,
        }
    }

    fn receipt(&self) -> Option<OrcaReceipt> {
        let campaign = self.test.address_finder.campaign(&SEED, airdrop_protocol_sdk::Policy::Orca);
        let (address, _) = self
            .test
            .address_finder
            .find_orca_receipt_address(&campaign.verifier_state, &self.position);
        self.test.fetch_anchor_account(&address)
    }
}

/// Rewards accrue from the receipt checkpoint; each claim advances it.
#[tokio::test]
async fn test_orca_claims_accrued_rewards() {
    let mut airdrop = OrcaAirdrop::new();
    airdrop.init_receipt();

    let receipt = airdrop.receipt().expect("receipt should exist");
    assert_eq!(receipt.reward_checkpoint, 5 * ONE);
    assert_eq!(receipt.total_claimed, 0);

    // Three tokens of growth per unit of liquidity.
    airdrop.set_reward_checkpoint(8 * ONE);
    let owner = airdrop.owner.insecure_clone();
    let proof = airdrop.proof(true);
    airdrop
        .test
        .claim(&owner, SEED, 0, proof)
        .expect("claim should succeed");

    assert_eq!(airdrop.test.claimant_balance(&owner.pubkey()), 3_000);
    let receipt = airdrop.receipt().unwrap();
    assert_eq!(receipt.reward_checkpoint, 8 * ONE);
    assert_eq!(receipt.total_claimed, 3_000);

    // Nothing new since the last claim.
    let proof = airdrop.proof(true);
    let result = airdrop.test.claim(&owner, SEED, 0, proof);
    assert_custom_error(&result, error_code(orca_verifier::ErrorCode::NothingToClaim));
}

#[tokio::test]
async fn test_orca_init_receipt_is_idempotent() {
    let mut airdrop = OrcaAirdrop::new();
    airdrop.init_receipt();

    airdrop.set_reward_checkpoint(9 * ONE);
    airdrop.init_receipt();

    assert_eq!(airdrop.receipt().unwrap().reward_checkpoint, 5 * ONE);
}

#[tokio::test]
async fn test_orca_fresh_receipt_has_nothing_to_claim() {
    let mut airdrop = OrcaAirdrop::new();
    let owner = airdrop.owner.insecure_clone();

    let proof = airdrop.proof(false);
    let result = airdrop.test.claim(&owner, SEED, 0, proof);

    assert_custom_error(&result, error_code(orca_verifier::ErrorCode::NothingToClaim));
    assert!(airdrop.receipt().is_none());
}

#[tokio::test]
async fn test_orca_requires_position_nft() {
    let mut airdrop = OrcaAirdrop::new();
    airdrop.init_receipt();
    airdrop.set_reward_checkpoint(8 * ONE);

    // A different wallet presents the owner's token account.
    let thief = airdrop.test.new_wallet();
    let proof = airdrop.proof(true);
    let result = airdrop.test.claim(&thief, SEED, 0, proof);

    assert_custom_error(
        &result,
        error_code(orca_verifier::ErrorCode::NotPositionOwner),
    );
    assert_eq!(airdrop.test.vault_balance(&SEED), 100_000);
}
