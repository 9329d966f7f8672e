#![cfg(feature = "test-sbf")]

use airdrop_protocol_sdk::{ClaimProof, VerifierConfig};
use airdrop_protocol_testing::TestFixture;
use solana_signer::Signer;

const SEED: [u8; 32] = [1; 32];

/// Deposit 1,000,000, claim 1,000 back into the source account, then close.
#[tokio::test]
async fn test_basic_claim_to_source_recovers_full_deposit() {
    let mut test = TestFixture::new(1_000_000).unwrap();
    test.configure(SEED, 1_000_000, VerifierConfig::Basic)
        .expect("configure should succeed");
    assert_eq!(test.token_balance(&test.depositor_token_account), 0);

    let depositor = test.depositor.insecure_clone();
    let source = test.depositor_token_account;
    test.claim_into(&depositor, SEED, 1_000, ClaimProof::Basic, source)
        .expect("claim should succeed");

    assert_eq!(test.token_balance(&source), 1_000);
    assert_eq!(test.vault_balance(&SEED), 999_000);

    test.close(&depositor, SEED).expect("close should succeed");

    assert_eq!(test.token_balance(&source), 1_000_000);
}

/// Deposit 1,000,000, let a third-party claimant take 1,000, then close.
///
/// **Test flow:**
/// 1. Configure a Basic airdrop funded with the full supply
/// 2. Claim 1,000 into a fresh wallet's associated token account
/// 3. Close, recovering the remainder to the depositor
/// 4. Verify the airdrop state is marked closed and the vault is gone
#[tokio::test]
async fn test_basic_claim_and_close() {
    let mut test = TestFixture::new(1_000_000).unwrap();

    // 1. Configure
    test.configure(SEED, 1_000_000, VerifierConfig::Basic)
        .expect("configure should succeed");

    let campaign = test.campaign(&SEED, &VerifierConfig::Basic);
    let state = test.fetch_airdrop_state(&SEED).expect("airdrop state");
    assert_eq!(state.verifier_signature, campaign.signature);
    assert_eq!(state.vault, campaign.vault);
    assert_eq!(state.mint, test.mint);
    assert_eq!(test.vault_balance(&SEED), 1_000_000);
    assert_eq!(test.token_balance(&test.depositor_token_account), 0);

    // 2. Claim
    let claimant = test.new_wallet();
    test.claim(&claimant, SEED, 1_000, ClaimProof::Basic)
        .expect("claim should succeed");

    assert_eq!(test.claimant_balance(&claimant.pubkey()), 1_000);
    assert_eq!(test.vault_balance(&SEED), 999_000);

    // 3. Close
    let depositor = test.depositor.insecure_clone();
    test.close(&depositor, SEED).expect("close should succeed");

    assert_eq!(test.token_balance(&test.depositor_token_account), 999_000);
    assert_eq!(test.claimant_balance(&claimant.pubkey()), 1_000);

    // 4. Terminal
    let state = test.fetch_airdrop_state(&SEED).expect("airdrop state");
    assert!(state.closed);
    assert!(!test.account_exists(&campaign.vault));
}

#[tokio::test]
async fn test_claim_after_close_fails() {
    let mut test = TestFixture::new(5_000).unwrap();
    test.configure(SEED, 5_000, VerifierConfig::Basic).unwrap();

    let depositor = test.depositor.insecure_clone();
    test.close(&depositor, SEED).unwrap();

    let claimant = test.new_wallet();
    assert!(test.claim(&claimant, SEED, 1, ClaimProof::Basic).is_err());
    assert_eq!(test.claimant_balance(&claimant.pubkey()), 0);
}

#[tokio::test]
async fn test_seed_collision_fails() {
    let mut test = TestFixture::new(2_000).unwrap();
    test.configure(SEED, 1_000, VerifierConfig::Basic).unwrap();

    let result = test.configure(SEED, 1_000, VerifierConfig::Basic);
    assert!(result.is_err());
    assert_eq!(test.vault_balance(&SEED), 1_000);
}
