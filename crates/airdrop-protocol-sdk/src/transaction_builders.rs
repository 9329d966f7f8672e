/*!
# Transaction Builders

Ordered instruction batches for the three things a user does with an airdrop:
configure it, claim from it, and close it. The `build_*_ixs` functions return
instructions in the order they must execute; the `build_*_tx` variants wrap
them into a single unsigned transaction with the caller's blockhash.

No RPC calls are made here. Anything that depends on chain state (whether an
Orca receipt exists, which proposal a voter qualifies through) is passed in,
typically from [`AirdropClient`](crate::AirdropClient) or
[`GovernanceLookup`](crate::GovernanceLookup).

```ignore
let finder = AddressFinder::default();
let params = ConfigureParams {
    seed,
    depositor: depositor.pubkey(),
    close_authority: depositor.pubkey(),
    mint,
    source: depositor_ata,
    amount: 1_000_000,
    verifier: VerifierConfig::Basic,
};
let mut tx = build_configure_tx(&finder, &params, recent_blockhash)?;
tx.sign(&[&depositor], recent_blockhash);
```
*/

use airdrop_protocol_merkle::{BalanceTree, BalanceTreeError};
use solana_sdk::{
    hash::Hash, instruction::Instruction, message::Message, pubkey::Pubkey,
    transaction::Transaction,
};
use tracing::debug;

use crate::{
    build_basic_claim_ix, build_close_ix, build_configure_ix,
    build_create_associated_token_account_ix, build_fund_vault_ix, build_governance_claim_ix,
    build_merkle_claim_ix, build_orca_claim_ix, build_orca_init_receipt_ix,
    build_password_claim_ix, build_verifier_init_ix, AddressFinder, EligibleVote, Policy,
    SdkResult, VerifierConfig,
};

fn unsigned_tx(instructions: &[Instruction], payer: &Pubkey, recent_blockhash: Hash) -> Transaction {
    let message = Message::new(instructions, Some(payer));
    let mut transaction = Transaction::new_unsigned(message);
    transaction.message.recent_blockhash = recent_blockhash;
    transaction
}

// ================================================================================================
// Configure
// ================================================================================================

/// Everything needed to stand up and fund one airdrop.
#[derive(Debug, Clone)]
pub struct ConfigureParams {
    pub seed: [u8; 32],
    /// Pays rent and signs the funding transfer.
    pub depositor: Pubkey,
    pub close_authority: Pubkey,
    pub mint: Pubkey,
    /// Depositor's token account the vault is funded from.
    pub source: Pubkey,
    pub amount: u64,
    pub verifier: VerifierConfig,
}

/// `[airdrop.configure, verifier.init, token transfer into the vault]`.
///
/// The transfer is left out when `amount` is zero.
pub fn build_configure_ixs(
    address_finder: &AddressFinder,
    params: &ConfigureParams,
) -> SdkResult<Vec<Instruction>> {
    let (configure_ix, _, _) = build_configure_ix(
        address_finder,
        &params.depositor,
        &params.close_authority,
        &params.mint,
        params.seed,
        params.verifier.policy(),
    )?;
    let init_ix =
        build_verifier_init_ix(address_finder, &params.depositor, params.seed, &params.verifier)?;

    let mut instructions = vec![configure_ix, init_ix];
    if params.amount > 0 {
        instructions.push(build_fund_vault_ix(
            address_finder,
            &params.depositor,
            &params.source,
            params.seed,
            params.amount,
        )?);
    }

    debug!(
        "Built {} configure instructions for {:?} airdrop",
        instructions.len(),
        params.verifier.policy()
    );
    Ok(instructions)
}

pub fn build_configure_tx(
    address_finder: &AddressFinder,
    params: &ConfigureParams,
    recent_blockhash: Hash,
) -> SdkResult<Transaction> {
    let instructions = build_configure_ixs(address_finder, params)?;
    Ok(unsigned_tx(&instructions, &params.depositor, recent_blockhash))
}

// ================================================================================================
// Claim
// ================================================================================================

/// The policy-specific half of a claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimProof {
    Basic,
    Password {
        password: String,
    },
    Merkle {
        verification_data: Vec<u8>,
    },
    Governance {
        governance: Pubkey,
        proposal: Pubkey,
        vote_record: Pubkey,
    },
    Orca {
        position: Pubkey,
        position_token_account: Pubkey,
        /// When false, `init_receipt` is prepended to the claim.
        receipt_exists: bool,
    },
}

impl ClaimProof {
    pub fn policy(&self) -> Policy {
        match self {
            ClaimProof::Basic => Policy::Basic,
            ClaimProof::Password { .. } => Policy::Password,
            ClaimProof::Merkle { .. } => Policy::Merkle,
            ClaimProof::Governance { .. } => Policy::Governance,
            ClaimProof::Orca { .. } => Policy::Orca,
        }
    }

    /// Proof for the leaf at `index`, plus the amount that leaf entitles.
    pub fn merkle(tree: &BalanceTree, index: u64) -> SdkResult<(Self, u64)> {
        let leaf = *tree
            .leaf(index)
            .ok_or(BalanceTreeError::LeafNotFound { index })?;
        let verification_data = tree.verification_data(leaf.index, &leaf.account, leaf.amount)?;
        Ok((ClaimProof::Merkle { verification_data }, leaf.amount))
    }

    pub fn governance(governance: &Pubkey, vote: &EligibleVote) -> Self {
        ClaimProof::Governance {
            governance: *governance,
            proposal: vote.proposal,
            vote_record: vote.vote_record,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClaimParams {
    pub seed: [u8; 32],
    pub claimant: Pubkey,
    pub mint: Pubkey,
    /// Destination token account. `None` means the claimant's associated
    /// token account, created idempotently ahead of the claim.
    pub recipient: Option<Pubkey>,
    /// Ignored by Governance and Orca, which compute the amount on-chain.
    pub amount: u64,
    pub proof: ClaimProof,
}

/// `[create recipient ATA?, orca init_receipt?, verifier.claim]`.
pub fn build_claim_ixs(
    address_finder: &AddressFinder,
    params: &ClaimParams,
) -> SdkResult<Vec<Instruction>> {
    let mut instructions = Vec::with_capacity(3);

    let recipient = match params.recipient {
        Some(recipient) => recipient,
        None => {
            instructions.push(build_create_associated_token_account_ix(
                address_finder,
                &params.claimant,
                &params.claimant,
                &params.mint,
            ));
            address_finder.find_associated_token_address(&params.claimant, &params.mint)
        }
    };

    let claimant = &params.claimant;
    let seed = params.seed;
    let claim_ix = match &params.proof {
        ClaimProof::Basic => {
            build_basic_claim_ix(address_finder, claimant, &recipient, seed, params.amount)?.0
        }
        ClaimProof::Password { password } => {
            build_password_claim_ix(
                address_finder,
                claimant,
                &recipient,
                seed,
                params.amount,
                password.clone(),
            )?
            .0
        }
        ClaimProof::Merkle { verification_data } => {
            build_merkle_claim_ix(
                address_finder,
                claimant,
                &recipient,
                seed,
                params.amount,
                verification_data.clone(),
            )?
            .0
        }
        ClaimProof::Governance {
            governance,
            proposal,
            vote_record,
        } => {
            build_governance_claim_ix(
                address_finder,
                claimant,
                &recipient,
                seed,
                governance,
                proposal,
                vote_record,
            )?
            .0
        }
        ClaimProof::Orca {
            position,
            position_token_account,
            receipt_exists,
        } => {
            if !receipt_exists {
                let (init_receipt_ix, _, _) =
                    build_orca_init_receipt_ix(address_finder, claimant, seed, position)?;
                instructions.push(init_receipt_ix);
            }
            build_orca_claim_ix(
                address_finder,
                claimant,
                &recipient,
                seed,
                position,
                position_token_account,
            )?
            .0
        }
    };
    instructions.push(claim_ix);

    debug!(
        "Built {} claim instructions for {:?} airdrop",
        instructions.len(),
        params.proof.policy()
    );
    Ok(instructions)
}

pub fn build_claim_tx(
    address_finder: &AddressFinder,
    params: &ClaimParams,
    recent_blockhash: Hash,
) -> SdkResult<Transaction> {
    let instructions = build_claim_ixs(address_finder, params)?;
    Ok(unsigned_tx(&instructions, &params.claimant, recent_blockhash))
}

// ================================================================================================
// Close
// ================================================================================================

pub fn build_close_tx(
    address_finder: &AddressFinder,
    authority: &Pubkey,
    recovery: &Pubkey,
    seed: [u8; 32],
    recent_blockhash: Hash,
) -> SdkResult<Transaction> {
    let (close_ix, _, _) = build_close_ix(address_finder, authority, recovery, seed)?;
    Ok(unsigned_tx(&[close_ix], authority, recent_blockhash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SdkError;
    use airdrop_protocol_merkle::verify_balance_proof;
    use merkle_verifier::{BalanceLeaf, VerificationData};

    const SEED: [u8; 32] = [9u8; 32];

    fn configure_params(amount: u64, verifier: VerifierConfig) -> ConfigureParams {
        let depositor = Pubkey::new_unique();
        ConfigureParams {
            seed: SEED,
            depositor,
            close_authority: depositor,
            mint: Pubkey::new_unique(),
            source: Pubkey::new_unique(),
            amount,
            verifier,
        }
    }

    fn claim_params(recipient: Option<Pubkey>, proof: ClaimProof) -> ClaimParams {
        ClaimParams {
            seed: SEED,
            claimant: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            recipient,
            amount: 100,
            proof,
        }
    }

    #[test]
    fn test_configure_batch_order() {
        let finder = AddressFinder::default();
        let params = configure_params(1_000_000, VerifierConfig::Merkle { root: [5u8; 32] });

        let ixs = build_configure_ixs(&finder, &params).unwrap();

        assert_eq!(ixs.len(), 3);
        assert_eq!(ixs[0].program_id, airdrop::ID);
        assert_eq!(ixs[1].program_id, merkle_verifier::ID);
        assert_eq!(ixs[2].program_id, spl_token::ID);
    }

    #[test]
    fn test_configure_without_funding_skips_transfer() {
        let finder = AddressFinder::default();
        let params = configure_params(0, VerifierConfig::Basic);

        let ixs = build_configure_ixs(&finder, &params).unwrap();
        assert_eq!(ixs.len(), 2);
    }

    #[test]
    fn test_configure_tx_is_paid_by_depositor() {
        let finder = AddressFinder::default();
        let params = configure_params(10, VerifierConfig::password("open sesame"));
        let blockhash = Hash::new_unique();

        let tx = build_configure_tx(&finder, &params, blockhash).unwrap();

        assert_eq!(tx.message.account_keys[0], params.depositor);
        assert_eq!(tx.message.recent_blockhash, blockhash);
        assert_eq!(tx.message.instructions.len(), 3);
        assert_eq!(tx.message.header.num_required_signatures, 1);
    }

    #[test]
    fn test_claim_creates_associated_account_when_recipient_omitted() {
        let finder = AddressFinder::default();
        let params = claim_params(None, ClaimProof::Basic);

        let ixs = build_claim_ixs(&finder, &params).unwrap();

        assert_eq!(ixs.len(), 2);
        assert_eq!(ixs[0].program_id, spl_associated_token_account::ID);
        let ata = finder.find_associated_token_address(&params.claimant, &params.mint);
        assert_eq!(ixs[1].program_id, basic_verifier::ID);
        assert!(ixs[1].accounts.iter().any(|meta| meta.pubkey == ata));
    }

    #[test]
    fn test_claim_with_explicit_recipient_is_single_instruction() {
        let finder = AddressFinder::default();
        let params = claim_params(
            Some(Pubkey::new_unique()),
            ClaimProof::Password {
                password: "hunter2".to_string(),
            },
        );

        let ixs = build_claim_ixs(&finder, &params).unwrap();
        assert_eq!(ixs.len(), 1);
        assert_eq!(ixs[0].program_id, password_verifier::ID);
    }

    #[test]
    fn test_orca_claim_initializes_missing_receipt() {
        let finder = AddressFinder::default();
        let proof = |receipt_exists| ClaimProof::Orca {
            position: Pubkey::new_unique(),
            position_token_account: Pubkey::new_unique(),
            receipt_exists,
        };

        let fresh = build_claim_ixs(&finder, &claim_params(Some(Pubkey::new_unique()), proof(false)))
            .unwrap();
        assert_eq!(fresh.len(), 2);
        assert_eq!(fresh[0].program_id, orca_verifier::ID);
        assert_eq!(fresh[1].program_id, orca_verifier::ID);
        assert_ne!(fresh[0].data, fresh[1].data);

        let known = build_claim_ixs(&finder, &claim_params(Some(Pubkey::new_unique()), proof(true)))
            .unwrap();
        assert_eq!(known.len(), 1);
    }

    #[test]
    fn test_merkle_proof_from_tree_verifies() {
        let claimant = Pubkey::new_unique();
        let tree = BalanceTree::from_balances(&[
            (Pubkey::new_unique(), 100),
            (claimant, 101),
            (Pubkey::new_unique(), 102),
        ])
        .unwrap();

        let (proof, amount) = ClaimProof::merkle(&tree, 1).unwrap();
        assert_eq!(amount, 101);

        let ClaimProof::Merkle { verification_data } = proof else {
            panic!("expected a merkle proof");
        };
        let data = VerificationData::parse(&verification_data).unwrap();
        assert_eq!(data.index, 1);
        assert!(verify_balance_proof(
            &data.proof,
            &tree.root(),
            &BalanceLeaf::new(1, claimant, 101)
        ));
    }

    #[test]
    fn test_merkle_proof_for_unknown_index() {
        let tree = BalanceTree::from_balances(&[(Pubkey::new_unique(), 1)]).unwrap();
        assert!(matches!(
            ClaimProof::merkle(&tree, 7),
            Err(SdkError::BalanceTree(_))
        ));
    }

    #[test]
    fn test_close_tx_signed_by_authority() {
        let finder = AddressFinder::default();
        let authority = Pubkey::new_unique();
        let recovery = Pubkey::new_unique();

        let tx = build_close_tx(&finder, &authority, &recovery, SEED, Hash::default()).unwrap();

        assert_eq!(tx.message.account_keys[0], authority);
        assert_eq!(tx.message.instructions.len(), 1);
    }
}
