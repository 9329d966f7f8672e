use anchor_lang::{InstructionData as _, ToAccountMetas as _};
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;

use crate::{AddressFinder, CampaignAddresses, Policy, SdkError, SdkResult, VerifierConfig};

pub fn build_configure_ix(
    address_finder: &AddressFinder,
    payer: &Pubkey,
    close_authority: &Pubkey,
    mint: &Pubkey,
    seed: [u8; 32],
    policy: Policy,
) -> SdkResult<(
    Instruction,
    airdrop::accounts::Configure,
    airdrop::instruction::Configure,
)> {
    let campaign = address_finder.campaign(&seed, policy);

    let ix_accounts = airdrop::accounts::Configure {
        payer: *payer,
        close_authority: *close_authority,
        airdrop_state: campaign.airdrop_state,
        mint: *mint,
        vault: campaign.vault,
        token_program: address_finder.program_ids.token_program,
        system_program: address_finder.program_ids.system_program,
    };

    let ix_data = airdrop::instruction::Configure {
        seed,
        verifier_signature: campaign.signature,
    };

    let ix = Instruction {
        program_id: address_finder.program_ids.airdrop,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_close_ix(
    address_finder: &AddressFinder,
    authority: &Pubkey,
    recovery: &Pubkey,
    seed: [u8; 32],
) -> SdkResult<(
    Instruction,
    airdrop::accounts::CloseAirdrop,
    airdrop::instruction::Close,
)> {
    let (airdrop_state, _) = address_finder.find_airdrop_state_address(&seed);
    let (vault, _) = address_finder.find_vault_address(&airdrop_state);

    let ix_accounts = airdrop::accounts::CloseAirdrop {
        authority: *authority,
        airdrop_state,
        vault,
        recovery: *recovery,
        token_program: address_finder.program_ids.token_program,
    };

    let ix_data = airdrop::instruction::Close {};

    let ix = Instruction {
        program_id: address_finder.program_ids.airdrop,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

/// SPL token transfer from the depositor into the campaign vault.
pub fn build_fund_vault_ix(
    address_finder: &AddressFinder,
    depositor: &Pubkey,
    source: &Pubkey,
    seed: [u8; 32],
    amount: u64,
) -> SdkResult<Instruction> {
    let (airdrop_state, _) = address_finder.find_airdrop_state_address(&seed);
    let (vault, _) = address_finder.find_vault_address(&airdrop_state);

    spl_token::instruction::transfer(
        &address_finder.program_ids.token_program,
        source,
        &vault,
        depositor,
        &[],
        amount,
    )
    .map_err(|e| SdkError::InstructionBuilder(format!("token transfer: {}", e)))
}

pub fn build_create_associated_token_account_ix(
    address_finder: &AddressFinder,
    payer: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Instruction {
    spl_associated_token_account::instruction::create_associated_token_account_idempotent(
        payer,
        owner,
        mint,
        &address_finder.program_ids.token_program,
    )
}

// ================================================================================================
// Verifier init
// ================================================================================================

/// The `init` instruction of whichever verifier `config` describes.
pub fn build_verifier_init_ix(
    address_finder: &AddressFinder,
    payer: &Pubkey,
    seed: [u8; 32],
    config: &VerifierConfig,
) -> SdkResult<Instruction> {
    let campaign = address_finder.campaign(&seed, config.policy());

    let (accounts, data) = match config {
        VerifierConfig::Basic => (
            basic_verifier::accounts::Init {
                payer: *payer,
                airdrop_state: campaign.airdrop_state,
                verifier_state: campaign.verifier_state,
                signature: campaign.signature,
                system_program: address_finder.program_ids.system_program,
            }
            .to_account_metas(None),
            basic_verifier::instruction::Init { seed }.data(),
        ),
        VerifierConfig::Password { password_hash } => (
            password_verifier::accounts::Init {
                payer: *payer,
                airdrop_state: campaign.airdrop_state,
                verifier_state: campaign.verifier_state,
                signature: campaign.signature,
                system_program: address_finder.program_ids.system_program,
            }
            .to_account_metas(None),
            password_verifier::instruction::Init {
                seed,
                password_hash: *password_hash,
            }
            .data(),
        ),
        VerifierConfig::Merkle { root } => (
            merkle_verifier::accounts::Init {
                payer: *payer,
                airdrop_state: campaign.airdrop_state,
                verifier_state: campaign.verifier_state,
                signature: campaign.signature,
                system_program: address_finder.program_ids.system_program,
            }
            .to_account_metas(None),
            merkle_verifier::instruction::Init { seed, root: *root }.data(),
        ),
        VerifierConfig::Governance {
            governance,
            eligibility_start,
            eligibility_end,
            amount_per_voter,
        } => (
            governance_verifier::accounts::Init {
                payer: *payer,
                airdrop_state: campaign.airdrop_state,
                verifier_state: campaign.verifier_state,
                signature: campaign.signature,
                system_program: address_finder.program_ids.system_program,
            }
            .to_account_metas(None),
            governance_verifier::instruction::Init {
                seed,
                governance: *governance,
                eligibility_start: *eligibility_start,
                eligibility_end: *eligibility_end,
                amount_per_voter: *amount_per_voter,
            }
            .data(),
        ),
        VerifierConfig::Orca { pool, reward_index } => (
            orca_verifier::accounts::Init {
                payer: *payer,
                airdrop_state: campaign.airdrop_state,
                verifier_state: campaign.verifier_state,
                signature: campaign.signature,
                system_program: address_finder.program_ids.system_program,
            }
            .to_account_metas(None),
            orca_verifier::instruction::Init {
                seed,
                pool: *pool,
                reward_index: *reward_index,
            }
            .data(),
        ),
    };

    Ok(Instruction {
        program_id: campaign.verifier_program,
        accounts,
        data,
    })
}

// ================================================================================================
// Verifier claims
// ================================================================================================

/// Accounts every verifier `claim` shares.
struct ClaimAccounts {
    campaign: CampaignAddresses,
    claimant: Pubkey,
    recipient: Pubkey,
    airdrop_program: Pubkey,
    token_program: Pubkey,
    system_program: Pubkey,
}

impl ClaimAccounts {
    fn new(
        address_finder: &AddressFinder,
        policy: Policy,
        seed: &[u8; 32],
        claimant: &Pubkey,
        recipient: &Pubkey,
    ) -> Self {
        Self {
            campaign: address_finder.campaign(seed, policy),
            claimant: *claimant,
            recipient: *recipient,
            airdrop_program: address_finder.program_ids.airdrop,
            token_program: address_finder.program_ids.token_program,
            system_program: address_finder.program_ids.system_program,
        }
    }
}

pub fn build_basic_claim_ix(
    address_finder: &AddressFinder,
    claimant: &Pubkey,
    recipient: &Pubkey,
    seed: [u8; 32],
    amount: u64,
) -> SdkResult<(
    Instruction,
    basic_verifier::accounts::Claim,
    basic_verifier::instruction::Claim,
)> {
    let common = ClaimAccounts::new(address_finder, Policy::Basic, &seed, claimant, recipient);

    let ix_accounts = basic_verifier::accounts::Claim {
        claimant: common.claimant,
        verifier_state: common.campaign.verifier_state,
        airdrop_state: common.campaign.airdrop_state,
        vault: common.campaign.vault,
        recipient: common.recipient,
        signature: common.campaign.signature,
        airdrop_program: common.airdrop_program,
        token_program: common.token_program,
    };

    let ix_data = basic_verifier::instruction::Claim { amount };

    let ix = Instruction {
        program_id: common.campaign.verifier_program,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_password_claim_ix(
    address_finder: &AddressFinder,
    claimant: &Pubkey,
    recipient: &Pubkey,
    seed: [u8; 32],
    amount: u64,
    password: String,
) -> SdkResult<(
    Instruction,
    password_verifier::accounts::Claim,
    password_verifier::instruction::Claim,
)> {
    let common = ClaimAccounts::new(address_finder, Policy::Password, &seed, claimant, recipient);

    let ix_accounts = password_verifier::accounts::Claim {
        claimant: common.claimant,
        verifier_state: common.campaign.verifier_state,
        airdrop_state: common.campaign.airdrop_state,
        vault: common.campaign.vault,
        recipient: common.recipient,
        signature: common.campaign.signature,
        airdrop_program: common.airdrop_program,
        token_program: common.token_program,
    };

    let ix_data = password_verifier::instruction::Claim { amount, password };

    let ix = Instruction {
        program_id: common.campaign.verifier_program,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_merkle_claim_ix(
    address_finder: &AddressFinder,
    claimant: &Pubkey,
    recipient: &Pubkey,
    seed: [u8; 32],
    amount: u64,
    verification_data: Vec<u8>,
) -> SdkResult<(
    Instruction,
    merkle_verifier::accounts::Claim,
    merkle_verifier::instruction::Claim,
)> {
    let common = ClaimAccounts::new(address_finder, Policy::Merkle, &seed, claimant, recipient);

    let receipt_key = verification_data.get(..8).ok_or_else(|| {
        SdkError::InstructionBuilder("verification data is shorter than the leaf index".into())
    })?;
    let (receipt, _) =
        address_finder.find_receipt_address(Policy::Merkle, &common.campaign.verifier_state, receipt_key);

    let ix_accounts = merkle_verifier::accounts::Claim {
        claimant: common.claimant,
        verifier_state: common.campaign.verifier_state,
        airdrop_state: common.campaign.airdrop_state,
        vault: common.campaign.vault,
        recipient: common.recipient,
        signature: common.campaign.signature,
        receipt,
        airdrop_program: common.airdrop_program,
        token_program: common.token_program,
        system_program: common.system_program,
    };

    let ix_data = merkle_verifier::instruction::Claim {
        amount,
        verification_data,
    };

    let ix = Instruction {
        program_id: common.campaign.verifier_program,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_governance_claim_ix(
    address_finder: &AddressFinder,
    claimant: &Pubkey,
    recipient: &Pubkey,
    seed: [u8; 32],
    governance: &Pubkey,
    proposal: &Pubkey,
    vote_record: &Pubkey,
) -> SdkResult<(
    Instruction,
    governance_verifier::accounts::Claim,
    governance_verifier::instruction::Claim,
)> {
    let common = ClaimAccounts::new(address_finder, Policy::Governance, &seed, claimant, recipient);
    let (receipt, _) = address_finder
        .find_governance_receipt_address(&common.campaign.verifier_state, vote_record);

    let ix_accounts = governance_verifier::accounts::Claim {
        claimant: common.claimant,
        verifier_state: common.campaign.verifier_state,
        airdrop_state: common.campaign.airdrop_state,
        vault: common.campaign.vault,
        recipient: common.recipient,
        signature: common.campaign.signature,
        governance: *governance,
        proposal: *proposal,
        vote_record: *vote_record,
        receipt,
        airdrop_program: common.airdrop_program,
        token_program: common.token_program,
        system_program: common.system_program,
    };

    let ix_data = governance_verifier::instruction::Claim {};

    let ix = Instruction {
        program_id: common.campaign.verifier_program,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_orca_init_receipt_ix(
    address_finder: &AddressFinder,
    payer: &Pubkey,
    seed: [u8; 32],
    position: &Pubkey,
) -> SdkResult<(
    Instruction,
    orca_verifier::accounts::InitReceipt,
    orca_verifier::instruction::InitReceipt,
)> {
    let campaign = address_finder.campaign(&seed, Policy::Orca);
    let (receipt, _) = address_finder.find_orca_receipt_address(&campaign.verifier_state, position);

    let ix_accounts = orca_verifier::accounts::InitReceipt {
        payer: *payer,
        verifier_state: campaign.verifier_state,
        position: *position,
        receipt,
        system_program: address_finder.program_ids.system_program,
    };

    let ix_data = orca_verifier::instruction::InitReceipt {};

    let ix = Instruction {
        program_id: campaign.verifier_program,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_orca_claim_ix(
    address_finder: &AddressFinder,
    claimant: &Pubkey,
    recipient: &Pubkey,
    seed: [u8; 32],
    position: &Pubkey,
    position_token_account: &Pubkey,
) -> SdkResult<(
    Instruction,
    orca_verifier::accounts::Claim,
    orca_verifier::instruction::Claim,
)> {
    let common = ClaimAccounts::new(address_finder, Policy::Orca, &seed, claimant, recipient);
    let (receipt, _) =
        address_finder.find_orca_receipt_address(&common.campaign.verifier_state, position);

    let ix_accounts = orca_verifier::accounts::Claim {
        claimant: common.claimant,
        verifier_state: common.campaign.verifier_state,
        airdrop_state: common.campaign.airdrop_state,
        vault: common.campaign.vault,
        recipient: common.recipient,
        signature: common.campaign.signature,
        position: *position,
        position_token_account: *position_token_account,
        receipt,
        airdrop_program: common.airdrop_program,
        token_program: common.token_program,
    };

    let ix_data = orca_verifier::instruction::Claim {};

    let ix = Instruction {
        program_id: common.campaign.verifier_program,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}
