use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::ProgramIds;

/// The verifier program an airdrop is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    Basic,
    Password,
    Merkle,
    Governance,
    Orca,
}

impl Policy {
    pub fn program_id(&self, program_ids: &ProgramIds) -> Pubkey {
        match self {
            Policy::Basic => program_ids.basic_verifier,
            Policy::Password => program_ids.password_verifier,
            Policy::Merkle => program_ids.merkle_verifier,
            Policy::Governance => program_ids.governance_verifier,
            Policy::Orca => program_ids.orca_verifier,
        }
    }
}

/// Arguments of a verifier's `init`, apart from the shared seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifierConfig {
    Basic,
    Password {
        password_hash: [u8; 32],
    },
    Merkle {
        root: [u8; 32],
    },
    Governance {
        governance: Pubkey,
        eligibility_start: i64,
        eligibility_end: i64,
        amount_per_voter: u64,
    },
    Orca {
        pool: Pubkey,
        reward_index: u8,
    },
}

impl VerifierConfig {
    /// Hashes `password` the way the password verifier checks it.
    pub fn password(password: &str) -> Self {
        VerifierConfig::Password {
            password_hash: password_verifier::hash_password(password),
        }
    }

    pub fn policy(&self) -> Policy {
        match self {
            VerifierConfig::Basic => Policy::Basic,
            VerifierConfig::Password { .. } => Policy::Password,
            VerifierConfig::Merkle { .. } => Policy::Merkle,
            VerifierConfig::Governance { .. } => Policy::Governance,
            VerifierConfig::Orca { .. } => Policy::Orca,
        }
    }
}
