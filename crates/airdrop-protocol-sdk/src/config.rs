use std::time::Duration;

use backoff::ExponentialBackoff;
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::{SdkError, SdkResult};

/// Addresses of every program the builders talk to.
///
/// Defaults are the ids compiled into the programs. Override individual fields
/// (e.g. from a JSON file) when targeting a cluster with different deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramIds {
    #[serde(with = "pubkey_string")]
    pub airdrop: Pubkey,
    #[serde(with = "pubkey_string")]
    pub basic_verifier: Pubkey,
    #[serde(with = "pubkey_string")]
    pub password_verifier: Pubkey,
    #[serde(with = "pubkey_string")]
    pub merkle_verifier: Pubkey,
    #[serde(with = "pubkey_string")]
    pub governance_verifier: Pubkey,
    #[serde(with = "pubkey_string")]
    pub orca_verifier: Pubkey,
    #[serde(with = "pubkey_string")]
    pub token_program: Pubkey,
    #[serde(with = "pubkey_string")]
    pub associated_token_program: Pubkey,
    #[serde(with = "pubkey_string")]
    pub system_program: Pubkey,
    #[serde(with = "pubkey_string")]
    pub whirlpool_program: Pubkey,
}

impl Default for ProgramIds {
    fn default() -> Self {
        Self {
            airdrop: airdrop::ID,
            basic_verifier: basic_verifier::ID,
            password_verifier: password_verifier::ID,
            merkle_verifier: merkle_verifier::ID,
            governance_verifier: governance_verifier::ID,
            orca_verifier: orca_verifier::ID,
            token_program: anchor_spl::token::ID,
            associated_token_program: anchor_spl::associated_token::ID,
            system_program: anchor_lang::system_program::ID,
            whirlpool_program: orca_verifier::whirlpool::WHIRLPOOL_PROGRAM_ID,
        }
    }
}

impl ProgramIds {
    pub fn from_json(json: &str) -> SdkResult<Self> {
        serde_json::from_str(json).map_err(|e| SdkError::InvalidConfig(e.to_string()))
    }
}

/// Retry policy for RPC account reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    pub initial_interval_ms: u64,
    pub max_interval_ms: u64,
    /// Give up once this much time has passed since the first attempt.
    pub max_elapsed_ms: u64,
    pub multiplier: f64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            initial_interval_ms: 250,
            max_interval_ms: 5_000,
            max_elapsed_ms: 30_000,
            multiplier: 2.0,
        }
    }
}

impl LookupConfig {
    pub fn from_json(json: &str) -> SdkResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SdkError::InvalidConfig(e.to_string()))?;
        if config.multiplier < 1.0 {
            return Err(SdkError::InvalidConfig(format!(
                "multiplier must be >= 1.0, got {}",
                config.multiplier
            )));
        }
        Ok(config)
    }

    pub fn backoff(&self) -> ExponentialBackoff {
        ExponentialBackoff {
            initial_interval: Duration::from_millis(self.initial_interval_ms),
            max_interval: Duration::from_millis(self.max_interval_ms),
            max_elapsed_time: Some(Duration::from_millis(self.max_elapsed_ms)),
            multiplier: self.multiplier,
            ..Default::default()
        }
    }
}

/// Base58 strings rather than byte arrays in config files.
mod pubkey_string {
    use std::str::FromStr;

    use serde::{de, Deserialize, Deserializer, Serializer};
    use solana_sdk::pubkey::Pubkey;

    pub fn serialize<S: Serializer>(key: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(key)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let s = String::deserialize(deserializer)?;
        Pubkey::from_str(&s).map_err(de::Error::custom)
    }
}
