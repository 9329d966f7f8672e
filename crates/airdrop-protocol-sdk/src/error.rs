use airdrop_protocol_merkle::BalanceTreeError;
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

pub type SdkResult<T> = Result<T, SdkError>;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("RPC error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    #[error("Account not found: {0}")]
    AccountNotFound(Pubkey),

    #[error("Invalid account data for {address}: {reason}")]
    InvalidAccountData { address: Pubkey, reason: String },

    #[error("No eligible proposal found for voter {voter} under governance {governance}")]
    NoEligibleProposal { governance: Pubkey, voter: Pubkey },

    #[error("Balance tree error: {0}")]
    BalanceTree(#[from] BalanceTreeError),

    #[error("Instruction building failed: {0}")]
    InstructionBuilder(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SdkError {
    pub(crate) fn invalid_data(address: &Pubkey, reason: impl Into<String>) -> Self {
        SdkError::InvalidAccountData {
            address: *address,
            reason: reason.into(),
        }
    }
}
