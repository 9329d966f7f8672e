//! Off-chain side of the airdrop programs: address derivation, instruction and
//! transaction builders, and the account lookups claims depend on.

mod account_reader;
mod address_finder;
mod client;
mod config;
mod error;
mod governance_lookup;
mod instruction_builders;
mod policy;
mod transaction_builders;

pub use account_reader::{AccountReader, MemcmpFilter, RpcAccountReader};
pub use address_finder::{AddressFinder, CampaignAddresses};
pub use client::AirdropClient;
pub use config::{LookupConfig, ProgramIds};
pub use error::{SdkError, SdkResult};
pub use governance_lookup::{EligibleVote, GovernanceLookup};
pub use instruction_builders::*;
pub use policy::{Policy, VerifierConfig};
pub use transaction_builders::*;

pub use airdrop::{AirdropState, ID as AIRDROP_PROGRAM_ID};
pub use airdrop_protocol_merkle::{BalanceLeaf, BalanceTree};
