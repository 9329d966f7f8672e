use anchor_lang::prelude::*;

/// Seed prefix for the vault token account PDA: `["Vault", airdrop_state]`.
///
/// Deployed campaigns depend on this exact byte string.
#[constant]
pub const VAULT_SEED_PREFIX: &[u8] = b"Vault";
