//! Helpers for verifier programs that authorize vault payouts.
//!
//! A verifier proves eligibility in its own program, then calls
//! [`claim_from_vault`] to have the core program transfer tokens. The call is
//! signed with the verifier's signature PDA, `[verifier_state]` under the
//! verifier's program id, which is the key bound into `AirdropState` at
//! configure time.

use anchor_lang::prelude::*;

use crate::cpi;
use crate::cpi::accounts::Claim;

/// Account handles forwarded to the core `claim` instruction.
pub struct VaultClaim<'info> {
    pub airdrop_program: AccountInfo<'info>,
    pub airdrop_state: AccountInfo<'info>,
    pub vault: AccountInfo<'info>,
    pub recipient: AccountInfo<'info>,
    pub signature: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
}

pub fn claim_from_vault<'info>(
    accounts: VaultClaim<'info>,
    verifier_state: Pubkey,
    signature_bump: u8,
    amount: u64,
    proof: Vec<u8>,
) -> Result<()> {
    let signature_seeds = &[verifier_state.as_ref(), &[signature_bump]];
    let signer_seeds = &[&signature_seeds[..]];

    cpi::claim(
        CpiContext::new_with_signer(
            accounts.airdrop_program,
            Claim {
                airdrop_state: accounts.airdrop_state,
                vault: accounts.vault,
                recipient: accounts.recipient,
                signature: accounts.signature,
                token_program: accounts.token_program,
            },
            signer_seeds,
        ),
        amount,
        proof,
    )
}
