use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

use crate::constants::LEAF_PREFIX;

/// One entry of the balance tree: `amount` tokens for `account` at position `index`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BalanceLeaf {
    pub index: u64,
    pub account: Pubkey,
    pub amount: u64,
}

impl BalanceLeaf {
    pub fn new(index: u64, account: Pubkey, amount: u64) -> Self {
        Self {
            index,
            account,
            amount,
        }
    }

    /// `keccak256(0x00 || index_le || account || amount_le)`.
    /// Fields are packed raw, not Borsh-encoded.
    pub fn to_hash(&self) -> [u8; 32] {
        keccak::hashv(&[
            &[LEAF_PREFIX],
            &self.index.to_le_bytes(),
            self.account.as_ref(),
            &self.amount.to_le_bytes(),
        ])
        .0
    }
}
