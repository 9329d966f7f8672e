//! Read-only view of Orca Whirlpool `Position` accounts.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::pubkey;

pub const WHIRLPOOL_PROGRAM_ID: Pubkey = pubkey!("whirLbMiicVdio4qvUfM5KAg6Ct8VwpYzGff3uctyCc");

pub const POSITION_SEED: &[u8] = b"position";

/// Anchor discriminator of the Whirlpool `Position` account.
pub const POSITION_DISCRIMINATOR: [u8; 8] = [170, 188, 143, 228, 122, 64, 247, 208];

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PositionRewardInfo {
    /// Q64.64 reward growth inside the position's range at the last update.
    pub growth_inside_checkpoint: u128,
    pub amount_owed: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub whirlpool: Pubkey,
    pub position_mint: Pubkey,
    pub liquidity: u128,
    pub tick_lower_index: i32,
    pub tick_upper_index: i32,
    pub fee_growth_checkpoint_a: u128,
    pub fee_owed_a: u64,
    pub fee_growth_checkpoint_b: u128,
    pub fee_owed_b: u64,
    pub reward_infos: [PositionRewardInfo; 3],
}

impl Position {
    /// Discriminator plus fields.
    pub const LEN: usize = 216;

    pub fn unpack(data: &[u8]) -> Option<Self> {
        if data.len() < Self::LEN || data[..8] != POSITION_DISCRIMINATOR {
            return None;
        }
        let mut reader = &data[8..Self::LEN];
        Self::deserialize(&mut reader).ok()
    }

    /// Account bytes as the Whirlpool program lays them out.
    pub fn pack(&self) -> Vec<u8> {
        let mut data = POSITION_DISCRIMINATOR.to_vec();
        // Writing into a Vec cannot fail.
        let _ = self.serialize(&mut data);
        data
    }

    pub fn reward_checkpoint(&self, reward_index: u8) -> Option<u128> {
        self.reward_infos
            .get(reward_index as usize)
            .map(|info| info.growth_inside_checkpoint)
    }
}

/// `["position", position_mint]` under the Whirlpool program.
pub fn find_position_address(whirlpool_program: &Pubkey, position_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POSITION_SEED, position_mint.as_ref()], whirlpool_program)
}
