use anchor_lang::prelude::*;
use instructions::*;

pub mod adapters;
pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod interfaces;
pub mod selection;
pub mod state;

use state::{InitializeParams, RaffleStatus};

declare_id!("DRaffLe111111111111111111111111111111111111");

#[program]
pub mod donation_raffle {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        process_initialize(ctx, params)
    }

    pub fn contribute(ctx: Context<Contribute>, amount: u64) -> Result<()> {
        process_contribute(ctx, amount)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<bool> {
        process_check_upkeep(ctx)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<u64> {
        process_perform_upkeep(ctx)
    }

    pub fn fulfill_random_words(
        ctx: Context<FulfillRandomWords>,
        request_id: u64,
        random_words: Vec<[u8; 32]>,
    ) -> Result<()> {
        process_fulfill_random_words(ctx, request_id, random_words)
    }

    pub fn set_status(ctx: Context<AdminAction>, status: RaffleStatus) -> Result<()> {
        process_set_status(ctx, status)
    }

    pub fn set_recipient(ctx: Context<AdminAction>, recipient: Pubkey) -> Result<()> {
        process_set_recipient(ctx, recipient)
    }
}
