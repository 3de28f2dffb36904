use anchor_lang::prelude::*;

use crate::state::RaffleStatus;

#[event]
pub struct ContributionReceived {
    pub contributor: Pubkey,
    pub amount: u64,
    pub round_amount: u64,
    pub lifetime_amount: u64,
    pub new_contributor: bool,
}

#[event]
pub struct RandomnessRequested {
    pub request_id: u64,
}

#[event]
pub struct WinnerPicked {
    pub winner: Pubkey,
    pub request_id: u64,
    pub round: u64,
}

#[event]
pub struct PrizeIssued {
    pub winner: Pubkey,
    pub token_id: u64,
}

#[event]
pub struct PrizeIssuanceFailed {
    pub winner: Pubkey,
    pub round: u64,
}

#[event]
pub struct StatusChanged {
    pub status: RaffleStatus,
}

#[event]
pub struct RecipientChanged {
    pub recipient: Pubkey,
}
