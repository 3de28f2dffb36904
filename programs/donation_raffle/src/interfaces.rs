use anchor_lang::prelude::*;

use crate::state::RandomnessParams;

/// Moves lamports to the beneficiary. Either the whole amount arrives or
/// nothing changes.
pub trait FundForwarder {
    fn forward(&mut self, amount: u64, recipient: &Pubkey) -> Result<()>;
}

/// Issues a randomness request and hands back its identifier. Fulfillment
/// arrives later as a separate `fulfill_random_words` instruction.
pub trait RandomnessOracle {
    fn request_random_words(&mut self, params: &RandomnessParams) -> Result<u64>;
}

/// Mints and delivers a prize token to `winner`, returning the token id.
pub trait PrizeIssuer {
    fn issue(&mut self, winner: &Pubkey) -> Result<u64>;
}
