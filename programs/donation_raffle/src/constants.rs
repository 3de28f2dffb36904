/// Seed of the singleton raffle PDA.
pub const RAFFLE_SEED: &[u8] = b"raffle";

/// Seed prefix of the per-contributor lifetime record.
pub const CONTRIBUTOR_SEED: &[u8] = b"contributor";

/// Seed prefix of each prize mint, followed by the prize id in little endian.
pub const PRIZE_MINT_SEED: &[u8] = b"prize";

/// Distinct contributors a single round can hold. Bounds the raffle account size.
pub const MAX_CONTRIBUTORS: usize = 64;

/// Upper bound on random words requested per round.
pub const MAX_NUM_WORDS: u32 = 8;

/// Anchor instruction name of the coordinator's request entry point.
pub const REQUEST_RANDOM_WORDS_IX: &str = "global:request_random_words";

pub const PRIZE_NAME: &str = "Donation Raffle Prize";
pub const PRIZE_SYMBOL: &str = "DRAFL";
pub const PRIZE_URI: &str = "https://raffle.example/prize.json";
