pub mod contributor;
pub mod ledger;
pub mod raffle;

pub use contributor::*;
pub use ledger::*;
pub use raffle::*;
