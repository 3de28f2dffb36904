//! On-chain implementations of the collaborator traits in [`crate::interfaces`].

pub mod coordinator;
pub mod prize;
pub mod transfer;

pub use coordinator::*;
pub use prize::*;
pub use transfer::*;
