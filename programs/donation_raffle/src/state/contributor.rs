use anchor_lang::prelude::*;

/// Lifetime contribution total of one identity. Survives round resets.
#[account]
#[derive(InitSpace)]
pub struct ContributorRecord {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The identity this record tracks.
    pub contributor: Pubkey,

    /// Lamports contributed across every round. Never decreases.
    pub lifetime_amount: u64,
}
