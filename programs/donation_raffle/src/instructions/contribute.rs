use anchor_lang::prelude::*;

use crate::adapters::SystemTransfer;
use crate::constants::{CONTRIBUTOR_SEED, RAFFLE_SEED};
use crate::error::RaffleError;
use crate::events::ContributionReceived;
use crate::state::{ContributorRecord, Raffle};

/// Accounts required to contribute to the current round.
#[derive(Accounts)]
pub struct Contribute<'info> {
    /// The account donating lamports.
    #[account(mut)]
    pub contributor: Signer<'info>,

    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    /// Lifetime total of the contributor, created on first contribution.
    #[account(
        init_if_needed,
        payer = contributor,
        space = 8 + ContributorRecord::INIT_SPACE,
        seeds = [CONTRIBUTOR_SEED, contributor.key().as_ref()],
        bump,
    )]
    pub contributor_record: Account<'info, ContributorRecord>,

    /// CHECK: Pinned to the configured beneficiary; only receives lamports.
    #[account(
        mut,
        address = raffle.recipient @ RaffleError::RecipientMismatch,
    )]
    pub recipient: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Adds `amount` lamports to the contributor's stake and forwards them to the
/// recipient in the same transaction.
///
/// # Arguments
/// * `ctx` - Context containing Contribute accounts
/// * `amount` - Lamports to donate
pub fn process_contribute(ctx: Context<Contribute>, amount: u64) -> Result<()> {
    let contributor = ctx.accounts.contributor.key();
    let mut forwarder = SystemTransfer {
        from: ctx.accounts.contributor.to_account_info(),
        to: ctx.accounts.recipient.to_account_info(),
        system_program: ctx.accounts.system_program.to_account_info(),
    };

    let record = &mut ctx.accounts.contributor_record;
    if record.contributor == Pubkey::default() {
        record.bump = ctx.bumps.contributor_record;
        record.contributor = contributor;
    }

    let contribution = ctx.accounts.raffle.contribute(
        contributor,
        amount,
        &mut record.lifetime_amount,
        &mut forwarder,
    )?;

    msg!(
        "Contribution of {} from {} ({})",
        amount,
        contributor,
        if contribution.is_new() { "new" } else { "returning" }
    );
    emit!(ContributionReceived {
        contributor,
        amount,
        round_amount: contribution.round_amount(),
        lifetime_amount: record.lifetime_amount,
        new_contributor: contribution.is_new(),
    });

    Ok(())
}
