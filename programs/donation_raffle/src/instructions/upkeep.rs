use anchor_lang::prelude::*;

use crate::adapters::CoordinatorRequest;
use crate::constants::RAFFLE_SEED;
use crate::state::Raffle;

/// Read-only accounts for the automation predicate.
#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    #[account(
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Box<Account<'info, Raffle>>,
}

/// Accounts required to close the round and request randomness.
/// Anyone may submit this; the predicate decides.
#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    /// Pays the coordinator for the request account.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    /// CHECK: Pinned to the configured coordinator program.
    #[account(address = raffle.coordinator, executable)]
    pub coordinator_program: UncheckedAccount<'info>,

    /// CHECK: Validated by the coordinator.
    #[account(mut)]
    pub subscription: UncheckedAccount<'info>,

    /// CHECK: Created and validated by the coordinator.
    #[account(mut)]
    pub request: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_check_upkeep(ctx: Context<CheckUpkeep>) -> Result<bool> {
    let clock = Clock::get()?;
    let check = ctx.accounts.raffle.check_upkeep(clock.unix_timestamp);

    msg!(
        "Upkeep check: status={:?} contributors={} elapsed={} interval={}",
        check.status,
        check.contributor_count,
        check.elapsed,
        check.interval
    );
    Ok(check.is_needed())
}

/// Moves the round to pending and returns the coordinator's request id.
pub fn process_perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<u64> {
    let clock = Clock::get()?;
    let bump = [ctx.accounts.raffle.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[RAFFLE_SEED, &bump]];

    let mut coordinator = CoordinatorRequest {
        coordinator_program: ctx.accounts.coordinator_program.to_account_info(),
        consumer: ctx.accounts.raffle.to_account_info(),
        subscription: ctx.accounts.subscription.to_account_info(),
        request: ctx.accounts.request.to_account_info(),
        payer: ctx.accounts.payer.to_account_info(),
        system_program: ctx.accounts.system_program.to_account_info(),
        signer_seeds,
    };

    ctx.accounts
        .raffle
        .perform_upkeep(clock.unix_timestamp, &mut coordinator)
}
