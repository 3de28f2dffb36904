use anchor_lang::prelude::*;

use crate::constants::RAFFLE_SEED;
use crate::state::{InitializeParams, Raffle, RaffleStatus};

/// Accounts required to create the raffle.
/// The signer becomes the permanent administrator.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The account paying for account creation and fees.
    #[account(mut)]
    pub admin: Signer<'info>,

    /// The raffle state account.
    #[account(
        init,
        payer = admin,
        space = 8 + Raffle::INIT_SPACE,
        seeds = [RAFFLE_SEED],
        bump
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Accounts for administrator-only updates.
#[derive(Accounts)]
pub struct AdminAction<'info> {
    /// Must match `raffle.admin`. Checked in the handler.
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Box<Account<'info, Raffle>>,
}

/// Initializes the raffle with its recipient, randomness coordinator and
/// selection interval. The first round opens immediately.
///
/// # Arguments
/// * `ctx` - Context holding the Initialize accounts
/// * `params` - Deploy-time configuration
pub fn process_initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
    let clock = Clock::get()?;
    let raffle = Raffle::new(
        ctx.bumps.raffle,
        ctx.accounts.admin.key(),
        &params,
        clock.unix_timestamp,
    )?;

    msg!("Raffle initialized");
    msg!("Recipient: {}", raffle.recipient);
    msg!("Interval: {}s", raffle.interval);

    ctx.accounts.raffle.set_inner(raffle);
    Ok(())
}

pub fn process_set_status(ctx: Context<AdminAction>, status: RaffleStatus) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    ctx.accounts.raffle.set_status(&admin, status)?;
    msg!("Status set to {:?}", status);
    Ok(())
}

pub fn process_set_recipient(ctx: Context<AdminAction>, recipient: Pubkey) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    ctx.accounts.raffle.set_recipient(&admin, recipient)?;
    msg!("Recipient set to {}", recipient);
    Ok(())
}
