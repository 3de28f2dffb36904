use anchor_lang::prelude::*;
use anchor_spl::metadata::Metadata;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::adapters::PrizeMinter;
use crate::constants::{PRIZE_MINT_SEED, RAFFLE_SEED};
use crate::error::RaffleError;
use crate::state::Raffle;

/// Accounts required to deliver randomness and settle the round.
///
/// This ensures that:
/// 1. Only the configured oracle authority can deliver.
/// 2. The prize accounts for the next prize id exist.
///
/// The winner wallet is supplied by the caller, who can derive it from the
/// ledger and the random word. A wrong wallet does not block settlement; it
/// only prevents the prize from being minted.
#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    /// The coordinator's signing key. Pays for prize accounts.
    #[account(mut)]
    pub oracle_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
        constraint = raffle.oracle_authority == oracle_authority.key()
            @ RaffleError::InvalidOracleAuthority,
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    /// CHECK: Compared against the selected winner before any prize CPI.
    pub winner: UncheckedAccount<'info>,

    /// Mint of the prize about to be issued.
    #[account(
        init_if_needed,
        payer = oracle_authority,
        seeds = [PRIZE_MINT_SEED, raffle.prizes_issued.to_le_bytes().as_ref()],
        bump,
        mint::decimals = 0,
        mint::authority = raffle,
        mint::freeze_authority = raffle,
        mint::token_program = token_program,
    )]
    pub prize_mint: Box<InterfaceAccount<'info, Mint>>,

    /// The winner's token account that receives the prize.
    #[account(
        init_if_needed,
        payer = oracle_authority,
        associated_token::mint = prize_mint,
        associated_token::authority = winner,
        associated_token::token_program = token_program,
    )]
    pub winner_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: Initialized by the metadata program.
    #[account(
        mut,
        seeds = [b"metadata", token_metadata_program.key().as_ref(), prize_mint.key().as_ref()],
        bump,
        seeds::program = token_metadata_program.key(),
    )]
    pub metadata: UncheckedAccount<'info>,

    /// CHECK: Initialized by the metadata program.
    #[account(
        mut,
        seeds = [b"metadata", token_metadata_program.key().as_ref(),
            prize_mint.key().as_ref(), b"edition"],
        bump,
        seeds::program = token_metadata_program.key(),
    )]
    pub master_edition: UncheckedAccount<'info>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    pub token_program: Interface<'info, TokenInterface>,

    pub token_metadata_program: Program<'info, Metadata>,

    pub system_program: Program<'info, System>,

    pub rent: Sysvar<'info, Rent>,
}

/// Validates the delivery against the pending request, selects the winner,
/// resets the round and mints the prize.
///
/// # Arguments
/// * `ctx` - Context containing FulfillRandomWords accounts
/// * `request_id` - Identifier returned by the coordinator at request time
/// * `random_words` - Random words; only the first one is used
pub fn process_fulfill_random_words(
    ctx: Context<FulfillRandomWords>,
    request_id: u64,
    random_words: Vec<[u8; 32]>,
) -> Result<()> {
    let clock = Clock::get()?;
    let bump = [ctx.accounts.raffle.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[RAFFLE_SEED, &bump]];

    let mut minter = PrizeMinter {
        raffle: ctx.accounts.raffle.to_account_info(),
        payer: ctx.accounts.oracle_authority.to_account_info(),
        winner: ctx.accounts.winner.to_account_info(),
        prize_mint: ctx.accounts.prize_mint.to_account_info(),
        winner_token_account: ctx.accounts.winner_token_account.to_account_info(),
        metadata: ctx.accounts.metadata.to_account_info(),
        master_edition: ctx.accounts.master_edition.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
        token_metadata_program: ctx.accounts.token_metadata_program.to_account_info(),
        system_program: ctx.accounts.system_program.to_account_info(),
        rent: ctx.accounts.rent.to_account_info(),
        token_id: ctx.accounts.raffle.prizes_issued,
        signer_seeds,
    };

    let winner = ctx.accounts.raffle.fulfill_random_words(
        request_id,
        &random_words,
        clock.unix_timestamp,
        &mut minter,
    )?;

    msg!("Round {} settled, winner: {}", ctx.accounts.raffle.rounds_completed, winner);
    Ok(())
}
