use anchor_lang::prelude::*;
use anchor_spl::metadata::{
    create_master_edition_v3, create_metadata_accounts_v3, CreateMasterEditionV3,
    CreateMetadataAccountsV3,
};
use anchor_spl::token_interface::{mint_to, MintTo};
use mpl_token_metadata::types::DataV2;

use crate::constants::{PRIZE_NAME, PRIZE_SYMBOL, PRIZE_URI};
use crate::error::RaffleError;
use crate::interfaces::PrizeIssuer;

/// Mints prize number `token_id` as a one-of-one NFT into the winner's
/// associated token account. The raffle PDA is mint and update authority.
pub struct PrizeMinter<'a, 'info> {
    pub raffle: AccountInfo<'info>,
    pub payer: AccountInfo<'info>,
    pub winner: AccountInfo<'info>,
    pub prize_mint: AccountInfo<'info>,
    pub winner_token_account: AccountInfo<'info>,
    pub metadata: AccountInfo<'info>,
    pub master_edition: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub token_metadata_program: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
    pub rent: AccountInfo<'info>,
    pub token_id: u64,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl PrizeIssuer for PrizeMinter<'_, '_> {
    fn issue(&mut self, winner: &Pubkey) -> Result<u64> {
        // The caller supplies the prize accounts before the winner is known.
        require_keys_eq!(*self.winner.key, *winner, RaffleError::PrizeRecipientMismatch);

        msg!("Minting prize #{} to {}", self.token_id, winner);
        // Only the wallet check is best effort. A failing CPI below aborts the
        // whole transaction, so the round stays pending.
        mint_to(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                MintTo {
                    mint: self.prize_mint.clone(),
                    to: self.winner_token_account.clone(),
                    authority: self.raffle.clone(),
                },
                self.signer_seeds,
            ),
            1,
        )?;

        create_metadata_accounts_v3(
            CpiContext::new_with_signer(
                self.token_metadata_program.clone(),
                CreateMetadataAccountsV3 {
                    metadata: self.metadata.clone(),
                    mint: self.prize_mint.clone(),
                    mint_authority: self.raffle.clone(),
                    update_authority: self.raffle.clone(),
                    payer: self.payer.clone(),
                    system_program: self.system_program.clone(),
                    rent: self.rent.clone(),
                },
                self.signer_seeds,
            ),
            DataV2 {
                name: format!("{} #{}", PRIZE_NAME, self.token_id),
                symbol: PRIZE_SYMBOL.to_string(),
                uri: PRIZE_URI.to_string(),
                seller_fee_basis_points: 0,
                creators: None,
                collection: None,
                uses: None,
            },
            true,
            true,
            None,
        )?;

        create_master_edition_v3(
            CpiContext::new_with_signer(
                self.token_metadata_program.clone(),
                CreateMasterEditionV3 {
                    payer: self.payer.clone(),
                    mint: self.prize_mint.clone(),
                    edition: self.master_edition.clone(),
                    mint_authority: self.raffle.clone(),
                    update_authority: self.raffle.clone(),
                    metadata: self.metadata.clone(),
                    token_program: self.token_program.clone(),
                    system_program: self.system_program.clone(),
                    rent: self.rent.clone(),
                },
                self.signer_seeds,
            ),
            Some(0),
        )?;

        Ok(self.token_id)
    }
}
