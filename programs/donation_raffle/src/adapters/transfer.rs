use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::error::RaffleError;
use crate::interfaces::FundForwarder;

/// Forwards lamports from the signing contributor with a system-program transfer.
pub struct SystemTransfer<'info> {
    pub from: AccountInfo<'info>,
    pub to: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
}

impl<'info> FundForwarder for SystemTransfer<'info> {
    fn forward(&mut self, amount: u64, recipient: &Pubkey) -> Result<()> {
        require_keys_eq!(*self.to.key, *recipient, RaffleError::RecipientMismatch);
        require!(self.from.lamports() >= amount, RaffleError::TransferFailed);

        system_program::transfer(
            CpiContext::new(
                self.system_program.clone(),
                system_program::Transfer {
                    from: self.from.clone(),
                    to: self.to.clone(),
                },
            ),
            amount,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account<'a>(key: &'a Pubkey, lamports: &'a mut u64, owner: &'a Pubkey) -> AccountInfo<'a> {
        AccountInfo::new(key, false, true, lamports, &mut [], owner, false, 0)
    }

    fn assert_raffle_err(result: Result<()>, expected: RaffleError) {
        match result.unwrap_err() {
            Error::AnchorError(anchor_err) => {
                assert_eq!(anchor_err.error_code_number, 6000 + expected as u32)
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn forward_rejects_a_destination_other_than_the_recipient() {
        let keys: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();
        let (from_key, to_key, system_key) = (keys[0], keys[1], keys[2]);
        let (mut from_lamports, mut to_lamports, mut system_lamports) = (1_000u64, 0u64, 1u64);
        let mut transfer = SystemTransfer {
            from: account(&from_key, &mut from_lamports, &system_key),
            to: account(&to_key, &mut to_lamports, &system_key),
            system_program: account(&system_key, &mut system_lamports, &system_key),
        };

        assert_raffle_err(
            transfer.forward(100, &Pubkey::new_unique()),
            RaffleError::RecipientMismatch,
        );
        assert_eq!(transfer.from.lamports(), 1_000);
        assert_eq!(transfer.to.lamports(), 0);
    }

    #[test]
    fn forward_rejects_amounts_above_the_contributor_balance() {
        let keys: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();
        let (from_key, to_key, system_key) = (keys[0], keys[1], keys[2]);
        let (mut from_lamports, mut to_lamports, mut system_lamports) = (99u64, 0u64, 1u64);
        let mut transfer = SystemTransfer {
            from: account(&from_key, &mut from_lamports, &system_key),
            to: account(&to_key, &mut to_lamports, &system_key),
            system_program: account(&system_key, &mut system_lamports, &system_key),
        };

        assert_raffle_err(transfer.forward(100, &to_key), RaffleError::TransferFailed);
        assert_eq!(transfer.from.lamports(), 99);
        assert_eq!(transfer.to.lamports(), 0);
    }
}
