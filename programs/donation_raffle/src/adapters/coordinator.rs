use anchor_lang::prelude::*;
use solana_program::hash::hash;
use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::program::{get_return_data, invoke_signed};

use crate::constants::REQUEST_RANDOM_WORDS_IX;
use crate::error::RaffleError;
use crate::interfaces::RandomnessOracle;
use crate::state::RandomnessParams;

#[derive(AnchorSerialize)]
struct RequestRandomWordsArgs {
    key_hash: [u8; 32],
    subscription_id: u64,
    request_confirmations: u16,
    callback_compute_limit: u32,
    num_words: u32,
}

impl From<&RandomnessParams> for RequestRandomWordsArgs {
    fn from(params: &RandomnessParams) -> Self {
        Self {
            key_hash: params.key_hash,
            subscription_id: params.subscription_id,
            request_confirmations: params.request_confirmations,
            callback_compute_limit: params.callback_compute_limit,
            num_words: params.num_words,
        }
    }
}

/// Requests random words from the coordinator program with the raffle PDA
/// signing as consumer. The coordinator answers with the request id in
/// return data and later calls `fulfill_random_words`.
pub struct CoordinatorRequest<'a, 'info> {
    pub coordinator_program: AccountInfo<'info>,
    pub consumer: AccountInfo<'info>,
    pub subscription: AccountInfo<'info>,
    pub request: AccountInfo<'info>,
    pub payer: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl CoordinatorRequest<'_, '_> {
    fn instruction(&self, params: &RandomnessParams) -> Result<Instruction> {
        let mut data = hash(REQUEST_RANDOM_WORDS_IX.as_bytes()).to_bytes()[..8].to_vec();
        RequestRandomWordsArgs::from(params)
            .serialize(&mut data)
            .map_err(|err| ProgramError::BorshIoError(err.to_string()))?;

        Ok(Instruction {
            program_id: *self.coordinator_program.key,
            accounts: vec![
                AccountMeta::new_readonly(*self.consumer.key, true),
                AccountMeta::new(*self.subscription.key, false),
                AccountMeta::new(*self.request.key, false),
                AccountMeta::new(*self.payer.key, true),
                AccountMeta::new_readonly(*self.system_program.key, false),
            ],
            data,
        })
    }
}

impl RandomnessOracle for CoordinatorRequest<'_, '_> {
    fn request_random_words(&mut self, params: &RandomnessParams) -> Result<u64> {
        let instruction = self.instruction(params)?;
        invoke_signed(
            &instruction,
            &[
                self.consumer.clone(),
                self.subscription.clone(),
                self.request.clone(),
                self.payer.clone(),
                self.system_program.clone(),
                self.coordinator_program.clone(),
            ],
            self.signer_seeds,
        )?;

        let (program_id, data) = get_return_data().ok_or(RaffleError::MissingRequestId)?;
        require_keys_eq!(
            program_id,
            *self.coordinator_program.key,
            RaffleError::MissingRequestId
        );
        let bytes: [u8; 8] = data
            .get(..8)
            .and_then(|slice| slice.try_into().ok())
            .ok_or(RaffleError::MissingRequestId)?;
        Ok(u64::from_le_bytes(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account<'a>(
        key: &'a Pubkey,
        lamports: &'a mut u64,
        data: &'a mut [u8],
        owner: &'a Pubkey,
    ) -> AccountInfo<'a> {
        AccountInfo::new(key, false, true, lamports, data, owner, false, 0)
    }

    #[test]
    fn instruction_encodes_discriminator_and_params_in_order() {
        let keys: Vec<Pubkey> = (0..6).map(|_| Pubkey::new_unique()).collect();
        let owner_key = Pubkey::new_unique();
        let owner = &owner_key;
        let mut lamports = [0u64; 6];
        let mut data: [[u8; 0]; 6] = [[]; 6];
        let mut infos = keys
            .iter()
            .zip(lamports.iter_mut())
            .zip(data.iter_mut())
            .map(|((key, lamports), data)| account(key, lamports, data, owner));

        let request = CoordinatorRequest {
            coordinator_program: infos.next().unwrap(),
            consumer: infos.next().unwrap(),
            subscription: infos.next().unwrap(),
            request: infos.next().unwrap(),
            payer: infos.next().unwrap(),
            system_program: infos.next().unwrap(),
            signer_seeds: &[],
        };
        let params = RandomnessParams {
            key_hash: [9u8; 32],
            subscription_id: 0x0102,
            request_confirmations: 3,
            callback_compute_limit: 500_000,
            num_words: 2,
        };

        let ix = request.instruction(&params).unwrap();

        assert_eq!(ix.program_id, keys[0]);
        assert_eq!(&ix.data[..8], &hash(b"global:request_random_words").to_bytes()[..8]);
        assert_eq!(&ix.data[8..40], &[9u8; 32]);
        assert_eq!(&ix.data[40..48], &0x0102u64.to_le_bytes());
        assert_eq!(&ix.data[48..50], &3u16.to_le_bytes());
        assert_eq!(&ix.data[50..54], &500_000u32.to_le_bytes());
        assert_eq!(&ix.data[54..58], &2u32.to_le_bytes());
        assert_eq!(ix.data.len(), 58);

        assert_eq!(ix.accounts[0].pubkey, keys[1]);
        assert!(ix.accounts[0].is_signer);
        assert!(!ix.accounts[0].is_writable);
        assert!(ix.accounts[3].is_signer);
    }
}
