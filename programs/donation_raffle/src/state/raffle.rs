use anchor_lang::prelude::*;

use crate::constants::MAX_NUM_WORDS;
use crate::error::RaffleError;
use crate::events::{
    PrizeIssuanceFailed, PrizeIssued, RandomnessRequested, RecipientChanged, StatusChanged,
    WinnerPicked,
};
use crate::interfaces::{FundForwarder, PrizeIssuer, RandomnessOracle};
use crate::selection::select_winner_index;
use crate::state::{Contribution, RoundLedger};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum RaffleStatus {
    /// Accepting contributions.
    Open,
    /// Waiting for the coordinator to deliver randomness.
    Pending,
}

/// Parameters forwarded verbatim with every randomness request.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct RandomnessParams {
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_compute_limit: u32,
    pub num_words: u32,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct InitializeParams {
    pub recipient: Pubkey,
    pub coordinator: Pubkey,
    pub oracle_authority: Pubkey,
    pub randomness: RandomnessParams,
    /// Minimum seconds between the end of one round and the next selection.
    pub interval: i64,
}

/// Inputs of the automation predicate, kept together for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpkeepCheck {
    pub status: RaffleStatus,
    pub contributor_count: usize,
    pub elapsed: i64,
    pub interval: i64,
}

impl UpkeepCheck {
    pub fn is_needed(&self) -> bool {
        self.status == RaffleStatus::Open
            && self.contributor_count > 0
            && self.elapsed >= self.interval
    }

    /// `UpkeepNotNeeded` with the predicate inputs in its message.
    pub fn not_needed_error(&self) -> Error {
        Error::from(AnchorError {
            error_name: RaffleError::UpkeepNotNeeded.name(),
            error_code_number: RaffleError::UpkeepNotNeeded.into(),
            error_msg: format!(
                "Upkeep not needed: contributors={} status={:?} interval={}",
                self.contributor_count, self.status, self.interval
            ),
            error_origin: None,
            compared_values: None,
        })
    }
}

#[account]
#[derive(InitSpace)]
pub struct Raffle {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// Set once at initialization. Gates status overrides and recipient changes.
    pub admin: Pubkey,

    /// Beneficiary that receives every contribution.
    pub recipient: Pubkey,

    /// Program id of the randomness coordinator.
    pub coordinator: Pubkey,

    /// Key that signs randomness fulfillments on behalf of the coordinator.
    pub oracle_authority: Pubkey,

    pub randomness: RandomnessParams,

    /// Seconds that must pass after `last_timestamp` before a selection.
    pub interval: i64,

    pub status: RaffleStatus,

    /// Unix timestamp of initialization or of the last resolved round.
    pub last_timestamp: i64,

    /// Identifier of the live randomness request, if any.
    pub pending_request: Option<u64>,

    /// Most recent winner. Observability only.
    pub recent_winner: Option<Pubkey>,

    pub rounds_completed: u64,

    /// Prizes successfully issued. Doubles as the id of the next prize.
    pub prizes_issued: u64,

    pub ledger: RoundLedger,
}

impl Raffle {
    pub fn new(bump: u8, admin: Pubkey, params: &InitializeParams, now: i64) -> Result<Self> {
        require!(params.interval > 0, RaffleError::InvalidInterval);
        require!(
            params.randomness.num_words >= 1 && params.randomness.num_words <= MAX_NUM_WORDS,
            RaffleError::InvalidWordCount
        );
        require!(
            params.recipient != Pubkey::default(),
            RaffleError::InvalidRecipient
        );
        require!(
            params.coordinator != Pubkey::default(),
            RaffleError::InvalidCoordinator
        );
        require!(
            params.oracle_authority != Pubkey::default(),
            RaffleError::InvalidOracleConfig
        );

        Ok(Self {
            bump,
            admin,
            recipient: params.recipient,
            coordinator: params.coordinator,
            oracle_authority: params.oracle_authority,
            randomness: params.randomness,
            interval: params.interval,
            status: RaffleStatus::Open,
            last_timestamp: now,
            pending_request: None,
            recent_winner: None,
            rounds_completed: 0,
            prizes_issued: 0,
            ledger: RoundLedger::default(),
        })
    }

    pub fn require_admin(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.admin, RaffleError::Unauthorized);
        Ok(())
    }

    /// Records a contribution and forwards it to the recipient.
    ///
    /// The ledger change is staged and only committed after the transfer
    /// succeeds, so a failed transfer leaves the ledger and `lifetime`
    /// exactly as they were.
    pub fn contribute<F: FundForwarder>(
        &mut self,
        contributor: Pubkey,
        amount: u64,
        lifetime: &mut u64,
        forwarder: &mut F,
    ) -> Result<Contribution> {
        require!(amount > 0, RaffleError::ZeroAmount);
        require!(
            self.status == RaffleStatus::Open,
            RaffleError::RoundPending
        );

        let mut staged_ledger = self.ledger.clone();
        let mut staged_lifetime = *lifetime;
        let contribution = staged_ledger.record(contributor, amount, &mut staged_lifetime)?;

        if let Err(err) = forwarder.forward(amount, &self.recipient) {
            msg!("Forwarding {} lamports to {} failed: {}", amount, self.recipient, err);
            return err!(RaffleError::TransferFailed);
        }

        self.ledger = staged_ledger;
        *lifetime = staged_lifetime;
        Ok(contribution)
    }

    pub fn check_upkeep(&self, now: i64) -> UpkeepCheck {
        UpkeepCheck {
            status: self.status,
            contributor_count: self.ledger.count(),
            elapsed: now.saturating_sub(self.last_timestamp),
            interval: self.interval,
        }
    }

    /// Closes the round to contributions and requests randomness.
    pub fn perform_upkeep<O: RandomnessOracle>(&mut self, now: i64, oracle: &mut O) -> Result<u64> {
        let check = self.check_upkeep(now);
        if !check.is_needed() {
            msg!(
                "Upkeep not needed: contributors={} status={:?} interval={} elapsed={}",
                check.contributor_count,
                check.status,
                check.interval,
                check.elapsed
            );
            return Err(check.not_needed_error());
        }

        let request_id = self.request_selection(oracle)?;
        self.status = RaffleStatus::Pending;
        Ok(request_id)
    }

    fn request_selection<O: RandomnessOracle>(&mut self, oracle: &mut O) -> Result<u64> {
        require!(
            self.pending_request.is_none(),
            RaffleError::RequestAlreadyPending
        );

        let request_id = oracle.request_random_words(&self.randomness)?;
        self.pending_request = Some(request_id);

        msg!("Requested randomness: request_id={}", request_id);
        emit!(RandomnessRequested { request_id });
        Ok(request_id)
    }

    /// Consumes the randomness for the live request and settles the round.
    ///
    /// Once a winner is computed the reset and the return to `Open` are
    /// committed whatever the prize issuer reports.
    pub fn fulfill_random_words<P: PrizeIssuer>(
        &mut self,
        request_id: u64,
        random_words: &[[u8; 32]],
        now: i64,
        prize: &mut P,
    ) -> Result<Pubkey> {
        if self.pending_request != Some(request_id) {
            msg!(
                "Unexpected fulfillment: request_id={} pending={:?}",
                request_id,
                self.pending_request
            );
            return err!(RaffleError::UnmatchedRequest);
        }
        let random_word = random_words.first().ok_or(RaffleError::NoRandomWords)?;

        let contributors = self.ledger.snapshot();
        let index = select_winner_index(random_word, contributors.len())
            .ok_or(RaffleError::NoContributors)?;
        let winner = contributors[index];

        msg!("Randomness result: {:?}", random_word);
        msg!("Winner index {} of {}: {}", index, contributors.len(), winner);

        self.recent_winner = Some(winner);
        self.ledger.reset();
        self.pending_request = None;
        self.status = RaffleStatus::Open;
        self.last_timestamp = now;
        self.rounds_completed = self.rounds_completed.saturating_add(1);

        emit!(WinnerPicked {
            winner,
            request_id,
            round: self.rounds_completed,
        });

        match prize.issue(&winner) {
            Ok(token_id) => {
                self.prizes_issued = self.prizes_issued.saturating_add(1);
                emit!(PrizeIssued { winner, token_id });
            }
            Err(err) => {
                msg!("Prize issuance for {} failed: {}", winner, err);
                emit!(PrizeIssuanceFailed {
                    winner,
                    round: self.rounds_completed,
                });
            }
        }

        Ok(winner)
    }

    /// Administrative override. Opening abandons any live request, so a late
    /// fulfillment for it is rejected.
    pub fn set_status(&mut self, caller: &Pubkey, status: RaffleStatus) -> Result<()> {
        self.require_admin(caller)?;
        if status == RaffleStatus::Open {
            if let Some(abandoned) = self.pending_request.take() {
                msg!("Abandoning randomness request {}", abandoned);
            }
        }
        self.status = status;
        emit!(StatusChanged { status });
        Ok(())
    }

    pub fn set_recipient(&mut self, caller: &Pubkey, recipient: Pubkey) -> Result<()> {
        self.require_admin(caller)?;
        require!(recipient != Pubkey::default(), RaffleError::InvalidRecipient);
        self.recipient = recipient;
        emit!(RecipientChanged { recipient });
        Ok(())
    }

    pub fn contributor_count(&self) -> usize {
        self.ledger.count()
    }

    pub fn contributor_at(&self, index: usize) -> Option<Pubkey> {
        self.ledger.contributor_at(index)
    }

    pub fn round_amount_of(&self, contributor: &Pubkey) -> u64 {
        self.ledger.amount_of(contributor)
    }
}
