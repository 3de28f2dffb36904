use anchor_lang::prelude::*;

use crate::constants::MAX_CONTRIBUTORS;
use crate::error::RaffleError;

/// One contributor's stake in the current round.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct LedgerEntry {
    pub contributor: Pubkey,
    pub amount: u64,
}

/// How a contribution landed in the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contribution {
    /// First contribution of this identity in the round.
    New { round_amount: u64 },
    /// Funds added to an existing entry.
    Returning { round_amount: u64 },
}

impl Contribution {
    pub fn round_amount(&self) -> u64 {
        match *self {
            Contribution::New { round_amount } | Contribution::Returning { round_amount } => {
                round_amount
            }
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Contribution::New { .. })
    }
}

/// Contributors of the current round in insertion order.
///
/// An identity has an entry iff its round amount is nonzero: entries are only
/// created with a positive amount and only removed all at once by [`reset`].
///
/// [`reset`]: RoundLedger::reset
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct RoundLedger {
    #[max_len(MAX_CONTRIBUTORS)]
    pub entries: Vec<LedgerEntry>,
}

impl RoundLedger {
    /// Adds `amount` to `contributor`'s round stake and to `lifetime`.
    ///
    /// Nothing is modified when an error is returned.
    pub fn record(
        &mut self,
        contributor: Pubkey,
        amount: u64,
        lifetime: &mut u64,
    ) -> Result<Contribution> {
        require!(amount > 0, RaffleError::ZeroAmount);
        let new_lifetime = lifetime
            .checked_add(amount)
            .ok_or(RaffleError::MathOverflow)?;

        let contribution = match self.position(&contributor) {
            Some(index) => {
                let entry = &mut self.entries[index];
                entry.amount = entry
                    .amount
                    .checked_add(amount)
                    .ok_or(RaffleError::MathOverflow)?;
                Contribution::Returning {
                    round_amount: entry.amount,
                }
            }
            None => {
                require!(
                    self.entries.len() < MAX_CONTRIBUTORS,
                    RaffleError::RoundFull
                );
                self.entries.push(LedgerEntry {
                    contributor,
                    amount,
                });
                Contribution::New {
                    round_amount: amount,
                }
            }
        };

        *lifetime = new_lifetime;
        Ok(contribution)
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn snapshot(&self) -> Vec<Pubkey> {
        self.entries.iter().map(|entry| entry.contributor).collect()
    }

    pub fn contributor_at(&self, index: usize) -> Option<Pubkey> {
        self.entries.get(index).map(|entry| entry.contributor)
    }

    /// Round amount of `contributor`, zero when absent.
    pub fn amount_of(&self, contributor: &Pubkey) -> u64 {
        self.position(contributor)
            .map(|index| self.entries[index].amount)
            .unwrap_or(0)
    }

    /// Drops every entry. Lifetime totals live outside the ledger and are untouched.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    fn position(&self, contributor: &Pubkey) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.contributor == *contributor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_raffle_err<T: std::fmt::Debug>(result: Result<T>, expected: RaffleError) {
        match result.unwrap_err() {
            Error::AnchorError(anchor_err) => {
                assert_eq!(anchor_err.error_code_number, 6000 + expected as u32);
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn first_contribution_creates_entry() {
        let mut ledger = RoundLedger::default();
        let alice = Pubkey::new_unique();
        let mut lifetime = 0;

        let outcome = ledger.record(alice, 100, &mut lifetime).unwrap();

        assert_eq!(outcome, Contribution::New { round_amount: 100 });
        assert_eq!(ledger.count(), 1);
        assert_eq!(ledger.amount_of(&alice), 100);
        assert_eq!(lifetime, 100);
    }

    #[test]
    fn returning_contributor_accumulates_without_duplicate_entry() {
        let mut ledger = RoundLedger::default();
        let alice = Pubkey::new_unique();
        let mut lifetime = 0;

        ledger.record(alice, 100, &mut lifetime).unwrap();
        let outcome = ledger.record(alice, 50, &mut lifetime).unwrap();

        assert_eq!(outcome, Contribution::Returning { round_amount: 150 });
        assert!(!outcome.is_new());
        assert_eq!(ledger.snapshot(), vec![alice]);
        assert_eq!(ledger.amount_of(&alice), 150);
        assert_eq!(lifetime, 150);
    }

    #[test]
    fn snapshot_preserves_insertion_order() {
        let mut ledger = RoundLedger::default();
        let keys: Vec<Pubkey> = (0..4).map(|_| Pubkey::new_unique()).collect();
        for key in &keys {
            ledger.record(*key, 1, &mut 0).unwrap();
        }
        ledger.record(keys[0], 5, &mut 0).unwrap();

        assert_eq!(ledger.snapshot(), keys);
        assert_eq!(ledger.contributor_at(2), Some(keys[2]));
        assert_eq!(ledger.contributor_at(4), None);
    }

    #[test]
    fn zero_amount_is_rejected_without_mutation() {
        let mut ledger = RoundLedger::default();
        let mut lifetime = 7;

        assert_raffle_err(
            ledger.record(Pubkey::new_unique(), 0, &mut lifetime),
            RaffleError::ZeroAmount,
        );
        assert!(ledger.is_empty());
        assert_eq!(lifetime, 7);
    }

    #[test]
    fn full_round_rejects_new_but_accepts_returning() {
        let mut ledger = RoundLedger::default();
        let first = Pubkey::new_unique();
        ledger.record(first, 1, &mut 0).unwrap();
        for _ in 1..MAX_CONTRIBUTORS {
            ledger.record(Pubkey::new_unique(), 1, &mut 0).unwrap();
        }

        let mut lifetime = 0;
        assert_raffle_err(
            ledger.record(Pubkey::new_unique(), 1, &mut lifetime),
            RaffleError::RoundFull,
        );
        assert_eq!(lifetime, 0);
        assert_eq!(ledger.count(), MAX_CONTRIBUTORS);

        ledger.record(first, 1, &mut 0).unwrap();
        assert_eq!(ledger.amount_of(&first), 2);
    }

    #[test]
    fn overflow_leaves_entry_and_lifetime_untouched() {
        let mut ledger = RoundLedger::default();
        let alice = Pubkey::new_unique();
        ledger.record(alice, u64::MAX, &mut 0).unwrap();

        let mut lifetime = 0;
        assert_raffle_err(
            ledger.record(alice, 1, &mut lifetime),
            RaffleError::MathOverflow,
        );
        assert_eq!(ledger.amount_of(&alice), u64::MAX);
        assert_eq!(lifetime, 0);
    }

    #[test]
    fn reset_clears_round_amounts() {
        let mut ledger = RoundLedger::default();
        let alice = Pubkey::new_unique();
        let mut lifetime = 0;
        ledger.record(alice, 40, &mut lifetime).unwrap();

        ledger.reset();

        assert_eq!(ledger.count(), 0);
        assert_eq!(ledger.amount_of(&alice), 0);
        assert_eq!(lifetime, 40);
    }
}
