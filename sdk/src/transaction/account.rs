//! The account abstraction the transaction builder consumes.
//!
//! A transaction's sequence number must be exactly one above the source
//! account's last used number, so the builder needs something that can
//! report and advance a sequence counter. [`TransactionAccount`] is that
//! contract; [`Account`] is the plain in-memory implementation backed by a
//! keypair and an `i64`.

use crate::crypto::keys::KeyPair;

/// Sequence-number provider for [`TransactionBuilder`](super::TransactionBuilder).
///
/// The advance step is an explicit `&mut` transition: the builder owns its
/// account exclusively while building, so N builds yield N strictly
/// increasing sequence numbers with no lost updates.
pub trait TransactionAccount {
    /// The keypair identifying this account.
    fn keypair(&self) -> &KeyPair;

    /// The current sequence number.
    fn sequence_number(&self) -> i64;

    /// The sequence number the next transaction will use. Does not advance
    /// the counter.
    fn incremented_sequence_number(&self) -> i64;

    /// Advances the counter by one.
    fn increment_sequence_number(&mut self);
}

/// An account on the ledger, reduced to what transaction construction
/// needs: its keypair and its sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    keypair: KeyPair,
    sequence_number: i64,
}

impl Account {
    pub fn new(keypair: KeyPair, sequence_number: i64) -> Self {
        Self {
            keypair,
            sequence_number,
        }
    }
}

impl TransactionAccount for Account {
    fn keypair(&self) -> &KeyPair {
        &self.keypair
    }

    fn sequence_number(&self) -> i64 {
        self.sequence_number
    }

    fn incremented_sequence_number(&self) -> i64 {
        self.sequence_number + 1
    }

    fn increment_sequence_number(&mut self) {
        self.sequence_number += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incremented_sequence_number_does_not_advance() {
        let account = Account::new(KeyPair::random(), 100);
        assert_eq!(account.incremented_sequence_number(), 101);
        assert_eq!(account.incremented_sequence_number(), 101);
        assert_eq!(account.sequence_number(), 100);
    }

    #[test]
    fn increment_advances_by_one() {
        let mut account = Account::new(KeyPair::random(), 100);
        account.increment_sequence_number();
        assert_eq!(account.sequence_number(), 101);
    }

    #[test]
    fn keypair_accessor() {
        let keypair = KeyPair::random();
        let account = Account::new(keypair.clone(), 0);
        assert_eq!(account.keypair().account_id(), keypair.account_id());
    }
}
