//! Transaction construction via the builder pattern.
//!
//! The [`TransactionBuilder`] owns an account abstraction exclusively for
//! the duration of construction. Each `build()` uses the account's
//! incremented sequence number and then advances the counter, both inside
//! the same `&mut` call, so repeated builds on one builder yield strictly
//! increasing sequence numbers with no window for another writer to slip
//! in between.
//!
//! The builder does not sign. Building and signing are separate steps
//! because the signing key may live elsewhere (hardware signer, a
//! cosigner across the network), and an unsigned transaction is still
//! useful for fee inspection and hashing.

use crate::config;
use crate::error::{Error, Result};
use crate::network::Network;
use crate::operation::Operation;
use crate::transaction::account::TransactionAccount;
use crate::transaction::Transaction;
use crate::types::{Memo, TimeBounds};

/// Fluent builder for [`Transaction`]s.
///
/// At least one operation is required. The fee is computed as
/// `operation count * 100`. Time bounds may be set at most once; a second
/// attempt is an error rather than a silent overwrite.
///
/// # Examples
///
/// ```
/// use meridian_sdk::crypto::keys::KeyPair;
/// use meridian_sdk::network::Network;
/// use meridian_sdk::operation::PaymentBuilder;
/// use meridian_sdk::transaction::{Account, TransactionBuilder};
/// use meridian_sdk::types::Asset;
///
/// let signer = KeyPair::random();
/// let destination = KeyPair::random();
///
/// let mut builder = TransactionBuilder::new(Account::new(signer.clone(), 0))
///     .network(Network::test())
///     .add_operation(PaymentBuilder::new(destination, Asset::native(), "12.5").build());
///
/// let mut tx = builder.build().unwrap();
/// tx.sign(&signer).unwrap();
/// let envelope = tx.to_envelope_xdr_base64().unwrap();
/// assert!(!envelope.is_empty());
/// ```
#[derive(Debug)]
pub struct TransactionBuilder<A: TransactionAccount> {
    source_account: A,
    operations: Vec<Operation>,
    memo: Memo,
    time_bounds: Option<TimeBounds>,
    network: Option<Network>,
}

impl<A: TransactionAccount> TransactionBuilder<A> {
    pub fn new(source_account: A) -> Self {
        Self {
            source_account,
            operations: Vec::new(),
            memo: Memo::None,
            time_bounds: None,
            network: None,
        }
    }

    /// Number of operations added so far.
    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }

    /// Appends an operation. Order is preserved on the wire.
    pub fn add_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Sets the transaction memo. Defaults to [`Memo::None`].
    pub fn memo(mut self, memo: Memo) -> Self {
        self.memo = memo;
        self
    }

    /// Sets the validity window. May be called at most once.
    pub fn time_bounds(mut self, time_bounds: TimeBounds) -> Result<Self> {
        if self.time_bounds.is_some() {
            return Err(Error::TimeBoundsAlreadySet);
        }
        self.time_bounds = Some(time_bounds);
        Ok(self)
    }

    /// Binds the network the transaction will be signed for. Without one,
    /// the built transaction cannot be hashed or signed until
    /// [`Transaction::with_network`] attaches a network.
    pub fn network(mut self, network: Network) -> Self {
        self.network = Some(network);
        self
    }

    /// Builds a transaction at the account's next sequence number and
    /// advances the account.
    ///
    /// Fails with [`Error::NoOperations`] when no operation was added. On
    /// success the builder's account has moved one sequence number
    /// forward, so a subsequent `build()` produces the next transaction in
    /// line.
    pub fn build(&mut self) -> Result<Transaction> {
        if self.operations.is_empty() {
            return Err(Error::NoOperations);
        }
        let fee = self.operations.len() as u32 * config::BASE_FEE;
        let transaction = Transaction::new(
            self.source_account.keypair().clone(),
            fee,
            self.source_account.incremented_sequence_number(),
            self.operations.clone(),
            self.memo.clone(),
            self.time_bounds,
            self.network.clone(),
        )?;
        // Advance only after construction succeeded, inside the same
        // exclusive borrow.
        self.source_account.increment_sequence_number();
        Ok(transaction)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::KeyPair;
    use crate::operation::{InflationBuilder, PaymentBuilder};
    use crate::transaction::Account;
    use crate::types::Asset;

    fn keypair(tag: u8) -> KeyPair {
        KeyPair::from_raw_seed(&[tag; 32])
    }

    fn payment() -> Operation {
        PaymentBuilder::new(keypair(31), Asset::native(), "10").build()
    }

    #[test]
    fn build_without_operations_fails() {
        let mut builder = TransactionBuilder::new(Account::new(keypair(30), 0));
        assert!(matches!(builder.build(), Err(Error::NoOperations)));
    }

    #[test]
    fn single_operation_sets_base_fee() {
        let mut builder =
            TransactionBuilder::new(Account::new(keypair(30), 0)).add_operation(payment());
        let tx = builder.build().unwrap();
        assert_eq!(tx.fee(), 100);
        assert_eq!(tx.operations().len(), 1);
    }

    #[test]
    fn fee_scales_with_operation_count() {
        let mut builder = TransactionBuilder::new(Account::new(keypair(30), 0))
            .add_operation(payment())
            .add_operation(InflationBuilder::new().build())
            .add_operation(payment());
        assert_eq!(builder.operation_count(), 3);
        let tx = builder.build().unwrap();
        assert_eq!(tx.fee(), 300);
    }

    #[test]
    fn build_uses_incremented_sequence_number() {
        let mut builder =
            TransactionBuilder::new(Account::new(keypair(30), 41)).add_operation(payment());
        let tx = builder.build().unwrap();
        assert_eq!(tx.sequence_number(), 42);
    }

    #[test]
    fn consecutive_builds_increment_by_exactly_one() {
        let mut builder =
            TransactionBuilder::new(Account::new(keypair(30), 100)).add_operation(payment());
        let first = builder.build().unwrap();
        let second = builder.build().unwrap();
        assert_eq!(first.sequence_number(), 101);
        assert_eq!(second.sequence_number(), 102);
        assert_eq!(second.sequence_number() - first.sequence_number(), 1);
    }

    #[test]
    fn failed_build_does_not_advance_sequence() {
        let mut builder = TransactionBuilder::new(Account::new(keypair(30), 100));
        assert!(builder.build().is_err());
        let mut builder = builder.add_operation(payment());
        assert_eq!(builder.build().unwrap().sequence_number(), 101);
    }

    #[test]
    fn default_memo_is_none() {
        let mut builder =
            TransactionBuilder::new(Account::new(keypair(30), 0)).add_operation(payment());
        assert_eq!(builder.build().unwrap().memo(), &Memo::None);
    }

    #[test]
    fn time_bounds_can_only_be_set_once() {
        let bounds = TimeBounds::new(1, 2).unwrap();
        let result = TransactionBuilder::new(Account::new(keypair(30), 0))
            .time_bounds(bounds)
            .unwrap()
            .time_bounds(bounds);
        assert!(matches!(result, Err(Error::TimeBoundsAlreadySet)));
    }

    #[test]
    fn network_binding_carries_into_transaction() {
        let mut builder = TransactionBuilder::new(Account::new(keypair(30), 0))
            .network(Network::test())
            .add_operation(payment());
        let tx = builder.build().unwrap();
        assert_eq!(tx.network(), Some(&Network::test()));
        assert!(tx.hash().is_ok());
    }
}
