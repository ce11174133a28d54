//! Network selection.
//!
//! A [`Network`] identifies which Meridian ledger a transaction is scoped
//! to. The passphrase's SHA-256 digest is the network id, and that id is
//! the first ingredient of every signature base, so a transaction signed
//! for the test network can never be replayed on the public one.
//!
//! There is no ambient "current network" anywhere in this crate. A
//! `Network` is a plain value: bind one to a transaction through
//! [`TransactionBuilder::network`](crate::transaction::TransactionBuilder::network)
//! or [`Transaction::with_network`](crate::transaction::Transaction::with_network),
//! and concurrent use of different networks in one process just works.

use crate::config;
use crate::crypto::hash::sha256;

/// A ledger network, identified by its passphrase.
///
/// # Examples
///
/// ```
/// use meridian_sdk::network::Network;
///
/// let testnet = Network::test();
/// assert_ne!(testnet.network_id(), Network::public().network_id());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    passphrase: String,
}

impl Network {
    /// A network with a custom passphrase, for private deployments.
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
        }
    }

    /// The public Meridian network.
    pub fn public() -> Self {
        Self::new(config::PUBLIC_NETWORK_PASSPHRASE)
    }

    /// The Meridian test network.
    pub fn test() -> Self {
        Self::new(config::TEST_NETWORK_PASSPHRASE)
    }

    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// The network id: SHA-256 of the passphrase.
    pub fn network_id(&self) -> [u8; 32] {
        sha256(self.passphrase.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_id_is_sha256_of_passphrase() {
        let network = Network::new("A private meridian deployment");
        assert_eq!(
            network.network_id(),
            sha256(b"A private meridian deployment")
        );
    }

    #[test]
    fn public_and_test_networks_differ() {
        assert_ne!(Network::public(), Network::test());
        assert_ne!(Network::public().network_id(), Network::test().network_id());
    }

    #[test]
    fn same_passphrase_same_id() {
        let a = Network::new(config::TEST_NETWORK_PASSPHRASE);
        assert_eq!(a, Network::test());
        assert_eq!(a.network_id(), Network::test().network_id());
    }
}
