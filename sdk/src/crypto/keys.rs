//! Ed25519 keypairs, signatures, and signer keys.
//!
//! [`KeyPair`] is the atomic unit of identity in Meridian. It always holds a
//! public key; it holds the secret half only when constructed from a seed,
//! so a keypair decoded from an account id can verify but never sign.
//!
//! Key material hygiene follows two rules. First, `KeyPair` does not
//! implement `Serialize`: exporting a secret is a deliberate act, done
//! through [`KeyPair::secret_seed`], which returns a buffer that wipes
//! itself on drop. Second, nothing in this module ever logs or `Debug`-prints
//! secret bytes.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use std::fmt;
use zeroize::Zeroizing;

use crate::crypto::strkey;
use crate::error::{Error, Result};
use crate::xdr::{XdrReader, XdrWriter};

/// Wire discriminant for ed25519 public keys. The only key type the
/// protocol currently defines.
const PUBLIC_KEY_TYPE_ED25519: u32 = 0;

// ---------------------------------------------------------------------------
// KeyPair
// ---------------------------------------------------------------------------

/// A Meridian identity: an ed25519 public key, optionally with its secret
/// key.
///
/// # Examples
///
/// ```
/// use meridian_sdk::crypto::keys::KeyPair;
///
/// let kp = KeyPair::random();
/// let signature = kp.sign(b"hello meridian").unwrap();
/// assert!(kp.verify(b"hello meridian", &signature));
///
/// // A keypair rebuilt from the account id alone cannot sign.
/// let verify_only = KeyPair::from_account_id(&kp.account_id()).unwrap();
/// assert!(!verify_only.can_sign());
/// ```
pub struct KeyPair {
    verifying: VerifyingKey,
    signing: Option<SigningKey>,
}

impl KeyPair {
    /// Generates a fresh keypair from the OS cryptographic RNG.
    pub fn random() -> Self {
        let signing = SigningKey::generate(&mut OsRng);
        Self {
            verifying: signing.verifying_key(),
            signing: Some(signing),
        }
    }

    /// Deterministically derives a keypair from a raw 32-byte seed.
    pub fn from_raw_seed(seed: &[u8; 32]) -> Self {
        let signing = SigningKey::from_bytes(seed);
        Self {
            verifying: signing.verifying_key(),
            signing: Some(signing),
        }
    }

    /// Derives a keypair from an `S...` strkey secret seed.
    ///
    /// The decoded seed bytes are zeroized before this returns, on every
    /// path.
    pub fn from_secret_seed(seed: &str) -> Result<Self> {
        let decoded = strkey::decode_secret_seed(seed)?;
        if decoded.len() != 32 {
            return Err(Error::InvalidStrKey(format!(
                "secret seed must decode to 32 bytes, got {}",
                decoded.len()
            )));
        }
        let mut raw = Zeroizing::new([0u8; 32]);
        raw.copy_from_slice(&decoded);
        Ok(Self::from_raw_seed(&raw))
    }

    /// Builds a verify-only keypair from a `G...` strkey account id.
    pub fn from_account_id(account_id: &str) -> Result<Self> {
        let decoded = strkey::decode_account_id(account_id)?;
        Self::from_public_key(&decoded)
    }

    /// Builds a verify-only keypair from raw public key bytes.
    ///
    /// Rejects inputs that are not 32 bytes or not a valid curve point.
    pub fn from_public_key(bytes: &[u8]) -> Result<Self> {
        let raw: [u8; 32] = bytes.try_into().map_err(|_| Error::InvalidPublicKey)?;
        let verifying = VerifyingKey::from_bytes(&raw).map_err(|_| Error::InvalidPublicKey)?;
        Ok(Self {
            verifying,
            signing: None,
        })
    }

    /// The `G...` strkey account id for this keypair.
    pub fn account_id(&self) -> String {
        strkey::encode_account_id(&self.verifying.to_bytes())
    }

    /// The `S...` strkey secret seed, or `None` for a verify-only keypair.
    /// The returned string zeroizes itself on drop.
    pub fn secret_seed(&self) -> Option<Zeroizing<String>> {
        self.signing.as_ref().map(|signing| {
            let seed = Zeroizing::new(signing.to_bytes());
            strkey::encode_secret_seed(&seed[..])
        })
    }

    /// Raw public key bytes.
    pub fn public_key(&self) -> [u8; 32] {
        self.verifying.to_bytes()
    }

    /// Whether this keypair holds the secret key.
    pub fn can_sign(&self) -> bool {
        self.signing.is_some()
    }

    /// Signs `data` with the secret key.
    ///
    /// Fails with [`Error::MissingSecretKey`] on a verify-only keypair.
    pub fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        let signing = self.signing.as_ref().ok_or(Error::MissingSecretKey)?;
        Ok(signing.sign(data).to_bytes().to_vec())
    }

    /// Verifies `signature` over `data` against this public key.
    ///
    /// A structurally invalid signature (wrong length, bad point) is simply
    /// `false`; the public key itself was validated at construction, so no
    /// other failure mode remains.
    pub fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        let raw: [u8; 64] = match signature.try_into() {
            Ok(raw) => raw,
            Err(_) => return false,
        };
        let signature = Signature::from_bytes(&raw);
        self.verifying.verify(data, &signature).is_ok()
    }

    /// The last four bytes of the wire-encoded public key.
    ///
    /// Attached to every signature so a verifier can locate the signer
    /// without transmitting the full key.
    pub fn signature_hint(&self) -> [u8; 4] {
        let mut writer = XdrWriter::new();
        self.write_xdr_public_key(&mut writer);
        let encoded = writer.into_bytes();
        let mut hint = [0u8; 4];
        hint.copy_from_slice(&encoded[encoded.len() - 4..]);
        hint
    }

    /// Signs `data` and pairs the signature with this keypair's hint.
    pub fn sign_decorated(&self, data: &[u8]) -> Result<DecoratedSignature> {
        Ok(DecoratedSignature {
            hint: self.signature_hint(),
            signature: self.sign(data)?,
        })
    }

    /// The signer key form of this keypair's public key.
    pub fn signer_key(&self) -> SignerKey {
        SignerKey::Ed25519(self.verifying.to_bytes())
    }

    /// Writes the wire form of the public key: key type discriminant plus
    /// 32 raw bytes.
    pub fn write_xdr_public_key(&self, writer: &mut XdrWriter) {
        writer.write_u32(PUBLIC_KEY_TYPE_ED25519);
        writer.write_fixed(&self.verifying.to_bytes());
    }

    /// Reads a wire-encoded public key into a verify-only keypair.
    pub fn read_xdr_public_key(reader: &mut XdrReader<'_>) -> Result<Self> {
        match reader.read_u32()? {
            PUBLIC_KEY_TYPE_ED25519 => {
                let bytes = reader.read_fixed(32)?;
                Self::from_public_key(&bytes)
                    .map_err(|_| Error::Decode("invalid ed25519 public key bytes".into()))
            }
            other => Err(Error::Decode(format!("unknown public key type {other}"))),
        }
    }
}

impl Clone for KeyPair {
    fn clone(&self) -> Self {
        Self {
            verifying: self.verifying,
            signing: self
                .signing
                .as_ref()
                .map(|s| SigningKey::from_bytes(&s.to_bytes())),
        }
    }
}

impl PartialEq for KeyPair {
    /// Keypairs compare by public key; a verify-only keypair equals its
    /// signing counterpart.
    fn eq(&self, other: &Self) -> bool {
        self.verifying.to_bytes() == other.verifying.to_bytes()
    }
}

impl Eq for KeyPair {}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Secret bytes never reach debug output, not even truncated.
        write!(f, "KeyPair({})", self.account_id())
    }
}

// ---------------------------------------------------------------------------
// DecoratedSignature
// ---------------------------------------------------------------------------

/// A signature paired with the 4-byte hint that identifies its signer.
///
/// For an ed25519 signer the hint is the tail of the wire-encoded public
/// key; for a hash-preimage signer it is the tail of the preimage's SHA-256
/// digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratedSignature {
    pub hint: [u8; 4],
    pub signature: Vec<u8>,
}

impl DecoratedSignature {
    pub fn write_xdr(&self, writer: &mut XdrWriter) {
        writer.write_fixed(&self.hint);
        writer.write_var(&self.signature);
    }

    pub fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self> {
        let hint_bytes = reader.read_fixed(4)?;
        let mut hint = [0u8; 4];
        hint.copy_from_slice(&hint_bytes);
        let signature = reader.read_var()?;
        Ok(Self { hint, signature })
    }
}

// ---------------------------------------------------------------------------
// SignerKey
// ---------------------------------------------------------------------------

/// The three authorization schemes a signer entry can carry: an ed25519
/// key, a pre-authorized transaction hash, or a SHA-256 preimage hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignerKey {
    Ed25519([u8; 32]),
    PreAuthTx([u8; 32]),
    HashX([u8; 32]),
}

impl SignerKey {
    /// Pre-authorizes the transaction with the given hash: once a matching
    /// transaction appears, it is considered signed by this entry.
    pub fn pre_auth_tx(hash: [u8; 32]) -> Self {
        SignerKey::PreAuthTx(hash)
    }

    /// Authorizes whoever can reveal a preimage hashing to `hash`.
    pub fn sha256_hash(hash: [u8; 32]) -> Self {
        SignerKey::HashX(hash)
    }

    /// The strkey form of this signer key (`G...`, `T...`, or `X...`).
    pub fn to_strkey(&self) -> String {
        match self {
            SignerKey::Ed25519(bytes) => strkey::encode_account_id(bytes),
            SignerKey::PreAuthTx(bytes) => strkey::encode_pre_auth_tx(bytes),
            SignerKey::HashX(bytes) => strkey::encode_sha256_hash(bytes),
        }
    }

    fn discriminant(&self) -> u32 {
        match self {
            SignerKey::Ed25519(_) => 0,
            SignerKey::PreAuthTx(_) => 1,
            SignerKey::HashX(_) => 2,
        }
    }

    pub fn write_xdr(&self, writer: &mut XdrWriter) {
        writer.write_u32(self.discriminant());
        match self {
            SignerKey::Ed25519(bytes) | SignerKey::PreAuthTx(bytes) | SignerKey::HashX(bytes) => {
                writer.write_fixed(bytes);
            }
        }
    }

    pub fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self> {
        let discriminant = reader.read_u32()?;
        let bytes = reader.read_fixed(32)?;
        let mut raw = [0u8; 32];
        raw.copy_from_slice(&bytes);
        match discriminant {
            0 => Ok(SignerKey::Ed25519(raw)),
            1 => Ok(SignerKey::PreAuthTx(raw)),
            2 => Ok(SignerKey::HashX(raw)),
            other => Err(Error::Decode(format!("unknown signer key type {other}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_keypair_can_sign_and_verify() {
        let kp = KeyPair::random();
        let sig = kp.sign(b"payment of 100.5 to carol").unwrap();
        assert!(kp.verify(b"payment of 100.5 to carol", &sig));
        assert!(!kp.verify(b"payment of 999.5 to carol", &sig));
    }

    #[test]
    fn from_raw_seed_is_deterministic() {
        let seed = [42u8; 32];
        let a = KeyPair::from_raw_seed(&seed);
        let b = KeyPair::from_raw_seed(&seed);
        assert_eq!(a.public_key(), b.public_key());
        assert_eq!(a, b);
    }

    #[test]
    fn account_id_roundtrip() {
        let kp = KeyPair::from_raw_seed(&[7u8; 32]);
        let account_id = kp.account_id();
        assert!(account_id.starts_with('G'));
        let restored = KeyPair::from_account_id(&account_id).unwrap();
        assert_eq!(restored.public_key(), kp.public_key());
        assert!(!restored.can_sign());
        assert!(restored.secret_seed().is_none());
    }

    #[test]
    fn secret_seed_roundtrip() {
        let kp = KeyPair::from_raw_seed(&[9u8; 32]);
        let seed = kp.secret_seed().unwrap();
        assert!(seed.starts_with('S'));
        let restored = KeyPair::from_secret_seed(&seed).unwrap();
        assert_eq!(restored.public_key(), kp.public_key());
        assert!(restored.can_sign());
    }

    #[test]
    fn verify_only_keypair_cannot_sign() {
        let kp = KeyPair::from_account_id(&KeyPair::random().account_id()).unwrap();
        assert!(matches!(kp.sign(b"data"), Err(Error::MissingSecretKey)));
    }

    #[test]
    fn verify_returns_false_on_malformed_signature() {
        let kp = KeyPair::random();
        assert!(!kp.verify(b"data", &[1, 2, 3]));
        assert!(!kp.verify(b"data", &[0u8; 64]));
    }

    #[test]
    fn signature_hint_is_tail_of_public_key() {
        let kp = KeyPair::random();
        let public = kp.public_key();
        assert_eq!(kp.signature_hint(), public[28..32]);
    }

    #[test]
    fn sign_decorated_pairs_hint_and_signature() {
        let kp = KeyPair::random();
        let decorated = kp.sign_decorated(b"data").unwrap();
        assert_eq!(decorated.hint, kp.signature_hint());
        assert!(kp.verify(b"data", &decorated.signature));
    }

    #[test]
    fn decorated_signature_xdr_roundtrip() {
        let decorated = DecoratedSignature {
            hint: [1, 2, 3, 4],
            signature: vec![9u8; 64],
        };
        let mut w = XdrWriter::new();
        decorated.write_xdr(&mut w);
        let bytes = w.into_bytes();
        let mut r = XdrReader::new(&bytes);
        assert_eq!(DecoratedSignature::read_xdr(&mut r).unwrap(), decorated);
    }

    #[test]
    fn public_key_xdr_roundtrip() {
        let kp = KeyPair::random();
        let mut w = XdrWriter::new();
        kp.write_xdr_public_key(&mut w);
        let bytes = w.into_bytes();
        assert_eq!(bytes.len(), 36);
        let mut r = XdrReader::new(&bytes);
        let restored = KeyPair::read_xdr_public_key(&mut r).unwrap();
        assert_eq!(restored.public_key(), kp.public_key());
    }

    #[test]
    fn unknown_public_key_type_fails_decode() {
        let mut w = XdrWriter::new();
        w.write_u32(99);
        w.write_fixed(&[0u8; 32]);
        let bytes = w.into_bytes();
        let mut r = XdrReader::new(&bytes);
        assert!(matches!(
            KeyPair::read_xdr_public_key(&mut r),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn signer_key_strkey_prefixes() {
        let hash = [5u8; 32];
        assert!(SignerKey::pre_auth_tx(hash).to_strkey().starts_with('T'));
        assert!(SignerKey::sha256_hash(hash).to_strkey().starts_with('X'));
    }

    #[test]
    fn signer_key_xdr_roundtrip() {
        for key in [
            SignerKey::Ed25519([1u8; 32]),
            SignerKey::PreAuthTx([2u8; 32]),
            SignerKey::HashX([3u8; 32]),
        ] {
            let mut w = XdrWriter::new();
            key.write_xdr(&mut w);
            let bytes = w.into_bytes();
            let mut r = XdrReader::new(&bytes);
            assert_eq!(SignerKey::read_xdr(&mut r).unwrap(), key);
        }
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let kp = KeyPair::from_raw_seed(&[3u8; 32]);
        let debug = format!("{kp:?}");
        assert!(debug.starts_with("KeyPair(G"));
        let seed = kp.secret_seed().unwrap();
        assert!(!debug.contains(&seed[1..10]));
    }
}
