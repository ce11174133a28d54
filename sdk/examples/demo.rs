//! Interactive CLI demo of the full Meridian transaction lifecycle.
//!
//! Walks through keypair generation, strkey encoding, transaction
//! construction with several operation kinds, network-scoped hashing, both
//! signature schemes, and the envelope encode/decode round trip. The output
//! uses ANSI escape codes for colored, storytelling-style terminal
//! rendering.
//!
//! Run with:
//!   cargo run --example demo --release

use std::time::Instant;

use meridian_sdk::crypto::keys::{KeyPair, SignerKey};
use meridian_sdk::network::Network;
use meridian_sdk::operation::{
    CreateAccountBuilder, ManageOfferBuilder, PaymentBuilder, SetOptionsBuilder,
};
use meridian_sdk::transaction::{Account, Transaction, TransactionBuilder};
use meridian_sdk::types::{Asset, Memo, TimeBounds};

// ---------------------------------------------------------------------------
// ANSI color constants
// ---------------------------------------------------------------------------

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const MAGENTA: &str = "\x1b[35m";
const CYAN: &str = "\x1b[36m";
const WHITE: &str = "\x1b[37m";

const BG_BLUE: &str = "\x1b[44m";

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

fn banner() {
    println!();
    println!(
        "{BG_BLUE}{BOLD}{WHITE}                                                                    {RESET}"
    );
    println!(
        "{BG_BLUE}{BOLD}{WHITE}    MERIDIAN SDK  --  Transaction Lifecycle Demo                    {RESET}"
    );
    println!(
        "{BG_BLUE}{BOLD}{WHITE}    Version 0.1.0  |  Ed25519 + SHA-256 + XDR                       {RESET}"
    );
    println!(
        "{BG_BLUE}{BOLD}{WHITE}                                                                    {RESET}"
    );
    println!();
}

fn section(num: u32, title: &str) {
    println!();
    println!(
        "{BOLD}{CYAN}===[{YELLOW} Step {num} {CYAN}]=============================================================={RESET}"
    );
    println!("{BOLD}{WHITE}  {title}{RESET}");
    println!(
        "{CYAN}------------------------------------------------------------------------{RESET}"
    );
}

fn subsection(text: &str) {
    println!("{DIM}{CYAN}  >> {text}{RESET}");
}

fn success(text: &str) {
    println!("{GREEN}  [OK] {text}{RESET}");
}

fn info(label: &str, value: &str) {
    println!("{WHITE}  {BOLD}{label}:{RESET} {YELLOW}{value}{RESET}");
}

fn timing(label: &str, elapsed: std::time::Duration) {
    let ms = elapsed.as_secs_f64() * 1000.0;
    println!("{DIM}{MAGENTA}  [{label}: {ms:.2} ms]{RESET}");
}

fn key_display(name: &str, key: &str, color: &str) {
    let prefix = &key[..6];
    let suffix = &key[key.len() - 6..];
    println!(
        "  {color}{BOLD}{name}{RESET}  {DIM}{prefix}...{suffix}{RESET}  {DIM}({} chars){RESET}",
        key.len()
    );
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    let demo_start = Instant::now();

    banner();

    // -----------------------------------------------------------------------
    // Step 1: Identity Creation
    // -----------------------------------------------------------------------

    section(1, "Keypair Generation & Strkey Encoding");
    subsection("Generating ed25519 keypairs and deriving strkey account ids...");

    let t = Instant::now();
    let alice = KeyPair::random();
    let bob = KeyPair::random();
    let issuer = KeyPair::random();
    timing("keygen x3", t.elapsed());

    println!();
    key_display("Alice   ", &alice.account_id(), BLUE);
    key_display("Bob     ", &bob.account_id(), GREEN);
    key_display("Issuer  ", &issuer.account_id(), MAGENTA);
    println!();

    // Verify the account id round trip.
    let alice_recovered = KeyPair::from_account_id(&alice.account_id()).unwrap();
    assert_eq!(alice_recovered.public_key(), alice.public_key());
    assert!(!alice_recovered.can_sign());
    success("All account ids start with 'G' and pass strkey roundtrip verification");

    let seed = alice.secret_seed().unwrap();
    key_display("Seed    ", &seed, YELLOW);
    success("Secret seed starts with 'S' and zeroizes itself on drop");

    // -----------------------------------------------------------------------
    // Step 2: Network Selection
    // -----------------------------------------------------------------------

    section(2, "Network Selection");
    subsection("Deriving the test network id from its passphrase...");

    let network = Network::test();
    info("Passphrase", network.passphrase());
    info("Network id", &hex::encode(network.network_id()));
    success("Network id is the SHA-256 of the passphrase");

    // -----------------------------------------------------------------------
    // Step 3: Transaction Construction
    // -----------------------------------------------------------------------

    section(3, "Transaction Construction");
    subsection("Assembling four operations against Alice's account...");

    let usd = Asset::credit("USD", issuer.clone()).unwrap();

    let t = Instant::now();
    let mut builder = TransactionBuilder::new(Account::new(alice.clone(), 100))
        .network(network.clone())
        .memo(Memo::text("demo run").unwrap())
        .time_bounds(TimeBounds::new(0, 1_900_000_000).unwrap())
        .unwrap()
        .add_operation(CreateAccountBuilder::new(bob.clone(), "1000").build())
        .add_operation(PaymentBuilder::new(bob.clone(), usd.clone(), "25.75").build())
        .add_operation(
            ManageOfferBuilder::new(Asset::native(), usd, "10", "0.5").build(),
        )
        .add_operation(
            SetOptionsBuilder::new()
                .home_domain("demo.meridian.example.org")
                .signer(SignerKey::sha256_hash([7u8; 32]), 1)
                .build()
                .unwrap(),
        );
    let mut tx = builder.build().unwrap();
    timing("build", t.elapsed());

    info("Sequence number", &tx.sequence_number().to_string());
    info("Fee", &format!("{} (4 operations x 100)", tx.fee()));
    success("Builder advanced the account to the next sequence number");

    // -----------------------------------------------------------------------
    // Step 4: Hashing & Signing
    // -----------------------------------------------------------------------

    section(4, "Network-Scoped Hashing & Signing");
    subsection("Hashing the signature base and signing with both schemes...");

    let t = Instant::now();
    let hash = tx.hash().unwrap();
    tx.sign(&alice).unwrap();
    tx.sign_preimage(b"open sesame");
    timing("hash + sign x2", t.elapsed());

    info("Transaction hash", &hex::encode(hash));
    info(
        "Signature 1 hint",
        &format!("{} (tail of Alice's wire key)", hex::encode(tx.signatures()[0].hint)),
    );
    info(
        "Signature 2 hint",
        &format!("{} (tail of the preimage digest)", hex::encode(tx.signatures()[1].hint)),
    );
    success("Two decorated signatures appended, in order");

    // -----------------------------------------------------------------------
    // Step 5: Envelope Round Trip
    // -----------------------------------------------------------------------

    section(5, "Envelope Encode / Decode Round Trip");
    subsection("Encoding the submittable base64 envelope and decoding it back...");

    let t = Instant::now();
    let envelope = tx.to_envelope_xdr_base64().unwrap();
    let decoded = Transaction::from_envelope_xdr_base64(&envelope).unwrap();
    timing("encode + decode", t.elapsed());

    info("Envelope length", &format!("{} base64 chars", envelope.len()));
    info("Envelope preview", &format!("{}...", &envelope[..48]));

    assert_eq!(decoded.operations(), tx.operations());
    assert_eq!(decoded.signatures(), tx.signatures());
    success("Decoded transaction matches: operations, memo, bounds, signatures");

    // Rebind the network and verify Alice's signature against the hash.
    let rebound = decoded.with_network(network);
    assert_eq!(rebound.hash().unwrap(), hash);
    assert!(alice.verify(&hash, &rebound.signatures()[0].signature));
    success("Signature verifies against the rebound network-scoped hash");

    // -----------------------------------------------------------------------
    // Done
    // -----------------------------------------------------------------------

    println!();
    println!(
        "{BOLD}{GREEN}  Demo complete.{RESET} {DIM}Total time: {:.2} ms{RESET}",
        demo_start.elapsed().as_secs_f64() * 1000.0
    );
    println!();
}
