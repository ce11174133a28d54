// Signing and codec benchmarks for the Meridian SDK.
//
// Covers ed25519 keypair generation, transaction hashing and signing, and
// envelope encoding at various operation counts.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use meridian_sdk::crypto::keys::KeyPair;
use meridian_sdk::network::Network;
use meridian_sdk::operation::PaymentBuilder;
use meridian_sdk::transaction::{Account, Transaction, TransactionBuilder};
use meridian_sdk::types::Asset;

fn build_transaction(signer: &KeyPair, operations: usize) -> Transaction {
    let mut builder = TransactionBuilder::new(Account::new(signer.clone(), 0))
        .network(Network::test());
    for _ in 0..operations {
        builder = builder.add_operation(
            PaymentBuilder::new(KeyPair::from_raw_seed(&[9u8; 32]), Asset::native(), "12.5")
                .build(),
        );
    }
    builder.build().expect("at least one operation")
}

fn bench_keypair_generation(c: &mut Criterion) {
    c.bench_function("ed25519/keypair_generate", |b| {
        b.iter(KeyPair::random);
    });
}

fn bench_transaction_hash(c: &mut Criterion) {
    let signer = KeyPair::random();
    let tx = build_transaction(&signer, 1);

    c.bench_function("transaction/hash", |b| {
        b.iter(|| tx.hash().unwrap());
    });
}

fn bench_sign_transaction(c: &mut Criterion) {
    let signer = KeyPair::random();

    c.bench_function("transaction/sign", |b| {
        b.iter(|| {
            let mut tx = build_transaction(&signer, 1);
            tx.sign(&signer).unwrap();
            tx
        });
    });
}

fn bench_envelope_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("envelope/encode_base64");

    for size in [1, 10, 50, 100] {
        let signer = KeyPair::random();
        let mut tx = build_transaction(&signer, size);
        tx.sign(&signer).unwrap();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &tx, |b, tx| {
            b.iter(|| tx.to_envelope_xdr_base64().unwrap());
        });
    }

    group.finish();
}

fn bench_envelope_decode(c: &mut Criterion) {
    let signer = KeyPair::random();
    let mut tx = build_transaction(&signer, 10);
    tx.sign(&signer).unwrap();
    let encoded = tx.to_envelope_xdr_base64().unwrap();

    c.bench_function("envelope/decode_base64", |b| {
        b.iter(|| Transaction::from_envelope_xdr_base64(&encoded).unwrap());
    });
}

criterion_group!(
    benches,
    bench_keypair_generation,
    bench_transaction_hash,
    bench_sign_transaction,
    bench_envelope_encode,
    bench_envelope_decode,
);
criterion_main!(benches);
