// Encoding, signing and decoding benchmarks for Minter transactions.
//
// Covers the signing hash, single-key signing, full decode with signer
// recovery, and multisend encoding at growing recipient counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use minter_tx::config::ChainId;
use minter_tx::crypto::PrivateKey;
use minter_tx::identity::Address;
use minter_tx::transaction::{SignatureType, Transaction, TxBuilder};

fn sample_tx() -> Transaction {
    TxBuilder::new()
        .nonce(1u32)
        .chain_id(ChainId::Testnet)
        .gas_price(1u32)
        .gas_coin("MNT")
        .send_coin()
        .coin("MNT")
        .to(Address::zero())
        .value(&"10".parse().unwrap())
        .build()
}

fn bench_signing_hash(c: &mut Criterion) {
    let tx = sample_tx();
    c.bench_function("send_coin/signing_hash", |b| {
        b.iter(|| black_box(&tx).signing_hash(SignatureType::Single));
    });
}

fn bench_sign_single(c: &mut Criterion) {
    let key = PrivateKey::generate();
    c.bench_function("send_coin/sign_single", |b| {
        b.iter(|| {
            let mut tx = sample_tx();
            tx.sign_single(&key).unwrap()
        });
    });
}

fn bench_decode(c: &mut Criterion) {
    let key = PrivateKey::generate();
    let bytes = sample_tx().sign_single(&key).unwrap();

    c.bench_function("send_coin/decode", |b| {
        b.iter(|| Transaction::decode(black_box(&bytes)).unwrap());
    });
    c.bench_function("send_coin/decode_and_recover", |b| {
        b.iter(|| {
            Transaction::decode(black_box(&bytes))
                .unwrap()
                .sender_address()
                .unwrap()
        });
    });
}

fn bench_multisend_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("multisend/encode");

    for recipients in [1usize, 10, 100] {
        let mut builder = TxBuilder::new().gas_coin("MNT").multisend();
        for i in 0..recipients {
            builder = builder.add_item(
                "MNT",
                Address::from_bytes([i as u8; 20]),
                &"1".parse().unwrap(),
            );
        }
        let tx = builder.build();

        group.throughput(Throughput::Elements(recipients as u64));
        group.bench_with_input(BenchmarkId::from_parameter(recipients), &tx, |b, tx| {
            b.iter(|| tx.encode());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_signing_hash,
    bench_sign_single,
    bench_decode,
    bench_multisend_encode
);
criterion_main!(benches);
