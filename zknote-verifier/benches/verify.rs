use ark_ec::CurveGroup;
use ark_std::UniformRand;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::hint::black_box;

use zknote_primitives::{generator, Address, Fr, Note, ProofTranscript, PublicValue};
use zknote_prover::construct_join_split;
use zknote_verifier::verify_join_split;

fn fixture(values: &[u64], m: usize) -> (ProofTranscript, Address) {
    let mut rng = ChaCha20Rng::from_seed([90u8; 32]);
    let notes: Vec<Note> = values
        .iter()
        .map(|value| {
            let gamma = (generator() * Fr::rand(&mut rng)).into_affine();
            let mut owner = [0u8; 20];
            rng.fill_bytes(&mut owner);
            Note::new(*value, Fr::rand(&mut rng), gamma, Address(owner))
        })
        .collect();
    let sender = Address([9u8; 20]);
    let transcript = construct_join_split(&notes, m, sender, PublicValue::from(0i64), &mut rng)
        .expect("construct fixture");
    (transcript, sender)
}

fn bench_join_split_verify(c: &mut Criterion) {
    let mut g = c.benchmark_group("verify_join_split");
    g.throughput(Throughput::Elements(1));

    let cases: &[(&str, &[u64], usize)] = &[
        ("n2", &[10, 10], 1),
        ("n4", &[10, 20, 5, 25], 2),
        ("n8", &[10, 20, 30, 40, 25, 25, 25, 25], 4),
    ];
    for (label, values, m) in cases {
        let (transcript, sender) = fixture(values, *m);
        g.bench_function(BenchmarkId::from_parameter(label), |b| {
            b.iter(|| {
                verify_join_split(
                    black_box(&transcript),
                    *m,
                    sender,
                    PublicValue::from(0i64),
                )
                .expect("verify fixture");
            });
        });
    }

    g.finish();
}

criterion_group!(benches, bench_join_split_verify);
criterion_main!(benches);
