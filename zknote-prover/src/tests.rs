use ark_ec::CurveGroup;
use ark_std::{UniformRand, Zero};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use zknote_primitives::{
    generator, Address, Fr, Note, ProofError, PublicValue, K_MAX,
};

use crate::{
    construct_dividend, construct_join_split, construct_join_split_with_owner,
    generate_blinding_scalars,
};

fn test_rng(tag: u8) -> ChaCha20Rng {
    ChaCha20Rng::from_seed([tag; 32])
}

fn sample_address(rng: &mut ChaCha20Rng) -> Address {
    let mut raw = [0u8; 20];
    rng.fill_bytes(&mut raw);
    Address(raw)
}

fn sample_note(rng: &mut ChaCha20Rng, value: u64) -> Note {
    let gamma = (generator() * Fr::rand(rng)).into_affine();
    Note::new(value, Fr::rand(rng), gamma, sample_address(rng))
}

fn sample_notes(rng: &mut ChaCha20Rng, values: &[u64]) -> Vec<Note> {
    values.iter().map(|value| sample_note(rng, *value)).collect()
}

#[test]
fn blinding_scalars_balance_exactly_for_every_split() {
    let mut rng = test_rng(40);
    for n in 1..=6usize {
        for m in 0..=n {
            let pairs = generate_blinding_scalars(n, m, &mut rng);
            assert_eq!(pairs.len(), n);
            let input_sum: Fr = pairs[..m].iter().map(|pair| pair.bk).sum();
            let output_sum: Fr = pairs[m..].iter().map(|pair| pair.bk).sum();
            assert_eq!(input_sum, output_sum, "unbalanced for n={n} m={m}");
        }
    }
}

#[test]
fn example_statement_emits_the_public_value_row() {
    let mut rng = test_rng(41);
    let notes = sample_notes(&mut rng, &[200, 20, 180]);
    let sender = sample_address(&mut rng);

    let transcript =
        construct_join_split(&notes, 1, sender, PublicValue::from(0i64), &mut rng)
            .expect("construct");

    assert_eq!(transcript.rows.len(), 3);
    let last_row_hex = transcript.rows_hex().pop().expect("rows");
    assert_eq!(last_row_hex[0], format!("0x{}", "0".repeat(64)));
    for row in &transcript.rows {
        assert!(!row.a_bar.is_zero());
    }
}

#[test]
fn last_row_carries_the_normalized_negative_delta() {
    let mut rng = test_rng(42);
    let notes = sample_notes(&mut rng, &[50]);
    let sender = sample_address(&mut rng);

    let transcript =
        construct_join_split(&notes, 0, sender, PublicValue::from(-50i64), &mut rng)
            .expect("construct");

    let last = transcript.rows.last().expect("rows");
    assert_eq!(last.k_bar, -Fr::from(50u64));
}

#[test]
fn validation_rejects_before_anything_is_built() {
    let mut rng = test_rng(43);
    let sender = sample_address(&mut rng);
    let zero = PublicValue::from(0i64);

    let oversized = sample_notes(&mut rng, &[K_MAX, 10]);
    assert_eq!(
        construct_join_split(&oversized, 1, sender, zero, &mut rng),
        Err(ProofError::MalformedNoteValue)
    );

    let mut notes = sample_notes(&mut rng, &[5, 5]);
    notes[1].a = Fr::zero();
    assert_eq!(
        construct_join_split(&notes, 1, sender, zero, &mut rng),
        Err(ProofError::MalformedViewingKey)
    );

    let notes = sample_notes(&mut rng, &[5, 5]);
    assert_eq!(
        construct_join_split(&notes, 3, sender, zero, &mut rng),
        Err(ProofError::InputCountExceedsNoteCount)
    );

    assert_eq!(
        construct_join_split(&[], 0, sender, zero, &mut rng),
        Err(ProofError::InvalidInput("note array is empty"))
    );

    // the group order itself is not a canonical public value
    let order: PublicValue = "0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001"
        .parse()
        .expect("parse modulus word");
    let notes = sample_notes(&mut rng, &[5, 5]);
    assert_eq!(
        construct_join_split(&notes, 1, sender, order, &mut rng),
        Err(ProofError::MalformedPublicValue)
    );
}

#[test]
fn construction_is_randomized_across_invocations() {
    let mut setup = test_rng(44);
    let notes = sample_notes(&mut setup, &[30, 30]);
    let sender = sample_address(&mut setup);

    let first =
        construct_join_split(&notes, 1, sender, PublicValue::from(0i64), &mut test_rng(1))
            .expect("first");
    let second =
        construct_join_split(&notes, 1, sender, PublicValue::from(0i64), &mut test_rng(2))
            .expect("second");

    assert_ne!(first.challenge, second.challenge);
    assert_ne!(first.rows[0].k_bar, second.rows[0].k_bar);
}

#[test]
fn identical_seeds_reproduce_the_transcript() {
    let mut setup = test_rng(45);
    let notes = sample_notes(&mut setup, &[10, 4, 6]);
    let sender = sample_address(&mut setup);
    let owner = sample_address(&mut setup);

    let build = |rng: &mut ChaCha20Rng| {
        construct_join_split_with_owner(&notes, 1, sender, PublicValue::from(0i64), owner, rng)
            .expect("construct")
    };
    assert_eq!(build(&mut test_rng(7)), build(&mut test_rng(7)));
}

#[test]
fn public_owner_changes_the_challenge() {
    let mut setup = test_rng(46);
    let notes = sample_notes(&mut setup, &[10, 10]);
    let sender = sample_address(&mut setup);
    let owner = sample_address(&mut setup);

    let plain =
        construct_join_split(&notes, 1, sender, PublicValue::from(0i64), &mut test_rng(8))
            .expect("plain");
    let owned = construct_join_split_with_owner(
        &notes,
        1,
        sender,
        PublicValue::from(0i64),
        owner,
        &mut test_rng(8),
    )
    .expect("owned");

    assert_ne!(plain.challenge, owned.challenge);
}

#[test]
fn ratio_statement_requires_three_notes_and_discloses_every_response() {
    let mut rng = test_rng(47);
    let sender = sample_address(&mut rng);
    let za = PublicValue::from(5u64);
    let zb = PublicValue::from(3u64);

    let two = sample_notes(&mut rng, &[100, 40]);
    assert_eq!(
        construct_dividend(&two, za, zb, sender, &mut rng),
        Err(ProofError::InvalidInput("ratio statement takes exactly three notes"))
    );

    let notes = sample_notes(&mut rng, &[100, 40, 60]);
    let transcript = construct_dividend(&notes, za, zb, sender, &mut rng).expect("construct");
    assert_eq!(transcript.rows.len(), 3);
    // no substitution row: the last response is blinded, not a public value
    assert_ne!(transcript.rows[2].k_bar, Fr::from(3u64));
}
