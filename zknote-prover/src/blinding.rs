//! Blinding scalars and blinding commitments.
//!
//! Every note in a statement gets an ephemeral scalar pair `(bk, ba)`.
//! All but the last are uniform; the last `bk` is forced from a running
//! accumulator so that the input-side and output-side sums coincide
//! exactly. That zero-sum constraint mirrors the public value relation
//! and is what lets the disclosed responses satisfy it without exposing
//! any note value.
//!
//! Pairs exist only for the duration of one construction and must never
//! be reused across proofs; reuse collapses the zero-knowledge
//! property. Callers hand in a fresh CSPRNG per invocation and drop the
//! pairs with the transcript build.

use ark_ec::CurveGroup;
use ark_std::{UniformRand, Zero};
use rand::{CryptoRng, Rng};

use zknote_primitives::{aux_generator, Fr, G1Affine, HashAccumulator, Note};

/// Ephemeral per-note blinding scalar pair.
#[derive(Debug, Clone)]
pub struct BlindingScalarPair {
    /// Value-side blinding scalar.
    pub bk: Fr,
    /// Viewing-key-side blinding scalar.
    pub ba: Fr,
}

/// A note's full blinding datum: the scalar pair, the blinding
/// commitment `B` that enters the challenge, and the rolling-hash
/// multiplier `x` (zero for input notes).
#[derive(Debug, Clone)]
pub struct BlindingFactor {
    /// Value-side blinding scalar.
    pub bk: Fr,
    /// Viewing-key-side blinding scalar.
    pub ba: Fr,
    /// Blinding commitment absorbed into the challenge.
    pub b: G1Affine,
    /// Rolling-hash multiplier, zero for input notes.
    pub x: Fr,
}

/// Generate blinding scalar pairs for `n` notes split `m` inputs and
/// `n - m` outputs.
///
/// Expressed as a left fold over the indices carrying the running
/// value-side balance: inputs add their `bk`, outputs subtract theirs,
/// and the final pair is forced (`-running` when every note is an
/// input, `running` otherwise) so the fold ends at zero. The zero-sum
/// guarantee is asserted directly by tests over the returned pairs.
///
/// Public so the balance property can be exercised in isolation.
pub fn generate_blinding_scalars<R: Rng + CryptoRng>(
    n: usize,
    m: usize,
    rng: &mut R,
) -> Vec<BlindingScalarPair> {
    let (pairs, _balance) = (0..n).fold(
        (Vec::with_capacity(n), Fr::zero()),
        |(mut pairs, running_bk), index| {
            let bk = if index + 1 == n {
                if n == m {
                    -running_bk
                } else {
                    running_bk
                }
            } else {
                Fr::rand(rng)
            };
            let ba = Fr::rand(rng);
            let running_bk = if index + 1 > m {
                running_bk - bk
            } else {
                running_bk + bk
            };
            pairs.push(BlindingScalarPair { bk, ba });
            (pairs, running_bk)
        },
    );
    pairs
}

/// Build the per-note blinding factors.
///
/// `rolling` must already be seeded with every note's commitment pair.
/// Input notes commit as `B = gamma * bk + h * ba`; each output note
/// first drains the accumulator for its multiplier `x` and commits as
/// `B = gamma * (bk * x) + h * (ba * x)`, which folds all output-note
/// relations into the single downstream check.
pub(crate) fn compute_blinding_factors(
    notes: &[Note],
    m: usize,
    scalars: &[BlindingScalarPair],
    rolling: &mut HashAccumulator,
) -> Vec<BlindingFactor> {
    let h = aux_generator();
    notes
        .iter()
        .zip(scalars)
        .enumerate()
        .map(|(index, (note, pair))| {
            if index + 1 > m {
                let x = rolling.drain();
                let b = (note.gamma * (pair.bk * x) + h * (pair.ba * x)).into_affine();
                BlindingFactor { bk: pair.bk, ba: pair.ba, b, x }
            } else {
                let b = (note.gamma * pair.bk + h * pair.ba).into_affine();
                BlindingFactor { bk: pair.bk, ba: pair.ba, b, x: Fr::zero() }
            }
        })
        .collect()
}
