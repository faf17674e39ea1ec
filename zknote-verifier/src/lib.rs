//! # zknote-verifier — proof transcript verification
//!
//! The verification dual of `zknote-prover`: from a disclosed
//! transcript and the public statement parameters alone, recompute
//! everything the construction hashed and accept only if the challenge
//! embedded in the transcript is reproduced exactly.
//!
//! Verification runs the construction pipeline in reverse:
//!
//! 1. structural checks on every disclosed commitment point
//! 2. for join-split, the final row's value slot must equal the
//!    normalized public delta, and the true final response is recovered
//!    from the other rows through the balance relation
//!    `sum(in kBar) - sum(out kBar) = challenge * kPublic`
//! 3. each blinding commitment is recombined from the disclosed
//!    responses through the commitment relation
//!    (`sigma = gamma * k + h * a`):
//!    `B = gamma * kBar + h * aBar - sigma * c` for input rows and the
//!    rolling-hash-scaled form for output rows
//! 4. the rolling hash is replayed over the disclosed commitments to
//!    reproduce the output-note multipliers
//! 5. the challenge is rederived over the same ordered inputs used at
//!    construction and compared in constant time
//!
//! Every mismatch is a [`ProofError`], never a panic, and no partial
//! result escapes a failed check.

use core::iter;

use ark_ec::CurveGroup;
use ark_std::Zero;
use subtle::ConstantTimeEq;

use zknote_primitives::{
    aux_generator, compute_challenge, fr_to_word, validate_point, Address, ChallengeTerm, Fr,
    G1Affine, HashAccumulator, ProofError, ProofRow, ProofTranscript, PublicValue,
    DIVIDEND_INPUT_COUNT, DIVIDEND_NOTE_COUNT,
};


/// Verify a join-split transcript against its public statement.
///
/// # Errors
/// [`ProofError::ChallengeMismatch`] when the transcript does not
/// reproduce its own challenge under the given statement; structural
/// errors from the point and range checks otherwise.
pub fn verify_join_split(
    transcript: &ProofTranscript,
    m: usize,
    sender: Address,
    k_public: PublicValue,
) -> Result<(), ProofError> {
    verify_join_split_inner(transcript, m, sender, k_public, None)
}

/// Verify a join-split transcript whose challenge binds a public token
/// holder.
pub fn verify_join_split_with_owner(
    transcript: &ProofTranscript,
    m: usize,
    sender: Address,
    k_public: PublicValue,
    public_owner: Address,
) -> Result<(), ProofError> {
    verify_join_split_inner(transcript, m, sender, k_public, Some(public_owner))
}

fn verify_join_split_inner(
    transcript: &ProofTranscript,
    m: usize,
    sender: Address,
    k_public: PublicValue,
    public_owner: Option<Address>,
) -> Result<(), ProofError> {
    let k_public = k_public.normalize()?;
    let rows = &transcript.rows;
    if rows.is_empty() {
        return Err(ProofError::InvalidInput("transcript has no rows"));
    }
    if m > rows.len() {
        return Err(ProofError::InputCountExceedsNoteCount);
    }
    validate_rows(rows)?;

    let n = rows.len();
    // the final row's value slot is the disclosed public delta; a
    // transcript for a different delta cannot match this statement
    if rows[n - 1].k_bar != k_public {
        return Err(ProofError::ChallengeMismatch);
    }

    let challenge = transcript.challenge;

    // recover the true final response from the balance relation over
    // the disclosed ones
    let signed_sum = rows
        .iter()
        .take(n - 1)
        .enumerate()
        .fold(Fr::zero(), |acc, (index, row)| {
            if index < m {
                acc + row.k_bar
            } else {
                acc - row.k_bar
            }
        });
    let recovered = if m == n {
        challenge * k_public - signed_sum
    } else {
        signed_sum - challenge * k_public
    };

    let commitments = recombine_blinding_commitments(rows, m, challenge, Some(recovered));

    let recomputed = compute_challenge(challenge_terms(
        sender,
        [k_public],
        m as u64,
        public_owner,
        rows,
        &commitments,
    ));
    accept(recomputed, challenge)
}

/// Verify a ratio (dividend) transcript against its public statement.
///
/// All three responses are disclosed as computed; the linear ratio
/// relation over them is the business of the transcript's downstream
/// consumer, so acceptance here means exactly that the transcript
/// reproduces its challenge for these `za`, `zb`, and sender.
pub fn verify_dividend(
    transcript: &ProofTranscript,
    za: PublicValue,
    zb: PublicValue,
    sender: Address,
) -> Result<(), ProofError> {
    let za = za.normalize()?;
    let zb = zb.normalize()?;
    let rows = &transcript.rows;
    if rows.len() != DIVIDEND_NOTE_COUNT {
        return Err(ProofError::InvalidInput(
            "ratio statement takes exactly three notes",
        ));
    }
    validate_rows(rows)?;

    let m = DIVIDEND_INPUT_COUNT;
    let challenge = transcript.challenge;
    let commitments = recombine_blinding_commitments(rows, m, challenge, None);

    let recomputed = compute_challenge(challenge_terms(
        sender,
        [za, zb],
        m as u64,
        None,
        rows,
        &commitments,
    ));
    accept(recomputed, challenge)
}

fn validate_rows(rows: &[ProofRow]) -> Result<(), ProofError> {
    rows.iter().try_for_each(|row| {
        validate_point(&row.gamma)?;
        validate_point(&row.sigma)
    })
}

/// Recombine each row's blinding commitment from its disclosed
/// responses, replaying the rolling hash for the output-note
/// multipliers. `last_override` substitutes the recovered final value
/// response in the join-split case.
fn recombine_blinding_commitments(
    rows: &[ProofRow],
    m: usize,
    challenge: Fr,
    last_override: Option<Fr>,
) -> Vec<G1Affine> {
    let mut rolling = HashAccumulator::new();
    for row in rows {
        rolling.absorb_point(&row.gamma);
        rolling.absorb_point(&row.sigma);
    }
    let h = aux_generator();
    let n = rows.len();
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let k_bar = match last_override {
                Some(value) if index == n - 1 => value,
                _ => row.k_bar,
            };
            if index + 1 > m {
                let x = rolling.drain();
                (row.gamma * (k_bar * x) + h * (row.a_bar * x) - row.sigma * (challenge * x))
                    .into_affine()
            } else {
                (row.gamma * k_bar + h * row.a_bar - row.sigma * challenge).into_affine()
            }
        })
        .collect()
}

/// The ordered challenge inputs, mirroring construction exactly:
/// sender, the public scalars, the input count, the optional public
/// owner, every commitment pair, every recombined blinding commitment.
fn challenge_terms<'a, const P: usize>(
    sender: Address,
    public_values: [Fr; P],
    m: u64,
    public_owner: Option<Address>,
    rows: &'a [ProofRow],
    commitments: &'a [G1Affine],
) -> impl Iterator<Item = ChallengeTerm> + 'a {
    iter::once(ChallengeTerm::Identifier(sender))
        .chain(public_values.into_iter().map(ChallengeTerm::Scalar))
        .chain(iter::once(ChallengeTerm::Count(m)))
        .chain(public_owner.into_iter().map(ChallengeTerm::Identifier))
        .chain(rows.iter().map(|row| ChallengeTerm::NotePair {
            gamma: row.gamma,
            sigma: row.sigma,
        }))
        .chain(commitments.iter().copied().map(ChallengeTerm::BlindingCommitment))
}

fn accept(recomputed: Fr, disclosed: Fr) -> Result<(), ProofError> {
    let matches: bool = fr_to_word(&recomputed)[..]
        .ct_eq(&fr_to_word(&disclosed)[..])
        .into();
    if matches {
        Ok(())
    } else {
        Err(ProofError::ChallengeMismatch)
    }
}
