//! Join-split transcript construction.
//!
//! A join-split statement discloses that the values of `m` input notes
//! equal the values of the remaining output notes plus a public delta,
//! without revealing any note value. The builder validates the
//! statement, seeds the rolling hash over every commitment pair, draws
//! the blinding data, derives the Fiat-Shamir challenge, and emits one
//! response row per note. The final row's value slot carries the
//! disclosed public delta itself, which is what makes the delta
//! auditable while every other value stays hidden.

use core::iter;

use rand::{CryptoRng, Rng};

use zknote_primitives::{
    compute_challenge, validate_notes, Address, ChallengeTerm, Fr, HashAccumulator, Note,
    ProofError, ProofRow, ProofTranscript, PublicValue,
};

use crate::blinding::{compute_blinding_factors, generate_blinding_scalars, BlindingFactor};

/// Construct a join-split proof transcript.
///
/// `notes` are ordered input-notes-first; `m` is the input count.
/// `k_public` is the signed public delta, normalized before use.
///
/// # Errors
/// Any validation failure from the note or statement checks; no
/// transcript is emitted past a failed validation.
pub fn construct_join_split<R: Rng + CryptoRng>(
    notes: &[Note],
    m: usize,
    sender: Address,
    k_public: PublicValue,
    rng: &mut R,
) -> Result<ProofTranscript, ProofError> {
    construct(notes, m, sender, k_public, None, rng)
}

/// Construct a join-split transcript for a transaction with a public
/// token holder; `public_owner` is bound into the challenge between the
/// input count and the notes.
pub fn construct_join_split_with_owner<R: Rng + CryptoRng>(
    notes: &[Note],
    m: usize,
    sender: Address,
    k_public: PublicValue,
    public_owner: Address,
    rng: &mut R,
) -> Result<ProofTranscript, ProofError> {
    construct(notes, m, sender, k_public, Some(public_owner), rng)
}

fn construct<R: Rng + CryptoRng>(
    notes: &[Note],
    m: usize,
    sender: Address,
    k_public: PublicValue,
    public_owner: Option<Address>,
    rng: &mut R,
) -> Result<ProofTranscript, ProofError> {
    let k_public = k_public.normalize()?;
    validate_notes(notes, m)?;

    // seed the rolling hash over every commitment pair before any
    // blinding datum exists
    let mut rolling = HashAccumulator::new();
    for note in notes {
        rolling.absorb_point(&note.gamma);
        rolling.absorb_point(&note.sigma);
    }

    let scalars = generate_blinding_scalars(notes.len(), m, rng);
    let factors = compute_blinding_factors(notes, m, &scalars, &mut rolling);

    let challenge = compute_challenge(challenge_terms(
        sender,
        [k_public],
        m as u64,
        public_owner,
        notes,
        &factors,
    ));

    let last = notes.len() - 1;
    let rows = notes
        .iter()
        .zip(&factors)
        .enumerate()
        .map(|(index, (note, factor))| ProofRow {
            k_bar: if index == last {
                k_public
            } else {
                note.k * challenge + factor.bk
            },
            a_bar: note.a * challenge + factor.ba,
            gamma: note.gamma,
            sigma: note.sigma,
        })
        .collect();

    Ok(ProofTranscript { rows, challenge })
}

/// The ordered challenge input sequence shared by the join-split and
/// ratio builders: sender, the public scalars, the input count, the
/// optional public owner, every note pair, every blinding commitment.
pub(crate) fn challenge_terms<'a, const P: usize>(
    sender: Address,
    public_values: [Fr; P],
    m: u64,
    public_owner: Option<Address>,
    notes: &'a [Note],
    factors: &'a [BlindingFactor],
) -> impl Iterator<Item = ChallengeTerm> + 'a {
    iter::once(ChallengeTerm::Identifier(sender))
        .chain(public_values.into_iter().map(ChallengeTerm::Scalar))
        .chain(iter::once(ChallengeTerm::Count(m)))
        .chain(public_owner.into_iter().map(ChallengeTerm::Identifier))
        .chain(notes.iter().map(|note| ChallengeTerm::NotePair {
            gamma: note.gamma,
            sigma: note.sigma,
        }))
        .chain(
            factors
                .iter()
                .map(|factor| ChallengeTerm::BlindingCommitment(factor.b)),
        )
}
