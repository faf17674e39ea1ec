//! Ratio (dividend) transcript construction.
//!
//! A ratio statement discloses that one note value stands in a declared
//! ratio `za : zb` to another, up to a residual note, across exactly
//! three notes: the source note followed by the target and residual
//! notes. The pipeline is the join-split one with the two ratio scalars
//! taking the public-delta slot in the challenge; which linear relation
//! the disclosed responses are later checked against belongs to the
//! external consumer of the transcript, so every response row is
//! disclosed as computed.

use rand::{CryptoRng, Rng};

use zknote_primitives::{
    compute_challenge, validate_notes, Address, HashAccumulator, Note, ProofError, ProofRow,
    ProofTranscript, PublicValue, DIVIDEND_INPUT_COUNT, DIVIDEND_NOTE_COUNT,
};

use crate::blinding::{compute_blinding_factors, generate_blinding_scalars};
use crate::join_split::challenge_terms;

/// Construct a ratio proof transcript over `[source, target, residual]`
/// notes with public ratio scalars `za` and `zb`.
///
/// # Errors
/// Any validation failure from the note or statement checks, or a note
/// count other than three.
pub fn construct_dividend<R: Rng + CryptoRng>(
    notes: &[Note],
    za: PublicValue,
    zb: PublicValue,
    sender: Address,
    rng: &mut R,
) -> Result<ProofTranscript, ProofError> {
    let za = za.normalize()?;
    let zb = zb.normalize()?;
    if notes.len() != DIVIDEND_NOTE_COUNT {
        return Err(ProofError::InvalidInput(
            "ratio statement takes exactly three notes",
        ));
    }
    let m = DIVIDEND_INPUT_COUNT;
    validate_notes(notes, m)?;

    let mut rolling = HashAccumulator::new();
    for note in notes {
        rolling.absorb_point(&note.gamma);
        rolling.absorb_point(&note.sigma);
    }

    let scalars = generate_blinding_scalars(notes.len(), m, rng);
    let factors = compute_blinding_factors(notes, m, &scalars, &mut rolling);

    let challenge = compute_challenge(challenge_terms(
        sender,
        [za, zb],
        m as u64,
        None,
        notes,
        &factors,
    ));

    let rows = notes
        .iter()
        .zip(&factors)
        .map(|(note, factor)| ProofRow {
            k_bar: note.k * challenge + factor.bk,
            a_bar: note.a * challenge + factor.ba,
            gamma: note.gamma,
            sigma: note.sigma,
        })
        .collect();

    Ok(ProofTranscript { rows, challenge })
}
