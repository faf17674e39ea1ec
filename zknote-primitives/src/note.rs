//! Confidential notes and their structural validation.
//!
//! A note commits to a secret value `k` under a secret viewing key `a`
//! through a pair of curve points: `gamma`, the value commitment base,
//! and `sigma = gamma * k + h * a`. The owner and the Keccak digest of
//! the four commitment coordinates are public; `a` and `k` never leave
//! the holder. The proof engine consumes notes read-only.

use ark_ec::AffineRepr;
use ark_std::Zero;
use sha3::{Digest, Keccak256};
use std::fmt;
use std::str::FromStr;

use crate::curve::{fq_to_word, note_commitment, Fr, G1Affine, K_MAX};
use crate::error::ProofError;

/// Fixed-width public identity: transaction senders, note owners, and
/// public-token holders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The identifier as a left-padded 32-byte word, the form absorbed
    /// into challenge hashes.
    #[must_use]
    pub fn to_word(self) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(&self.0);
        word
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = ProofError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes =
            hex::decode(digits).map_err(|_| ProofError::InvalidInput("malformed address"))?;
        let raw: [u8; 20] = bytes
            .try_into()
            .map_err(|_| ProofError::InvalidInput("malformed address"))?;
        Ok(Self(raw))
    }
}

/// A confidential value commitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    /// Secret viewing key, non-zero.
    pub a: Fr,
    /// Secret value scalar, below [`K_MAX`].
    pub k: Fr,
    /// Value commitment base point.
    pub gamma: G1Affine,
    /// Blinding commitment `gamma * k + h * a`.
    pub sigma: G1Affine,
    /// Public owner of the note.
    pub owner: Address,
    /// Public ledger digest of the commitment coordinates.
    pub note_hash: [u8; 32],
}

impl Note {
    /// Assemble a note from its secrets and commitment base, deriving
    /// `sigma` and the ledger digest.
    #[must_use]
    pub fn new(value: u64, a: Fr, gamma: G1Affine, owner: Address) -> Self {
        let k = Fr::from(value);
        let sigma = note_commitment(&gamma, &k, &a);
        Self {
            a,
            k,
            gamma,
            sigma,
            owner,
            note_hash: note_hash(&gamma, &sigma),
        }
    }
}

/// Keccak digest identifying a note on the ledger: the four affine
/// coordinate words in `gamma`, `sigma` order.
#[must_use]
pub fn note_hash(gamma: &G1Affine, sigma: &G1Affine) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    for point in [gamma, sigma] {
        hasher.update(fq_to_word(&point.x));
        hasher.update(fq_to_word(&point.y));
    }
    hasher.finalize().into()
}

/// Structural check for a single commitment point: finite and on the
/// curve.
pub fn validate_point(point: &G1Affine) -> Result<(), ProofError> {
    if point.is_zero() {
        return Err(ProofError::PointAtInfinity);
    }
    if !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(ProofError::PointNotOnCurve);
    }
    Ok(())
}

/// Full per-note validation: viewing key non-zero (its upper bound is
/// carried by the scalar type), value below [`K_MAX`], both commitment
/// points finite and on the curve.
pub fn validate_note(note: &Note) -> Result<(), ProofError> {
    if note.a.is_zero() {
        return Err(ProofError::MalformedViewingKey);
    }
    if note.k >= Fr::from(K_MAX) {
        return Err(ProofError::MalformedNoteValue);
    }
    validate_point(&note.gamma)?;
    validate_point(&note.sigma)?;
    Ok(())
}

/// Statement-level validation: at least one note, a sane input split,
/// and every note well formed. Runs before anything is hashed, so a
/// rejected statement has no side effects.
pub fn validate_notes(notes: &[Note], m: usize) -> Result<(), ProofError> {
    if notes.is_empty() {
        return Err(ProofError::InvalidInput("note array is empty"));
    }
    if m > notes.len() {
        return Err(ProofError::InputCountExceedsNoteCount);
    }
    notes.iter().try_for_each(validate_note)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ec::CurveGroup;
    use ark_std::UniformRand;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use crate::curve::{generator, Fq};

    fn sample_note(rng: &mut ChaCha20Rng, value: u64) -> Note {
        let gamma = (generator() * Fr::rand(rng)).into_affine();
        Note::new(value, Fr::rand(rng), gamma, Address([7u8; 20]))
    }

    #[test]
    fn well_formed_notes_validate() {
        let mut rng = ChaCha20Rng::from_seed([11u8; 32]);
        let notes = [sample_note(&mut rng, 0), sample_note(&mut rng, K_MAX - 1)];
        assert!(validate_notes(&notes, 1).is_ok());
    }

    #[test]
    fn malformed_fields_are_named() {
        let mut rng = ChaCha20Rng::from_seed([12u8; 32]);

        let mut zero_key = sample_note(&mut rng, 5);
        zero_key.a = Fr::zero();
        assert_eq!(validate_note(&zero_key), Err(ProofError::MalformedViewingKey));

        let oversized = sample_note(&mut rng, K_MAX);
        assert_eq!(validate_note(&oversized), Err(ProofError::MalformedNoteValue));

        let mut infinite = sample_note(&mut rng, 5);
        infinite.gamma = G1Affine::identity();
        assert_eq!(validate_note(&infinite), Err(ProofError::PointAtInfinity));

        let mut off_curve = sample_note(&mut rng, 5);
        off_curve.sigma = G1Affine::new_unchecked(Fq::from(1u64), Fq::from(1u64));
        assert_eq!(validate_note(&off_curve), Err(ProofError::PointNotOnCurve));
    }

    #[test]
    fn input_split_bounds_are_checked() {
        let mut rng = ChaCha20Rng::from_seed([13u8; 32]);
        let notes = [sample_note(&mut rng, 1)];
        assert_eq!(
            validate_notes(&notes, 2),
            Err(ProofError::InputCountExceedsNoteCount)
        );
        assert_eq!(
            validate_notes(&[], 0),
            Err(ProofError::InvalidInput("note array is empty"))
        );
    }

    #[test]
    fn address_text_round_trips() {
        let address = Address([0xab; 20]);
        let parsed: Address = address.to_string().parse().expect("parse address");
        assert_eq!(parsed, address);
        assert!("0x1234".parse::<Address>().is_err());
    }
}
