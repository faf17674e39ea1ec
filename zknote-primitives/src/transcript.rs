//! Proof transcript wire types.
//!
//! A transcript is one row of six field elements per note plus the
//! challenge. Each row serializes as six 32-byte big-endian words in
//! the order `kBar, aBar, gammaX, gammaY, sigmaX, sigmaY`; the textual
//! form is the `0x`-prefixed hex of each word. The transcript carries
//! no secrets and is the only artifact exchanged with a verifier.

use crate::curve::{fq_from_word, fq_to_word, fr_from_word, fr_to_word, Fr, G1Affine};
use crate::error::ProofError;

/// Serialized length of one row: six 32-byte words.
pub const ROW_BYTES: usize = 192;

/// The disclosed per-note unit of a proof transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProofRow {
    /// Blinded value response; on the final join-split row this slot
    /// carries the disclosed public value instead.
    pub k_bar: Fr,
    /// Blinded viewing-key response.
    pub a_bar: Fr,
    /// The note's value commitment base.
    pub gamma: G1Affine,
    /// The note's blinding commitment.
    pub sigma: G1Affine,
}

impl ProofRow {
    /// Serialize as six big-endian words.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; ROW_BYTES] {
        let mut bytes = [0u8; ROW_BYTES];
        let words = [
            fr_to_word(&self.k_bar),
            fr_to_word(&self.a_bar),
            fq_to_word(&self.gamma.x),
            fq_to_word(&self.gamma.y),
            fq_to_word(&self.sigma.x),
            fq_to_word(&self.sigma.y),
        ];
        for (slot, word) in bytes.chunks_exact_mut(32).zip(words) {
            slot.copy_from_slice(&word);
        }
        bytes
    }

    /// Parse six big-endian words. Scalar words must be canonical group
    /// scalars and coordinate words canonical base-field elements;
    /// whether the resulting points lie on the curve is checked during
    /// verification, not here.
    pub fn from_bytes(bytes: &[u8; ROW_BYTES]) -> Result<Self, ProofError> {
        let word = |index: usize| -> [u8; 32] {
            let mut out = [0u8; 32];
            out.copy_from_slice(&bytes[index * 32..(index + 1) * 32]);
            out
        };
        let k_bar = fr_from_word(&word(0))
            .ok_or(ProofError::InvalidInput("response scalar out of range"))?;
        let a_bar = fr_from_word(&word(1))
            .ok_or(ProofError::InvalidInput("response scalar out of range"))?;
        let coordinate = |index: usize| {
            fq_from_word(&word(index)).ok_or(ProofError::PointNotOnCurve)
        };
        let gamma = G1Affine::new_unchecked(coordinate(2)?, coordinate(3)?);
        let sigma = G1Affine::new_unchecked(coordinate(4)?, coordinate(5)?);
        Ok(Self { k_bar, a_bar, gamma, sigma })
    }

    /// The `0x`-prefixed textual form of each word.
    #[must_use]
    pub fn to_hex(&self) -> [String; 6] {
        let bytes = self.to_bytes();
        let hex_word = |index: usize| format!("0x{}", hex::encode(&bytes[index * 32..(index + 1) * 32]));
        [
            hex_word(0),
            hex_word(1),
            hex_word(2),
            hex_word(3),
            hex_word(4),
            hex_word(5),
        ]
    }

    /// Parse the textual form.
    pub fn from_hex<S: AsRef<str>>(words: &[S; 6]) -> Result<Self, ProofError> {
        let mut bytes = [0u8; ROW_BYTES];
        for (slot, word) in bytes.chunks_exact_mut(32).zip(words) {
            decode_word(word.as_ref(), slot)?;
        }
        Self::from_bytes(&bytes)
    }
}

/// The complete public proof artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofTranscript {
    /// One row per note, input notes first.
    pub rows: Vec<ProofRow>,
    /// The Fiat-Shamir challenge the rows respond to.
    pub challenge: Fr,
}

impl ProofTranscript {
    /// Textual rows in ledger order.
    #[must_use]
    pub fn rows_hex(&self) -> Vec<[String; 6]> {
        self.rows.iter().map(ProofRow::to_hex).collect()
    }

    /// The challenge as a `0x`-prefixed word.
    #[must_use]
    pub fn challenge_hex(&self) -> String {
        format!("0x{}", hex::encode(fr_to_word(&self.challenge)))
    }

    /// Rebuild a transcript from its textual form.
    pub fn from_hex<S: AsRef<str>>(
        rows: &[[S; 6]],
        challenge: &str,
    ) -> Result<Self, ProofError> {
        let rows = rows
            .iter()
            .map(ProofRow::from_hex)
            .collect::<Result<Vec<_>, _>>()?;
        let mut word = [0u8; 32];
        decode_word(challenge, &mut word)?;
        let challenge =
            fr_from_word(&word).ok_or(ProofError::InvalidInput("challenge out of range"))?;
        Ok(Self { rows, challenge })
    }
}

fn decode_word(text: &str, out: &mut [u8]) -> Result<(), ProofError> {
    let nibbles = text
        .strip_prefix("0x")
        .ok_or(ProofError::InvalidInput("word missing 0x prefix"))?;
    if nibbles.len() != 64 {
        return Err(ProofError::InvalidInput("word must be 32 bytes"));
    }
    hex::decode_to_slice(nibbles, out).map_err(|_| ProofError::InvalidInput("malformed hex word"))
}
