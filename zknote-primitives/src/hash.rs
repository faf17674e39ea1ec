//! Keccak-256 rolling-hash accumulator.
//!
//! The accumulator absorbs 32-byte words (scalars, affine coordinates)
//! and is drained for field elements. Draining hashes everything
//! absorbed so far, replaces the internal buffer with the digest, and
//! returns the digest reduced into the scalar field. Because the digest
//! feeds the next drain, one seed yields a deterministic sequence of
//! distinct scalars: the rolling hash behind the per-output-note
//! multipliers and the Fiat-Shamir challenge.

use ark_ff::PrimeField;
use sha3::{Digest, Keccak256};

use crate::curve::{fq_to_word, fr_to_word, Fr, G1Affine};

/// Incremental Keccak accumulator over 32-byte words.
#[derive(Debug, Clone, Default)]
pub struct HashAccumulator {
    data: Vec<u8>,
}

impl HashAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb a raw 32-byte word.
    pub fn absorb_word(&mut self, word: [u8; 32]) {
        self.data.extend_from_slice(&word);
    }

    /// Absorb a group scalar in canonical big-endian form.
    pub fn absorb_scalar(&mut self, scalar: &Fr) {
        self.absorb_word(fr_to_word(scalar));
    }

    /// Absorb an affine point as its x then y coordinate words. The
    /// identity has no affine coordinates and absorbs two zero words.
    pub fn absorb_point(&mut self, point: &G1Affine) {
        if point.infinity {
            self.absorb_word([0u8; 32]);
            self.absorb_word([0u8; 32]);
        } else {
            self.absorb_word(fq_to_word(&point.x));
            self.absorb_word(fq_to_word(&point.y));
        }
    }

    /// Hash the absorbed words, advance the internal state to the
    /// digest, and return the digest reduced into the scalar field.
    pub fn drain(&mut self) -> Fr {
        let digest: [u8; 32] = Keccak256::digest(&self.data).into();
        self.data.clear();
        self.data.extend_from_slice(&digest);
        Fr::from_be_bytes_mod_order(&digest)
    }
}
