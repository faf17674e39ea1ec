//! Fiat-Shamir challenge derivation.
//!
//! The challenge binds the whole public statement: every term is
//! classified by a closed [`ChallengeTerm`] kind and absorbed into a
//! fresh accumulator in caller order, then a single drain yields the
//! challenge scalar. Identical ordered terms always produce an
//! identical challenge; nesting is expressed by the caller flattening
//! its term iterators, so the absorption routine itself never recurses
//! and there is no fallthrough case for an unknown kind.

use crate::curve::{Fr, G1Affine};
use crate::hash::HashAccumulator;
use crate::note::Address;

/// One typed entry of the ordered challenge input sequence.
#[derive(Debug, Clone, Copy)]
pub enum ChallengeTerm {
    /// A fixed-width public identifier (sender, public owner).
    Identifier(Address),
    /// A public scalar, already reduced into the field.
    Scalar(Fr),
    /// A small public count, such as the input-note split.
    Count(u64),
    /// A note's commitment pair, absorbed `gamma` then `sigma`.
    NotePair { gamma: G1Affine, sigma: G1Affine },
    /// A blinding commitment.
    BlindingCommitment(G1Affine),
}

/// Derive the challenge from an ordered sequence of terms.
#[must_use]
pub fn compute_challenge<I>(terms: I) -> Fr
where
    I: IntoIterator<Item = ChallengeTerm>,
{
    let mut accumulator = HashAccumulator::new();
    for term in terms {
        match term {
            ChallengeTerm::Identifier(address) => accumulator.absorb_word(address.to_word()),
            ChallengeTerm::Scalar(scalar) => accumulator.absorb_scalar(&scalar),
            ChallengeTerm::Count(count) => {
                let mut word = [0u8; 32];
                word[24..].copy_from_slice(&count.to_be_bytes());
                accumulator.absorb_word(word);
            }
            ChallengeTerm::NotePair { gamma, sigma } => {
                accumulator.absorb_point(&gamma);
                accumulator.absorb_point(&sigma);
            }
            ChallengeTerm::BlindingCommitment(commitment) => {
                accumulator.absorb_point(&commitment);
            }
        }
    }
    accumulator.drain()
}
