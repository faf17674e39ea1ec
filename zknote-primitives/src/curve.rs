//! BN254 curve facade: group constants, generators, and the canonical
//! 32-byte big-endian word form of field elements.
//!
//! The proof engine consumes curve arithmetic through this module so the
//! rest of the workspace never touches the backing library directly.
//! Scalars (`Fr`) live in the prime-order group of BN254 G1; commitment
//! points are affine G1 elements whose coordinates (`Fq`) serialize as
//! one word each.

use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{BigInteger, Field, PrimeField};
use sha3::{Digest, Keccak256};
use std::sync::OnceLock;

pub use ark_bn254::{Fq, Fr, G1Affine, G1Projective};

/// Maximum issuable note value. The trusted setup only covers values in
/// `[0, K_MAX)`, so anything at or above this bound cannot carry a valid
/// range signature and is rejected outright.
pub const K_MAX: u64 = 1 << 20;

/// Domain tag for the independent generator derivation.
const AUX_GENERATOR_DOMAIN: &[u8] = b"zknote.h.generator";

/// The standard G1 generator `g`.
#[must_use]
pub fn generator() -> G1Affine {
    G1Affine::generator()
}

/// The independent public generator `h` used in blinding commitments.
///
/// Derived once by try-and-increment over Keccak-256: hash the domain tag
/// and a counter into an x-coordinate candidate and take the first one
/// that lands on the curve. Nobody knows a discrete log relating `h`
/// to `g`.
#[must_use]
pub fn aux_generator() -> G1Affine {
    static H: OnceLock<G1Affine> = OnceLock::new();
    *H.get_or_init(|| derive_generator(AUX_GENERATOR_DOMAIN))
}

fn derive_generator(domain: &[u8]) -> G1Affine {
    let mut counter = 0u64;
    loop {
        let mut hasher = Keccak256::new();
        hasher.update(domain);
        hasher.update(counter.to_be_bytes());
        let digest: [u8; 32] = hasher.finalize().into();
        let x = Fq::from_be_bytes_mod_order(&digest);
        // y^2 = x^3 + 3 on BN254; roughly half the candidates have a root
        let rhs = x.square() * x + Fq::from(3u64);
        if let Some(y) = rhs.sqrt() {
            return G1Affine::new_unchecked(x, y);
        }
        counter += 1;
    }
}

/// Commitment relation binding a note's secrets to its point pair:
/// `sigma = gamma * k + h * a`.
///
/// Issuance computes `sigma` this way and verification relies on the
/// relation when recombining blinding commitments from disclosed
/// responses.
#[must_use]
pub fn note_commitment(gamma: &G1Affine, k: &Fr, a: &Fr) -> G1Affine {
    (*gamma * k + aux_generator() * a).into_affine()
}

/// Canonical 32-byte big-endian form of a group scalar.
#[must_use]
pub fn fr_to_word(scalar: &Fr) -> [u8; 32] {
    let mut word = [0u8; 32];
    word.copy_from_slice(&scalar.into_bigint().to_bytes_be());
    word
}

/// Canonical 32-byte big-endian form of a base-field coordinate.
#[must_use]
pub fn fq_to_word(coordinate: &Fq) -> [u8; 32] {
    let mut word = [0u8; 32];
    word.copy_from_slice(&coordinate.into_bigint().to_bytes_be());
    word
}

/// Parse a canonical scalar word. Returns `None` for encodings at or
/// above the group order rather than silently reducing them.
#[must_use]
pub fn fr_from_word(word: &[u8; 32]) -> Option<Fr> {
    let scalar = Fr::from_be_bytes_mod_order(word);
    (fr_to_word(&scalar) == *word).then_some(scalar)
}

/// Parse a canonical coordinate word. Returns `None` for encodings at or
/// above the base-field modulus.
#[must_use]
pub fn fq_from_word(word: &[u8; 32]) -> Option<Fq> {
    let coordinate = Fq::from_be_bytes_mod_order(word);
    (fq_to_word(&coordinate) == *word).then_some(coordinate)
}
