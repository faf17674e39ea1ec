//! # zknote-primitives
//!
//! Types and collaborator contracts shared between the zknote prover
//! and verifier: the BN254 curve facade, the Keccak rolling-hash
//! accumulator, the note data model and its validator, public-value
//! normalization, the Fiat-Shamir challenge engine, and the transcript
//! wire types.
//!
//! Construction lives in `zknote-prover`; the verification dual lives
//! in `zknote-verifier`. Both speak entirely in terms of this crate.

pub mod challenge;
pub mod curve;
pub mod error;
pub mod hash;
pub mod note;
pub mod transcript;
pub mod value;

pub use challenge::{compute_challenge, ChallengeTerm};
pub use curve::{
    aux_generator, fq_from_word, fq_to_word, fr_from_word, fr_to_word, generator,
    note_commitment, Fq, Fr, G1Affine, G1Projective, K_MAX,
};
pub use error::ProofError;
pub use hash::HashAccumulator;
pub use note::{note_hash, validate_note, validate_notes, validate_point, Address, Note};
pub use transcript::{ProofRow, ProofTranscript, ROW_BYTES};
pub use value::PublicValue;

/// Number of notes in a ratio (dividend) statement: one source note and
/// two derived notes.
pub const DIVIDEND_NOTE_COUNT: usize = 3;

/// Input-section length of a ratio statement; the source note precedes
/// the two derived notes.
pub const DIVIDEND_INPUT_COUNT: usize = 1;
