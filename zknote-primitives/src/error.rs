//! Failure conditions shared by construction and verification.

use thiserror::Error;

/// Everything that can go wrong while building or checking a proof
/// transcript. All conditions are detected synchronously; a failed
/// validation never leaves a partially built transcript behind.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProofError {
    /// A note's viewing key is zero (the group order bound is carried by
    /// the scalar type itself).
    #[error("viewing key malformed")]
    MalformedViewingKey,

    /// A note's value scalar is at or above the issuable maximum.
    #[error("note value malformed")]
    MalformedNoteValue,

    /// A note commitment is the identity point.
    #[error("point at infinity")]
    PointAtInfinity,

    /// A note commitment does not satisfy the curve equation.
    #[error("point not on curve")]
    PointNotOnCurve,

    /// A public value (`kPublic`, `za`, `zb`) is not a canonical group
    /// scalar after sign normalization.
    #[error("public value malformed")]
    MalformedPublicValue,

    /// The declared input-note count exceeds the number of notes.
    #[error("input count exceeds note count")]
    InputCountExceedsNoteCount,

    /// A statement-shape violation outside the named protocol failures:
    /// an empty note set, wrong ratio-statement arity, malformed row or
    /// address bytes.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// Verification only: the recomputed challenge disagrees with the
    /// disclosed one.
    #[error("challenge mismatch")]
    ChallengeMismatch,
}
