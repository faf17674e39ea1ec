//! Public-value normalization.
//!
//! Statement parameters (`kPublic`, `za`, `zb`) reach the engine in
//! whatever form the caller has on hand: a native signed integer, a
//! field element that is already reduced, a raw 32-byte word, or a
//! decimal/hex string. Every form funnels through [`PublicValue::normalize`]
//! so that, for example, `-100` always means `r - 100` regardless of the
//! call-site representation.

use std::str::FromStr;

use crate::curve::{fr_from_word, Fr};
use crate::error::ProofError;

/// A caller-supplied public scalar, prior to normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicValue {
    /// A native integer; negative values normalize to `r - |v|`.
    Signed(i128),
    /// A field element, already reduced.
    Reduced(Fr),
    /// A big-endian word that must be a canonical scalar encoding.
    Raw([u8; 32]),
}

impl PublicValue {
    /// Reduce into the scalar field, realizing negative values as
    /// `r - |v|`. Raw words at or above the group order are rejected
    /// rather than silently wrapped.
    pub fn normalize(&self) -> Result<Fr, ProofError> {
        match self {
            Self::Signed(value) => {
                let magnitude = Fr::from(value.unsigned_abs());
                Ok(if *value < 0 { -magnitude } else { magnitude })
            }
            Self::Reduced(scalar) => Ok(*scalar),
            Self::Raw(word) => fr_from_word(word).ok_or(ProofError::MalformedPublicValue),
        }
    }
}

impl From<i128> for PublicValue {
    fn from(value: i128) -> Self {
        Self::Signed(value)
    }
}

impl From<i64> for PublicValue {
    fn from(value: i64) -> Self {
        Self::Signed(value.into())
    }
}

impl From<u64> for PublicValue {
    fn from(value: u64) -> Self {
        Self::Signed(value.into())
    }
}

impl From<Fr> for PublicValue {
    fn from(scalar: Fr) -> Self {
        Self::Reduced(scalar)
    }
}

impl From<[u8; 32]> for PublicValue {
    fn from(word: [u8; 32]) -> Self {
        Self::Raw(word)
    }
}

impl FromStr for PublicValue {
    type Err = ProofError;

    /// Accepts decimal (optionally negative) and `0x`-prefixed hex.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if let Some(nibbles) = digits.strip_prefix("0x") {
            if negative || nibbles.is_empty() || nibbles.len() > 64 {
                return Err(ProofError::MalformedPublicValue);
            }
            let mut padded = String::with_capacity(64);
            padded.extend(core::iter::repeat('0').take(64 - nibbles.len()));
            padded.push_str(nibbles);
            let mut word = [0u8; 32];
            hex::decode_to_slice(&padded, &mut word)
                .map_err(|_| ProofError::MalformedPublicValue)?;
            return Ok(Self::Raw(word));
        }
        let magnitude: i128 = digits
            .parse()
            .map_err(|_| ProofError::MalformedPublicValue)?;
        if magnitude < 0 {
            // a second sign inside the digits is malformed
            return Err(ProofError::MalformedPublicValue);
        }
        Ok(Self::Signed(if negative { -magnitude } else { magnitude }))
    }
}
