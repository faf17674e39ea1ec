//! # zknote-prover — proof transcript construction
//!
//! This crate builds the non-interactive zero-knowledge transcripts
//! that let a party show a set of confidential notes satisfies a public
//! linear balance relation without revealing any note value.
//!
//! ## Statements
//!
//! **Join-split** - `m` input notes against `n - m` output notes and a
//! signed public delta `kPublic`:
//! - [`construct_join_split`] builds the plain transcript
//! - [`construct_join_split_with_owner`] additionally binds the holder
//!   of a public token into the challenge
//!
//! **Ratio (dividend)** - three notes and two public scalars `za`, `zb`
//! declaring a value ratio:
//! - [`construct_dividend`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rand::rngs::OsRng;
//! use zknote_primitives::{Address, Note, PublicValue};
//! use zknote_prover::construct_join_split;
//!
//! // one 200-value input note against 20 + 180 output notes
//! let notes: Vec<Note> = /* issued elsewhere */;
//! let sender: Address = "0x2233445566778899aabb2233445566778899aabb".parse()?;
//!
//! let transcript = construct_join_split(
//!     &notes,
//!     1,                       // input-note count
//!     sender,
//!     PublicValue::from(0i64), // public delta
//!     &mut OsRng,
//! )?;
//!
//! // hand transcript.rows_hex() and transcript.challenge_hex() to the
//! // verifier or the downstream encoder
//! ```
//!
//! ## Transcript Layout
//!
//! ```text
//! row[i] = kBar(32) || aBar(32) || gammaX(32) || gammaY(32) || sigmaX(32) || sigmaY(32)
//! ```
//!
//! One row per note, input notes first; the final row's `kBar` word is
//! the disclosed public value. The challenge is one further 32-byte
//! word.
//!
//! ## Security Notes
//!
//! - Blinding scalars are drawn with full-width field sampling from the
//!   caller's CSPRNG and live only for one invocation
//! - The last blinding scalar is forced so the input-side and
//!   output-side sums coincide exactly, mirroring the public relation
//! - The challenge binds the sender, the public scalars, the input
//!   count, every commitment pair, and every blinding commitment

pub mod blinding;
mod dividend;
mod join_split;

#[cfg(test)]
mod tests;

pub use blinding::{generate_blinding_scalars, BlindingFactor, BlindingScalarPair};
pub use dividend::construct_dividend;
pub use join_split::{construct_join_split, construct_join_split_with_owner};
