//! 2048-bit unsigned integer primitive
//!
//! This module defines the `U2048` type, a fixed-size 2048-bit unsigned
//! integer stored as 32 little-endian 64-bit limbs.
//!
//! The arithmetic is layered:
//! - `core`: representation, constants, comparison and bit helpers
//! - `ops`: addition, subtraction, multiplication and division
//! - `decimal`: base-10 rendering built from addition and comparison
//! - `counter`: the process-wide tally of additions
//! - `conv`: conversions to and from native integers

mod conv;
mod core;
pub(crate) mod counter;
mod decimal;
mod ops;

/// Fixed-size 2048-bit unsigned integer.
///
/// This type is re-exported as the primary 2048-bit integer primitive.
pub use self::core::U2048;
