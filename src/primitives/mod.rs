//! Primitive types
//!
//! This module defines the fixed-width integer primitive of the crate.
//!
//! Primitives are simple, fixed-size, dependency-free building blocks that
//! provide well-defined semantics and predictable behavior. They are
//! intentionally minimal and do not attempt to replicate full-featured
//! big-integer libraries.
//!
//! Current primitives include:
//! - `U2048`: a fixed-size 2048-bit unsigned integer
//!
//! Every `U2048` addition is tallied by a process-wide counter, readable
//! through [`num_additions`].

mod u2048;

/// Fixed-size 2048-bit unsigned integer.
pub use u2048::U2048;

/// Total number of `U2048` additions performed since process start.
pub use u2048::counter::num_additions;
