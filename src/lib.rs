//! Fixed-width integer arithmetic and companion data structures
//!
//! This crate provides a 2048-bit unsigned integer built entirely from
//! 64-bit limb arithmetic, together with a few small, independent
//! containers.
//!
//! The focus is on **clarity, predictability, and auditability**: every
//! carry, borrow and overflow in the integer arithmetic is detected by hand
//! rather than delegated to a wider native type or a big-integer library.
//!
//! # Module overview
//!
//! - `primitives`  
//!   The `U2048` value type: comparison, addition, subtraction,
//!   shift-and-add multiplication, bit-by-bit division and base-10
//!   rendering, all modulo 2²⁰⁴⁸. A process-wide counter tallies every
//!   addition performed, including those done internally by the higher
//!   operations.
//!
//! - `collections`  
//!   A constant-time frequency counter over hashable elements and a
//!   growable `f64` array with a configurable resizing policy.
//!
//! - `graph`  
//!   A weighted directed graph and Dijkstra's shortest-path search.
//!
//! # Design goals
//!
//! - No heap allocations in the integer arithmetic (rendering aside)
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics, including at the overflow boundaries
//!
//! # Cargo features
//!
//! - `speed`  
//!   Multiplication stops scanning the multiplier after its highest set
//!   bit. Results are unchanged; fewer additions are performed.

pub mod collections;
pub mod graph;
pub mod primitives;
