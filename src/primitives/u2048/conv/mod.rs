//! Integer conversion utilities
//!
//! This module groups explicit conversion implementations between the
//! fixed-size `U2048` primitive and native integer types.
//!
//! Each submodule is responsible for conversions to and from a specific
//! family of integers, following these principles:
//! - native values land in the least significant limbs
//! - no implicit truncation
//! - fallible conversions when narrowing or sign may lose information

mod narrow;
mod signed;
mod u128;
mod u64;
