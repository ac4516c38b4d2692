//! General-purpose containers
//!
//! Small, self-contained data structures that do not depend on the
//! fixed-width integer primitives:
//!
//! - [`CardinalityCounter`]  
//!   Constant-time frequency counting over hashable elements, with
//!   access to a most frequent element.
//!
//! - [`DynamicArray`]  
//!   A growable `f64` sequence whose resizing behavior is configured by a
//!   validated [`GrowthPolicy`].

mod cardinality;
mod dynamic_array;

pub use cardinality::CardinalityCounter;
pub use dynamic_array::{DynamicArray, GrowthPolicy, GrowthPolicyError};
