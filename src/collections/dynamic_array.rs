//! Growable array of `f64` with an explicit capacity policy.
//!
//! Unlike `Vec`, whose growth strategy is an implementation detail,
//! [`DynamicArray`] resizes its storage according to a caller-supplied
//! [`GrowthPolicy`]: it grows by `growth_factor` when full and shrinks by
//! `shrink_factor` once it becomes sparse, never dropping below
//! `min_capacity`. Both `push` and `pop` are amortized O(1).

use log::trace;
use std::fmt::{self, Display, Formatter};
use std::ops::{Index, IndexMut};

/// Resizing parameters for a [`DynamicArray`].
///
/// # Recommended Values
///
/// The defaults (`2.0`, `0.5`, `10`) double the capacity when full and
/// halve it once less than half of it is used.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthPolicy {
    /// Factor applied to the capacity when the array is full (> 1).
    pub growth_factor: f64,
    /// Factor applied to the capacity when the array becomes sparse
    /// (strictly between 0 and 1).
    pub shrink_factor: f64,
    /// Capacity floor, also the initial capacity (minimum 1).
    pub min_capacity: usize,
}

/// Errors that can occur during growth policy validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowthPolicyError {
    /// `growth_factor` must be finite and greater than 1.
    GrowthFactorTooSmall,
    /// `shrink_factor` must lie strictly between 0 and 1.
    ShrinkFactorOutOfRange,
    /// `min_capacity` must be at least 1.
    MinCapacityTooSmall,
}

impl Display for GrowthPolicyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::GrowthFactorTooSmall => f.write_str("growth factor must be greater than 1"),
            Self::ShrinkFactorOutOfRange => f.write_str("shrink factor must be in (0, 1)"),
            Self::MinCapacityTooSmall => f.write_str("minimum capacity must be at least 1"),
        }
    }
}

impl std::error::Error for GrowthPolicyError {}

impl GrowthPolicy {
    pub fn validate(&self) -> Result<(), GrowthPolicyError> {
        if !self.growth_factor.is_finite() || self.growth_factor <= 1.0 {
            return Err(GrowthPolicyError::GrowthFactorTooSmall);
        }

        if !(self.shrink_factor > 0.0 && self.shrink_factor < 1.0) {
            return Err(GrowthPolicyError::ShrinkFactorOutOfRange);
        }

        if self.min_capacity < 1 {
            return Err(GrowthPolicyError::MinCapacityTooSmall);
        }

        Ok(())
    }
}

impl Default for GrowthPolicy {
    /// Default policy: double when full, halve when under half full,
    /// never below 10 slots.
    fn default() -> Self {
        Self {
            growth_factor: 2.0,
            shrink_factor: 0.5,
            min_capacity: 10,
        }
    }
}

/// A growable sequence of `f64` values.
#[derive(Clone, Debug)]
pub struct DynamicArray {
    data: Box<[f64]>,
    len: usize,
    policy: GrowthPolicy,
}

impl DynamicArray {
    /// Creates an empty array with the default [`GrowthPolicy`].
    pub fn new() -> Self {
        Self::from_valid_policy(GrowthPolicy::default())
    }

    /// Creates an empty array with a custom policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the policy fails [`GrowthPolicy::validate`].
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self, GrowthPolicyError> {
        policy.validate()?;

        Ok(Self::from_valid_policy(policy))
    }

    fn from_valid_policy(policy: GrowthPolicy) -> Self {
        Self {
            data: vec![0.0; policy.min_capacity].into_boxed_slice(),
            len: 0,
            policy,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    /// Appends `value`, growing the storage first if it is full.
    pub fn push(&mut self, value: f64) {
        if self.len == self.capacity() {
            self.reallocate(self.policy.growth_factor);
        }

        self.data[self.len] = value;
        self.len += 1;
    }

    /// Removes and returns the last value, or `None` if the array is empty.
    ///
    /// The storage shrinks when fewer than `capacity * shrink_factor` slots
    /// are in use and the array is still above its capacity floor.
    pub fn pop(&mut self) -> Option<f64> {
        if self.len == 0 {
            return None;
        }

        let sparse = (self.len as f64) < self.capacity() as f64 * self.policy.shrink_factor;
        if sparse && self.len > self.policy.min_capacity {
            self.reallocate(self.policy.shrink_factor);
        }

        self.len -= 1;
        Some(self.data[self.len])
    }

    pub fn get(&self, index: usize) -> Option<&f64> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut f64> {
        self.as_mut_slice().get_mut(index)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.as_slice().iter()
    }

    /// Moves the live values into storage sized `capacity * factor + 1`,
    /// clamped to the capacity floor and the current length.
    fn reallocate(&mut self, factor: f64) {
        let scaled = (self.capacity() as f64 * factor) as usize + 1;
        let capacity = scaled.max(self.policy.min_capacity).max(self.len);

        trace!("reallocating dynamic array: {} -> {} slots", self.capacity(), capacity);

        let mut data = vec![0.0; capacity].into_boxed_slice();
        data[..self.len].copy_from_slice(&self.data[..self.len]);
        self.data = data;
    }
}

impl Default for DynamicArray {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for DynamicArray {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl IndexMut<usize> for DynamicArray {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<'a> IntoIterator for &'a DynamicArray {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<f64> for DynamicArray {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
