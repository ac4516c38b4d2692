//! 2048-bit unsigned integer primitive
//!
//! This module defines a fixed-size 2048-bit unsigned integer type (`U2048`).
//!
//! It is designed as a **simple, explicit value type** built entirely from
//! 64-bit limb arithmetic. No wider native integer is used anywhere in the
//! arithmetic, so every carry and borrow is detected by hand.
//!
//! The internal representation is little-endian at the limb level: limb 0
//! holds the least significant 64 bits, limb 31 the most significant.

use std::cmp::Ordering;
use std::fmt::{Formatter, Result, UpperHex};

/// Fixed-size 2048-bit unsigned integer.
///
/// The value is stored as 32 limbs of 64 bits, least significant first.
/// All arithmetic is performed modulo 2²⁰⁴⁸.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct U2048(pub(crate) [u64; 32]);

impl U2048 {
    /// Number of 64-bit limbs.
    pub const LIMBS: usize = 32;

    /// Width of the integer in bits.
    pub const BITS: u32 = 2048;

    /// Number of decimal digits of the largest value (2²⁰⁴⁸ − 1).
    pub const MAX_DECIMAL_DIGITS: usize = 617;

    /// The value zero.
    pub const ZERO: Self = Self([0u64; 32]);

    /// The value one.
    pub const ONE: Self = Self::one_le();

    /// The maximum representable value (2²⁰⁴⁸ − 1).
    pub const MAX: Self = Self([u64::MAX; 32]);

    /// Returns the value one with only the lowest limb set.
    ///
    /// This is a `const` constructor suitable for use in constant contexts.
    pub const fn one_le() -> Self {
        let mut out = [0u64; 32];
        out[0] = 1;
        U2048(out)
    }

    /// Returns `true` if every limb is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == 0)
    }

    /// Returns the bit at position `index`, 0 being the least significant.
    ///
    /// # Panics
    /// Panics if `index >= 2048`.
    #[inline]
    pub fn bit(&self, index: u32) -> bool {
        assert!(index < Self::BITS, "bit index out of range");

        (self.0[(index / 64) as usize] >> (index % 64)) & 1 == 1
    }

    /// Returns 2^`exponent`.
    ///
    /// # Panics
    /// Panics if `exponent >= 2048`.
    pub fn power_of_two(exponent: u32) -> Self {
        assert!(exponent < Self::BITS, "exponent out of range");

        let mut out = [0u64; 32];
        out[(exponent / 64) as usize] = 1u64 << (exponent % 64);
        U2048(out)
    }

    /// Returns the index of the highest set bit.
    ///
    /// Zero has no set bit; it reports index 0, the same as one. Callers
    /// that need to tell them apart should check [`U2048::is_zero`].
    pub fn most_significant_bit(&self) -> u32 {
        (Self::BITS - 1).saturating_sub(self.leading_zeros())
    }

    /// Counts the number of leading zero bits in the integer.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=2048`.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &limb in self.0.iter().rev() {
            if limb == 0 {
                count += 64;
            } else {
                count += limb.leading_zeros();
                return count;
            }
        }

        count
    }

    /// Counts the number of set bits.
    pub fn count_ones(&self) -> u32 {
        self.0.iter().map(|limb| limb.count_ones()).sum()
    }

    /// Builds a value from 256 little-endian bytes.
    pub fn from_le_bytes(bytes: [u8; 256]) -> Self {
        let mut out = [0u64; 32];

        for (o, chunk) in out.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *o = u64::from_le_bytes(word);
        }

        U2048(out)
    }

    /// Returns the value as 256 little-endian bytes.
    pub fn to_le_bytes(&self) -> [u8; 256] {
        let mut out = [0u8; 256];

        for (chunk, limb) in out.chunks_exact_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }

        out
    }

    /// Returns the total number of `U2048` additions performed so far.
    ///
    /// See [`crate::primitives::num_additions`].
    pub fn num_additions() -> u64 {
        super::counter::num_additions()
    }
}

impl Ord for U2048 {
    /// Compares limbs from the most significant down; the first differing
    /// pair decides.
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.0.iter().rev().zip(other.0.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for U2048 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Manual `Default` implementation for `U2048`.
///
/// `Default` is not implemented for arrays longer than 32 elements on
/// every toolchain, and spelling it out keeps the zero value explicit.
impl Default for U2048 {
    fn default() -> Self {
        U2048::ZERO
    }
}

impl UpperHex for U2048 {
    /// Formats the value as colon-separated hexadecimal limbs.
    ///
    /// Limbs are printed most significant first, each as sixteen uppercase
    /// hexadecimal characters.
    ///
    /// Example:
    /// `0000000000000000:...:000000000000002A`
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, limb) in self.0.iter().rev().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }

            write!(f, "{:016X}", limb)?;
        }

        Ok(())
    }
}

impl AsRef<[u64]> for U2048 {
    fn as_ref(&self) -> &[u64] {
        &self.0
    }
}
