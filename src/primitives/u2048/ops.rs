//! Arithmetic operations for `U2048`
//!
//! This module implements the arithmetic operator traits for the `U2048`
//! type, built bottom-up:
//! - addition works limb by limb with a hand-detected carry
//! - subtraction works limb by limb with a hand-detected borrow
//! - multiplication is shift-and-add, using only addition
//! - division reconstructs the quotient bit by bit, using only
//!   multiplication and comparison
//!
//! All operations are implemented explicitly on fixed-size arrays, with:
//! - no heap allocation
//! - no wider native integer type
//! - wrapping semantics modulo 2²⁰⁴⁸
//!
//! The internal representation is little-endian at the limb level.

use crate::primitives::u2048::U2048;
use crate::primitives::u2048::counter::record_addition;

use log::trace;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

impl U2048 {
    /// Adds `rhs`, returning the sum modulo 2²⁰⁴⁸ and the carry out of the
    /// most significant limb.
    ///
    /// Counts as one addition.
    pub fn overflowing_add(self, rhs: U2048) -> (U2048, bool) {
        record_addition();

        let mut out = [0u64; 32];
        let mut carry = false;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()) {
            let sum = a.wrapping_add(b).wrapping_add(carry as u64);

            // With a carry in, the sum wraps to exactly `b` when
            // `a == u64::MAX`, so that check is inclusive.
            carry = if carry { sum <= b } else { sum < a };
            *o = sum;
        }

        (U2048(out), carry)
    }

    /// Adds `rhs`, returning `None` if the true sum does not fit in 2048 bits.
    pub fn checked_add(self, rhs: U2048) -> Option<U2048> {
        match self.overflowing_add(rhs) {
            (sum, false) => Some(sum),
            (_, true) => None,
        }
    }

    /// Subtracts `rhs`, returning `None` if `rhs > self`.
    pub fn checked_sub(self, rhs: U2048) -> Option<U2048> {
        if self < rhs {
            return None;
        }

        Some(self - rhs)
    }

    /// Multiplies by `rhs`, returning the product modulo 2²⁰⁴⁸ and whether
    /// the true product needed more than 2048 bits.
    ///
    /// The running multiplicand is doubled once per scanned multiplier bit
    /// and added into the accumulator for every set bit, so the call costs
    /// 2048 + `rhs.count_ones()` additions. With the `speed` feature the
    /// scan stops after the multiplier's highest set bit.
    pub fn overflowing_mul(self, rhs: U2048) -> (U2048, bool) {
        let mut acc = U2048::ZERO;
        let mut shifted = self;

        // Set once a one bit of the multiplicand has been doubled out of range.
        let mut shifted_out = false;
        let mut overflow = false;

        for index in 0..Self::scanned_bits(&rhs) {
            if rhs.bit(index) {
                let (sum, carry) = acc.overflowing_add(shifted);
                acc = sum;
                overflow |= carry || shifted_out;
            }

            let (doubled, carry) = shifted.overflowing_add(shifted);
            shifted = doubled;
            shifted_out |= carry;
        }

        (acc, overflow)
    }

    #[cfg(not(feature = "speed"))]
    #[inline(always)]
    fn scanned_bits(_multiplier: &U2048) -> u32 {
        U2048::BITS
    }

    #[cfg(feature = "speed")]
    #[inline(always)]
    fn scanned_bits(multiplier: &U2048) -> u32 {
        if multiplier.is_zero() {
            0
        } else {
            multiplier.most_significant_bit() + 1
        }
    }

    /// Multiplies by `rhs`, returning `None` if the product does not fit in
    /// 2048 bits.
    pub fn checked_mul(self, rhs: U2048) -> Option<U2048> {
        match self.overflowing_mul(rhs) {
            (product, false) => Some(product),
            (_, true) => None,
        }
    }

    /// Divides by `rhs`, returning `None` if `rhs` is zero.
    pub fn checked_div(self, rhs: U2048) -> Option<U2048> {
        if rhs.is_zero() {
            return None;
        }

        Some(self.div_nonzero(rhs))
    }

    /// Bit-by-bit quotient reconstruction.
    ///
    /// Starting from the largest shift that can still fit, each quotient bit
    /// is tentatively set and kept if `divisor * trial` does not exceed
    /// `self`. A product that overflows 2048 bits is necessarily larger than
    /// `self` and rejects the bit. Costs O(2048²) additions.
    fn div_nonzero(self, divisor: U2048) -> U2048 {
        if self < divisor {
            return U2048::ZERO;
        }

        let mut quotient = U2048::ZERO;
        let mut shift = self.most_significant_bit() - divisor.most_significant_bit();

        loop {
            let trial = quotient + U2048::power_of_two(shift);
            let (candidate, overflow) = divisor.overflowing_mul(trial);

            if !overflow {
                match candidate.cmp(&self) {
                    Ordering::Less => quotient = trial,
                    Ordering::Equal => {
                        trace!("exact quotient found with {} bits left", shift);
                        return trial;
                    }
                    Ordering::Greater => {}
                }
            }

            if shift == 0 {
                break;
            }
            shift -= 1;
        }

        quotient
    }
}

/// Addition modulo 2²⁰⁴⁸.
///
/// The carry out of the most significant limb is discarded.
impl Add for U2048 {
    type Output = U2048;

    fn add(self, rhs: U2048) -> Self::Output {
        self.overflowing_add(rhs).0
    }
}

/// Subtraction modulo 2²⁰⁴⁸.
///
/// Subtracting a larger value wraps around, two's-complement style.
impl Sub for U2048 {
    type Output = U2048;

    fn sub(self, rhs: U2048) -> Self::Output {
        let mut out = [0u64; 32];
        let mut borrow = 0u64;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()) {
            let sub = b.wrapping_add(borrow);

            // `sub` wraps to zero when `b == u64::MAX` and a borrow is
            // pending; the limb then always borrows.
            let next_borrow = a < sub || (borrow == 1 && sub == 0);

            *o = a.wrapping_sub(b).wrapping_sub(borrow);
            borrow = next_borrow as u64;
        }

        U2048(out)
    }
}

/// Multiplication modulo 2²⁰⁴⁸.
///
/// The result is truncated to 2048 bits.
impl Mul<U2048> for U2048 {
    type Output = U2048;

    fn mul(self, rhs: U2048) -> Self::Output {
        self.overflowing_mul(rhs).0
    }
}

/// Integer division (`/`) producing the quotient.
///
/// # Panics
/// Panics with `"division by zero"` if `rhs` is zero.
impl Div<U2048> for U2048 {
    type Output = U2048;

    fn div(self, rhs: U2048) -> Self::Output {
        assert!(!rhs.is_zero(), "division by zero");

        self.div_nonzero(rhs)
    }
}

impl AddAssign for U2048 {
    fn add_assign(&mut self, rhs: U2048) {
        *self = *self + rhs;
    }
}

impl SubAssign for U2048 {
    fn sub_assign(&mut self, rhs: U2048) {
        *self = *self - rhs;
    }
}

impl MulAssign for U2048 {
    fn mul_assign(&mut self, rhs: U2048) {
        *self = *self * rhs;
    }
}

impl DivAssign for U2048 {
    fn div_assign(&mut self, rhs: U2048) {
        *self = *self / rhs;
    }
}
