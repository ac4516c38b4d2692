//! Conversions between `U2048` and 64-bit integer representations
//!
//! `U2048` is itself an array of 64-bit limbs, so these conversions expose
//! the raw representation (least significant limb first) as well as the
//! single-limb `u64` value.

use crate::primitives::U2048;

/// Converts a `U2048` into its 32 limbs, least significant first.
impl From<U2048> for [u64; 32] {
    fn from(value: U2048) -> Self {
        value.0
    }
}

/// Converts 32 limbs into a `U2048`.
///
/// The input array must be ordered from least significant to most
/// significant limb.
impl From<[u64; 32]> for U2048 {
    fn from(value: [u64; 32]) -> Self {
        U2048(value)
    }
}

/// Attempts to convert a `U2048` into a `u64`.
///
/// The conversion succeeds only if the upper 1984 bits of the value are
/// zero.
impl TryFrom<U2048> for u64 {
    type Error = ();

    fn try_from(value: U2048) -> Result<Self, Self::Error> {
        let (low, high) = value.0.split_at(1);

        if high.iter().any(|&limb| limb != 0) {
            return Err(());
        }

        Ok(low[0])
    }
}

/// Converts a `u64` into a `U2048`.
///
/// The value is placed in the least significant limb, with all higher
/// limbs set to zero.
impl From<u64> for U2048 {
    fn from(value: u64) -> Self {
        let mut out = [0u64; 32];
        out[0] = value;
        U2048(out)
    }
}
