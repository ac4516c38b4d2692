//! Conversions between `U2048` and 128-bit integers

use crate::primitives::U2048;

/// Attempts to convert a `U2048` into a `u128`.
///
/// The conversion succeeds only if the upper 1920 bits of the value are
/// zero.
impl TryFrom<U2048> for u128 {
    type Error = ();

    fn try_from(value: U2048) -> Result<Self, Self::Error> {
        let (low, high) = value.0.split_at(2);

        if high.iter().any(|&limb| limb != 0) {
            return Err(());
        }

        Ok(((low[1] as u128) << 64) | low[0] as u128)
    }
}

/// Converts a `u128` into a `U2048`.
///
/// The value occupies the two least significant limbs.
impl From<u128> for U2048 {
    fn from(value: u128) -> Self {
        let mut out = [0u64; 32];
        out[0] = value as u64;
        out[1] = (value >> 64) as u64;
        U2048(out)
    }
}
