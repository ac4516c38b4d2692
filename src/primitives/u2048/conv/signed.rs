//! Conversions from signed integers
//!
//! `U2048` has no negative values. Signed input is accepted only when it
//! is non-negative; anything else is rejected rather than reinterpreted.

use crate::primitives::U2048;

macro_rules! signed_conv {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for U2048 {
                type Error = ();

                fn try_from(value: $t) -> Result<Self, Self::Error> {
                    u64::try_from(value).map(U2048::from).map_err(|_| ())
                }
            }
        )*
    };
}

signed_conv!(i8, i16, i32, i64, isize);
