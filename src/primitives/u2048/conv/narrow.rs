//! Conversions from unsigned integers narrower than 64 bits
//!
//! Every such value fits in the least significant limb, so the widening
//! direction is infallible. The narrowing direction goes through `u64`
//! and fails if the value does not fit the target width.

use crate::primitives::U2048;

macro_rules! narrow_conv {
    ($($t:ty),*) => {
        $(
            impl From<$t> for U2048 {
                fn from(value: $t) -> Self {
                    U2048::from(value as u64)
                }
            }

            impl TryFrom<U2048> for $t {
                type Error = ();

                fn try_from(value: U2048) -> Result<Self, Self::Error> {
                    let wide = u64::try_from(value)?;

                    <$t>::try_from(wide).map_err(|_| ())
                }
            }
        )*
    };
}

narrow_conv!(u8, u16, u32, usize);
