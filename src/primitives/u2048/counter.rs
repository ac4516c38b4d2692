//! Process-wide addition counter
//!
//! Every `U2048` addition, including the ones performed internally by
//! multiplication, division and decimal rendering, is recorded here exactly
//! once. The counter starts at zero when the process starts and is never
//! reset.
//!
//! The counter is an atomic so that arithmetic running on several threads
//! keeps an exact total. Relaxed ordering is enough: the value is a pure
//! tally and does not publish any other memory.

use std::sync::atomic::{AtomicU64, Ordering};

static ADDITIONS: AtomicU64 = AtomicU64::new(0);

#[inline(always)]
pub(crate) fn record_addition() {
    ADDITIONS.fetch_add(1, Ordering::Relaxed);
}

/// Returns the total number of `U2048` additions performed since the
/// process started.
pub fn num_additions() -> u64 {
    ADDITIONS.load(Ordering::Relaxed)
}
