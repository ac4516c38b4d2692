//! Addition counter tests.
//!
//! These tests assert exact counter deltas, so they run in their own test
//! binary and serialize through `COUNTER_LOCK` to keep other arithmetic from
//! interleaving.

use fixedint::primitives::{U2048, num_additions};

use std::sync::{Mutex, MutexGuard};

static COUNTER_LOCK: Mutex<()> = Mutex::new(());

fn lock() -> MutexGuard<'static, ()> {
    COUNTER_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn additions_during<T>(f: impl FnOnce() -> T) -> (T, u64) {
    let before = num_additions();
    let out = f();
    (out, num_additions() - before)
}

#[test]
fn counter_one_per_addition() {
    let _guard = lock();

    let (_, delta) = additions_during(|| U2048::from(5u8) + U2048::from(7u8));
    assert_eq!(delta, 1);

    let (_, delta) = additions_during(|| U2048::MAX + U2048::MAX);
    assert_eq!(delta, 1);

    let (_, delta) = additions_during(|| U2048::MAX.checked_add(U2048::ONE));
    assert_eq!(delta, 1);

    let (_, delta) = additions_during(|| {
        let mut v = U2048::ONE;
        v += U2048::ONE;
        v + v
    });
    assert_eq!(delta, 2);
}

#[test]
fn counter_ignores_subtraction_and_comparison() {
    let _guard = lock();

    let (_, delta) = additions_during(|| {
        let d = U2048::from(7u8) - U2048::from(5u8);
        (d < U2048::MAX, d == U2048::ONE)
    });
    assert_eq!(delta, 0);
}

#[test]
fn counter_matches_accessor() {
    let _guard = lock();

    assert_eq!(U2048::num_additions(), num_additions());
}

#[cfg(not(feature = "speed"))]
#[test]
fn counter_multiplication_costs_full_width_plus_set_bits() {
    let _guard = lock();

    let (product, delta) = additions_during(|| U2048::from(6u8) * U2048::from(7u8));
    assert_eq!(product, U2048::from(42u8));
    assert_eq!(delta, 2048 + 3);

    let (_, delta) = additions_during(|| U2048::from(9u8) * U2048::ZERO);
    assert_eq!(delta, 2048);

    let (_, delta) = additions_during(|| U2048::ONE * U2048::MAX);
    assert_eq!(delta, 2048 + 2048);

    // the set bit at 2047 must still be visited
    let (_, delta) = additions_during(|| U2048::ONE * U2048::power_of_two(2047));
    assert_eq!(delta, 2048 + 1);
}

#[cfg(feature = "speed")]
#[test]
fn counter_multiplication_stops_at_highest_set_bit() {
    let _guard = lock();

    let (product, delta) = additions_during(|| U2048::from(6u8) * U2048::from(7u8));
    assert_eq!(product, U2048::from(42u8));
    assert_eq!(delta, 3 + 3);

    let (_, delta) = additions_during(|| U2048::from(9u8) * U2048::ZERO);
    assert_eq!(delta, 0);
}

#[test]
fn counter_division_performs_additions() {
    let _guard = lock();

    let (quotient, delta) = additions_during(|| U2048::from(42u8) / U2048::from(6u8));
    assert_eq!(quotient, U2048::from(7u8));
    assert!(delta > 0);

    let (_, delta) = additions_during(|| U2048::from(5u8) / U2048::from(6u8));
    assert_eq!(delta, 0);
}

#[test]
fn counter_rendering_zero() {
    let _guard = lock();

    // no power of ten is built past 10^0 = 1 > 0, then one trial sum
    let (rendered, delta) = additions_during(|| U2048::ZERO.to_string());
    assert_eq!(rendered, "0");
    assert_eq!(delta, 1);
}

#[test]
fn counter_is_monotonic() {
    let _guard = lock();

    let before = num_additions();
    let _ = U2048::from(3u8) * U2048::from(3u8);
    let middle = num_additions();
    let _ = U2048::from(3u8) + U2048::from(3u8);

    assert!(before < middle);
    assert!(middle < num_additions());
}
