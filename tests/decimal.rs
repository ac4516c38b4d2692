use fixedint::primitives::U2048;

use num_bigint::BigUint;
use num_traits::One;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[test]
fn decimal_zero_is_single_digit() {
    assert_eq!(U2048::ZERO.to_string(), "0");
}

#[test]
fn decimal_small_values() {
    assert_eq!(U2048::ONE.to_string(), "1");
    assert_eq!(U2048::from(9u8).to_string(), "9");
    assert_eq!(U2048::from(10u8).to_string(), "10");
    assert_eq!(U2048::from(42u8).to_string(), "42");
    assert_eq!(U2048::from(100u8).to_string(), "100");
    assert_eq!(U2048::from(u64::MAX).to_string(), u64::MAX.to_string());
    assert_eq!(U2048::from(u128::MAX).to_string(), u128::MAX.to_string());
}

#[test]
fn decimal_powers_of_ten_boundaries() {
    let mut power = U2048::ONE;
    let mut expected = String::from("1");

    for _ in 0..40 {
        assert_eq!(power.to_string(), expected);
        if expected.len() > 1 {
            let below = (power - U2048::ONE).to_string();
            assert_eq!(below.len(), expected.len() - 1);
            assert!(below.bytes().all(|digit| digit == b'9'));
        }

        power = power * U2048::from(10u8);
        expected.push('0');
    }
}

#[test]
fn decimal_max_value() {
    let expected = ((BigUint::one() << 2048usize) - 1u32).to_string();
    let rendered = U2048::MAX.to_string();

    assert_eq!(rendered.len(), U2048::MAX_DECIMAL_DIGITS);
    assert_eq!(rendered, expected);
    assert!(rendered.starts_with("3231700607"));
    assert!(rendered.ends_with('5'));
}

#[test]
fn decimal_leading_digit_near_the_top() {
    // 3 * 10^616 + 1: the trial sum for leading digit 4 exceeds 2^2048.
    let big = BigUint::from(3u32) * BigUint::from(10u32).pow(616) + 1u32;
    let mut bytes = [0u8; 256];
    let le = big.to_bytes_le();
    bytes[..le.len()].copy_from_slice(&le);
    let value = U2048::from_le_bytes(bytes);

    let rendered = value.to_string();
    let mut expected = String::from("3");
    expected.push_str(&"0".repeat(615));
    expected.push('1');

    assert_eq!(rendered.len(), U2048::MAX_DECIMAL_DIGITS);
    assert_eq!(rendered, expected);
    assert_eq!(rendered, big.to_string());
}

#[test]
fn decimal_random_values_match_reference() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xDEC);

    for _ in 0..16 {
        let used = (rng.next_u32() % 32 + 1) as usize;
        let mut limbs = [0u64; 32];
        for limb in limbs.iter_mut().take(used) {
            *limb = rng.next_u64();
        }
        let value = U2048::from(limbs);

        let expected = BigUint::from_bytes_le(&value.to_le_bytes()).to_string();
        assert_eq!(value.to_string(), expected);
    }
}

#[test]
fn decimal_respects_width() {
    assert_eq!(format!("{:>5}", U2048::from(42u8)), "   42");
    assert_eq!(format!("{:05}", U2048::from(42u8)), "00042");
}

#[test]
fn decimal_write_to_sink() {
    let mut sink = Vec::new();
    U2048::from(1234567u32).write_decimal(&mut sink).unwrap();

    assert_eq!(sink, b"1234567");
}
