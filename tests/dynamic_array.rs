use fixedint::collections::{DynamicArray, GrowthPolicy, GrowthPolicyError};

#[test]
fn starts_empty_at_min_capacity() {
    let array = DynamicArray::new();

    assert!(array.is_empty());
    assert_eq!(array.len(), 0);
    assert_eq!(array.capacity(), 10);
    assert_eq!(array.policy(), &GrowthPolicy::default());
}

#[test]
fn push_pop_and_index() {
    let mut array = DynamicArray::new();
    array.push(1.5);
    array.push(-2.0);
    array.push(3.25);

    assert_eq!(array.len(), 3);
    assert_eq!(array[1], -2.0);
    assert_eq!(array.get(2), Some(&3.25));
    assert_eq!(array.get(3), None);

    array[1] = 4.0;
    if let Some(value) = array.get_mut(0) {
        *value = 0.5;
    }
    assert_eq!(array.as_slice(), &[0.5, 4.0, 3.25]);

    assert_eq!(array.pop(), Some(3.25));
    assert_eq!(array.pop(), Some(4.0));
    assert_eq!(array.pop(), Some(0.5));
    assert_eq!(array.pop(), None);
}

#[test]
fn grows_when_full() {
    let mut array = DynamicArray::new();
    array.extend((0..10).map(f64::from));
    assert_eq!(array.capacity(), 10);

    array.push(10.0);
    assert_eq!(array.capacity(), 21);

    array.extend((11..30).map(f64::from));
    assert_eq!(array.len(), 30);
    assert_eq!(array.capacity(), 43);

    let expected: Vec<f64> = (0..30).map(f64::from).collect();
    assert_eq!(array.iter().copied().collect::<Vec<_>>(), expected);
}

#[test]
fn shrinks_when_sparse() {
    let mut array = DynamicArray::new();
    array.extend((0..30).map(f64::from));
    assert_eq!(array.capacity(), 43);

    for _ in 0..9 {
        array.pop();
    }
    assert_eq!(array.len(), 21);
    assert_eq!(array.capacity(), 43);

    assert_eq!(array.pop(), Some(20.0));
    assert_eq!(array.capacity(), 22);

    while array.pop().is_some() {}
    assert!(array.capacity() >= 10);
    assert!(array.is_empty());
}

#[test]
fn clone_is_deep() {
    let mut original = DynamicArray::new();
    original.push(1.0);

    let mut copy = original.clone();
    copy[0] = 9.0;
    copy.push(2.0);

    assert_eq!(original.as_slice(), &[1.0]);
    assert_eq!(copy.as_slice(), &[9.0, 2.0]);
}

#[test]
fn custom_policy() {
    let policy = GrowthPolicy {
        growth_factor: 1.5,
        shrink_factor: 0.25,
        min_capacity: 2,
    };
    let mut array = DynamicArray::with_policy(policy).unwrap();

    assert_eq!(array.capacity(), 2);
    array.push(1.0);
    array.push(2.0);
    array.push(3.0);
    assert_eq!(array.capacity(), 4);

    let sum: f64 = (&array).into_iter().sum();
    assert_eq!(sum, 6.0);
}

#[test]
fn rejects_invalid_policies() {
    let base = GrowthPolicy::default();

    let growth = GrowthPolicy {
        growth_factor: 1.0,
        ..base
    };
    assert_eq!(
        DynamicArray::with_policy(growth).unwrap_err(),
        GrowthPolicyError::GrowthFactorTooSmall
    );

    let growth = GrowthPolicy {
        growth_factor: f64::INFINITY,
        ..base
    };
    assert_eq!(growth.validate(), Err(GrowthPolicyError::GrowthFactorTooSmall));

    let shrink = GrowthPolicy {
        shrink_factor: 1.0,
        ..base
    };
    assert_eq!(shrink.validate(), Err(GrowthPolicyError::ShrinkFactorOutOfRange));

    let shrink = GrowthPolicy {
        shrink_factor: f64::NAN,
        ..base
    };
    assert_eq!(shrink.validate(), Err(GrowthPolicyError::ShrinkFactorOutOfRange));

    let floor = GrowthPolicy {
        min_capacity: 0,
        ..base
    };
    assert_eq!(floor.validate(), Err(GrowthPolicyError::MinCapacityTooSmall));

    assert!(base.validate().is_ok());
}
