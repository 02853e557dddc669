use crate::{add_exact, floor_div, floor_mod, multiply_exact, negate_exact, subtract_exact};
use chronon_common::error::ErrorKind;

#[test]
fn test_add_exact() {
    assert_eq!(add_exact(1i64, 2).unwrap(), 3);
    assert_eq!(add_exact(i64::MAX, 0).unwrap(), i64::MAX);
    assert_eq!(add_exact(i64::MAX, i64::MIN).unwrap(), -1);
    assert_eq!(add_exact(i64::MIN, i64::MAX).unwrap(), -1);

    let err = add_exact(i64::MAX, 1).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Overflow { operation } if operation == "add"));
    assert!(add_exact(i64::MIN, -1).is_err());
    assert!(add_exact(i64::MIN, i64::MIN).is_err());
}

#[test]
fn test_subtract_exact() {
    assert_eq!(subtract_exact(0i64, i64::MAX).unwrap(), -i64::MAX);
    assert!(subtract_exact(0i64, i64::MIN).is_err());
    assert!(subtract_exact(i64::MAX, -1).is_err());
}

#[test]
fn test_multiply_exact() {
    assert_eq!(multiply_exact(3i64, -4).unwrap(), -12);
    assert_eq!(multiply_exact(i64::MAX, 1).unwrap(), i64::MAX);
    assert_eq!(multiply_exact(i64::MIN, 1).unwrap(), i64::MIN);
    assert_eq!(multiply_exact(i64::MAX, -1).unwrap(), -i64::MAX);
    assert_eq!(multiply_exact(0i64, i64::MIN).unwrap(), 0);

    // The one product whose operands are both in range but whose magnitude is not.
    assert!(multiply_exact(i64::MIN, -1).is_err());
    assert!(multiply_exact(-1, i64::MIN).is_err());
    assert!(multiply_exact(i64::MAX / 86400 + 1, 86400).is_err());
    assert!(multiply_exact(i64::MIN / 60 - 1, 60).is_err());
    assert!(multiply_exact(i128::MAX, 2).is_err());
}

#[test]
fn test_negate_exact() {
    assert_eq!(negate_exact(5i64).unwrap(), -5);
    assert_eq!(negate_exact(i64::MAX).unwrap(), i64::MIN + 1);
    assert!(negate_exact(i64::MIN).is_err());
}

#[test]
fn test_floor_div_and_mod() {
    let cases: [(i64, i64, i64, i64); 12] = [
        (7, 2, 3, 1),
        (-7, 2, -4, 1),
        (7, -2, -4, -1),
        (-7, -2, 3, -1),
        (6, 3, 2, 0),
        (-6, 3, -2, 0),
        (-1, 1_000_000_000, -1, 999_999_999),
        (1_000_000_000, 1_000_000_000, 1, 0),
        (-1_000_000_000, 1_000_000_000, -1, 0),
        (-1_000_000_001, 1_000_000_000, -2, 999_999_999),
        (i64::MIN, 1_000_000_000, -9_223_372_037, 145_224_192),
        (i64::MAX, 1_000_000_000, 9_223_372_036, 854_775_807),
    ];
    for (a, b, q, r) in cases {
        assert_eq!(floor_div(a, b).unwrap(), q, "floor_div({a}, {b})");
        assert_eq!(floor_mod(a, b).unwrap(), r, "floor_mod({a}, {b})");
    }
}

#[test]
fn test_floor_edge_cases() {
    assert!(floor_div(i64::MIN, -1).is_err());
    assert_eq!(floor_mod(i64::MIN, -1).unwrap(), 0);

    let err = floor_div(1i64, 0).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::DivisionByZero { .. }));
    assert!(err.is_arithmetic());
    assert!(floor_mod(1i64, 0).is_err());
}

#[test]
fn test_floor_identity_randomized() {
    fastrand::seed(20190415);
    for _ in 0..10_000 {
        let a = fastrand::i64(..);
        let b = match fastrand::i64(-1_000_000_000..=1_000_000_000) {
            0 => 1,
            b => b,
        };
        let q = floor_div(a, b).unwrap();
        let r = floor_mod(a, b).unwrap();
        assert_eq!(q as i128 * b as i128 + r as i128, a as i128);
        if b > 0 {
            assert!((0..b).contains(&r));
        } else {
            assert!((b + 1..=0).contains(&r));
        }
    }
}
