//! Property tests for the normalization invariant and exact arithmetic.
//!
//! Operands are kept within ±10_000 where exactness is asserted so that no
//! intermediate result needs to be approximated back into i32 range.

use fraction32::{Fraction, FractionError};
use proptest::prelude::*;

fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn is_canonical(f: Fraction) -> bool {
    f.denominator() > 0 && gcd(f.numerator() as i64, f.denominator() as i64) == 1
}

fn small() -> impl Strategy<Value = Fraction> {
    (-10_000i32..=10_000, (1i32..=10_000).prop_flat_map(|d| prop_oneof![Just(d), Just(-d)]))
        .prop_map(|(n, d)| Fraction::new(n, d).unwrap())
}

fn any_nonzero_i32() -> impl Strategy<Value = i32> {
    any::<i32>().prop_filter("denominator must be non-zero", |d| *d != 0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn construction_is_canonical(n in any::<i32>(), d in any_nonzero_i32()) {
        let f = Fraction::new(n, d).unwrap();
        prop_assert!(is_canonical(f), "{n}/{d} -> {f}");
        // only +2^31 / odd has no exact i32 form
        if !(n == i32::MIN && d < 0 && d % 2 != 0) {
            prop_assert_eq!(f.numerator() as i64 * d as i64, n as i64 * f.denominator() as i64);
        }
        if n == 0 {
            prop_assert_eq!(f, Fraction::ZERO);
        }
    }

    #[test]
    fn min_numerator_is_kept_exact(d in 1i32..=i32::MAX) {
        let f = Fraction::new(i32::MIN, d).unwrap();
        prop_assert_eq!(f.numerator() as i64 * d as i64, i32::MIN as i64 * f.denominator() as i64);
        prop_assert_eq!(f.to_string().parse::<Fraction>(), Ok(f));
    }

    #[test]
    fn zero_denominator_is_rejected(n in any::<i32>()) {
        prop_assert_eq!(Fraction::new(n, 0), Err(FractionError::DivisionByZero));
    }

    #[test]
    fn arithmetic_results_are_canonical(a in any_nonzero_i32(), b in any_nonzero_i32(), c in any::<i32>(), d in any_nonzero_i32()) {
        let x = Fraction::new(a, b).unwrap();
        let y = Fraction::new(c, d).unwrap();
        prop_assert!(is_canonical(x + y));
        prop_assert!(is_canonical(x - y));
        prop_assert!(is_canonical(x * y));
        if !y.is_zero() {
            prop_assert!(is_canonical(x / y));
        }
    }

    #[test]
    fn small_arithmetic_is_exact(x in small(), y in small()) {
        let (a, b) = (x.numerator() as i64, x.denominator() as i64);
        let (c, d) = (y.numerator() as i64, y.denominator() as i64);

        let sum = x + y;
        prop_assert_eq!(sum.numerator() as i64 * b * d, (a * d + c * b) * sum.denominator() as i64);
        let product = x * y;
        prop_assert_eq!(product.numerator() as i64 * b * d, a * c * product.denominator() as i64);

        prop_assert_eq!(x + y, y + x);
        prop_assert_eq!((x + y) - y, x);
        prop_assert_eq!(x - y, -(y - x));
        if !y.is_zero() {
            prop_assert_eq!((x * y) / y, x);
        }
    }

    #[test]
    fn division_by_zero_leaves_receiver_untouched(x in small(), d in 1i32..1000) {
        let mut receiver = x;
        let zero = Fraction::new(0, d).unwrap();
        prop_assert_eq!(receiver.div_in_place(zero).err(), Some(FractionError::DivisionByZero));
        prop_assert_eq!(receiver, x);
    }

    #[test]
    fn display_parse_round_trip(n in any::<i32>(), d in any_nonzero_i32()) {
        let f = Fraction::new(n, d).unwrap();
        prop_assert_eq!(f.to_string().parse::<Fraction>(), Ok(f));
    }

    #[test]
    fn ordering_matches_f64(x in small(), y in small()) {
        if x.to_f64() < y.to_f64() {
            prop_assert!(x < y);
        } else if x.to_f64() > y.to_f64() {
            prop_assert!(x > y);
        } else {
            prop_assert_eq!(x, y);
        }
    }
}
