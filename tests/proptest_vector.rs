use decimal_vectors::{Decimal, Vector, VectorError};
use proptest::prelude::*;
use rust_decimal::prelude::ToPrimitive;

fn same_length_pair(
    range: std::ops::Range<f64>,
) -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1usize..12).prop_flat_map(move |n| {
        (
            prop::collection::vec(range.clone(), n),
            prop::collection::vec(range.clone(), n),
        )
    })
}

// Seven significant digits scaled anywhere from 1e-20 to 1e20
fn wide_coordinate() -> impl Strategy<Value = String> {
    (-9_999_999i64..=9_999_999, -20i32..=20)
        .prop_map(|(mantissa, exponent)| format!("{}e{}", mantissa, exponent))
}

fn as_f64(v: &Vector) -> Vec<f64> {
    v.iter().map(|c| c.to_f64().unwrap()).collect()
}

// Property 1: construction keeps dimension and order
proptest! {
    #[test]
    fn prop_construction_preserves_coordinates(values in prop::collection::vec(-99_999i64..99_999, 1..32)) {
        let v = Vector::new(&values).unwrap();
        prop_assert_eq!(v.dimension(), values.len());
        let expected: Vec<Decimal> = values.iter().map(|&x| Decimal::from(x)).collect();
        let collected: Vec<Decimal> = v.iter().copied().collect();
        prop_assert_eq!(collected, expected);
    }
}

// Property 2: addition is commutative
proptest! {
    #[test]
    fn prop_addition_commutative((a, b) in same_length_pair(-100.0..100.0)) {
        let a = Vector::new(&a).unwrap();
        let b = Vector::new(&b).unwrap();
        prop_assert_eq!(a.plus(&b).unwrap(), b.plus(&a).unwrap());
    }
}

// Property 3: addition is associative on values that stay exact at six digits
proptest! {
    #[test]
    fn prop_addition_associative(
        values in (1usize..8).prop_flat_map(|n| (
            prop::collection::vec(-1000i64..1000, n),
            prop::collection::vec(-1000i64..1000, n),
            prop::collection::vec(-1000i64..1000, n),
        ))
    ) {
        let (a, b, c) = values;
        let a = Vector::new(&a).unwrap();
        let b = Vector::new(&b).unwrap();
        let c = Vector::new(&c).unwrap();
        let left = a.plus(&b).unwrap().plus(&c).unwrap();
        let right = a.plus(&b.plus(&c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }
}

// Property 4: v + (-1)v is the zero vector
proptest! {
    #[test]
    fn prop_additive_inverse(values in prop::collection::vec(-1000.0f64..1000.0, 1..16)) {
        let v = Vector::new(&values).unwrap();
        let sum = v.plus(&v.times_scalar(-1).unwrap()).unwrap();
        prop_assert!(sum.is_zero());
    }
}

// Property 5: mismatched dimensions are rejected by minus
proptest! {
    #[test]
    fn prop_minus_rejects_mismatch(n in 1usize..8, m in 1usize..8) {
        prop_assume!(n != m);
        let a = Vector::new(vec![1.0; n]).unwrap();
        let b = Vector::new(vec![1.0; m]).unwrap();
        let is_mismatch = matches!(a.minus(&b), Err(VectorError::DimensionMismatch { .. }));
        prop_assert!(is_mismatch);
    }
}

// Property 6: magnitude is non-negative and normalizing gives unit length
proptest! {
    #[test]
    fn prop_normalized_magnitude_is_one(values in prop::collection::vec(-100.0f64..100.0, 1..16)) {
        let v = Vector::new(&values).unwrap();
        prop_assert!(v.magnitude() >= Decimal::ZERO);
        prop_assume!(v.magnitude() > Decimal::new(1, 3));
        let unit = v.normalize().unwrap();
        let length = unit.magnitude().to_f64().unwrap();
        prop_assert!((length - 1.0).abs() < 1e-4, "normalized length was {}", length);
    }
}

// Property 7: the cross product is orthogonal to both operands
proptest! {
    #[test]
    fn prop_cross_product_orthogonal(
        a in prop::collection::vec(-10.0f64..10.0, 3),
        b in prop::collection::vec(-10.0f64..10.0, 3),
    ) {
        let a = Vector::new(&a).unwrap();
        let b = Vector::new(&b).unwrap();
        let cross = a.cross_product(&b).unwrap();
        let scale = a.magnitude().to_f64().unwrap() * b.magnitude().to_f64().unwrap();
        for operand in [&a, &b] {
            let dot = cross.dot_product(operand).unwrap().to_f64().unwrap().abs();
            let bound = 1e-3 * (1.0 + scale * operand.magnitude().to_f64().unwrap());
            prop_assert!(dot <= bound, "dot {} exceeds {}", dot, bound);
        }
    }
}

// Property 8: the cross product needs two 3-D operands
proptest! {
    #[test]
    fn prop_cross_product_rejects_other_dimensions(n in 1usize..7) {
        prop_assume!(n != 3);
        let a = Vector::new(vec![1.0; n]).unwrap();
        let b = Vector::new([1.0, 2.0, 3.0]).unwrap();
        let is_wrong_dimension = matches!(
            a.cross_product(&b),
            Err(VectorError::WrongDimensionForCrossProduct { .. })
        );
        prop_assert!(is_wrong_dimension);
    }
}

// Property 9: magnitude tracks the Euclidean length across the decimal range
proptest! {
    #[test]
    fn prop_magnitude_over_wide_range(values in prop::collection::vec(wide_coordinate(), 1..8)) {
        let v = Vector::new(&values).unwrap();
        let expected = as_f64(&v).iter().map(|x| x * x).sum::<f64>().sqrt();
        let magnitude = v.magnitude().to_f64().unwrap();
        if expected == 0.0 {
            prop_assert_eq!(magnitude, 0.0);
        } else {
            prop_assert!(magnitude > 0.0, "magnitude of {:?} was zero", values);
            let error = (magnitude - expected).abs() / expected;
            prop_assert!(error < 1e-4, "magnitude {} vs {}", magnitude, expected);
        }
    }
}

// Property 10: every non-zero vector normalizes to unit length
proptest! {
    #[test]
    fn prop_normalize_over_wide_range(values in prop::collection::vec(wide_coordinate(), 1..8)) {
        let v = Vector::new(&values).unwrap();
        prop_assume!(v.iter().any(|c| !c.is_zero()));
        let unit = v.normalize().unwrap();
        let length = unit.magnitude().to_f64().unwrap();
        prop_assert!((length - 1.0).abs() < 1e-4, "normalized length was {}", length);
    }
}

// Property 11: scaling either succeeds or reports overflow past the decimal range
proptest! {
    #[test]
    fn prop_times_scalar_over_wide_range(
        values in prop::collection::vec(wide_coordinate(), 1..8),
        scalar in wide_coordinate(),
    ) {
        let v = Vector::new(&values).unwrap();
        let factor: f64 = scalar.parse().unwrap();
        let limit = Decimal::MAX.to_f64().unwrap();
        let expected: Vec<f64> = as_f64(&v).iter().map(|x| x * factor).collect();
        prop_assume!(expected.iter().all(|e| (e.abs() / limit - 1.0).abs() > 1e-3));

        match v.times_scalar(scalar.as_str()) {
            Ok(scaled) => {
                prop_assert!(expected.iter().all(|e| e.abs() < limit));
                for (actual, expected) in as_f64(&scaled).iter().zip(&expected) {
                    let bound = 1e-4 * expected.abs() + 1e-26;
                    prop_assert!((actual - expected).abs() <= bound, "{} vs {}", actual, expected);
                }
            }
            Err(err) => {
                prop_assert_eq!(err, VectorError::Overflow);
                prop_assert!(expected.iter().any(|e| e.abs() > limit));
            }
        }
    }
}
