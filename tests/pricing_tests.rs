use lmsr::domain::{
    average_liquidity, average_liquidity_batch, max_liquidity, max_liquidity_batch, price,
    price_batch, price_triple, price_with_liquidity, Operation, PricingError,
};
use lmsr::testkit::{Bounded, Reference};
use proptest::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn close(decimal: Decimal, reference: Reference, tolerance: f64) -> bool {
    let value = decimal.to_f64().unwrap_or(f64::NAN);
    (value - reference.value()).abs() < tolerance
}

#[test]
fn equal_quantities_with_explicit_liquidity_split_evenly() {
    let p: Decimal = price_with_liquidity(100, 100, 50).unwrap();
    assert_eq!(p, dec!(0.5));
}

#[test]
fn dominant_outcome_in_triple_approaches_one() {
    let p: Decimal = price_triple(&[100, 0, 0]).unwrap();
    assert!(p > dec!(0.9), "got {p}");
    assert!(p < Decimal::ONE, "got {p}");
}

#[test]
fn batch_selectors_need_two_quantities() {
    assert_eq!(
        average_liquidity_batch(&[]),
        Err(PricingError::TooFewInputs {
            required: 2,
            actual: 0
        })
    );
    assert_eq!(
        average_liquidity_batch(&[12]),
        Err(PricingError::TooFewInputs {
            required: 2,
            actual: 1
        })
    );
    assert!(max_liquidity_batch(&[12]).is_err());
}

#[test]
fn batch_and_triple_normalize_differently() {
    // Same inputs, two normalizations: softmax share vs linear share.
    let quantities = [40, 20, 20];
    let triple: Decimal = price_triple(&quantities).unwrap();
    let batch: Decimal = price_batch(&quantities).unwrap();

    // b = 26, linear share (40/26) / (80/26) ≈ 0.5
    assert!((batch - dec!(0.5)).abs() < dec!(0.0000000001), "got {batch}");
    // exp(40/26) / (exp(40/26) + 2 exp(20/26)) ≈ 0.5190
    assert!((triple - dec!(0.5190)).abs() < dec!(0.001), "got {triple}");
    assert!(triple > batch);
}

#[test]
fn decimal_backend_agrees_with_float_reference() {
    let cases = [(100, 100, 50), (120, 80, 100), (300, 0, 100), (0, 250, 60), (7, 3, 2)];
    for (q1, q2, b) in cases {
        let decimal: Decimal = price_with_liquidity(q1, q2, b).unwrap();
        let reference: Reference = price_with_liquidity(q1, q2, b).unwrap();
        assert!(
            close(decimal, reference, 1e-5),
            "({q1}, {q2}, {b}): decimal {decimal} vs reference {reference}"
        );
    }

    for quantities in [&[100, 0, 0][..], &[10, 20, 30, 40][..], &[5, 5, 9][..]] {
        let decimal: Decimal = price_triple(quantities).unwrap();
        let reference: Reference = price_triple(quantities).unwrap();
        assert!(close(decimal, reference, 1e-5), "{quantities:?}");

        let decimal: Decimal = price_batch(quantities).unwrap();
        let reference: Reference = price_batch(quantities).unwrap();
        assert!(close(decimal, reference, 1e-9), "{quantities:?}");
    }
}

#[test]
fn narrow_backend_reports_exponential_overflow() {
    // exp(20) is far past the bounded range.
    let result = price_with_liquidity::<Bounded>(20, 0, 1);
    assert_eq!(
        result,
        Err(PricingError::ArithmeticOverflow {
            operation: Operation::Exp
        })
    );
}

#[test]
fn narrow_backend_reports_denominator_overflow() {
    // Each exp(6.5) ≈ 665 fits; their sum does not.
    let result = price_with_liquidity::<Bounded>(13, 13, 2);
    assert_eq!(
        result,
        Err(PricingError::ArithmeticOverflow {
            operation: Operation::Add
        })
    );
}

#[test]
fn narrow_backend_reports_conversion_overflow() {
    let result = price_batch::<Bounded>(&[5_000, 1]);
    assert_eq!(
        result,
        Err(PricingError::ArithmeticOverflow {
            operation: Operation::FromInteger
        })
    );
}

#[test]
fn decimal_backend_overflows_instead_of_wrapping() {
    let result = price_with_liquidity::<Decimal>(5_000, 0, 1);
    assert!(matches!(
        result,
        Err(PricingError::ArithmeticOverflow { .. })
    ));
}

proptest! {
    #[test]
    fn equal_quantities_price_at_one_half(q in 1u64..1_000_000) {
        let p: Decimal = price(q, q).unwrap();
        prop_assert_eq!(p, dec!(0.5));
    }

    #[test]
    fn price_increases_with_first_quantity(q1 in 0u64..500, q2 in 0u64..500, b in 100u64..1_000) {
        let lower: Decimal = price_with_liquidity(q1, q2, b).unwrap();
        let higher: Decimal = price_with_liquidity(q1 + 1, q2, b).unwrap();
        prop_assert!(higher > lower, "{} !> {}", higher, lower);
    }

    #[test]
    fn exponential_prices_stay_inside_unit_interval(
        q1 in 0u64..500,
        q2 in 0u64..500,
        q3 in 0u64..500,
        b in 100u64..1_000,
    ) {
        let pair: Decimal = price_with_liquidity(q1, q2, b).unwrap();
        prop_assert!(pair > Decimal::ZERO && pair < Decimal::ONE);

        // Derived b must be non-zero and keep exponents small.
        let quantities = [q1 + 200, q2 + 200, q3 + 200];
        let triple: Decimal = price_triple(&quantities).unwrap();
        prop_assert!(triple > Decimal::ZERO && triple < Decimal::ONE);
    }

    #[test]
    fn pair_and_batch_averages_agree(a in any::<u64>(), b in any::<u64>()) {
        prop_assert_eq!(average_liquidity_batch(&[a, b]).unwrap(), average_liquidity(a, b));
        prop_assert_eq!(max_liquidity_batch(&[a, b]).unwrap(), max_liquidity(a, b));
    }
}
