//! Fixed-point arithmetic seam.
//!
//! The pricing engine never touches a concrete number type. It consumes the
//! [`FixedPoint`] capability, which reports failure instead of wrapping, and
//! converts each failure into [`PricingError::ArithmeticOverflow`] through the
//! checked helpers in this module.
//!
//! [`Decimal`] is the production backend. The `testkit` feature adds a
//! narrow-range backend and an `f64` reference backend.

use std::fmt;

use rust_decimal::{Decimal, MathematicalOps};

use super::error::{Operation, PricingError, PricingResult};

/// Signed fixed-point number with checked arithmetic.
///
/// Every method returns `None` when the result is not representable.
pub trait FixedPoint: Copy + PartialOrd + fmt::Debug + fmt::Display {
    /// Additive identity.
    fn zero() -> Self;

    /// Convert an unsigned integer.
    fn from_integer(value: u64) -> Option<Self>;

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Division. Division by zero returns `None`.
    fn checked_div(self, rhs: Self) -> Option<Self>;

    /// Natural exponential.
    fn checked_exp(self) -> Option<Self>;
}

impl FixedPoint for Decimal {
    fn zero() -> Self {
        Decimal::ZERO
    }

    fn from_integer(value: u64) -> Option<Self> {
        Some(Decimal::from(value))
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        Decimal::checked_add(self, rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Decimal::checked_sub(self, rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        Decimal::checked_div(self, rhs)
    }

    fn checked_exp(self) -> Option<Self> {
        MathematicalOps::checked_exp(&self)
    }
}

fn overflow(operation: Operation) -> PricingError {
    PricingError::ArithmeticOverflow { operation }
}

pub(crate) fn from_integer<F: FixedPoint>(value: u64) -> PricingResult<F> {
    F::from_integer(value).ok_or(overflow(Operation::FromInteger))
}

pub(crate) fn add<F: FixedPoint>(a: F, b: F) -> PricingResult<F> {
    a.checked_add(b).ok_or(overflow(Operation::Add))
}

pub(crate) fn sub<F: FixedPoint>(a: F, b: F) -> PricingResult<F> {
    a.checked_sub(b).ok_or(overflow(Operation::Sub))
}

pub(crate) fn div<F: FixedPoint>(a: F, b: F) -> PricingResult<F> {
    a.checked_div(b).ok_or(overflow(Operation::Div))
}

pub(crate) fn exp<F: FixedPoint>(x: F) -> PricingResult<F> {
    x.checked_exp().ok_or(overflow(Operation::Exp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn decimal_backend_operations() {
        let two: Decimal = from_integer(2).unwrap();
        let three: Decimal = from_integer(3).unwrap();

        assert_eq!(add(two, three).unwrap(), dec!(5));
        assert_eq!(sub(two, three).unwrap(), dec!(-1));
        assert_eq!(div(three, two).unwrap(), dec!(1.5));
        assert_eq!(exp(Decimal::ZERO).unwrap(), Decimal::ONE);
    }

    #[test]
    fn decimal_division_by_zero_is_reported() {
        let result = div(Decimal::ONE, Decimal::ZERO);
        assert_eq!(
            result,
            Err(PricingError::ArithmeticOverflow {
                operation: Operation::Div
            })
        );
    }

    #[test]
    fn decimal_exp_overflow_is_reported() {
        let result = exp(dec!(1000));
        assert_eq!(
            result,
            Err(PricingError::ArithmeticOverflow {
                operation: Operation::Exp
            })
        );
    }

    #[test]
    fn decimal_add_overflow_is_reported() {
        let result = add(Decimal::MAX, Decimal::ONE);
        assert_eq!(
            result,
            Err(PricingError::ArithmeticOverflow {
                operation: Operation::Add
            })
        );
    }
}
