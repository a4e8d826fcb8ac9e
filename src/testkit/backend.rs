//! Test-only fixed-point backends.

use std::fmt;

use rust_decimal::Decimal;

use crate::domain::FixedPoint;

/// Decimal confined to `[-LIMIT, LIMIT]`.
///
/// Models a fixed-point format with a small integer part so overflow paths
/// can be exercised with ordinary quantities.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Bounded(Decimal);

impl Bounded {
    pub const LIMIT: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

    #[must_use]
    pub fn value(self) -> Decimal {
        self.0
    }

    fn check(value: Decimal) -> Option<Self> {
        (value.abs() <= Self::LIMIT).then_some(Self(value))
    }
}

impl fmt::Display for Bounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FixedPoint for Bounded {
    fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    fn from_integer(value: u64) -> Option<Self> {
        Self::check(Decimal::from(value))
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        FixedPoint::checked_add(self.0, rhs.0).and_then(Self::check)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        FixedPoint::checked_sub(self.0, rhs.0).and_then(Self::check)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        FixedPoint::checked_div(self.0, rhs.0).and_then(Self::check)
    }

    fn checked_exp(self) -> Option<Self> {
        FixedPoint::checked_exp(self.0).and_then(Self::check)
    }
}

/// `f64` backend used as a numerical reference.
///
/// Non-finite results count as overflow.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Reference(pub f64);

impl Reference {
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    fn check(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self(value))
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FixedPoint for Reference {
    fn zero() -> Self {
        Self(0.0)
    }

    fn from_integer(value: u64) -> Option<Self> {
        Some(Self(value as f64))
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        Self::check(self.0 + rhs.0)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Self::check(self.0 - rhs.0)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        Self::check(self.0 / rhs.0)
    }

    fn checked_exp(self) -> Option<Self> {
        Self::check(self.0.exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn bounded_rejects_values_past_limit() {
        assert!(Bounded::from_integer(1000).is_some());
        assert!(Bounded::from_integer(1001).is_none());

        let big = Bounded::from_integer(600).unwrap();
        assert!(big.checked_add(big).is_none());
        assert_eq!(big.checked_sub(big).unwrap().value(), dec!(0));
    }

    #[test]
    fn reference_treats_infinity_as_overflow() {
        assert!(Reference(1000.0).checked_exp().is_none());
        assert!(Reference(1.0).checked_div(Reference(0.0)).is_none());
        assert!((Reference(1.0).checked_exp().unwrap().value() - std::f64::consts::E).abs() < 1e-12);
    }
}
