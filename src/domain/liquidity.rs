//! Liquidity parameter selection.
//!
//! The liquidity parameter `b` sets how sharply prices respond to a quantity
//! imbalance: a larger `b` flattens the curve, a smaller one sharpens it.
//! When a pricing call does not receive `b` it derives one with the
//! average policy.
//!
//! Selectors never reject a zero result. Pricing calls check for it and fail
//! with [`PricingError::ZeroLiquidity`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::{PricingError, PricingResult};
use super::{Liquidity, Quantity};

/// Hard-coded liquidity used by [`LiquidityPolicy::Fixed`].
///
/// Not recommended for general use: exponentials of `q / 10` leave the
/// fixed-point range once quantities reach the low hundreds.
pub const FIXED_LIQUIDITY: Liquidity = 10;

/// Minimum number of quantities accepted by the batch selectors.
pub const MIN_BATCH_LEN: usize = 2;

/// Return the fixed liquidity constant.
#[must_use]
pub const fn fixed_liquidity() -> Liquidity {
    FIXED_LIQUIDITY
}

/// Larger of two quantities.
#[must_use]
pub fn max_liquidity(q1: Quantity, q2: Quantity) -> Liquidity {
    q1.max(q2)
}

/// Largest quantity in a batch.
pub fn max_liquidity_batch(quantities: &[Quantity]) -> PricingResult<Liquidity> {
    ensure_batch(quantities)?;
    quantities
        .iter()
        .copied()
        .max()
        .ok_or(PricingError::TooFewInputs {
            required: MIN_BATCH_LEN,
            actual: 0,
        })
}

/// Floor of the arithmetic mean of two quantities.
#[must_use]
pub fn average_liquidity(q1: Quantity, q2: Quantity) -> Liquidity {
    mean(&[q1, q2])
}

/// Floor of the arithmetic mean of a batch.
pub fn average_liquidity_batch(quantities: &[Quantity]) -> PricingResult<Liquidity> {
    ensure_batch(quantities)?;
    Ok(mean(quantities))
}

fn ensure_batch(quantities: &[Quantity]) -> PricingResult<()> {
    if quantities.len() < MIN_BATCH_LEN {
        return Err(PricingError::TooFewInputs {
            required: MIN_BATCH_LEN,
            actual: quantities.len(),
        });
    }
    Ok(())
}

// Accumulates in u128 so the sum of any u64 slice fits; the mean never
// exceeds the largest element, so narrowing back is lossless.
fn mean(quantities: &[Quantity]) -> Liquidity {
    let sum: u128 = quantities.iter().map(|&q| u128::from(q)).sum();
    (sum / quantities.len() as u128) as Liquidity
}

/// Strategy for deriving `b` from quantities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiquidityPolicy {
    /// Use [`FIXED_LIQUIDITY`] regardless of the quantities.
    Fixed,
    /// Use the largest quantity.
    Max,
    /// Use the floor of the mean quantity.
    #[default]
    Average,
}

impl LiquidityPolicy {
    /// Derive `b` for a pair of quantities.
    #[must_use]
    pub fn select_pair(self, q1: Quantity, q2: Quantity) -> Liquidity {
        match self {
            Self::Fixed => fixed_liquidity(),
            Self::Max => max_liquidity(q1, q2),
            Self::Average => average_liquidity(q1, q2),
        }
    }

    /// Derive `b` for a batch of quantities.
    ///
    /// `Fixed` performs no length validation.
    pub fn select(self, quantities: &[Quantity]) -> PricingResult<Liquidity> {
        let liquidity = match self {
            Self::Fixed => fixed_liquidity(),
            Self::Max => max_liquidity_batch(quantities)?,
            Self::Average => average_liquidity_batch(quantities)?,
        };
        tracing::debug!(
            policy = %self,
            outcomes = quantities.len(),
            liquidity,
            "Selected liquidity"
        );
        Ok(liquidity)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Max => "max",
            Self::Average => "average",
        }
    }
}

impl fmt::Display for LiquidityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known [`LiquidityPolicy`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown liquidity policy '{0}' (expected fixed, max, or average)")]
pub struct UnknownPolicy(pub String);

impl FromStr for LiquidityPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "max" => Ok(Self::Max),
            "average" | "avg" => Ok(Self::Average),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}
