//! LMSR price of the first outcome.
//!
//! For two and three outcomes the price is the softmax share of outcome 1:
//!
//! ```text
//! price = exp(q1/b) / Σ exp(qᵢ/b)
//! ```
//!
//! The batch form for N outcomes is different. It prices with a linear
//! ratio, `(q1/b) / Σ (qᵢ/b)`, and does not agree with the exponential forms
//! on the same inputs. Callers relying on LMSR semantics for more than
//! three outcomes should not use [`price_batch`].
//!
//! # Example
//!
//! ```
//! use lmsr::domain::price::price_with_liquidity;
//! use rust_decimal::Decimal;
//! use rust_decimal_macros::dec;
//!
//! let price: Decimal = price_with_liquidity(100, 100, 50).unwrap();
//! assert_eq!(price, dec!(0.5));
//! ```

use super::error::{PricingError, PricingResult};
use super::fixed::{self, FixedPoint};
use super::liquidity::{average_liquidity_batch, LiquidityPolicy, MIN_BATCH_LEN};
use super::{Liquidity, Quantity};

/// Minimum number of quantities accepted by [`price_triple`].
pub const TRIPLE_LEN: usize = 3;

/// Price of outcome 1 in a two-outcome market with an explicit `b`.
pub fn price_with_liquidity<F: FixedPoint>(
    q1: Quantity,
    q2: Quantity,
    liquidity: Liquidity,
) -> PricingResult<F> {
    exponential_share(&[q1, q2], liquidity)
}

/// Price of outcome 1 in a two-outcome market, `b` from the average policy.
pub fn price<F: FixedPoint>(q1: Quantity, q2: Quantity) -> PricingResult<F> {
    price_with_policy(LiquidityPolicy::Average, q1, q2)
}

/// Price of outcome 1 in a two-outcome market, `b` from `policy`.
pub fn price_with_policy<F: FixedPoint>(
    policy: LiquidityPolicy,
    q1: Quantity,
    q2: Quantity,
) -> PricingResult<F> {
    price_with_liquidity(q1, q2, policy.select_pair(q1, q2))
}

/// Price of outcome 1 among the first three quantities.
///
/// `b` is the average over the whole sequence, including any elements past
/// the third.
pub fn price_triple<F: FixedPoint>(quantities: &[Quantity]) -> PricingResult<F> {
    if quantities.len() < TRIPLE_LEN {
        return Err(PricingError::TooFewInputs {
            required: TRIPLE_LEN,
            actual: quantities.len(),
        });
    }
    let liquidity = average_liquidity_batch(quantities)?;
    exponential_share(&quantities[..TRIPLE_LEN], liquidity)
}

/// Linear-ratio price of outcome 1 across all quantities.
///
/// Computes `(q1/b) / Σ (qᵢ/b)` with `b` from the batch average. This is not
/// the exponential normalization used by [`price`] and [`price_triple`].
pub fn price_batch<F: FixedPoint>(quantities: &[Quantity]) -> PricingResult<F> {
    if quantities.len() < MIN_BATCH_LEN {
        return Err(PricingError::TooFewInputs {
            required: MIN_BATCH_LEN,
            actual: quantities.len(),
        });
    }
    let liquidity = average_liquidity_batch(quantities)?;
    let b = liquidity_fixed::<F>(liquidity)?;

    let mut sum = F::zero();
    let mut first = F::zero();
    for (index, &quantity) in quantities.iter().enumerate() {
        let term = fixed::div(fixed::from_integer(quantity)?, b)?;
        if index == 0 {
            first = term;
        }
        sum = fixed::add(sum, term)?;
    }

    let price = fixed::div(first, sum)?;
    tracing::trace!(outcomes = quantities.len(), liquidity, %price, "Priced batch");
    Ok(price)
}

/// `exp(q₀/b) / Σ exp(qᵢ/b)` over `quantities`.
fn exponential_share<F: FixedPoint>(
    quantities: &[Quantity],
    liquidity: Liquidity,
) -> PricingResult<F> {
    let b = liquidity_fixed::<F>(liquidity)?;

    let mut denominator = F::zero();
    let mut numerator = F::zero();
    for (index, &quantity) in quantities.iter().enumerate() {
        let weight = fixed::exp(fixed::div(fixed::from_integer(quantity)?, b)?)?;
        if index == 0 {
            numerator = weight;
        }
        denominator = fixed::add(denominator, weight)?;
    }

    let price = fixed::div(numerator, denominator)?;
    tracing::trace!(outcomes = quantities.len(), liquidity, %price, "Priced outcome");
    Ok(price)
}

fn liquidity_fixed<F: FixedPoint>(liquidity: Liquidity) -> PricingResult<F> {
    if liquidity == 0 {
        return Err(PricingError::ZeroLiquidity);
    }
    fixed::from_integer(liquidity)
}
