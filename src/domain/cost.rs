//! Cost of moving between two quantity states.
//!
//! A trade cost is `price(final) - price(initial)`. Positive means the
//! trader pays, negative means the trader is credited. When `b` is not given
//! it is derived separately for each state, since the natural scale of the
//! market shifts once the trade lands.

use super::error::{PricingError, PricingResult};
use super::fixed::{self, FixedPoint};
use super::liquidity::{LiquidityPolicy, MIN_BATCH_LEN};
use super::price::{
    price_batch, price_triple, price_with_liquidity, price_with_policy, TRIPLE_LEN,
};
use super::{Liquidity, Quantity};

/// Trade cost with one `b` shared by both states.
pub fn trade_cost_with_liquidity<F: FixedPoint>(
    q1_initial: Quantity,
    q2_initial: Quantity,
    q1_final: Quantity,
    q2_final: Quantity,
    liquidity: Liquidity,
) -> PricingResult<F> {
    let before = price_with_liquidity(q1_initial, q2_initial, liquidity)?;
    let after = price_with_liquidity(q1_final, q2_final, liquidity)?;
    delta(before, after)
}

/// Trade cost with `b` averaged independently for each state.
pub fn trade_cost<F: FixedPoint>(
    q1_initial: Quantity,
    q2_initial: Quantity,
    q1_final: Quantity,
    q2_final: Quantity,
) -> PricingResult<F> {
    trade_cost_with_policy(
        LiquidityPolicy::Average,
        q1_initial,
        q2_initial,
        q1_final,
        q2_final,
    )
}

/// Trade cost with `b` derived by `policy` independently for each state.
pub fn trade_cost_with_policy<F: FixedPoint>(
    policy: LiquidityPolicy,
    q1_initial: Quantity,
    q2_initial: Quantity,
    q1_final: Quantity,
    q2_final: Quantity,
) -> PricingResult<F> {
    let before = price_with_policy(policy, q1_initial, q2_initial)?;
    let after = price_with_policy(policy, q1_final, q2_final)?;
    delta(before, after)
}

/// Trade cost through [`price_triple`].
pub fn trade_cost_triple<F: FixedPoint>(
    initial: &[Quantity],
    final_quantities: &[Quantity],
) -> PricingResult<F> {
    ensure_states(initial, final_quantities, TRIPLE_LEN)?;
    let before = price_triple(initial)?;
    let after = price_triple(final_quantities)?;
    delta(before, after)
}

/// Trade cost through the linear-ratio [`price_batch`].
pub fn trade_cost_batch<F: FixedPoint>(
    initial: &[Quantity],
    final_quantities: &[Quantity],
) -> PricingResult<F> {
    ensure_states(initial, final_quantities, MIN_BATCH_LEN)?;
    let before = price_batch(initial)?;
    let after = price_batch(final_quantities)?;
    delta(before, after)
}

fn ensure_states(
    initial: &[Quantity],
    final_quantities: &[Quantity],
    required: usize,
) -> PricingResult<()> {
    for state in [initial, final_quantities] {
        if state.len() < required {
            return Err(PricingError::TooFewInputs {
                required,
                actual: state.len(),
            });
        }
    }
    if initial.len() != final_quantities.len() {
        return Err(PricingError::LengthMismatch {
            initial: initial.len(),
            final_len: final_quantities.len(),
        });
    }
    Ok(())
}

fn delta<F: FixedPoint>(before: F, after: F) -> PricingResult<F> {
    let cost = fixed::sub(after, before)?;
    tracing::trace!(%before, %after, %cost, "Computed trade cost");
    Ok(cost)
}
