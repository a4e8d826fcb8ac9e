//! LMSR pricing engine.
//!
//! Stateless functions over caller-supplied quantities:
//!
//! - [`liquidity`] - Selection of the liquidity parameter `b`
//! - [`price`] - Price of the first outcome for 2, 3, or N outcomes
//! - [`cost`] - Signed cost of moving between two quantity states
//! - [`fixed`] - The fixed-point arithmetic capability all of the above consume
//! - [`error`] - Pricing error taxonomy

pub mod cost;
pub mod error;
pub mod fixed;
pub mod liquidity;
pub mod price;

/// Outstanding shares of one outcome.
pub type Quantity = u64;

/// Liquidity parameter `b`.
pub type Liquidity = u64;

pub use cost::{
    trade_cost, trade_cost_batch, trade_cost_triple, trade_cost_with_liquidity,
    trade_cost_with_policy,
};
pub use error::{Operation, PricingError, PricingResult};
pub use fixed::FixedPoint;
pub use liquidity::{
    average_liquidity, average_liquidity_batch, fixed_liquidity, max_liquidity,
    max_liquidity_batch, LiquidityPolicy, UnknownPolicy, FIXED_LIQUIDITY,
};
pub use price::{price, price_batch, price_triple, price_with_liquidity, price_with_policy};
