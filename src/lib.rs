//! LMSR - Logarithmic Market Scoring Rule pricing engine.
//!
//! This crate prices outcomes and trades for an LMSR automated market maker
//! from the outstanding share counts of two or more outcomes. Every
//! calculation is a pure function: no state, no I/O, and no silent
//! wrap-around. Arithmetic runs on a pluggable fixed-point backend and any
//! overflow aborts the call with an error.
//!
//! # Architecture
//!
//! - **`domain::liquidity`** - Selection of the liquidity parameter `b`
//!   - fixed constant, max-based, and average-based policies
//! - **`domain::price`** - Price of the first outcome
//!   - exponential form for 2 and 3 outcomes
//!   - linear-ratio form for N outcomes (`price_batch`)
//! - **`domain::cost`** - Trade cost as the difference of two prices
//! - **`domain::fixed`** - The `FixedPoint` capability, implemented for
//!   `rust_decimal::Decimal`
//!
//! # Modules
//!
//! - [`domain`] - The pricing engine
//! - [`config`] - Configuration loading from TOML files
//! - [`cli`] - The `lmsr` command-line host
//! - [`error`] - Error types for the host layer
//!
//! # Features
//!
//! - `testkit` - Expose alternative fixed-point backends for tests
//!
//! # Example
//!
//! ```
//! use lmsr::domain::{price_triple, trade_cost};
//! use rust_decimal::Decimal;
//!
//! let p: Decimal = price_triple(&[100, 0, 0]).unwrap();
//! assert!(p < Decimal::ONE);
//!
//! let cost: Decimal = trade_cost(50, 50, 80, 50).unwrap();
//! assert!(cost > Decimal::ZERO);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
