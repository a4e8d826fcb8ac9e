//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`backend`] - Alternative [`FixedPoint`](crate::domain::FixedPoint)
//!   backends: `Bounded` (narrow range, for overflow paths) and `Reference`
//!   (`f64`, for cross-checking the production backend).

pub mod backend;

pub use backend::{Bounded, Reference};
