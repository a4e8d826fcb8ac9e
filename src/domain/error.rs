//! Pricing errors for the LMSR engine.
//!
//! Every operation in [`crate::domain`] returns these errors instead of
//! substituting a fallback value. A failure aborts the whole calculation.
//!
//! # Examples
//!
//! ```
//! use lmsr::domain::error::PricingError;
//! use lmsr::domain::price::price_batch;
//! use rust_decimal::Decimal;
//!
//! let result = price_batch::<Decimal>(&[7]);
//! assert!(matches!(
//!     result,
//!     Err(PricingError::TooFewInputs { required: 2, actual: 1 })
//! ));
//! ```

use std::fmt;

use thiserror::Error;

/// Fixed-point operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FromInteger,
    Add,
    Sub,
    Div,
    Exp,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FromInteger => "from-integer",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Div => "div",
            Self::Exp => "exp",
        };
        f.write_str(name)
    }
}

/// Errors raised while selecting liquidity or computing prices and costs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// An input sequence is shorter than the operation requires.
    #[error("too few quantities: need at least {required}, got {actual}")]
    TooFewInputs {
        /// Minimum number of quantities for the operation.
        required: usize,
        /// Number of quantities supplied.
        actual: usize,
    },

    /// Initial and final states of a trade have different outcome counts.
    #[error("quantity states differ in length: initial has {initial}, final has {final_len}")]
    LengthMismatch {
        /// Length of the initial state.
        initial: usize,
        /// Length of the final state.
        final_len: usize,
    },

    /// A fixed-point operation left the representable range.
    #[error("arithmetic overflow in fixed-point {operation}")]
    ArithmeticOverflow {
        /// The operation that failed.
        operation: Operation,
    },

    /// The liquidity parameter was zero, explicitly or after derivation.
    #[error("liquidity parameter must be non-zero")]
    ZeroLiquidity,
}

/// Result alias for pricing operations.
pub type PricingResult<T> = std::result::Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let err = PricingError::ArithmeticOverflow {
            operation: Operation::Exp,
        };
        assert_eq!(err.to_string(), "arithmetic overflow in fixed-point exp");

        let err = PricingError::LengthMismatch {
            initial: 2,
            final_len: 3,
        };
        assert_eq!(
            err.to_string(),
            "quantity states differ in length: initial has 2, final has 3"
        );
    }
}
