//! Handler for the `price` command.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{output, pair, reject_liquidity, Mode, PriceArgs};
use crate::config::Config;
use crate::domain::{
    average_liquidity_batch, price_batch, price_triple, price_with_liquidity, price_with_policy,
    Liquidity, Quantity,
};
use crate::error::Result;

/// Result of a `price` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub mode: Mode,
    pub quantities: Vec<Quantity>,
    pub liquidity: Liquidity,
    pub price: Decimal,
}

/// Compute the quote for `args` without printing it.
pub fn quote(args: &PriceArgs, config: &Config) -> Result<Quote> {
    reject_liquidity(args.mode, args.liquidity)?;

    let (liquidity, price): (Liquidity, Decimal) = match args.mode {
        Mode::Pair => {
            let (q1, q2) = pair(&args.quantities)?;
            match args.liquidity {
                Some(liquidity) => (liquidity, price_with_liquidity(q1, q2, liquidity)?),
                None => {
                    let policy = config.pricing.liquidity_policy;
                    (policy.select_pair(q1, q2), price_with_policy(policy, q1, q2)?)
                }
            }
        }
        Mode::Triple => {
            let price = price_triple(&args.quantities)?;
            (average_liquidity_batch(&args.quantities)?, price)
        }
        Mode::Batch => {
            let price = price_batch(&args.quantities)?;
            (average_liquidity_batch(&args.quantities)?, price)
        }
    };

    Ok(Quote {
        mode: args.mode,
        quantities: args.quantities.clone(),
        liquidity,
        price: price.normalize(),
    })
}

pub fn execute(args: &PriceArgs, config: &Config, json: bool) -> Result<()> {
    let quote = quote(args, config)?;
    tracing::info!(mode = ?quote.mode, liquidity = quote.liquidity, price = %quote.price, "Priced");

    if json {
        return output::json(&quote);
    }
    output::key_value("mode", quote.mode);
    output::key_value("quantities", output::quantities(&quote.quantities));
    output::key_value("liquidity", quote.liquidity);
    output::key_value("price", quote.price);
    Ok(())
}
