//! Handler for the `liquidity` command.

use serde::Serialize;

use super::{output, LiquidityArgs};
use crate::config::Config;
use crate::domain::{Liquidity, LiquidityPolicy, Quantity};
use crate::error::Result;

/// Result of a `liquidity` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiquidityQuote {
    pub policy: LiquidityPolicy,
    pub quantities: Vec<Quantity>,
    pub liquidity: Liquidity,
}

pub fn quote(args: &LiquidityArgs, config: &Config) -> Result<LiquidityQuote> {
    let policy = args.policy.unwrap_or(config.pricing.liquidity_policy);
    let liquidity = policy.select(&args.quantities)?;
    Ok(LiquidityQuote {
        policy,
        quantities: args.quantities.clone(),
        liquidity,
    })
}

pub fn execute(args: &LiquidityArgs, config: &Config, json: bool) -> Result<()> {
    let quote = quote(args, config)?;

    if json {
        return output::json(&quote);
    }
    output::key_value("policy", quote.policy);
    output::key_value("quantities", output::quantities(&quote.quantities));
    output::key_value("liquidity", quote.liquidity);
    Ok(())
}
