//! Handler for the `trade-cost` command.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{output, pair, reject_liquidity, Mode, TradeCostArgs};
use crate::config::Config;
use crate::domain::{
    trade_cost_batch, trade_cost_triple, trade_cost_with_liquidity, trade_cost_with_policy,
    Liquidity, Quantity,
};
use crate::error::Result;

/// Result of a `trade-cost` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeQuote {
    pub mode: Mode,
    pub initial: Vec<Quantity>,
    #[serde(rename = "final")]
    pub final_quantities: Vec<Quantity>,
    /// Shared liquidity, present only when given explicitly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquidity: Option<Liquidity>,
    pub cost: Decimal,
}

/// Compute the trade quote for `args` without printing it.
pub fn quote(args: &TradeCostArgs, config: &Config) -> Result<TradeQuote> {
    reject_liquidity(args.mode, args.liquidity)?;

    let cost: Decimal = match args.mode {
        Mode::Pair => {
            let (q1_initial, q2_initial) = pair(&args.initial)?;
            let (q1_final, q2_final) = pair(&args.final_quantities)?;
            match args.liquidity {
                Some(liquidity) => trade_cost_with_liquidity(
                    q1_initial, q2_initial, q1_final, q2_final, liquidity,
                )?,
                None => trade_cost_with_policy(
                    config.pricing.liquidity_policy,
                    q1_initial,
                    q2_initial,
                    q1_final,
                    q2_final,
                )?,
            }
        }
        Mode::Triple => trade_cost_triple(&args.initial, &args.final_quantities)?,
        Mode::Batch => trade_cost_batch(&args.initial, &args.final_quantities)?,
    };

    Ok(TradeQuote {
        mode: args.mode,
        initial: args.initial.clone(),
        final_quantities: args.final_quantities.clone(),
        liquidity: args.liquidity,
        cost: cost.normalize(),
    })
}

pub fn execute(args: &TradeCostArgs, config: &Config, json: bool) -> Result<()> {
    let quote = quote(args, config)?;
    tracing::info!(mode = %quote.mode, cost = %quote.cost, "Computed trade cost");

    if json {
        return output::json(&quote);
    }
    output::key_value("mode", quote.mode);
    output::key_value("initial", output::quantities(&quote.initial));
    output::key_value("final", output::quantities(&quote.final_quantities));
    match quote.liquidity {
        Some(liquidity) => output::key_value("liquidity", liquidity),
        None => output::key_value("liquidity", "derived per state"),
    }
    output::key_value("cost", quote.cost);
    Ok(())
}
