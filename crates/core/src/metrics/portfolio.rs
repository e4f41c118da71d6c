//! Portfolio valuation and per-holding gain/loss.

use rust_decimal::prelude::ToPrimitive;

use super::metrics_model::{HoldingValue, InvestmentGainLoss};
use crate::investments::Investment;

/// Market value per holding, one entry per investment, input order preserved.
///
/// Percent-of-portfolio is left to the presentation layer; the values sum
/// to total portfolio value.
pub fn portfolio_values(investments: &[Investment]) -> Vec<HoldingValue> {
    investments
        .iter()
        .map(|investment| HoldingValue {
            symbol: investment.symbol.clone(),
            market_value: investment.market_value(),
        })
        .collect()
}

/// Unrealized gain/loss of a holding against its cost basis.
///
/// The percentage is `gain_loss / cost_basis * 100` as `f64`; a zero cost
/// basis yields `inf`/`NaN` for the caller to guard.
pub fn investment_gain_loss(investment: &Investment) -> InvestmentGainLoss {
    let gain_loss = investment.shares * (investment.current_price - investment.purchase_price);
    let gain_loss_percentage = to_f64(gain_loss) / to_f64(investment.cost_basis()) * 100.0;

    InvestmentGainLoss {
        gain_loss,
        gain_loss_percentage,
    }
}

pub(super) fn to_f64(value: rust_decimal::Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
