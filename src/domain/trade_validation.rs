//! Record-level checks applied when a journal is loaded.
//!
//! The analysis engine assumes validated input; these rules reject rows a
//! journal form would never have accepted.

use super::error::TradelensError;
use super::trade::TradeRecord;

pub const MIN_LOT_SIZE: f64 = 0.01;
pub const MIN_RISK_PCT: f64 = 0.1;
pub const MAX_RISK_PCT: f64 = 10.0;

/// Reward-to-risk ratio implied by the entry, stop and target prices.
///
/// Returns `None` when the stop sits on the entry price.
pub fn calculate_rr(entry: f64, stop: f64, take_profit: f64) -> Option<f64> {
    let risk = (entry - stop).abs();
    if risk == 0.0 || !risk.is_finite() {
        return None;
    }
    let reward = (take_profit - entry).abs();
    Some(reward / risk)
}

fn invalid(row: usize, field: &str, reason: &str) -> TradelensError {
    TradelensError::InvalidTrade {
        row,
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

fn require_positive(row: usize, field: &str, value: f64) -> Result<(), TradelensError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(row, field, "must be a positive number"))
    }
}

fn require_text(row: usize, field: &str, value: &str) -> Result<(), TradelensError> {
    if value.trim().is_empty() {
        Err(invalid(row, field, "must not be empty"))
    } else {
        Ok(())
    }
}

/// Validates one record; `row` is the 1-based data row used in error messages.
pub fn validate_trade(trade: &TradeRecord, row: usize) -> Result<(), TradelensError> {
    require_text(row, "currency_pair", &trade.currency_pair)?;
    require_text(row, "timeframe", &trade.timeframe)?;
    require_text(row, "strategy_name", &trade.strategy_name)?;

    require_positive(row, "entry_price", trade.entry_price)?;
    require_positive(row, "stop_loss", trade.stop_loss)?;
    require_positive(row, "take_profit", trade.take_profit)?;
    if trade.stop_loss == trade.entry_price {
        return Err(invalid(row, "stop_loss", "must differ from entry_price"));
    }

    if trade.lot_size.is_nan() || trade.lot_size < MIN_LOT_SIZE {
        return Err(invalid(row, "lot_size", "must be at least 0.01"));
    }
    if !(MIN_RISK_PCT..=MAX_RISK_PCT).contains(&trade.risk_percentage) {
        return Err(invalid(row, "risk_percentage", "must be between 0.1 and 10"));
    }
    require_positive(row, "rr_ratio", trade.rr_ratio)?;
    if !trade.pips.is_finite() {
        return Err(invalid(row, "pips", "must be a number"));
    }
    Ok(())
}
