//! Qualitative strengths and mistakes extracted from one trade.

use super::emotion::{
    has_fomo_indicators, has_negative_emotions, has_revenge_emotions, panicked_during,
    positive_mindset_before, self_identified_impulsive,
};
use super::heuristics::Heuristics;
use super::trade::{Outcome, TradeRecord};

pub const STRENGTH_GOOD_RR: &str = "Good risk-to-reward ratio";
pub const STRENGTH_CONSERVATIVE_SIZING: &str = "Conservative position sizing";
pub const STRENGTH_STRONG_TARGET: &str = "Strong profit target execution";
pub const STRENGTH_EMOTIONAL_DISCIPLINE: &str = "Maintained emotional discipline";
pub const STRENGTH_SL_TP: &str = "Proper risk management with SL/TP";
pub const STRENGTH_POSITIVE_MINDSET: &str = "Entered trade with positive mindset";
pub const STRENGTH_FALLBACK: &str = "Trade logged for analysis";

pub const MISTAKE_LOW_RR: &str =
    "Risk-to-reward ratio below 1:1 - risking more than potential gain";
pub const MISTAKE_REVENGE: &str = "Possible revenge trading detected from emotional state";
pub const MISTAKE_FOMO: &str = "FOMO (Fear of Missing Out) indicators present";
pub const MISTAKE_PANIC: &str = "Emotional panic during trade execution";
pub const MISTAKE_WIDE_STOP: &str = "Stop loss may have been too wide or not honored";
pub const MISTAKE_IMPULSIVE: &str = "Self-identified impulsive entry";

pub fn high_risk_mistake(risk_pct: f64) -> String {
    format!("High risk percentage ({risk_pct}%) - exceeds recommended 1-2%")
}

/// Every matching strength in a fixed order; never empty.
pub fn identify_strengths(trade: &TradeRecord, heuristics: &Heuristics) -> Vec<String> {
    let mut strengths = Vec::new();

    if trade.rr_ratio >= 2.0 {
        strengths.push(STRENGTH_GOOD_RR.to_string());
    }
    if trade.risk_percentage <= 1.0 {
        strengths.push(STRENGTH_CONSERVATIVE_SIZING.to_string());
    }
    if trade.outcome == Outcome::Win && trade.pips > heuristics.strong_target_pips {
        strengths.push(STRENGTH_STRONG_TARGET.to_string());
    }
    if !has_negative_emotions(trade) {
        strengths.push(STRENGTH_EMOTIONAL_DISCIPLINE.to_string());
    }
    if trade.stop_loss != 0.0 && trade.take_profit != 0.0 {
        strengths.push(STRENGTH_SL_TP.to_string());
    }
    if positive_mindset_before(trade) {
        strengths.push(STRENGTH_POSITIVE_MINDSET.to_string());
    }

    if strengths.is_empty() {
        strengths.push(STRENGTH_FALLBACK.to_string());
    }
    strengths
}

/// Every matching mistake in a fixed order; may be empty.
pub fn identify_mistakes(trade: &TradeRecord, heuristics: &Heuristics) -> Vec<String> {
    let mut mistakes = Vec::new();

    if trade.rr_ratio < 1.0 {
        mistakes.push(MISTAKE_LOW_RR.to_string());
    }
    if trade.risk_percentage > 2.0 {
        mistakes.push(high_risk_mistake(trade.risk_percentage));
    }
    if trade.outcome == Outcome::Loss && has_revenge_emotions(trade) {
        mistakes.push(MISTAKE_REVENGE.to_string());
    }
    if has_fomo_indicators(trade) {
        mistakes.push(MISTAKE_FOMO.to_string());
    }
    if panicked_during(trade) {
        mistakes.push(MISTAKE_PANIC.to_string());
    }
    if trade.outcome == Outcome::Loss
        && trade.pips.abs() > trade.rr_ratio * heuristics.stop_width_pips_per_rr
    {
        mistakes.push(MISTAKE_WIDE_STOP.to_string());
    }
    if self_identified_impulsive(trade) {
        mistakes.push(MISTAKE_IMPULSIVE.to_string());
    }

    mistakes
}
