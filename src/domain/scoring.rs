//! Execution quality score and risk assessment for a single trade.

use super::emotion::has_negative_emotions;
use super::feedback::RiskAssessment;
use super::heuristics::Heuristics;
use super::trade::{Outcome, TradeRecord};

pub const BASE_SCORE: f64 = 5.0;
pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;

fn rr_points(rr: f64) -> f64 {
    if rr >= 3.0 {
        2.0
    } else if rr >= 2.0 {
        1.0
    } else if rr < 1.0 {
        -1.0
    } else {
        0.0
    }
}

fn risk_points(risk_pct: f64) -> f64 {
    if risk_pct <= 1.0 {
        1.0
    } else if risk_pct > 3.0 {
        -2.0
    } else if risk_pct > 2.0 {
        -1.0
    } else {
        0.0
    }
}

fn outcome_points(trade: &TradeRecord, heuristics: &Heuristics) -> f64 {
    match trade.outcome {
        Outcome::Win if trade.pips > heuristics.big_win_pips => 2.0,
        Outcome::Win => 1.0,
        Outcome::Loss if trade.pips.abs() > heuristics.big_loss_pips => -1.0,
        _ => 0.0,
    }
}

fn stop_discipline_points(trade: &TradeRecord) -> f64 {
    let distance = (trade.entry_price - trade.stop_loss).abs();
    if distance > 0.0 && trade.stop_loss != trade.entry_price {
        1.0
    } else {
        0.0
    }
}

/// Additive score from a base of 5, rounded and clamped to `1..=10`.
pub fn execution_score(trade: &TradeRecord, heuristics: &Heuristics) -> u8 {
    let mut score = BASE_SCORE;
    score += rr_points(trade.rr_ratio);
    score += risk_points(trade.risk_percentage);
    score += outcome_points(trade, heuristics);
    score += stop_discipline_points(trade);
    if has_negative_emotions(trade) {
        score -= 2.0;
    }

    score.round().clamp(MIN_SCORE as f64, MAX_SCORE as f64) as u8
}

/// Grades risk handling from the score plus raw risk and reward:risk.
///
/// `Dangerous` is the fallback when no other grade applies; with finite inputs
/// the `Poor` branch already covers every remaining case.
pub fn assess_risk(trade: &TradeRecord, score: u8) -> RiskAssessment {
    let risk = trade.risk_percentage;
    let rr = trade.rr_ratio;

    if score >= 8 && risk <= 1.0 && rr >= 2.0 {
        RiskAssessment::Excellent
    } else if score >= 6 && risk <= 2.0 {
        RiskAssessment::Good
    } else if risk <= 3.0 && rr >= 1.0 {
        RiskAssessment::Acceptable
    } else if risk > 3.0 || rr < 1.0 {
        RiskAssessment::Poor
    } else {
        RiskAssessment::Dangerous
    }
}
