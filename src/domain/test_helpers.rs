//! Shared fixtures for domain unit tests.

use super::feedback::{AnalysisFeedback, EmotionalState, RiskAssessment};
use super::trade::{Direction, Outcome, Session, TradeRecord};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 3, 9, 30, 0).unwrap()
}

/// A clean winning trade: 3R, 1% risk, +30 pips, no emotion text.
pub fn trade() -> TradeRecord {
    TradeRecord {
        date: date(2024, 6, 3),
        session: Session::London,
        currency_pair: "EURUSD".into(),
        timeframe: "H1".into(),
        direction: Direction::Buy,
        entry_price: 1.1000,
        stop_loss: 1.0950,
        take_profit: 1.1150,
        lot_size: 0.1,
        risk_percentage: 1.0,
        rr_ratio: 3.0,
        strategy_name: "Breakout".into(),
        outcome: Outcome::Win,
        pips: 30.0,
        notes: String::new(),
        emotions_before: String::new(),
        emotions_during: String::new(),
        emotions_after: String::new(),
        ai_feedback: None,
    }
}

pub fn losing_trade(pips: f64) -> TradeRecord {
    TradeRecord {
        outcome: Outcome::Loss,
        pips,
        ..trade()
    }
}

pub fn feedback(score: u8, mistakes: &[&str], state: EmotionalState) -> AnalysisFeedback {
    AnalysisFeedback {
        execution_score: score,
        strengths: vec!["Trade logged for analysis".into()],
        mistakes: mistakes.iter().map(|m| m.to_string()).collect(),
        suggestion: String::new(),
        patterns: vec![],
        risk_assessment: RiskAssessment::Acceptable,
        emotional_state: state,
        analyzed_at: fixed_time(),
    }
}
