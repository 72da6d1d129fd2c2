#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tradelens::domain::error::TradelensError;
use tradelens::domain::feedback::{AnalysisFeedback, EmotionalState, RiskAssessment};
use tradelens::domain::trade::{most_recent_first, Direction, Outcome, Session, TradeRecord};
use tradelens::ports::journal_port::JournalPort;

pub struct MockJournalPort {
    pub trades: Vec<TradeRecord>,
    pub error: Option<String>,
}

impl MockJournalPort {
    /// Trades in logging order; `load_trades` returns them most recent first.
    pub fn new(trades: Vec<TradeRecord>) -> Self {
        Self {
            trades,
            error: None,
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            trades: Vec::new(),
            error: Some(reason.to_string()),
        }
    }
}

impl JournalPort for MockJournalPort {
    fn load_trades(&self) -> Result<Vec<TradeRecord>, TradelensError> {
        if let Some(reason) = &self.error {
            return Err(TradelensError::JournalRead {
                reason: reason.clone(),
            });
        }
        Ok(most_recent_first(self.trades.clone()))
    }

    fn describe(&self) -> String {
        "mock journal".to_string()
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn analyzed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 10, 18, 0, 0).unwrap()
}

/// A disciplined 3R winner on 2024-06-03.
pub fn make_trade() -> TradeRecord {
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

pub fn make_loss(day: NaiveDate, pips: f64) -> TradeRecord {
    TradeRecord {
        date: day,
        outcome: Outcome::Loss,
        pips,
        ..make_trade()
    }
}

pub fn make_win(day: NaiveDate, pips: f64) -> TradeRecord {
    TradeRecord {
        date: day,
        pips,
        ..make_trade()
    }
}

pub fn make_feedback(score: u8, mistakes: &[&str], state: EmotionalState) -> AnalysisFeedback {
    AnalysisFeedback {
        execution_score: score,
        strengths: vec!["Trade logged for analysis".into()],
        mistakes: mistakes.iter().map(|m| m.to_string()).collect(),
        suggestion: "Keep journaling".into(),
        patterns: vec![],
        risk_assessment: RiskAssessment::Acceptable,
        emotional_state: state,
        analyzed_at: analyzed_at(),
    }
}

pub const JOURNAL_HEADER: &str = "date,session,currency_pair,timeframe,direction,entry_price,stop_loss,take_profit,lot_size,risk_percentage,rr_ratio,strategy_name,outcome,pips,notes,emotions_before,emotions_during,emotions_after";

pub fn write_journal(dir: &std::path::Path, rows: &[&str]) -> std::path::PathBuf {
    let path = dir.join("trades.csv");
    let mut content = String::from(JOURNAL_HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    std::fs::write(&path, content).unwrap();
    path
}
