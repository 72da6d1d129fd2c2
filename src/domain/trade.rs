//! Journal trade records as supplied by the collaborator layer.

use super::feedback::AnalysisFeedback;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Session {
    London,
    NY,
    Asia,
    Sydney,
}

impl Session {
    pub fn as_str(&self) -> &'static str {
        match self {
            Session::London => "London",
            Session::NY => "NY",
            Session::Asia => "Asia",
            Session::Sydney => "Sydney",
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Session {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "London" => Ok(Session::London),
            "NY" => Ok(Session::NY),
            "Asia" => Ok(Session::Asia),
            "Sydney" => Ok(Session::Sydney),
            other => Err(format!("unknown session '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Buy,
    Sell,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Buy => "Buy",
            Direction::Sell => "Sell",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Buy" => Ok(Direction::Buy),
            "Sell" => Ok(Direction::Sell),
            other => Err(format!("unknown direction '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    BE,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Loss => "Loss",
            Outcome::BE => "BE",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Win" => Ok(Outcome::Win),
            "Loss" => Ok(Outcome::Loss),
            "BE" => Ok(Outcome::BE),
            other => Err(format!("unknown outcome '{other}'")),
        }
    }
}

/// One logged trade. The engine treats it as read-only input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    pub date: NaiveDate,
    pub session: Session,
    pub currency_pair: String,
    pub timeframe: String,
    pub direction: Direction,
    pub entry_price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub lot_size: f64,
    pub risk_percentage: f64,
    pub rr_ratio: f64,
    pub strategy_name: String,
    pub outcome: Outcome,
    pub pips: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub emotions_before: String,
    #[serde(default)]
    pub emotions_during: String,
    #[serde(default)]
    pub emotions_after: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_feedback: Option<AnalysisFeedback>,
}

impl TradeRecord {
    pub fn is_win(&self) -> bool {
        self.outcome == Outcome::Win
    }

    pub fn is_loss(&self) -> bool {
        self.outcome == Outcome::Loss
    }

    /// Stored execution score, if this record has been analyzed before.
    pub fn stored_score(&self) -> Option<u8> {
        self.ai_feedback.as_ref().map(|f| f.execution_score)
    }
}

/// Orders a journal most-recent-first. Records sharing a date keep reverse
/// insertion order, so the later row counts as the more recent one.
pub fn most_recent_first(mut trades: Vec<TradeRecord>) -> Vec<TradeRecord> {
    trades.reverse();
    trades.sort_by(|a, b| b.date.cmp(&a.date));
    trades
}
