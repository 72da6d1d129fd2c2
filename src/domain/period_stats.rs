//! Summary statistics over the trades of one review period.

use super::tally::{first_max_by, Tally};
use super::trade::{Session, TradeRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Score assumed for trades that were never analyzed.
pub const DEFAULT_EXECUTION_SCORE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionTrend {
    Improving,
    Stable,
    #[serde(rename = "Needs attention")]
    NeedsAttention,
}

impl ExecutionTrend {
    pub fn from_average_score(avg: f64) -> Self {
        if avg >= 7.0 {
            ExecutionTrend::Improving
        } else if avg >= 5.0 {
            ExecutionTrend::Stable
        } else {
            ExecutionTrend::NeedsAttention
        }
    }
}

impl fmt::Display for ExecutionTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionTrend::Improving => write!(f, "Improving"),
            ExecutionTrend::Stable => write!(f, "Stable"),
            ExecutionTrend::NeedsAttention => write!(f, "Needs attention"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskGrade {
    A,
    B,
    C,
    D,
}

impl RiskGrade {
    pub fn from_average_risk(avg_risk_pct: f64) -> Self {
        if avg_risk_pct <= 1.0 {
            RiskGrade::A
        } else if avg_risk_pct <= 2.0 {
            RiskGrade::B
        } else if avg_risk_pct <= 3.0 {
            RiskGrade::C
        } else {
            RiskGrade::D
        }
    }

    pub fn needs_attention(&self) -> bool {
        matches!(self, RiskGrade::C | RiskGrade::D)
    }
}

impl fmt::Display for RiskGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskGrade::A => "A",
            RiskGrade::B => "B",
            RiskGrade::C => "C",
            RiskGrade::D => "D",
        };
        f.write_str(s)
    }
}

/// The winning group for a "best X" metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestEntry {
    pub name: String,
    /// Win rate in percent for strategies and sessions, summed pips for pairs.
    pub value: f64,
    pub label: String,
}

impl BestEntry {
    fn by_win_rate(name: &str, win_rate: f64) -> Self {
        Self {
            name: name.to_string(),
            value: win_rate,
            label: format!("{} ({}% WR)", name, win_rate.round()),
        }
    }

    /// Signed label: losing pairs read `-13.0 pips`, never `+-13.0`.
    fn by_pips(name: &str, pips: f64) -> Self {
        Self {
            name: name.to_string(),
            value: pips,
            label: format!("{} ({:+.1} pips)", name, pips),
        }
    }
}

impl fmt::Display for BestEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroupRecord {
    pub wins: usize,
    pub total: usize,
    pub pips: f64,
}

impl GroupRecord {
    pub fn add(&mut self, trade: &TradeRecord) {
        self.total += 1;
        self.pips += trade.pips;
        if trade.is_win() {
            self.wins += 1;
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.wins as f64 / self.total as f64 * 100.0
        }
    }
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodStats {
    pub trade_count: usize,
    /// Percent, one decimal.
    pub win_rate: f64,
    /// Two decimals.
    pub avg_rr: f64,
    /// One decimal.
    pub net_pips: f64,
    pub best_strategy: Option<BestEntry>,
    pub best_session: Option<BestEntry>,
    pub best_pair: Option<BestEntry>,
    pub avg_execution_score: f64,
    pub execution_trend: ExecutionTrend,
    pub avg_risk_percentage: f64,
    pub risk_grade: RiskGrade,
}

impl PeriodStats {
    /// Aggregates a non-empty trade list. Groups are visited in the order their
    /// key first appears in `trades`.
    pub fn compute(trades: &[TradeRecord]) -> Self {
        let n = trades.len().max(1) as f64;

        let wins = trades.iter().filter(|t| t.is_win()).count();
        let win_rate = round_to(wins as f64 / n * 100.0, 1);
        let avg_rr = round_to(trades.iter().map(|t| t.rr_ratio).sum::<f64>() / n, 2);
        let net_pips = round_to(trades.iter().map(|t| t.pips).sum::<f64>(), 1);

        let mut strategies: Tally<String, GroupRecord> = Tally::new();
        let mut sessions: Tally<Session, GroupRecord> = Tally::new();
        let mut pairs: Tally<String, f64> = Tally::new();
        for trade in trades {
            strategies.entry(trade.strategy_name.clone()).add(trade);
            sessions.entry(trade.session).add(trade);
            *pairs.entry(trade.currency_pair.clone()) += trade.pips;
        }

        let best_strategy = first_max_by(&strategies, 0.0, GroupRecord::win_rate)
            .map(|(name, wr)| BestEntry::by_win_rate(name, wr));
        let best_session = first_max_by(&sessions, 0.0, GroupRecord::win_rate)
            .map(|(session, wr)| BestEntry::by_win_rate(session.as_str(), wr));
        let best_pair = first_max_by(&pairs, f64::NEG_INFINITY, |pips| *pips)
            .map(|(pair, pips)| BestEntry::by_pips(pair, pips));

        let avg_execution_score = trades
            .iter()
            .map(|t| {
                t.stored_score()
                    .map(f64::from)
                    .unwrap_or(DEFAULT_EXECUTION_SCORE)
            })
            .sum::<f64>()
            / n;
        let avg_risk_percentage = trades.iter().map(|t| t.risk_percentage).sum::<f64>() / n;

        PeriodStats {
            trade_count: trades.len(),
            win_rate,
            avg_rr,
            net_pips,
            best_strategy,
            best_session,
            best_pair,
            avg_execution_score,
            execution_trend: ExecutionTrend::from_average_score(avg_execution_score),
            avg_risk_percentage,
            risk_grade: RiskGrade::from_average_risk(avg_risk_percentage),
        }
    }
}
