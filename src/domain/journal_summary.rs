//! Dashboard-level statistics over a whole journal, plus weekly trends.

use super::period_stats::{round_to, GroupRecord};
use super::tally::{first_max_by, Tally};
use super::trade::{Outcome, TradeRecord};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

pub const RECENT_TRADES: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPerformance {
    pub key: String,
    pub win_rate: f64,
    pub total_pips: f64,
    pub trades: usize,
}

impl GroupPerformance {
    fn from_record(key: String, record: &GroupRecord) -> Self {
        Self {
            key,
            win_rate: round_to(record.win_rate(), 1),
            total_pips: round_to(record.pips, 1),
            trades: record.total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalSummary {
    pub total_trades: usize,
    pub wins: usize,
    pub losses: usize,
    pub break_even: usize,
    pub win_rate: f64,
    pub loss_rate: f64,
    pub break_even_rate: f64,
    pub net_pips: f64,
    #[serde(rename = "avgRR")]
    pub avg_rr: f64,
    pub best_strategy: Option<String>,
    pub common_mistake: Option<String>,
    pub avg_execution_score: Option<f64>,
    pub recent_win_rate: f64,
    pub session_performance: Vec<GroupPerformance>,
    pub strategy_breakdown: Vec<GroupPerformance>,
}

impl JournalSummary {
    fn empty() -> Self {
        Self {
            total_trades: 0,
            wins: 0,
            losses: 0,
            break_even: 0,
            win_rate: 0.0,
            loss_rate: 0.0,
            break_even_rate: 0.0,
            net_pips: 0.0,
            avg_rr: 0.0,
            best_strategy: None,
            common_mistake: None,
            avg_execution_score: None,
            recent_win_rate: 0.0,
            session_performance: Vec::new(),
            strategy_breakdown: Vec::new(),
        }
    }
}

fn pct(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        round_to(part as f64 / total as f64 * 100.0, 1)
    }
}

/// Summarizes a most-recent-first journal.
pub fn summarize_journal(trades: &[TradeRecord]) -> JournalSummary {
    if trades.is_empty() {
        return JournalSummary::empty();
    }

    let total = trades.len();
    let count = |o: Outcome| trades.iter().filter(|t| t.outcome == o).count();
    let wins = count(Outcome::Win);
    let losses = count(Outcome::Loss);
    let break_even = count(Outcome::BE);

    let mut sessions: Tally<String, GroupRecord> = Tally::new();
    let mut strategies: Tally<String, GroupRecord> = Tally::new();
    let mut mistakes: Tally<String, usize> = Tally::new();
    let mut scores = Vec::new();
    for trade in trades {
        sessions.entry(trade.session.to_string()).add(trade);
        strategies.entry(trade.strategy_name.clone()).add(trade);
        if let Some(feedback) = &trade.ai_feedback {
            for mistake in &feedback.mistakes {
                mistakes.increment(mistake.clone());
            }
            scores.push(f64::from(feedback.execution_score));
        }
    }

    let best_strategy = first_max_by(&strategies, f64::NEG_INFINITY, GroupRecord::win_rate)
        .and_then(|(name, _)| strategies.get(name).map(|r| (name, r)))
        .map(|(name, record)| {
            format!(
                "{} ({}% WR, {} pips)",
                name,
                record.win_rate().round(),
                record.pips.round()
            )
        });

    let common_mistake = mistakes.top(1).into_iter().next().map(|(m, _)| m);

    let avg_execution_score = if scores.is_empty() {
        None
    } else {
        Some(round_to(scores.iter().sum::<f64>() / scores.len() as f64, 1))
    };

    let recent = &trades[..total.min(RECENT_TRADES)];
    let recent_wins = recent.iter().filter(|t| t.is_win()).count();

    JournalSummary {
        total_trades: total,
        wins,
        losses,
        break_even,
        win_rate: pct(wins, total),
        loss_rate: pct(losses, total),
        break_even_rate: pct(break_even, total),
        net_pips: round_to(trades.iter().map(|t| t.pips).sum(), 1),
        avg_rr: round_to(
            trades.iter().map(|t| t.rr_ratio).sum::<f64>() / total as f64,
            2,
        ),
        best_strategy,
        common_mistake,
        avg_execution_score,
        recent_win_rate: pct(recent_wins, recent.len()),
        session_performance: sessions
            .iter()
            .map(|(k, r)| GroupPerformance::from_record(k.clone(), r))
            .collect(),
        strategy_breakdown: strategies
            .iter()
            .map(|(k, r)| GroupPerformance::from_record(k.clone(), r))
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTrend {
    pub week: NaiveDate,
    pub win_rate: f64,
    pub total_pips: f64,
    pub trades: usize,
}

/// Monday of the ISO week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Per-week win rate and pips, oldest week first.
pub fn weekly_trends(trades: &[TradeRecord]) -> Vec<WeeklyTrend> {
    let mut weeks: Tally<NaiveDate, GroupRecord> = Tally::new();
    for trade in trades {
        weeks.entry(week_start(trade.date)).add(trade);
    }

    let mut trends: Vec<WeeklyTrend> = weeks
        .iter()
        .map(|(week, record)| WeeklyTrend {
            week: *week,
            win_rate: round_to(record.win_rate(), 1),
            total_pips: round_to(record.pips, 1),
            trades: record.total,
        })
        .collect();
    trends.sort_by_key(|t| t.week);
    trends
}
