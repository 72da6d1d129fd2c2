//! Single-trade analysis: combines scoring, findings, patterns and suggestion
//! into one [`AnalysisFeedback`].

use super::emotion::classify_trade;
use super::feedback::AnalysisFeedback;
use super::findings::{identify_mistakes, identify_strengths};
use super::heuristics::Heuristics;
use super::patterns::detect_patterns;
use super::scoring::{assess_risk, execution_score};
use super::suggestion::generate_suggestion;
use super::trade::TradeRecord;
use chrono::{DateTime, Utc};

/// Analyzes `trade` against `history` (most-recent-first) and stamps the
/// current time.
pub fn analyze_trade(
    trade: &TradeRecord,
    history: &[TradeRecord],
    heuristics: &Heuristics,
) -> AnalysisFeedback {
    analyze_trade_at(trade, history, heuristics, Utc::now())
}

pub fn analyze_trade_at(
    trade: &TradeRecord,
    history: &[TradeRecord],
    heuristics: &Heuristics,
    analyzed_at: DateTime<Utc>,
) -> AnalysisFeedback {
    let execution_score = execution_score(trade, heuristics);
    let mistakes = identify_mistakes(trade, heuristics);
    let suggestion = generate_suggestion(trade, &mistakes).to_string();

    AnalysisFeedback {
        execution_score,
        strengths: identify_strengths(trade, heuristics),
        mistakes,
        suggestion,
        patterns: detect_patterns(trade, history, heuristics),
        risk_assessment: assess_risk(trade, execution_score),
        emotional_state: classify_trade(trade),
        analyzed_at,
    }
}

/// True when an edit touches a field the feedback depends on materially:
/// outcome, pips, or any of the three price levels.
pub fn needs_reanalysis(before: &TradeRecord, after: &TradeRecord) -> bool {
    before.outcome != after.outcome
        || before.pips != after.pips
        || before.entry_price != after.entry_price
        || before.stop_loss != after.stop_loss
        || before.take_profit != after.take_profit
}

/// Fills in feedback for every record that has none.
///
/// `trades` must be most-recent-first. Each record is analyzed against the
/// `history_limit` records that follow it, oldest first, so earlier feedback
/// is available when later records are analyzed. Returns how many records
/// were analyzed.
pub fn backfill_feedback(
    trades: &mut [TradeRecord],
    heuristics: &Heuristics,
    history_limit: usize,
    analyzed_at: DateTime<Utc>,
) -> usize {
    let mut analyzed = 0;
    for i in (0..trades.len()).rev() {
        if trades[i].ai_feedback.is_some() {
            continue;
        }
        let end = (i + 1 + history_limit).min(trades.len());
        let feedback = analyze_trade_at(&trades[i], &trades[i + 1..end], heuristics, analyzed_at);
        trades[i].ai_feedback = Some(feedback);
        analyzed += 1;
    }
    analyzed
}
