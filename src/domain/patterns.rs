//! Behavioral pattern detection for one trade against its recent history.

use super::emotion::{has_fomo_indicators, has_negative_emotions, has_revenge_emotions};
use super::feedback::PatternTag;
use super::heuristics::Heuristics;
use super::trade::TradeRecord;

/// Tags derived from the trade alone.
pub fn trade_patterns(trade: &TradeRecord) -> Vec<PatternTag> {
    let mut patterns = Vec::new();

    if trade.risk_percentage <= 1.0 && trade.rr_ratio >= 2.0 {
        patterns.push(PatternTag::GoodDiscipline);
    }
    if has_revenge_emotions(trade) {
        patterns.push(PatternTag::RevengeTrading);
    }
    if has_fomo_indicators(trade) {
        patterns.push(PatternTag::Fomo);
    }
    if has_negative_emotions(trade) {
        patterns.push(PatternTag::EmotionalTrading);
    }

    patterns
}

/// Tags derived from the most recent history entries.
///
/// `history` is most-recent-first. Too short a history yields no tags.
pub fn history_patterns(
    trade: &TradeRecord,
    history: &[TradeRecord],
    heuristics: &Heuristics,
) -> Vec<PatternTag> {
    let mut patterns = Vec::new();
    if history.len() < heuristics.history_min_trades {
        return patterns;
    }

    let recent = &history[..history.len().min(heuristics.history_window)];

    let same_day = recent.iter().filter(|t| t.date == trade.date).count();
    if same_day >= heuristics.over_trading_same_day {
        patterns.push(PatternTag::OverTrading);
    }

    let wins: Vec<&TradeRecord> = recent.iter().filter(|t| t.is_win()).collect();
    if wins.len() >= heuristics.early_exit_min_wins
        && wins.iter().all(|t| t.pips < heuristics.early_exit_max_pips)
    {
        patterns.push(PatternTag::EarlyExit);
    }

    let losses = recent.iter().filter(|t| t.is_loss()).count();
    if losses >= heuristics.late_entry_min_losses {
        patterns.push(PatternTag::LateEntry);
    }

    patterns
}

pub fn detect_patterns(
    trade: &TradeRecord,
    history: &[TradeRecord],
    heuristics: &Heuristics,
) -> Vec<PatternTag> {
    let mut patterns = trade_patterns(trade);
    patterns.extend(history_patterns(trade, history, heuristics));
    patterns
}
