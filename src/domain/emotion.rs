//! Emotion classifier and the keyword helpers shared by the analyzers.
//!
//! Matching is plain substring presence over lower-cased text. The tables
//! below are ordered: risk-relevant states are listed before positive ones so
//! that they win when several keywords appear together.

use super::feedback::EmotionalState;
use super::trade::TradeRecord;

struct EmotionRule {
    state: EmotionalState,
    keywords: &'static [&'static str],
    unless: &'static [&'static str],
}

const CLASSIFICATION_TABLE: &[EmotionRule] = &[
    EmotionRule {
        state: EmotionalState::Revenge,
        keywords: &["revenge", "angry"],
        unless: &[],
    },
    EmotionRule {
        state: EmotionalState::Greedy,
        keywords: &["fomo", "missing out"],
        unless: &[],
    },
    EmotionRule {
        state: EmotionalState::Fearful,
        keywords: &["fear", "panic"],
        unless: &[],
    },
    EmotionRule {
        state: EmotionalState::Impulsive,
        keywords: &["impulsive", "rushed"],
        unless: &[],
    },
    EmotionRule {
        state: EmotionalState::Confident,
        keywords: &["confident"],
        unless: &["over"],
    },
    EmotionRule {
        state: EmotionalState::Calm,
        keywords: &["calm", "patient"],
        unless: &[],
    },
];

pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "fear",
    "panic",
    "revenge",
    "angry",
    "frustrated",
    "anxious",
    "stressed",
];

pub const REVENGE_KEYWORDS: &[&str] = &["revenge", "angry", "frustrated"];

pub const FOMO_KEYWORDS: &[&str] = &["fomo", "missing out", "rushed"];

pub const PANIC_KEYWORDS: &[&str] = &["panic", "fear"];

pub const POSITIVE_MINDSET_KEYWORDS: &[&str] = &["calm", "confident"];

/// Risk above this turns a self-described impulsive entry into a FOMO signal.
pub const FOMO_IMPULSIVE_RISK_PCT: f64 = 2.0;

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

fn joined_lower(parts: &[&str]) -> String {
    parts.join(" ").to_lowercase()
}

/// All three emotion fields, lower-cased and space-joined.
pub fn all_emotions(trade: &TradeRecord) -> String {
    joined_lower(&[
        trade.emotions_before.as_str(),
        trade.emotions_during.as_str(),
        trade.emotions_after.as_str(),
    ])
}

/// Maps free text to exactly one emotional state.
pub fn classify(text: &str) -> EmotionalState {
    let text = text.to_lowercase();
    CLASSIFICATION_TABLE
        .iter()
        .find(|rule| contains_any(&text, rule.keywords) && !contains_any(&text, rule.unless))
        .map(|rule| rule.state)
        .unwrap_or(EmotionalState::Mixed)
}

pub fn classify_trade(trade: &TradeRecord) -> EmotionalState {
    classify(&all_emotions(trade))
}

pub fn has_negative_emotions(trade: &TradeRecord) -> bool {
    contains_any(&all_emotions(trade), NEGATIVE_KEYWORDS)
}

/// Revenge signals are only read from how the trader felt during and after.
pub fn has_revenge_emotions(trade: &TradeRecord) -> bool {
    let text = joined_lower(&[trade.emotions_after.as_str(), trade.emotions_during.as_str()]);
    contains_any(&text, REVENGE_KEYWORDS)
}

pub fn has_fomo_indicators(trade: &TradeRecord) -> bool {
    let text = joined_lower(&[trade.emotions_before.as_str(), trade.notes.as_str()]);
    contains_any(&text, FOMO_KEYWORDS)
        || (trade.risk_percentage > FOMO_IMPULSIVE_RISK_PCT && text.contains("impulsive"))
}

pub fn panicked_during(trade: &TradeRecord) -> bool {
    contains_any(&trade.emotions_during.to_lowercase(), PANIC_KEYWORDS)
}

pub fn positive_mindset_before(trade: &TradeRecord) -> bool {
    contains_any(&trade.emotions_before.to_lowercase(), POSITIVE_MINDSET_KEYWORDS)
}

pub fn self_identified_impulsive(trade: &TradeRecord) -> bool {
    trade.notes.to_lowercase().contains("impulsive")
}
