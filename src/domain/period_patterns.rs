//! Recurring mistakes and psychological weaknesses across a period, read
//! from each trade's stored feedback.

use super::feedback::EmotionalState;
use super::tally::Tally;
use super::trade::TradeRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const TOP_MISTAKES: usize = 3;
pub const TOP_WEAKNESSES: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MistakeCount {
    pub mistake: String,
    pub count: usize,
}

impl fmt::Display for MistakeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x)", self.mistake, self.count)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaknessCount {
    pub state: EmotionalState,
    pub count: usize,
}

impl fmt::Display for WeaknessCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} trading ({}x)", self.state, self.count)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodPatterns {
    pub common_mistakes: Vec<MistakeCount>,
    pub psychological_weaknesses: Vec<WeaknessCount>,
}

pub fn summarize_patterns(trades: &[TradeRecord]) -> PeriodPatterns {
    let mut mistakes: Tally<String, usize> = Tally::new();
    let mut states: Tally<EmotionalState, usize> = Tally::new();

    for feedback in trades.iter().filter_map(|t| t.ai_feedback.as_ref()) {
        for mistake in &feedback.mistakes {
            mistakes.increment(mistake.clone());
        }
        states.increment(feedback.emotional_state);
    }

    let common_mistakes = mistakes
        .top(TOP_MISTAKES)
        .into_iter()
        .map(|(mistake, count)| MistakeCount { mistake, count })
        .collect();

    let mut weaknesses: Tally<EmotionalState, usize> = Tally::new();
    for (state, count) in states.iter().filter(|(s, _)| s.is_weakness()) {
        *weaknesses.entry(*state) += *count;
    }
    let psychological_weaknesses = weaknesses
        .top(TOP_WEAKNESSES)
        .into_iter()
        .map(|(state, count)| WeaknessCount { state, count })
        .collect();

    PeriodPatterns {
        common_mistakes,
        psychological_weaknesses,
    }
}
