//! Per-trade analysis output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskAssessment {
    Excellent,
    Good,
    Acceptable,
    Poor,
    Dangerous,
}

impl RiskAssessment {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskAssessment::Excellent => "excellent",
            RiskAssessment::Good => "good",
            RiskAssessment::Acceptable => "acceptable",
            RiskAssessment::Poor => "poor",
            RiskAssessment::Dangerous => "dangerous",
        }
    }
}

impl fmt::Display for RiskAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalState {
    Calm,
    Confident,
    Fearful,
    Greedy,
    Impulsive,
    Revenge,
    Mixed,
}

impl EmotionalState {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionalState::Calm => "calm",
            EmotionalState::Confident => "confident",
            EmotionalState::Fearful => "fearful",
            EmotionalState::Greedy => "greedy",
            EmotionalState::Impulsive => "impulsive",
            EmotionalState::Revenge => "revenge",
            EmotionalState::Mixed => "mixed",
        }
    }

    /// States counted as psychological weaknesses in period reviews.
    pub fn is_weakness(&self) -> bool {
        matches!(
            self,
            EmotionalState::Fearful
                | EmotionalState::Greedy
                | EmotionalState::Impulsive
                | EmotionalState::Revenge
        )
    }
}

impl fmt::Display for EmotionalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternTag {
    #[serde(rename = "good_discipline")]
    GoodDiscipline,
    #[serde(rename = "revenge_trading")]
    RevengeTrading,
    #[serde(rename = "FOMO")]
    Fomo,
    #[serde(rename = "emotional_trading")]
    EmotionalTrading,
    #[serde(rename = "over_trading")]
    OverTrading,
    #[serde(rename = "early_exit")]
    EarlyExit,
    #[serde(rename = "late_entry")]
    LateEntry,
}

impl PatternTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternTag::GoodDiscipline => "good_discipline",
            PatternTag::RevengeTrading => "revenge_trading",
            PatternTag::Fomo => "FOMO",
            PatternTag::EmotionalTrading => "emotional_trading",
            PatternTag::OverTrading => "over_trading",
            PatternTag::EarlyExit => "early_exit",
            PatternTag::LateEntry => "late_entry",
        }
    }
}

impl fmt::Display for PatternTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feedback attached to a trade when it is created or materially edited.
///
/// `execution_score` is always within `1..=10` and `strengths` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisFeedback {
    pub execution_score: u8,
    pub strengths: Vec<String>,
    pub mistakes: Vec<String>,
    pub suggestion: String,
    pub patterns: Vec<PatternTag>,
    pub risk_assessment: RiskAssessment,
    pub emotional_state: EmotionalState,
    pub analyzed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn weakness_set_is_fixed() {
        let weak: Vec<_> = [
            EmotionalState::Calm,
            EmotionalState::Confident,
            EmotionalState::Fearful,
            EmotionalState::Greedy,
            EmotionalState::Impulsive,
            EmotionalState::Revenge,
            EmotionalState::Mixed,
        ]
        .into_iter()
        .filter(EmotionalState::is_weakness)
        .collect();
        assert_eq!(
            weak,
            vec![
                EmotionalState::Fearful,
                EmotionalState::Greedy,
                EmotionalState::Impulsive,
                EmotionalState::Revenge,
            ]
        );
    }

    #[test]
    fn pattern_tags_serialize_to_wire_names() {
        let json = serde_json::to_string(&vec![PatternTag::Fomo, PatternTag::OverTrading]).unwrap();
        assert_eq!(json, r#"["FOMO","over_trading"]"#);
    }

    #[test]
    fn feedback_json_round_trip_keeps_fields() {
        let fb = AnalysisFeedback {
            execution_score: 7,
            strengths: vec!["Good risk-to-reward ratio".into()],
            mistakes: vec![],
            suggestion: "Keep going".into(),
            patterns: vec![PatternTag::GoodDiscipline],
            risk_assessment: RiskAssessment::Good,
            emotional_state: EmotionalState::Calm,
            analyzed_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };
        let json = serde_json::to_string(&fb).unwrap();
        assert!(json.contains("\"executionScore\":7"));
        assert!(json.contains("\"riskAssessment\":\"good\""));
        let back: AnalysisFeedback = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fb);
    }
}
