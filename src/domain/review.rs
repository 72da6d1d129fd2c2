//! Weekly / monthly performance review and its ranked recommendations.

use super::period::Period;
use super::period_patterns::{summarize_patterns, MistakeCount, PeriodPatterns, WeaknessCount};
use super::period_stats::{BestEntry, ExecutionTrend, PeriodStats, RiskGrade};
use super::trade::TradeRecord;
use serde::{Deserialize, Serialize};

pub const MAX_RECOMMENDATIONS: usize = 3;
pub const MIN_RECOMMENDATIONS: usize = 2;

pub const LOW_WIN_RATE_PCT: f64 = 40.0;
pub const HIGH_WIN_RATE_PCT: f64 = 60.0;
pub const MIN_AVG_RR: f64 = 1.5;

pub const EMPTY_PERIOD_SUMMARY: &str = "No trades recorded in this period";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    QualityOverQuantity,
    LetWinnersRun,
    RaiseRiskReward,
    PositionSizing,
    CommonMistake,
    EmotionalDiscipline,
    BuildConsistency,
    StartJournaling,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub message: String,
    /// Marks the recommendation the trader should act on first.
    pub high_priority: bool,
}

impl Recommendation {
    fn new(kind: RecommendationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            high_priority: false,
        }
    }

    fn flagged(kind: RecommendationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            high_priority: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodReview {
    pub period: Period,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub trade_count: usize,
    pub win_rate: f64,
    #[serde(rename = "avgRR")]
    pub avg_rr: f64,
    pub net_pips: f64,
    pub best_strategy: Option<BestEntry>,
    pub best_session: Option<BestEntry>,
    pub best_pair: Option<BestEntry>,
    pub common_mistakes: Vec<MistakeCount>,
    pub psychological_weaknesses: Vec<WeaknessCount>,
    pub recommendations: Vec<Recommendation>,
    pub execution_trend: Option<ExecutionTrend>,
    pub risk_management_grade: Option<RiskGrade>,
}

impl PeriodReview {
    fn empty(period: Period) -> Self {
        Self {
            period,
            summary: Some(EMPTY_PERIOD_SUMMARY.to_string()),
            trade_count: 0,
            win_rate: 0.0,
            avg_rr: 0.0,
            net_pips: 0.0,
            best_strategy: None,
            best_session: None,
            best_pair: None,
            common_mistakes: Vec::new(),
            psychological_weaknesses: Vec::new(),
            recommendations: vec![Recommendation::new(
                RecommendationKind::StartJournaling,
                "Start logging your trades to unlock AI insights",
            )],
            execution_trend: None,
            risk_management_grade: None,
        }
    }
}

/// Builds the ordered recommendation list: every check is evaluated in a
/// fixed order, the list is capped, and a generic entry pads short lists.
pub fn recommend(stats: &PeriodStats, patterns: &PeriodPatterns) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if stats.win_rate < LOW_WIN_RATE_PCT {
        recs.push(Recommendation::new(
            RecommendationKind::QualityOverQuantity,
            "Focus on quality over quantity. Review your entry criteria and wait for high-probability setups.",
        ));
    } else if stats.win_rate > HIGH_WIN_RATE_PCT {
        recs.push(Recommendation::new(
            RecommendationKind::LetWinnersRun,
            "Strong win rate! Ensure you're not exiting winners too early. Let profits run.",
        ));
    }

    if stats.avg_rr < MIN_AVG_RR {
        recs.push(Recommendation::new(
            RecommendationKind::RaiseRiskReward,
            "Improve your R:R ratio by targeting at least 2:1 on all trades. Skip setups with poor risk-reward.",
        ));
    }

    if stats.risk_grade.needs_attention() {
        recs.push(Recommendation::flagged(
            RecommendationKind::PositionSizing,
            "Reduce position sizing to 1-2% risk per trade. This is your #1 priority.",
        ));
    }

    if let Some(top) = patterns.common_mistakes.first() {
        recs.push(Recommendation::new(
            RecommendationKind::CommonMistake,
            format!("Address your most common mistake: {top}"),
        ));
    }

    if let Some(top) = patterns.psychological_weaknesses.first() {
        recs.push(Recommendation::new(
            RecommendationKind::EmotionalDiscipline,
            format!("Work on emotional discipline. Detected: {top}"),
        ));
    }

    recs.truncate(MAX_RECOMMENDATIONS);
    if recs.len() < MIN_RECOMMENDATIONS {
        recs.push(Recommendation::new(
            RecommendationKind::BuildConsistency,
            "Continue building your trading journal. Consistency is key to improvement.",
        ));
    }
    recs
}

/// Reviews trades already filtered to the period's window.
pub fn generate_period_review(trades: &[TradeRecord], period: Period) -> PeriodReview {
    if trades.is_empty() {
        return PeriodReview::empty(period);
    }

    let stats = PeriodStats::compute(trades);
    let patterns = summarize_patterns(trades);
    let recommendations = recommend(&stats, &patterns);

    PeriodReview {
        period,
        summary: None,
        trade_count: stats.trade_count,
        win_rate: stats.win_rate,
        avg_rr: stats.avg_rr,
        net_pips: stats.net_pips,
        best_strategy: stats.best_strategy,
        best_session: stats.best_session,
        best_pair: stats.best_pair,
        common_mistakes: patterns.common_mistakes,
        psychological_weaknesses: patterns.psychological_weaknesses,
        recommendations,
        execution_trend: Some(stats.execution_trend),
        risk_management_grade: Some(stats.risk_grade),
    }
}
