//! One prioritized improvement suggestion per trade.

use super::emotion::{has_fomo_indicators, has_revenge_emotions};
use super::trade::{Outcome, TradeRecord};

pub const SUGGEST_CAPITAL_PRESERVATION: &str = "Focus on reducing position size to 1-2% risk per trade. This is critical for capital preservation.";
pub const SUGGEST_MINIMUM_RR: &str =
    "Never enter trades with R:R below 1:1. Wait for setups with at least 2:1 reward potential.";
pub const SUGGEST_COOLDOWN: &str =
    "Take a break after losses. Wait at least 30 minutes before analyzing the next setup.";
pub const SUGGEST_CHECKLIST: &str =
    "Use entry checklists to avoid FOMO. The market always provides opportunities.";
pub const SUGGEST_FOLLOW_PLAN: &str =
    "Review your trading plan rules. Stick to your strategy even during drawdowns.";
pub const SUGGEST_REINFORCE: &str =
    "Excellent trade! Document what made this setup high-probability and repeat it.";
pub const SUGGEST_KEEP_JOURNALING: &str =
    "Continue journaling trades. Pattern recognition improves with consistent data.";

/// First matching rule wins. Risk size is checked before reward:risk.
pub fn generate_suggestion(trade: &TradeRecord, mistakes: &[String]) -> &'static str {
    if trade.risk_percentage > 3.0 {
        SUGGEST_CAPITAL_PRESERVATION
    } else if trade.rr_ratio < 1.0 {
        SUGGEST_MINIMUM_RR
    } else if has_revenge_emotions(trade) {
        SUGGEST_COOLDOWN
    } else if has_fomo_indicators(trade) {
        SUGGEST_CHECKLIST
    } else if trade.outcome == Outcome::Loss && !mistakes.is_empty() {
        SUGGEST_FOLLOW_PLAN
    } else if trade.outcome == Outcome::Win && trade.rr_ratio >= 2.0 {
        SUGGEST_REINFORCE
    } else {
        SUGGEST_KEEP_JOURNALING
    }
}
