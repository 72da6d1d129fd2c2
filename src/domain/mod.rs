//! Core domain types and the trade-evaluation engine.

pub mod trade;
pub mod feedback;
pub mod heuristics;
pub mod emotion;
pub mod scoring;
pub mod findings;
pub mod patterns;
pub mod suggestion;
pub mod analyzer;
pub mod tally;
pub mod period;
pub mod period_stats;
pub mod period_patterns;
pub mod review;
pub mod journal_summary;
pub mod trade_validation;
pub mod config_validation;
pub mod error;

#[cfg(test)]
mod test_helpers;
