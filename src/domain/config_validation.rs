//! Configuration validation.
//!
//! Checks the `[journal]` and `[heuristics]` sections before any value is
//! used. Absent keys are fine (defaults apply); present keys must parse and
//! fall inside their range.

use crate::domain::error::TradelensError;
use crate::ports::config_port::ConfigPort;

pub const JOURNAL_SECTION: &str = "journal";
pub const HEURISTICS_SECTION: &str = "heuristics";

/// Integer heuristics and their minimum allowed value.
const INTEGER_HEURISTICS: &[(&str, i64)] = &[
    ("history_min_trades", 1),
    ("history_window", 1),
    ("over_trading_same_day", 1),
    ("early_exit_min_wins", 1),
    ("late_entry_min_losses", 1),
];

/// Pip heuristics; `true` means zero is rejected.
const PIP_HEURISTICS: &[(&str, bool)] = &[
    ("early_exit_max_pips", true),
    ("stop_width_pips_per_rr", true),
    ("big_win_pips", false),
    ("big_loss_pips", false),
    ("strong_target_pips", false),
];

pub fn validate_journal_config(config: &dyn ConfigPort) -> Result<(), TradelensError> {
    if let Some(path) = config.get_string(JOURNAL_SECTION, "path") {
        if path.trim().is_empty() {
            return Err(invalid(JOURNAL_SECTION, "path", "path must not be empty"));
        }
    }
    validate_integer(config, JOURNAL_SECTION, "history_limit", 1)
}

pub fn validate_heuristics_config(config: &dyn ConfigPort) -> Result<(), TradelensError> {
    for &(key, min) in INTEGER_HEURISTICS {
        validate_integer(config, HEURISTICS_SECTION, key, min)?;
    }
    for &(key, strictly_positive) in PIP_HEURISTICS {
        validate_pips(config, key, strictly_positive)?;
    }
    Ok(())
}

fn invalid(section: &str, key: &str, reason: &str) -> TradelensError {
    TradelensError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

fn validate_integer(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
    min: i64,
) -> Result<(), TradelensError> {
    let Some(raw) = config.get_string(section, key) else {
        return Ok(());
    };
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| invalid(section, key, &format!("{key} must be an integer")))?;
    if value < min {
        return Err(invalid(
            section,
            key,
            &format!("{key} must be at least {min}"),
        ));
    }
    Ok(())
}

fn validate_pips(
    config: &dyn ConfigPort,
    key: &str,
    strictly_positive: bool,
) -> Result<(), TradelensError> {
    let Some(raw) = config.get_string(HEURISTICS_SECTION, key) else {
        return Ok(());
    };
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| invalid(HEURISTICS_SECTION, key, &format!("{key} must be a number")))?;
    if !value.is_finite() || value < 0.0 || (strictly_positive && value == 0.0) {
        let bound = if strictly_positive { "positive" } else { "non-negative" };
        return Err(invalid(
            HEURISTICS_SECTION,
            key,
            &format!("{key} must be {bound}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    fn make_config(content: &str) -> FileConfigAdapter {
        FileConfigAdapter::from_string(content).unwrap()
    }

    fn invalid_key(err: TradelensError) -> String {
        match err {
            TradelensError::ConfigInvalid { key, .. } => key,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_config_is_valid() {
        let config = make_config("");
        assert!(validate_journal_config(&config).is_ok());
        assert!(validate_heuristics_config(&config).is_ok());
    }

    #[test]
    fn full_config_is_valid() {
        let config = make_config(
            r#"
[journal]
path = trades.csv
history_limit = 20

[heuristics]
history_min_trades = 3
history_window = 5
over_trading_same_day = 3
early_exit_min_wins = 2
early_exit_max_pips = 15
late_entry_min_losses = 2
stop_width_pips_per_rr = 20
big_win_pips = 20
big_loss_pips = 30
strong_target_pips = 30
"#,
        );
        assert!(validate_journal_config(&config).is_ok());
        assert!(validate_heuristics_config(&config).is_ok());
    }

    #[test]
    fn history_limit_must_be_positive() {
        let config = make_config("[journal]\nhistory_limit = 0\n");
        let err = validate_journal_config(&config).unwrap_err();
        assert_eq!(invalid_key(err), "history_limit");
    }

    #[test]
    fn history_limit_must_be_integer() {
        let config = make_config("[journal]\nhistory_limit = lots\n");
        let err = validate_journal_config(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid config value [journal] history_limit: history_limit must be an integer"
        );
    }

    #[test]
    fn history_window_zero_fails() {
        let config = make_config("[heuristics]\nhistory_window = 0\n");
        let err = validate_heuristics_config(&config).unwrap_err();
        assert_eq!(invalid_key(err), "history_window");
    }

    #[test]
    fn negative_pips_fail() {
        let config = make_config("[heuristics]\nbig_loss_pips = -5\n");
        let err = validate_heuristics_config(&config).unwrap_err();
        assert_eq!(invalid_key(err), "big_loss_pips");
    }

    #[test]
    fn stop_width_must_be_positive() {
        let config = make_config("[heuristics]\nstop_width_pips_per_rr = 0\n");
        let err = validate_heuristics_config(&config).unwrap_err();
        assert_eq!(invalid_key(err), "stop_width_pips_per_rr");

        let config = make_config("[heuristics]\nbig_win_pips = 0\n");
        assert!(validate_heuristics_config(&config).is_ok());
    }

    #[test]
    fn non_numeric_pips_fail() {
        let config = make_config("[heuristics]\nearly_exit_max_pips = fifteen\n");
        let err = validate_heuristics_config(&config).unwrap_err();
        assert_eq!(invalid_key(err), "early_exit_max_pips");
    }
}
