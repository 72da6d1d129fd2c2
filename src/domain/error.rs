//! Error types for the journal collaborator layer.
//!
//! The analysis engine itself never fails; these cover reading journals and
//! configuration, rejecting invalid records, and writing reports.

/// Top-level error type for tradelens.
#[derive(Debug, thiserror::Error)]
pub enum TradelensError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("journal read error: {reason}")]
    JournalRead { reason: String },

    #[error("journal parse error at row {row}: {reason}")]
    JournalParse { row: usize, reason: String },

    #[error("invalid trade at row {row}: {field} {reason}")]
    InvalidTrade {
        row: usize,
        field: String,
        reason: String,
    },

    #[error("invalid period '{0}' (expected weekly or monthly)")]
    InvalidPeriod(String),

    #[error("no trades to {action}")]
    NoTrades { action: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&TradelensError> for std::process::ExitCode {
    fn from(err: &TradelensError) -> Self {
        let code: u8 = match err {
            TradelensError::Io(_) | TradelensError::Json(_) => 1,
            TradelensError::ConfigParse { .. }
            | TradelensError::ConfigMissing { .. }
            | TradelensError::ConfigInvalid { .. } => 2,
            TradelensError::JournalRead { .. } | TradelensError::JournalParse { .. } => 3,
            TradelensError::InvalidTrade { .. } | TradelensError::InvalidPeriod(_) => 4,
            TradelensError::NoTrades { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
