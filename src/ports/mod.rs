//! Port traits the CLI and adapters meet at.

pub mod config_port;
pub mod journal_port;
pub mod report_port;
