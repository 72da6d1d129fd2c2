//! tradelens: rule-based evaluation of a trader's journal.
//!
//! Hexagonal architecture: the analysis engine and its data types live in
//! [`domain`], port traits in [`ports`], file-backed implementations in
//! [`adapters`], and the command line in [`cli`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
