//! CLI definition and dispatch.

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info, warn};

use crate::adapters::csv_adapter::{export_to_path, CsvJournalAdapter};
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_report_adapter::JsonReportAdapter;
use crate::domain::analyzer::{analyze_trade_at, backfill_feedback};
use crate::domain::config_validation::{
    validate_heuristics_config, validate_journal_config, HEURISTICS_SECTION, JOURNAL_SECTION,
};
use crate::domain::error::TradelensError;
use crate::domain::feedback::AnalysisFeedback;
use crate::domain::heuristics::{Heuristics, DEFAULT_HISTORY_LIMIT};
use crate::domain::journal_summary::{summarize_journal, weekly_trends, JournalSummary, WeeklyTrend};
use crate::domain::period::Period;
use crate::domain::review::{generate_period_review, PeriodReview};
use crate::domain::trade::TradeRecord;
use crate::ports::config_port::ConfigPort;
use crate::ports::journal_port::JournalPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "tradelens", about = "Rule-based trade journal analysis")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze one trade against its recent history
    Analyze {
        #[arg(short, long)]
        journal: Option<PathBuf>,
        /// Position in the journal, 0 = most recent
        #[arg(short, long, default_value_t = 0)]
        index: usize,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Weekly or monthly performance review
    Review {
        #[arg(short, long)]
        journal: Option<PathBuf>,
        #[arg(short, long)]
        period: String,
        /// Last day of the review window (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<NaiveDate>,
        /// Analyze records that have no stored feedback first
        #[arg(long)]
        backfill: bool,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Journal-wide statistics
    Summary {
        #[arg(short, long)]
        journal: Option<PathBuf>,
        /// Include per-week trends
        #[arg(long)]
        trends: bool,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export the journal with its feedback as CSV
    Export {
        #[arg(short, long)]
        journal: Option<PathBuf>,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long)]
        backfill: bool,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Check that every journal record parses and validates
    Validate {
        #[arg(short, long)]
        journal: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Values resolved from the optional config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub journal_path: Option<PathBuf>,
    pub history_limit: usize,
    pub heuristics: Heuristics,
    pub pretty: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            journal_path: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
            heuristics: Heuristics::default(),
            pretty: true,
        }
    }
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Analyze {
            journal,
            index,
            config,
            output,
        } => run_analyze(journal, index, config.as_deref(), output.as_deref()),
        Command::Review {
            journal,
            period,
            as_of,
            backfill,
            config,
            output,
        } => run_review(
            journal,
            &period,
            as_of,
            backfill,
            config.as_deref(),
            output.as_deref(),
        ),
        Command::Summary {
            journal,
            trends,
            config,
            output,
        } => run_summary(journal, trends, config.as_deref(), output.as_deref()),
        Command::Export {
            journal,
            output,
            backfill,
            config,
        } => run_export(journal, &output, backfill, config.as_deref()),
        Command::Validate { journal, config } => run_validate(journal, config.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            (&e).into()
        }
    }
}

/// Loads and validates a config file.
pub fn load_config(path: &Path) -> Result<FileConfigAdapter, TradelensError> {
    info!("Loading config from {}", path.display());
    let adapter = FileConfigAdapter::from_file(path)?;
    validate_journal_config(&adapter)?;
    validate_heuristics_config(&adapter)?;
    Ok(adapter)
}

fn config_usize(config: &dyn ConfigPort, section: &str, key: &str, default: usize) -> usize {
    let fallback = i64::try_from(default).unwrap_or(i64::MAX);
    usize::try_from(config.get_int(section, key, fallback)).unwrap_or(default)
}

pub fn build_heuristics(config: &dyn ConfigPort) -> Heuristics {
    let d = Heuristics::default();
    let s = HEURISTICS_SECTION;
    Heuristics {
        history_min_trades: config_usize(config, s, "history_min_trades", d.history_min_trades),
        history_window: config_usize(config, s, "history_window", d.history_window),
        over_trading_same_day: config_usize(
            config,
            s,
            "over_trading_same_day",
            d.over_trading_same_day,
        ),
        early_exit_min_wins: config_usize(config, s, "early_exit_min_wins", d.early_exit_min_wins),
        early_exit_max_pips: config.get_double(s, "early_exit_max_pips", d.early_exit_max_pips),
        late_entry_min_losses: config_usize(
            config,
            s,
            "late_entry_min_losses",
            d.late_entry_min_losses,
        ),
        stop_width_pips_per_rr: config.get_double(
            s,
            "stop_width_pips_per_rr",
            d.stop_width_pips_per_rr,
        ),
        big_win_pips: config.get_double(s, "big_win_pips", d.big_win_pips),
        big_loss_pips: config.get_double(s, "big_loss_pips", d.big_loss_pips),
        strong_target_pips: config.get_double(s, "strong_target_pips", d.strong_target_pips),
    }
}

pub fn build_settings(config: &dyn ConfigPort) -> Settings {
    Settings {
        journal_path: config
            .get_string(JOURNAL_SECTION, "path")
            .map(|p| PathBuf::from(p.trim())),
        history_limit: config_usize(config, JOURNAL_SECTION, "history_limit", DEFAULT_HISTORY_LIMIT),
        heuristics: build_heuristics(config),
        pretty: config.get_bool("report", "pretty", true),
    }
}

fn resolve_settings(config_path: Option<&Path>) -> Result<Settings, TradelensError> {
    match config_path {
        Some(path) => Ok(build_settings(&load_config(path)?)),
        None => Ok(Settings::default()),
    }
}

/// The `--journal` flag wins over `[journal] path`.
pub fn resolve_journal(
    flag: Option<PathBuf>,
    settings: &Settings,
) -> Result<CsvJournalAdapter, TradelensError> {
    flag.or_else(|| settings.journal_path.clone())
        .map(CsvJournalAdapter::new)
        .ok_or_else(|| TradelensError::ConfigMissing {
            section: JOURNAL_SECTION.to_string(),
            key: "path".to_string(),
        })
}

fn load_journal(journal: &dyn JournalPort) -> Result<Vec<TradeRecord>, TradelensError> {
    info!("Loading journal from {}", journal.describe());
    let trades = journal.load_trades()?;
    info!("Loaded {} trades", trades.len());
    Ok(trades)
}

pub fn analyze_pipeline(
    journal: &dyn JournalPort,
    index: usize,
    settings: &Settings,
    analyzed_at: DateTime<Utc>,
) -> Result<AnalysisFeedback, TradelensError> {
    let trades = load_journal(journal)?;
    if index >= trades.len() {
        return Err(TradelensError::NoTrades {
            action: format!("analyze at index {index} ({} in journal)", trades.len()),
        });
    }

    let end = (index + 1 + settings.history_limit).min(trades.len());
    let history = &trades[index + 1..end];
    Ok(analyze_trade_at(
        &trades[index],
        history,
        &settings.heuristics,
        analyzed_at,
    ))
}

pub fn review_pipeline(
    journal: &dyn JournalPort,
    period: Period,
    as_of: NaiveDate,
    backfill: bool,
    settings: &Settings,
    analyzed_at: DateTime<Utc>,
) -> Result<PeriodReview, TradelensError> {
    let mut trades = load_journal(journal)?;
    if backfill {
        let analyzed = backfill_feedback(
            &mut trades,
            &settings.heuristics,
            settings.history_limit,
            analyzed_at,
        );
        info!("Backfilled feedback for {} trades", analyzed);
    }

    let (start, end) = period.window(as_of);
    let in_window = period.filter_window(&trades, as_of);
    info!(
        "Reviewing {} trades from {} to {} ({})",
        in_window.len(),
        start,
        end,
        period
    );
    let unanalyzed = in_window.iter().filter(|t| t.ai_feedback.is_none()).count();
    if unanalyzed > 0 {
        warn!(
            "{} trades in the window have no stored feedback; run with --backfill to include them",
            unanalyzed
        );
    }
    Ok(generate_period_review(&in_window, period))
}

pub fn summary_pipeline(
    journal: &dyn JournalPort,
) -> Result<(JournalSummary, Vec<WeeklyTrend>), TradelensError> {
    let trades = load_journal(journal)?;
    Ok((summarize_journal(&trades), weekly_trends(&trades)))
}

/// Writes the export and returns how many rows it holds.
pub fn export_pipeline(
    journal: &dyn JournalPort,
    output: &Path,
    backfill: bool,
    settings: &Settings,
    analyzed_at: DateTime<Utc>,
) -> Result<usize, TradelensError> {
    let mut trades = load_journal(journal)?;
    if trades.is_empty() {
        return Err(TradelensError::NoTrades {
            action: "export".to_string(),
        });
    }
    if backfill {
        let analyzed = backfill_feedback(
            &mut trades,
            &settings.heuristics,
            settings.history_limit,
            analyzed_at,
        );
        info!("Backfilled feedback for {} trades", analyzed);
    }
    export_to_path(&trades, output)?;
    Ok(trades.len())
}

fn run_analyze(
    journal: Option<PathBuf>,
    index: usize,
    config_path: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), TradelensError> {
    let settings = resolve_settings(config_path)?;
    let adapter = resolve_journal(journal, &settings)?;
    let feedback = analyze_pipeline(&adapter, index, &settings, Utc::now())?;

    eprintln!("\n=== Trade Analysis ===");
    eprintln!("Execution Score:  {}/10", feedback.execution_score);
    eprintln!("Risk:             {}", feedback.risk_assessment);
    eprintln!("Emotional State:  {}", feedback.emotional_state);
    if !feedback.patterns.is_empty() {
        let tags: Vec<&str> = feedback.patterns.iter().map(|p| p.as_str()).collect();
        eprintln!("Patterns:         {}", tags.join(", "));
    }
    eprintln!("Suggestion:       {}", feedback.suggestion);

    JsonReportAdapter::new(settings.pretty).write_feedback(&feedback, output)
}

fn run_review(
    journal: Option<PathBuf>,
    period: &str,
    as_of: Option<NaiveDate>,
    backfill: bool,
    config_path: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), TradelensError> {
    let period: Period = period.parse()?;
    let settings = resolve_settings(config_path)?;
    let adapter = resolve_journal(journal, &settings)?;
    let now = Utc::now();
    let as_of = as_of.unwrap_or_else(|| now.date_naive());
    let review = review_pipeline(&adapter, period, as_of, backfill, &settings, now)?;

    eprintln!("\n=== {} Review ===", capitalized(period.as_str()));
    eprintln!("Trades:           {}", review.trade_count);
    eprintln!("Win Rate:         {:.1}%", review.win_rate);
    eprintln!("Avg R:R:          {:.2}", review.avg_rr);
    eprintln!("Net Pips:         {:+.1}", review.net_pips);
    if let Some(grade) = review.risk_management_grade {
        eprintln!("Risk Grade:       {}", grade);
    }
    for rec in &review.recommendations {
        let marker = if rec.high_priority { "!" } else { "-" };
        eprintln!("  {} {}", marker, rec.message);
    }

    JsonReportAdapter::new(settings.pretty).write_review(&review, output)
}

fn run_summary(
    journal: Option<PathBuf>,
    trends: bool,
    config_path: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), TradelensError> {
    let settings = resolve_settings(config_path)?;
    let adapter = resolve_journal(journal, &settings)?;
    let (summary, weekly) = summary_pipeline(&adapter)?;

    eprintln!("\n=== Journal Summary ===");
    eprintln!("Total Trades:     {}", summary.total_trades);
    eprintln!("Win Rate:         {:.1}%", summary.win_rate);
    eprintln!("Net Pips:         {:+.1}", summary.net_pips);
    if let Some(best) = &summary.best_strategy {
        eprintln!("Best Strategy:    {}", best);
    }

    let trends = trends.then_some(weekly.as_slice());
    JsonReportAdapter::new(settings.pretty).write_summary(&summary, trends, output)
}

fn run_export(
    journal: Option<PathBuf>,
    output: &Path,
    backfill: bool,
    config_path: Option<&Path>,
) -> Result<(), TradelensError> {
    let settings = resolve_settings(config_path)?;
    let adapter = resolve_journal(journal, &settings)?;
    let rows = export_pipeline(&adapter, output, backfill, &settings, Utc::now())?;
    eprintln!("Exported {} trades to: {}", rows, output.display());
    Ok(())
}

fn run_validate(journal: Option<PathBuf>, config_path: Option<&Path>) -> Result<(), TradelensError> {
    let settings = resolve_settings(config_path)?;
    let adapter = resolve_journal(journal, &settings)?;
    let trades = load_journal(&adapter)?;
    let analyzed = trades.iter().filter(|t| t.ai_feedback.is_some()).count();
    eprintln!(
        "Journal is valid: {} trades, {} with stored feedback.",
        trades.len(),
        analyzed
    );
    Ok(())
}

fn capitalized(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
