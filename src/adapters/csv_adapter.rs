//! CSV journal adapter: reads trade records and writes the journal export.

use crate::domain::error::TradelensError;
use crate::domain::feedback::AnalysisFeedback;
use crate::domain::trade::{most_recent_first, TradeRecord};
use crate::domain::trade_validation::{calculate_rr, validate_trade};
use crate::ports::journal_port::JournalPort;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const REQUIRED_COLUMNS: &[&str] = &[
    "date",
    "session",
    "currency_pair",
    "timeframe",
    "direction",
    "entry_price",
    "stop_loss",
    "take_profit",
    "lot_size",
    "risk_percentage",
    "strategy_name",
    "outcome",
    "pips",
];

pub const EXPORT_HEADERS: &[&str] = &[
    "Date",
    "Session",
    "Pair",
    "Timeframe",
    "Direction",
    "Entry",
    "Stop Loss",
    "Take Profit",
    "Lot Size",
    "Risk %",
    "R:R",
    "Strategy",
    "Outcome",
    "Pips",
    "Execution Score",
    "AI Suggestion",
    "Strengths",
    "Mistakes",
    "Emotions Before",
    "Emotions During",
    "Emotions After",
    "Notes",
];

const NOT_AVAILABLE: &str = "N/A";

pub struct CsvJournalAdapter {
    path: PathBuf,
}

impl CsvJournalAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

/// Column positions looked up by header name.
struct Columns {
    index: HashMap<String, usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let index = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim().to_lowercase(), i))
            .collect();
        Self { index }
    }

    fn missing(&self) -> Option<&'static str> {
        REQUIRED_COLUMNS
            .iter()
            .copied()
            .find(|c| !self.index.contains_key(*c))
    }

    /// Trimmed cell value; empty when the column is absent.
    fn get<'r>(&self, record: &'r csv::StringRecord, name: &str) -> &'r str {
        self.index
            .get(name)
            .and_then(|&i| record.get(i))
            .map(str::trim)
            .unwrap_or("")
    }
}

fn parse_error(row: usize, reason: String) -> TradelensError {
    TradelensError::JournalParse { row, reason }
}

fn parse_number(value: &str, name: &str, row: usize) -> Result<f64, TradelensError> {
    value
        .parse()
        .map_err(|e| parse_error(row, format!("invalid {name} '{value}': {e}")))
}

fn parse_record(
    record: &csv::StringRecord,
    columns: &Columns,
    row: usize,
) -> Result<TradeRecord, TradelensError> {
    let date_str = columns.get(record, "date");
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|e| parse_error(row, format!("invalid date '{date_str}': {e}")))?;

    let session = columns
        .get(record, "session")
        .parse()
        .map_err(|e| parse_error(row, e))?;
    let direction = columns
        .get(record, "direction")
        .parse()
        .map_err(|e| parse_error(row, e))?;
    let outcome = columns
        .get(record, "outcome")
        .parse()
        .map_err(|e| parse_error(row, e))?;

    let entry_price = parse_number(columns.get(record, "entry_price"), "entry_price", row)?;
    let stop_loss = parse_number(columns.get(record, "stop_loss"), "stop_loss", row)?;
    let take_profit = parse_number(columns.get(record, "take_profit"), "take_profit", row)?;

    let rr_ratio = match columns.get(record, "rr_ratio") {
        "" => calculate_rr(entry_price, stop_loss, take_profit).ok_or_else(|| {
            TradelensError::InvalidTrade {
                row,
                field: "stop_loss".to_string(),
                reason: "must differ from entry_price".to_string(),
            }
        })?,
        raw => parse_number(raw, "rr_ratio", row)?,
    };

    let ai_feedback = match columns.get(record, "ai_feedback") {
        "" => None,
        raw => Some(
            serde_json::from_str::<AnalysisFeedback>(raw)
                .map_err(|e| parse_error(row, format!("invalid ai_feedback: {e}")))?,
        ),
    };

    Ok(TradeRecord {
        date,
        session,
        currency_pair: columns.get(record, "currency_pair").to_uppercase(),
        timeframe: columns.get(record, "timeframe").to_string(),
        direction,
        entry_price,
        stop_loss,
        take_profit,
        lot_size: parse_number(columns.get(record, "lot_size"), "lot_size", row)?,
        risk_percentage: parse_number(
            columns.get(record, "risk_percentage"),
            "risk_percentage",
            row,
        )?,
        rr_ratio,
        strategy_name: columns.get(record, "strategy_name").to_string(),
        outcome,
        pips: parse_number(columns.get(record, "pips"), "pips", row)?,
        notes: columns.get(record, "notes").to_string(),
        emotions_before: columns.get(record, "emotions_before").to_string(),
        emotions_during: columns.get(record, "emotions_during").to_string(),
        emotions_after: columns.get(record, "emotions_after").to_string(),
        ai_feedback,
    })
}

/// Parses journal CSV text. Rows are numbered from 1, excluding the header.
pub fn parse_journal(content: &str) -> Result<Vec<TradeRecord>, TradelensError> {
    let mut rdr = csv::Reader::from_reader(content.as_bytes());
    let headers = rdr.headers().map_err(|e| TradelensError::JournalRead {
        reason: format!("failed to read header: {e}"),
    })?;
    let columns = Columns::from_headers(headers);
    if let Some(name) = columns.missing() {
        return Err(TradelensError::JournalRead {
            reason: format!("missing required column '{name}'"),
        });
    }

    let mut trades = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = i + 1;
        let record = result.map_err(|e| parse_error(row, format!("CSV parse error: {e}")))?;
        let trade = parse_record(&record, &columns, row)?;
        validate_trade(&trade, row)?;
        trades.push(trade);
    }
    Ok(most_recent_first(trades))
}

impl JournalPort for CsvJournalAdapter {
    fn load_trades(&self) -> Result<Vec<TradeRecord>, TradelensError> {
        let content = fs::read_to_string(&self.path).map_err(|e| TradelensError::JournalRead {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;
        let trades = parse_journal(&content)?;
        debug!("Parsed {} trades from {}", trades.len(), self.path.display());
        Ok(trades)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn feedback_or_na<F>(trade: &TradeRecord, f: F) -> String
where
    F: Fn(&AnalysisFeedback) -> String,
{
    trade
        .ai_feedback
        .as_ref()
        .map(f)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn export_row(trade: &TradeRecord) -> Vec<String> {
    vec![
        trade.date.format("%Y-%m-%d").to_string(),
        trade.session.to_string(),
        trade.currency_pair.clone(),
        trade.timeframe.clone(),
        trade.direction.to_string(),
        trade.entry_price.to_string(),
        trade.stop_loss.to_string(),
        trade.take_profit.to_string(),
        trade.lot_size.to_string(),
        trade.risk_percentage.to_string(),
        trade.rr_ratio.to_string(),
        trade.strategy_name.clone(),
        trade.outcome.to_string(),
        trade.pips.to_string(),
        feedback_or_na(trade, |f| f.execution_score.to_string()),
        feedback_or_na(trade, |f| f.suggestion.clone()),
        feedback_or_na(trade, |f| f.strengths.join("; ")),
        feedback_or_na(trade, |f| f.mistakes.join("; ")),
        trade.emotions_before.clone(),
        trade.emotions_during.clone(),
        trade.emotions_after.clone(),
        trade.notes.clone(),
    ]
}

/// Writes the export CSV, one row per trade in the given order.
pub fn write_export<W: Write>(trades: &[TradeRecord], writer: W) -> Result<(), TradelensError> {
    let mut wtr = csv::Writer::from_writer(writer);
    let csv_err = |e: csv::Error| TradelensError::Io(std::io::Error::other(e));
    wtr.write_record(EXPORT_HEADERS).map_err(csv_err)?;
    for trade in trades {
        wtr.write_record(export_row(trade)).map_err(csv_err)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_to_path(trades: &[TradeRecord], path: &Path) -> Result<(), TradelensError> {
    let file = fs::File::create(path)?;
    write_export(trades, file)?;
    info!("Exported {} trades to {}", trades.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feedback::{EmotionalState, RiskAssessment};
    use crate::domain::trade::{Direction, Outcome, Session};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    const HEADER: &str = "date,session,currency_pair,timeframe,direction,entry_price,stop_loss,take_profit,lot_size,risk_percentage,rr_ratio,strategy_name,outcome,pips,notes,emotions_before,emotions_during,emotions_after";

    fn setup_journal(rows: &[&str]) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trades.csv");
        let mut content = String::from(HEADER);
        for row in rows {
            content.push('\n');
            content.push_str(row);
        }
        content.push('\n');
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn load_trades_returns_most_recent_first() {
        let (_dir, path) = setup_journal(&[
            "2024-06-03,London,eurusd,H1,Buy,1.1000,1.0950,1.1150,0.1,1,3,Breakout,Win,30,,calm,,",
            "2024-06-05,NY,GBPUSD,M15,Sell,1.2700,1.2750,1.2600,0.2,1.5,2,Reversal,Loss,-25,chased it,,fear,",
        ]);
        let adapter = CsvJournalAdapter::new(path);
        let trades = adapter.load_trades().unwrap();

        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].currency_pair, "GBPUSD");
        assert_eq!(trades[0].session, Session::NY);
        assert_eq!(trades[0].direction, Direction::Sell);
        assert_eq!(trades[0].outcome, Outcome::Loss);
        assert_eq!(trades[0].notes, "chased it");
        assert_eq!(trades[0].emotions_during, "fear");
        assert_eq!(trades[1].currency_pair, "EURUSD");
        assert_eq!(trades[1].emotions_before, "calm");
        assert!(trades[1].ai_feedback.is_none());
    }

    #[test]
    fn blank_rr_is_computed_from_prices() {
        let (_dir, path) = setup_journal(&[
            "2024-06-03,London,EURUSD,H1,Buy,1.1000,1.0950,1.1100,0.1,1,,Breakout,Win,20,,,,",
        ]);
        let trades = CsvJournalAdapter::new(path).load_trades().unwrap();
        assert!((trades[0].rr_ratio - 2.0).abs() < 1e-9);
    }

    #[test]
    fn columns_are_matched_by_name() {
        let content = "pips,outcome,strategy_name,risk_percentage,lot_size,take_profit,stop_loss,entry_price,direction,timeframe,currency_pair,session,date,rr_ratio\n\
            12,Win,Scalp,0.5,0.1,1.2,1.0,1.1,Buy,M5,USDJPY,Asia,2024-01-02,1\n";
        let trades = parse_journal(content).unwrap();
        assert_eq!(trades[0].strategy_name, "Scalp");
        assert_eq!(trades[0].session, Session::Asia);
        assert_eq!(trades[0].notes, "");
    }

    #[test]
    fn missing_column_is_reported() {
        let err = parse_journal("date,session\n2024-01-01,London\n").unwrap_err();
        assert!(
            matches!(err, TradelensError::JournalRead { ref reason } if reason.contains("currency_pair"))
        );
    }

    #[test]
    fn bad_row_reports_row_number() {
        let (_dir, path) = setup_journal(&[
            "2024-06-03,London,EURUSD,H1,Buy,1.1000,1.0950,1.1150,0.1,1,3,Breakout,Win,30,,,,",
            "2024-06-04,Tokyo,EURUSD,H1,Buy,1.1000,1.0950,1.1150,0.1,1,3,Breakout,Win,30,,,,",
        ]);
        let err = CsvJournalAdapter::new(path).load_trades().unwrap_err();
        assert!(matches!(err, TradelensError::JournalParse { row: 2, .. }));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let (_dir, path) = setup_journal(&[
            "2024-06-03,London,EURUSD,H1,Buy,1.1000,1.0950,1.1150,0.001,1,3,Breakout,Win,30,,,,",
        ]);
        let err = CsvJournalAdapter::new(path).load_trades().unwrap_err();
        assert!(
            matches!(err, TradelensError::InvalidTrade { row: 1, ref field, .. } if field == "lot_size")
        );
    }

    #[test]
    fn missing_file_is_read_error() {
        let adapter = CsvJournalAdapter::new(PathBuf::from("/nonexistent/trades.csv"));
        assert!(matches!(
            adapter.load_trades(),
            Err(TradelensError::JournalRead { .. })
        ));
    }

    #[test]
    fn stored_feedback_is_parsed_from_json() {
        let feedback = AnalysisFeedback {
            execution_score: 7,
            strengths: vec!["Good risk-to-reward ratio".into()],
            mistakes: vec![],
            suggestion: "Keep going".into(),
            patterns: vec![],
            risk_assessment: RiskAssessment::Good,
            emotional_state: EmotionalState::Calm,
            analyzed_at: Utc.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap(),
        };
        let json = serde_json::to_string(&feedback).unwrap();

        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record([
            "date", "session", "currency_pair", "timeframe", "direction", "entry_price",
            "stop_loss", "take_profit", "lot_size", "risk_percentage", "rr_ratio",
            "strategy_name", "outcome", "pips", "ai_feedback",
        ])
        .unwrap();
        wtr.write_record([
            "2024-06-03", "London", "EURUSD", "H1", "Buy", "1.1", "1.095", "1.115", "0.1", "1",
            "3", "Breakout", "Win", "30", json.as_str(),
        ])
        .unwrap();
        let content = String::from_utf8(wtr.into_inner().unwrap()).unwrap();

        let trades = parse_journal(&content).unwrap();
        assert_eq!(trades[0].ai_feedback.as_ref(), Some(&feedback));
    }

    #[test]
    fn export_writes_headers_and_na_for_unanalyzed() {
        let (dir, path) = setup_journal(&[
            "2024-06-03,London,EURUSD,H1,Buy,1.1000,1.0950,1.1150,0.1,1,3,Breakout,Win,30,\"late, but fine\",,,",
        ]);
        let trades = CsvJournalAdapter::new(path).load_trades().unwrap();
        let out = dir.path().join("export.csv");
        export_to_path(&trades, &out).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let headers: Vec<String> = rdr.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, EXPORT_HEADERS);

        let row = rdr.records().next().unwrap().unwrap();
        assert_eq!(&row[0], "2024-06-03");
        assert_eq!(&row[2], "EURUSD");
        assert_eq!(&row[14], "N/A");
        assert_eq!(&row[17], "N/A");
        assert_eq!(&row[21], "late, but fine");
    }

    #[test]
    fn export_joins_feedback_lists() {
        let mut trades =
            parse_journal(&format!(
                "{HEADER}\n2024-06-03,London,EURUSD,H1,Buy,1.1000,1.0950,1.1150,0.1,1,3,Breakout,Loss,-10,,,,\n"
            ))
            .unwrap();
        trades[0].ai_feedback = Some(AnalysisFeedback {
            execution_score: 4,
            strengths: vec!["A".into(), "B".into()],
            mistakes: vec!["C".into()],
            suggestion: "S".into(),
            patterns: vec![],
            risk_assessment: RiskAssessment::Acceptable,
            emotional_state: EmotionalState::Mixed,
            analyzed_at: Utc.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap(),
        });

        let mut buf = Vec::new();
        write_export(&trades, &mut buf).unwrap();
        let content = String::from_utf8(buf).unwrap();
        let line = content.lines().nth(1).unwrap();
        assert!(line.contains(",4,S,A; B,C,"));
    }
}
