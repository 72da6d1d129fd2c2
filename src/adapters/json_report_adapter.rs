//! JSON report adapter: writes feedback, reviews and summaries as JSON.

use crate::domain::error::TradelensError;
use crate::domain::feedback::AnalysisFeedback;
use crate::domain::journal_summary::{JournalSummary, WeeklyTrend};
use crate::domain::review::PeriodReview;
use crate::ports::report_port::ReportPort;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

pub struct JsonReportAdapter {
    pretty: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryReport<'a> {
    summary: &'a JournalSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    weekly_trends: Option<&'a [WeeklyTrend]>,
}

impl JsonReportAdapter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn render<T: Serialize>(&self, value: &T) -> Result<String, TradelensError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }

    fn emit<T: Serialize>(&self, value: &T, output: Option<&Path>) -> Result<(), TradelensError> {
        let mut json = self.render(value)?;
        json.push('\n');
        match output {
            Some(path) => {
                fs::write(path, json)?;
                info!("Report written to {}", path.display());
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(json.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

impl ReportPort for JsonReportAdapter {
    fn write_feedback(
        &self,
        feedback: &AnalysisFeedback,
        output: Option<&Path>,
    ) -> Result<(), TradelensError> {
        self.emit(feedback, output)
    }

    fn write_review(
        &self,
        review: &PeriodReview,
        output: Option<&Path>,
    ) -> Result<(), TradelensError> {
        self.emit(review, output)
    }

    fn write_summary(
        &self,
        summary: &JournalSummary,
        trends: Option<&[WeeklyTrend]>,
        output: Option<&Path>,
    ) -> Result<(), TradelensError> {
        self.emit(
            &SummaryReport {
                summary,
                weekly_trends: trends,
            },
            output,
        )
    }
}
