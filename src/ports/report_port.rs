//! Report output port trait.

use crate::domain::error::TradelensError;
use crate::domain::feedback::AnalysisFeedback;
use crate::domain::journal_summary::{JournalSummary, WeeklyTrend};
use crate::domain::review::PeriodReview;
use std::path::Path;

/// Port for writing analysis results. `output` of `None` means standard output.
pub trait ReportPort {
    fn write_feedback(
        &self,
        feedback: &AnalysisFeedback,
        output: Option<&Path>,
    ) -> Result<(), TradelensError>;

    fn write_review(&self, review: &PeriodReview, output: Option<&Path>)
        -> Result<(), TradelensError>;

    fn write_summary(
        &self,
        summary: &JournalSummary,
        trends: Option<&[WeeklyTrend]>,
        output: Option<&Path>,
    ) -> Result<(), TradelensError>;
}
