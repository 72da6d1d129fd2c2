//! Trade journal access port trait.

use crate::domain::error::TradelensError;
use crate::domain::trade::TradeRecord;

/// Source of a trader's logged trades.
pub trait JournalPort {
    /// Every validated record, most recent first.
    fn load_trades(&self) -> Result<Vec<TradeRecord>, TradelensError>;

    /// Human-readable origin of the records, used in log lines.
    fn describe(&self) -> String;
}
