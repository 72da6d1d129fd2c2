//! Review period label and the date window a caller selects trades with.

use super::error::TradelensError;
use super::trade::TradeRecord;
use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Weekly,
    Monthly,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }

    /// Inclusive window ending at `as_of`. The day exactly one week (or one
    /// calendar month) back is outside it, so a weekly window spans 7 days.
    pub fn window(&self, as_of: NaiveDate) -> (NaiveDate, NaiveDate) {
        let start = match self {
            Period::Weekly => as_of - Duration::days(6),
            Period::Monthly => as_of
                .checked_sub_months(Months::new(1))
                .and_then(|d| d.succ_opt())
                .unwrap_or(NaiveDate::MIN),
        };
        (start, as_of)
    }

    pub fn filter_window(&self, trades: &[TradeRecord], as_of: NaiveDate) -> Vec<TradeRecord> {
        let (start, end) = self.window(as_of);
        trades
            .iter()
            .filter(|t| t.date >= start && t.date <= end)
            .cloned()
            .collect()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = TradelensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(Period::Weekly),
            "monthly" => Ok(Period::Monthly),
            other => Err(TradelensError::InvalidPeriod(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_helpers::{date, trade};

    #[test]
    fn parses_only_weekly_and_monthly() {
        assert_eq!("weekly".parse::<Period>().unwrap(), Period::Weekly);
        assert_eq!("monthly".parse::<Period>().unwrap(), Period::Monthly);
        let err = "daily".parse::<Period>().unwrap_err();
        assert!(matches!(err, TradelensError::InvalidPeriod(ref p) if p == "daily"));
        assert!("Weekly".parse::<Period>().is_err());
    }

    #[test]
    fn weekly_window_is_seven_days() {
        let (start, end) = Period::Weekly.window(date(2024, 6, 10));
        assert_eq!(start, date(2024, 6, 4));
        assert_eq!(end, date(2024, 6, 10));
    }

    #[test]
    fn monthly_window_clamps_month_end() {
        let (start, _) = Period::Monthly.window(date(2024, 3, 31));
        assert_eq!(start, date(2024, 3, 1));
        let (start, _) = Period::Monthly.window(date(2024, 6, 30));
        assert_eq!(start, date(2024, 5, 31));
    }

    #[test]
    fn filter_window_excludes_one_week_back() {
        let trades: Vec<TradeRecord> = [1, 3, 4, 10, 11]
            .iter()
            .map(|&d| TradeRecord {
                date: date(2024, 6, d),
                ..trade()
            })
            .collect();
        let kept = Period::Weekly.filter_window(&trades, date(2024, 6, 10));
        let days: Vec<_> = kept.iter().map(|t| t.date).collect();
        assert_eq!(days, vec![date(2024, 6, 4), date(2024, 6, 10)]);
    }

    #[test]
    fn weekly_window_holds_seven_distinct_days() {
        let trades: Vec<TradeRecord> = (1..=20)
            .map(|d| TradeRecord {
                date: date(2024, 6, d),
                ..trade()
            })
            .collect();
        let kept = Period::Weekly.filter_window(&trades, date(2024, 6, 10));
        let days: Vec<_> = kept.iter().map(|t| t.date).collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days.first(), Some(&date(2024, 6, 4)));
        assert_eq!(days.last(), Some(&date(2024, 6, 10)));
    }

    #[test]
    fn monthly_window_excludes_same_date_last_month() {
        let trades: Vec<TradeRecord> = [date(2024, 5, 10), date(2024, 5, 11), date(2024, 6, 10)]
            .into_iter()
            .map(|d| TradeRecord { date: d, ..trade() })
            .collect();
        let kept = Period::Monthly.filter_window(&trades, date(2024, 6, 10));
        let days: Vec<_> = kept.iter().map(|t| t.date).collect();
        assert_eq!(days, vec![date(2024, 5, 11), date(2024, 6, 10)]);
    }
}
