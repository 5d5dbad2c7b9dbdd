//! Calendar-relative periods for filtering transactions in reports.

use std::{fmt::Display, str::FromStr};

use serde::Deserialize;
use time::{Date, Month};

use crate::transaction::Transaction;

/// A named date range relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    /// The calendar month containing today.
    #[default]
    CurrentMonth,
    /// The calendar month before the current one.
    LastMonth,
    /// The calendar year containing today.
    CurrentYear,
    /// The calendar year before the current one.
    LastYear,
    /// Every transaction.
    AllTime,
}

impl Period {
    /// Every period, in the order they are listed in the period select menu.
    pub const ALL: [Period; 5] = [
        Period::CurrentMonth,
        Period::LastMonth,
        Period::CurrentYear,
        Period::LastYear,
        Period::AllTime,
    ];

    /// The period as it appears in query strings and export file names.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Period::CurrentMonth => "current-month",
            Period::LastMonth => "last-month",
            Period::CurrentYear => "current-year",
            Period::LastYear => "last-year",
            Period::AllTime => "all-time",
        }
    }

    /// Human readable name.
    pub fn label(self) -> &'static str {
        match self {
            Period::CurrentMonth => "Current Month",
            Period::LastMonth => "Last Month",
            Period::CurrentYear => "Current Year",
            Period::LastYear => "Last Year",
            Period::AllTime => "All Time",
        }
    }

    /// Whether `date` falls within this period, given that today is `today`.
    pub fn contains(self, date: Date, today: Date) -> bool {
        match self {
            Period::CurrentMonth => date.month() == today.month() && date.year() == today.year(),
            Period::LastMonth => {
                let (year, month) = previous_month(today);
                date.month() == month && date.year() == year
            }
            Period::CurrentYear => date.year() == today.year(),
            Period::LastYear => date.year() == today.year() - 1,
            Period::AllTime => true,
        }
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query_value())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|period| period.as_query_value() == s)
            .ok_or_else(|| format!("unknown period \"{s}\""))
    }
}

/// The year and month before the month containing `today`.
fn previous_month(today: Date) -> (i32, Month) {
    match today.month() {
        Month::January => (today.year() - 1, Month::December),
        month => (today.year(), month.previous()),
    }
}

/// Get the transactions that fall within `period`, in their original order.
pub fn filter_by_period(
    transactions: &[Transaction],
    period: Period,
    today: Date,
) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|transaction| period.contains(transaction.date, today))
        .collect()
}
