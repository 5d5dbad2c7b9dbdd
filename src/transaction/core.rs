//! Defines the core data models for transactions.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{Error, category::Category};

/// The format used for transaction dates in forms, query strings and CSV files.
pub(crate) const DATE_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]");

// ============================================================================
// MODELS
// ============================================================================

/// The unique identifier of a transaction.
///
/// IDs are opaque strings. They are assigned once when a transaction is added
/// to the store and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create an ID from an existing token, e.g. the IDs in the seed data.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// Money earned, e.g. a salary payment.
    Income,
    /// Money spent, e.g. groceries.
    Expense,
}

impl TransactionType {
    /// Both transaction types, in the order they are listed in select menus.
    pub const ALL: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

    /// The type name as it appears in forms, query strings and CSV files.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" => Ok(TransactionType::Income),
            "Expense" => Ok(TransactionType::Expense),
            other => Err(Error::InvalidTransactionType(other.to_owned())),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build] and add the builder
/// to a [TransactionStore](super::TransactionStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A short label for the transaction, e.g. "Groceries".
    pub title: String,
    /// The amount of money spent or earned. Always zero or more, the
    /// transaction type says which way the money went.
    pub amount: f64,
    /// What the transaction was for.
    pub category: Category,
    /// Whether the money was earned or spent.
    pub transaction_type: TransactionType,
    /// When the transaction happened.
    pub date: Date,
}

impl Transaction {
    /// Create a new expense.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability. Call
    /// [TransactionBuilder::transaction_type] to record income instead.
    pub fn build(amount: f64, date: Date, title: &str, category: Category) -> TransactionBuilder {
        TransactionBuilder {
            title: title.to_owned(),
            amount,
            category,
            transaction_type: TransactionType::Expense,
            date,
        }
    }

    pub(crate) fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub(crate) fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// The date formatted as YYYY-MM-DD.
    pub fn formatted_date(&self) -> String {
        format_date(self.date)
    }
}

/// A builder for creating [Transaction] instances.
///
/// The builder holds every field of a transaction except its ID. It is used
/// both to add new transactions and to replace the fields of an existing one.
///
/// # Examples
///
/// ```ignore
/// use time::macros::date;
///
/// use crate::{category::Category, transaction::{Transaction, TransactionType}};
///
/// let salary = Transaction::build(50000.0, date!(2024 - 01 - 01), "Salary", Category::Salary)
///     .transaction_type(TransactionType::Income);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    /// A short label for the transaction.
    pub title: String,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// What the transaction was for.
    pub category: Category,
    /// Whether the money was earned or spent.
    pub transaction_type: TransactionType,
    /// When the transaction happened.
    pub date: Date,
}

impl TransactionBuilder {
    /// Set the transaction type.
    pub fn transaction_type(mut self, transaction_type: TransactionType) -> Self {
        self.transaction_type = transaction_type;
        self
    }

    /// Check the fields that the type system cannot.
    ///
    /// # Errors
    /// Returns an error if the title is blank or the amount is not a finite,
    /// non-negative number.
    pub fn validate(&self) -> Result<(), Error> {
        if self.title.trim().is_empty() {
            return Err(Error::EmptyTitle);
        }

        if !self.amount.is_finite() {
            return Err(Error::InvalidAmount(self.amount.to_string()));
        }

        if self.amount < 0.0 {
            return Err(Error::NegativeAmount(self.amount));
        }

        Ok(())
    }

    /// Create the [Transaction] with the given ID.
    pub(crate) fn finalise(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            title: self.title.trim().to_owned(),
            amount: self.amount,
            category: self.category,
            transaction_type: self.transaction_type,
            date: self.date,
        }
    }
}

// ============================================================================
// DATES
// ============================================================================

/// Parse a YYYY-MM-DD date.
///
/// # Errors
/// Returns [Error::InvalidDate] if `text` is not a valid calendar date.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text.trim(), DATE_FORMAT).map_err(|_| Error::InvalidDate(text.to_owned()))
}

/// Format a date as YYYY-MM-DD.
pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        Error,
        category::Category,
        transaction::{Transaction, TransactionId, TransactionType, format_date, parse_date},
    };

    #[test]
    fn build_defaults_to_expense() {
        let builder = Transaction::build(1.0, date!(2024 - 01 - 02), "Groceries", Category::Food);

        assert_eq!(builder.transaction_type, TransactionType::Expense);
    }

    #[test]
    fn validate_accepts_zero_amount() {
        let builder = Transaction::build(0.0, date!(2024 - 01 - 02), "Free", Category::Food);

        assert_eq!(builder.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_negative_amount() {
        let builder = Transaction::build(-1.5, date!(2024 - 01 - 02), "Refund", Category::Food);

        assert_eq!(builder.validate(), Err(Error::NegativeAmount(-1.5)));
    }

    #[test]
    fn validate_rejects_non_finite_amount() {
        let builder = Transaction::build(f64::NAN, date!(2024 - 01 - 02), "?", Category::Food);

        assert!(matches!(builder.validate(), Err(Error::InvalidAmount(_))));
    }

    #[test]
    fn validate_rejects_blank_title() {
        let builder = Transaction::build(1.0, date!(2024 - 01 - 02), "   ", Category::Food);

        assert_eq!(builder.validate(), Err(Error::EmptyTitle));
    }

    #[test]
    fn finalise_trims_title() {
        let transaction = Transaction::build(1.0, date!(2024 - 01 - 02), " Bus ", Category::Food)
            .finalise(TransactionId::new("1"));

        assert_eq!(transaction.title, "Bus");
    }

    #[test]
    fn parses_transaction_types() {
        assert_eq!("Income".parse(), Ok(TransactionType::Income));
        assert_eq!("Expense".parse(), Ok(TransactionType::Expense));
        assert_eq!(
            "Transfer".parse::<TransactionType>(),
            Err(Error::InvalidTransactionType("Transfer".to_owned()))
        );
    }

    #[test]
    fn parses_and_formats_dates() {
        assert_eq!(parse_date("2024-01-02"), Ok(date!(2024 - 01 - 02)));
        assert_eq!(format_date(date!(2024 - 01 - 02)), "2024-01-02");
    }

    #[test]
    fn rejects_impossible_dates() {
        assert_eq!(
            parse_date("2024-02-30"),
            Err(Error::InvalidDate("2024-02-30".to_owned()))
        );
        assert!(parse_date("02/01/2024").is_err());
        assert!(parse_date("").is_err());
    }
}
