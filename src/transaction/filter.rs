//! Filtering the transaction list by category and type.

use serde::Deserialize;

use crate::category::Category;

use super::core::{Transaction, TransactionType};

/// The query string value that disables a filter.
pub const ALL_FILTER_VALUE: &str = "all";

/// Either a specific value to match or [Filter::All] to match everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter<T> {
    /// Match every transaction.
    #[default]
    All,
    /// Match transactions with this value.
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }
}

/// The category filter on the transactions page.
pub type CategoryFilter = Filter<Category>;
/// The transaction type filter on the transactions page.
pub type TypeFilter = Filter<TransactionType>;

/// The filter selection for the transactions page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransactionFilter {
    /// Which category to show.
    pub category: CategoryFilter,
    /// Which transaction type to show.
    pub transaction_type: TypeFilter,
}

impl TransactionFilter {
    /// Whether `transaction` passes both filters.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.category.matches(&transaction.category)
            && self.transaction_type.matches(&transaction.transaction_type)
    }

    /// Whether both filters are set to "all".
    pub fn is_unfiltered(&self) -> bool {
        self.category == Filter::All && self.transaction_type == Filter::All
    }

    /// The query string value for the category filter.
    pub fn category_query_value(&self) -> &'static str {
        match self.category {
            Filter::All => ALL_FILTER_VALUE,
            Filter::Only(category) => category.as_str(),
        }
    }

    /// The query string value for the transaction type filter.
    pub fn type_query_value(&self) -> &'static str {
        match self.transaction_type {
            Filter::All => ALL_FILTER_VALUE,
            Filter::Only(transaction_type) => transaction_type.as_str(),
        }
    }
}

/// The raw query parameters for the transactions page.
///
/// Missing or unrecognised values fall back to "all".
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    /// A category name or "all".
    pub category: Option<String>,
    /// "Income", "Expense" or "all".
    #[serde(rename = "type")]
    pub type_: Option<String>,
    /// "added" or "updated" right after saving a transaction.
    pub notice: Option<String>,
}

impl From<FilterQuery> for TransactionFilter {
    fn from(query: FilterQuery) -> Self {
        Self {
            category: parse_filter(query.category.as_deref()),
            transaction_type: parse_filter(query.type_.as_deref()),
        }
    }
}

fn parse_filter<T>(value: Option<&str>) -> Filter<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None | Some("") | Some(ALL_FILTER_VALUE) => Filter::All,
        Some(value) => match value.parse() {
            Ok(parsed) => Filter::Only(parsed),
            Err(error) => {
                tracing::warn!("ignoring invalid filter value: {error}");
                Filter::All
            }
        },
    }
}

/// Get the transactions that pass `filter`, in their original order.
///
/// This never modifies `transactions`. An empty result is a normal outcome.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    filter: &TransactionFilter,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|transaction| filter.matches(transaction))
        .collect()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        category::Category,
        transaction::{
            Transaction, TransactionId, TransactionType,
            filter::{Filter, FilterQuery, TransactionFilter, filter_transactions},
        },
    };

    fn transaction(
        id: &str,
        category: Category,
        transaction_type: TransactionType,
    ) -> Transaction {
        Transaction {
            id: TransactionId::new(id),
            title: id.to_owned(),
            amount: 1.0,
            category,
            transaction_type,
            date: date!(2024 - 01 - 01),
        }
    }

    fn transactions() -> Vec<Transaction> {
        vec![
            transaction("1", Category::Salary, TransactionType::Income),
            transaction("2", Category::Food, TransactionType::Expense),
            transaction("3", Category::Transportation, TransactionType::Expense),
            transaction("4", Category::Food, TransactionType::Expense),
            transaction("5", Category::Freelance, TransactionType::Income),
            transaction("6", Category::Food, TransactionType::Income),
        ]
    }

    fn ids(filtered: &[&Transaction]) -> Vec<String> {
        filtered.iter().map(|t| t.id.to_string()).collect()
    }

    #[test]
    fn all_all_is_identity() {
        let transactions = transactions();

        let filtered = filter_transactions(&transactions, &TransactionFilter::default());

        let want: Vec<&Transaction> = transactions.iter().collect();
        assert_eq!(filtered, want);
    }

    #[test]
    fn filters_by_category() {
        let transactions = transactions();
        let filter = TransactionFilter {
            category: Filter::Only(Category::Food),
            transaction_type: Filter::All,
        };

        let filtered = filter_transactions(&transactions, &filter);

        assert_eq!(ids(&filtered), ["2", "4", "6"]);
    }

    #[test]
    fn filters_by_type() {
        let transactions = transactions();
        let filter = TransactionFilter {
            category: Filter::All,
            transaction_type: Filter::Only(TransactionType::Income),
        };

        let filtered = filter_transactions(&transactions, &filter);

        assert_eq!(ids(&filtered), ["1", "5", "6"]);
    }

    #[test]
    fn filters_by_category_and_type() {
        let transactions = transactions();
        let filter = TransactionFilter {
            category: Filter::Only(Category::Food),
            transaction_type: Filter::Only(TransactionType::Expense),
        };

        let filtered = filter_transactions(&transactions, &filter);

        assert_eq!(ids(&filtered), ["2", "4"]);
        assert!(filtered.iter().all(|t| filter.matches(t)));
    }

    #[test]
    fn no_matches_is_empty_not_error() {
        let transactions = transactions();
        let filter = TransactionFilter {
            category: Filter::Only(Category::Health),
            transaction_type: Filter::All,
        };

        assert!(filter_transactions(&transactions, &filter).is_empty());
    }

    #[test]
    fn query_parses_values_and_all_sentinel() {
        let filter = TransactionFilter::from(FilterQuery {
            category: Some("Food".to_owned()),
            type_: Some("all".to_owned()),
            notice: None,
        });

        assert_eq!(filter.category, Filter::Only(Category::Food));
        assert_eq!(filter.transaction_type, Filter::All);
        assert_eq!(filter.category_query_value(), "Food");
        assert_eq!(filter.type_query_value(), "all");
    }

    #[test]
    fn query_falls_back_to_all_for_unknown_values() {
        let filter = TransactionFilter::from(FilterQuery {
            category: Some("Pets".to_owned()),
            type_: Some("Transfer".to_owned()),
            notice: None,
        });

        assert!(filter.is_unfiltered());
    }
}
