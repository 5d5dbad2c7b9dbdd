//! Summarises transactions into income, expense and category totals.
//!
//! Provides functions to total income and expenses, group expenses by
//! category, and rank the categories with the highest spend.

use time::Date;

use crate::{
    category::Category,
    report::period::{Period, filter_by_period},
    transaction::Transaction,
};

/// The maximum number of categories listed as top categories.
pub const TOP_CATEGORY_LIMIT: usize = 5;

/// A category's total spend and its share of total expenses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryShare {
    /// The expense category.
    pub category: Category,
    /// The summed amount of the category's expenses.
    pub amount: f64,
    /// `amount` as a percentage of total expenses, between 0 and 100.
    pub percentage: f64,
}

/// The summary of a list of transactions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    /// The sum of all income.
    pub total_income: f64,
    /// The sum of all expenses.
    pub total_expenses: f64,
    /// Income minus expenses, negative when more was spent than earned.
    pub net_income: f64,
    /// Summed expenses per category, in order of first appearance.
    /// Income categories are not included.
    pub category_breakdown: Vec<(Category, f64)>,
    /// The categories with the highest spend, largest first, at most
    /// [TOP_CATEGORY_LIMIT] entries.
    pub top_categories: Vec<CategoryShare>,
}

/// A report for one period together with the transactions it covers.
#[derive(Debug, Clone)]
pub struct PeriodReport<'a> {
    /// The period the report covers.
    pub period: Period,
    /// The transactions in the period, in their original order.
    pub transactions: Vec<&'a Transaction>,
    /// The summary of `transactions`.
    pub report: Report,
}

impl Report {
    /// Filter `transactions` to `period` and summarise the result.
    pub fn for_period(transactions: &[Transaction], period: Period, today: Date) -> PeriodReport<'_> {
        let transactions = filter_by_period(transactions, period, today);
        let report = generate_report(&transactions);

        PeriodReport {
            period,
            transactions,
            report,
        }
    }
}

/// Summarise `transactions`.
pub fn generate_report(transactions: &[&Transaction]) -> Report {
    let total_income = sum_amounts(transactions, Transaction::is_income);
    let total_expenses = sum_amounts(transactions, Transaction::is_expense);
    let category_breakdown = group_expenses_by_category(transactions);
    let top_categories = rank_top_categories(&category_breakdown, total_expenses);

    Report {
        total_income,
        total_expenses,
        net_income: total_income - total_expenses,
        category_breakdown,
        top_categories,
    }
}

fn sum_amounts(transactions: &[&Transaction], predicate: fn(&Transaction) -> bool) -> f64 {
    transactions
        .iter()
        .filter(|transaction| predicate(transaction))
        .map(|transaction| transaction.amount)
        .sum()
}

/// Sums expenses per category, keeping the order in which categories first appear.
///
/// There are only ten categories, so a linear scan beats hashing here and
/// keeps insertion order for free.
fn group_expenses_by_category(transactions: &[&Transaction]) -> Vec<(Category, f64)> {
    let mut totals: Vec<(Category, f64)> = Vec::new();

    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        match totals
            .iter_mut()
            .find(|(category, _)| *category == transaction.category)
        {
            Some((_, total)) => *total += transaction.amount,
            None => totals.push((transaction.category, transaction.amount)),
        }
    }

    totals
}

/// Ranks categories by amount, largest first.
///
/// The sort is stable so ties keep their order of first appearance. When there
/// are no expenses every percentage is zero.
fn rank_top_categories(breakdown: &[(Category, f64)], total_expenses: f64) -> Vec<CategoryShare> {
    let mut shares: Vec<CategoryShare> = breakdown
        .iter()
        .map(|&(category, amount)| CategoryShare {
            category,
            amount,
            percentage: percentage_of(amount, total_expenses),
        })
        .collect();

    shares.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    shares.truncate(TOP_CATEGORY_LIMIT);

    shares
}

fn percentage_of(amount: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        amount / total * 100.0
    }
}
