//! Example transactions shown when the server starts without `--empty`.
//!
//! The transactions screen and the reports screen each start from their own
//! list. The report list spans July 2023 to July 2024 so that every period
//! selects a different subset.

use time::{Date, macros::date};

use crate::{
    category::Category,
    transaction::{Transaction, TransactionId, TransactionStore, TransactionType},
};

fn transaction(
    id: &str,
    title: &str,
    amount: f64,
    category: Category,
    transaction_type: TransactionType,
    date: Date,
) -> Transaction {
    Transaction {
        id: TransactionId::new(id),
        title: title.to_owned(),
        amount,
        category,
        transaction_type,
        date,
    }
}

/// Six transactions from January 2024 for the transactions screen, most recent last.
pub fn seed_transactions() -> Vec<Transaction> {
    vec![
        transaction(
            "1",
            "Salary",
            50000.0,
            Category::Salary,
            TransactionType::Income,
            date!(2024 - 01 - 01),
        ),
        transaction(
            "2",
            "Groceries",
            1500.0,
            Category::Food,
            TransactionType::Expense,
            date!(2024 - 01 - 02),
        ),
        transaction(
            "3",
            "Petrol",
            800.0,
            Category::Transportation,
            TransactionType::Expense,
            date!(2024 - 01 - 03),
        ),
        transaction(
            "4",
            "Restaurant",
            1200.0,
            Category::Food,
            TransactionType::Expense,
            date!(2024 - 01 - 04),
        ),
        transaction(
            "5",
            "Freelance",
            8000.0,
            Category::Freelance,
            TransactionType::Income,
            date!(2024 - 01 - 05),
        ),
        transaction(
            "6",
            "Rent",
            12000.0,
            Category::Housing,
            TransactionType::Expense,
            date!(2024 - 01 - 06),
        ),
    ]
}

/// Eight transactions from July 2023 to July 2024 for the reports screen.
pub fn report_seed_transactions() -> Vec<Transaction> {
    vec![
        transaction(
            "1",
            "Salary",
            50000.0,
            Category::Salary,
            TransactionType::Income,
            date!(2024 - 07 - 01),
        ),
        transaction(
            "2",
            "Groceries",
            1500.0,
            Category::Food,
            TransactionType::Expense,
            date!(2024 - 07 - 02),
        ),
        transaction(
            "3",
            "Petrol",
            800.0,
            Category::Transportation,
            TransactionType::Expense,
            date!(2024 - 06 - 20),
        ),
        transaction(
            "4",
            "Restaurant",
            1200.0,
            Category::Food,
            TransactionType::Expense,
            date!(2024 - 06 - 10),
        ),
        transaction(
            "5",
            "Freelance",
            8000.0,
            Category::Freelance,
            TransactionType::Income,
            date!(2024 - 05 - 18),
        ),
        transaction(
            "6",
            "Rent",
            12000.0,
            Category::Housing,
            TransactionType::Expense,
            date!(2023 - 12 - 01),
        ),
        transaction(
            "7",
            "Utilities",
            2000.0,
            Category::Utilities,
            TransactionType::Expense,
            date!(2023 - 12 - 20),
        ),
        transaction(
            "8",
            "Shopping",
            3000.0,
            Category::Shopping,
            TransactionType::Expense,
            date!(2023 - 07 - 22),
        ),
    ]
}

/// A store holding [seed_transactions] in their listed order.
///
/// Falls back to an empty store if the seed data is rejected.
pub fn seed_store() -> TransactionStore {
    store_or_empty(seed_transactions())
}

/// A store holding [report_seed_transactions] in their listed order.
///
/// Falls back to an empty store if the seed data is rejected.
pub fn report_seed_store() -> TransactionStore {
    store_or_empty(report_seed_transactions())
}

fn store_or_empty(transactions: Vec<Transaction>) -> TransactionStore {
    TransactionStore::with_transactions(transactions).unwrap_or_else(|error| {
        tracing::error!("could not load seed transactions: {error}");
        TransactionStore::new()
    })
}
