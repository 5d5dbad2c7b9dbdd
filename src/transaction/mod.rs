//! Transaction management for the expense tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - The in-memory `TransactionStore` and the category/type filter
//! - View handlers and endpoints for the transaction pages

mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
pub(crate) mod filter;
mod form;
mod notice;
mod store;
pub(crate) mod transactions_page;

pub use core::{
    Transaction, TransactionBuilder, TransactionId, TransactionType, format_date, parse_date,
};
pub use create_endpoint::create_transaction_endpoint;
pub use create_page::get_create_transaction_page;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use edit_page::get_edit_transaction_page;
pub use filter::{CategoryFilter, Filter, TransactionFilter, TypeFilter, filter_transactions};
pub use form::TransactionForm;
pub use notice::Notice;
pub use store::TransactionStore;
pub use transactions_page::get_transactions_page;
