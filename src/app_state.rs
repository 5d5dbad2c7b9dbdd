//! Implements a struct that holds the state of the web server.

use std::sync::{Arc, Mutex};

use crate::transaction::TransactionStore;

/// The state of the web server.
///
/// Handlers do not take the whole state, instead each handler declares a
/// smaller state struct that implements `FromRef<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The transactions listed and edited on the transactions screen.
    pub transactions: Arc<Mutex<TransactionStore>>,

    /// The transactions summarised and exported on the reports screen.
    ///
    /// The two screens do not share data: changes on the transactions screen
    /// never show up in reports.
    pub report_transactions: Arc<Mutex<TransactionStore>>,

    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    ///
    /// Used to work out today's date for report periods and form defaults.
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] that owns `transactions` for the transactions
    /// screen and `report_transactions` for the reports screen.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Asia/Kolkata".
    pub fn new(
        transactions: TransactionStore,
        report_transactions: TransactionStore,
        local_timezone: &str,
    ) -> Self {
        Self {
            transactions: Arc::new(Mutex::new(transactions)),
            report_transactions: Arc::new(Mutex::new(report_transactions)),
            local_timezone: local_timezone.to_owned(),
        }
    }
}
