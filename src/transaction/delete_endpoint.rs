//! Defines the endpoint for deleting a transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    alert::Alert,
    transaction::{TransactionId, TransactionStore},
};

/// The state needed for deleting a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The store to remove the transaction from.
    pub transactions: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transactions: state.transactions.clone(),
        }
    }
}

/// A route handler for deleting a transaction.
///
/// On success the response holds an out-of-band alert and nothing else, so
/// the table row that made the request is replaced with nothing.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let mut store = match state.transactions.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire transaction store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    match store.remove(&transaction_id) {
        // The status code has to be 200 OK or HTMX will not delete the table row.
        Ok(_) => {
            tracing::info!("deleted transaction {transaction_id}");
            Alert::SuccessSimple {
                message: "Transaction deleted successfully!".to_owned(),
            }
            .into_response()
        }
        Err(error) => {
            tracing::warn!("could not delete transaction {transaction_id}: {error}");
            error.into_alert_response()
        }
    }
}
