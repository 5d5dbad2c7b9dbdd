//! Defines the endpoint for creating a new transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error,
    transaction::{Notice, TransactionStore, form::TransactionForm},
};

/// The state needed for creating a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The store that new transactions are added to.
    pub transactions: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transactions: state.transactions.clone(),
        }
    }
}

/// A route handler for creating a new transaction, redirects to the
/// transactions view with an "added" notice on success.
///
/// Invalid input is reported with an error alert and leaves the store untouched.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let builder = match form.validate() {
        Ok(builder) => builder,
        Err(error) => {
            tracing::debug!("rejected new transaction {form:?}: {error}");
            return error.into_alert_response();
        }
    };

    let mut store = match state.transactions.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire transaction store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    match store.add(builder) {
        Ok(transaction) => {
            tracing::info!("created transaction {}", transaction.id);
            (
                HxRedirect(Notice::Added.redirect_url()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Err(error) => {
            if error.is_invalid_input() {
                tracing::debug!("rejected new transaction: {error}");
            } else {
                tracing::error!("could not create transaction: {error}");
            }
            error.into_alert_response()
        }
    }
}
