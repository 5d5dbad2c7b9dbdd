//! Defines the route handler for the page for editing an existing transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, LINK_STYLE, base, loading_spinner,
        rupee_input_styles,
    },
    navigation::NavBar,
    transaction::{
        Transaction, TransactionId, TransactionStore,
        form::{TransactionFormDefaults, transaction_form_fields},
    },
};

/// The state needed for the edit transaction page.
#[derive(Debug, Clone)]
pub struct EditTransactionPageState {
    /// The store holding the transaction to edit.
    pub transactions: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for EditTransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transactions: state.transactions.clone(),
        }
    }
}

/// Renders the page for editing a transaction, or the 404 page if the
/// transaction does not exist.
pub async fn get_edit_transaction_page(
    State(state): State<EditTransactionPageState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Response, Error> {
    let store = state
        .transactions
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire transaction store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?;

    let transaction = store.get(&transaction_id).inspect_err(|_| {
        tracing::warn!("tried to edit transaction {transaction_id} which does not exist")
    })?;

    Ok(edit_transaction_view(transaction).into_response())
}

fn edit_transaction_view(transaction: &Transaction) -> Markup {
    let nav_bar = NavBar::new(endpoints::EDIT_TRANSACTION_VIEW).into_html();
    let update_endpoint = format_endpoint(endpoints::TRANSACTION, &transaction.id);
    let fields = transaction_form_fields(&TransactionFormDefaults::from_transaction(transaction));
    let spinner = loading_spinner();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            form
                hx-put=(update_endpoint)
                hx-target-error="#alert-container"
                hx-indicator="#indicator"
                class="w-full space-y-4 md:space-y-6"
            {
                div
                {
                    h2 class="text-xl font-bold" { "Edit Transaction" }
                    p class="text-sm text-gray-500 dark:text-gray-400"
                    {
                        "Update your transaction details."
                    }
                }

                (fields)

                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    span id="indicator" class="inline htmx-indicator" { (spinner) }
                    " Update Transaction"
                }

                a href=(endpoints::TRANSACTIONS_VIEW) class=(LINK_STYLE) { "Cancel" }
            }
        }
    };

    base("Edit Transaction", &[rupee_input_styles()], &content)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use scraper::Selector;

    use crate::{
        endpoints::{self, format_endpoint},
        seed::seed_store,
        test_utils::{
            assert_form_input_with_value, assert_form_submit_button_with_text,
            assert_hx_endpoint, assert_status_ok, assert_valid_html, must_get_form,
            parse_html_document,
        },
        transaction::{
            TransactionId,
            edit_page::{EditTransactionPageState, get_edit_transaction_page},
        },
    };

    fn get_state() -> EditTransactionPageState {
        EditTransactionPageState {
            transactions: Arc::new(Mutex::new(seed_store())),
        }
    }

    #[tokio::test]
    async fn renders_form_prefilled_with_transaction() {
        let response = get_edit_transaction_page(State(get_state()), Path(TransactionId::new("3")))
            .await
            .unwrap();

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_hx_endpoint(
            &form,
            &format_endpoint(endpoints::TRANSACTION, "3"),
            "hx-put",
        );
        assert_form_input_with_value(&form, "title", "text", "Petrol");
        assert_form_input_with_value(&form, "amount", "number", "800");
        assert_form_input_with_value(&form, "date", "date", "2024-01-03");
        assert_form_submit_button_with_text(&form, "Update Transaction");

        let selected_category = form
            .select(&Selector::parse("select[name=category] option[selected]").unwrap())
            .next()
            .and_then(|option| option.value().attr("value"));
        assert_eq!(selected_category, Some("Transportation"));
    }

    #[tokio::test]
    async fn unknown_transaction_renders_404() {
        let response =
            get_edit_transaction_page(State(get_state()), Path(TransactionId::new("42")))
                .await
                .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
