//! Alert system for displaying success and error messages to users.
//!
//! Alerts are small HTML fragments that HTMX swaps into the alert container at
//! the bottom of every page. Error alerts are returned with an error status and
//! swapped in via `hx-target-error`, success alerts are swapped out of band so
//! that the request's own target can be updated at the same time.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

/// The ID of the element that alerts are swapped into.
pub const ALERT_CONTAINER_ID: &str = "alert-container";

/// A transient notification shown after a mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// A success message on its own.
    SuccessSimple { message: String },
    /// An error message with instructions on how to fix it.
    Error { message: String, details: String },
}

impl Alert {
    fn is_error(&self) -> bool {
        matches!(self, Alert::Error { .. })
    }

    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Markup {
        let container_style = if self.is_error() {
            "flex items-start gap-3 p-4 mb-4 rounded-lg border text-red-800 \
            border-red-300 bg-red-50 dark:bg-gray-800 dark:text-red-400 \
            dark:border-red-800"
        } else {
            "flex items-start gap-3 p-4 mb-4 rounded-lg border text-green-800 \
            border-green-300 bg-green-50 dark:bg-gray-800 dark:text-green-400 \
            dark:border-green-800"
        };

        let (message, details) = match self {
            Alert::Error { message, details } => (message, Some(details)),
            Alert::SuccessSimple { message } => (message, None),
        };

        html! {
            div role="alert" class=(container_style) data-alert="true"
            {
                div class="flex-1"
                {
                    p class="font-medium" { (message) }

                    @if let Some(details) = details.filter(|details| !details.is_empty()) {
                        p class="mt-1 text-sm" { (details) }
                    }
                }

                button
                    type="button"
                    aria-label="Dismiss"
                    class="ms-auto -mx-1.5 -my-1.5 rounded-lg p-1.5 inline-flex
                        items-center justify-center h-8 w-8 hover:bg-black/5"
                    onclick="this.closest('[data-alert]').remove()"
                {
                    "✕"
                }
            }
        }
    }

    /// Render the alert wrapped in an out-of-band swap targeting the alert container.
    pub fn into_oob_html(self) -> Markup {
        html! {
            div id=(ALERT_CONTAINER_ID) hx-swap-oob="innerHTML"
            {
                (self.into_html())
            }
        }
    }
}

impl IntoResponse for Alert {
    /// Responds with 200 OK so that HTMX performs the swap.
    fn into_response(self) -> Response {
        self.into_oob_html().into_response()
    }
}
