//! Defines the route handler for the page that lists and filters transactions.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::Date;
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    AppState, Error,
    alert::Alert,
    category::Category,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_PRIMARY_STYLE, CATEGORY_BADGE_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        base_with_alert, edit_delete_action_links, format_signed_currency,
    },
    navigation::NavBar,
    transaction::{
        Notice, Transaction, TransactionStore, TransactionType,
        filter::{ALL_FILTER_VALUE, FilterQuery, TransactionFilter, filter_transactions},
    },
};

/// The max number of graphemes to display in the transaction table rows before
/// truncating and displaying ellipses.
const MAX_TITLE_GRAPHEMES: usize = 32;

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsPageState {
    /// The store holding the session's transactions.
    pub transactions: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for TransactionsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transactions: state.transactions.clone(),
        }
    }
}

/// The transaction data to display in a table row.
#[derive(Debug, PartialEq)]
struct TransactionTableRow {
    title: String,
    amount: f64,
    category: Category,
    transaction_type: TransactionType,
    date: Date,
    edit_url: String,
    delete_url: String,
}

impl From<&Transaction> for TransactionTableRow {
    fn from(transaction: &Transaction) -> Self {
        Self {
            title: transaction.title.clone(),
            amount: transaction.amount,
            category: transaction.category,
            transaction_type: transaction.transaction_type,
            date: transaction.date,
            edit_url: format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, &transaction.id),
            delete_url: format_endpoint(endpoints::TRANSACTION, &transaction.id),
        }
    }
}

/// Renders the transactions list, filtered by the `category` and `type` query parameters.
///
/// A `notice` parameter adds a success alert for a transaction that was just saved.
pub async fn get_transactions_page(
    State(state): State<TransactionsPageState>,
    Query(query): Query<FilterQuery>,
) -> Result<Response, Error> {
    let notice = Notice::from_query(query.notice.as_deref());
    let filter = TransactionFilter::from(query);

    let store = state
        .transactions
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire transaction store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?;

    let rows: Vec<TransactionTableRow> = filter_transactions(store.transactions(), &filter)
        .into_iter()
        .map(TransactionTableRow::from)
        .collect();

    Ok(transactions_view(&rows, &filter, notice).into_response())
}

fn amount_class(transaction_type: TransactionType) -> &'static str {
    match transaction_type {
        TransactionType::Income => "text-green-700 dark:text-green-300",
        TransactionType::Expense => "text-red-700 dark:text-red-300",
    }
}

fn transactions_view(
    rows: &[TransactionTableRow],
    filter: &TransactionFilter,
    notice: Option<Notice>,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    let table_row = |row: &TransactionTableRow| {
        let (title, full_title) = format_title(&row.title);
        let action_links = edit_delete_action_links(
            &row.edit_url,
            &row.delete_url,
            &format!(
                "Are you sure you want to delete the transaction '{}'? This cannot be undone.",
                row.title
            ),
            "closest tr",
            "outerHTML",
        );

        html!(
            tr class=(TABLE_ROW_STYLE)
            {
                th
                    scope="row"
                    class="px-6 py-4 font-medium text-gray-900 whitespace-nowrap dark:text-white"
                    title=[full_title]
                {
                    (title)
                }

                td class=(TABLE_CELL_STYLE)
                {
                    span class=(CATEGORY_BADGE_STYLE) { (row.category) }
                }

                td class=(TABLE_CELL_STYLE)
                {
                    time datetime=(row.date) { (row.date) }
                }

                td class={ (TABLE_CELL_STYLE) " " (amount_class(row.transaction_type)) }
                {
                    (format_signed_currency(
                        row.amount,
                        row.transaction_type == TransactionType::Income,
                    ))
                }

                td class=(TABLE_CELL_STYLE) { (row.transaction_type) }

                td class=(TABLE_CELL_STYLE)
                {
                    div class="flex gap-4" { (action_links) }
                }
            }
        )
    };

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="relative w-full max-w-5xl space-y-6"
            {
                div class="flex justify-between flex-wrap items-end"
                {
                    div
                    {
                        h1 class="text-xl font-bold" { "Transactions" }
                        p class="text-sm text-gray-500 dark:text-gray-400"
                        {
                            "Manage your income and expenses"
                        }
                    }

                    a href=(endpoints::NEW_TRANSACTION_VIEW) class=(LINK_STYLE)
                    {
                        "Add Transaction"
                    }
                }

                (filter_form(filter))

                p id="transaction-count" class="text-sm text-gray-500 dark:text-gray-400"
                {
                    (rows.len()) " transaction(s) found"
                }

                div class="overflow-x-auto dark:bg-gray-800"
                {
                    table class="w-full text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Title" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for row in rows {
                                (table_row(row))
                            }

                            @if rows.is_empty() {
                                tr
                                {
                                    td
                                        colspan="6"
                                        class="px-6 py-8 text-center
                                            text-gray-500 dark:text-gray-400"
                                    {
                                        @if filter.is_unfiltered() {
                                            "No transactions found. "
                                            a href=(endpoints::NEW_TRANSACTION_VIEW) class=(LINK_STYLE)
                                            {
                                                "Add your first transaction"
                                            }
                                            " to get started!"
                                        } @else {
                                            "No transactions match the selected filters. "
                                            a href=(endpoints::TRANSACTIONS_VIEW) class=(LINK_STYLE)
                                            {
                                                "Clear filters"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    let alert = notice.map(|notice| Alert::SuccessSimple {
        message: notice.message().to_owned(),
    });

    base_with_alert("Transactions", &[], &content, alert)
}

/// A GET form that reloads the page with the selected filters.
fn filter_form(filter: &TransactionFilter) -> Markup {
    let selected_category = filter.category_query_value();
    let selected_type = filter.type_query_value();

    html! {
        form
            method="get"
            action=(endpoints::TRANSACTIONS_VIEW)
            class="flex flex-col sm:flex-row gap-4 items-end"
        {
            div class="flex-1 w-full"
            {
                label for="category-filter" class=(FORM_LABEL_STYLE) { "Category" }

                select
                    id="category-filter"
                    name="category"
                    onchange="this.form.submit()"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value=(ALL_FILTER_VALUE) selected[selected_category == ALL_FILTER_VALUE]
                    {
                        "All Categories"
                    }

                    @for category in Category::ALL {
                        option
                            value=(category.as_str())
                            selected[selected_category == category.as_str()]
                        {
                            (category)
                        }
                    }
                }
            }

            div class="flex-1 w-full"
            {
                label for="type-filter" class=(FORM_LABEL_STYLE) { "Type" }

                select
                    id="type-filter"
                    name="type"
                    onchange="this.form.submit()"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value=(ALL_FILTER_VALUE) selected[selected_type == ALL_FILTER_VALUE]
                    {
                        "All Types"
                    }

                    @for transaction_type in TransactionType::ALL {
                        option
                            value=(transaction_type.as_str())
                            selected[selected_type == transaction_type.as_str()]
                        {
                            (transaction_type)
                        }
                    }
                }
            }

            noscript
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Filter" }
            }
        }
    }
}

/// Truncate long titles, returning the full title as well if it was truncated.
fn format_title(title: &str) -> (String, Option<&str>) {
    let title_length = title.graphemes(true).count();

    if title_length <= MAX_TITLE_GRAPHEMES {
        (title.to_owned(), None)
    } else {
        let truncated: String = title.graphemes(true).take(MAX_TITLE_GRAPHEMES - 3).collect();
        (truncated + "...", Some(title))
    }
}


#[cfg(test)]
mod get_transactions_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Query, State};
    use scraper::Selector;

    use crate::{
        seed::seed_store,
        test_utils::{
            assert_alert_message, assert_content_type, assert_status_ok, assert_valid_html,
            parse_html_document,
        },
        transaction::{
            filter::FilterQuery,
            transactions_page::{TransactionsPageState, get_transactions_page},
        },
    };

    fn get_state() -> TransactionsPageState {
        TransactionsPageState {
            transactions: Arc::new(Mutex::new(seed_store())),
        }
    }

    async fn row_titles(query: FilterQuery) -> Vec<String> {
        let response = get_transactions_page(State(get_state()), Query(query))
            .await
            .unwrap();

        assert_status_ok(&response);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        html.select(&Selector::parse("tbody tr th").unwrap())
            .map(|th| th.text().collect::<String>().trim().to_owned())
            .collect()
    }

    #[tokio::test]
    async fn lists_all_seed_transactions_in_order() {
        let titles = row_titles(FilterQuery::default()).await;

        assert_eq!(
            titles,
            ["Salary", "Groceries", "Petrol", "Restaurant", "Freelance", "Rent"]
        );
    }

    #[tokio::test]
    async fn filters_by_category_and_type() {
        let titles = row_titles(FilterQuery {
            category: Some("Food".to_owned()),
            type_: Some("Expense".to_owned()),
            notice: None,
        })
        .await;

        assert_eq!(titles, ["Groceries", "Restaurant"]);
    }

    #[tokio::test]
    async fn added_notice_renders_success_alert_with_full_list() {
        let response = get_transactions_page(
            State(get_state()),
            Query(FilterQuery {
                notice: Some("added".to_owned()),
                ..Default::default()
            }),
        )
        .await
        .unwrap();

        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_alert_message(&html, "Transaction added successfully!");
        assert_eq!(html.select(&Selector::parse("tbody tr th").unwrap()).count(), 6);
    }

    #[tokio::test]
    async fn unknown_filter_values_show_everything() {
        let titles = row_titles(FilterQuery {
            category: Some("Pets".to_owned()),
            type_: None,
            notice: None,
        })
        .await;

        assert_eq!(titles.len(), 6);
    }
}
