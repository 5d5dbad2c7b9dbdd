//! Defines the route handler for the reports page.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_SECONDARY_STYLE, CATEGORY_BADGE_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        HeadElement, PAGE_CONTAINER_STYLE, base, format_currency,
    },
    navigation::NavBar,
    report::{
        aggregation::{CategoryShare, Report},
        charts::{ReportChart, chart_script, chart_view, expense_breakdown_chart},
        period::Period,
    },
    timezone::current_local_date,
    transaction::TransactionStore,
};

const ECHARTS_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// Shown by `static/app.js` when the export link is clicked.
const EXPORT_SUCCESS_MESSAGE: &str = "Report exported successfully!";

/// The query string for the reports page and the CSV export.
///
/// The period is kept as text so that unknown values can fall back to the
/// current month instead of being rejected.
#[derive(Debug, Default, Deserialize)]
pub struct PeriodQuery {
    /// A period such as "current-month" or "all-time".
    pub period: Option<String>,
}

impl PeriodQuery {
    /// The requested period, defaulting to the current month.
    pub fn period(&self) -> Period {
        match self.period.as_deref() {
            None | Some("") => Period::default(),
            Some(text) => text.parse().unwrap_or_else(|error| {
                tracing::warn!("{error}, falling back to {}", Period::default());
                Period::default()
            }),
        }
    }
}

/// The state needed for the reports page.
#[derive(Debug, Clone)]
pub struct ReportsPageState {
    /// The transactions to report on.
    pub transactions: Arc<Mutex<TransactionStore>>,
    /// The local timezone as a canonical timezone name, used to work out the period.
    pub local_timezone: String,
}

impl FromRef<AppState> for ReportsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transactions: state.report_transactions.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Renders the summary, top categories and expense chart for the requested period.
pub async fn get_reports_page(
    State(state): State<ReportsPageState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Response, Error> {
    let period = query.period();
    let today = current_local_date(&state.local_timezone)?;

    let store = state
        .transactions
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire transaction store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?;

    let period_report = Report::for_period(store.transactions(), period, today);

    Ok(reports_view(period, period_report.transactions.len(), &period_report.report).into_response())
}

fn reports_view(period: Period, transaction_count: usize, report: &Report) -> Markup {
    let nav_bar = NavBar::new(endpoints::REPORTS_VIEW).into_html();
    let export_url = format!(
        "{}?period={}",
        endpoints::REPORT_EXPORT,
        period.as_query_value()
    );

    let chart = (!report.category_breakdown.is_empty()).then(|| ReportChart {
        id: "expense-breakdown-chart",
        options: expense_breakdown_chart(&report.category_breakdown).to_string(),
    });

    let head_elements = match &chart {
        Some(chart) => vec![
            HeadElement::ScriptLink(ECHARTS_URL.to_owned()),
            chart_script(chart),
        ],
        None => Vec::new(),
    };

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="relative w-full max-w-5xl space-y-6"
            {
                div class="flex justify-between flex-wrap items-end gap-4"
                {
                    div
                    {
                        h1 class="text-xl font-bold" { "Reports" }
                        p class="text-sm text-gray-500 dark:text-gray-400"
                        {
                            "Export and analyze your financial data"
                        }
                    }

                    a
                        id="export-csv"
                        href=(export_url)
                        download
                        data-success-message=(EXPORT_SUCCESS_MESSAGE)
                        class=(BUTTON_SECONDARY_STYLE)
                    {
                        "Export CSV"
                    }
                }

                (period_form(period))

                p id="report-count" class="text-sm text-gray-500 dark:text-gray-400"
                {
                    (period.label()) ": " (transaction_count) " transaction(s)"
                }

                (summary_cards(report))

                div class="grid grid-cols-1 lg:grid-cols-2 gap-6"
                {
                    (top_categories_view(&report.top_categories))

                    @if let Some(chart) = &chart {
                        (chart_view(chart))
                    }
                }
            }
        }
    );

    base("Reports", &head_elements, &content)
}

fn period_form(selected: Period) -> Markup {
    html! {
        form
            method="get"
            action=(endpoints::REPORTS_VIEW)
            class="flex flex-col sm:flex-row gap-4 items-end"
        {
            div class="flex-1 w-full"
            {
                label for="period" class=(FORM_LABEL_STYLE) { "Report Period" }

                select
                    id="period"
                    name="period"
                    class=(FORM_TEXT_INPUT_STYLE)
                    onchange="this.form.submit()"
                {
                    @for period in Period::ALL {
                        option value=(period.as_query_value()) selected[period == selected]
                        {
                            (period.label())
                        }
                    }
                }
            }

            noscript
            {
                button type="submit" class=(BUTTON_SECONDARY_STYLE) { "Apply" }
            }
        }
    }
}

fn summary_cards(report: &Report) -> Markup {
    let net_class = if report.net_income < 0.0 {
        "text-red-700 dark:text-red-300"
    } else {
        "text-green-700 dark:text-green-300"
    };

    let card = |id: &str, label: &str, amount: f64, class: &str| {
        html! {
            div
                id=(id)
                class="p-4 rounded-lg border border-gray-200 bg-white shadow-sm
                    dark:bg-gray-800 dark:border-gray-700"
            {
                p class="text-sm text-gray-500 dark:text-gray-400" { (label) }
                p class={ "text-2xl font-bold " (class) } { (format_currency(amount)) }
            }
        }
    };

    html! {
        section class="grid grid-cols-1 sm:grid-cols-3 gap-4"
        {
            (card(
                "total-income",
                "Total Income",
                report.total_income,
                "text-green-700 dark:text-green-300",
            ))
            (card(
                "total-expenses",
                "Total Expenses",
                report.total_expenses,
                "text-red-700 dark:text-red-300",
            ))
            (card("net-income", "Net Income", report.net_income, net_class))
        }
    }
}

fn top_categories_view(top_categories: &[CategoryShare]) -> Markup {
    html! {
        section
            id="top-categories"
            class="p-4 rounded-lg border border-gray-200 bg-white shadow-sm
                dark:bg-gray-800 dark:border-gray-700 space-y-4"
        {
            h2 class="text-lg font-semibold" { "Top Expense Categories" }

            @if top_categories.is_empty() {
                p class="text-sm text-gray-500 dark:text-gray-400"
                {
                    "No expenses in this period."
                }
            }

            ol class="space-y-3"
            {
                @for share in top_categories {
                    li data-category=(share.category.as_str())
                    {
                        div class="flex justify-between text-sm mb-1"
                        {
                            span class=(CATEGORY_BADGE_STYLE) { (share.category) }
                            span
                            {
                                (format_currency(share.amount))
                                " (" (format_percentage(share.percentage)) ")"
                            }
                        }

                        div class="w-full h-2 rounded bg-gray-200 dark:bg-gray-700"
                        {
                            div
                                class="h-2 rounded bg-blue-600"
                                style={ "width: " (format!("{:.1}", share.percentage)) "%" }
                            {}
                        }
                    }
                }
            }
        }
    }
}

fn format_percentage(percentage: f64) -> String {
    format!("{percentage:.1}%")
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Query, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use scraper::{Html, Selector};

    use crate::{
        report::{
            period::Period,
            reports_page::{PeriodQuery, ReportsPageState, format_percentage, get_reports_page},
        },
        seed::report_seed_store,
        test_utils::{assert_content_type, assert_status_ok, assert_valid_html, parse_html_document},
        transaction::TransactionStore,
    };

    fn get_state(store: TransactionStore) -> ReportsPageState {
        ReportsPageState {
            transactions: Arc::new(Mutex::new(store)),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    fn query(period: &str) -> Query<PeriodQuery> {
        Query(PeriodQuery {
            period: Some(period.to_owned()),
        })
    }

    #[test]
    fn period_query_falls_back_to_current_month() {
        let cases = [
            (None, Period::CurrentMonth),
            (Some(""), Period::CurrentMonth),
            (Some("fortnight"), Period::CurrentMonth),
            (Some("all-time"), Period::AllTime),
            (Some("last-year"), Period::LastYear),
        ];

        for (text, want) in cases {
            let query = PeriodQuery {
                period: text.map(str::to_owned),
            };

            assert_eq!(query.period(), want, "for {text:?}");
        }
    }

    #[test]
    fn percentages_have_one_decimal_place() {
        assert_eq!(format_percentage(65.217), "65.2%");
        assert_eq!(format_percentage(0.0), "0.0%");
    }

    #[tokio::test]
    async fn all_time_report_shows_totals_and_top_categories() {
        let response = get_reports_page(State(get_state(report_seed_store())), query("all-time"))
            .await
            .unwrap();

        assert_status_ok(&response);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        assert_eq!(card_text(&html, "total-income"), "₹58,000.00");
        assert_eq!(card_text(&html, "total-expenses"), "₹20,500.00");
        assert_eq!(card_text(&html, "net-income"), "₹37,500.00");

        let categories: Vec<_> = html
            .select(&Selector::parse("#top-categories li").unwrap())
            .filter_map(|item| item.value().attr("data-category"))
            .collect();
        assert_eq!(
            categories,
            vec!["Housing", "Shopping", "Food", "Utilities", "Transportation"],
            "want categories ordered by spend"
        );

        assert!(
            html.select(&Selector::parse("#expense-breakdown-chart").unwrap())
                .next()
                .is_some(),
            "want expense chart container"
        );

        let export_link = html
            .select(&Selector::parse("#export-csv").unwrap())
            .next()
            .expect("export link missing");
        assert_eq!(
            export_link.value().attr("href"),
            Some("/reports/export?period=all-time")
        );
        assert_eq!(
            export_link.value().attr("data-success-message"),
            Some("Report exported successfully!")
        );

        let selected = html
            .select(&Selector::parse("select[name=period] option[selected]").unwrap())
            .next()
            .and_then(|option| option.value().attr("value"));
        assert_eq!(selected, Some("all-time"));
    }

    #[tokio::test]
    async fn empty_report_has_no_chart() {
        let response = get_reports_page(State(get_state(TransactionStore::new())), query("all-time"))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_eq!(card_text(&html, "total-income"), "₹0.00");
        assert_eq!(card_text(&html, "net-income"), "₹0.00");
        assert!(
            html.select(&Selector::parse("#expense-breakdown-chart").unwrap())
                .next()
                .is_none()
        );
        assert!(html.html().contains("No expenses in this period."));
    }

    #[tokio::test]
    async fn invalid_timezone_renders_error_page() {
        let state = ReportsPageState {
            local_timezone: "Nowhere/Special".to_owned(),
            ..get_state(TransactionStore::new())
        };

        let response = get_reports_page(State(state), Query(PeriodQuery::default()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[track_caller]
    fn card_text(html: &Html, id: &str) -> String {
        let selector = Selector::parse(&format!("#{id} p.text-2xl")).unwrap();

        html.select(&selector)
            .next()
            .unwrap_or_else(|| panic!("card {id} missing"))
            .text()
            .collect::<String>()
            .trim()
            .to_owned()
    }
}
