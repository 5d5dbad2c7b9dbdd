//! Defines the endpoint that downloads a report's transactions as CSV.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    report::{
        aggregation::Report,
        csv_export::{export_csv, export_filename},
        reports_page::PeriodQuery,
    },
    timezone::current_local_date,
    transaction::TransactionStore,
};

/// The state needed for exporting a report.
#[derive(Debug, Clone)]
pub struct ExportReportState {
    /// The transactions to export.
    pub transactions: Arc<Mutex<TransactionStore>>,
    /// The local timezone as a canonical timezone name, used to work out the period.
    pub local_timezone: String,
}

impl FromRef<AppState> for ExportReportState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transactions: state.report_transactions.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Responds with the transactions in the requested period as a CSV attachment
/// named `expenses-report-{period}.csv`.
pub async fn export_report_endpoint(
    State(state): State<ExportReportState>,
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
    let csv = export_csv(&period_report.transactions)
        .inspect_err(|error| tracing::error!("could not export report for {period}: {error}"))?;

    tracing::info!(
        "exported {} transactions for {period}",
        period_report.transactions.len()
    );

    Ok((
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8".to_owned()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export_filename(period)),
            ),
        ],
        csv,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Query, State};

    use crate::{
        report::{
            export_endpoint::{ExportReportState, export_report_endpoint},
            reports_page::PeriodQuery,
        },
        seed::report_seed_store,
        test_utils::{assert_content_type, assert_status_ok, get_header, response_text},
        transaction::TransactionStore,
    };

    fn get_state(store: TransactionStore) -> ExportReportState {
        ExportReportState {
            transactions: Arc::new(Mutex::new(store)),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    #[tokio::test]
    async fn exports_all_time_report_as_attachment() {
        let query = PeriodQuery {
            period: Some("all-time".to_owned()),
        };

        let response = export_report_endpoint(State(get_state(report_seed_store())), Query(query))
            .await
            .unwrap();

        assert_status_ok(&response);
        assert_content_type(&response, "text/csv; charset=utf-8");
        assert_eq!(
            get_header(&response, "content-disposition"),
            "attachment; filename=\"expenses-report-all-time.csv\""
        );

        let text = response_text(response).await;
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "\"Date\",\"Title\",\"Category\",\"Type\",\"Amount\"");
        assert_eq!(
            lines[1],
            "\"2024-07-01\",\"Salary\",\"Salary\",\"Income\",\"50000\""
        );
        assert!(!text.ends_with('\n'));
    }

    #[tokio::test]
    async fn unknown_period_exports_current_month() {
        let query = PeriodQuery {
            period: Some("someday".to_owned()),
        };

        let response = export_report_endpoint(State(get_state(report_seed_store())), Query(query))
            .await
            .unwrap();

        assert_eq!(
            get_header(&response, "content-disposition"),
            "attachment; filename=\"expenses-report-current-month.csv\""
        );
        // The report data ends in July 2024, so only the header is written.
        let text = response_text(response).await;
        assert_eq!(text, "\"Date\",\"Title\",\"Category\",\"Type\",\"Amount\"");
    }
}
