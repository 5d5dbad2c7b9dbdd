//! Financial reports: period filtering, aggregation, charts and CSV export.

pub(crate) mod aggregation;
mod charts;
pub(crate) mod csv_export;
mod export_endpoint;
pub(crate) mod period;
mod reports_page;

pub use aggregation::{CategoryShare, PeriodReport, Report, TOP_CATEGORY_LIMIT, generate_report};
pub use csv_export::{export_csv, export_filename};
pub use export_endpoint::export_report_endpoint;
pub use period::{Period, filter_by_period};
pub use reports_page::{PeriodQuery, get_reports_page};
