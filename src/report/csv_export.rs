//! Writes the transactions in a report as a CSV file.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::{Error, report::period::Period, transaction::Transaction};

const CSV_HEADER: [&str; 5] = ["Date", "Title", "Category", "Type", "Amount"];

/// Write `transactions` as CSV text, one row per transaction after a header row.
///
/// Every field is quoted and embedded quotes are doubled. Rows are separated by
/// `\n` and there is no newline after the last row.
///
/// # Errors
/// Returns [Error::CsvExportError] if the CSV writer fails.
pub fn export_csv(transactions: &[&Transaction]) -> Result<String, Error> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;

    for transaction in transactions {
        writer.write_record([
            transaction.formatted_date().as_str(),
            transaction.title.as_str(),
            transaction.category.as_str(),
            transaction.transaction_type.as_str(),
            transaction.amount.to_string().as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| Error::CsvExportError(error.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|error| Error::CsvExportError(error.to_string()))?;

    Ok(match text.strip_suffix('\n') {
        Some(trimmed) => trimmed.to_owned(),
        None => text,
    })
}

/// The download file name for a report covering `period`.
pub fn export_filename(period: Period) -> String {
    format!("expenses-report-{}.csv", period.as_query_value())
}
