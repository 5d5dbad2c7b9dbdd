//! The one-off success messages shown on the transactions page after a redirect.

use crate::endpoints;

/// The query parameter carrying a [Notice] on the transactions page.
pub const NOTICE_QUERY_KEY: &str = "notice";

/// A change that was just saved and should be confirmed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// A new transaction was created.
    Added,
    /// An existing transaction was changed.
    Updated,
}

impl Notice {
    /// The value used in the query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Notice::Added => "added",
            Notice::Updated => "updated",
        }
    }

    /// The text shown in the success alert.
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Added => "Transaction added successfully!",
            Notice::Updated => "Transaction updated successfully!",
        }
    }

    /// The transactions page URL that displays this notice.
    pub fn redirect_url(&self) -> String {
        format!(
            "{}?{NOTICE_QUERY_KEY}={}",
            endpoints::TRANSACTIONS_VIEW,
            self.as_str()
        )
    }

    /// Read a notice from its query string value.
    ///
    /// Unknown values are ignored so a stale or hand-edited URL still renders the page.
    pub fn from_query(value: Option<&str>) -> Option<Self> {
        match value? {
            "added" => Some(Notice::Added),
            "updated" => Some(Notice::Updated),
            other => {
                tracing::debug!("ignoring unknown notice {other:?}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::transaction::notice::Notice;

    #[test]
    fn redirect_url_can_be_read_back() {
        for notice in [Notice::Added, Notice::Updated] {
            let url = notice.redirect_url();
            let value = url.rsplit('=').next();

            assert!(url.starts_with("/transactions?notice="));
            assert_eq!(Notice::from_query(value), Some(notice));
        }
    }

    #[test]
    fn unknown_or_missing_notice_is_ignored() {
        assert_eq!(Notice::from_query(None), None);
        assert_eq!(Notice::from_query(Some("")), None);
        assert_eq!(Notice::from_query(Some("deleted")), None);
    }
}
