/// Error taxonomy for the recovery tool
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecoveryError {
    /// chrome.bookmarks is missing (not running as an extension)
    #[error("Bookmark functionality is only available in a Chrome extension.")]
    BookmarksUnavailable,

    #[error("History is only available in a Chrome extension.")]
    HistoryUnavailable,

    #[error("Malformed URL {url:?}: {reason}")]
    MalformedUrl { url: String, reason: String },

    #[error("Invalid visit timestamp: {0}")]
    InvalidTimestamp(f64),

    /// A bookmark call failed part way through; `created` bookmarks already exist
    #[error("Bookmarking stopped after {created} of {total} items: {reason}")]
    BookmarkFailed {
        created: usize,
        total: usize,
        reason: String,
    },

    #[error("Copy failed: {0}")]
    Clipboard(String),

    #[error("Preference storage error: {0}")]
    Preferences(String),

    /// Error raised on the JavaScript side of the bridge
    #[error("Browser API call failed: {0}")]
    Bridge(String),
}

impl RecoveryError {
    pub fn malformed_url(url: &str, reason: impl ToString) -> Self {
        RecoveryError::MalformedUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether the error means a browser API is absent rather than failing
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            RecoveryError::BookmarksUnavailable | RecoveryError::HistoryUnavailable
        )
    }
}
