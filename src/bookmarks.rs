/// Saving recovered items as a bookmark folder
use crate::error::RecoveryError;
use crate::history::NormalizedItem;
use chrono::NaiveDate;

/// Bookmark tree access (chrome.bookmarks in the extension)
#[allow(async_fn_in_trait)]
pub trait BookmarkProvider {
    fn is_available(&self) -> bool;

    /// Create a top-level folder, returning its id
    async fn create_folder(&self, title: &str) -> Result<String, RecoveryError>;

    /// Create a bookmark inside `parent_id`, returning its id
    async fn create_bookmark(&self, parent_id: &str, title: &str, url: &str) -> Result<String, RecoveryError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookmarkReport {
    pub folder_id: String,
    pub created: usize,
}

pub fn folder_title(today: NaiveDate) -> String {
    format!("Recovered Tabs {}", today.format("%Y-%m-%d"))
}

/// Create a folder and one bookmark per item, in order.
///
/// Each bookmark is created only after the previous call resolves, so the
/// folder exists first and children land in `sorted` order. The first
/// failure stops the run.
pub async fn bookmark_items<P: BookmarkProvider>(
    provider: &P,
    sorted: &[NormalizedItem],
    today: NaiveDate,
) -> Result<BookmarkReport, RecoveryError> {
    if !provider.is_available() {
        return Err(RecoveryError::BookmarksUnavailable);
    }

    let total = sorted.len();
    let folder_id = provider
        .create_folder(&folder_title(today))
        .await
        .map_err(|e| RecoveryError::BookmarkFailed {
            created: 0,
            total,
            reason: e.to_string(),
        })?;

    for (created, item) in sorted.iter().enumerate() {
        provider
            .create_bookmark(&folder_id, &item.title, &item.url)
            .await
            .map_err(|e| RecoveryError::BookmarkFailed {
                created,
                total,
                reason: e.to_string(),
            })?;
    }

    log::info!("Created {} bookmarks in folder {}", total, folder_id);

    Ok(BookmarkReport {
        folder_id,
        created: total,
    })
}
