/// History data structures and the history provider seam
use crate::error::RecoveryError;
use crate::normalize::{normalize_entries, NormalizeReport};
use crate::suspension::SUSPENDED_PAGE_URL;
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Upper bound on results requested from chrome.history
pub const MAX_HISTORY_RESULTS: u32 = 10_000;

const DAY_MS: f64 = 86_400_000.0;

/// A history entry as returned by chrome.history.search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHistoryEntry {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub last_visit_time: f64,
    #[serde(default)]
    pub visit_count: u32,
}

impl RawHistoryEntry {
    pub fn new(id: &str, url: &str, title: &str, last_visit_time: f64, visit_count: u32) -> Self {
        RawHistoryEntry {
            id: id.to_string(),
            url: url.to_string(),
            title: title.to_string(),
            last_visit_time,
            visit_count,
        }
    }
}

/// A recovered history record ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedItem {
    pub domain: String,
    pub title: String,
    pub url: String,
    pub visits: u32,
    pub visits_text: String,
    pub date_time: String,
    pub date: String,
    pub relative_time: String,
    pub time: f64,
}

/// Parameters of the one-shot history search
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    pub text: String,
    pub start_time: f64,
    pub max_results: u32,
}

impl HistoryQuery {
    /// Every visit to the suspension page since the epoch
    pub fn suspended_pages() -> Self {
        HistoryQuery {
            text: SUSPENDED_PAGE_URL.to_string(),
            start_time: 0.0,
            max_results: MAX_HISTORY_RESULTS,
        }
    }
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self::suspended_pages()
    }
}

/// Source of browsing history (chrome.history in the extension)
#[allow(async_fn_in_trait)]
pub trait HistoryProvider {
    fn is_available(&self) -> bool;

    async fn search(&self, query: &HistoryQuery) -> Result<Vec<RawHistoryEntry>, RecoveryError>;
}

/// Where the loaded items came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistorySource {
    Live,
    Mock,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedHistory {
    pub source: HistorySource,
    pub items: Vec<NormalizedItem>,
    pub skipped: usize,
}

/// Demo entries used when chrome.history is not reachable
pub fn mock_entries(now_ms: f64) -> Vec<RawHistoryEntry> {
    vec![
        RawHistoryEntry::new("1", "https://www.example.com", "Example Domain", now_ms, 5),
        RawHistoryEntry::new("2", "https://www.google.com", "Google", now_ms - DAY_MS, 10),
    ]
}

/// Query the provider once and normalize the result.
///
/// Falls back to [`mock_entries`] when the provider is unavailable. A failed
/// search is returned as an error; there is no retry.
pub async fn load_history<P, Tz>(provider: &P, now: &DateTime<Tz>) -> Result<LoadedHistory, RecoveryError>
where
    P: HistoryProvider,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let (source, entries) = if provider.is_available() {
        let entries = provider.search(&HistoryQuery::suspended_pages()).await?;
        log::info!("History search returned {} entries", entries.len());
        (HistorySource::Live, entries)
    } else {
        log::info!("Not running as a Chrome extension, using mock data");
        (HistorySource::Mock, mock_entries(now.timestamp_millis() as f64))
    };

    let NormalizeReport { items, skipped } = normalize_entries(&entries, now);

    Ok(LoadedHistory {
        source,
        items,
        skipped,
    })
}
