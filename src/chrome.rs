/// Browser API bridge: chrome.history, chrome.bookmarks, clipboard, localStorage
use crate::bookmarks::BookmarkProvider;
use crate::error::RecoveryError;
use crate::export::{ClipboardPayload, ClipboardSink};
use crate::history::{HistoryProvider, HistoryQuery, RawHistoryEntry};
use crate::storage::PreferenceStore;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/recovery.js")]
extern "C" {
    fn hasHistoryApi() -> bool;

    fn hasBookmarksApi() -> bool;

    #[wasm_bindgen(catch)]
    async fn searchHistory(query: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn createBookmark(details: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn copyToClipboard(data: &str, mime_type: &str, plain_text: &str) -> Result<(), JsValue>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateDetails<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<&'a str>,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
}

#[derive(Deserialize)]
struct BookmarkNode {
    id: String,
}

fn bridge_error(e: JsValue) -> RecoveryError {
    RecoveryError::Bridge(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// chrome.history
pub struct ChromeHistory;

impl HistoryProvider for ChromeHistory {
    fn is_available(&self) -> bool {
        hasHistoryApi()
    }

    async fn search(&self, query: &HistoryQuery) -> Result<Vec<RawHistoryEntry>, RecoveryError> {
        let query_js = serde_wasm_bindgen::to_value(query)
            .map_err(|e| RecoveryError::Bridge(format!("Failed to serialize query: {:?}", e)))?;

        let results = searchHistory(query_js).await.map_err(bridge_error)?;

        serde_wasm_bindgen::from_value(results)
            .map_err(|e| RecoveryError::Bridge(format!("Failed to parse history: {:?}", e)))
    }
}

/// chrome.bookmarks
pub struct ChromeBookmarks;

impl ChromeBookmarks {
    async fn create(&self, details: CreateDetails<'_>) -> Result<String, RecoveryError> {
        let details_js = serde_wasm_bindgen::to_value(&details)
            .map_err(|e| RecoveryError::Bridge(format!("Failed to serialize bookmark: {:?}", e)))?;

        let node = createBookmark(details_js).await.map_err(bridge_error)?;

        serde_wasm_bindgen::from_value::<BookmarkNode>(node)
            .map(|node| node.id)
            .map_err(|e| RecoveryError::Bridge(format!("Failed to parse bookmark: {:?}", e)))
    }
}

impl BookmarkProvider for ChromeBookmarks {
    fn is_available(&self) -> bool {
        hasBookmarksApi()
    }

    async fn create_folder(&self, title: &str) -> Result<String, RecoveryError> {
        self.create(CreateDetails {
            parent_id: None,
            title,
            url: None,
        })
        .await
    }

    async fn create_bookmark(&self, parent_id: &str, title: &str, url: &str) -> Result<String, RecoveryError> {
        self.create(CreateDetails {
            parent_id: Some(parent_id),
            title,
            url: Some(url),
        })
        .await
    }
}

/// System clipboard via a copy event, so the MIME type is honored
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    async fn write(&self, payload: &ClipboardPayload) -> Result<(), RecoveryError> {
        copyToClipboard(&payload.data, payload.mime_type.as_str(), &payload.plain_text)
            .await
            .map_err(|e| RecoveryError::Clipboard(format!("{:?}", e)))
    }
}

/// window.localStorage
pub struct LocalStorage;

impl LocalStorage {
    fn storage(&self) -> Result<web_sys::Storage, RecoveryError> {
        web_sys::window()
            .ok_or_else(|| RecoveryError::Preferences("No window".to_string()))?
            .local_storage()
            .map_err(|e| RecoveryError::Preferences(format!("{:?}", e)))?
            .ok_or_else(|| RecoveryError::Preferences("localStorage unavailable".to_string()))
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, RecoveryError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| RecoveryError::Preferences(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), RecoveryError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| RecoveryError::Preferences(format!("{:?}", e)))
    }
}
