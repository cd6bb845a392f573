/// Persistence of view options in a synchronous key-value store
/// (window.localStorage in the extension)

use crate::error::RecoveryError;
use crate::options::OptionsState;

/// Key the options blob is stored under
pub const OPTIONS_KEY: &str = "options";

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, RecoveryError>;

    fn set(&self, key: &str, value: &str) -> Result<(), RecoveryError>;
}

/// Read the saved options, falling back to defaults when absent or unreadable
pub fn load_options<S: PreferenceStore>(store: &S) -> OptionsState {
    let saved = match store.get(OPTIONS_KEY) {
        Ok(saved) => saved,
        Err(e) => {
            log::warn!("Could not read saved options: {}", e);
            None
        }
    };

    match saved {
        Some(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring unparsable saved options: {}", e);
            OptionsState::default()
        }),
        None => OptionsState::default(),
    }
}

pub fn save_options<S: PreferenceStore>(store: &S, options: &OptionsState) -> Result<(), RecoveryError> {
    let json = serde_json::to_string(options)
        .map_err(|e| RecoveryError::Preferences(format!("Failed to serialize options: {}", e)))?;

    store.set(OPTIONS_KEY, &json)
}
