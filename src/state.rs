/// Application state for the recovery page and the actions that change it
use crate::error::RecoveryError;
use crate::history::{HistorySource, LoadedHistory, NormalizedItem};
use crate::options::{OptionChange, OptionsState};
use crate::view::{derive_view, DerivedView};
use std::rc::Rc;
use uuid::Uuid;
use yew::functional::Reducible;

const SUCCESS_FLASH_MS: u32 = 2_000;
const NOTICE_FLASH_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready { source: HistorySource, skipped: usize },
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    /// A browser API the action needs is missing
    Unavailable,
    Failure,
}

/// A transient message shown after copy / bookmark actions
#[derive(Debug, Clone, PartialEq)]
pub struct Flash {
    pub id: Uuid,
    pub kind: FlashKind,
    pub text: String,
}

impl Flash {
    fn new(kind: FlashKind, text: impl Into<String>) -> Self {
        Flash {
            id: Uuid::new_v4(),
            kind,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(FlashKind::Success, text)
    }

    pub fn from_error(error: &RecoveryError) -> Self {
        let kind = if error.is_unavailable() {
            FlashKind::Unavailable
        } else {
            FlashKind::Failure
        };
        Self::new(kind, error.to_string())
    }

    /// How long the message stays on screen
    pub fn duration_ms(&self) -> u32 {
        match self.kind {
            FlashKind::Success => SUCCESS_FLASH_MS,
            FlashKind::Unavailable | FlashKind::Failure => NOTICE_FLASH_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub load: LoadState,
    pub items: Vec<NormalizedItem>,
    pub options: OptionsState,
    pub flash: Option<Flash>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Loaded(LoadedHistory),
    LoadFailed(String),
    ChangeOption(OptionChange),
    ShowFlash(Flash),
    /// Clear the flash only if it is still the one with this id
    DismissFlash(Uuid),
}

impl AppState {
    pub fn new(options: OptionsState) -> Self {
        AppState {
            load: LoadState::Loading,
            items: Vec::new(),
            options,
            flash: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.load, LoadState::Ready { .. })
    }

    pub fn view(&self) -> DerivedView {
        derive_view(&self.items, &self.options)
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Loaded(loaded) => {
                self.items = loaded.items;
                self.load = LoadState::Ready {
                    source: loaded.source,
                    skipped: loaded.skipped,
                };
            }
            Action::LoadFailed(reason) => self.load = LoadState::Failed(reason),
            Action::ChangeOption(change) => self.options.apply(change),
            Action::ShowFlash(flash) => self.flash = Some(flash),
            Action::DismissFlash(id) => {
                if self.flash.as_ref().is_some_and(|flash| flash.id == id) {
                    self.flash = None;
                }
            }
        }
    }
}

impl Reducible for AppState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SortBy;

    fn loaded(titles: &[&str]) -> LoadedHistory {
        LoadedHistory {
            source: HistorySource::Live,
            items: titles
                .iter()
                .enumerate()
                .map(|(i, title)| NormalizedItem {
                    domain: "a.com".to_string(),
                    title: title.to_string(),
                    url: format!("https://a.com/{}", i),
                    visits: i as u32,
                    visits_text: format!("{} visits", i),
                    date_time: "2024-10-28 10:30:00".to_string(),
                    date: "2024-10-28".to_string(),
                    relative_time: "just now".to_string(),
                    time: i as f64,
                })
                .collect(),
            skipped: 1,
        }
    }

    #[test]
    fn test_starts_loading() {
        let state = AppState::new(OptionsState::default());

        assert_eq!(state.load, LoadState::Loading);
        assert!(!state.is_loaded());
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_loaded() {
        let state = Rc::new(AppState::new(OptionsState::default()));

        let state = state.reduce(Action::Loaded(loaded(&["b", "a"])));

        assert!(state.is_loaded());
        assert_eq!(state.load, LoadState::Ready { source: HistorySource::Live, skipped: 1 });
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn test_load_failed() {
        let mut state = AppState::new(OptionsState::default());

        state.apply(Action::LoadFailed("history.search rejected".to_string()));

        assert_eq!(state.load, LoadState::Failed("history.search rejected".to_string()));
    }

    #[test]
    fn test_option_change_rederives_view() {
        let mut state = AppState::new(OptionsState::default());
        state.apply(Action::Loaded(loaded(&["b", "a", "c"])));

        state.apply(Action::ChangeOption(OptionChange::SortBy(SortBy::Title)));

        let titles: Vec<String> = state.view().sorted.into_iter().map(|i| i.title).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_dismiss_only_matching_flash() {
        let mut state = AppState::new(OptionsState::default());
        let first = Flash::success("Copied to clipboard!");
        let second = Flash::success("Bookmarks created!");

        state.apply(Action::ShowFlash(first.clone()));
        state.apply(Action::ShowFlash(second.clone()));
        state.apply(Action::DismissFlash(first.id));
        assert_eq!(state.flash.as_ref(), Some(&second));

        state.apply(Action::DismissFlash(second.id));
        assert_eq!(state.flash, None);
    }

    #[test]
    fn test_flash_from_error() {
        let unavailable = Flash::from_error(&RecoveryError::BookmarksUnavailable);
        let failure = Flash::from_error(&RecoveryError::Clipboard("denied".to_string()));

        assert_eq!(unavailable.kind, FlashKind::Unavailable);
        assert_eq!(unavailable.text, "Bookmark functionality is only available in a Chrome extension.");
        assert_eq!(unavailable.duration_ms(), 3_000);
        assert_eq!(failure.kind, FlashKind::Failure);
        assert_eq!(Flash::success("ok").duration_ms(), 2_000);
    }
}
