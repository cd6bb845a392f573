/// Recovery page: loads suspended tabs from history and exports them

use crate::bookmarks::bookmark_items;
use crate::chrome::{ChromeBookmarks, ChromeHistory, LocalStorage, SystemClipboard};
use crate::export::copy_items;
use crate::history::{load_history, HistorySource};
use crate::options::{OptionChange, ViewMode};
use crate::state::{Action, AppState, Flash, LoadState};
use crate::storage::{load_options, save_options};
use crate::ui::components::{FlashBanner, GroupedList, ItemTable, OptionsBar};
use chrono::Local;
use patternfly_yew::prelude::{Alert, AlertType, Spinner};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Show a flash message and schedule its removal
fn show_flash(state: &UseReducerHandle<AppState>, flash: Flash) {
    let id = flash.id;
    let delay = flash.duration_ms() as i32;
    state.dispatch(Action::ShowFlash(flash));

    let state = state.clone();
    let dismiss = Closure::once_into_js(move || state.dispatch(Action::DismissFlash(id)));

    if let Some(window) = web_sys::window() {
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(dismiss.unchecked_ref(), delay) {
            log::warn!("Failed to schedule message dismissal: {:?}", e);
        }
    }
}

#[function_component(RecoveryPage)]
pub fn recovery_page() -> Html {
    let state = use_reducer(|| AppState::new(load_options(&LocalStorage)));
    let busy = use_state(|| false);

    // Persist options on every change
    {
        let options = state.options.clone();
        use_effect_with(options, |options| {
            if let Err(e) = save_options(&LocalStorage, options) {
                log::warn!("Failed to save options: {}", e);
            }
            || ()
        });
    }

    // Query history once on mount
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match load_history(&ChromeHistory, &Local::now()).await {
                    Ok(loaded) => state.dispatch(Action::Loaded(loaded)),
                    Err(e) => {
                        log::error!("History search failed: {}", e);
                        state.dispatch(Action::LoadFailed(e.to_string()));
                    }
                }
            });
            || ()
        });
    }

    let on_change = {
        let state = state.clone();
        Callback::from(move |change: OptionChange| {
            state.dispatch(Action::ChangeOption(change));
        })
    };

    let on_copy = {
        let state = state.clone();

        Callback::from(move |_: MouseEvent| {
            let state = state.clone();
            let options = state.options.clone();
            let view = state.view();

            spawn_local(async move {
                let flash = match copy_items(&SystemClipboard, &options, &view).await {
                    Ok(()) => Flash::success("Copied to clipboard!"),
                    Err(e) => {
                        log::error!("Copy failed: {}", e);
                        Flash::from_error(&e)
                    }
                };
                show_flash(&state, flash);
            });
        })
    };

    let on_bookmark = {
        let state = state.clone();
        let busy = busy.clone();

        Callback::from(move |_: MouseEvent| {
            let state = state.clone();
            let busy = busy.clone();
            let sorted = state.view().sorted;

            busy.set(true);

            spawn_local(async move {
                let flash = match bookmark_items(&ChromeBookmarks, &sorted, Local::now().date_naive()).await {
                    Ok(_) => Flash::success("Bookmarks created!"),
                    Err(e) => {
                        log::error!("Bookmarking failed: {}", e);
                        Flash::from_error(&e)
                    }
                };
                busy.set(false);
                show_flash(&state, flash);
            });
        })
    };

    let options = state.options.clone();
    let view = state.view();

    html! {
        <div id="app" data-format={options.format.as_str()}>
            <main>
                <h1>{"The Great Suspender Recovery Tool"}</h1>

                <OptionsBar
                    options={options.clone()}
                    on_change={on_change}
                    on_copy={on_copy}
                    on_bookmark={on_bookmark}
                    busy={*busy}
                />

                if let Some(flash) = state.flash.clone() {
                    <FlashBanner flash={flash} />
                }

                {match &state.load {
                    LoadState::Loading => html! {
                        <div class="loading-text-center">
                            <Spinner />
                            <p class="loading-text">{"Loading..."}</p>
                        </div>
                    },
                    LoadState::Failed(reason) => html! {
                        <Alert r#type={AlertType::Danger} title={"Could not read history"} inline={true}>
                            {reason.clone()}
                        </Alert>
                    },
                    LoadState::Ready { source, skipped } => html! {
                        <>
                            if *source == HistorySource::Mock {
                                <p class="notice">{"Not running as a Chrome extension, showing sample data."}</p>
                            }
                            if *skipped > 0 {
                                <p class="notice">{format!("{} history entries could not be read and were skipped.", skipped)}</p>
                            }
                            if view.sorted.is_empty() {
                                <p class="empty-state">{"No suspended tabs found in history."}</p>
                            } else if options.mode == ViewMode::List {
                                <GroupedList groups={view.grouped.clone()} relative_time={options.relative_time} />
                            } else {
                                <ItemTable items={view.sorted.clone()} options={options.clone()} />
                            }
                        </>
                    },
                }}
            </main>
        </div>
    }
}
