/// Building blocks of the recovery page

use crate::history::NormalizedItem;
use crate::options::{Format, GroupBy, OptionChange, OptionsState, SortBy, ViewMode};
use crate::state::{Flash, FlashKind};
use crate::view::{metric_header, metric_value, time_label, Group};
use patternfly_yew::prelude::{Alert, AlertType, Button, ButtonVariant};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

fn format_label(format: Format) -> &'static str {
    match format {
        Format::All => "Rich text",
        Format::Text => "Plain text",
    }
}

fn mode_label(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::List => "List",
        ViewMode::Table => "Table",
    }
}

fn group_label(group_by: GroupBy) -> &'static str {
    match group_by {
        GroupBy::Domain => "Domain",
        GroupBy::Date => "Date",
    }
}

fn sort_label(sort_by: SortBy) -> &'static str {
    match sort_by {
        SortBy::Date => "Date",
        SortBy::Title => "Title",
        SortBy::Visits => "Visits",
    }
}

/// onchange handler for a `<select name=...>` bound to one option
fn select_handler(name: &'static str, on_change: Callback<OptionChange>) -> Callback<Event> {
    Callback::from(move |e: Event| {
        if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
            match OptionChange::from_field(name, &select.value()) {
                Ok(change) => on_change.emit(change),
                Err(err) => log::warn!("{}", err),
            }
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct OptionsBarProps {
    pub options: OptionsState,
    pub on_change: Callback<OptionChange>,
    pub on_copy: Callback<MouseEvent>,
    pub on_bookmark: Callback<MouseEvent>,
    #[prop_or(false)]
    pub busy: bool,
}

#[function_component(OptionsBar)]
pub fn options_bar(props: &OptionsBarProps) -> Html {
    let options = &props.options;

    let on_relative = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(OptionChange::RelativeTime(input.checked()));
            }
        })
    };

    html! {
        <div class="options">
            <label>
                {"View as: "}
                <select name="mode" onchange={select_handler("mode", props.on_change.clone())}>
                    {for ViewMode::ALL.iter().map(|mode| html! {
                        <option value={mode.as_str()} selected={*mode == options.mode}>{mode_label(*mode)}</option>
                    })}
                </select>
            </label>
            <label>
                {"Group By: "}
                <select
                    name="groupBy"
                    onchange={select_handler("groupBy", props.on_change.clone())}
                    disabled={!options.grouping_enabled()}
                >
                    {for GroupBy::ALL.iter().map(|group_by| html! {
                        <option value={group_by.as_str()} selected={*group_by == options.group_by}>{group_label(*group_by)}</option>
                    })}
                </select>
            </label>
            <label>
                {"Sort By: "}
                <select name="sortBy" onchange={select_handler("sortBy", props.on_change.clone())}>
                    {for SortBy::ALL.iter().map(|sort_by| html! {
                        <option value={sort_by.as_str()} selected={*sort_by == options.sort_by}>{sort_label(*sort_by)}</option>
                    })}
                </select>
            </label>
            <label>
                {"Copy as: "}
                <select name="format" onchange={select_handler("format", props.on_change.clone())}>
                    {for Format::ALL.iter().map(|format| html! {
                        <option value={format.as_str()} selected={*format == options.format}>{format_label(*format)}</option>
                    })}
                </select>
            </label>
            <label>
                <input type="checkbox" name="relativeTime" checked={options.relative_time} onchange={on_relative} />
                {" Relative Time"}
            </label>
            <Button onclick={props.on_copy.clone()} disabled={props.busy} variant={ButtonVariant::Primary}>
                {"Copy URLs"}
            </Button>
            <Button onclick={props.on_bookmark.clone()} disabled={props.busy} variant={ButtonVariant::Secondary}>
                {"Bookmark All"}
            </Button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FlashBannerProps {
    pub flash: Flash,
}

#[function_component(FlashBanner)]
pub fn flash_banner(props: &FlashBannerProps) -> Html {
    let alert_type = match props.flash.kind {
        FlashKind::Success => AlertType::Success,
        FlashKind::Unavailable => AlertType::Warning,
        FlashKind::Failure => AlertType::Danger,
    };

    html! {
        <div class="message">
            <Alert r#type={alert_type} title={props.flash.text.clone()} inline={true}>
            </Alert>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GroupedListProps {
    pub groups: Vec<Group>,
    pub relative_time: bool,
}

#[function_component(GroupedList)]
pub fn grouped_list(props: &GroupedListProps) -> Html {
    html! {
        <div>
            {for props.groups.iter().map(|group| html! {
                <div key={group.title.clone()} class="group">
                    <h2>{&group.title}</h2>
                    <ul>
                        {for group.items.iter().map(|item| html! {
                            <li>
                                <a href={item.url.clone()} target="_blank" rel="noopener noreferrer">
                                    {&item.title}
                                </a>
                                <span title={item.visits_text.clone()}>{time_label(item, props.relative_time).to_string()}</span>
                            </li>
                        })}
                    </ul>
                </div>
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ItemTableProps {
    pub items: Vec<NormalizedItem>,
    pub options: OptionsState,
}

#[function_component(ItemTable)]
pub fn item_table(props: &ItemTableProps) -> Html {
    html! {
        <table>
            <thead>
                <tr>
                    <th>{"Title"}</th>
                    <th>{"URL"}</th>
                    <th>{metric_header(props.options.sort_by)}</th>
                </tr>
            </thead>
            <tbody>
                {for props.items.iter().map(|item| html! {
                    <tr>
                        <td>{&item.title}</td>
                        <td>
                            <a href={item.url.clone()} target="_blank" rel="noopener noreferrer">{&item.url}</a>
                        </td>
                        <td>{metric_value(item, &props.options)}</td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}
