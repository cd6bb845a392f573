/// Clipboard export of recovered items
use crate::error::RecoveryError;
use crate::history::NormalizedItem;
use crate::options::{Format, OptionsState};
use crate::view::{DerivedView, Group};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MimeType {
    TextPlain,
    TextHtml,
}

impl MimeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MimeType::TextPlain => "text/plain",
            MimeType::TextHtml => "text/html",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClipboardPayload {
    pub data: String,
    pub mime_type: MimeType,
    /// `text/plain` flavor written alongside `data`
    pub plain_text: String,
}

/// Destination for copied data (the system clipboard in the extension)
#[allow(async_fn_in_trait)]
pub trait ClipboardSink {
    async fn write(&self, payload: &ClipboardPayload) -> Result<(), RecoveryError>;
}

/// Title and URL of each item, separated by blank lines
pub fn to_plain_text(sorted: &[NormalizedItem]) -> String {
    sorted
        .iter()
        .map(|item| format!("{}\n{}", item.title, item.url))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// One heading and link list per group
pub fn to_html(grouped: &[Group]) -> String {
    grouped
        .iter()
        .map(|group| {
            let links: String = group
                .items
                .iter()
                .map(|item| {
                    format!(
                        r#"<li><a href="{}">{}</a></li>"#,
                        escape_html(&item.url),
                        escape_html(&item.title)
                    )
                })
                .collect();
            format!("<h2>{}</h2>\n<ul>{}</ul>", escape_html(&group.title), links)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn clipboard_payload(options: &OptionsState, view: &DerivedView) -> ClipboardPayload {
    let plain_text = to_plain_text(&view.sorted);

    match options.format {
        Format::Text => ClipboardPayload {
            data: plain_text.clone(),
            mime_type: MimeType::TextPlain,
            plain_text,
        },
        Format::All => ClipboardPayload {
            data: to_html(&view.grouped),
            mime_type: MimeType::TextHtml,
            plain_text,
        },
    }
}

/// Copy the current view in the selected format
pub async fn copy_items<C: ClipboardSink>(
    sink: &C,
    options: &OptionsState,
    view: &DerivedView,
) -> Result<(), RecoveryError> {
    let payload = clipboard_payload(options, view);
    sink.write(&payload).await?;
    log::info!("Copied {} items as {}", view.sorted.len(), payload.mime_type.as_str());
    Ok(())
}
