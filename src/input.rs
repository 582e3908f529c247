//! Paste input extraction
//!
//! A paste arrives either as a raw HTML fragment string or as a clipboard
//! payload carrying `text/html` and/or `text/plain` flavors. Extraction
//! prefers the HTML flavor and falls back to the plain-text one, escaped
//! and wrapped in a paragraph so downstream stages always see markup.
//!
//! Loosely-typed embedders (JSON bindings) coerce values through
//! `TryFrom<&serde_json::Value>`; anything that is neither a string nor a
//! clipboard-shaped object fails with [`CleanError::InvalidInput`].

use serde_json::Value;

use crate::error::CleanError;

/// Clipboard data flavors recognized during extraction
const MIME_HTML: &str = "text/html";
const MIME_PLAIN: &str = "text/plain";

/// Snapshot of a paste event's clipboard data
///
/// Exposes the same `get_data` surface a paste event does, decoupled from
/// any UI framework. Both flavors are optional; an entirely empty payload
/// extracts to an empty fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardPayload {
    html: Option<String>,
    plain: Option<String>,
}

impl ClipboardPayload {
    /// Build a payload from optional `text/html` and `text/plain` flavors
    #[must_use]
    pub fn new(html: Option<String>, plain: Option<String>) -> Self {
        Self { html, plain }
    }

    /// Look up a clipboard flavor by MIME type
    ///
    /// Unknown MIME types return `None`, matching the empty-string behavior
    /// of platform clipboard APIs.
    #[must_use]
    pub fn get_data(&self, mime: &str) -> Option<&str> {
        match mime {
            MIME_HTML => self.html.as_deref(),
            MIME_PLAIN => self.plain.as_deref(),
            _ => None,
        }
    }
}

/// Input accepted by the cleaning entry points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteInput {
    /// A raw HTML fragment
    Fragment(String),
    /// A clipboard payload from a paste event
    Clipboard(ClipboardPayload),
}

impl PasteInput {
    /// Resolve the input to the HTML fragment the pipeline will operate on
    ///
    /// Clipboard payloads prefer `text/html`; a plain-text-only payload is
    /// escaped and wrapped in `<p>…</p>`. An empty payload resolves to an
    /// empty fragment.
    #[must_use]
    pub(crate) fn into_fragment(self) -> String {
        match self {
            PasteInput::Fragment(html) => html,
            PasteInput::Clipboard(payload) => {
                if let Some(html) = payload.get_data(MIME_HTML)
                    && !html.is_empty()
                {
                    return html.to_string();
                }
                match payload.get_data(MIME_PLAIN) {
                    Some(text) if !text.is_empty() => {
                        format!("<p>{}</p>", html_escape::encode_safe(text))
                    }
                    _ => String::new(),
                }
            }
        }
    }
}

impl From<&str> for PasteInput {
    fn from(html: &str) -> Self {
        PasteInput::Fragment(html.to_string())
    }
}

impl From<String> for PasteInput {
    fn from(html: String) -> Self {
        PasteInput::Fragment(html)
    }
}

impl From<ClipboardPayload> for PasteInput {
    fn from(payload: ClipboardPayload) -> Self {
        PasteInput::Clipboard(payload)
    }
}

impl TryFrom<&Value> for PasteInput {
    type Error = CleanError;

    /// Coerce a loose JSON value into a paste input
    ///
    /// Strings become fragments. Objects with a `clipboardData` member (its
    /// keys MIME types, its values strings) become clipboard payloads.
    /// Everything else is an invalid input kind.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(html) => Ok(PasteInput::Fragment(html.clone())),
            Value::Object(map) => match map.get("clipboardData") {
                Some(Value::Object(data)) => {
                    let flavor = |mime: &str| {
                        data.get(mime)
                            .and_then(Value::as_str)
                            .map(str::to_string)
                    };
                    Ok(PasteInput::Clipboard(ClipboardPayload::new(
                        flavor(MIME_HTML),
                        flavor(MIME_PLAIN),
                    )))
                }
                _ => Err(CleanError::InvalidInput(
                    "object without clipboardData".to_string(),
                )),
            },
            other => Err(CleanError::InvalidInput(json_kind(other).to_string())),
        }
    }
}

/// Human-readable kind name for error messages
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
