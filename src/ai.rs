//! AI-assisted cleaning
//!
//! The AI path is an injected capability: anything implementing
//! [`TextGenerator`] can serve as the backend. The default implementation
//! talks to the Gemini `generateContent` REST endpoint. Every failure mode
//! here (missing credential, transport error, unparsable response) maps
//! to an [`AiError`] that the dispatcher catches and downgrades to the
//! rule-based pipeline; nothing in this module is load-bearing for
//! correctness.
//!
//! No timeout is imposed here. Callers needing bounded latency wrap the
//! cleaning call in their own timeout.

use futures::future::BoxFuture;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::error::AiError;
use crate::options::AiMode;

/// Environment variable holding the ambient Gemini credential
pub const CREDENTIAL_ENV: &str = "GEMINI_API_KEY";

const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

/// Capability interface for "generate text from prompt"
///
/// Dyn-compatible so embedders can inject their own backend (or a stub in
/// tests) without touching the dispatcher.
pub trait TextGenerator: Send + Sync {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, AiError>>;
}

/// Default [`TextGenerator`] backed by the Gemini REST API
pub struct GeminiGenerator {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiGenerator {
    /// Generator using the given credential against the production endpoint
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT)
    }

    /// Generator against a custom endpoint (local proxies, test servers)
    #[must_use]
    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Resolve a generator from the caller's AI mode
    ///
    /// `Key` uses the given credential directly; `Ambient` reads
    /// [`CREDENTIAL_ENV`] at call time. Absence of a usable credential is a
    /// normal, handled condition, not a crash.
    pub fn from_mode(mode: &AiMode) -> Result<Self, AiError> {
        match mode {
            AiMode::Disabled => Err(AiError::Unavailable(
                "AI mode was not requested".to_string(),
            )),
            AiMode::Key(key) if !key.is_empty() => Ok(Self::new(key.clone())),
            AiMode::Key(_) => Err(AiError::Unavailable("credential string is empty".to_string())),
            AiMode::Ambient => std::env::var(CREDENTIAL_ENV)
                .ok()
                .filter(|value| !value.is_empty())
                .map(Self::new)
                .ok_or_else(|| {
                    AiError::Unavailable(format!("{CREDENTIAL_ENV} is not set"))
                }),
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl TextGenerator for GeminiGenerator {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, AiError>> {
        Box::pin(async move {
            let request = GenerateRequest {
                contents: vec![RequestContent {
                    parts: vec![RequestPart { text: prompt }],
                }],
            };

            let response = self
                .client
                .post(&self.endpoint)
                .query(&[("key", self.api_key.as_str())])
                .json(&request)
                .send()
                .await?
                .error_for_status()?;

            let body: GenerateResponse = response.json().await?;
            body.candidates
                .into_iter()
                .filter_map(|candidate| candidate.content)
                .flat_map(|content| content.parts)
                .find_map(|part| part.text)
                .ok_or_else(|| {
                    AiError::UnparsableResponse("no generated text in candidates".to_string())
                })
        })
    }
}

/// Whether the ambient credential is present, i.e. `AiMode::Ambient` would
/// resolve a generator
#[must_use]
pub fn ai_available() -> bool {
    std::env::var(CREDENTIAL_ENV).is_ok_and(|value| !value.is_empty())
}

/// Build the cleaning prompt for a raw HTML fragment
pub(crate) fn cleaning_prompt(html: &str) -> String {
    format!(
        "You are a paste cleaning expert. Clean this HTML content by:\n\
         1. Removing platform-specific attributes (Notion, Google Docs, Word, etc.)\n\
         2. Keeping only semantic HTML structure\n\
         3. Preserving formatting but removing inline styles and classes\n\
         4. Removing comments, scripts, and metadata\n\
         5. Normalizing whitespace\n\
         6. Returning only the cleaned HTML without explanations\n\
         \n\
         HTML to clean:\n\
         {html}"
    )
}

static FENCED_HTML: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)```html?\n((?s).*?)\n```").expect("FENCED_HTML: hardcoded regex is valid")
});

static FENCED_ANY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```\n((?s).*?)\n```").expect("FENCED_ANY: hardcoded regex is valid")
});

/// Unwrap a generated response that may be fenced in a Markdown code block
///
/// Models frequently return ```` ```html … ``` ```` despite being told not
/// to; the innermost payload is what the pipeline wants.
pub(crate) fn extract_html_payload(text: &str) -> String {
    let trimmed = text.trim();
    if let Some(caps) = FENCED_HTML
        .captures(trimmed)
        .or_else(|| FENCED_ANY.captures(trimmed))
    {
        return caps[1].trim().to_string();
    }
    trimmed.to_string()
}

/// Run the generator over a fragment and unwrap the cleaned payload
pub(crate) async fn clean_with_generator(
    html: &str,
    generator: &dyn TextGenerator,
) -> Result<String, AiError> {
    let prompt = cleaning_prompt(html);
    let text = generator.generate(&prompt).await?;
    Ok(extract_html_payload(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_extraction_unwraps_html_fences() {
        let wrapped = "```html\n<p>clean</p>\n```";
        assert_eq!(extract_html_payload(wrapped), "<p>clean</p>");
    }

    #[test]
    fn payload_extraction_unwraps_anonymous_fences() {
        let wrapped = "```\n<div>x</div>\n```";
        assert_eq!(extract_html_payload(wrapped), "<div>x</div>");
    }

    #[test]
    fn bare_markup_passes_through_trimmed() {
        assert_eq!(extract_html_payload("  <p>as-is</p>\n"), "<p>as-is</p>");
    }

    #[test]
    fn from_mode_rejects_disabled_and_empty_credentials() {
        assert!(matches!(
            GeminiGenerator::from_mode(&AiMode::Disabled),
            Err(AiError::Unavailable(_))
        ));
        assert!(matches!(
            GeminiGenerator::from_mode(&AiMode::Key(String::new())),
            Err(AiError::Unavailable(_))
        ));
        assert!(GeminiGenerator::from_mode(&AiMode::Key("k".to_string())).is_ok());
    }

    #[test]
    fn prompt_embeds_the_fragment() {
        let prompt = cleaning_prompt("<p>frag</p>");
        assert!(prompt.contains("HTML to clean:"));
        assert!(prompt.ends_with("<p>frag</p>"));
    }
}
