//! Cleaning dispatcher
//!
//! Thin state machine over two paths: `RuleBased` (default) and
//! `AiAssisted` (entered only on explicit request). The AI path degrades
//! to the rule-based pipeline on any failure (missing credential, absent
//! backend, transport error, unparsable response) with a warning as the
//! only observable signal. There is no retry; the fallback is always
//! exactly the rule cascade. A paste is never blocked: the caller always
//! receives a usable cleaned string.

use serde_json::Value;

use crate::ai::{GeminiGenerator, TextGenerator, clean_with_generator};
use crate::error::CleanResult;
use crate::input::PasteInput;
use crate::markdown::html_to_markdown;
use crate::options::{CleanOptions, OutputFormat};
use crate::rules::apply_rules;

/// Which cleaner produced the output, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CleanPath {
    RuleBased,
    AiAssisted,
}

/// Clean a pasted fragment
///
/// Empty input (or input that trims to empty) returns an empty string
/// without invoking any rule. The function is total: AI failures are
/// downgraded internally and the rule-based pipeline cannot fail.
pub async fn clean_paste(input: impl Into<PasteInput>, options: &CleanOptions) -> String {
    let input = input.into();
    if options.ai.is_requested() {
        match GeminiGenerator::from_mode(&options.ai) {
            Ok(generator) => return clean_paste_with(input, options, &generator).await,
            Err(e) => {
                tracing::warn!(error = %e, "AI cleaning failed, falling back to rule-based");
            }
        }
    }
    run(input, options, None).await
}

/// Clean a pasted fragment with an injected AI backend
///
/// The generator is only consulted when `options.ai` requests the AI path;
/// otherwise cleaning is purely rule-based.
pub async fn clean_paste_with(
    input: impl Into<PasteInput>,
    options: &CleanOptions,
    generator: &dyn TextGenerator,
) -> String {
    run(input.into(), options, Some(generator)).await
}

/// Clean a loosely-typed input value (JSON bindings)
///
/// The only error surfaced to callers: a value that is neither a fragment
/// string nor a clipboard payload fails with
/// [`CleanError::InvalidInput`](crate::error::CleanError). AI failures
/// never propagate.
pub async fn clean_json(value: &Value, options: &CleanOptions) -> CleanResult<String> {
    let input = PasteInput::try_from(value)?;
    Ok(clean_paste(input, options).await)
}

async fn run(
    input: PasteInput,
    options: &CleanOptions,
    generator: Option<&dyn TextGenerator>,
) -> String {
    let html = input.into_fragment();
    if html.trim().is_empty() {
        return String::new();
    }

    let (path, cleaned) = match generator {
        Some(backend) if options.ai.is_requested() => {
            match clean_with_generator(&html, backend).await {
                Ok(cleaned) => (CleanPath::AiAssisted, cleaned),
                Err(e) => {
                    tracing::warn!(error = %e, "AI cleaning failed, falling back to rule-based");
                    (CleanPath::RuleBased, apply_rules(&html))
                }
            }
        }
        _ => (CleanPath::RuleBased, apply_rules(&html)),
    };
    tracing::debug!(path = ?path, format = ?options.format, "paste cleaned");

    match options.format {
        OutputFormat::Html => cleaned,
        OutputFormat::Markdown => html_to_markdown(&cleaned),
    }
}
