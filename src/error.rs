//! Error types for paste cleaning operations
//!
//! The rule-based pipeline is total and cannot fail; the only fallible
//! boundaries are input-shape coercion (surfaced to the caller) and the
//! optional AI call (caught internally and downgraded to the rule-based
//! path, never surfaced).

use thiserror::Error;

/// Result type alias for the public cleaning entry points
pub type CleanResult<T> = Result<T, CleanError>;

/// Errors surfaced to callers of the cleaning API
#[derive(Debug, Error)]
pub enum CleanError {
    /// Input value was neither an HTML fragment string nor a clipboard payload
    #[error("invalid input: expected an HTML fragment string or a clipboard payload, got {0}")]
    InvalidInput(String),
}

/// Errors internal to the AI-assisted path
///
/// Every variant triggers the same handling in the dispatcher: a warning is
/// logged and the cleaner falls back to the rule-based pipeline. None of
/// these propagate to the caller.
#[derive(Debug, Error)]
pub enum AiError {
    /// No credential could be resolved for the AI backend
    #[error("AI cleaning unavailable: {0}")]
    Unavailable(String),

    /// Transport or service-level failure from the AI backend
    #[error("AI request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Response arrived but carried no usable generated text
    #[error("AI response could not be parsed: {0}")]
    UnparsableResponse(String),
}
