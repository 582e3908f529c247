//! pastewash: rule-based sanitizer for pasted HTML fragments
//!
//! Pasting from word processors, note apps, wikis, and design tools drags
//! platform markup cruft into the editor. This crate reduces such
//! fragments to a minimal, editor-safe HTML or Markdown representation:
//! an ordered registry of platform-specific rules rewrites the fragment,
//! a style allow-list filter keeps only semantic inline styling, and a
//! final pass normalizes whitespace. An optional AI-assisted path can
//! substitute for the rule cascade and silently falls back to it on any
//! failure.
//!
//! ```rust
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! use pastewash::{CleanOptions, clean_paste};
//!
//! let html = r#"<meta charset="utf-8"><b id="docs-internal-guid-1"><p dir="ltr">Hi</p></b>"#;
//! let cleaned = clean_paste(html, &CleanOptions::default()).await;
//! assert_eq!(cleaned, "<p>Hi</p>");
//! # });
//! ```
//!
//! Markup is treated as text: the rules are surface-level pattern
//! rewrites, deliberately not a DOM parser, so malformed fragments pass
//! through without structural "fixes".

pub mod ai;
pub mod clean;
pub mod error;
pub mod input;
pub mod markdown;
pub mod options;
pub mod rules;

pub use ai::{GeminiGenerator, TextGenerator, ai_available};
pub use clean::{clean_json, clean_paste, clean_paste_with};
pub use error::{AiError, CleanError, CleanResult};
pub use input::{ClipboardPayload, PasteInput};
pub use markdown::html_to_markdown;
pub use options::{AiMode, CleanOptions, OutputFormat};
pub use rules::{PlatformRule, apply_rules, registry};
