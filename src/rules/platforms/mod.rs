//! Platform-specific cleaning rules
//!
//! One module per authoring tool whose exports are known to carry markup
//! cruft. Each module contributes a single [`PlatformRule`](crate::rules::PlatformRule)
//! to the registry: trigger patterns that fingerprint the tool's export,
//! and a transform that rewrites the fragment. The `general` rule is the
//! always-firing catch-all and must stay last in the registry so its
//! comment/script stripping cannot consume vendor markers before the
//! vendor-specific rules have seen them.

use regex::Regex;
use std::sync::LazyLock;

pub mod apple_pages;
pub mod confluence;
pub mod figma;
pub mod general;
pub mod google_docs;
pub mod microsoft_word;
pub mod notion;
pub mod pdf;

/// `<!--StartFragment-->` / `<!--EndFragment-->` boundary comments that
/// clipboard serializers inject around the copied range
pub(crate) static FRAGMENT_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<!--(?:Start|End)Fragment-->")
        .expect("FRAGMENT_BOUNDARY: hardcoded regex is valid")
});

/// `style="…"` attribute with its value captured
///
/// Leading whitespace is part of the match so that dropping the attribute
/// leaves no stray space inside the tag.
pub(crate) static STYLE_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s*style="([^"]*)""#).expect("STYLE_ATTR: hardcoded regex is valid")
});
