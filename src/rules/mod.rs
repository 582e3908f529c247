//! Rule-based cleaning pipeline
//!
//! A fixed, ordered registry of platform rules is applied cascade-style to
//! the pasted fragment. Each rule carries trigger patterns that fingerprint
//! one authoring tool's export; when any trigger matches the current
//! working string, the rule's transform rewrites it. Rules are independent
//! rather than mutually exclusive: a fragment that passed through several
//! tools may fire several rules. The `general` catch-all is flagged
//! `always` and closes the cascade with comment/script/style stripping.
//!
//! Everything here is a pure, synchronous string transformation: no I/O,
//! no shared mutable state, and the registry is immutable after first
//! access, so concurrent invocations on different inputs need no locking.
//! Re-running the pipeline on its own output is a no-op.

use regex::{Captures, Regex};
use std::sync::LazyLock;

pub mod platforms;
pub mod style_filter;

/// One authoring tool's cleaning rule
///
/// Trigger patterns decide applicability only; all extraction happens
/// inside the transform. Rules are constructed once at registry
/// initialization and never mutated.
pub struct PlatformRule {
    name: &'static str,
    triggers: Vec<Regex>,
    transform: fn(&str) -> String,
    always: bool,
}

impl PlatformRule {
    pub(crate) fn new(
        name: &'static str,
        trigger_sources: &[&str],
        transform: fn(&str) -> String,
    ) -> Self {
        Self {
            name,
            triggers: compile_triggers(name, trigger_sources),
            transform,
            always: false,
        }
    }

    /// A rule that fires on every fragment regardless of its triggers
    pub(crate) fn always(
        name: &'static str,
        trigger_sources: &[&str],
        transform: fn(&str) -> String,
    ) -> Self {
        Self {
            always: true,
            ..Self::new(name, trigger_sources, transform)
        }
    }

    /// Stable rule identifier
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn applies_to(&self, html: &str) -> bool {
        self.always || self.triggers.iter().any(|pattern| pattern.is_match(html))
    }
}

fn compile_triggers(name: &str, sources: &[&str]) -> Vec<Regex> {
    sources
        .iter()
        .map(|source| {
            Regex::new(source)
                .unwrap_or_else(|e| panic!("{name}: hardcoded trigger pattern is valid: {e}"))
        })
        .collect()
}

/// Process-wide rule registry, built once on first access
///
/// Order is significant: vendor-specific comment handling must run before
/// the catch-all's generic comment stripping, otherwise vendor markers
/// would be consumed before their rule could fire.
static REGISTRY: LazyLock<Vec<PlatformRule>> = LazyLock::new(|| {
    vec![
        platforms::notion::rule(),
        platforms::google_docs::rule(),
        platforms::microsoft_word::rule(),
        platforms::apple_pages::rule(),
        platforms::confluence::rule(),
        platforms::figma::rule(),
        platforms::pdf::rule(),
        platforms::general::rule(),
    ]
});

/// The ordered platform rule registry
#[must_use]
pub fn registry() -> &'static [PlatformRule] {
    &REGISTRY
}

static INTER_TAG_WS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r">\s+<").expect("INTER_TAG_WS: hardcoded regex is valid")
});

static TEXT_CONTENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r">([^<]+)<").expect("TEXT_CONTENT: hardcoded regex is valid")
});

/// Final whitespace normalization pass
///
/// Collapses all whitespace between adjacent tags, then collapses runs of
/// whitespace inside text content to a single space (single interior
/// spaces are preserved), then trims the fragment edges.
fn normalize_whitespace(html: &str) -> String {
    let cleaned = INTER_TAG_WS.replace_all(html, "><");
    let cleaned = TEXT_CONTENT.replace_all(&cleaned, |caps: &Captures| {
        let collapsed = caps[1].split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            caps[0].to_string()
        } else {
            format!(">{collapsed}<")
        }
    });
    cleaned.trim().to_string()
}

/// Apply the full rule cascade to an HTML fragment
///
/// Total: always returns a string, and re-applying to the output changes
/// nothing.
#[must_use]
pub fn apply_rules(html: &str) -> String {
    let mut cleaned = html.to_string();
    for rule in registry() {
        if rule.applies_to(&cleaned) {
            tracing::debug!(rule = rule.name, "applying platform rule");
            cleaned = (rule.transform)(&cleaned);
        }
    }
    normalize_whitespace(&cleaned)
}
