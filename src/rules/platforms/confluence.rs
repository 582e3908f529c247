//! Confluence export cleanup
//!
//! Confluence storage format uses two custom namespaces: `ac:` for macros
//! and structured content, `ri:` for resource identifiers. These elements
//! wrap metadata rather than user text, so paired elements are removed
//! together with their content. Page-link classes are stripped as well.

use regex::Regex;
use std::sync::LazyLock;

use crate::rules::PlatformRule;

static PAIRED_AC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<ac:[^>]*>.*?</ac:[^>]*>").expect("PAIRED_AC: hardcoded regex is valid")
});

static PAIRED_RI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<ri:[^>]*>.*?</ri:[^>]*>").expect("PAIRED_RI: hardcoded regex is valid")
});

// Nested same-namespace elements leave dangling tags after the lazy paired
// match; sweep those up separately.
static STRAY_AC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?ac:[^>]*>").expect("STRAY_AC: hardcoded regex is valid")
});

static STRAY_RI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?ri:[^>]*>").expect("STRAY_RI: hardcoded regex is valid")
});

static PAGE_LINK_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)class="confluence-[^"]*""#)
        .expect("PAGE_LINK_CLASS: hardcoded regex is valid")
});

fn transform(html: &str) -> String {
    let mut cleaned = PAIRED_AC.replace_all(html, "").into_owned();
    cleaned = PAIRED_RI.replace_all(&cleaned, "").into_owned();
    cleaned = STRAY_AC.replace_all(&cleaned, "").into_owned();
    cleaned = STRAY_RI.replace_all(&cleaned, "").into_owned();
    PAGE_LINK_CLASS.replace_all(&cleaned, "").into_owned()
}

pub(crate) fn rule() -> PlatformRule {
    PlatformRule::new(
        "confluence",
        &[
            r"(?i)<ac:[^>]*>",
            r"(?i)<ri:[^>]*>",
            r#"(?i)class="confluence-[^"]*""#,
        ],
        transform,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_namespaced_elements_with_their_content() {
        let html = r#"<p>before</p><ac:structured-macro ac:name="info"><ac:rich-text-body>macro metadata</ac:rich-text-body></ac:structured-macro><p>after</p>"#;
        let out = transform(html);
        assert!(!out.contains("ac:"));
        assert!(!out.contains("macro metadata"));
        assert!(out.contains("<p>before</p>"));
        assert!(out.contains("<p>after</p>"));
    }

    #[test]
    fn removes_resource_identifiers_spanning_lines() {
        let html = "<ri:page\n ri:content-title=\"Home\"></ri:page><span>kept</span>";
        let out = transform(html);
        assert!(!out.contains("ri:"));
        assert!(out.contains("<span>kept</span>"));
    }

    #[test]
    fn strips_page_link_classes() {
        let html = r#"<a class="confluence-link" href="/x">link</a>"#;
        let out = transform(html);
        assert!(!out.contains("confluence-link"));
        assert!(out.contains("link</a>"));
    }
}
