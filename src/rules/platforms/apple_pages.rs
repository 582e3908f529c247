//! Apple Pages export cleanup
//!
//! Pages stamps a `Generator` meta element and sprinkles `Apple-*` classes
//! and `data-apple-*` attributes through the fragment.

use regex::Regex;
use std::sync::LazyLock;

use crate::rules::PlatformRule;

static GENERATOR_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*name="Generator"[^>]*content="Pages[^"]*"[^>]*>"#)
        .expect("GENERATOR_META: hardcoded regex is valid")
});

static APPLE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)class="[^"]*Apple-[^"]*""#).expect("APPLE_CLASS: hardcoded regex is valid")
});

static APPLE_DATA_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)data-apple-[^"]*="[^"]*""#)
        .expect("APPLE_DATA_ATTR: hardcoded regex is valid")
});

fn transform(html: &str) -> String {
    let mut cleaned = GENERATOR_META.replace_all(html, "").into_owned();
    cleaned = APPLE_CLASS.replace_all(&cleaned, "").into_owned();
    APPLE_DATA_ATTR.replace_all(&cleaned, "").into_owned()
}

pub(crate) fn rule() -> PlatformRule {
    PlatformRule::new(
        "apple-pages",
        &[
            r#"(?i)<meta[^>]*name="Generator"[^>]*content="Pages[^"]*""#,
            r#"(?i)class="[^"]*Apple-[^"]*""#,
            r#"(?i)data-apple-[^"]*="[^"]*""#,
        ],
        transform,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_pages_metadata_and_vendor_attributes() {
        let html = r#"<meta name="Generator" content="Pages 13.0"><p class="Apple-interchange-newline" data-apple-notes-id="42">text</p>"#;
        let out = transform(html);
        assert!(!out.contains("Generator"));
        assert!(!out.contains("Apple-"));
        assert!(!out.contains("data-apple-"));
        assert!(out.contains("text"));
    }
}
