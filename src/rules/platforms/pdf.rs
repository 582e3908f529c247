//! PDF-sourced paste cleanup
//!
//! PDF viewers and converters announce themselves through
//! `type="application/pdf"` link elements and `PDF*` meta declarations.
//! Both are deleted; they never carry content.

use regex::Regex;
use std::sync::LazyLock;

use crate::rules::PlatformRule;

static PDF_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<link[^>]*type="application/pdf[^"]*"[^>]*>"#)
        .expect("PDF_LINK: hardcoded regex is valid")
});

static PDF_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*name="PDF[^"]*"[^>]*>"#)
        .expect("PDF_META: hardcoded regex is valid")
});

fn transform(html: &str) -> String {
    let cleaned = PDF_LINK.replace_all(html, "").into_owned();
    PDF_META.replace_all(&cleaned, "").into_owned()
}

pub(crate) fn rule() -> PlatformRule {
    PlatformRule::new(
        "pdf",
        &[
            r#"(?i)<link[^>]*type="application/pdf[^"]*""#,
            r#"(?i)<meta[^>]*name="PDF[^"]*""#,
        ],
        transform,
    )
}
