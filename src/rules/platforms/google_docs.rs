//! Google Docs export cleanup
//!
//! Docs exports fingerprint themselves with a `docs-internal-guid-*` id,
//! wrap the whole fragment in a redundant `<b style="font-weight:normal">`
//! tag, inject a `<meta charset>` and fragment boundary comments, and pile
//! platform defaults into every `style` attribute. The transform removes
//! the wrapper and identifiers unconditionally and runs every remaining
//! `style` attribute through the allow-list filter, additionally dropping
//! the brand font stack.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::{FRAGMENT_BOUNDARY, STYLE_ATTR};
use crate::rules::style_filter::{BASE_ALLOWED, StyleFilter};
use crate::rules::PlatformRule;

static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*charset="utf-8"[^>]*>"#)
        .expect("META_CHARSET: hardcoded regex is valid")
});

static INTERNAL_GUID_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)id="docs-internal-[^"]*""#)
        .expect("INTERNAL_GUID_ID: hardcoded regex is valid")
});

static ANY_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s+id="[^"]*""#).expect("ANY_ID: hardcoded regex is valid")
});

static DIR_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s+dir="(?:ltr|rtl)""#).expect("DIR_ATTR: hardcoded regex is valid")
});

static NORMAL_WEIGHT_B: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<b\s[^>]*style="[^"]*font-weight:\s*normal[^"]*"[^>]*>"#)
        .expect("NORMAL_WEIGHT_B: hardcoded regex is valid")
});

// `<b` must be followed by whitespace or `>` so <br>/<body> stay untouched
static OPEN_B: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<b(?:\s[^>]*)?>\s*").expect("OPEN_B: hardcoded regex is valid")
});

static CLOSE_B: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*</b>").expect("CLOSE_B: hardcoded regex is valid")
});

static EMPTY_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s*style="\s*""#).expect("EMPTY_STYLE: hardcoded regex is valid")
});

static EMPTY_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s+id="\s*""#).expect("EMPTY_ID: hardcoded regex is valid")
});

static EMPTY_DIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s+dir="\s*""#).expect("EMPTY_DIR: hardcoded regex is valid")
});

const STYLE_FILTER: StyleFilter =
    StyleFilter::with_removals(BASE_ALLOWED, &["font-family:google sans"]);

fn transform(html: &str) -> String {
    let mut cleaned = FRAGMENT_BOUNDARY.replace_all(html, "").into_owned();
    cleaned = META_CHARSET.replace_all(&cleaned, "").into_owned();

    cleaned = INTERNAL_GUID_ID.replace_all(&cleaned, "").into_owned();
    cleaned = ANY_ID.replace_all(&cleaned, "").into_owned();
    cleaned = DIR_ATTR.replace_all(&cleaned, "").into_owned();

    // The export always wraps the whole fragment in a redundant bold tag;
    // real bold content arrives as font-weight:700 spans, so dropping every
    // <b> wrapper loses nothing.
    cleaned = NORMAL_WEIGHT_B.replace_all(&cleaned, "").into_owned();
    cleaned = OPEN_B.replace_all(&cleaned, "").into_owned();
    cleaned = CLOSE_B.replace_all(&cleaned, "").into_owned();

    cleaned = STYLE_ATTR
        .replace_all(&cleaned, |caps: &Captures| {
            let surviving = STYLE_FILTER.apply(&caps[1]);
            if surviving.is_empty() {
                String::new()
            } else {
                format!(" style=\"{surviving}\"")
            }
        })
        .into_owned();

    cleaned = EMPTY_STYLE.replace_all(&cleaned, "").into_owned();
    cleaned = EMPTY_ID.replace_all(&cleaned, "").into_owned();
    EMPTY_DIR.replace_all(&cleaned, "").into_owned()
}

pub(crate) fn rule() -> PlatformRule {
    PlatformRule::new(
        "google-docs",
        &[
            r#"(?i)id="docs-internal-[^"]*""#,
            r#"(?i)<b[^>]*id="[^"]*"[^>]*>"#,
            r#"(?i)<span[^>]*style="[^"]*font-family:[^"]*Google Sans[^"]*""#,
            r#"(?i)<meta[^>]*charset="utf-8"[^>]*>"#,
            r"(?i)<!--StartFragment-->",
            r"(?i)<!--EndFragment-->",
        ],
        transform,
    )
}
