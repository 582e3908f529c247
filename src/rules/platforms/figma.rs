//! Figma export cleanup
//!
//! Copied Figma frames arrive as SVG markup tagged with `data-figma-*`
//! attributes and `figma`-bearing class names. Only the vendor tagging is
//! removed; the drawing content itself is left untouched.

use regex::Regex;
use std::sync::LazyLock;

use crate::rules::PlatformRule;

static VENDOR_DATA_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)data-figma[^"]*="[^"]*""#)
        .expect("VENDOR_DATA_ATTR: hardcoded regex is valid")
});

static VENDOR_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)class="[^"]*figma[^"]*""#).expect("VENDOR_CLASS: hardcoded regex is valid")
});

fn transform(html: &str) -> String {
    let cleaned = VENDOR_DATA_ATTR.replace_all(html, "").into_owned();
    VENDOR_CLASS.replace_all(&cleaned, "").into_owned()
}

pub(crate) fn rule() -> PlatformRule {
    PlatformRule::new(
        "figma",
        &[
            r#"(?i)<svg[^>]*data-figma[^"]*""#,
            r#"(?i)class="[^"]*figma[^"]*""#,
        ],
        transform,
    )
}
