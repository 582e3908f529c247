//! Generic catch-all cleanup
//!
//! Always runs, and always last. Handles whatever the platform-specific
//! rules left behind: vendor-prefixed style declarations, HTML comments of
//! any payload, `<script>`/`<style>` blocks, and emptied attributes. This
//! rule is also the security boundary: its stripping must not be
//! skippable, so the registry marks it `always`.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::STYLE_ATTR;
use crate::rules::style_filter::{GENERAL_ALLOWED, StyleFilter};
use crate::rules::PlatformRule;

static COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?-->").expect("COMMENT: hardcoded regex is valid")
});

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("SCRIPT_BLOCK: hardcoded regex is valid")
});

static STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("STYLE_BLOCK: hardcoded regex is valid")
});

static EMPTY_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)class="\s*""#).expect("EMPTY_CLASS: hardcoded regex is valid")
});

static EMPTY_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)id="\s*""#).expect("EMPTY_ID: hardcoded regex is valid")
});

static EMPTY_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)style="\s*""#).expect("EMPTY_STYLE: hardcoded regex is valid")
});

static INTER_TAG_WS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r">\s+<").expect("INTER_TAG_WS: hardcoded regex is valid")
});

const STYLE_FILTER: StyleFilter = StyleFilter::new(GENERAL_ALLOWED);

fn transform(html: &str) -> String {
    let mut cleaned = STYLE_ATTR
        .replace_all(html, |caps: &Captures| {
            let surviving = STYLE_FILTER.apply(&caps[1]);
            if surviving.is_empty() {
                String::new()
            } else {
                format!(" style=\"{surviving}\"")
            }
        })
        .into_owned();

    cleaned = COMMENT.replace_all(&cleaned, "").into_owned();
    cleaned = SCRIPT_BLOCK.replace_all(&cleaned, "").into_owned();
    cleaned = STYLE_BLOCK.replace_all(&cleaned, "").into_owned();

    cleaned = EMPTY_CLASS.replace_all(&cleaned, "").into_owned();
    cleaned = EMPTY_ID.replace_all(&cleaned, "").into_owned();
    cleaned = EMPTY_STYLE.replace_all(&cleaned, "").into_owned();

    INTER_TAG_WS.replace_all(&cleaned, "><").trim().to_string()
}

pub(crate) fn rule() -> PlatformRule {
    PlatformRule::always(
        "general",
        &[
            r#"(?i)style="[^"]*mso-[^"]*""#,
            r#"(?i)style="[^"]*webkit-[^"]*""#,
            r"(?s)<!--.*?-->",
            r"(?is)<script[^>]*>.*?</script>",
            r"(?is)<style[^>]*>.*?</style>",
        ],
        transform,
    )
}
