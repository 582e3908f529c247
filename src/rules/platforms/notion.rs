//! Notion export cleanup
//!
//! Notion wraps every block in `notion-*`-classed divs and spans, tags them
//! with `data-block-id`/`data-token-index` attributes, and leaves
//! `<!-- notionvc: … -->` version comments behind. The transform strips all
//! of that while re-emitting any allow-listed inline styling the classed
//! wrappers carried, so user-visible colors and emphasis survive.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::{FRAGMENT_BOUNDARY, STYLE_ATTR};
use crate::rules::style_filter::{SPAN_ALLOWED, StyleFilter};
use crate::rules::PlatformRule;

static VENDOR_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<!-- notionvc:[^>]*-->").expect("VENDOR_COMMENT: hardcoded regex is valid")
});

static CLASSED_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<span[^>]*class="[^"]*notion[^"]*"[^>]*>"#)
        .expect("CLASSED_SPAN: hardcoded regex is valid")
});

static CLASSED_DIV: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<div[^>]*class="[^"]*notion[^"]*"[^>]*>"#)
        .expect("CLASSED_DIV: hardcoded regex is valid")
});

static DATA_BLOCK_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)data-block-id="[^"]*""#).expect("DATA_BLOCK_ID: hardcoded regex is valid")
});

static DATA_TOKEN_INDEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)data-token-index="[^"]*""#)
        .expect("DATA_TOKEN_INDEX: hardcoded regex is valid")
});

static EMPTY_DIV: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<div>\s*</div>").expect("EMPTY_DIV: hardcoded regex is valid")
});

const STYLE_FILTER: StyleFilter = StyleFilter::new(SPAN_ALLOWED);

/// Rewrite a vendor-classed open tag, keeping only allow-listed styling
///
/// The class is always removed; whatever the style filter lets through is
/// re-emitted on a fresh tag. Vendor-styled wrappers never lose their
/// user-visible styling outright.
fn rewrite_classed_open_tag(tag: &str, open_tag: &str) -> String {
    if let Some(caps) = STYLE_ATTR.captures(open_tag) {
        let surviving = STYLE_FILTER.apply(&caps[1]);
        if !surviving.is_empty() {
            return format!("<{tag} style=\"{surviving}\">");
        }
    }
    format!("<{tag}>")
}

fn transform(html: &str) -> String {
    let mut cleaned = VENDOR_COMMENT.replace_all(html, "").into_owned();
    cleaned = FRAGMENT_BOUNDARY.replace_all(&cleaned, "").into_owned();

    cleaned = CLASSED_SPAN
        .replace_all(&cleaned, |caps: &Captures| {
            rewrite_classed_open_tag("span", &caps[0])
        })
        .into_owned();
    cleaned = CLASSED_DIV
        .replace_all(&cleaned, |caps: &Captures| {
            rewrite_classed_open_tag("div", &caps[0])
        })
        .into_owned();

    cleaned = DATA_BLOCK_ID.replace_all(&cleaned, "").into_owned();
    cleaned = DATA_TOKEN_INDEX.replace_all(&cleaned, "").into_owned();

    EMPTY_DIV.replace_all(&cleaned, "").into_owned()
}

pub(crate) fn rule() -> PlatformRule {
    PlatformRule::new(
        "notion",
        &[
            r#"(?i)<div[^>]*class="notion-[^"]*""#,
            r#"(?i)data-block-id="[^"]*""#,
            r#"(?i)<span[^>]*class="notion-[^"]*""#,
            r"(?i)<!-- notionvc:",
        ],
        transform,
    )
}
