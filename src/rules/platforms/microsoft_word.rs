//! Microsoft Word export cleanup
//!
//! Word pastes carry Office XML namespace elements (`<o:p>`, `<w:*>`),
//! declared `xmlns:o` attributes, and `[if …]…[endif]` conditional comment
//! blocks that can span many lines. All of it is deleted; none of it wraps
//! user content.

use regex::Regex;
use std::sync::LazyLock;

use crate::rules::PlatformRule;

static PAIRED_O_P: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<o:p>.*?</o:p>").expect("PAIRED_O_P: hardcoded regex is valid")
});

static OPEN_O_P: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<o:p[^>]*>").expect("OPEN_O_P: hardcoded regex is valid")
});

static CLOSE_O_P: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</o:p>").expect("CLOSE_O_P: hardcoded regex is valid")
});

static XMLNS_O: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)xmlns:o="[^"]*""#).expect("XMLNS_O: hardcoded regex is valid")
});

static W_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<w:[^>]*>").expect("W_TAG: hardcoded regex is valid")
});

// (?s) so conditional blocks spanning multiple lines are removed whole
static CONDITIONAL_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--\[if[^\]]*\]>.*?<!\[endif\]-->")
        .expect("CONDITIONAL_BLOCK: hardcoded regex is valid")
});

fn transform(html: &str) -> String {
    let mut cleaned = PAIRED_O_P.replace_all(html, "").into_owned();
    cleaned = OPEN_O_P.replace_all(&cleaned, "").into_owned();
    cleaned = CLOSE_O_P.replace_all(&cleaned, "").into_owned();
    cleaned = XMLNS_O.replace_all(&cleaned, "").into_owned();
    cleaned = W_TAG.replace_all(&cleaned, "").into_owned();
    CONDITIONAL_BLOCK.replace_all(&cleaned, "").into_owned()
}

pub(crate) fn rule() -> PlatformRule {
    PlatformRule::new(
        "microsoft-word",
        &[
            r"(?i)<o:p>",
            r"(?i)</o:p>",
            r#"(?i)xmlns:o="[^"]*""#,
            r"(?i)<w:[^>]*>",
            r"(?i)<!--\[if[^\]]*\]>",
            r"(?i)<!\[endif\]-->",
        ],
        transform,
    )
}
