//! HTML to Markdown conversion
//!
//! A second, independent textual pass over a (cleaned) HTML fragment.
//! Conversion is a fixed sequence of one-shot regex substitutions, not a
//! parser and not recursive. Known limitation: nested or overlapping tags
//! of the same kind are not handled correctly (`<b>a<b>b</b></b>` style
//! input produces stray markers); the cleaning pipeline upstream makes
//! such input rare in practice.
//!
//! After substitution every remaining tag is stripped and standard HTML
//! entities are decoded, so the output is guaranteed to contain no HTML
//! tags.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Pre-built heading prefixes, one per level
const HEADING_PREFIXES: [&str; 6] = ["# ", "## ", "### ", "#### ", "##### ", "###### "];

static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<h([1-6])[^>]*>(.*?)</h[1-6]>").expect("HEADING: hardcoded regex is valid")
});

static STRONG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<strong[^>]*>(.*?)</strong>").expect("STRONG: hardcoded regex is valid")
});

static BOLD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<b(?:\s[^>]*)?>(.*?)</b>").expect("BOLD: hardcoded regex is valid")
});

static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<em[^>]*>(.*?)</em>").expect("EMPHASIS: hardcoded regex is valid")
});

static ITALIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<i(?:\s[^>]*)?>(.*?)</i>").expect("ITALIC: hardcoded regex is valid")
});

static ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a[^>]*href="([^"]*)"[^>]*>(.*?)</a>"#)
        .expect("ANCHOR: hardcoded regex is valid")
});

static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<li[^>]*>(.*?)</li>").expect("LIST_ITEM: hardcoded regex is valid")
});

static LIST_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<[uo]l[^>]*>").expect("LIST_OPEN: hardcoded regex is valid")
});

static LIST_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</[uo]l>").expect("LIST_CLOSE: hardcoded regex is valid")
});

static PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<p[^>]*>(.*?)</p>").expect("PARAGRAPH: hardcoded regex is valid")
});

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br[^>]*>").expect("LINE_BREAK: hardcoded regex is valid")
});

static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<code[^>]*>(.*?)</code>").expect("INLINE_CODE: hardcoded regex is valid")
});

static PREFORMATTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<pre[^>]*>(.*?)</pre>").expect("PREFORMATTED: hardcoded regex is valid")
});

static REMAINING_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[^>]+>").expect("REMAINING_TAG: hardcoded regex is valid")
});

static NEWLINE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n{3,}").expect("NEWLINE_RUN: hardcoded regex is valid")
});

/// Convert a cleaned HTML fragment to Markdown
///
/// Pure function; the output contains no HTML tags.
#[must_use]
pub fn html_to_markdown(html: &str) -> String {
    let mut markdown = HEADING
        .replace_all(html, |caps: &Captures| {
            let level: usize = caps[1].parse().unwrap_or(1);
            format!("{}{}\n\n", HEADING_PREFIXES[level - 1], &caps[2])
        })
        .into_owned();

    markdown = STRONG.replace_all(&markdown, "**$1**").into_owned();
    markdown = BOLD.replace_all(&markdown, "**$1**").into_owned();
    markdown = EMPHASIS.replace_all(&markdown, "*$1*").into_owned();
    markdown = ITALIC.replace_all(&markdown, "*$1*").into_owned();

    markdown = ANCHOR.replace_all(&markdown, "[$2]($1)").into_owned();

    markdown = LIST_ITEM.replace_all(&markdown, "- $1\n").into_owned();
    markdown = LIST_OPEN.replace_all(&markdown, "").into_owned();
    markdown = LIST_CLOSE.replace_all(&markdown, "\n").into_owned();

    markdown = PARAGRAPH.replace_all(&markdown, "$1\n\n").into_owned();
    markdown = LINE_BREAK.replace_all(&markdown, "\n").into_owned();

    markdown = INLINE_CODE.replace_all(&markdown, "`$1`").into_owned();
    markdown = PREFORMATTED
        .replace_all(&markdown, "```\n$1\n```\n")
        .into_owned();

    markdown = REMAINING_TAG.replace_all(&markdown, "").into_owned();
    // &nbsp; becomes a plain space, not U+00A0; editors treat the latter as
    // a word character and it breaks Markdown list/heading recognition
    markdown = markdown.replace("&nbsp;", " ");
    markdown = html_escape::decode_html_entities(&markdown).into_owned();
    markdown = NEWLINE_RUN.replace_all(&markdown, "\n\n").into_owned();

    markdown.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_headings_to_atx_prefixes() {
        assert_eq!(html_to_markdown("<h1>Title</h1>"), "# Title");
        assert_eq!(html_to_markdown("<h3 class=\"x\">Deep</h3>"), "### Deep");
        assert_eq!(html_to_markdown("<h6>Last</h6>"), "###### Last");
    }

    #[test]
    fn converts_inline_formatting() {
        let md = html_to_markdown("<p><strong>Bold</strong> and <em>italic</em> and <i>i</i> and <b>b</b></p>");
        assert_eq!(md, "**Bold** and *italic* and *i* and **b**");
    }

    #[test]
    fn converts_anchors_to_links() {
        let md = html_to_markdown(r#"<a href="https://example.com" target="_blank">Example</a>"#);
        assert_eq!(md, "[Example](https://example.com)");
    }

    #[test]
    fn converts_lists_to_dash_items() {
        let md = html_to_markdown("<ul><li>one</li><li>two</li></ul>");
        assert_eq!(md, "- one\n- two");
    }

    #[test]
    fn converts_code_and_preformatted_blocks() {
        assert_eq!(html_to_markdown("<p>run <code>ls -la</code></p>"), "run `ls -la`");
        let md = html_to_markdown("<pre>line 1\nline 2</pre>");
        assert_eq!(md, "```\nline 1\nline 2\n```");
    }

    #[test]
    fn decodes_standard_entities() {
        let md = html_to_markdown("<p>a &amp; b &lt;tag&gt; &quot;q&quot; &#039;s&#039;&nbsp;end</p>");
        assert_eq!(md, "a & b <tag> \"q\" 's' end");
    }

    #[test]
    fn output_contains_no_tags() {
        let md = html_to_markdown("<section><p>text</p><custom-el attr=\"1\">more</custom-el></section>");
        assert!(!md.contains('<') || !md.contains('>'));
        assert!(md.contains("text"));
        assert!(md.contains("more"));
    }

    #[test]
    fn collapses_newline_runs_to_two() {
        let md = html_to_markdown("<p>a</p><p>b</p><p>c</p>");
        assert_eq!(md, "a\n\nb\n\nc");
    }
}
