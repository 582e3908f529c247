//! Integration tests for Markdown output.

use pastewash::{CleanOptions, OutputFormat, clean_paste, html_to_markdown};

#[tokio::test]
async fn cleaned_fragment_converts_to_markdown() {
    let html = "<h1>Title</h1><p><strong>Bold</strong> and <em>italic</em></p>";
    let markdown = clean_paste(html, &CleanOptions::markdown()).await;

    assert!(markdown.contains("# Title"), "missing heading: {markdown}");
    assert!(markdown.contains("**Bold**"), "missing bold: {markdown}");
    assert!(markdown.contains("*italic*"), "missing italic: {markdown}");
}

#[tokio::test]
async fn platform_cruft_is_cleaned_before_conversion() {
    let html = r#"<meta charset="utf-8"><b id="docs-internal-guid-1"><h2 dir="ltr">Notes</h2><p dir="ltr">First   line</p></b>"#;
    let options = CleanOptions {
        format: OutputFormat::Markdown,
        ..CleanOptions::default()
    };
    let markdown = clean_paste(html, &options).await;

    assert!(markdown.contains("## Notes"));
    assert!(markdown.contains("First line"));
    assert!(!markdown.contains("docs-internal"));
    assert!(!markdown.contains('<'));
}

#[test]
fn full_document_structure_converts() {
    let html = concat!(
        "<h2>Setup</h2>",
        r#"<p>Install via <a href="https://example.com/dl">the site</a>:</p>"#,
        "<ul><li>download</li><li>unpack</li></ul>",
        "<p>Run <code>make install</code></p>",
        "<pre>./configure\nmake</pre>",
        "<p>First<br>Second</p>",
    );
    let markdown = html_to_markdown(html);

    assert!(markdown.starts_with("## Setup"));
    assert!(markdown.contains("[the site](https://example.com/dl)"));
    assert!(markdown.contains("- download\n- unpack"));
    assert!(markdown.contains("`make install`"));
    assert!(markdown.contains("```\n./configure\nmake\n```"));
    assert!(markdown.contains("First\nSecond"));
}

#[test]
fn output_never_contains_tags() {
    let inputs = [
        "<table><tr><td>cell</td></tr></table>",
        "<article><header>head</header><footer>foot</footer></article>",
        "<p>text with <span data-x=\"1\">span</span></p>",
    ];
    for input in inputs {
        let markdown = html_to_markdown(input);
        assert!(
            !markdown.contains('<') && !markdown.contains('>'),
            "tags survived for {input}: {markdown}"
        );
    }
}

#[test]
fn entities_decode_and_newlines_collapse() {
    let markdown = html_to_markdown("<p>Tom &amp; Jerry</p><p></p><p></p><p>after&nbsp;gap</p>");
    assert!(markdown.contains("Tom & Jerry"));
    assert!(markdown.contains("after gap"));
    assert!(!markdown.contains("\n\n\n"), "newline run survived: {markdown:?}");
}
