//! Integration tests for the public cleaning API: input handling, the
//! dispatcher's AI fallback contract, and the JSON coercion boundary.

use futures::future::BoxFuture;
use pastewash::{
    AiError, AiMode, CleanError, CleanOptions, ClipboardPayload, GeminiGenerator, PasteInput,
    TextGenerator, apply_rules, clean_json, clean_paste, clean_paste_with,
};
use serde_json::json;

/// Backend stub that always fails, standing in for a missing credential,
/// an unreachable service, or an absent optional dependency.
struct FailingGenerator;

impl TextGenerator for FailingGenerator {
    fn generate<'a>(&'a self, _prompt: &'a str) -> BoxFuture<'a, Result<String, AiError>> {
        Box::pin(async { Err(AiError::Unavailable("stub backend".to_string())) })
    }
}

/// Backend stub that returns a canned fenced response.
struct CannedGenerator(&'static str);

impl TextGenerator for CannedGenerator {
    fn generate<'a>(&'a self, _prompt: &'a str) -> BoxFuture<'a, Result<String, AiError>> {
        let canned = self.0.to_string();
        Box::pin(async move { Ok(canned) })
    }
}

fn ai_options() -> CleanOptions {
    CleanOptions {
        ai: AiMode::Key("test-key".to_string()),
        ..CleanOptions::default()
    }
}

#[tokio::test]
async fn empty_input_returns_empty_without_running_rules() {
    assert_eq!(clean_paste("", &CleanOptions::default()).await, "");
    assert_eq!(clean_paste("   \n\t  ", &CleanOptions::default()).await, "");
}

#[tokio::test]
async fn clipboard_html_flavor_is_preferred() {
    let payload = ClipboardPayload::new(
        Some(r#"<p style="mso-fareast-language:EN-US">rich</p>"#.to_string()),
        Some("plain".to_string()),
    );
    let cleaned = clean_paste(payload, &CleanOptions::default()).await;
    assert_eq!(cleaned, "<p>rich</p>");
}

#[tokio::test]
async fn plain_text_fallback_is_escaped() {
    let payload = ClipboardPayload::new(None, Some("1 < 2 && \"quoted\"".to_string()));
    let cleaned = clean_paste(payload, &CleanOptions::default()).await;
    assert!(cleaned.starts_with("<p>"));
    assert!(!cleaned.contains("< 2"), "unescaped angle bracket: {cleaned}");
    assert!(cleaned.contains("&lt;"));
    assert!(cleaned.contains("&amp;"));
}

#[tokio::test]
async fn json_string_cleans_and_null_is_rejected() {
    let cleaned = clean_json(&json!("<p>  spaced  </p>"), &CleanOptions::default())
        .await
        .expect("string input is valid");
    assert_eq!(cleaned, "<p>spaced</p>");

    let err = clean_json(&json!(null), &CleanOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CleanError::InvalidInput(_)));

    let err = clean_json(&json!(42), &CleanOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CleanError::InvalidInput(_)));
}

#[tokio::test]
async fn json_clipboard_object_is_extracted() {
    let value = json!({"clipboardData": {"text/plain": "hello"}});
    let cleaned = clean_json(&value, &CleanOptions::default())
        .await
        .expect("clipboard object is valid");
    assert_eq!(cleaned, "<p>hello</p>");
}

#[tokio::test]
async fn ai_failure_falls_back_to_rule_based_output() {
    let html = r#"<div class="notion-callout" data-block-id="x1"><span class="notion-text">note</span></div><script>x()</script>"#;
    let expected = apply_rules(html);

    let cleaned = clean_paste_with(html, &ai_options(), &FailingGenerator).await;

    assert!(!cleaned.is_empty());
    assert_eq!(cleaned, expected, "fallback must equal the rule-based output");
    assert!(!cleaned.contains("<script"));
}

#[tokio::test]
async fn ai_success_unwraps_the_fenced_payload() {
    let generator = CannedGenerator("```html\n<p>model cleaned</p>\n```");
    let cleaned = clean_paste_with("<p cruft>input</p>", &ai_options(), &generator).await;
    assert_eq!(cleaned, "<p>model cleaned</p>");
}

#[tokio::test]
async fn injected_generator_is_ignored_when_ai_not_requested() {
    let cleaned = clean_paste_with(
        "<p>  rule based  </p>",
        &CleanOptions::default(),
        &CannedGenerator("<p>should not appear</p>"),
    )
    .await;
    assert_eq!(cleaned, "<p>rule based</p>");
}

#[tokio::test]
async fn ambient_mode_without_credential_degrades_silently() {
    // FailingGenerator models Unavailable exactly as the ambient resolver
    // reports it; the dispatcher contract is the same for both.
    let options = CleanOptions {
        ai: AiMode::Ambient,
        ..CleanOptions::default()
    };
    let cleaned = clean_paste_with("<p>content</p>", &options, &FailingGenerator).await;
    assert_eq!(cleaned, "<p>content</p>");
}

#[tokio::test]
async fn gemini_service_error_falls_back() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/generate")
        .match_query(mockito::Matcher::Any)
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let generator =
        GeminiGenerator::with_endpoint("test-key", format!("{}/generate", server.url()));
    let html = "<p>  survives  </p>";
    let cleaned = clean_paste_with(html, &ai_options(), &generator).await;

    assert_eq!(cleaned, apply_rules(html));
}

#[tokio::test]
async fn gemini_unparsable_response_falls_back() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/generate")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"candidates": []}).to_string())
        .create_async()
        .await;

    let generator =
        GeminiGenerator::with_endpoint("test-key", format!("{}/generate", server.url()));
    let html = "<p>kept</p>";
    let cleaned = clean_paste_with(html, &ai_options(), &generator).await;

    assert_eq!(cleaned, "<p>kept</p>");
}

#[tokio::test]
async fn gemini_success_returns_the_generated_payload() {
    let body = json!({
        "candidates": [
            {"content": {"parts": [{"text": "```html\n<p>from the model</p>\n```"}]}}
        ]
    });
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/generate")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let generator =
        GeminiGenerator::with_endpoint("test-key", format!("{}/generate", server.url()));
    let cleaned = clean_paste_with("<p>raw</p>", &ai_options(), &generator).await;

    assert_eq!(cleaned, "<p>from the model</p>");
}

#[tokio::test]
async fn typed_paste_input_variants_round_trip() {
    let fragment = PasteInput::from("<p>typed</p>");
    assert_eq!(clean_paste(fragment, &CleanOptions::default()).await, "<p>typed</p>");

    let empty_payload = PasteInput::from(ClipboardPayload::default());
    assert_eq!(clean_paste(empty_payload, &CleanOptions::default()).await, "");
}
