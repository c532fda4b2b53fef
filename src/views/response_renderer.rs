//! # Response Renderer
//!
//! Turns an [`Outcome`] into display text. Pure: no I/O, the caller prints
//! the returned string.

use super::ansi_escape_codes::Style;
use crate::models::{Outcome, RequestSpec, ResponseStatus, StatusBucket};
use crate::services::mask_token;

/// Raw (non-JSON) bodies are cut to this many characters
pub const BODY_CHAR_LIMIT: usize = 2000;

/// Placeholder shown instead of an empty body
pub const EMPTY_BODY_PLACEHOLDER: &str = "(empty response)";

const RULE_WIDTH: usize = 60;

/// The body as it will be displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodySection {
    Empty,
    Json(String),
    Text {
        text: String,
        /// Character count of the original body when it was cut
        truncated_from: Option<usize>,
    },
}

impl BodySection {
    /// The displayed text of the section, without styling
    pub fn text(&self) -> &str {
        match self {
            BodySection::Empty => EMPTY_BODY_PLACEHOLDER,
            BodySection::Json(text) | BodySection::Text { text, .. } => text,
        }
    }
}

/// Classify and format a response body: pretty JSON when it parses,
/// otherwise raw text capped at [`BODY_CHAR_LIMIT`] characters
pub fn format_body(body: &str) -> BodySection {
    if body.is_empty() {
        return BodySection::Empty;
    }

    if let Some(pretty) = pretty_json(body) {
        return BodySection::Json(pretty);
    }

    let total = body.chars().count();
    if total > BODY_CHAR_LIMIT {
        BodySection::Text {
            text: body.chars().take(BODY_CHAR_LIMIT).collect(),
            truncated_from: Some(total),
        }
    } else {
        BodySection::Text {
            text: body.to_string(),
            truncated_from: None,
        }
    }
}

/// Re-indent JSON with two spaces, keeping the original key order and number text
fn pretty_json(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    serde_json::to_string_pretty(&value).ok()
}

/// Renders outcomes and outgoing requests for the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseRenderer {
    style: Style,
}

impl ResponseRenderer {
    pub fn new(style: Style) -> Self {
        Self { style }
    }

    /// Renderer that never emits escape codes
    pub fn plain() -> Self {
        Self::new(Style::plain())
    }

    pub fn style(&self) -> Style {
        self.style
    }

    fn rule(&self) -> String {
        self.style.bold(&"=".repeat(RULE_WIDTH))
    }

    fn status_line(&self, outcome: &Outcome) -> String {
        let text = match outcome {
            Outcome::TransportError { message } => format!("Failed - {message}"),
            _ => outcome
                .status()
                .map(|code| ResponseStatus::new(code).as_string())
                .unwrap_or_default(),
        };
        let painted = match outcome.bucket() {
            StatusBucket::Success => self.style.green(&text),
            StatusBucket::Caution => self.style.yellow(&text),
            StatusBucket::Failure => self.style.red(&text),
        };
        format!("{} {}", self.style.bold("Status:"), painted)
    }

    /// Render an outcome. Headers appear only when `show_headers` is set.
    pub fn render(&self, outcome: &Outcome, show_headers: bool) -> String {
        let mut lines = vec![self.rule(), self.status_line(outcome), self.rule()];

        let headers = outcome.headers();
        if show_headers && !headers.is_empty() {
            lines.push(String::new());
            lines.push(self.style.bold("Response Headers:"));
            for (name, value) in headers {
                lines.push(format!("  {}: {}", self.style.cyan(name), value));
            }
        }

        lines.push(String::new());
        lines.push(self.style.bold("Response Body:"));
        let mut truncation_note = None;
        match format_body(outcome.body()) {
            BodySection::Empty => lines.push(self.style.yellow(EMPTY_BODY_PLACEHOLDER)),
            BodySection::Json(text) => lines.push(text),
            BodySection::Text {
                text,
                truncated_from,
            } => {
                lines.push(text);
                truncation_note = truncated_from.map(|total| {
                    self.style
                        .yellow(&format!("... (truncated, {total} characters total)"))
                });
            }
        }

        // Truncation note goes after the blank line, outside the body section
        lines.push(String::new());
        lines.extend(truncation_note);
        lines.push(self.rule());
        lines.join("\n")
    }

    /// `→ METHOD url`, printed before each request
    pub fn request_line(&self, spec: &RequestSpec) -> String {
        self.style
            .blue(&format!("→ {} {}", spec.method(), spec.url()))
    }

    /// Outgoing headers and body for verbose output, with the token masked
    pub fn request_details(&self, spec: &RequestSpec) -> String {
        let mut lines = Vec::new();
        for (name, value) in spec.effective_headers() {
            let shown = match (name.as_str(), spec.token()) {
                ("Authorization", Some(token)) if value == format!("Bearer {token}") => {
                    format!("Bearer {}", mask_token(token))
                }
                _ => value,
            };
            lines.push(format!("  {}: {}", self.style.cyan(&name), shown));
        }
        if let Some(body) = spec.body_text() {
            lines.push(body);
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Method;

    fn ok(body: &str) -> Outcome {
        Outcome::from_response(200, vec![], body.to_string())
    }

    /// Text between the "Response Body:" heading and the blank line before the closing rule
    fn body_section(rendered: &str) -> String {
        let after = rendered
            .split("Response Body:\n")
            .nth(1)
            .expect("body heading");
        let end = after.rfind("\n\n").expect("closing rule");
        after[..end].to_string()
    }

    #[test]
    fn render_should_pretty_print_json_preserving_key_order() {
        let rendered = ResponseRenderer::plain().render(&ok(r#"{"a":1,"b":[1,2]}"#), true);
        assert_eq!(
            body_section(&rendered),
            "{\n  \"a\": 1,\n  \"b\": [\n    1,\n    2\n  ]\n}"
        );
    }

    #[test]
    fn render_should_not_sort_keys() {
        let rendered = ResponseRenderer::plain().render(&ok(r#"{"z":1,"a":2}"#), true);
        let body = body_section(&rendered);
        assert!(body.find("\"z\"").unwrap() < body.find("\"a\"").unwrap());
    }

    #[test]
    fn render_should_truncate_raw_text_to_2000_characters() {
        let rendered = ResponseRenderer::plain().render(&ok(&"x".repeat(3000)), false);
        let section = match format_body(&"x".repeat(3000)) {
            BodySection::Text {
                text,
                truncated_from,
            } => {
                assert_eq!(truncated_from, Some(3000));
                text
            }
            other => panic!("Expected text section, got {other:?}"),
        };
        assert_eq!(section.chars().count(), 2000);
        assert!(rendered.contains(&section));
        assert!(!rendered.contains(&"x".repeat(2001)));
        assert!(rendered.contains("(truncated, 3000 characters total)"));
    }

    #[test]
    fn truncated_body_section_should_hold_exactly_2000_characters() {
        let rendered = ResponseRenderer::plain().render(&ok(&"x".repeat(3000)), true);
        let body = body_section(&rendered);
        assert_eq!(body.chars().count(), 2000);
        assert!(body.chars().all(|c| c == 'x'));
        assert!(rendered.ends_with(&format!(
            "\n\n... (truncated, 3000 characters total)\n{}",
            "=".repeat(60)
        )));
    }

    #[test]
    fn json_should_keep_oversized_integers_exact() {
        let section = format_body(r#"{"id":12345678901234567890123,"ratio":0.1}"#);
        assert_eq!(
            section,
            BodySection::Json("{\n  \"id\": 12345678901234567890123,\n  \"ratio\": 0.1\n}".to_string())
        );
    }

    #[test]
    fn truncation_should_count_characters_not_bytes() {
        let body = "é".repeat(2500);
        let section = format_body(&body);
        assert_eq!(section.text().chars().count(), 2000);
        assert_eq!(section.text().len(), 4000);
    }

    #[test]
    fn short_raw_text_should_be_shown_verbatim() {
        let section = format_body("<html>hello</html>");
        assert_eq!(
            section,
            BodySection::Text {
                text: "<html>hello</html>".to_string(),
                truncated_from: None
            }
        );
    }

    #[test]
    fn malformed_json_should_fall_back_to_raw_text() {
        let section = format_body(r#"{"a": 1,"#);
        assert_eq!(section.text(), r#"{"a": 1,"#);
    }

    #[test]
    fn empty_body_should_render_placeholder() {
        let rendered = ResponseRenderer::plain().render(&ok(""), true);
        assert_eq!(body_section(&rendered), EMPTY_BODY_PLACEHOLDER);
    }

    #[test]
    fn transport_error_should_render_message_without_status_code() {
        let outcome = Outcome::transport_error("Connection refused");
        let rendered = ResponseRenderer::plain().render(&outcome, true);
        assert!(rendered.contains("Status: Failed - Connection refused"));
        assert!(!rendered.chars().any(|c| c.is_ascii_digit()));
        assert!(!rendered.contains("Response Headers:"));
    }

    #[test]
    fn http_error_should_render_status_code() {
        let outcome = Outcome::from_response(
            404,
            vec![("content-type".to_string(), "application/json".to_string())],
            r#"{"error":"not found"}"#.to_string(),
        );
        assert!(matches!(outcome, Outcome::HttpError { .. }));
        let rendered = ResponseRenderer::plain().render(&outcome, true);
        assert!(rendered.contains("Status: 404 Not Found"));
        assert!(rendered.contains("\"error\": \"not found\""));
    }

    #[test]
    fn headers_should_render_in_arrival_order() {
        let outcome = Outcome::from_response(
            200,
            vec![
                ("x-second".to_string(), "2".to_string()),
                ("a-first".to_string(), "1".to_string()),
            ],
            String::new(),
        );
        let rendered = ResponseRenderer::plain().render(&outcome, true);
        assert!(rendered.contains("Response Headers:\n  x-second: 2\n  a-first: 1"));
    }

    #[test]
    fn headers_should_be_omitted_when_hidden() {
        let outcome = Outcome::from_response(
            200,
            vec![("x-a".to_string(), "1".to_string())],
            String::new(),
        );
        let rendered = ResponseRenderer::plain().render(&outcome, false);
        assert!(!rendered.contains("Response Headers:"));
        assert!(!rendered.contains("x-a"));
    }

    #[test]
    fn colored_status_should_follow_bucket() {
        let renderer = ResponseRenderer::new(Style::new(true));
        let redirect = Outcome::from_response(302, vec![], String::new());
        assert!(renderer.render(&redirect, false).contains("\x1b[93m302 Found"));
        assert!(renderer.render(&ok(""), false).contains("\x1b[92m200 OK"));
    }

    #[test]
    fn request_details_should_mask_token() {
        let spec = RequestSpec::new(Method::Post, "example.com")
            .with_token(Some("abcdefghijklmnop"))
            .with_body(serde_json::json!({"a": 1}));
        let renderer = ResponseRenderer::plain();
        assert_eq!(renderer.request_line(&spec), "→ POST https://example.com");
        let details = renderer.request_details(&spec);
        assert!(details.contains("Authorization: Bearer abcdefgh...mnop"));
        assert!(!details.contains("abcdefghijklmnop"));
        assert!(details.ends_with(r#"{"a":1}"#));
    }
}
