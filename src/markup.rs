//! The markup vocabulary for rendered output.
//!
//! Rendered token forms and the final display string use a small HTML-like
//! subset produced and consumed only by this crate: `<p>` paragraphs, spans
//! for classified tokens and decorations, and `&lt;`/`&gt;` escapes for angle
//! brackets in source text. [`MarkupScanner`] iterates a markup string as
//! events for tree building.

use thiserror::Error;

/// Rendered form of a newline token: closes the current paragraph and opens
/// the next.
pub const PARAGRAPH_BREAK: &str = "</p><p>";

/// Classification carried by a span element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// A language keyword.
    Keyword,
    /// A numeric literal.
    NumberLiteral,
    /// The synthetic caret marker; blinking while the input has focus.
    Caret { blinking: bool },
    /// A paren-match decoration; `bad` marks an unbalanced close.
    MatchedParen { bad: bool },
}

impl SpanKind {
    /// The opening tag for this span.
    pub fn open_tag(self) -> &'static str {
        match self {
            Self::Keyword => r#"<span class="keyword">"#,
            Self::NumberLiteral => r#"<span class="number-literal">"#,
            Self::Caret { blinking: true } => r#"<span id="caret" class="blinking">"#,
            Self::Caret { blinking: false } => r#"<span id="caret">"#,
            Self::MatchedParen { bad: false } => r#"<span class="matched-paren">"#,
            Self::MatchedParen { bad: true } => r#"<span class="matched-paren bad-paren">"#,
        }
    }
}

/// Errors from scanning markup this crate did not produce.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkupError {
    #[error("tag opened with '<' but never closed with '>'")]
    UnterminatedTag,
    #[error("unknown tag <{0}>")]
    UnknownTag(String),
    #[error("unsupported span attributes: {0}")]
    UnknownSpan(String),
}

/// Escape source text for embedding in markup.
pub fn escape_text(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

/// Reverse [`escape_text`]. Other entity-like sequences pass through.
pub fn unescape_text(text: &str) -> String {
    text.replace("&lt;", "<").replace("&gt;", ">")
}

/// Wrap escaped text as a keyword span.
pub fn keyword_span(inner: &str) -> String {
    format!("{}{inner}</span>", SpanKind::Keyword.open_tag())
}

/// Wrap escaped text as a number-literal span.
pub fn number_span(inner: &str) -> String {
    format!("{}{inner}</span>", SpanKind::NumberLiteral.open_tag())
}

/// Wrap escaped text as the caret marker.
pub fn caret_span(blinking: bool, inner: &str) -> String {
    format!("{}{inner}</span>", SpanKind::Caret { blinking }.open_tag())
}

/// One structural step of a markup string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupEvent<'a> {
    OpenParagraph,
    CloseParagraph,
    OpenSpan(SpanKind),
    CloseSpan,
    /// Raw text between tags, still escaped.
    Text(&'a str),
}

/// Iterator over the events of a markup string.
#[derive(Debug, Clone)]
pub struct MarkupScanner<'a> {
    rest: &'a str,
}

impl<'a> MarkupScanner<'a> {
    pub const fn new(markup: &'a str) -> Self {
        Self { rest: markup }
    }
}

impl<'a> Iterator for MarkupScanner<'a> {
    type Item = Result<MarkupEvent<'a>, MarkupError>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest;
        if rest.is_empty() {
            return None;
        }
        if let Some(after) = rest.strip_prefix('<') {
            let Some(end) = after.find('>') else {
                self.rest = "";
                return Some(Err(MarkupError::UnterminatedTag));
            };
            let tag = &after[..end];
            self.rest = &after[end + 1..];
            return Some(tag_event(tag));
        }
        let end = rest.find('<').unwrap_or(rest.len());
        self.rest = &rest[end..];
        Some(Ok(MarkupEvent::Text(&rest[..end])))
    }
}

fn tag_event(tag: &str) -> Result<MarkupEvent<'_>, MarkupError> {
    match tag {
        "p" => Ok(MarkupEvent::OpenParagraph),
        "/p" => Ok(MarkupEvent::CloseParagraph),
        "/span" => Ok(MarkupEvent::CloseSpan),
        _ => match tag.strip_prefix("span") {
            Some(attrs) => span_kind(attrs.trim()).map(MarkupEvent::OpenSpan),
            None => Err(MarkupError::UnknownTag(tag.to_string())),
        },
    }
}

fn span_kind(attrs: &str) -> Result<SpanKind, MarkupError> {
    let class = attr_value(attrs, "class");
    if attr_value(attrs, "id") == Some("caret") {
        return Ok(SpanKind::Caret {
            blinking: class == Some("blinking"),
        });
    }
    match class {
        Some("keyword") => Ok(SpanKind::Keyword),
        Some("number-literal") => Ok(SpanKind::NumberLiteral),
        Some("matched-paren") => Ok(SpanKind::MatchedParen { bad: false }),
        Some("matched-paren bad-paren") => Ok(SpanKind::MatchedParen { bad: true }),
        _ => Err(MarkupError::UnknownSpan(attrs.to_string())),
    }
}

/// Extract a `key="value"` attribute from a tag's attribute list.
fn attr_value<'a>(attrs: &'a str, key: &str) -> Option<&'a str> {
    let needle = format!("{key}=\"");
    let start = attrs.find(&needle)? + needle.len();
    let end = attrs[start..].find('"')?;
    Some(&attrs[start..start + end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_angle_brackets() {
        assert_eq!(escape_text("a<b>c"), "a&lt;b&gt;c");
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_text("(define x 1)"), "(define x 1)");
    }

    #[test]
    fn test_unescape_round_trip() {
        let original = "x < y > z";
        assert_eq!(unescape_text(&escape_text(original)), original);
    }

    #[test]
    fn test_unescape_leaves_other_entities() {
        assert_eq!(unescape_text("a&amp;b"), "a&amp;b");
    }

    #[test]
    fn test_keyword_span_shape() {
        assert_eq!(keyword_span("let"), r#"<span class="keyword">let</span>"#);
    }

    #[test]
    fn test_caret_span_blinking_class_follows_flag() {
        assert!(caret_span(true, " ").contains(r#"class="blinking""#));
        assert!(!caret_span(false, " ").contains("blinking"));
    }

    #[test]
    fn test_scanner_yields_paragraph_and_text() {
        let events: Vec<_> = MarkupScanner::new("<p>hi</p>")
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            events,
            vec![
                MarkupEvent::OpenParagraph,
                MarkupEvent::Text("hi"),
                MarkupEvent::CloseParagraph,
            ]
        );
    }

    #[test]
    fn test_scanner_recognizes_span_kinds() {
        let markup = r#"<span class="number-literal">42</span>"#;
        let events: Vec<_> = MarkupScanner::new(markup)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(events[0], MarkupEvent::OpenSpan(SpanKind::NumberLiteral));
        assert_eq!(events[2], MarkupEvent::CloseSpan);
    }

    #[test]
    fn test_scanner_recognizes_caret_without_blink() {
        let markup = r#"<span id="caret"> </span>"#;
        let events: Vec<_> = MarkupScanner::new(markup)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            events[0],
            MarkupEvent::OpenSpan(SpanKind::Caret { blinking: false })
        );
    }

    #[test]
    fn test_scanner_recognizes_bad_paren() {
        let markup = r#"<span class="matched-paren bad-paren">)</span>"#;
        let events: Vec<_> = MarkupScanner::new(markup)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            events[0],
            MarkupEvent::OpenSpan(SpanKind::MatchedParen { bad: true })
        );
    }

    #[test]
    fn test_scanner_rejects_unknown_tag() {
        let err = MarkupScanner::new("<div>").next().unwrap().unwrap_err();
        assert_eq!(err, MarkupError::UnknownTag("div".to_string()));
    }

    #[test]
    fn test_scanner_rejects_unterminated_tag() {
        let err = MarkupScanner::new("<p").next().unwrap().unwrap_err();
        assert_eq!(err, MarkupError::UnterminatedTag);
    }

    #[test]
    fn test_open_tags_scan_back_to_their_kind() {
        for kind in [
            SpanKind::Keyword,
            SpanKind::NumberLiteral,
            SpanKind::Caret { blinking: true },
            SpanKind::Caret { blinking: false },
            SpanKind::MatchedParen { bad: false },
            SpanKind::MatchedParen { bad: true },
        ] {
            let markup = format!("{}x</span>", kind.open_tag());
            let events: Vec<_> = MarkupScanner::new(&markup)
                .collect::<Result<_, _>>()
                .unwrap();
            assert_eq!(events[0], MarkupEvent::OpenSpan(kind), "kind {kind:?}");
        }
    }
}
