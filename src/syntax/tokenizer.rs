//! Token splitting and classification.

use std::sync::LazyLock;

use regex::Regex;

use super::keywords::KeywordTable;
use super::types::Token;
use crate::markup;

/// Delimiters that split the input and are themselves emitted as tokens:
/// newlines, runs of spaces, and parens.
static DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n| +|\(|\)").expect("delimiter pattern"));

/// Split `text` into classified tokens using the built-in keyword set.
///
/// Always returns a non-empty sequence; empty input yields a single empty
/// placeholder token at offset 0.
pub fn tokenize(text: &str) -> Vec<Token> {
    tokenize_with(text, &KeywordTable::default())
}

/// Split `text` into classified tokens against a specific keyword table.
pub fn tokenize_with(text: &str, keywords: &KeywordTable) -> Vec<Token> {
    if text.is_empty() {
        return vec![Token::new(String::new(), String::new(), 0)];
    }
    let mut tokens = Vec::new();
    let mut offset = 0;
    let mut last = 0;
    for separator in DELIMITERS.find_iter(text) {
        if separator.start() > last {
            push_token(&mut tokens, &text[last..separator.start()], &mut offset, keywords);
        }
        push_token(&mut tokens, separator.as_str(), &mut offset, keywords);
        last = separator.end();
    }
    if last < text.len() {
        push_token(&mut tokens, &text[last..], &mut offset, keywords);
    }
    tokens
}

fn push_token(tokens: &mut Vec<Token>, original: &str, offset: &mut usize, keywords: &KeywordTable) {
    let rendered = render_token(original, keywords);
    tokens.push(Token::new(rendered, original.to_string(), *offset));
    *offset += original.chars().count();
}

/// Markup form of a single token. Keyword classification runs first and wins
/// over the numeric test.
fn render_token(original: &str, keywords: &KeywordTable) -> String {
    if original == "\n" {
        return markup::PARAGRAPH_BREAK.to_string();
    }
    let escaped = markup::escape_text(original);
    if keywords.contains(original) {
        return markup::keyword_span(&escaped);
    }
    if is_numeric_literal(original) {
        return markup::number_span(&escaped);
    }
    escaped
}

/// A token is a number literal when it has visible content and parses in its
/// entirety under the `f64` grammar.
fn is_numeric_literal(token: &str) -> bool {
    token.chars().any(|c| !c.is_whitespace()) && token.parse::<f64>().is_ok()
}
