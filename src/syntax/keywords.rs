//! The fixed keyword set for classification.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Keywords recognized by whole-token, case-insensitive comparison.
const KEYWORDS: &[&str] = &[
    "access",
    "and",
    "begin",
    "bkpt",
    "case",
    "cond",
    "cons-stream",
    "declare",
    "default-object?",
    "define",
    "define-integrable",
    "define-macro",
    "define-structure",
    "define-syntax",
    "delay",
    "do",
    "fluid-let",
    "if",
    "in-package",
    "lambda",
    "let",
    "let*",
    "let-syntax",
    "letrec",
    "local-declare",
    "macro",
    "make-environment",
    "named-lambda",
    "or",
    "quasiquote",
    "quote",
    "scode-quote",
    "sequence",
    "set!",
    "the-environment",
    "unassigned?",
    "using-syntax",
];

static BUILTIN: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

/// Case-insensitive keyword lookup over the built-in set, optionally extended
/// with custom entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordTable {
    extra: HashSet<String>,
}

impl KeywordTable {
    /// The built-in set alone.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in set plus custom keywords (stored lowercase).
    pub fn with_extra<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extra: words
                .into_iter()
                .map(|word| word.into().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Whole-token membership test, ignoring ASCII case.
    pub fn contains(&self, word: &str) -> bool {
        let lower = word.to_ascii_lowercase();
        BUILTIN.contains(lower.as_str()) || self.extra.contains(&lower)
    }
}
