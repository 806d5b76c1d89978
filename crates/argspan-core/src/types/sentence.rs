//! # Sentence and token inputs
//!
//! Read-only inputs owned by the external tokenizer. This core never
//! segments or tokenizes text itself; it consumes already-materialized
//! sentences.

use crate::types::span::TokenSpan;

/// A single token with its 0-based position in the sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text content.
    pub text: String,
    /// Token index in the sentence.
    pub index: usize,
}

/// A tokenized sentence as produced by the external segmenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// The sentence surface text.
    pub text: String,
    /// Tokens in sentence order; `tokens[i].index == i`.
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Builds a sentence from its surface text and word list,
    /// assigning token indices in order.
    pub fn new<S, W, I>(text: S, words: I) -> Self
    where
        S: Into<String>,
        W: Into<String>,
        I: IntoIterator<Item = W>,
    {
        let tokens = words
            .into_iter()
            .enumerate()
            .map(|(index, text)| Token {
                text: text.into(),
                index,
            })
            .collect();

        Self {
            text: text.into(),
            tokens,
        }
    }

    /// Number of tokens in the sentence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the sentence has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The literal text covered by a token span, tokens joined by a
    /// single space.
    #[must_use]
    pub fn span_text(&self, span: TokenSpan) -> String {
        self.tokens[span.start..=span.end]
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
