//! # BIO tag handling
//!
//! Tags stay in their string surface form (`B-ARG0`, `I-ARG0`, `O`, or a
//! bare class name) because the role inventory is open-ended; the helpers
//! here implement the BIO continuation and boundary rules over them.

/// A predicate plus one tag per token of a sentence, as returned by the
/// external sequence-labeling predictor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedSequence {
    /// The governing predicate (surface form or lemma).
    pub predicate: String,
    /// One BIO tag per sentence token.
    pub tags: Vec<String>,
}

impl TaggedSequence {
    /// Creates a tagged sequence for the given predicate.
    pub fn new<P, T, I>(predicate: P, tags: I) -> Self
    where
        P: Into<String>,
        T: Into<String>,
        I: IntoIterator<Item = T>,
    {
        Self {
            predicate: predicate.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// Strips a `-`-delimited BIO prefix from a tag, if present.
///
/// `B-ARG0` and `I-ARG0` both normalize to `ARG0`; a tag without a dash
/// (`O`, `V`) passes through unchanged. Only the first segment is treated
/// as a prefix, so `B-ARGM-TMP` normalizes to `ARGM-TMP`.
#[must_use]
pub fn class_name(tag: &str) -> &str {
    match tag.split_once('-') {
        Some((_, class)) => class,
        None => tag,
    }
}

/// Returns `true` if the tag marks a token inside a multi-token phrase,
/// i.e. carries a `B` or `I` BIO prefix. Anything else is a single-token,
/// self-contained class.
#[must_use]
pub fn is_phrase_tag(tag: &str) -> bool {
    tag.starts_with('B') || tag.starts_with('I')
}

/// Returns `true` if the chunk open at `current` closes before `next`:
/// either `next` does not continue a phrase, or it continues a phrase of a
/// different class.
#[must_use]
pub fn is_chunk_end(current: &str, next: &str) -> bool {
    !next.starts_with('I') || class_name(current) != class_name(next)
}
