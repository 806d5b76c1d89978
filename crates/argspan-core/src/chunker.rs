//! # Chunk extraction
//!
//! Converts one predicate's BIO tag sequence into labeled annotation
//! records. A single left-to-right pass groups tokens into maximal runs
//! sharing a normalized class name, then the role mapping renames each
//! run's class and filters out the classes it does not know about.

use crate::error::{ArgspanError, Result};
use crate::mapping::RoleMapping;
use crate::types::tag::{class_name, is_chunk_end, is_phrase_tag};
use crate::types::{AnnotationRecord, Sentence, TaggedSequence, TokenSpan};

/// Layer name attached to every record this extractor produces.
pub const SRL_LAYER: &str = "srl";

/// A maximal run of tokens sharing one normalized class name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Normalized class name (BIO prefix stripped).
    pub class: String,
    /// Inclusive token range of the run.
    pub span: TokenSpan,
    /// Literal text of the run.
    pub text: String,
}

/// Extracts SRL annotation records from one tagged sequence.
///
/// Runs in O(n) over the sentence length. Chunks whose class is absent
/// from `mapping` are dropped without error; a chunk that extends to the
/// sentence's final token is never emitted (see [`extract_raw_chunks`]).
///
/// # Errors
///
/// Returns `ArgspanError::LengthMismatch` if the tag sequence length does
/// not equal the sentence's token count.
pub fn extract_chunks(
    sentence: &Sentence,
    sequence: &TaggedSequence,
    mapping: &RoleMapping,
) -> Result<Vec<AnnotationRecord>> {
    let chunks = extract_raw_chunks(sentence, sequence)?;

    let records = chunks
        .into_iter()
        .filter_map(|chunk| {
            mapping.get(&chunk.class).map(|label| AnnotationRecord {
                layer: SRL_LAYER.to_string(),
                label: label.to_string(),
                parent: sequence.predicate.clone(),
                content: chunk.text,
                span: chunk.span,
            })
        })
        .collect();

    Ok(records)
}

/// Extracts every chunk from a tagged sequence, before mapping/filtering.
///
/// BIO rules, per pass position `i`:
/// - the chunk continues when the previous tag was `B`/`I`-prefixed and
///   normalizes to the same class as the current tag; otherwise a new
///   chunk starts at `i`.
/// - the chunk closes when the *next* tag does not continue it. Closure is
///   only ever tested against a next tag, so a chunk still open at the
///   final token is not emitted. That boundary behavior is part of the
///   output contract this crate preserves.
///
/// # Errors
///
/// Returns `ArgspanError::LengthMismatch` if the tag sequence length does
/// not equal the sentence's token count.
pub fn extract_raw_chunks(sentence: &Sentence, sequence: &TaggedSequence) -> Result<Vec<Chunk>> {
    let tags = &sequence.tags;
    if tags.len() != sentence.len() {
        return Err(ArgspanError::LengthMismatch {
            sentence: sentence.text.clone(),
            predicate: sequence.predicate.clone(),
            tokens: sentence.len(),
            tags: tags.len(),
        });
    }

    let mut chunks = Vec::new();
    let mut last_tag = "";
    let mut current_class = String::new();
    let mut current_start = 0;

    for (i, tag) in tags.iter().enumerate() {
        let continues = is_phrase_tag(last_tag) && class_name(tag) == class_name(last_tag);
        if !continues {
            current_class = class_name(tag).to_string();
            current_start = i;
        }

        if i + 1 < tags.len() && is_chunk_end(tag, &tags[i + 1]) {
            // The run always ends at the current position.
            let span = TokenSpan::new(current_start, i);
            chunks.push(Chunk {
                class: current_class.clone(),
                text: sentence.span_text(span),
                span,
            });
        }

        last_tag = tag.as_str();
    }

    Ok(chunks)
}
