//! # Document assembly
//!
//! Glues the chunk extractor and span aggregator into the per-document
//! JSON structure consumed by downstream indexing:
//!
//! ```json
//! {"name": "...", "year": "1991", "sentences":
//!   [{"content": "...", "textSpans": [...]}]}
//! ```
//!
//! Field names and nesting are a compatibility contract.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::aggregate;
use crate::chunker::extract_chunks;
use crate::error::Result;
use crate::mapping::RoleMapping;
use crate::types::{Sentence, TaggedSequence, TextSpan};

/// One sentence with its merged, span-indexed annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceAnnotation {
    /// The sentence surface text.
    pub content: String,
    /// Merged annotation spans, ascending by token range.
    pub text_spans: Vec<TextSpan>,
}

/// A fully annotated document, ready for JSON serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier (typically the source file name).
    pub name: String,
    /// 4-digit publication year, when one was detected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Annotated sentences in document order.
    pub sentences: Vec<SentenceAnnotation>,
}

/// Annotates one sentence: runs the chunk extractor once per tagged
/// sequence, then aggregates every record into text spans.
///
/// # Errors
///
/// Returns `ArgspanError::LengthMismatch` if any sequence's tag count
/// does not equal the sentence's token count.
pub fn annotate_sentence(
    sentence: &Sentence,
    sequences: &[TaggedSequence],
    mapping: &RoleMapping,
) -> Result<SentenceAnnotation> {
    let mut records = Vec::new();
    for sequence in sequences {
        records.extend(extract_chunks(sentence, sequence, mapping)?);
    }

    Ok(SentenceAnnotation {
        content: sentence.text.clone(),
        text_spans: aggregate(&records),
    })
}

/// Annotates a whole document's sentences.
///
/// `sentences` pairs each sentence with the tagged sequences the external
/// predictor produced for it (one per detected predicate).
///
/// # Errors
///
/// Returns `ArgspanError::LengthMismatch` on the first sentence whose
/// sequences do not line up with its tokens.
pub fn annotate_document(
    name: impl Into<String>,
    year: Option<String>,
    sentences: &[(Sentence, Vec<TaggedSequence>)],
    mapping: &RoleMapping,
) -> Result<Document> {
    let name = name.into();
    let mut annotated = Vec::with_capacity(sentences.len());

    for (sentence, sequences) in sentences {
        annotated.push(annotate_sentence(sentence, sequences, mapping)?);
    }

    debug!(
        name = %name,
        sentences = annotated.len(),
        spans = annotated.iter().map(|s| s.text_spans.len()).sum::<usize>(),
        "annotated document"
    );

    Ok(Document {
        name,
        year,
        sentences: annotated,
    })
}

/// Detects 4-digit year strings, for populating [`Document::year`] from a
/// document's first line.
pub struct YearDetector {
    re_year: Regex,
}

impl YearDetector {
    /// Constructs a detector with its pattern pre-compiled.
    ///
    /// # Errors
    ///
    /// Returns `ArgspanError::RegexError` if the pattern fails to compile
    /// (should never happen with the static pattern defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_year: Regex::new(r"^\d{4}$")?,
        })
    }

    /// Returns the input when it is exactly a 4-digit year, `None`
    /// otherwise.
    #[must_use]
    pub fn year_from_str<'a>(&self, s: &'a str) -> Option<&'a str> {
        let s = s.trim();
        self.re_year.is_match(s).then_some(s)
    }
}
