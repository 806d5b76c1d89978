//! # Argspan Core
//!
//! Converts a sequence-labeling model's raw per-token BIO tag output into
//! span-indexed semantic role annotations suitable for downstream indexing.
//!
//! Two components, strictly layered: the chunk extractor
//! ([`extract_chunks`]) turns one predicate's tag sequence into labeled
//! annotation records, and the span aggregator ([`aggregate`]) merges
//! records from all predicates and layers into one deduplicated,
//! span-indexed list. [`annotate_document`] wraps both into the JSON
//! document contract.
//!
//! Tokenization and the sequence-labeling model itself are external
//! collaborators; this crate only consumes their output.
//!
//! ## Quick Start
//!
//! ```rust
//! use argspan_core::{extract_chunks, RoleMapping, Sentence, TaggedSequence};
//!
//! let mapping = RoleMapping::from_tsv("ARG0\tagent\nV\tverb").unwrap();
//! let sentence = Sentence::new("The dog barks .", ["The", "dog", "barks", "."]);
//! let sequence = TaggedSequence::new("barks", ["B-ARG0", "I-ARG0", "B-V", "O"]);
//!
//! let records = extract_chunks(&sentence, &sequence, &mapping).unwrap();
//!
//! assert_eq!(records[0].label, "agent");
//! assert_eq!(records[0].content, "The dog");
//! ```

pub mod aggregate;
pub mod chunker;
pub mod document;
pub mod error;
pub mod mapping;
pub mod types;

// Re-export primary API
pub use aggregate::aggregate;
pub use chunker::{extract_chunks, extract_raw_chunks, Chunk, SRL_LAYER};
pub use document::{annotate_document, annotate_sentence, Document, SentenceAnnotation, YearDetector};
pub use error::{ArgspanError, Result};
pub use mapping::RoleMapping;
pub use types::{AnnotationRecord, LayerAnnotation, Sentence, TaggedSequence, TextSpan, Token, TokenSpan};
