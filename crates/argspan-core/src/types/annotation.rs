//! # Annotation records and merged text spans
//!
//! [`AnnotationRecord`] is the unit the chunk extractor emits;
//! [`TextSpan`] is the span-indexed, multi-layer structure the aggregator
//! produces. Layer data nests as `layer -> label -> annotation`, so one
//! span can carry `srl` annotations next to any future annotation layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::span::TokenSpan;

/// One labeled span produced by a single annotation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRecord {
    /// Annotation layer this record belongs to (e.g. `"srl"`).
    pub layer: String,
    /// The mapped label within the layer (e.g. `"agent"`).
    pub label: String,
    /// The governing predicate.
    pub parent: String,
    /// Literal text covered by the span.
    pub content: String,
    /// Inclusive token range within the sentence.
    pub span: TokenSpan,
}

/// Per-label data carried by a layer on one text span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerAnnotation {
    /// The governing predicate for this label.
    pub parent: String,
}

/// Data attached to one layer of a text span, keyed by label.
pub type LayerData = BTreeMap<String, LayerAnnotation>;

/// A unique token range with every annotation that applies to it.
///
/// Serializes with the layers flattened next to `span` and `content`:
///
/// ```json
/// {"span": [0, 1], "content": "The dog", "srl": {"agent": {"parent": "runs"}}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    /// Inclusive token range; unique within one sentence's output.
    pub span: TokenSpan,
    /// Literal text covered by the span.
    pub content: String,
    /// Annotation layers keyed by layer name.
    #[serde(flatten)]
    pub layers: BTreeMap<String, LayerData>,
}

impl TextSpan {
    /// Seeds a text span from the first record observed at its range.
    #[must_use]
    pub fn from_record(record: &AnnotationRecord) -> Self {
        let mut span = Self {
            span: record.span,
            content: record.content.clone(),
            layers: BTreeMap::new(),
        };
        span.insert(record);
        span
    }

    /// Inserts one record's layer data. A new label accumulates alongside
    /// existing ones; an identical (layer, label) pair is overwritten,
    /// last record wins.
    pub fn insert(&mut self, record: &AnnotationRecord) {
        self.layers.entry(record.layer.clone()).or_default().insert(
            record.label.clone(),
            LayerAnnotation {
                parent: record.parent.clone(),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(layer: &str, label: &str, parent: &str) -> AnnotationRecord {
        AnnotationRecord {
            layer: layer.into(),
            label: label.into(),
            parent: parent.into(),
            content: "The dog".into(),
            span: TokenSpan::new(0, 1),
        }
    }

    #[test]
    fn labels_accumulate_within_a_layer() {
        let mut span = TextSpan::from_record(&record("srl", "agent", "runs"));
        span.insert(&record("srl", "location", "runs"));

        let srl = &span.layers["srl"];
        assert_eq!(srl.len(), 2);
        assert_eq!(srl["agent"].parent, "runs");
        assert_eq!(srl["location"].parent, "runs");
    }

    #[test]
    fn same_label_is_overwritten_last_wins() {
        let mut span = TextSpan::from_record(&record("srl", "agent", "runs"));
        span.insert(&record("srl", "agent", "chases"));

        assert_eq!(span.layers["srl"]["agent"].parent, "chases");
    }

    #[test]
    fn text_span_serializes_layers_flattened() {
        let span = TextSpan::from_record(&record("srl", "agent", "runs"));
        let json = serde_json::to_value(&span).unwrap();

        assert_eq!(json["span"], serde_json::json!([0, 1]));
        assert_eq!(json["content"], "The dog");
        assert_eq!(json["srl"]["agent"]["parent"], "runs");
    }
}
