//! # Span aggregation
//!
//! Merges annotation records from every layer of a sentence into one
//! span-indexed list: each unique token range appears exactly once,
//! carrying the data of every record that named it.

use std::collections::BTreeMap;

use crate::types::{AnnotationRecord, TextSpan, TokenSpan};

/// Merges records by exact token range.
///
/// Two records merge only when their spans are equal; overlap or
/// containment never merges. Within one merged span, records of different
/// labels accumulate and an identical (layer, label) pair is overwritten
/// in input order, last record wins.
///
/// Output is sorted ascending by `(start, end)`. The source of this
/// behavior had no ordering guarantee; the sorted order here is a
/// deliberate choice for determinism.
#[must_use]
pub fn aggregate(records: &[AnnotationRecord]) -> Vec<TextSpan> {
    let mut spans: BTreeMap<TokenSpan, TextSpan> = BTreeMap::new();

    for record in records {
        spans
            .entry(record.span)
            .and_modify(|span| span.insert(record))
            .or_insert_with(|| TextSpan::from_record(record));
    }

    spans.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(label: &str, parent: &str, content: &str, start: usize, end: usize) -> AnnotationRecord {
        AnnotationRecord {
            layer: "srl".into(),
            label: label.into(),
            parent: parent.into(),
            content: content.into(),
            span: TokenSpan::new(start, end),
        }
    }

    #[test]
    fn equal_spans_merge_into_one() {
        let records = vec![
            record("agent", "runs", "The dog", 0, 1),
            record("location", "runs", "The dog", 0, 1),
        ];

        let spans = aggregate(&records);

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].span, TokenSpan::new(0, 1));
        assert_eq!(spans[0].content, "The dog");
        let srl = &spans[0].layers["srl"];
        assert!(srl.contains_key("agent"));
        assert!(srl.contains_key("location"));
    }

    #[test]
    fn distinct_spans_stay_distinct() {
        let records = vec![
            record("agent", "runs", "The dog", 0, 1),
            record("patient", "runs", "The dog barks", 0, 2),
        ];

        let spans = aggregate(&records);
        assert_eq!(spans.len(), 2);
    }

    #[test]
    fn overlapping_but_unequal_spans_do_not_merge() {
        // Overlap and containment are not merge criteria.
        let records = vec![
            record("agent", "runs", "The dog", 0, 1),
            record("agent", "runs", "dog", 1, 1),
        ];

        let spans = aggregate(&records);
        assert_eq!(spans.len(), 2);
    }

    #[test]
    fn same_layer_and_label_last_record_wins() {
        let records = vec![
            record("agent", "runs", "The dog", 0, 1),
            record("agent", "chases", "The dog", 0, 1),
        ];

        let spans = aggregate(&records);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].layers["srl"]["agent"].parent, "chases");
    }

    #[test]
    fn records_from_multiple_layers_share_a_span() {
        let mut coref = record("mention", "dog", "The dog", 0, 1);
        coref.layer = "coref".into();

        let spans = aggregate(&[record("agent", "runs", "The dog", 0, 1), coref]);

        assert_eq!(spans.len(), 1);
        assert!(spans[0].layers.contains_key("srl"));
        assert!(spans[0].layers.contains_key("coref"));
    }

    #[test]
    fn output_sorted_by_start_then_end() {
        let records = vec![
            record("a", "p", "x", 4, 5),
            record("b", "p", "y", 0, 2),
            record("c", "p", "z", 0, 1),
        ];

        let spans = aggregate(&records);
        let keys: Vec<_> = spans.iter().map(|s| s.span).collect();
        assert_eq!(
            keys,
            vec![
                TokenSpan::new(0, 1),
                TokenSpan::new(0, 2),
                TokenSpan::new(4, 5),
            ]
        );
    }

    #[test]
    fn no_duplicate_spans_in_output() {
        let records = vec![
            record("a", "p", "x", 1, 2),
            record("b", "p", "x", 1, 2),
            record("c", "p", "x", 1, 2),
        ];

        let spans = aggregate(&records);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].layers["srl"].len(), 3);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn first_record_seeds_span_content() {
        let records = vec![
            record("agent", "runs", "The dog", 0, 1),
            record("location", "runs", "ignored", 0, 1),
        ];

        let spans = aggregate(&records);
        assert_eq!(spans[0].content, "The dog");
    }
}
