//! The fundamental rewrite primitive: offset-addressed text edits applied
//! in one linear pass.
//!
//! Reconstruction works from positions, never from re-serialization, so the
//! output is byte-identical to the input outside the edited spans. Edits
//! derived from one located pattern never overlap; overlap across distinct
//! patterns in a unit is not checked.

use crate::locate::LocatedPattern;

/// A single planned edit, expressed in absolute byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Insert `text` immediately before the byte at `at`. Consumes no
    /// source bytes.
    Insert { at: usize, text: String },
    /// Omit the source bytes in `[start, end)` from the output.
    Delete { start: usize, end: usize },
}

impl Edit {
    /// Offset at which this edit takes effect; the sort key for application.
    pub fn start(&self) -> usize {
        match self {
            Edit::Insert { at, .. } => *at,
            Edit::Delete { start, .. } => *start,
        }
    }
}

/// Derive the edit set for the located patterns: per pattern, one insertion
/// of the verbatim keyword text at the first decorator, and one deletion of
/// the keyword span at its original location. The inter-keyword whitespace
/// travels with the copied substring.
pub fn plan_edits(source: &str, patterns: &[LocatedPattern]) -> Vec<Edit> {
    let mut edits = Vec::with_capacity(patterns.len() * 2);
    for pattern in patterns {
        let span = pattern.keyword_span;
        edits.push(Edit::Insert {
            at: pattern.insert_at,
            text: source[span.start..span.end].to_string(),
        });
        edits.push(Edit::Delete {
            start: span.start,
            end: span.end,
        });
    }
    edits
}

/// Apply an edit set to the source in a single left-to-right pass.
///
/// The set is sorted ascending by start offset first. A read cursor copies
/// verbatim bytes up to each edit; insertions leave the cursor in place,
/// deletions jump it past the removed range. An empty set returns the input
/// unchanged.
pub fn apply_edits(source: &str, mut edits: Vec<Edit>) -> String {
    edits.sort_by_key(Edit::start);

    let mut out = String::with_capacity(source.len());
    let mut index = 0;
    for edit in &edits {
        out.push_str(&source[index..edit.start()]);
        match edit {
            Edit::Insert { at, text } => {
                out.push_str(text);
                index = *at;
            }
            Edit::Delete { end, .. } => {
                index = *end;
            }
        }
    }
    out.push_str(&source[index..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_set_returns_input_unchanged() {
        assert_eq!(apply_edits("unchanged", Vec::new()), "unchanged");
    }

    #[test]
    fn insertion_consumes_no_source() {
        let edits = vec![Edit::Insert {
            at: 6,
            text: "cruel ".to_string(),
        }];
        assert_eq!(apply_edits("hello world", edits), "hello cruel world");
    }

    #[test]
    fn deletion_skips_the_range() {
        let edits = vec![Edit::Delete { start: 5, end: 11 }];
        assert_eq!(apply_edits("hello world", edits), "hello");
    }

    #[test]
    fn relocation_pairs_move_text() {
        // move "export " from offset 5 to offset 0
        let source = "@Foo\nexport class Bar {}";
        let edits = vec![
            Edit::Insert {
                at: 0,
                text: "export ".to_string(),
            },
            Edit::Delete { start: 5, end: 12 },
        ];
        assert_eq!(apply_edits(source, edits), "export @Foo\nclass Bar {}");
    }

    #[test]
    fn unsorted_input_is_sorted_before_application() {
        let edits = vec![
            Edit::Delete { start: 5, end: 11 },
            Edit::Insert {
                at: 0,
                text: "X".to_string(),
            },
        ];
        assert_eq!(apply_edits("hello world!", edits), "Xhello!");
    }

    #[test]
    fn edit_at_end_of_source() {
        let edits = vec![Edit::Insert {
            at: 5,
            text: "!".to_string(),
        }];
        assert_eq!(apply_edits("hello", edits), "hello!");
    }

    proptest! {
        /// Untouched regions survive byte-for-byte: deleting random
        /// non-overlapping ranges leaves exactly the kept bytes, in order.
        #[test]
        fn deletions_preserve_kept_bytes(
            source in "[a-z ]{0,64}",
            cuts in proptest::collection::vec((0usize..64, 0usize..8), 0..6),
        ) {
            let len = source.len();
            let mut ranges: Vec<(usize, usize)> = cuts
                .into_iter()
                .map(|(start, width)| (start.min(len), (start + width).min(len)))
                .collect();
            ranges.sort_unstable();
            ranges.dedup();
            // drop overlapping ranges; the applier does not defend against them
            let mut disjoint: Vec<(usize, usize)> = Vec::new();
            for (start, end) in ranges {
                if disjoint.last().map_or(true, |&(_, prev_end)| start >= prev_end) {
                    disjoint.push((start, end));
                }
            }

            let edits: Vec<Edit> = disjoint
                .iter()
                .map(|&(start, end)| Edit::Delete { start, end })
                .collect();

            let mut expected = String::new();
            let mut index = 0;
            for &(start, end) in &disjoint {
                expected.push_str(&source[index..start]);
                index = end;
            }
            expected.push_str(&source[index..]);

            prop_assert_eq!(apply_edits(&source, edits), expected);
        }

        /// An insertion leaves every original byte in place and in order;
        /// removing the inserted text from the output reconstructs the input.
        #[test]
        fn insertions_only_add_bytes(
            source in "[a-z]{0,32}",
            at in 0usize..32,
            text in "[A-Z]{1,8}",
        ) {
            let at = at.min(source.len());
            let edits = vec![Edit::Insert { at, text: text.clone() }];
            let output = apply_edits(&source, edits);

            prop_assert_eq!(output.len(), source.len() + text.len());
            prop_assert_eq!(&output[..at], &source[..at]);
            prop_assert_eq!(&output[at..at + text.len()], text.as_str());
            prop_assert_eq!(&output[at + text.len()..], &source[at..]);
        }
    }
}
