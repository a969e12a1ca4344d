//! The suffix index over a table of contents.
//!
//! Matching an observed path means asking "which known paths end the way
//! this one ends?". A naive scan compares the query against every entry on
//! every lookup; the [`PathIndex`] is built once per TOC snapshot and
//! narrows each query to the entries sharing its final segment before any
//! per-segment work happens.
//!
//! Comparison is case-insensitive throughout: paths observed on
//! case-preserving filesystems routinely disagree with the ground truth in
//! casing only. The index stores the original-cased entries and hands them
//! back unchanged.

use std::collections::HashMap;

use crate::path::CanonicalPath;
use crate::toc::TableOfContents;

/// A candidate entry produced by a [`PathIndex`] query.
#[derive(Debug, Clone)]
pub struct SuffixCandidate<'a> {
    /// The TOC entry, original casing.
    pub entry: &'a CanonicalPath,
    /// Number of consecutive trailing segments the query and the entry share
    /// case-insensitively. At least 1 (the final segment put the entry in
    /// the candidate set).
    pub matched_segments: usize,
    /// Total number of segments in the entry.
    pub entry_segments: usize,
}

impl SuffixCandidate<'_> {
    /// Whether every segment of the entry was matched by the query's tail,
    /// i.e. the entry is a case-insensitive segment-suffix of the query.
    #[must_use]
    pub fn entry_consumed(&self) -> bool {
        self.matched_segments == self.entry_segments
    }
}

/// An index over a TOC snapshot, keyed by case-folded final segment.
///
/// Built once per snapshot; queries never mutate it, so consumption of
/// matched entries is the caller's concern (candidates must be re-checked
/// against the live working set).
///
/// # Examples
///
/// ```
/// use pathmap::{CanonicalPath, PathIndex, TableOfContents};
///
/// let toc = TableOfContents::from_paths(["src/HeapDump/GCHeapDump.cs"]);
/// let index = PathIndex::build(&toc);
///
/// let query = CanonicalPath::new("C:/perfview/src/heapDump/GCHeapDump.cs").unwrap();
/// let candidates = index.query(&query);
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].matched_segments, 3);
/// assert!(candidates[0].entry_consumed());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathIndex {
    by_file_name: HashMap<String, Vec<IndexedEntry>>,
}

#[derive(Debug, Clone)]
struct IndexedEntry {
    path: CanonicalPath,
    folded_segments: Vec<String>,
}

impl PathIndex {
    /// Build the index over a TOC snapshot.
    #[must_use]
    pub fn build(toc: &TableOfContents) -> Self {
        let mut by_file_name: HashMap<String, Vec<IndexedEntry>> = HashMap::new();
        for entry in toc.iter() {
            let folded_segments: Vec<String> =
                entry.segments().map(str::to_lowercase).collect();
            let key = folded_segments
                .last()
                .cloned()
                .unwrap_or_default();
            by_file_name.entry(key).or_default().push(IndexedEntry {
                path: entry.clone(),
                folded_segments,
            });
        }
        Self { by_file_name }
    }

    /// Find all entries sharing the query's final segment, with the length
    /// of the common case-insensitive segment suffix for each.
    ///
    /// Candidates are returned in TOC insertion order, which makes the
    /// downstream tie-break deterministic.
    #[must_use]
    pub fn query(&self, path: &CanonicalPath) -> Vec<SuffixCandidate<'_>> {
        let folded_query: Vec<String> = path.segments().map(str::to_lowercase).collect();
        let Some(file_name) = folded_query.last() else {
            return Vec::new();
        };
        let Some(bucket) = self.by_file_name.get(file_name) else {
            return Vec::new();
        };

        bucket
            .iter()
            .map(|indexed| {
                let matched_segments = indexed
                    .folded_segments
                    .iter()
                    .rev()
                    .zip(folded_query.iter().rev())
                    .take_while(|(entry_segment, query_segment)| entry_segment == query_segment)
                    .count();
                SuffixCandidate {
                    entry: &indexed.path,
                    matched_segments,
                    entry_segments: indexed.folded_segments.len(),
                }
            })
            .collect()
    }

    /// Number of distinct (case-folded) file names in the index.
    #[must_use]
    pub fn file_name_count(&self) -> usize {
        self.by_file_name.len()
    }
}
