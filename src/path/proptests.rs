//! Property-based tests for path handling.
//!
//! Note: the normalize module already has property tests for the cleaning
//! pipeline itself. This module focuses on the `CanonicalPath` invariants.

use super::normalize::clean;
use super::CanonicalPath;
use proptest::prelude::*;

// Strategy for path-like strings built from plain segments
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.-]{1,12}"
}

fn raw_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..8).prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Construction agrees with the cleaning pipeline
    #[test]
    fn canonical_path_matches_clean(raw in "\\PC{0,40}") {
        let cleaned = clean(&raw);
        match CanonicalPath::new(&raw) {
            Ok(path) => prop_assert_eq!(path.as_str(), cleaned),
            Err(_) => prop_assert!(cleaned.is_empty()),
        }
    }

    // Constructed paths are stable under reconstruction
    #[test]
    fn canonical_path_reconstruction_stable(raw in "\\PC{0,40}") {
        if let Ok(path) = CanonicalPath::new(&raw) {
            let again = CanonicalPath::new(path.as_str());
            prop_assert!(again.is_ok());
            prop_assert_eq!(again.unwrap(), path);
        }
    }

    // Segment accessors agree with each other
    #[test]
    fn canonical_path_segment_accessors_consistent(raw in raw_path_strategy()) {
        if let Ok(path) = CanonicalPath::new(&raw) {
            let segments: Vec<&str> = path.segments().collect();
            prop_assert_eq!(segments.len(), path.segment_count());
            prop_assert_eq!(segments.last().copied(), Some(path.file_name()));
            prop_assert!(!path.file_name().is_empty());
        }
    }

    // Canonical paths never contain separators other than '/'
    #[test]
    fn canonical_path_single_separator(raw in "\\PC{0,40}") {
        if let Ok(path) = CanonicalPath::new(&raw) {
            prop_assert!(!path.as_str().contains('\\'));
            prop_assert!(!path.as_str().starts_with('/'));
            prop_assert!(!path.as_str().ends_with('/'));
        }
    }
}
