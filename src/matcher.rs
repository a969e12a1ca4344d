//! Single-path resolution against an indexed table of contents.
//!
//! The matcher tries, in order: an exact match, a cached resolver rule, and
//! the ancestor-constrained suffix match backed by the [`PathIndex`]. The
//! first success wins; anything else is "no match". The matcher itself holds
//! no state — the working set, the index snapshot and the rule cache are all
//! handed in by the caller, so the same matcher logic serves any number of
//! independent resolution passes.

use crate::index::{PathIndex, SuffixCandidate};
use crate::path::CanonicalPath;
use crate::resolver::{ResolverCache, ResolverRule};
use crate::toc::TableOfContents;

/// A successful resolution of one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The matched TOC entry, original casing.
    pub entry: CanonicalPath,
    /// A prefix-translation rule learned from this match, if the query
    /// carried leading segments the entry did not. Present only for suffix
    /// matches — exact and cached matches teach nothing new.
    pub discovered: Option<ResolverRule>,
}

/// Compare the trailing ancestor segments of two paths.
///
/// The ancestor segments are the segments before the final one (the file
/// name). The check passes when the last `n` ancestor segments of `a` and
/// `b` are equal case-insensitively. If either path has fewer than `n`
/// ancestor segments the check fails — this is a hard requirement, not
/// best-effort. `n = 0` always passes.
///
/// # Examples
///
/// ```
/// use pathmap::check_ancestors;
///
/// assert!(check_ancestors("a/b/c", "x/b/c", 1));
/// assert!(!check_ancestors("a/b/c", "x/b/c", 2));
/// assert!(check_ancestors("a/b/c/d", "X/B/C/D", 2));
///
/// // Too few ancestors to satisfy the requirement
/// assert!(!check_ancestors("a", "a", 1));
/// ```
#[must_use]
pub fn check_ancestors(a: &str, b: &str, n: usize) -> bool {
    if n == 0 {
        return true;
    }
    let ancestors = |path: &str| {
        let mut segments: Vec<String> = path.split('/').map(str::to_lowercase).collect();
        segments.pop();
        segments
    };
    let a_ancestors = ancestors(a);
    let b_ancestors = ancestors(b);
    if a_ancestors.len() < n || b_ancestors.len() < n {
        return false;
    }
    a_ancestors
        .iter()
        .rev()
        .zip(b_ancestors.iter().rev())
        .take(n)
        .all(|(left, right)| left == right)
}

/// Resolve one canonical path against the live working set.
///
/// Resolution order, first success wins:
/// 1. **Exact**: the path equals a live TOC entry case-sensitively.
/// 2. **Cached rule**: the first cache rule whose prefix substitution
///    rewrites the path onto a live TOC entry.
/// 3. **Suffix match**: among the index candidates, an entry qualifies when
///    it is still live, every one of its segments is matched by the query's
///    tail case-insensitively, and [`check_ancestors`] holds for
///    `min_ancestors`. The longest matched suffix wins; ties go to TOC
///    insertion order.
///
/// Returns `None` when nothing qualifies. A suffix match with unmatched
/// leading query segments also yields a discovered [`ResolverRule`] for the
/// caller to cache.
#[must_use]
pub fn resolve_with(
    index: &PathIndex,
    toc: &TableOfContents,
    cache: &ResolverCache,
    path: &CanonicalPath,
    min_ancestors: usize,
) -> Option<Resolution> {
    // Exact match needs no ancestor validation.
    if let Some(entry) = toc.get(path.as_str()) {
        return Some(Resolution {
            entry: entry.clone(),
            discovered: None,
        });
    }

    // Known root translations, in discovery order.
    for rule in cache.iter() {
        if let Some(rewritten) = rule.apply(path.as_str()) {
            if let Some(entry) = toc.get(&rewritten) {
                log::debug!("cache hit: {rule} rewrote {path} onto {entry}");
                return Some(Resolution {
                    entry: entry.clone(),
                    discovered: None,
                });
            }
        }
    }

    let best = best_suffix_candidate(index, toc, path, min_ancestors)?;
    let discovered = derive_rule(path, &best);
    Some(Resolution {
        entry: best.entry.clone(),
        discovered,
    })
}

/// Pick the qualifying candidate with the longest matched suffix.
fn best_suffix_candidate<'index>(
    index: &'index PathIndex,
    toc: &TableOfContents,
    path: &CanonicalPath,
    min_ancestors: usize,
) -> Option<SuffixCandidate<'index>> {
    let mut best: Option<SuffixCandidate<'index>> = None;
    for candidate in index.query(path) {
        // Partial overlaps never qualify: a candidate whose own leading
        // segments were not matched is a different file that merely shares a
        // tail with the query.
        if !candidate.entry_consumed() {
            continue;
        }
        if !toc.contains(candidate.entry.as_str()) {
            continue;
        }
        if !check_ancestors(path.as_str(), candidate.entry.as_str(), min_ancestors) {
            continue;
        }
        let is_better = best
            .as_ref()
            .is_none_or(|current| candidate.matched_segments > current.matched_segments);
        if is_better {
            best = Some(candidate);
        }
    }
    best
}

/// Derive the prefix-translation rule from a suffix match.
///
/// The rule strips the query's unmatched leading segments and substitutes
/// the entry's (none, when the match consumed the whole entry). No rule is
/// derived when the query had no unmatched prefix — there is no translation
/// to learn from an in-place match.
fn derive_rule(path: &CanonicalPath, candidate: &SuffixCandidate<'_>) -> Option<ResolverRule> {
    let query_segments: Vec<&str> = path.segments().collect();
    let unmatched_query = query_segments.len() - candidate.matched_segments;
    if unmatched_query == 0 {
        return None;
    }
    let entry_segments: Vec<&str> = candidate.entry.segments().collect();
    let unmatched_entry = entry_segments.len() - candidate.matched_segments;
    let remove = query_segments[..unmatched_query].join("/");
    let add = entry_segments[..unmatched_entry].join("/");
    Some(ResolverRule::new(&remove, &add))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(raw: &str) -> CanonicalPath {
        CanonicalPath::new(raw).unwrap()
    }

    fn setup(entries: &[&str]) -> (PathIndex, TableOfContents) {
        let toc = TableOfContents::from_paths(entries);
        let index = PathIndex::build(&toc);
        (index, toc)
    }

    #[test]
    fn test_check_ancestors_matching() {
        assert!(check_ancestors("a/b/c", "x/b/c", 1));
        assert!(check_ancestors("a/B", "a/B", 1));
        assert!(check_ancestors("A/B", "a/b", 1));
        assert!(check_ancestors("a/b/c/d", "X/B/C/D", 2));
    }

    #[test]
    fn test_check_ancestors_mismatch() {
        assert!(!check_ancestors("b/b", "a/b", 1));
        assert!(!check_ancestors("a/b/c", "x/b/c", 2));
    }

    #[test]
    fn test_check_ancestors_zero_always_passes() {
        assert!(check_ancestors("a", "completely/different", 0));
    }

    #[test]
    fn test_check_ancestors_requires_enough_segments() {
        assert!(!check_ancestors("a", "a", 1));
        assert!(!check_ancestors("a/b", "b", 1));
        assert!(!check_ancestors("a/b", "a/b", 2));
    }

    #[test]
    fn test_exact_match_first() {
        let (index, toc) = setup(&["path.py"]);
        let cache = ResolverCache::new();

        let resolution =
            resolve_with(&index, &toc, &cache, &canonical("path.py"), 0).unwrap();
        assert_eq!(resolution.entry.as_str(), "path.py");
        assert!(resolution.discovered.is_none());
    }

    #[test]
    fn test_exact_match_ignores_min_ancestors() {
        let (index, toc) = setup(&["path.py"]);
        let cache = ResolverCache::new();

        let resolution =
            resolve_with(&index, &toc, &cache, &canonical("path.py"), 5).unwrap();
        assert_eq!(resolution.entry.as_str(), "path.py");
    }

    #[test]
    fn test_suffix_match_discovers_rule() {
        let (index, toc) = setup(&["src/components/login.js"]);
        let cache = ResolverCache::new();

        let query = canonical("/Users/user/owner/repo/src/components/login.js");
        let resolution = resolve_with(&index, &toc, &cache, &query, 0).unwrap();
        assert_eq!(resolution.entry.as_str(), "src/components/login.js");

        let rule = resolution.discovered.unwrap();
        assert_eq!(rule.remove(), "Users/user/owner/repo/");
        assert_eq!(rule.add(), "");
    }

    #[test]
    fn test_cached_rule_before_suffix_search() {
        let (index, toc) = setup(&["src/app.js"]);
        let mut cache = ResolverCache::new();
        cache.register(ResolverRule::new("Users/repo", ""));

        let resolution =
            resolve_with(&index, &toc, &cache, &canonical("Users/repo/src/app.js"), 0)
                .unwrap();
        assert_eq!(resolution.entry.as_str(), "src/app.js");
        // Resolved through the cache, so nothing new was learned.
        assert!(resolution.discovered.is_none());
    }

    #[test]
    fn test_cached_rules_tried_in_discovery_order() {
        let (index, toc) = setup(&["src/app.js"]);
        let mut cache = ResolverCache::new();
        cache.register(ResolverRule::new("build", "missing"));
        cache.register(ResolverRule::new("build", "src"));

        let resolution =
            resolve_with(&index, &toc, &cache, &canonical("build/app.js"), 0).unwrap();
        assert_eq!(resolution.entry.as_str(), "src/app.js");
    }

    #[test]
    fn test_case_insensitive_match_returns_toc_casing() {
        let (index, toc) = setup(&["a/b/C"]);
        let cache = ResolverCache::new();

        let resolution = resolve_with(&index, &toc, &cache, &canonical("a/B/c"), 0).unwrap();
        assert_eq!(resolution.entry.as_str(), "a/b/C");
        // Whole query matched in place, so there is no prefix to learn.
        assert!(resolution.discovered.is_none());
    }

    #[test]
    fn test_partial_overlap_rejected() {
        let (index, toc) = setup(&["x/y/z"]);
        let cache = ResolverCache::new();

        assert!(resolve_with(&index, &toc, &cache, &canonical("R/z"), 0).is_none());
        assert!(resolve_with(&index, &toc, &cache, &canonical("R/y/z"), 0).is_none());
    }

    #[test]
    fn test_bare_file_name_cannot_claim_deeper_entry() {
        let (index, toc) = setup(&["x/y/z"]);
        let cache = ResolverCache::new();

        assert!(resolve_with(&index, &toc, &cache, &canonical("z"), 0).is_none());
    }

    #[test]
    fn test_longest_suffix_preferred() {
        let (index, toc) = setup(&["main.c", "b/main.c"]);
        let cache = ResolverCache::new();

        let resolution =
            resolve_with(&index, &toc, &cache, &canonical("w/b/main.c"), 0).unwrap();
        assert_eq!(resolution.entry.as_str(), "b/main.c");
    }

    #[test]
    fn test_shorter_entry_wins_when_longer_mismatches() {
        let (index, toc) = setup(&["a/b/c.py", "b/c.py"]);
        let cache = ResolverCache::new();

        let resolution =
            resolve_with(&index, &toc, &cache, &canonical("r/b/c.py"), 0).unwrap();
        assert_eq!(resolution.entry.as_str(), "b/c.py");
    }

    #[test]
    fn test_equal_suffixes_break_ties_by_toc_order() {
        let (index, toc) = setup(&["first/Main.c", "FIRST/main.c"]);
        let cache = ResolverCache::new();

        let resolution =
            resolve_with(&index, &toc, &cache, &canonical("w/first/main.c"), 0).unwrap();
        assert_eq!(resolution.entry.as_str(), "first/Main.c");
    }

    #[test]
    fn test_min_ancestors_rejects_shallow_entries() {
        let (index, toc) = setup(&["z"]);
        let cache = ResolverCache::new();

        // The entry has no ancestor segments to validate against.
        assert!(resolve_with(&index, &toc, &cache, &canonical("a/z"), 1).is_none());
        assert!(resolve_with(&index, &toc, &cache, &canonical("a/z"), 0).is_some());
    }

    #[test]
    fn test_no_match_for_different_file_name() {
        let (index, toc) = setup(&["four/six/three.py"]);
        let cache = ResolverCache::new();

        assert!(
            resolve_with(&index, &toc, &cache, &canonical("four/six/seven.py"), 0).is_none()
        );
    }

    #[test]
    fn test_consumed_entries_not_rematched() {
        let (index, mut toc) = setup(&["a/b.py"]);
        let cache = ResolverCache::new();

        toc.take("a/b.py");
        assert!(resolve_with(&index, &toc, &cache, &canonical("a/b.py"), 0).is_none());
        assert!(resolve_with(&index, &toc, &cache, &canonical("w/a/b.py"), 0).is_none());
    }
}
