//! Batch resolution with a cache of learned root translations.
//!
//! One [`BatchResolver`] owns everything a resolution pass mutates: the live
//! TOC working set, the index snapshot and the [`ResolverCache`]. Paths are
//! resolved in input order; each successful match consumes its TOC entry,
//! and every suffix match that stripped a foreign root prefix teaches the
//! cache a [`ResolverRule`] so later paths under the same root skip the
//! suffix search entirely.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::index::PathIndex;
use crate::matcher;
use crate::path::CanonicalPath;
use crate::toc::TableOfContents;

/// A learned prefix-for-prefix translation.
///
/// A rule `(remove, add)` means: a path starting with `remove` has that
/// prefix stripped and `add` substituted, after which the result is checked
/// against the live TOC exactly. Both prefixes are slash-terminated when
/// non-empty, which keeps the substitution segment-aligned.
///
/// # Examples
///
/// ```
/// use pathmap::ResolverRule;
///
/// let rule = ResolverRule::new("Users/user/repo", "");
/// assert_eq!(rule.remove(), "Users/user/repo/");
/// assert_eq!(
///     rule.apply("Users/user/repo/src/lib.rs").as_deref(),
///     Some("src/lib.rs")
/// );
/// assert!(rule.apply("elsewhere/src/lib.rs").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverRule {
    remove: String,
    add: String,
}

impl ResolverRule {
    /// Create a rule, slash-terminating each non-empty prefix.
    #[must_use]
    pub fn new(remove: &str, add: &str) -> Self {
        Self {
            remove: slash_terminate(remove),
            add: slash_terminate(add),
        }
    }

    /// The prefix this rule strips.
    #[must_use]
    pub fn remove(&self) -> &str {
        &self.remove
    }

    /// The prefix this rule substitutes.
    #[must_use]
    pub fn add(&self) -> &str {
        &self.add
    }

    /// Apply the substitution, if the path starts with the strip prefix.
    ///
    /// This is the textual rewrite only; whether the result names a live
    /// TOC entry is the caller's question.
    #[must_use]
    pub fn apply(&self, path: &str) -> Option<String> {
        path.strip_prefix(&self.remove)
            .map(|rest| format!("{}{rest}", self.add))
    }
}

impl fmt::Display for ResolverRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> {:?}", self.remove, self.add)
    }
}

fn slash_terminate(prefix: &str) -> String {
    if prefix.is_empty() || prefix.ends_with('/') {
        prefix.to_string()
    } else {
        format!("{prefix}/")
    }
}

/// The rules learned during one resolution pass.
///
/// Append-only: rules are tried in discovery order and the first applicable
/// one wins, so a later rule with the same strip prefix is shadowed rather
/// than deduplicated. Never persisted across passes.
#[derive(Debug, Clone, Default)]
pub struct ResolverCache {
    rules: Vec<ResolverRule>,
}

impl ResolverCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule.
    pub fn register(&mut self, rule: ResolverRule) {
        log::debug!("learned resolver rule {rule}");
        self.rules.push(rule);
    }

    /// Iterate over the rules in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &ResolverRule> {
        self.rules.iter()
    }

    /// Number of learned rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check whether any rules have been learned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Drives resolution of a sequence of paths against one TOC.
///
/// The resolver owns the mutable state of the pass; concurrent passes each
/// need their own `BatchResolver` (the TOC is cheap to clone).
///
/// # Examples
///
/// ```
/// use pathmap::{BatchResolver, TableOfContents};
///
/// let toc = TableOfContents::from_paths(["src/components/login.js"]);
/// let mut resolver = BatchResolver::new(toc);
///
/// let first = resolver.resolve("/Users/user/owner/repo/src/components/login.js");
/// assert_eq!(first.map(|p| p.into_string()).as_deref(), Some("src/components/login.js"));
///
/// // The entry is consumed: nothing is left to match.
/// assert!(resolver.resolve("src/components/login.js").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct BatchResolver {
    toc: TableOfContents,
    index: PathIndex,
    cache: ResolverCache,
    min_ancestors: usize,
}

impl BatchResolver {
    /// Create a resolver over a TOC snapshot.
    ///
    /// The index is built once here; consumption only ever shrinks the live
    /// set, so the snapshot stays valid for the whole pass.
    #[must_use]
    pub fn new(toc: TableOfContents) -> Self {
        let index = PathIndex::build(&toc);
        Self {
            toc,
            index,
            cache: ResolverCache::new(),
            min_ancestors: 0,
        }
    }

    /// Require this many trailing ancestor segments to match on suffix
    /// matches. Exact matches are exempt.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmap::{BatchResolver, TableOfContents};
    ///
    /// let toc = TableOfContents::from_paths(["x/y/z"]);
    /// let mut resolver = BatchResolver::new(toc).with_min_ancestors(1);
    /// assert!(resolver.resolve("R/z").is_none());
    /// ```
    #[must_use]
    pub fn with_min_ancestors(mut self, min_ancestors: usize) -> Self {
        self.min_ancestors = min_ancestors;
        self
    }

    /// Resolve one raw path, consuming the matched entry.
    ///
    /// Input that cleans to nothing resolves to `None` without disturbing
    /// the rest of the pass.
    pub fn resolve(&mut self, raw: &str) -> Option<CanonicalPath> {
        let path = match CanonicalPath::new(raw) {
            Ok(path) => path,
            Err(err) => {
                log::debug!("skipping unresolvable input: {err}");
                return None;
            }
        };
        let resolution =
            matcher::resolve_with(&self.index, &self.toc, &self.cache, &path, self.min_ancestors)?;
        let entry = self.toc.take(resolution.entry.as_str())?;
        if let Some(rule) = resolution.discovered {
            self.cache.register(rule);
        }
        Some(entry)
    }

    /// Resolve a sequence of raw paths lazily, one result per input, in
    /// input order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmap::{BatchResolver, TableOfContents};
    ///
    /// let toc = TableOfContents::from_paths(["a/b.py", "c/d.py"]);
    /// let mut resolver = BatchResolver::new(toc);
    /// let resolved: Vec<_> = resolver.resolve_all(["c/d.py", "nope.py"]).collect();
    ///
    /// assert_eq!(resolved[0].as_ref().map(|p| p.as_str()), Some("c/d.py"));
    /// assert!(resolved[1].is_none());
    /// ```
    pub fn resolve_all<'resolver, I, S>(
        &'resolver mut self,
        paths: I,
    ) -> impl Iterator<Item = Option<CanonicalPath>> + 'resolver
    where
        I: IntoIterator<Item = S>,
        I::IntoIter: 'resolver,
        S: AsRef<str>,
    {
        paths.into_iter().map(move |raw| self.resolve(raw.as_ref()))
    }

    /// The live working set: entries not yet consumed by a match.
    #[must_use]
    pub fn remaining(&self) -> &TableOfContents {
        &self.toc
    }

    /// The rules learned so far in this pass.
    #[must_use]
    pub fn cache(&self) -> &ResolverCache {
        &self.cache
    }

    /// The configured ancestor requirement.
    #[must_use]
    pub fn min_ancestors(&self) -> usize {
        self.min_ancestors
    }
}

/// Resolve `paths` against `toc` in one pass.
///
/// Convenience wrapper that owns the [`BatchResolver`] inside the returned
/// iterator. Results are lazy, in input order, one per input; unmatched and
/// malformed inputs yield `None`.
///
/// # Examples
///
/// ```
/// use pathmap::{resolve_paths, TableOfContents};
///
/// let toc = TableOfContents::from_paths(["x/y/z"]);
/// let resolved: Vec<_> = resolve_paths(toc, ["w/x/y/z", "R/z"], 0).collect();
///
/// assert_eq!(resolved[0].as_ref().map(|p| p.as_str()), Some("x/y/z"));
/// assert!(resolved[1].is_none());
/// ```
pub fn resolve_paths<I, S>(
    toc: TableOfContents,
    paths: I,
    min_ancestors: usize,
) -> impl Iterator<Item = Option<CanonicalPath>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut resolver = BatchResolver::new(toc).with_min_ancestors(min_ancestors);
    paths.into_iter().map(move |raw| resolver.resolve(raw.as_ref()))
}
