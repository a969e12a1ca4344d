//! Path string normalization.
//!
//! Reported paths arrive in whatever shape the reporting tool produced:
//! Windows separators, shell-escaped spaces, stray carriage returns, leading
//! wildcard markers, `.`/`..` indirections. [`clean`] reduces all of these to
//! the canonical slash-delimited relative form the rest of the crate works
//! with.
//!
//! Normalization is purely textual: it never consults the filesystem or the
//! process working directory, so the same input always cleans to the same
//! output.

/// Normalize a raw path string to canonical relative form.
///
/// Steps, in order (each composes with the next):
/// 1. Trim leading and trailing whitespace.
/// 2. Strip leading `**/` wildcard-ancestor markers.
/// 3. Remove carriage returns.
/// 4. Replace escaped spaces (`\ `) with plain spaces.
/// 5. Replace backslashes with forward slashes.
/// 6. Collapse `.`/`..` and empty segments (see [`collapse`]).
///
/// The steps re-run until the string is stable: collapsing can expose edge
/// whitespace or a wildcard marker that a separator protected on the
/// previous pass.
///
/// Any input produces a deterministic output, possibly empty. The operation
/// is idempotent: `clean(clean(x)) == clean(x)`.
///
/// # Examples
///
/// ```
/// use pathmap::path::normalize::clean;
///
/// assert_eq!(clean("**/some/directory"), "some/directory");
/// assert_eq!(clean("some\\ very_long/directory\\ name"), "some very_long/directory name");
/// assert_eq!(clean("ms\\style\\directory"), "ms/style/directory");
/// assert_eq!(clean("a/b/../Path With\\ Space"), "a/Path With Space");
/// assert_eq!(clean("/Users/repo/src/main.rs"), "Users/repo/src/main.rs");
/// ```
#[must_use]
pub fn clean(raw: &str) -> String {
    let mut trimmed = raw.trim();
    while let Some(rest) = trimmed.strip_prefix("**/") {
        trimmed = rest;
    }
    let unescaped = trimmed
        .replace('\r', "")
        .replace("\\ ", " ")
        .replace('\\', "/");
    let collapsed = collapse(&unescaped);
    if collapsed == raw {
        collapsed
    } else {
        clean(&collapsed)
    }
}

/// Collapse the segments of a slash-delimited path.
///
/// Empty segments (including a leading root marker and trailing slashes) and
/// `.` segments are dropped. A `..` pops the previous segment; with nothing
/// left to pop it is dropped — a parent reference above the path's own root
/// stands for "some ancestor" and carries no information, like the `**/`
/// marker.
///
/// # Examples
///
/// ```
/// use pathmap::path::normalize::collapse;
///
/// assert_eq!(collapse("a/./b/../c"), "a/c");
/// assert_eq!(collapse("/a/b/"), "a/b");
/// assert_eq!(collapse("../a"), "a");
/// ```
#[must_use]
pub fn collapse(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}
