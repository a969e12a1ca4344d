//! Core types for path handling.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::normalize;

/// A cleaned, slash-delimited, relative path.
///
/// `CanonicalPath` is the only path representation the resolution core works
/// with: construction runs the raw input through [`normalize::clean`], so a
/// value of this type is guaranteed non-empty, relative, forward-slash
/// delimited and free of `.`/`..` indirections. Cleaning an already-canonical
/// path leaves it unchanged.
///
/// # Examples
///
/// ```
/// use pathmap::CanonicalPath;
///
/// let path = CanonicalPath::new("ms\\style\\directory").unwrap();
/// assert_eq!(path.as_str(), "ms/style/directory");
/// assert_eq!(path.segment_count(), 3);
/// assert_eq!(path.file_name(), "directory");
///
/// // Empty inputs carry no path at all
/// assert!(CanonicalPath::new("**/").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CanonicalPath(String);

impl CanonicalPath {
    /// Create a canonical path from a raw string, normalizing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPath`] if no segments remain after cleaning
    /// (inputs such as `""`, `"/"`, `"."` or `"**/"`).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmap::CanonicalPath;
    ///
    /// let path = CanonicalPath::new("  /src/./lib.rs  ").unwrap();
    /// assert_eq!(path.as_str(), "src/lib.rs");
    /// ```
    pub fn new(raw: &str) -> Result<Self> {
        let cleaned = normalize::clean(raw);
        if cleaned.is_empty() {
            return Err(Error::MalformedPath {
                path: raw.to_string(),
                reason: "no segments remain after cleaning".to_string(),
            });
        }
        Ok(Self(cleaned))
    }

    /// Get the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the path's segments, root-most first.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmap::CanonicalPath;
    ///
    /// let path = CanonicalPath::new("a/b/c").unwrap();
    /// let segments: Vec<&str> = path.segments().collect();
    /// assert_eq!(segments, ["a", "b", "c"]);
    /// ```
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.0.split('/')
    }

    /// Number of segments in the path. Always at least one.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments().count()
    }

    /// The final segment of the path.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmap::CanonicalPath;
    ///
    /// let path = CanonicalPath::new("src/components/login.js").unwrap();
    /// assert_eq!(path.file_name(), "login.js");
    /// ```
    #[must_use]
    pub fn file_name(&self) -> &str {
        // A canonical path has at least one segment, so rsplit always yields.
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Convert into the underlying `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CanonicalPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
