//! Error types for the pathmap library.
//!
//! The resolution core is deliberately hard to fail: a path that cannot be
//! matched is an ordinary `None` result, never an error. The only genuine
//! failure mode is input that does not denote a path at all.

use thiserror::Error;

/// Result type alias for operations that may fail with a pathmap error.
///
/// # Examples
///
/// ```
/// use pathmap::{CanonicalPath, Result};
///
/// fn example_operation() -> Result<CanonicalPath> {
///     CanonicalPath::new("src/lib.rs")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathmap library.
#[derive(Debug, Error)]
pub enum Error {
    /// A raw path that is empty (or reduces to empty) after normalization.
    ///
    /// Strings such as `""`, `"/"`, `"."` or `"**/"` carry no path segments
    /// once cleaned and cannot participate in resolution.
    #[error("malformed path {path:?}: {reason}")]
    MalformedPath {
        /// The raw input as received.
        path: String,
        /// The reason the input is not a usable path.
        reason: String,
    },
}

impl Error {
    /// Check if the error indicates a malformed input path.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmap::CanonicalPath;
    ///
    /// let err = CanonicalPath::new("**/").unwrap_err();
    /// assert!(err.is_malformed_path());
    /// ```
    #[must_use]
    pub fn is_malformed_path(&self) -> bool {
        matches!(self, Self::MalformedPath { .. })
    }
}
