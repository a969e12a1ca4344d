//! Path cleaning and the canonical path type.
//!
//! Observed paths come from tools running on other machines and other
//! operating systems; before anything can be matched they are reduced to one
//! canonical shape. This module provides the cleaning pipeline
//! ([`normalize`]) and the [`CanonicalPath`] type that guards its
//! invariants: relative, forward-slash delimited, non-empty, stable under
//! re-cleaning.
//!
//! # Examples
//!
//! ```
//! use pathmap::CanonicalPath;
//!
//! let path = CanonicalPath::new("C:\\projects\\app\\src\\main.rs").unwrap();
//! assert_eq!(path.as_str(), "C:/projects/app/src/main.rs");
//! ```

pub mod normalize;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use types::CanonicalPath;
