#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathmap
//!
//! A library for resolving reported file paths against a known table of
//! contents.
//!
//! Paths observed on one machine — a coverage report, a stack trace, a build
//! log — rarely line up with the source tree they describe: roots differ,
//! separators differ, casing differs, depth differs. Given a set of such
//! observed paths and the canonical set of real paths (the "table of
//! contents", TOC), this library finds for each observed path the single TOC
//! entry it most plausibly refers to, or reports no match.
//!
//! ## Core Types
//!
//! - [`CanonicalPath`]: a cleaned, slash-delimited, relative path
//! - [`TableOfContents`]: the ground-truth working set
//! - [`PathIndex`]: the filename-keyed suffix index over a TOC snapshot
//! - [`BatchResolver`] and [`resolve_paths`]: one resolution pass
//! - [`ResolverRule`] and [`ResolverCache`]: learned root translations
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use pathmap::{resolve_paths, TableOfContents};
//!
//! let toc = TableOfContents::from_paths(["src/components/login.js", "path.py"]);
//! let reported = [
//!     "/Users/user/owner/repo/src/components/login.js",
//!     "path.py",
//!     "not/found.py",
//! ];
//!
//! let resolved: Vec<_> = resolve_paths(toc, reported, 0).collect();
//! assert_eq!(resolved[0].as_ref().map(|p| p.as_str()), Some("src/components/login.js"));
//! assert_eq!(resolved[1].as_ref().map(|p| p.as_str()), Some("path.py"));
//! assert!(resolved[2].is_none());
//! ```
//!
//! Matching never touches the filesystem: the TOC and the observed paths are
//! plain in-memory strings, and each resolution pass is single-threaded and
//! deterministic.

pub mod error;
pub mod index;
pub mod matcher;
pub mod path;
pub mod resolver;
pub mod toc;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use index::{PathIndex, SuffixCandidate};
pub use matcher::{check_ancestors, Resolution};
pub use path::CanonicalPath;
pub use resolver::{resolve_paths, BatchResolver, ResolverCache, ResolverRule};
pub use toc::TableOfContents;
