//! Strict Semantic Versioning 2.0.0 parsing and precedence.
//!
//! This crate accepts exactly the SemVer 2.0.0 grammar, nothing more:
//! - `major.minor.patch` core with no leading zeros
//! - optional `-` pre-release label and `+` build label, each a dot-separated
//!   list of `[0-9A-Za-z-]` identifiers
//! - precedence per the SemVer rules, with build metadata ignored
//!
//! ```
//! use semver_core::{compare, parse};
//! use std::cmp::Ordering;
//!
//! let rc = parse("1.0.0-rc.1").unwrap();
//! let release = parse("1.0.0+build.5").unwrap();
//! assert_eq!(compare(&rc, &release), Ordering::Less);
//! ```
//!
//! Ranges and constraint solving are out of scope.

pub mod comparator;
pub mod error;
pub mod identifier;
pub mod parser;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod version;

pub use comparator::Comparator;
pub use error::ParseError;
pub use identifier::{Identifier, Label};
pub use parser::{Parser, RawSections};
pub use version::Version;

use std::cmp::Ordering;

/// Parse a full version string.
pub fn parse(raw: &str) -> Result<Version, ParseError> {
    Parser::new().parse(raw)
}

/// Build a version from its core numbers and optional raw labels.
pub fn construct(
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<&str>,
    build: Option<&str>,
) -> Result<Version, ParseError> {
    Parser::new().construct(major, minor, patch, pre_release, build)
}

/// Compare two versions by SemVer precedence.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    Comparator::new().compare(a, b)
}

/// Render a version in canonical form. `parse(&render(v))` yields `v` again.
pub fn render(v: &Version) -> String {
    v.to_string()
}
