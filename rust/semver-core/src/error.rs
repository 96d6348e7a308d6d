//! Parse errors.

use thiserror::Error;

/// Errors produced while parsing or constructing a [`Version`](crate::Version).
///
/// The set is closed: every rejected input maps to exactly one variant. The
/// `Invalid*` variants carry the whole offending section, not just the bad
/// identifier, so callers can point at what they passed in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input string was empty.
    #[error("empty version string")]
    EmptyVersion,

    /// Nothing precedes the first `-` or `+`.
    #[error("missing major.minor.patch core")]
    EmptyCore,

    /// A `-` was present but no pre-release label followed it.
    #[error("empty pre-release label")]
    EmptyPreRelease,

    /// A `+` was present but no build label followed it.
    #[error("empty build metadata label")]
    EmptyBuild,

    /// More than one `+` appeared in the input.
    #[error("more than one '+' in version string")]
    MultipleBuilds,

    /// The core is not three dot-separated numbers without leading zeros.
    #[error("invalid version core: {0:?}")]
    InvalidCoreFormat(String),

    /// The pre-release label holds an identifier outside `[0-9A-Za-z-]`, an
    /// empty identifier, or a numeric identifier with a leading zero.
    #[error("invalid pre-release label: {0:?}")]
    InvalidPreReleaseFormat(String),

    /// The build label holds an identifier outside `[0-9A-Za-z-]` or an empty
    /// identifier.
    #[error("invalid build metadata label: {0:?}")]
    InvalidBuildFormat(String),
}
