//! The parsed version value.

use crate::comparator::Comparator;
use crate::error::ParseError;
use crate::identifier::Label;
use crate::parser::Parser;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A SemVer 2.0.0 version.
///
/// Equality, ordering and hashing follow SemVer precedence: the build label
/// is kept for display but never takes part in them, so `1.0.0+a == 1.0.0+b`.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<Label>,
    build: Option<Label>,
}

impl Version {
    /// A release version with no labels.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: None,
            build: None,
        }
    }

    /// A version with optional raw labels, each validated as it would be
    /// after `-` or `+` in a full version string.
    pub fn with_labels(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Option<&str>,
        build: Option<&str>,
    ) -> Result<Self, ParseError> {
        Parser::new().construct(major, minor, patch, pre_release, build)
    }

    /// Parse a full version string such as `1.0.0-rc.1+build.5`.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        Parser::new().parse(raw)
    }

    pub(crate) fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Option<Label>,
        build: Option<Label>,
    ) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release,
            build,
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The `(major, minor, patch)` triple.
    pub fn core(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }

    pub fn pre_release(&self) -> Option<&Label> {
        self.pre_release.as_ref()
    }

    pub fn build(&self) -> Option<&Label> {
        self.build.as_ref()
    }

    /// The pre-release label as text, without the leading `-`.
    pub fn pre_release_str(&self) -> Option<String> {
        self.pre_release.as_ref().map(Label::to_string)
    }

    /// The build label as text, without the leading `+`.
    pub fn build_str(&self) -> Option<String> {
        self.build.as_ref().map(Label::to_string)
    }

    pub fn is_prerelease(&self) -> bool {
        self.pre_release.is_some()
    }

    /// The same core with both labels dropped.
    pub fn base(&self) -> Self {
        Self::new(self.major, self.minor, self.patch)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre_release {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        Comparator::new().compare(self, other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        Comparator::new().compare(self, other)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with `eq`, so the build label stays out.
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_has_no_labels() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.core(), (1, 2, 3));
        assert!(!v.is_prerelease());
        assert_eq!(v.build_str(), None);
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn test_with_labels() {
        let v = Version::with_labels(1, 0, 0, Some("beta.2"), Some("sha.abc")).unwrap();
        assert_eq!(v.pre_release_str().as_deref(), Some("beta.2"));
        assert_eq!(v.build_str().as_deref(), Some("sha.abc"));
        assert_eq!(v.to_string(), "1.0.0-beta.2+sha.abc");
    }

    #[test]
    fn test_with_labels_only_build() {
        let v = Version::with_labels(0, 1, 0, None, Some("exp-1")).unwrap();
        assert_eq!(v.to_string(), "0.1.0+exp-1");
    }

    #[test]
    fn test_from_str() {
        let v: Version = "10.20.30-rc.1+b".parse().unwrap();
        assert_eq!(v.major(), 10);
        assert_eq!(v.minor(), 20);
        assert_eq!(v.patch(), 30);
        assert_eq!(v.pre_release().map(Label::len), Some(2));
    }

    #[test]
    fn test_base_drops_labels() {
        let v: Version = "1.2.3-alpha+b".parse().unwrap();
        assert_eq!(v.base().to_string(), "1.2.3");
    }

    #[test]
    fn test_equality_ignores_build() {
        let a: Version = "1.0.0-alpha+1".parse().unwrap();
        let b: Version = "1.0.0-alpha+2".parse().unwrap();
        assert_eq!(a, b);
        assert_ne!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        let mut set = HashSet::new();
        set.insert("1.0.0+a".parse::<Version>().unwrap());
        set.insert("1.0.0+b".parse::<Version>().unwrap());
        set.insert("1.0.0".parse::<Version>().unwrap());
        set.insert("1.0.0-rc".parse::<Version>().unwrap());
        assert_eq!(set.len(), 2);
    }
}
