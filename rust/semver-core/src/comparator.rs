//! SemVer precedence.

use crate::identifier::Identifier;
use crate::version::Version;
use std::cmp::Ordering;

/// Stateless precedence comparator.
///
/// Build metadata is never consulted, so two versions that differ only in
/// their build label compare `Equal`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Comparator;

impl Comparator {
    pub const fn new() -> Self {
        Comparator
    }

    /// Compare two versions by SemVer precedence.
    pub fn compare(&self, lhs: &Version, rhs: &Version) -> Ordering {
        let core = lhs
            .major()
            .cmp(&rhs.major())
            .then(lhs.minor().cmp(&rhs.minor()))
            .then(lhs.patch().cmp(&rhs.patch()));
        if core != Ordering::Equal {
            return core;
        }

        // A release outranks every pre-release of the same core.
        match (lhs.pre_release(), rhs.pre_release()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => self.compare_identifiers(a.as_slice(), b.as_slice()),
        }
    }

    /// Compare two identifier lists position by position.
    ///
    /// The first differing identifier decides. When one list is a prefix of
    /// the other, the shorter one comes first.
    pub fn compare_identifiers(&self, lhs: &[Identifier], rhs: &[Identifier]) -> Ordering {
        for index in 0..lhs.len().max(rhs.len()) {
            match (lhs.get(index), rhs.get(index)) {
                (Some(a), Some(b)) => match a.cmp(b) {
                    Ordering::Equal => continue,
                    ord => return ord,
                },
                (Some(_), None) => return Ordering::Greater,
                (None, Some(_)) => return Ordering::Less,
                (None, None) => break,
            }
        }
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    const CMP: Comparator = Comparator::new();

    fn v(s: &str) -> Version {
        Parser::new().parse(s).unwrap()
    }

    fn ids(raw: &str) -> Vec<Identifier> {
        raw.split('.').map(Identifier::classify).collect()
    }

    #[test]
    fn test_core_decides_first() {
        assert_eq!(CMP.compare(&v("1.0.0"), &v("2.0.0")), Ordering::Less);
        assert_eq!(CMP.compare(&v("1.10.0"), &v("1.9.0")), Ordering::Greater);
        assert_eq!(CMP.compare(&v("1.0.1-alpha"), &v("1.0.0")), Ordering::Greater);
        assert_eq!(CMP.compare(&v("0.0.1"), &v("0.0.1")), Ordering::Equal);
    }

    #[test]
    fn test_release_outranks_prerelease() {
        assert_eq!(CMP.compare(&v("1.0.0-rc.1"), &v("1.0.0")), Ordering::Less);
        assert_eq!(CMP.compare(&v("1.0.0"), &v("1.0.0-zzz")), Ordering::Greater);
    }

    #[test]
    fn test_build_is_ignored() {
        assert_eq!(CMP.compare(&v("1.0.0+a"), &v("1.0.0+b")), Ordering::Equal);
        assert_eq!(
            CMP.compare(&v("1.0.0-alpha+001"), &v("1.0.0-alpha")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_identifier_lists() {
        assert_eq!(CMP.compare_identifiers(&ids("alpha"), &ids("alpha.1")), Ordering::Less);
        assert_eq!(CMP.compare_identifiers(&ids("alpha.11"), &ids("alpha.2")), Ordering::Greater);
        assert_eq!(CMP.compare_identifiers(&ids("9"), &ids("alpha")), Ordering::Less);
        assert_eq!(CMP.compare_identifiers(&ids("beta.2"), &ids("beta.2")), Ordering::Equal);
        assert_eq!(CMP.compare_identifiers(&ids("1.z"), &ids("2.a")), Ordering::Less);
    }

    #[test]
    fn test_hyphenated_identifiers_are_strings() {
        assert_eq!(CMP.compare(&v("2.0.0-1"), &v("2.0.0--1")), Ordering::Less);
        assert_eq!(CMP.compare(&v("2.0.0--1"), &v("2.0.0--2")), Ordering::Less);
    }
}
