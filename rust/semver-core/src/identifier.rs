//! Dot-separated identifiers of pre-release and build labels.
//!
//! A label such as `alpha.1.x-y` is a [`Label`] holding one [`Identifier`]
//! per dot segment. Segments are classified when they are read:
//!
//! - `1`, `42`, `0` become [`Identifier::Numeric`]
//! - `alpha`, `x-y`, `-1`, `01` become [`Identifier::String`]
//!
//! Classification never fails. Whether a segment is acceptable is a separate
//! question answered by [`Identifier::is_valid`] and
//! [`Identifier::has_leading_zero`], so the parser can report the right error
//! for the label the segment came from.

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use std::cmp::Ordering;
use std::fmt;

/// One segment of a pre-release or build label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// A digits-only segment without a leading zero (e.g. `"1"` in `alpha.1`).
    /// Stored at arbitrary precision so long digit runs still order by value.
    Numeric(BigUint),
    /// Any other segment (e.g. `"alpha"`, `"rc-1"`, `"-1"`).
    String(String),
}

impl Identifier {
    /// Classify a raw dot segment.
    pub fn classify(raw: &str) -> Self {
        if is_numeric_literal(raw) {
            if let Some(n) = BigUint::parse_bytes(raw.as_bytes(), 10) {
                return Identifier::Numeric(n);
            }
        }
        Identifier::String(raw.to_string())
    }

    /// Check the segment against the `[0-9A-Za-z-]+` charset.
    ///
    /// Numeric identifiers are valid by construction.
    pub fn is_valid(&self) -> bool {
        match self {
            Identifier::Numeric(_) => true,
            Identifier::String(s) => {
                !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
            }
        }
    }

    /// True for a digits-only segment that was kept as a string because it
    /// starts with `0` (e.g. `"01"`). Such segments are not allowed in
    /// pre-release labels.
    pub fn has_leading_zero(&self) -> bool {
        match self {
            Identifier::Numeric(_) => false,
            Identifier::String(s) => s.len() > 1 && s.bytes().all(|b| b.is_ascii_digit()),
        }
    }

    /// Whether this is a numeric identifier.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }

    /// The numeric value, if it is numeric and fits in a `u64`.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Identifier::Numeric(n) => n.to_u64(),
            Identifier::String(_) => None,
        }
    }

    /// The text of a string identifier.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Identifier::Numeric(_) => None,
            Identifier::String(s) => Some(s),
        }
    }
}

/// Non-empty, all ASCII digits, and no leading zero unless it is exactly `"0"`.
///
/// Checked byte by byte rather than through an integer parser, so a leading
/// sign (`-1`, `+1`) always falls through to a string identifier.
pub(crate) fn is_numeric_literal(raw: &str) -> bool {
    !raw.is_empty()
        && raw.bytes().all(|b| b.is_ascii_digit())
        && (raw.len() == 1 || !raw.starts_with('0'))
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::String(s) => f.write_str(s),
        }
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        // Numeric identifiers always have lower precedence than alphanumeric ones.
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            (Identifier::Numeric(_), Identifier::String(_)) => Ordering::Less,
            (Identifier::String(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::String(a), Identifier::String(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for Identifier {
    fn from(n: u64) -> Self {
        Identifier::Numeric(BigUint::from(n))
    }
}

/// An ordered list of identifiers, as found after `-` or `+`.
///
/// A label always holds at least one identifier; an absent label is
/// represented by `Option<Label>` on [`Version`](crate::Version).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(Vec<Identifier>);

impl Label {
    /// Only the parser builds labels, and splitting a string always yields
    /// at least one segment.
    pub(crate) fn new(identifiers: Vec<Identifier>) -> Self {
        debug_assert!(!identifiers.is_empty(), "label without identifiers");
        Label(identifiers)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Identifier> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Identifier] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present to pair with [`Label::len`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Label {
    type Item = &'a Identifier;
    type IntoIter = std::slice::Iter<'a, Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", id)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(n: u64) -> Identifier {
        Identifier::from(n)
    }

    fn string(s: &str) -> Identifier {
        Identifier::String(s.to_string())
    }

    #[test]
    fn test_classify_numeric() {
        assert_eq!(Identifier::classify("0"), numeric(0));
        assert_eq!(Identifier::classify("1"), numeric(1));
        assert_eq!(Identifier::classify("1234"), numeric(1234));
    }

    #[test]
    fn test_classify_string() {
        assert_eq!(Identifier::classify("alpha"), string("alpha"));
        assert_eq!(Identifier::classify("1a"), string("1a"));
        assert_eq!(Identifier::classify("01"), string("01"));
        assert_eq!(Identifier::classify("00"), string("00"));
        assert_eq!(Identifier::classify(""), string(""));
    }

    #[test]
    fn test_classify_signed_digits_as_string() {
        assert_eq!(Identifier::classify("-1"), string("-1"));
        assert_eq!(Identifier::classify("+1"), string("+1"));
    }

    #[test]
    fn test_classify_beyond_u64() {
        let raw = "123456789012345678901234567890";
        let id = Identifier::classify(raw);
        assert!(id.is_numeric());
        assert_eq!(id.as_u64(), None);
        assert_eq!(id.to_string(), raw);
        assert!(id > numeric(u64::MAX));
    }

    #[test]
    fn test_validity() {
        assert!(numeric(7).is_valid());
        assert!(string("alpha-1").is_valid());
        assert!(string("-").is_valid());
        assert!(string("01").is_valid());
        assert!(!string("").is_valid());
        assert!(!string("a b").is_valid());
        assert!(!string("a_b").is_valid());
        assert!(!string("naïve").is_valid());
        assert!(!string("#").is_valid());
    }

    #[test]
    fn test_leading_zero() {
        assert!(string("01").has_leading_zero());
        assert!(string("00").has_leading_zero());
        assert!(!string("0a").has_leading_zero());
        assert!(!numeric(0).has_leading_zero());
    }

    #[test]
    fn test_ordering() {
        assert!(numeric(2) < numeric(11));
        assert!(numeric(u64::MAX) < string("0a"));
        assert!(string("11") < string("2"));
        assert!(string("alpha") < string("beta"));
        assert!(string("Z") < string("a"));
        assert_eq!(string("rc").cmp(&string("rc")), Ordering::Equal);
    }

    #[test]
    fn test_label_display() {
        let label = Label::new(vec![string("alpha"), numeric(1), string("x-y")]);
        assert_eq!(label.to_string(), "alpha.1.x-y");
        assert_eq!(label.len(), 3);
        assert!(!label.is_empty());
    }
}
