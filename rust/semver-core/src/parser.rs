//! Version string parser.
//!
//! Parsing runs in three stages:
//!
//! 1. [`Parser::split_sections`] cuts the input into core, pre-release and
//!    build sections. The split on `+` happens first and over the whole
//!    input; the split on `-` happens only inside the part before `+`, at the
//!    first hyphen, because labels may contain hyphens themselves.
//! 2. [`Parser::core`] reads `major.minor.patch`.
//! 3. [`Parser::pre_release`] and [`Parser::build`] read the labels.
//!
//! [`Parser::construct`] runs stage 3 alone for callers that already hold the
//! numeric core.

use crate::error::ParseError;
use crate::identifier::{is_numeric_literal, Identifier, Label};
use crate::version::Version;
use tracing::trace;

/// The raw sections of a version string, before any validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSections<'a> {
    /// Everything before the first `-` (or `+` when there is no pre-release).
    pub core: &'a str,
    /// Text between the first `-` and the `+`, if a `-` was present.
    pub pre_release: Option<&'a str>,
    /// Text after the `+`, if present.
    pub build: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LabelKind {
    PreRelease,
    Build,
}

impl LabelKind {
    fn empty(self) -> ParseError {
        match self {
            LabelKind::PreRelease => ParseError::EmptyPreRelease,
            LabelKind::Build => ParseError::EmptyBuild,
        }
    }

    fn invalid(self, raw: &str) -> ParseError {
        match self {
            LabelKind::PreRelease => ParseError::InvalidPreReleaseFormat(raw.to_string()),
            LabelKind::Build => ParseError::InvalidBuildFormat(raw.to_string()),
        }
    }

    fn accepts(self, id: &Identifier) -> bool {
        match self {
            LabelKind::PreRelease => id.is_valid() && !id.has_leading_zero(),
            // Build identifiers may be zero-padded digit runs ("build.007").
            LabelKind::Build => id.is_valid(),
        }
    }
}

/// Stateless SemVer 2.0.0 parser.
///
/// Holds no data, so one instance (or [`Parser::new`] on every call) can
/// serve any number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parser;

impl Parser {
    pub const fn new() -> Self {
        Parser
    }

    /// Parse a full version string.
    pub fn parse(&self, raw: &str) -> Result<Version, ParseError> {
        self.parse_inner(raw)
            .inspect_err(|err| trace!(input = raw, error = %err, "rejected version string"))
    }

    fn parse_inner(&self, raw: &str) -> Result<Version, ParseError> {
        let sections = self.split_sections(raw)?;
        let (major, minor, patch) = self.core(sections.core)?;
        self.labels(major, minor, patch, sections.pre_release, sections.build)
    }

    /// Build a version from a numeric core and optional raw labels.
    ///
    /// Only label errors can come back from here; the section errors
    /// (`EmptyVersion`, `EmptyCore`, `MultipleBuilds`) belong to full-string
    /// parsing.
    pub fn construct(
        &self,
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Option<&str>,
        build: Option<&str>,
    ) -> Result<Version, ParseError> {
        self.labels(major, minor, patch, pre_release, build).inspect_err(|err| {
            trace!(
                major,
                minor,
                patch,
                pre_release,
                build,
                error = %err,
                "rejected version components"
            )
        })
    }

    fn labels(
        &self,
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Option<&str>,
        build: Option<&str>,
    ) -> Result<Version, ParseError> {
        let pre_release = pre_release.map(|raw| self.pre_release(raw)).transpose()?;
        let build = build.map(|raw| self.build(raw)).transpose()?;
        Ok(Version::from_parts(major, minor, patch, pre_release, build))
    }

    /// Stage 1: split the input into its raw sections.
    pub fn split_sections<'a>(&self, raw: &'a str) -> Result<RawSections<'a>, ParseError> {
        if raw.is_empty() {
            return Err(ParseError::EmptyVersion);
        }

        let mut fragments = raw.split('+');
        let head = fragments.next().unwrap_or(raw);
        let build = fragments.next();
        if fragments.next().is_some() {
            return Err(ParseError::MultipleBuilds);
        }
        if build == Some("") {
            return Err(ParseError::EmptyBuild);
        }

        let (core, pre_release) = match head.split_once('-') {
            Some((_, "")) => return Err(ParseError::EmptyPreRelease),
            Some((core, pre_release)) => (core, Some(pre_release)),
            None => (head, None),
        };

        Ok(RawSections {
            core,
            pre_release,
            build,
        })
    }

    /// Stage 2: read `major.minor.patch`.
    pub fn core(&self, raw: &str) -> Result<(u64, u64, u64), ParseError> {
        if raw.is_empty() {
            return Err(ParseError::EmptyCore);
        }

        let invalid = || ParseError::InvalidCoreFormat(raw.to_string());
        let fields: Vec<&str> = raw.split('.').collect();
        let [major, minor, patch] = fields.as_slice() else {
            return Err(invalid());
        };

        Ok((
            core_number(major).ok_or_else(invalid)?,
            core_number(minor).ok_or_else(invalid)?,
            core_number(patch).ok_or_else(invalid)?,
        ))
    }

    /// Stage 3 for the text after `-`.
    pub fn pre_release(&self, raw: &str) -> Result<Label, ParseError> {
        self.label(raw, LabelKind::PreRelease)
    }

    /// Stage 3 for the text after `+`.
    pub fn build(&self, raw: &str) -> Result<Label, ParseError> {
        self.label(raw, LabelKind::Build)
    }

    fn label(&self, raw: &str, kind: LabelKind) -> Result<Label, ParseError> {
        if raw.is_empty() {
            return Err(kind.empty());
        }

        let identifiers: Vec<Identifier> = raw.split('.').map(Identifier::classify).collect();
        if !identifiers.iter().all(|id| kind.accepts(id)) {
            return Err(kind.invalid(raw));
        }

        Ok(Label::new(identifiers))
    }
}

/// A core field: a numeric literal that fits in `u64`.
fn core_number(raw: &str) -> Option<u64> {
    if !is_numeric_literal(raw) {
        return None;
    }
    raw.parse::<u64>().ok()
}
