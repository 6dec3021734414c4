//! Parsed version data model

use std::fmt;

use serde::Serialize;

/// Outcome of matching one string against the SemVer grammar.
///
/// A value starts out unparsed (see [`ParsedVersion::from_string`]) and is
/// populated by [`VersionParser::parse`](crate::version::VersionParser::parse).
/// When [`is_matched`](Self::is_matched) is false the numeric fields are zero
/// and the identifier runs are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedVersion {
    source: String,
    matched: bool,
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: String,
    build_metadata: String,
}

impl ParsedVersion {
    /// Wraps a candidate string without parsing it.
    pub fn from_string(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    pub(crate) fn matched(
        source: String,
        (major, minor, patch): (u64, u64, u64),
        prerelease: String,
        build_metadata: String,
    ) -> Self {
        Self {
            source,
            matched: true,
            major,
            minor,
            patch,
            prerelease,
            build_metadata,
        }
    }

    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Returns the input string if it matched the grammar, otherwise `""`.
    pub fn original_string(&self) -> &str {
        if self.matched { &self.source } else { "" }
    }

    /// Returns the input string verbatim, whether or not it matched.
    pub fn source(&self) -> &str {
        &self.source
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

    /// Raw prerelease run without the leading `-`
    pub fn prerelease(&self) -> &str {
        &self.prerelease
    }

    /// Raw build metadata run without the leading `+`
    pub fn build_metadata(&self) -> &str {
        &self.build_metadata
    }

    /// Iterates the dot-separated prerelease identifiers.
    ///
    /// Yields nothing when the version has no prerelease.
    pub fn prerelease_identifiers(&self) -> impl Iterator<Item = &str> {
        identifiers(&self.prerelease)
    }

    /// Iterates the dot-separated build metadata identifiers.
    ///
    /// Yields nothing when the version has no build metadata.
    pub fn build_metadata_identifiers(&self) -> impl Iterator<Item = &str> {
        identifiers(&self.build_metadata)
    }
}

fn identifiers(run: &str) -> impl Iterator<Item = &str> {
    run.split('.').filter(move |_| !run.is_empty())
}

/// Reassembles `major.minor.patch[-prerelease][+build]`; empty when unmatched.
impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.matched {
            return Ok(());
        }
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.build_metadata.is_empty() {
            write!(f, "+{}", self.build_metadata)?;
        }
        Ok(())
    }
}
