//! SemVer 2.0.0 version parser
//!
//! Matching is a pure function of the input. A string outside the grammar
//! yields an unmatched [`ParsedVersion`]; only faults in field extraction are
//! reported as [`VersionError`].

use std::str::FromStr;

use regex::{Captures, Regex};
use tracing::{debug, error, trace};

use crate::version::error::VersionError;
use crate::version::grammar;
use crate::version::parsed::ParsedVersion;

/// Applies the process-wide compiled grammar to candidate strings.
#[derive(Debug, Clone, Copy)]
pub struct VersionParser {
    grammar: &'static Regex,
}

impl VersionParser {
    pub fn new() -> Self {
        Self {
            grammar: grammar::compiled(),
        }
    }

    /// Check whether `input` is a complete SemVer 2.0.0 version string
    pub fn is_match(&self, input: &str) -> bool {
        self.grammar.is_match(input)
    }

    /// Run the grammar against the source of `version`.
    ///
    /// Returns a new value; `version` itself is left untouched, so parsing
    /// the same value twice gives identical results.
    pub fn parse(&self, version: &ParsedVersion) -> Result<ParsedVersion, VersionError> {
        let source = version.source();

        let Some(caps) = self.grammar.captures(source) else {
            debug!("'{}' does not match the SemVer grammar", source);
            return Ok(ParsedVersion::from_string(source));
        };

        let numbers = (
            numeric(&caps, grammar::MAJOR)?,
            numeric(&caps, grammar::MINOR)?,
            numeric(&caps, grammar::PATCH)?,
        );
        let prerelease = self.optional(&caps, grammar::PRERELEASE)?;
        let build_metadata = self.optional(&caps, grammar::BUILD_METADATA)?;

        trace!("parsed '{}' as {:?}", source, numbers);
        Ok(ParsedVersion::matched(
            source.to_string(),
            numbers,
            prerelease,
            build_metadata,
        ))
    }

    /// Convenience for [`ParsedVersion::from_string`] followed by [`parse`](Self::parse)
    pub fn parse_str(&self, input: &str) -> Result<ParsedVersion, VersionError> {
        self.parse(&ParsedVersion::from_string(input))
    }

    /// Extract an optional group, empty when it did not participate.
    fn optional(&self, caps: &Captures<'_>, name: &'static str) -> Result<String, VersionError> {
        match caps.name(name) {
            Some(m) => Ok(m.as_str().to_string()),
            None if self.grammar.capture_names().flatten().any(|n| n == name) => {
                Ok(String::new())
            }
            None => Err(missing_capture(name)),
        }
    }
}

impl Default for VersionParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse `input` with the shared grammar
pub fn parse(input: &str) -> Result<ParsedVersion, VersionError> {
    VersionParser::new().parse_str(input)
}

impl FromStr for ParsedVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

fn numeric(caps: &Captures<'_>, name: &'static str) -> Result<u64, VersionError> {
    let value = caps
        .name(name)
        .ok_or_else(|| missing_capture(name))?
        .as_str();

    value.parse::<u64>().map_err(|source| {
        error!("{} component '{}' exceeds u64: {}", name, value, source);
        VersionError::NumericOverflow {
            component: name,
            value: value.to_string(),
            source,
        }
    })
}

fn missing_capture(name: &'static str) -> VersionError {
    error!("SemVer grammar matched without capture group '{}'", name);
    VersionError::MissingCapture(name)
}
