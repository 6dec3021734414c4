//! SemVer 2.0.0 grammar
//!
//! ```text
//! ^(major)\.(minor)\.(patch)(-(prerelease))?(\+(buildmetadata))?$
//! major, minor, patch := 0 | [1-9][0-9]*
//! prerelease-ident    := 0 | [1-9][0-9]* | [0-9]*[A-Za-z-][0-9A-Za-z-]*
//! buildmetadata-ident := [0-9A-Za-z-]+
//! ```
//!
//! Digit classes are spelled `[0-9]` because `\d` in the `regex` crate also
//! matches non-ASCII digits.

use std::sync::LazyLock;

use regex::Regex;

/// Capture group holding the major component
pub const MAJOR: &str = "major";

/// Capture group holding the minor component
pub const MINOR: &str = "minor";

/// Capture group holding the patch component
pub const PATCH: &str = "patch";

/// Capture group holding the dot-separated prerelease run
pub const PRERELEASE: &str = "prerelease";

/// Capture group holding the dot-separated build metadata run
pub const BUILD_METADATA: &str = "buildmetadata";

/// Anchored pattern for a complete SemVer 2.0.0 version string
pub const PATTERN: &str = concat!(
    r"^(?P<major>0|[1-9][0-9]*)",
    r"\.(?P<minor>0|[1-9][0-9]*)",
    r"\.(?P<patch>0|[1-9][0-9]*)",
    r"(?:-(?P<prerelease>",
    r"(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)",
    r"(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*",
    r"))?",
    r"(?:\+(?P<buildmetadata>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
);

static GRAMMAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PATTERN).expect("SemVer grammar must compile"));

/// Returns the compiled grammar, compiling it on first use.
pub fn compiled() -> &'static Regex {
    &GRAMMAR
}
