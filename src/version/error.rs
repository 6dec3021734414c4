use std::num::ParseIntError;

use thiserror::Error;

/// Faults raised while extracting fields from a grammar match.
///
/// A string that does not conform to the grammar is not an error; it yields
/// an unmatched [`ParsedVersion`](crate::version::ParsedVersion).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("Grammar matched without capture group '{0}'")]
    MissingCapture(&'static str),

    #[error("{component} component '{value}' does not fit in u64: {source}")]
    NumericOverflow {
        component: &'static str,
        value: String,
        source: ParseIntError,
    },
}
