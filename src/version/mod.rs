//! Version parsing layer
//!
//! A single fixed grammar is compiled once and matched against caller-supplied
//! strings, producing a [`ParsedVersion`] that is either matched (fields
//! populated) or unmatched (fields at their defaults).
//!
//! # Modules
//!
//! - [`grammar`]: the SemVer 2.0.0 pattern and its process-wide compiled form
//! - [`parsed`]: the [`ParsedVersion`] data model
//! - [`parser`]: [`VersionParser`] and the [`parse`] entry point
//! - [`error`]: error type for capacity and grammar drift faults

pub mod error;
pub mod grammar;
pub mod parsed;
pub mod parser;

pub use error::VersionError;
pub use parsed::ParsedVersion;
pub use parser::{VersionParser, parse};
