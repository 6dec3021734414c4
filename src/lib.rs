//! Semantic Versioning 2.0.0 grammar parser
//!
//! ```
//! use semver_grammar::version::parse;
//!
//! let version = parse("1.0.0-alpha.1+build.123").unwrap();
//! assert!(version.is_matched());
//! assert_eq!(version.prerelease(), "alpha.1");
//! assert_eq!(version.build_metadata(), "build.123");
//! ```

pub mod version;

pub use version::{ParsedVersion, VersionError, VersionParser, parse};
