use std::thread;

use semver_grammar::{ParsedVersion, VersionParser, parse};

#[test]
fn parse_release_version() {
    let version = parse("1.9.0").unwrap();

    assert!(version.is_matched());
    assert_eq!(
        (version.major(), version.minor(), version.patch()),
        (1, 9, 0)
    );
    assert_eq!(version.prerelease(), "");
    assert_eq!(version.build_metadata(), "");
    assert_eq!(version.original_string(), "1.9.0");
}

#[test]
fn parse_prerelease_version() {
    let version = parse("1.10.0-alpha").unwrap();

    assert!(version.is_matched());
    assert_eq!(
        (version.major(), version.minor(), version.patch()),
        (1, 10, 0)
    );
    assert_eq!(version.prerelease(), "alpha");
    assert_eq!(version.build_metadata(), "");
}

#[test]
fn parse_prerelease_and_build_metadata() {
    let version = parse("1.0.0-alpha.1+build.123").unwrap();

    assert!(version.is_matched());
    assert_eq!(
        (version.major(), version.minor(), version.patch()),
        (1, 0, 0)
    );
    assert_eq!(version.prerelease(), "alpha.1");
    assert_eq!(version.build_metadata(), "build.123");
    assert_eq!(
        version.prerelease_identifiers().collect::<Vec<_>>(),
        vec!["alpha", "1"]
    );
}

#[test]
fn parse_rejects_partial_and_leading_zero_versions() {
    for input in ["1.0", "01.0.0", ""] {
        let version = parse(input).unwrap();

        assert!(!version.is_matched(), "{input:?} should not match");
        assert_eq!(version.original_string(), "");
        assert_eq!(
            (version.major(), version.minor(), version.patch()),
            (0, 0, 0)
        );
        assert_eq!(version.prerelease(), "");
        assert_eq!(version.build_metadata(), "");
    }
}

#[test]
fn constructed_value_parses_to_the_same_fields_every_time() {
    let parser = VersionParser::new();
    let unparsed = ParsedVersion::from_string("1.0.0-rc.1+sha.5114f85");

    let first = parser.parse(&unparsed).unwrap();
    let second = parser.parse(&unparsed).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.to_string(), unparsed.source());
}

#[test]
fn shared_grammar_is_usable_from_many_threads() {
    let inputs = ["0.1.0", "1.2.3-beta", "4.5.6+build", "7.8", "09.0.0"];

    let handles: Vec<_> = inputs
        .into_iter()
        .map(|input| thread::spawn(move || parse(input).unwrap().is_matched()))
        .collect();
    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results, vec![true, true, true, false, false]);
}
