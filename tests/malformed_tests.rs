//! Malformed input never produces an error or a partial tree: every entry
//! in the corpus parses to a lone empty root, and the same inputs surface a
//! diagnostic through `try_parse`.

use json_config::{parse, try_parse, Error, NodeType};

const MALFORMED: &[&[u8]] = &[
    // unterminated containers
    b"{",
    b"{\"a\"",
    b"{\"a\":",
    b"{\"a\": 1",
    b"{\"a\": 1,",
    b"{\"a\": [1, 2",
    b"{\"a\": {\"b\": true",
    // mismatched brackets
    b"{\"a\": [1, 2}}",
    b"{\"a\": {\"b\": 1]}",
    b"}",
    b"{\"a\" = 1}",
    // member name not followed by a value
    b"{\"a\": }",
    b"{\"a\", \"b\"}",
    b"{\"a\" 1}",
    // bare member name inside an array
    b"{\"a\": [\"b\": 2]}",
    // missing separators
    b"{\"a\": 1 \"b\": 2}",
    b"{\"a\": [1 2]}",
    // null has no node representation
    b"null",
    b"{\"a\": null}",
    b"{\"a\": [null]}",
    // non-object top level
    b"[1, 2]",
    b"true",
    b"\"text\"",
    b"42",
    // duplicate member keys
    b"{\"a\": 1, \"a\": 2}",
    // bad literals and numbers
    b"{\"a\": tru}",
    b"{\"a\": True}",
    b"{\"a\": 01}",
    b"{\"a\": 1.}",
    b"{\"a\": 1e}",
    b"{\"a\": .5}",
    b"{\"a\": 99999999999999999999999999999999999}",
    // bad strings
    b"{\"a\": \"unterminated",
    b"{\"a\": \"bad \\x escape\"}",
    b"{\"a\": \"\\u12\"}",
    b"{'a': 1}",
    b"{\"a\": \"tab\tinside\"}",
];

#[test]
fn malformed_corpus_parses_to_empty_root() {
    for (index, input) in MALFORMED.iter().enumerate() {
        let root = parse(input);
        assert_eq!(
            root.node_type(),
            NodeType::ConfigNodes,
            "corpus entry {index} did not produce an object root"
        );
        assert!(
            root.to_config_nodes().unwrap().is_empty(),
            "corpus entry {index} produced a non-empty root: {:?}",
            String::from_utf8_lossy(input)
        );
        assert!(root.key().is_empty());
    }
}

#[test]
fn malformed_corpus_surfaces_diagnostics() {
    for (index, input) in MALFORMED.iter().enumerate() {
        assert!(
            try_parse(input).is_err(),
            "corpus entry {index} unexpectedly parsed: {:?}",
            String::from_utf8_lossy(input)
        );
    }
}

#[test]
fn diagnostics_carry_positions() {
    let err = try_parse(b"{\"a\": 1,\n \"b\": }").unwrap_err();
    match err {
        Error::Syntax { line, .. } => assert_eq!(line, 2),
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn duplicate_key_is_reported_as_such() {
    let err = try_parse(b"{\"a\": 1, \"a\": 2}").unwrap_err();
    assert!(matches!(err, Error::DuplicateKey { ref key, .. } if key == "a"));
}

#[test]
fn overflowing_number_is_invalid_number() {
    let err = try_parse(b"{\"a\": 99999999999999999999999999999999999}").unwrap_err();
    assert!(matches!(err, Error::InvalidNumber { .. }));
}

#[test]
fn truncated_document_is_eof() {
    let err = try_parse(b"{\"a\": [1, 2").unwrap_err();
    assert!(matches!(err, Error::UnexpectedEof { .. }));
}

#[test]
fn null_member_is_a_structural_error() {
    let err = try_parse(b"{\"a\": null}").unwrap_err();
    assert!(matches!(err, Error::UnexpectedToken { ref found, .. } if found == "null"));
}

#[test]
fn top_level_array_is_rejected_gracefully() {
    let root = parse(b"[1, 2, 3]");
    assert!(root.to_config_nodes().unwrap().is_empty());

    let err = try_parse(b"[1, 2, 3]").unwrap_err();
    assert!(matches!(err, Error::UnexpectedToken { ref expected, .. }
        if expected.contains("top level")));
}
