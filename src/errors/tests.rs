//! Unit tests for error handling.

use crate::errors::errors::{ErrorTip, LexError, LexErrorImpl, ParseError, ParseErrorImpl};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = LexError::new(
        LexErrorImpl::UnrecognizedPattern {
            text: "1abc".to_string(),
        },
        Position::new(3, 7),
    );

    assert_eq!(error.get_error_name(), "UnrecognizedPattern");
}

#[test]
fn test_error_position() {
    let error = ParseError::new(ParseErrorImpl::MissingTerminator, Position::new(4, 2));

    assert_eq!(error.get_position().line, 4);
    assert_eq!(error.get_position().column, 2);
}

#[test]
fn test_duplicate_name_error() {
    let error = ParseError::new(
        ParseErrorImpl::DuplicateName {
            name: "x".to_string(),
            prior_line: 1,
        },
        Position::new(2, 5),
    );

    assert_eq!(error.get_error_name(), "DuplicateName");
    assert_eq!(
        error.get_tip().to_string(),
        "Variable `x` overlaps with the one declared in line 1"
    );
}

#[test]
fn test_type_mismatch_error() {
    let error = ParseError::new(
        ParseErrorImpl::TypeMismatch {
            expected: "int".to_string(),
            actual: "null".to_string(),
        },
        Position::new(1, 9),
    );

    assert_eq!(error.get_error_name(), "TypeMismatch");
    assert!(matches!(
        error.get_kind(),
        ParseErrorImpl::TypeMismatch { expected, actual } if expected == "int" && actual == "null"
    ));
}

#[test]
fn test_error_display_includes_position() {
    let error = ParseError::new(
        ParseErrorImpl::UndeclaredName {
            name: "y".to_string(),
        },
        Position::new(6, 11),
    );

    assert_eq!(
        error.to_string(),
        "variable \"y\" not declared in line 6, column 11"
    );
}

#[test]
fn test_lex_error_display() {
    let error = LexError::new(
        LexErrorImpl::UnrecognizedPattern {
            text: "1.2.3".to_string(),
        },
        Position::new(1, 1),
    );

    assert_eq!(
        error.to_string(),
        "unrecognized pattern: \"1.2.3\" in line 1, column 1"
    );
}

#[test]
fn test_every_parse_error_has_suggestion() {
    let errors = vec![
        ParseErrorImpl::ExpectedModuleName {
            token: "5".to_string(),
        },
        ParseErrorImpl::UnclosedIndex,
        ParseErrorImpl::UnusedIndefiniteMarker,
        ParseErrorImpl::EmptyInitializer,
        ParseErrorImpl::MissingTerminator,
        ParseErrorImpl::UnclosedBlock,
        ParseErrorImpl::UnexpectedBlockClose,
    ];

    for error in errors {
        let error = ParseError::new(error, Position::default());
        assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
