//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords, base types, names and builtin constants
//! - Numeric literals and float coalescing
//! - String literals and comments
//! - Marks and double marks
//! - Line and column tracking
//! - Error cases

use crate::errors::errors::LexErrorImpl;

use super::{
    lexer::tokenize,
    tokens::{Token, TokenKind},
};

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

fn values(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|token| token.value.as_str()).collect()
}

#[test]
fn test_tokenize_declaration() {
    let tokens = tokenize("int i = 1234;").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::BaseType,
            TokenKind::Name,
            TokenKind::Set,
            TokenKind::Int,
            TokenKind::Semicolon,
        ]
    );
    assert_eq!(values(&tokens), vec!["int", "i", "=", "1234", ";"]);
}

#[test]
fn test_tokenize_keywords() {
    let source = "class function use import if elif else match case default while for return delete break continue try catch throw finally";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens.len(), 20);
    assert_eq!(tokens[0].kind, TokenKind::Class);
    assert_eq!(tokens[2].kind, TokenKind::Use);
    assert_eq!(tokens[3].kind, TokenKind::Import);
    assert_eq!(tokens[10].kind, TokenKind::While);
    assert_eq!(tokens[13].kind, TokenKind::Delete);
    assert_eq!(tokens[15].kind, TokenKind::Continue);
    assert_eq!(tokens[19].kind, TokenKind::Finally);
    assert!(tokens.iter().all(|token| token.kind.is_keyword()));
}

#[test]
fn test_tokenize_base_types() {
    let source = "any bool complex dict dictionary dynamic float int integer list str string null mdarray";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens.len(), 14);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::BaseType));
}

#[test]
fn test_tokenize_names_and_builtin_consts() {
    let tokens = tokenize("foo _PI _ bar_2 Integer").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Name,
            TokenKind::BuiltinConst,
            TokenKind::Name,
            TokenKind::Name,
            TokenKind::Name,
        ]
    );
    assert_eq!(tokens[1].value, "_PI");
}

#[test]
fn test_tokenize_bools() {
    let tokens = tokenize("true false True").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Bool, TokenKind::Bool, TokenKind::Name]
    );
}

#[test]
fn test_tokenize_float() {
    let tokens = tokenize("1.2").unwrap();

    assert_eq!(kinds(&tokens), vec![TokenKind::Float]);
    assert_eq!(tokens[0].value, "1.2");
    assert_eq!(tokens[0].span.start.column, 1);
    assert_eq!(tokens[0].span.end.column, 4);
}

#[test]
fn test_tokenize_float_in_declaration() {
    let tokens = tokenize("float f = 12.34;").unwrap();

    assert_eq!(values(&tokens), vec!["float", "f", "=", "12.34", ";"]);
    assert_eq!(tokens[3].kind, TokenKind::Float);
}

#[test]
fn test_tokenize_double_dotted_number_fails() {
    let error = tokenize("1.2.3").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &LexErrorImpl::UnrecognizedPattern {
            text: "1.2.3".to_string()
        }
    );
    assert_eq!(error.get_position().line, 1);
    assert_eq!(error.get_position().column, 1);
}

#[test]
fn test_tokenize_spaced_dot_is_a_float() {
    let tokens = tokenize("1 . 2").unwrap();

    assert_eq!(kinds(&tokens), vec![TokenKind::Float]);
    assert_eq!(tokens[0].value, "1.2");
    assert_eq!(tokens[0].span.start.column, 1);
    assert_eq!(tokens[0].span.end.column, 6);
}

#[test]
fn test_tokenize_member_access_keeps_dot() {
    let tokens = tokenize("math.pi").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Name, TokenKind::Dot, TokenKind::Name]
    );
}

#[test]
fn test_tokenize_unrecognized_pattern() {
    let error = tokenize("int x = 12ab;").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &LexErrorImpl::UnrecognizedPattern {
            text: "12ab".to_string()
        }
    );
    assert_eq!(error.get_position().column, 9);
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" 'world' "two words; {x}""#).unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::String, TokenKind::String, TokenKind::String]
    );
    assert_eq!(values(&tokens), vec!["hello", "world", "two words; {x}"]);
}

#[test]
fn test_tokenize_either_quote_closes_string() {
    let error = tokenize(r#"'say "hi'"#).unwrap_err();

    assert_eq!(error.get_kind(), &LexErrorImpl::UnterminatedString);

    let error = tokenize(r#"string s = "it's";"#).unwrap_err();

    assert_eq!(error.get_kind(), &LexErrorImpl::UnterminatedString);
    assert_eq!(error.get_position().column, 17);
}

#[test]
fn test_tokenize_string_closes_at_first_quote() {
    let tokens = tokenize(r#""it's' x""#).unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::String, TokenKind::Name, TokenKind::String]
    );
    assert_eq!(values(&tokens), vec!["it", "s", " x"]);
}

#[test]
fn test_tokenize_empty_string() {
    let tokens = tokenize(r#""""#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "");
}

#[test]
fn test_tokenize_string_with_comment_marks() {
    let tokens = tokenize(r#"str s = "// not a comment";"#).unwrap();

    assert_eq!(tokens[3].kind, TokenKind::String);
    assert_eq!(tokens[3].value, "// not a comment");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
}

#[test]
fn test_tokenize_unterminated_string() {
    let error = tokenize("str s = \"open;").unwrap_err();

    assert_eq!(error.get_kind(), &LexErrorImpl::UnterminatedString);
    assert_eq!(error.get_position().column, 9);
}

#[test]
fn test_tokenize_line_comment() {
    let with_comment = tokenize("// comment\nint i = 1;").unwrap();
    let without_comment = tokenize("int i = 1;").unwrap();

    assert_eq!(kinds(&with_comment), kinds(&without_comment));
    assert_eq!(values(&with_comment), values(&without_comment));
}

#[test]
fn test_tokenize_trailing_line_comment() {
    let tokens = tokenize("int i = 1; // set i\nint j;").unwrap();

    assert_eq!(values(&tokens), vec!["int", "i", "=", "1", ";", "int", "j", ";"]);
}

#[test]
fn test_tokenize_block_comment() {
    let tokens = tokenize("int /* ignored ; 1.2.3 \n still */ i;").unwrap();

    assert_eq!(values(&tokens), vec!["int", "i", ";"]);
    assert_eq!(tokens[1].line(), 2);
}

#[test]
fn test_tokenize_unterminated_block_comment() {
    let tokens = tokenize("int i; /* never closed").unwrap();

    assert_eq!(values(&tokens), vec!["int", "i", ";"]);
}

#[test]
fn test_tokenize_marks() {
    let tokens = tokenize("; = { } ( ) [ ] ? . : > < + - * / % , !").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Semicolon,
            TokenKind::Set,
            TokenKind::BlockOpen,
            TokenKind::BlockClose,
            TokenKind::ClampOpen,
            TokenKind::ClampClose,
            TokenKind::IndexOpen,
            TokenKind::IndexClose,
            TokenKind::Indefinite,
            TokenKind::Dot,
            TokenKind::Colon,
            TokenKind::Greater,
            TokenKind::Less,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Multiply,
            TokenKind::Divide,
            TokenKind::Modulo,
            TokenKind::Comma,
            TokenKind::Not,
        ]
    );
}

#[test]
fn test_tokenize_double_marks() {
    let tokens = tokenize("== != <= >= ++ -- && ||").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Equal,
            TokenKind::NotEqual,
            TokenKind::LessEqual,
            TokenKind::GreaterEqual,
            TokenKind::CountUp,
            TokenKind::CountDown,
            TokenKind::And,
            TokenKind::Or,
        ]
    );
}

#[test]
fn test_tokenize_double_mark_without_spaces() {
    let tokens = tokenize("a==b").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Name, TokenKind::Equal, TokenKind::Name]
    );
}

#[test]
fn test_tokenize_marks_split_buffer() {
    let tokens = tokenize("?int[]x=[1,2];").unwrap();

    assert_eq!(
        values(&tokens),
        vec!["?", "int", "[", "]", "x", "=", "[", "1", ",", "2", "]", ";"]
    );
}

#[test]
fn test_tokenize_negative_number_is_minus_mark() {
    let tokens = tokenize("-5").unwrap();

    assert_eq!(kinds(&tokens), vec![TokenKind::Minus, TokenKind::Int]);
}

#[test]
fn test_tokenize_tracks_lines_and_columns() {
    let tokens = tokenize("import math;\n  int x;").unwrap();

    assert_eq!((tokens[0].line(), tokens[0].column()), (1, 1));
    assert_eq!((tokens[1].line(), tokens[1].column()), (1, 8));
    assert_eq!((tokens[2].line(), tokens[2].column()), (1, 12));
    assert_eq!((tokens[3].line(), tokens[3].column()), (2, 3));
    assert_eq!((tokens[4].line(), tokens[4].column()), (2, 7));
}

#[test]
fn test_tokenize_emits_no_newlines() {
    let tokens = tokenize("\n\nint x;\n\n").unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].line(), 3);
}

#[test]
fn test_tokenize_empty_source() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("   \n\t").unwrap().is_empty());
}

#[test]
fn test_tokenize_is_deterministic() {
    let source = "?int[] xs = [1, 2.5, \"a\"]; // done";

    assert_eq!(tokenize(source).unwrap(), tokenize(source).unwrap());
}
