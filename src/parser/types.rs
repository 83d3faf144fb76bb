//! Type parsing implementation.
//!
//! A declared type is a `BaseType` token followed by zero or more `[]`
//! pairs, one per level of list nesting. The `?` marker is handled by the
//! declaration itself.

use crate::{
    ast::types::BaseType,
    errors::errors::{ParseError, ParseErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::parser::Parser;

/// A type as written in a declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclaredType {
    pub base: BaseType,
    /// The base type's spelling, which may be an alias like `integer`.
    pub name: String,
    pub list_depth: usize,
    pub span: Span,
}

impl DeclaredType {
    /// `name` followed by one `[]` per list level.
    pub fn spelling(&self) -> String {
        format!("{}{}", self.name, "[]".repeat(self.list_depth))
    }
}

pub fn parse_symbol_type(parser: &mut Parser) -> Result<DeclaredType, ParseError> {
    let token = parser.expect(TokenKind::BaseType)?;
    let base = BaseType::from_name(&token.value).ok_or_else(|| {
        ParseError::new(
            ParseErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            },
            token.span.start,
        )
    })?;

    Ok(DeclaredType {
        base,
        name: token.value,
        list_depth: 0,
        span: token.span,
    })
}

/// Consumes one `[]` pair after `underlying`.
pub fn parse_array_type(
    parser: &mut Parser,
    underlying: DeclaredType,
) -> Result<DeclaredType, ParseError> {
    let open = parser.expect(TokenKind::IndexOpen)?;
    let error = ParseError::new(ParseErrorImpl::UnclosedIndex, open.span.start);
    let close = parser.expect_error(TokenKind::IndexClose, error)?;

    Ok(DeclaredType {
        list_depth: underlying.list_depth + 1,
        span: underlying.span.to(&close.span),
        ..underlying
    })
}

pub fn parse_type(parser: &mut Parser) -> Result<DeclaredType, ParseError> {
    let mut declared = parse_symbol_type(parser)?;

    while parser.current_token_kind() == Some(TokenKind::IndexOpen) {
        declared = parse_array_type(parser, declared)?;
    }

    Ok(declared)
}
