use tracing::trace;

use crate::{
    ast::{
        ast::ExprWrapper,
        expressions::{ListExpr, LiteralExpr, SymbolExpr},
        types::Literals,
    },
    errors::errors::{ParseError, ParseErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::parser::Parser;

/// Parses a single initializer expression starting at the current token.
pub fn parse_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    let handler = match parser.current_token() {
        Some(token) => match parser.get_nud_lookup().get(&token.kind) {
            Some(handler) => *handler,
            None => return Err(unexpected(token)),
        },
        None => return Err(unexpected_current(parser)),
    };

    handler(parser)
}

fn unexpected(token: &Token) -> ParseError {
    ParseError::new(
        ParseErrorImpl::UnexpectedToken {
            token: token.value.clone(),
        },
        token.span.start,
    )
}

fn unexpected_current(parser: &Parser) -> ParseError {
    match parser.current_token() {
        Some(token) => unexpected(token),
        None => ParseError::new(ParseErrorImpl::MissingTerminator, parser.get_position()),
    }
}

fn parse_number(token: &Token, text: &str) -> Result<Literals, ParseError> {
    let error = || {
        ParseError::new(
            ParseErrorImpl::NumberParseError {
                token: text.to_string(),
            },
            token.span.start,
        )
    };

    match token.kind {
        TokenKind::Int => text.parse().map(Literals::Int).map_err(|_| error()),
        TokenKind::Float => text.parse().map(Literals::Float).map_err(|_| error()),
        _ => Err(unexpected(token)),
    }
}

pub fn parse_literal_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    let token = parser.advance()?;

    let value = match token.kind {
        TokenKind::Int | TokenKind::Float => parse_number(&token, &token.value)?,
        TokenKind::String => Literals::String(token.value.clone()),
        TokenKind::Bool => Literals::Bool(token.value == "true"),
        _ => return Err(unexpected(&token)),
    };

    Ok(ExprWrapper::new(LiteralExpr {
        value,
        span: token.span,
    }))
}

/// `null` is lexed as a base type name; no other base type is a value.
pub fn parse_null_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    let token = parser.advance()?;

    if token.value != "null" {
        return Err(unexpected(&token));
    }

    Ok(ExprWrapper::new(LiteralExpr {
        value: Literals::Null,
        span: token.span,
    }))
}

/// A `-` mark followed by a number literal.
///
/// Like float coalescing this looks at token kinds only, so `- 5` is `-5`.
pub fn parse_negative_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    let minus = parser.advance()?;
    let number = match parser.current_token_kind() {
        Some(TokenKind::Int | TokenKind::Float) => parser.advance()?,
        _ => return Err(unexpected(&minus)),
    };

    // Parsed with the sign so that i64::MIN fits.
    let value = parse_number(&number, &format!("-{}", number.value))?;

    Ok(ExprWrapper::new(LiteralExpr {
        value,
        span: minus.span.to(&number.span),
    }))
}

/// Resolves a name against the scope table as it stands right now.
pub fn parse_symbol_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    let token = parser.advance()?;
    let variable = parser.lookup(&token.value).cloned();

    if variable.is_none() {
        trace!(name = %token.value, "unresolved name");
    }

    Ok(ExprWrapper::new(SymbolExpr {
        name: token.value,
        variable,
        span: token.span,
    }))
}

pub fn parse_list_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    let open = parser.expect(TokenKind::IndexOpen)?;
    let unclosed = || ParseError::new(ParseErrorImpl::UnclosedIndex, open.span.start);

    let mut elements = vec![];

    if parser.current_token_kind() != Some(TokenKind::IndexClose) {
        loop {
            if matches!(parser.current_token_kind(), None | Some(TokenKind::Semicolon)) {
                return Err(unclosed());
            }

            elements.push(parse_expr(parser)?);

            match parser.current_token_kind() {
                Some(TokenKind::Comma) => {
                    parser.advance()?;
                }
                Some(TokenKind::IndexClose) => break,
                None | Some(TokenKind::Semicolon) => return Err(unclosed()),
                Some(_) => return Err(unexpected_current(parser)),
            }
        }
    }

    let close = parser.expect_error(TokenKind::IndexClose, unclosed())?;
    let list = ListExpr::new(elements, open.span.to(&close.span))?;

    Ok(ExprWrapper::new(list))
}
