use tracing::debug;

use crate::{
    ast::{
        ast::{Expr, ExprWrapper, StmtWrapper},
        statements::{ImportStmt, VarDeclStmt},
    },
    errors::errors::{ParseError, ParseErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::{
    expr::parse_expr,
    parser::Parser,
    scope::Variable,
    types::{parse_type, DeclaredType},
};

/// Dispatches the statement buffer on its leading token.
pub fn parse_stmt(parser: &mut Parser) -> Result<StmtWrapper, ParseError> {
    let handler = parser
        .current_token_kind()
        .and_then(|kind| parser.get_stmt_lookup().get(&kind).copied());

    match handler {
        Some(handler) => handler(parser),
        None => Err(ParseError::new(
            ParseErrorImpl::MissingTerminator,
            parser.get_statement_position(),
        )),
    }
}

fn expect_module_name(parser: &mut Parser) -> Result<Token, ParseError> {
    let error = ParseError::new(
        ParseErrorImpl::ExpectedModuleName {
            token: parser
                .current_token()
                .map(|token| token.value.clone())
                .unwrap_or_default(),
        },
        parser.get_position(),
    );

    parser.expect_error(TokenKind::Name, error)
}

pub fn parse_import_stmt(parser: &mut Parser) -> Result<StmtWrapper, ParseError> {
    let start_token = parser.expect(TokenKind::Import)?;
    let module = expect_module_name(parser)?.value;

    let has_alias = matches!(
        parser.current_token(),
        Some(token) if token.kind == TokenKind::Name && token.value == "as"
    );

    let alias = if has_alias {
        parser.advance()?;
        Some(expect_module_name(parser)?.value)
    } else {
        None
    };

    let end_token = parser.expect_terminator()?;
    debug!(%module, ?alias, "import");

    Ok(StmtWrapper::new(ImportStmt {
        module,
        alias,
        span: start_token.span.to(&end_token.span),
    }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<StmtWrapper, ParseError> {
    let start = parser.get_position();
    let nullable = parser.current_token_kind() == Some(TokenKind::Indefinite);
    let unused_marker = ParseError::new(ParseErrorImpl::UnusedIndefiniteMarker, start);

    if nullable {
        parser.advance()?;
        if parser.current_token_kind() != Some(TokenKind::BaseType) {
            return Err(unused_marker);
        }
    }

    let declared = parse_type(parser)?;

    let name_error = if nullable {
        unused_marker
    } else {
        ParseError::new(ParseErrorImpl::MissingTerminator, parser.get_position())
    };
    let name_token = parser.expect_error(TokenKind::Name, name_error)?;

    let assigned_value = match parser.current_token_kind() {
        Some(TokenKind::Semicolon) => None,
        Some(TokenKind::Set) => {
            let set_token = parser.advance()?;
            Some(parse_initializer(parser, &set_token)?)
        }
        _ => {
            return Err(ParseError::new(
                ParseErrorImpl::MissingTerminator,
                parser.get_position(),
            ))
        }
    };

    let end_token = parser.expect_terminator()?;

    if let Some(value) = &assigned_value {
        check_initializer(&declared, nullable, value)?;
    }

    // Declared only now, so the initializer cannot see the variable itself.
    parser.declare(
        Variable {
            name: name_token.value.clone(),
            declared_type: declared.base,
            scope_level: parser.block_depth(),
            list_depth: declared.list_depth,
            declaration_line: name_token.line(),
            nullable,
        },
        name_token.span.start,
    )?;

    debug!(
        name = %name_token.value,
        declared_type = %declared.spelling(),
        nullable,
        level = parser.block_depth(),
        "variable declaration"
    );

    Ok(StmtWrapper::new(VarDeclStmt {
        identifier: name_token.value,
        declared_type: declared.base,
        type_name: declared.name,
        list_depth: declared.list_depth,
        nullable,
        assigned_value,
        span: Span {
            start,
            end: end_token.span.end,
        },
    }))
}

/// Parses the expression between `=` and `;`.
fn parse_initializer(parser: &mut Parser, set_token: &Token) -> Result<ExprWrapper, ParseError> {
    if matches!(
        parser.current_token_kind(),
        None | Some(TokenKind::Semicolon)
    ) {
        return Err(ParseError::new(
            ParseErrorImpl::EmptyInitializer,
            set_token.span.end,
        ));
    }

    parse_expr(parser)
}

/// Checks an initializer against the declared type.
///
/// List depth is not compared, only base types.
fn check_initializer(
    declared: &DeclaredType,
    nullable: bool,
    value: &ExprWrapper,
) -> Result<(), ParseError> {
    let actual = value.get_type()?;

    let compatible = declared.base.accepts_anything()
        || actual.is_empty_list()
        || (nullable && actual.is_null())
        || actual.base == declared.base
        || (declared.base.is_list_container() && actual.is_list());

    if compatible {
        return Ok(());
    }

    Err(ParseError::new(
        ParseErrorImpl::TypeMismatch {
            expected: declared.spelling(),
            actual: actual.to_string(),
        },
        value.get_span().start,
    ))
}
