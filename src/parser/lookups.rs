use std::collections::HashMap;

use crate::{
    ast::ast::{ExprWrapper, StmtWrapper},
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<StmtWrapper, ParseError>;
pub type NUDHandler = fn(&mut Parser) -> Result<ExprWrapper, ParseError>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Literals and symbols
    parser.nud(TokenKind::Int, parse_literal_expr);
    parser.nud(TokenKind::Float, parse_literal_expr);
    parser.nud(TokenKind::String, parse_literal_expr);
    parser.nud(TokenKind::Bool, parse_literal_expr);
    parser.nud(TokenKind::BaseType, parse_null_expr);
    parser.nud(TokenKind::Minus, parse_negative_expr);
    parser.nud(TokenKind::Name, parse_symbol_expr);
    parser.nud(TokenKind::IndexOpen, parse_list_expr);

    // Statements
    parser.stmt(TokenKind::Import, parse_import_stmt);
    parser.stmt(TokenKind::Indefinite, parse_var_decl_stmt);
    parser.stmt(TokenKind::BaseType, parse_var_decl_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
