//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser scans the token stream once. Braces open and close blocks;
//! everything else is gathered into a statement buffer ending at the next
//! `;`, which is then handed to the statement handler registered for its
//! leading token.
//!
//! It maintains lookup tables for:
//! - Statement handlers, keyed by leading token kind
//! - NUD (null denotation) handlers for initializer expressions

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    ast::{
        ast::{Program, StmtWrapper},
        statements::BlockStmt,
    },
    errors::errors::{ParseError, ParseErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    lookups::{create_token_lookups, NUDHandler, NUDLookup, StmtHandler, StmtLookup},
    scope::{ScopeTable, Variable},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// A parser is built for a single `parse` call: it owns the token stream,
/// the statement buffer currently being parsed and the scope table.
pub struct Parser {
    /// The full token stream
    tokens: Vec<Token>,
    /// Index of the first token in `tokens` not yet taken into a buffer
    index: usize,
    /// Tokens of the statement being parsed
    buffer: Vec<Token>,
    /// Current position in `buffer`
    pos: usize,
    /// Number of currently open `{` blocks
    block_depth: usize,
    /// Variables declared so far and still in scope
    scope: ScopeTable,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
}

impl Parser {
    /// Creates a new Parser instance with empty lookup tables.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            index: 0,
            buffer: vec![],
            pos: 0,
            block_depth: 0,
            scope: ScopeTable::new(),
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
        }
    }

    /// Returns the current token of the statement buffer without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.buffer.get(self.pos)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// Fails with `MissingTerminator` when the statement buffer is exhausted.
    pub fn advance(&mut self) -> Result<Token, ParseError> {
        match self.buffer.get(self.pos) {
            Some(token) => {
                self.pos += 1;
                Ok(token.clone())
            }
            None => Err(ParseError::new(
                ParseErrorImpl::MissingTerminator,
                self.get_position(),
            )),
        }
    }

    /// Expects a token of the specified kind, returning `error` otherwise.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: ParseError,
    ) -> Result<Token, ParseError> {
        if self.current_token_kind() == Some(expected_kind) {
            self.advance()
        } else {
            Err(error)
        }
    }

    /// Expects a token of the specified kind with a default error.
    ///
    /// An exhausted buffer is a `MissingTerminator`; any other token is an
    /// `UnexpectedToken`.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, ParseError> {
        let error = match self.current_token() {
            Some(token) => ParseError::new(
                ParseErrorImpl::UnexpectedToken {
                    token: token.value.clone(),
                },
                token.span.start,
            ),
            None => ParseError::new(ParseErrorImpl::MissingTerminator, self.get_position()),
        };

        self.expect_error(expected_kind, error)
    }

    /// Expects the closing `;` of the current statement.
    pub fn expect_terminator(&mut self) -> Result<Token, ParseError> {
        let error = ParseError::new(ParseErrorImpl::MissingTerminator, self.get_position());
        self.expect_error(TokenKind::Semicolon, error)
    }

    /// Position of the current token, or just past the last one.
    pub fn get_position(&self) -> Position {
        match (self.current_token(), self.buffer.last()) {
            (Some(token), _) => token.span.start,
            (None, Some(last)) => last.span.end,
            (None, None) => self
                .tokens
                .last()
                .map(|token| token.span.end)
                .unwrap_or_default(),
        }
    }

    /// Position of the first token of the statement buffer.
    pub fn get_statement_position(&self) -> Position {
        self.buffer
            .first()
            .map(|token| token.span.start)
            .unwrap_or_else(|| self.get_position())
    }

    /// Depth of `{` blocks around the statement being parsed.
    pub fn block_depth(&self) -> usize {
        self.block_depth
    }

    pub fn lookup(&self, name: &str) -> Option<&Variable> {
        self.scope.lookup(name)
    }

    pub fn declare(&mut self, variable: Variable, position: Position) -> Result<(), ParseError> {
        trace!(name = %variable.name, level = variable.scope_level, "declare");
        self.scope.declare(variable, position)
    }

    pub fn get_scope(&self) -> &ScopeTable {
        &self.scope
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Moves the next statement's tokens into the buffer.
    ///
    /// The buffer ends after the first `;`, or before the next brace or the
    /// end of input when no `;` comes first.
    fn fill_buffer(&mut self) {
        self.buffer.clear();
        self.pos = 0;

        while let Some(token) = self.tokens.get(self.index) {
            if matches!(token.kind, TokenKind::BlockOpen | TokenKind::BlockClose) {
                break;
            }

            self.buffer.push(token.clone());
            self.index += 1;

            if token.kind == TokenKind::Semicolon {
                break;
            }
        }

        trace!(tokens = self.buffer.len(), depth = self.block_depth, "statement buffer");
    }

    /// Parses statements until the end of input or a `}` at this depth.
    fn parse_body(&mut self) -> Result<Vec<StmtWrapper>, ParseError> {
        let mut body = vec![];

        while let Some((kind, span)) = self.tokens.get(self.index).map(|t| (t.kind, t.span)) {
            match kind {
                TokenKind::BlockOpen => body.push(self.parse_block(span)?),
                TokenKind::BlockClose if self.block_depth == 0 => {
                    return Err(ParseError::new(
                        ParseErrorImpl::UnexpectedBlockClose,
                        span.start,
                    ));
                }
                TokenKind::BlockClose => break,
                _ => {
                    self.fill_buffer();
                    body.push(parse_stmt(self)?);
                }
            }
        }

        Ok(body)
    }

    /// Parses a `{ ... }` block whose opening brace spans `open`.
    ///
    /// Variables declared inside are purged from the scope table once the
    /// closing brace is consumed.
    fn parse_block(&mut self, open: Span) -> Result<StmtWrapper, ParseError> {
        self.index += 1;
        self.block_depth += 1;
        let level = self.block_depth;

        let body = self.parse_body()?;

        let close = match self.tokens.get(self.index) {
            Some(token) if token.kind == TokenKind::BlockClose => token.span,
            _ => {
                return Err(ParseError::new(
                    ParseErrorImpl::UnclosedBlock,
                    open.start,
                ))
            }
        };
        self.index += 1;

        self.block_depth -= 1;
        self.scope.close_scope(self.block_depth + 1);

        Ok(StmtWrapper::new(BlockStmt {
            body,
            level,
            span: open.to(&close),
        }))
    }
}

/// Parses a stream of tokens into a `Program`.
///
/// This is the main entry point for parsing. It creates a parser instance
/// with a fresh scope table, initializes the lookup tables, and parses all
/// statements in order.
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let body = parser.parse_body()?;
    debug!(
        statements = body.len(),
        variables = parser.get_scope().len(),
        "parsed program"
    );

    Ok(Program { body })
}
