use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{LexError, LexErrorImpl},
    Position, Span, MK_SPAN, MK_TOKEN,
};

use super::tokens::{
    Token, TokenKind, BASE_TYPES, DOUBLE_MARK_LOOKUP, MARK_LOOKUP, RESERVED_LOOKUP, SEPARATORS,
};

lazy_static! {
    static ref INTEGER_PATTERN: Regex = Regex::new(r"^-?[0-9]+$").unwrap();
    static ref FLOAT_PATTERN: Regex = Regex::new(r"^-?([0-9]+\.[0-9]*|\.[0-9]+)$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Code,
    /// Either quote character closes the string.
    String,
    LineComment,
    BlockComment,
}

#[derive(Clone)]
pub struct Lexer {
    source: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
    mode: Mode,
    buffer: String,
    buffer_start: Position,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            source: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            mode: Mode::Code,
            buffer: String::new(),
            buffer_start: Position::default(),
            tokens: vec![],
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn at(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    pub fn starts_with(&self, pattern: &str) -> bool {
        pattern
            .chars()
            .enumerate()
            .all(|(offset, c)| self.source.get(self.pos + offset) == Some(&c))
    }

    pub fn advance(&mut self) {
        if let Some(c) = self.at() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.pos += 1;
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    pub fn push(&mut self, token: Token) {
        trace!(kind = %token.kind, value = %token.value, line = token.line(), "token");
        self.tokens.push(token);
    }

    fn buffer_char(&mut self, c: char) {
        if self.buffer.is_empty() {
            self.buffer_start = self.position();
        }
        self.buffer.push(c);
    }

    /// Classifies the pending buffer and resets it.
    fn flush(&mut self) -> Result<(), LexError> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        let value = std::mem::take(&mut self.buffer);
        let span = MK_SPAN!(self.buffer_start, self.position());

        if let Some(token) = classify(&value, span)? {
            self.push(token);
        }

        Ok(())
    }

    fn double_mark(&self) -> Option<(TokenKind, String)> {
        let pair = self.source.get(self.pos..self.pos + 2)?.iter().collect::<String>();
        DOUBLE_MARK_LOOKUP.get(pair.as_str()).map(|kind| (*kind, pair))
    }

    fn push_mark(&mut self, kind: TokenKind, value: String) {
        let start = self.position();
        let width = value.chars().count() as u32;
        let end = Position::new(start.line, start.column + width);
        self.push(MK_TOKEN!(kind, value, MK_SPAN!(start, end)));
        self.advance_n(width as usize);
    }

    fn lex_code(&mut self, c: char) -> Result<(), LexError> {
        if self.starts_with("//") {
            self.flush()?;
            self.mode = Mode::LineComment;
            self.advance_n(2);
        } else if self.starts_with("/*") {
            self.flush()?;
            self.mode = Mode::BlockComment;
            self.advance_n(2);
        } else if c == '"' || c == '\'' {
            self.flush()?;
            self.buffer_start = self.position();
            self.mode = Mode::String;
            self.advance();
        } else if SEPARATORS.contains(&c) {
            self.flush()?;
            self.advance();
        } else if let Some((kind, value)) = self.double_mark() {
            self.flush()?;
            self.push_mark(kind, value);
        } else if let Some(kind) = MARK_LOOKUP.get(&c) {
            self.flush()?;
            self.push_mark(*kind, c.to_string());
        } else {
            self.buffer_char(c);
            self.advance();
        }

        Ok(())
    }

    fn lex_string(&mut self, c: char) {
        self.advance();

        if c == '"' || c == '\'' {
            let value = std::mem::take(&mut self.buffer);
            let span = MK_SPAN!(self.buffer_start, self.position());
            self.push(MK_TOKEN!(TokenKind::String, value, span));
            self.mode = Mode::Code;
        } else {
            self.buffer.push(c);
        }
    }
}

fn is_integer(value: &str) -> bool {
    INTEGER_PATTERN.is_match(value)
}

fn is_float(value: &str) -> bool {
    FLOAT_PATTERN.is_match(value)
}

/// Turns a buffered span of non-mark, non-string text into a token.
///
/// Returns `Ok(None)` for an empty buffer.
pub fn classify(value: &str, span: Span) -> Result<Option<Token>, LexError> {
    let kind = if value.is_empty() {
        return Ok(None);
    } else if let Some(kind) = RESERVED_LOOKUP.get(value) {
        *kind
    } else if value.len() > 1 && value.starts_with('_') {
        TokenKind::BuiltinConst
    } else if value == "true" || value == "false" {
        TokenKind::Bool
    } else if BASE_TYPES.contains(&value) {
        TokenKind::BaseType
    } else if is_integer(value) {
        TokenKind::Int
    } else if is_float(value) {
        TokenKind::Float
    } else if !value.starts_with(|c: char| c.is_ascii_digit()) {
        TokenKind::Name
    } else {
        return Err(LexError::new(
            LexErrorImpl::UnrecognizedPattern {
                text: value.to_string(),
            },
            span.start,
        ));
    };

    Ok(Some(MK_TOKEN!(kind, value.to_string(), span)))
}

/// Whether `tokens[index..index + 3]` is `Int Dot Int`.
fn is_fraction(tokens: &[Token], index: usize) -> bool {
    match (tokens.get(index), tokens.get(index + 1), tokens.get(index + 2)) {
        (Some(whole), Some(dot), Some(fraction)) => {
            whole.kind == TokenKind::Int
                && dot.kind == TokenKind::Dot
                && fraction.kind == TokenKind::Int
        }
        _ => false,
    }
}

/// Merges `Int Dot Int` runs into `Float` tokens.
///
/// The character scan always emits `.` as a mark, so `1.2` arrives here as
/// three tokens. Longer runs such as `1.2.3` are joined and rejected.
fn coalesce_floats(tokens: Vec<Token>) -> Result<Vec<Token>, LexError> {
    let mut result = Vec::with_capacity(tokens.len());
    let mut index = 0;

    while index < tokens.len() {
        if !is_fraction(&tokens, index) {
            result.push(tokens[index].clone());
            index += 1;
            continue;
        }

        let mut end = index + 2;
        while is_fraction(&tokens, end) {
            end += 2;
        }

        let value = tokens[index..=end]
            .iter()
            .map(|token| token.value.as_str())
            .collect::<String>();
        let start = tokens[index].span.start;

        if !is_float(&value) {
            return Err(LexError::new(
                LexErrorImpl::UnrecognizedPattern { text: value },
                start,
            ));
        }

        result.push(MK_TOKEN!(
            TokenKind::Float,
            value,
            MK_SPAN!(start, tokens[end].span.end)
        ));
        index = end + 1;
    }

    Ok(result)
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lex = Lexer::new(source);

    while let Some(c) = lex.at() {
        match lex.mode {
            Mode::Code => lex.lex_code(c)?,
            Mode::String => lex.lex_string(c),
            Mode::LineComment => {
                if c == '\n' {
                    lex.mode = Mode::Code;
                }
                lex.advance();
            }
            Mode::BlockComment => {
                if lex.starts_with("*/") {
                    lex.mode = Mode::Code;
                    lex.advance_n(2);
                } else {
                    lex.advance();
                }
            }
        }
    }

    if lex.mode == Mode::String {
        return Err(LexError::new(
            LexErrorImpl::UnterminatedString,
            lex.buffer_start,
        ));
    }

    lex.flush()?;

    let tokens = coalesce_floats(lex.tokens)?;
    debug!(count = tokens.len(), lines = lex.line, "tokenized source");

    Ok(tokens)
}
