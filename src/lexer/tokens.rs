use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("class", TokenKind::Class);
        map.insert("function", TokenKind::Function);
        map.insert("use", TokenKind::Use);
        map.insert("import", TokenKind::Import);
        map.insert("if", TokenKind::If);
        map.insert("elif", TokenKind::Elif);
        map.insert("else", TokenKind::Else);
        map.insert("match", TokenKind::Match);
        map.insert("case", TokenKind::Case);
        map.insert("default", TokenKind::Default);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("return", TokenKind::Return);
        map.insert("delete", TokenKind::Delete);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map.insert("try", TokenKind::Try);
        map.insert("catch", TokenKind::Catch);
        map.insert("throw", TokenKind::Throw);
        map.insert("finally", TokenKind::Finally);
        map
    };

    pub static ref MARK_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert(';', TokenKind::Semicolon);
        map.insert('=', TokenKind::Set);
        map.insert('{', TokenKind::BlockOpen);
        map.insert('}', TokenKind::BlockClose);
        map.insert('(', TokenKind::ClampOpen);
        map.insert(')', TokenKind::ClampClose);
        map.insert('[', TokenKind::IndexOpen);
        map.insert(']', TokenKind::IndexClose);
        map.insert('?', TokenKind::Indefinite);
        map.insert('.', TokenKind::Dot);
        map.insert(':', TokenKind::Colon);
        map.insert('>', TokenKind::Greater);
        map.insert('<', TokenKind::Less);
        map.insert('+', TokenKind::Plus);
        map.insert('-', TokenKind::Minus);
        map.insert('*', TokenKind::Multiply);
        map.insert('/', TokenKind::Divide);
        map.insert('%', TokenKind::Modulo);
        map.insert(',', TokenKind::Comma);
        map.insert('!', TokenKind::Not);
        map
    };

    pub static ref DOUBLE_MARK_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("==", TokenKind::Equal);
        map.insert("!=", TokenKind::NotEqual);
        map.insert("<=", TokenKind::LessEqual);
        map.insert(">=", TokenKind::GreaterEqual);
        map.insert("++", TokenKind::CountUp);
        map.insert("--", TokenKind::CountDown);
        map.insert("&&", TokenKind::And);
        map.insert("||", TokenKind::Or);
        map
    };
}

/// Names recognised as `BaseType` tokens.
pub const BASE_TYPES: [&str; 14] = [
    "any",
    "bool",
    "complex",
    "dict",
    "dictionary",
    "dynamic",
    "float",
    "int",
    "integer",
    "list",
    "str",
    "string",
    "null",
    "mdarray",
];

/// Characters that end the current buffer without producing a token.
pub const SEPARATORS: [char; 4] = [' ', '\t', '\n', '\r'];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Int,
    Float,
    String,
    Bool,

    BaseType,
    BuiltinConst,
    Name,

    Semicolon,
    Set,
    BlockOpen,
    BlockClose,
    ClampOpen,
    ClampClose,
    IndexOpen,
    IndexClose,
    Indefinite, // ?
    Dot,
    Colon,
    Greater,
    Less,
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    Comma,
    Not,

    Equal,        // ==
    NotEqual,     // !=
    LessEqual,    // <=
    GreaterEqual, // >=
    CountUp,      // ++
    CountDown,    // --
    And,          // &&
    Or,           // ||

    // Reserved
    Class,
    Function,
    Use,
    Import,
    If,
    Elif,
    Else,
    Match,
    Case,
    Default,
    While,
    For,
    Return,
    Delete,
    Break,
    Continue,
    Try,
    Catch,
    Throw,
    Finally,
}

impl TokenKind {
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Int | TokenKind::Float | TokenKind::String | TokenKind::Bool
        )
    }

    pub fn is_keyword(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}

impl Token {
    pub fn line(&self) -> u32 {
        self.span.start.line
    }

    pub fn column(&self) -> u32 {
        self.span.start.column
    }
}
