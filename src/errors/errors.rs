use std::fmt::{self, Debug, Display};

use thiserror::Error;

use crate::Position;

/// Behaviour shared by the lexical and parse error variant enums.
pub trait ErrorKind: Display + Debug + Clone {
    fn get_error_name(&self) -> &'static str;
    fn get_tip(&self) -> ErrorTip;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error<K: ErrorKind> {
    internal_error: K,
    position: Position,
}

pub type LexError = Error<LexErrorImpl>;
pub type ParseError = Error<ParseErrorImpl>;

impl<K: ErrorKind> Error<K> {
    pub fn new(error_impl: K, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &K {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        self.internal_error.get_error_name()
    }

    pub fn get_tip(&self) -> ErrorTip {
        self.internal_error.get_tip()
    }
}

impl<K: ErrorKind> Display for Error<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {}", self.internal_error, self.position)
    }
}

impl<K: ErrorKind> std::error::Error for Error<K> {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexErrorImpl {
    #[error("unrecognized pattern: {text:?}")]
    UnrecognizedPattern { text: String },
    #[error("unterminated string literal")]
    UnterminatedString,
}

impl ErrorKind for LexErrorImpl {
    fn get_error_name(&self) -> &'static str {
        match self {
            LexErrorImpl::UnrecognizedPattern { .. } => "UnrecognizedPattern",
            LexErrorImpl::UnterminatedString => "UnterminatedString",
        }
    }

    fn get_tip(&self) -> ErrorTip {
        match self {
            LexErrorImpl::UnrecognizedPattern { text } => {
                ErrorTip::Suggestion(format!("`{}` is not a name, number or keyword", text))
            }
            LexErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("String is never closed"))
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorImpl {
    #[error("expected module name, found {token:?}")]
    ExpectedModuleName { token: String },
    #[error("unclosed index")]
    UnclosedIndex,
    #[error("unused indefinite marker")]
    UnusedIndefiniteMarker,
    #[error("variable {name:?} already declared in line {prior_line}")]
    DuplicateName { name: String, prior_line: u32 },
    #[error("empty initializer")]
    EmptyInitializer,
    #[error("types do not match: expected {expected:?}, received {actual:?}")]
    TypeMismatch { expected: String, actual: String },
    #[error("variable {name:?} not declared")]
    UndeclaredName { name: String },
    #[error("missing terminator")]
    MissingTerminator,
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unclosed block")]
    UnclosedBlock,
    #[error("unexpected block close")]
    UnexpectedBlockClose,
}

impl ErrorKind for ParseErrorImpl {
    fn get_error_name(&self) -> &'static str {
        match self {
            ParseErrorImpl::ExpectedModuleName { .. } => "ExpectedModuleName",
            ParseErrorImpl::UnclosedIndex => "UnclosedIndex",
            ParseErrorImpl::UnusedIndefiniteMarker => "UnusedIndefiniteMarker",
            ParseErrorImpl::DuplicateName { .. } => "DuplicateName",
            ParseErrorImpl::EmptyInitializer => "EmptyInitializer",
            ParseErrorImpl::TypeMismatch { .. } => "TypeMismatch",
            ParseErrorImpl::UndeclaredName { .. } => "UndeclaredName",
            ParseErrorImpl::MissingTerminator => "MissingTerminator",
            ParseErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ParseErrorImpl::NumberParseError { .. } => "NumberParseError",
            ParseErrorImpl::UnclosedBlock => "UnclosedBlock",
            ParseErrorImpl::UnexpectedBlockClose => "UnexpectedBlockClose",
        }
    }

    fn get_tip(&self) -> ErrorTip {
        match self {
            ParseErrorImpl::ExpectedModuleName { token } => ErrorTip::Suggestion(format!(
                "Expected a module name after `import`, found `{}`",
                token
            )),
            ParseErrorImpl::UnclosedIndex => ErrorTip::Suggestion(String::from(
                "There is an unclosed `[`, every `[` needs a matching `]`",
            )),
            ParseErrorImpl::UnusedIndefiniteMarker => ErrorTip::Suggestion(String::from(
                "The `?` could not be used, the rest of the declaration may be wrong",
            )),
            ParseErrorImpl::DuplicateName { name, prior_line } => ErrorTip::Suggestion(format!(
                "Variable `{}` overlaps with the one declared in line {}",
                name, prior_line
            )),
            ParseErrorImpl::EmptyInitializer => {
                ErrorTip::Suggestion(String::from("Expected a value after `=`"))
            }
            ParseErrorImpl::TypeMismatch { expected, actual } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, actual
            )),
            ParseErrorImpl::UndeclaredName { name } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", name))
            }
            ParseErrorImpl::MissingTerminator => ErrorTip::Suggestion(String::from(
                "Every command needs a `;` at the end",
            )),
            ParseErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`", token))
            }
            ParseErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ParseErrorImpl::UnclosedBlock => {
                ErrorTip::Suggestion(String::from("This `{` is never closed"))
            }
            ParseErrorImpl::UnexpectedBlockClose => {
                ErrorTip::Suggestion(String::from("There is no open block to close"))
            }
        }
    }
}
