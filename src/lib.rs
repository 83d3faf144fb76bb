#![allow(clippy::module_inception)]

use std::fmt::{self, Display};

use crate::errors::errors::{Error, ErrorKind, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based line/column pair in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new(1, 1)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Joins two spans into one covering both.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start,
            end: other.end,
        }
    }
}

pub fn get_line_at_position(source: &str, position: Position) -> Option<&str> {
    source
        .split('\n')
        .nth(position.line.saturating_sub(1) as usize)
        .map(|line| line.trim_end_matches('\r'))
}

/// Renders an error as a caret diagnostic pointing into `source`.
///
/// ```text
/// Error: TypeMismatch (Expected type `int`, received `string`)
/// -> main.il
///   |
/// 2 | int x = "a";
///   | --------^
/// ```
pub fn render_error<K: ErrorKind>(error: &Error<K>, source: &str, file: &str) -> String {
    let position = *error.get_position();

    Diagnostic {
        name: error.get_error_name(),
        tip: error.get_tip(),
        position,
        line_text: get_line_at_position(source, position).unwrap_or(""),
        file,
    }
    .to_string()
}

/// An error located in one line of source text.
struct Diagnostic<'a> {
    name: &'a str,
    tip: ErrorTip,
    position: Position,
    line_text: &'a str,
    file: &'a str,
}

impl Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line_str = self.position.line.to_string();
        let padding = line_str.len() + 2;

        if let ErrorTip::None = self.tip {
            writeln!(f, "Error: {}", self.name)?;
        } else {
            writeln!(f, "Error: {} ({})", self.name, self.tip)?;
        }
        writeln!(f, "-> {}", self.file)?;
        writeln!(f, "{:>padding$}", "|")?;

        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(self.line_text);
        writeln!(f, "{} | {}", line_str, line_text_removed.trim_end())?;

        let line_pos = self.position.column.saturating_sub(1) as usize;
        let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

        write!(f, "{:>padding$} {:->arrows$}", "|", "^")
    }
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (&string[start..], start)
}
