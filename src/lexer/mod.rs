//! Lexical analysis module.
//!
//! This module contains the tokenizer that converts source text into a
//! stream of tokens for parsing. It handles:
//!
//! - Recognition of keywords, base types, names and literals
//! - Single and double character marks
//! - String literals and line/block comments
//! - Line and column tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
