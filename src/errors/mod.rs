//! Error types and error handling for the front end.
//!
//! This module defines the two error families produced by the tokenizer and
//! the statement parser. It includes:
//!
//! - A positioned error structure shared by both families
//! - The lexical and parse error variants
//! - Error names and suggestions used for diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
