//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a `Program`. It handles:
//!
//! - Statement parsing (imports and variable declarations)
//! - Initializer expressions (literals, variable references, list literals)
//! - Declared types with `?` and `[]` markers
//! - Block scoping through the scope table
//!
//! Statements and expressions are dispatched through lookup tables keyed by
//! the leading token kind.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod scope;
pub mod stmt;
pub mod types;
