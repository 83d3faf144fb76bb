/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core AST traits, wrappers and the `Program` root
/// - expressions: Literal, list literal and variable reference nodes
/// - statements: Import, variable declaration and block nodes
/// - types: Base type names and inferred value types
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
