//! Integration tests for the front end.
//!
//! These tests drive complete source files through tokenization and parsing
//! and check the resulting program or the rendered diagnostic.

use ilang::{
    ast::{
        ast::Stmt,
        expressions::ListExpr,
        statements::{BlockStmt, ImportStmt, VarDeclStmt},
        types::BaseType,
    },
    errors::errors::{ErrorKind, ParseErrorImpl},
    lexer::lexer::tokenize,
    parser::parser::parse,
    render_error,
};

const PROGRAM: &str = r#"// Sample program
import math;
import collections as col;

int count = 3;
?string label = null;
float[] weights = [0.5, 1.5];

{
    /* scoped values */
    int[][] grid = [[1, 2], [3, 4]];
    dynamic mixed = [count, "a", weights];
    {
        bool flag = true;
    }
    bool flag = false;
}

int grid = -1;
"#;

#[test]
fn test_parse_sample_program() {
    let tokens = tokenize(PROGRAM).unwrap();
    let program = parse(tokens).unwrap();

    assert_eq!(program.len(), 7);

    let import = program.body[1].downcast_ref::<ImportStmt>().unwrap();
    assert_eq!(import.namespace(), "col");

    let label = program.body[3].downcast_ref::<VarDeclStmt>().unwrap();
    assert!(label.nullable);
    assert_eq!(label.declared_type, BaseType::String);

    let block = program.body[5].downcast_ref::<BlockStmt>().unwrap();
    assert_eq!(block.body.len(), 4);
    assert_eq!(block.get_span().start.line, 9);

    let mixed = block.body[1].downcast_ref::<VarDeclStmt>().unwrap();
    let list = mixed
        .assigned_value
        .as_ref()
        .unwrap()
        .downcast_ref::<ListExpr>()
        .unwrap();
    assert_eq!(list.element_type, BaseType::Dynamic);
    assert_eq!(list.dimension, 2);

    let grid = program.body[6].downcast_ref::<VarDeclStmt>().unwrap();
    assert_eq!(grid.identifier, "grid");
}

#[test]
fn test_parse_is_deterministic() {
    let first = parse(tokenize(PROGRAM).unwrap()).unwrap();
    let second = parse(tokenize(PROGRAM).unwrap()).unwrap();

    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_duplicate_declaration_diagnostic() {
    let source = "int total;\n\nfloat total = 1.0;\n";
    let error = parse(tokenize(source).unwrap()).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ParseErrorImpl::DuplicateName {
            name: "total".to_string(),
            prior_line: 1
        }
    );

    let rendered = render_error(&error, source, "main.i");
    assert!(rendered.starts_with("Error: DuplicateName (Variable `total` overlaps"));
    assert!(rendered.contains("-> main.i"));
    assert!(rendered.contains("3 | float total = 1.0;"));
}

#[test]
fn test_lex_error_diagnostic() {
    let source = "import math;\nint 9lives = 1;\n";
    let error = tokenize(source).unwrap_err();

    assert_eq!(error.get_kind().get_error_name(), "UnrecognizedPattern");
    assert_eq!(error.get_position().line, 2);

    let rendered = render_error(&error, source, "main.i");
    assert!(rendered.contains("2 | int 9lives = 1;"));
    assert!(rendered.ends_with("| ----^"));
}

#[test]
fn test_scope_closes_with_block() {
    let source = "{ int inner = 1; }\nint outer = inner;";
    let error = parse(tokenize(source).unwrap()).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ParseErrorImpl::UndeclaredName {
            name: "inner".to_string()
        }
    );
    assert_eq!(error.get_position().line, 2);
}
