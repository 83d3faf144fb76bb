use std::{
    any::Any,
    fmt::{self, Display},
    slice::Iter,
};

use crate::Span;

use super::{
    ast::{ExprWrapper, Stmt, StmtType, StmtWrapper},
    types::BaseType,
};

#[derive(Debug, Clone)]
pub struct ImportStmt {
    pub module: String,
    /// Name the module is bound to, from `import module as alias;`.
    pub alias: Option<String>,
    pub span: Span,
}

impl ImportStmt {
    /// The name the module is visible under.
    pub fn namespace(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.module)
    }
}

impl Stmt for ImportStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ImportStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for ImportStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "<Import {} as {}>", self.module, alias),
            None => write!(f, "<Import {}>", self.module),
        }
    }
}

#[derive(Debug, Clone)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub declared_type: BaseType,
    /// The base type as written, e.g. `integer` for `int`.
    pub type_name: String,
    pub list_depth: usize,
    pub nullable: bool,
    pub assigned_value: Option<ExprWrapper>,
    pub span: Span,
}

impl VarDeclStmt {
    /// Declared type as written: `?` prefix and one `[]` per list level.
    pub fn type_spelling(&self) -> String {
        format!(
            "{}{}{}",
            if self.nullable { "?" } else { "" },
            self.type_name,
            "[]".repeat(self.list_depth)
        )
    }
}

impl Stmt for VarDeclStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::VarDeclStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for VarDeclStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Define '{}' as '{}'", self.identifier, self.type_spelling())?;
        if let Some(value) = &self.assigned_value {
            write!(f, " set to {}", value)?;
        }
        write!(f, ">")
    }
}

/// The statements of a `{ ... }` block.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub body: Vec<StmtWrapper>,
    /// Block depth of the statements inside, starting at 1.
    pub level: usize,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.body.iter()
    }
}

impl Stmt for BlockStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::BlockStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<Block level {}>", self.level)?;
        for stmt in &self.body {
            let rendered = stmt.to_string();
            for line in rendered.lines() {
                writeln!(f, "  {}", line)?;
            }
        }
        write!(f, "<End block>")
    }
}
