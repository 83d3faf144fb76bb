use std::{
    any::Any,
    fmt::{self, Display},
};

use crate::{
    errors::errors::{ParseError, ParseErrorImpl},
    parser::scope::Variable,
    Span,
};

use super::{
    ast::{Expr, ExprType, ExprWrapper},
    types::{BaseType, Literals, ValueType},
};

// LITERALS

/// Literal Expression
/// A single bool, string, float, int or `null`.
#[derive(Debug, Clone)]
pub struct LiteralExpr {
    pub value: Literals,
    pub span: Span,
}

impl Expr for LiteralExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Literal
    }
    fn get_type(&self) -> Result<ValueType, ParseError> {
        Ok(ValueType::scalar(self.value.base_type()))
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for LiteralExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// List Expression
/// A bracketed list literal. The element type and dimension are inferred
/// once, when the node is built.
#[derive(Debug, Clone)]
pub struct ListExpr {
    pub elements: Vec<ExprWrapper>,
    pub element_type: BaseType,
    pub dimension: usize,
    pub span: Span,
}

impl ListExpr {
    /// Builds a list literal, inferring its element type from `elements`.
    ///
    /// The element type is the first element's type. A later element of a
    /// different type degrades it to `dynamic`; empty nested lists agree
    /// with any element.
    pub fn new(elements: Vec<ExprWrapper>, span: Span) -> Result<ListExpr, ParseError> {
        let mut first: Option<ValueType> = None;
        let mut degraded = false;
        let mut deepest = 0;

        for element in &elements {
            let ty = element.get_type()?;
            deepest = deepest.max(ty.list_depth);

            if ty.is_empty_list() {
                continue;
            }

            match first {
                None => first = Some(ty),
                Some(first) if first != ty => degraded = true,
                Some(_) => {}
            }
        }

        let element_type = match first {
            _ if degraded => BaseType::Dynamic,
            Some(first) => first.base,
            None => BaseType::EmptyList,
        };

        Ok(ListExpr {
            elements,
            element_type,
            dimension: deepest + 1,
            span,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Expr for ListExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::List
    }
    fn get_type(&self) -> Result<ValueType, ParseError> {
        Ok(ValueType::list(self.element_type, self.dimension))
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for ListExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements = self
            .elements
            .iter()
            .map(|element| element.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        write!(
            f,
            "<{}{}: [{}]>",
            self.element_type.as_str().to_uppercase(),
            "[]".repeat(self.dimension),
            elements
        )
    }
}

/// Symbol Expression
/// A reference to a declared variable. `variable` is the scope entry the
/// name resolved to when it was parsed, if any.
#[derive(Debug, Clone)]
pub struct SymbolExpr {
    pub name: String,
    pub variable: Option<Variable>,
    pub span: Span,
}

impl Expr for SymbolExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Symbol
    }
    fn get_type(&self) -> Result<ValueType, ParseError> {
        match &self.variable {
            Some(variable) => Ok(ValueType::list(variable.declared_type, variable.list_depth)),
            None => Err(ParseError::new(
                ParseErrorImpl::UndeclaredName {
                    name: self.name.clone(),
                },
                self.span.start,
            )),
        }
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for SymbolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<VAR: {}>", self.name)
    }
}
