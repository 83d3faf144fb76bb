//! Type names used by declarations and initializers.
//!
//! Declarations name a base type through a `BaseType` token; literals and
//! list literals infer one. Spellings with aliases (`integer`, `str`,
//! `dictionary`) collapse to a single canonical variant so that the
//! declared and inferred sides compare equal.

use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    Any,
    Bool,
    Complex,
    Dict,
    Dynamic,
    Float,
    Int,
    List,
    String,
    Null,
    MdArray,
    /// Inferred for `[]`; never written in source.
    EmptyList,
}

impl BaseType {
    /// Maps a `BaseType` token's text to its canonical type.
    pub fn from_name(name: &str) -> Option<BaseType> {
        let base = match name {
            "any" => BaseType::Any,
            "bool" => BaseType::Bool,
            "complex" => BaseType::Complex,
            "dict" | "dictionary" => BaseType::Dict,
            "dynamic" => BaseType::Dynamic,
            "float" => BaseType::Float,
            "int" | "integer" => BaseType::Int,
            "list" => BaseType::List,
            "str" | "string" => BaseType::String,
            "null" => BaseType::Null,
            "mdarray" => BaseType::MdArray,
            _ => return None,
        };

        Some(base)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BaseType::Any => "any",
            BaseType::Bool => "bool",
            BaseType::Complex => "complex",
            BaseType::Dict => "dict",
            BaseType::Dynamic => "dynamic",
            BaseType::Float => "float",
            BaseType::Int => "int",
            BaseType::List => "list",
            BaseType::String => "string",
            BaseType::Null => "null",
            BaseType::MdArray => "mdarray",
            BaseType::EmptyList => "emptylist",
        }
    }

    /// `any` and `dynamic` take a value of any type.
    pub fn accepts_anything(&self) -> bool {
        matches!(self, BaseType::Any | BaseType::Dynamic)
    }

    pub fn is_list_container(&self) -> bool {
        matches!(self, BaseType::List | BaseType::MdArray)
    }
}

impl Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The type an expression evaluates to: a base type plus list nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueType {
    pub base: BaseType,
    pub list_depth: usize,
}

impl ValueType {
    pub fn scalar(base: BaseType) -> Self {
        ValueType {
            base,
            list_depth: 0,
        }
    }

    pub fn list(base: BaseType, list_depth: usize) -> Self {
        ValueType { base, list_depth }
    }

    pub fn is_null(&self) -> bool {
        self.base == BaseType::Null && self.list_depth == 0
    }

    pub fn is_empty_list(&self) -> bool {
        self.base == BaseType::EmptyList
    }

    pub fn is_list(&self) -> bool {
        self.list_depth > 0
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty_list() {
            return write!(f, "{}", self.base);
        }
        write!(f, "{}{}", self.base, "[]".repeat(self.list_depth))
    }
}

/// Value carried by a literal expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Literals {
    Bool(bool),
    String(String),
    Float(f64),
    Int(i64),
    Null,
}

impl Literals {
    pub fn base_type(&self) -> BaseType {
        match self {
            Literals::Bool(_) => BaseType::Bool,
            Literals::String(_) => BaseType::String,
            Literals::Float(_) => BaseType::Float,
            Literals::Int(_) => BaseType::Int,
            Literals::Null => BaseType::Null,
        }
    }
}

impl Display for Literals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literals::Bool(value) => write!(f, "<BOOL: {}>", value),
            Literals::String(value) => write!(f, "<STRING: {}>", value),
            Literals::Float(value) => write!(f, "<FLOAT: {}>", value),
            Literals::Int(value) => write!(f, "<INT: {}>", value),
            Literals::Null => write!(f, "<NULL>"),
        }
    }
}
