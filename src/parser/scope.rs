//! The scope table consulted while parsing declarations.
//!
//! Every declared variable is recorded with the block depth it was declared
//! at. Names are unique across all live entries, not just within one block,
//! and closing a block drops every entry declared at that depth or deeper.

use std::collections::{hash_map::Values, HashMap};

use tracing::debug;

use crate::{
    ast::types::BaseType,
    errors::errors::{ParseError, ParseErrorImpl},
    Position,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub declared_type: BaseType,
    pub scope_level: usize,
    pub list_depth: usize,
    pub declaration_line: u32,
    pub nullable: bool,
}

#[derive(Debug, Default)]
pub struct ScopeTable {
    variable_lookup: HashMap<String, Variable>,
}

impl ScopeTable {
    pub fn new() -> Self {
        ScopeTable {
            variable_lookup: HashMap::new(),
        }
    }

    /// Records `variable`, failing if its name already has a live entry.
    ///
    /// `position` is where the new declaration names the variable and is
    /// used for the error; the error itself cites the earlier line.
    pub fn declare(&mut self, variable: Variable, position: Position) -> Result<(), ParseError> {
        if let Some(existing) = self.variable_lookup.get(&variable.name) {
            return Err(ParseError::new(
                ParseErrorImpl::DuplicateName {
                    name: variable.name,
                    prior_line: existing.declaration_line,
                },
                position,
            ));
        }

        self.variable_lookup.insert(variable.name.clone(), variable);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&Variable> {
        self.variable_lookup.get(name)
    }

    /// Drops every entry declared at `level` or deeper.
    pub fn close_scope(&mut self, level: usize) {
        let before = self.variable_lookup.len();
        self.variable_lookup
            .retain(|_, variable| variable.scope_level < level);

        debug!(
            level,
            purged = before - self.variable_lookup.len(),
            "closed scope"
        );
    }

    pub fn len(&self) -> usize {
        self.variable_lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variable_lookup.is_empty()
    }

    pub fn iter(&self) -> Values<'_, String, Variable> {
        self.variable_lookup.values()
    }
}
