//! Flat symbol table built as a side effect of parsing
//!
//! One table per compilation, one namespace for everything: globals,
//! functions, parameters, and locals of every function all share it, and
//! [`SymbolTable::record`] overwrites unconditionally. No redeclaration
//! diagnostic is produced. This is the defined behavior of the language
//! front-end, not an accident; see DESIGN.md.

use crate::parser::ast::{Param, TypeSpec};
use rustc_hash::FxHashMap;
use std::fmt;

/// What a declared name refers to.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolKind {
    Variable,
    Array { size: u64 },
    Function { params: Vec<Param> },
    Param,
}

/// A symbol table entry: declared type plus kind-specific metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub ty: TypeSpec,
    pub kind: SymbolKind,
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SymbolKind::Variable => write!(f, "variable {}", self.ty),
            SymbolKind::Array { size } => {
                write!(f, "array {}[{}]", self.ty, size)
            }
            SymbolKind::Function { params } => {
                write!(f, "function {} ({} params)", self.ty, params.len())
            }
            SymbolKind::Param => write!(f, "param {}", self.ty),
        }
    }
}

/// Flat name → symbol mapping for one compilation unit.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: FxHashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Insert a symbol, silently overwriting any prior entry of the same
    /// name.
    pub fn record(&mut self, name: &str, symbol: Symbol) {
        self.entries.insert(name.to_string(), symbol);
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Symbol)> {
        self.entries.iter()
    }

    /// Entries sorted by name, for deterministic display.
    pub fn entries_sorted(&self) -> Vec<(&String, &Symbol)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by_key(|(name, _)| name.as_str());
        entries
    }
}
