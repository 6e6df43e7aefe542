//
//  types.rs
//  modgraph
//

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Discovered modules: dotted module id -> source file path.
pub type ModuleMap = BTreeMap<String, PathBuf>;

/// A source file and its canonical dotted id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub id: String,
    pub source_path: PathBuf,
}

/// One import declaration as written in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportDeclaration {
    /// `import a.b` — one per dotted name in the statement.
    Absolute { name: String, line: usize },
    /// `from X import Y, Z` with an optional relative prefix.
    From(FromImport),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromImport {
    /// Stated module name; `None` for `from . import x`.
    pub base_name: Option<String>,
    /// Number of leading dots; 0 for absolute.
    pub level: usize,
    pub imported_names: Vec<String>,
    pub has_wildcard: bool,
    pub line: usize,
}

impl ImportDeclaration {
    /// 1-based source line of the statement.
    pub fn line(&self) -> usize {
        match self {
            ImportDeclaration::Absolute { line, .. } => *line,
            ImportDeclaration::From(from) => from.line,
        }
    }
}

/// A directed dependency between two discovered modules.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

/// Summary counts for a built graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub modules: usize,
    pub importing_modules: usize,
    pub edges: usize,
    pub roots: usize,
    pub leaves: usize,
    pub cycles: usize,
}
