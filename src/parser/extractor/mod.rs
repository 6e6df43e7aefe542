//
//  mod.rs
//  modgraph
//

mod helpers;
mod python;

use tracing::debug;
use tree_sitter::{Parser, Tree};

use crate::error::{ModgraphError, Result};
use crate::graph::types::ImportDeclaration;

/// Parse Python source into a tree-sitter tree.
///
/// The tree may still contain error nodes; callers decide what to do with them.
pub fn parse_python(source: &str, module_id: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| ModgraphError::ParserInit(e.to_string()))?;

    parser
        .parse(source, None)
        .ok_or_else(|| ModgraphError::ParseFailed(module_id.to_string()))
}

/// Extract the import declarations of one module, or the reason it has none.
///
/// Fails on undecodable bytes, on any syntax error in the file, and on
/// Python 2 `print` / `exec` statements.
pub fn try_extract_imports(source: &[u8], module_id: &str) -> Result<Vec<ImportDeclaration>> {
    let text = std::str::from_utf8(source)
        .map_err(|_| ModgraphError::InvalidEncoding(module_id.to_string()))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let tree = parse_python(text, module_id)?;
    let root = tree.root_node();
    if root.has_error() || python::has_python2_statements(&root) {
        return Err(ModgraphError::SyntaxError(module_id.to_string()));
    }

    Ok(python::collect_imports(&root, text.as_bytes()))
}

/// Extract the import declarations of one module.
///
/// Never fails: a module that cannot be decoded or parsed has no imports.
pub fn extract_imports(source: &[u8], module_id: &str) -> Vec<ImportDeclaration> {
    match try_extract_imports(source, module_id) {
        Ok(imports) => imports,
        Err(e) => {
            debug!(module = module_id, error = %e, "skipping imports");
            Vec::new()
        }
    }
}
