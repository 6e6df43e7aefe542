//! Python import extraction.

use tree_sitter::Node;

use super::helpers::{dotted_name, line_of, node_text};
use crate::graph::types::{FromImport, ImportDeclaration};

/// Statement kinds that matter for the import graph.
enum Statement<'t> {
    /// `import a.b, c as d`
    Import(Node<'t>),
    /// `from .x import y` / `from x import *`
    FromImport(Node<'t>),
    /// `from __future__ import annotations`
    FutureImport(Node<'t>),
    Other,
}

fn classify(node: Node<'_>) -> Statement<'_> {
    match node.kind() {
        "import_statement" => Statement::Import(node),
        "import_from_statement" => Statement::FromImport(node),
        "future_import_statement" => Statement::FutureImport(node),
        _ => Statement::Other,
    }
}

/// Collect every import declaration in the tree, at any nesting depth.
pub fn collect_imports(root: &Node, source: &[u8]) -> Vec<ImportDeclaration> {
    let mut imports = Vec::new();
    let mut cursor = root.walk();

    loop {
        let descend = match classify(cursor.node()) {
            Statement::Import(node) => {
                imports.extend(plain_import(&node, source));
                false
            }
            Statement::FromImport(node) => {
                imports.push(ImportDeclaration::From(from_import(&node, source)));
                false
            }
            Statement::FutureImport(node) => {
                imports.push(ImportDeclaration::From(future_import(&node, source)));
                false
            }
            Statement::Other => true,
        };

        if descend && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return imports;
            }
        }
    }
}

/// Whether the tree uses statements only Python 2 accepts.
///
/// The grammar still parses `print x` and `exec code` without error nodes.
pub fn has_python2_statements(root: &Node) -> bool {
    let mut cursor = root.walk();
    loop {
        if matches!(cursor.node().kind(), "print_statement" | "exec_statement") {
            return true;
        }
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return false;
            }
        }
    }
}

/// One declaration per dotted name; aliases are dropped.
fn plain_import(node: &Node, source: &[u8]) -> Vec<ImportDeclaration> {
    let line = line_of(node);
    imported_names(node, source)
        .into_iter()
        .map(|name| ImportDeclaration::Absolute { name, line })
        .collect()
}

fn from_import(node: &Node, source: &[u8]) -> FromImport {
    let (base_name, level) = match node.child_by_field_name("module_name") {
        Some(module) if module.kind() == "relative_import" => relative_module(&module, source),
        Some(module) => (dotted_name(&module, source), 0),
        None => (None, 0),
    };

    let mut cursor = node.walk();
    let has_wildcard = node
        .children(&mut cursor)
        .any(|child| child.kind() == "wildcard_import");

    FromImport {
        base_name,
        level,
        imported_names: imported_names(node, source),
        has_wildcard,
        line: line_of(node),
    }
}

fn future_import(node: &Node, source: &[u8]) -> FromImport {
    FromImport {
        base_name: Some("__future__".to_string()),
        level: 0,
        imported_names: imported_names(node, source),
        has_wildcard: false,
        line: line_of(node),
    }
}

/// `..pkg.mod` -> (Some("pkg.mod"), 2); `.` -> (None, 1).
fn relative_module(node: &Node, source: &[u8]) -> (Option<String>, usize) {
    let mut level = 0;
    let mut name = None;
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "import_prefix" => level += node_text(&child, source).matches('.').count(),
            "dotted_name" => name = dotted_name(&child, source),
            _ => {}
        }
    }
    (name, level)
}

fn imported_names(node: &Node, source: &[u8]) -> Vec<String> {
    let mut cursor = node.walk();
    node.children_by_field_name("name", &mut cursor)
        .filter_map(|child| dotted_name(&child, source))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_python;

    fn imports(code: &str) -> Vec<ImportDeclaration> {
        let tree = parse_python(code, "test").unwrap();
        collect_imports(&tree.root_node(), code.as_bytes())
    }

    fn from(base: Option<&str>, level: usize, names: &[&str], wildcard: bool, line: usize) -> ImportDeclaration {
        ImportDeclaration::From(FromImport {
            base_name: base.map(str::to_string),
            level,
            imported_names: names.iter().map(|n| n.to_string()).collect(),
            has_wildcard: wildcard,
            line,
        })
    }

    #[test]
    fn test_plain_imports() {
        let found = imports("import os\nimport a.b, c as d\n");
        assert_eq!(
            found,
            vec![
                ImportDeclaration::Absolute { name: "os".into(), line: 1 },
                ImportDeclaration::Absolute { name: "a.b".into(), line: 2 },
                ImportDeclaration::Absolute { name: "c".into(), line: 2 },
            ]
        );
    }

    #[test]
    fn test_aliased_dotted_import_keeps_name() {
        let found = imports("import numpy.linalg as la\n");
        assert_eq!(
            found,
            vec![ImportDeclaration::Absolute { name: "numpy.linalg".into(), line: 1 }]
        );
    }

    #[test]
    fn test_from_imports() {
        let code = "from pkg.sub import a, b as bee\nfrom . import x\nfrom ..core.db import conn\n";
        assert_eq!(
            imports(code),
            vec![
                from(Some("pkg.sub"), 0, &["a", "b"], false, 1),
                from(None, 1, &["x"], false, 2),
                from(Some("core.db"), 2, &["conn"], false, 3),
            ]
        );
    }

    #[test]
    fn test_wildcard_import() {
        assert_eq!(imports("from models import *\n"), vec![from(Some("models"), 0, &[], true, 1)]);
        assert_eq!(imports("from .models import *\n"), vec![from(Some("models"), 1, &[], true, 1)]);
    }

    #[test]
    fn test_parenthesized_names() {
        let code = "from app.views import (\n    index,\n    detail,\n)\n";
        assert_eq!(imports(code), vec![from(Some("app.views"), 0, &["index", "detail"], false, 1)]);
    }

    #[test]
    fn test_future_import() {
        assert_eq!(
            imports("from __future__ import annotations\n"),
            vec![from(Some("__future__"), 0, &["annotations"], false, 1)]
        );
    }

    #[test]
    fn test_nested_imports_are_found() {
        let code = "\
def load():
    import json
    if True:
        from .cache import store
    return json

class Loader:
    try:
        import yaml
    except ImportError:
        yaml = None
";
        let found = imports(code);
        assert_eq!(found.len(), 3);
        assert_eq!(found[0], ImportDeclaration::Absolute { name: "json".into(), line: 2 });
        assert_eq!(found[1], from(Some("cache"), 1, &["store"], false, 4));
        assert_eq!(found[2], ImportDeclaration::Absolute { name: "yaml".into(), line: 9 });
    }

    #[test]
    fn test_python2_statements_detected() {
        for code in ["print 'hi'\n", "def f():\n    exec \"x = 1\"\n"] {
            let tree = parse_python(code, "legacy").unwrap();
            assert!(has_python2_statements(&tree.root_node()), "{code:?}");
        }
        let tree = parse_python("print('hi')\nexec('x = 1')\n", "modern").unwrap();
        assert!(!has_python2_statements(&tree.root_node()));
    }

    #[test]
    fn test_non_import_statements_ignored() {
        let code = "x = 1\ndef f():\n    return 'import os'\n# import sys\n";
        assert!(imports(code).is_empty());
    }
}
