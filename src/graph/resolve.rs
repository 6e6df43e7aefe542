//
//  resolve.rs
//  modgraph
//

use super::types::{FromImport, ImportDeclaration};

/// Resolve the base module of an import relative to `current_module`.
///
/// Level 1 is the current package, level 2 its parent, and so on. The
/// result is empty when nothing can be resolved; callers drop it.
pub fn resolve_base(current_module: &str, stated_name: Option<&str>, level: usize) -> String {
    let stated = stated_name.unwrap_or("");
    if level == 0 {
        return stated.to_string();
    }

    let mut package: Vec<&str> = current_module.split('.').collect();
    package.pop();
    let keep = package.len().saturating_sub(level - 1);
    package.truncate(keep);
    let prefix = package.join(".");

    if stated.is_empty() {
        prefix
    } else {
        normalize_dotted(&format!("{prefix}.{stated}"))
    }
}

/// Drop empty segments, so leading, trailing and doubled dots disappear.
fn normalize_dotted(path: &str) -> String {
    path.split('.')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// Expand one declaration into the dotted strings matched against modules.
///
/// A from-import yields its resolved base plus `base.name` for every
/// imported name, since the name may itself be a submodule.
pub fn candidates(current_module: &str, declaration: &ImportDeclaration) -> Vec<String> {
    match declaration {
        ImportDeclaration::Absolute { name, .. } => {
            if name.is_empty() {
                Vec::new()
            } else {
                vec![name.clone()]
            }
        }
        ImportDeclaration::From(from) => from_candidates(current_module, from),
    }
}

fn from_candidates(current_module: &str, from: &FromImport) -> Vec<String> {
    let base = resolve_base(current_module, from.base_name.as_deref(), from.level);
    if base.is_empty() {
        return Vec::new();
    }

    // `from x import *` names nothing that could be a submodule.
    if from.has_wildcard {
        return vec![base];
    }

    let mut out = Vec::with_capacity(from.imported_names.len() + 1);
    for name in &from.imported_names {
        out.push(format!("{base}.{name}"));
    }
    out.insert(0, base);
    out
}
