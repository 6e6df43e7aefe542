//
//  builder.rs
//  modgraph
//

use ignore::{DirEntry, WalkBuilder};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path};
use tracing::{debug, info, warn};

use super::engine::ImportGraph;
use super::resolve::candidates;
use super::types::{Module, ModuleMap};
use crate::config::{Config, DiscoveryConfig};
use crate::error::{ModgraphError, Result};
use crate::parser::extract_imports;

/// Canonical dotted id for a file under `root`.
///
/// `pkg/sub/mod.py` becomes `pkg.sub.mod`. Returns `None` for paths outside
/// `root` or without a file name.
pub fn module_id(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?.with_extension("");
    let segments: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    if segments.is_empty() {
        None
    } else {
        Some(segments.join("."))
    }
}

/// Walk `root` and map every source file to its module id.
///
/// Only a root that cannot be listed is an error; unreadable entries
/// deeper in the tree are logged and skipped.
pub fn discover_modules(root: &Path, config: &DiscoveryConfig) -> Result<ModuleMap> {
    let meta = fs::metadata(root).map_err(|e| ModgraphError::UnreadableRoot(root.to_path_buf(), e))?;
    if !meta.is_dir() {
        return Err(ModgraphError::NotADirectory(root.to_path_buf()));
    }
    fs::read_dir(root).map_err(|e| ModgraphError::UnreadableRoot(root.to_path_buf(), e))?;

    let filter_config = config.clone();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(!config.include_hidden)
        .ignore(config.respect_gitignore)
        .git_ignore(config.respect_gitignore)
        .git_global(config.respect_gitignore)
        .git_exclude(config.respect_gitignore)
        .parents(config.respect_gitignore)
        .require_git(false)
        .follow_links(config.follow_links)
        .filter_entry(move |entry| entry.depth() == 0 || !is_excluded(entry, &filter_config))
        .build();

    let mut modules = ModuleMap::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if let Some(module) = source_module(root, &entry, config) {
            modules.insert(module.id, module.source_path);
        }
    }

    Ok(modules)
}

fn is_excluded(entry: &DirEntry, config: &DiscoveryConfig) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| config.is_excluded(name))
}

fn source_module(root: &Path, entry: &DirEntry, config: &DiscoveryConfig) -> Option<Module> {
    if !entry.file_type().is_some_and(|ft| ft.is_file()) {
        return None;
    }
    let path = entry.path();
    let ext = path.extension()?.to_str()?;
    if !config.is_source_extension(ext) {
        return None;
    }
    let id = module_id(root, path)?;
    Some(Module {
        id,
        source_path: path.to_path_buf(),
    })
}

/// Read one module and turn its imports into match candidates.
///
/// Any failure here leaves the module with no candidates.
pub fn module_candidates(id: &str, path: &Path) -> Vec<String> {
    let source = match fs::read(path) {
        Ok(source) => source,
        Err(e) => {
            warn!(module = id, file = %path.display(), error = %e, "cannot read module");
            return Vec::new();
        }
    };

    extract_imports(&source, id)
        .iter()
        .flat_map(|decl| candidates(id, decl))
        .collect()
}

/// Build the import graph for every module under `root`.
///
/// Extraction runs in parallel per file; assembly starts only once the
/// whole module set is known.
pub fn build_graph(root: &Path, config: &Config) -> Result<ImportGraph> {
    let modules = discover_modules(root, &config.discovery)?;
    info!(root = %root.display(), modules = modules.len(), "discovered modules");

    let candidates: BTreeMap<String, Vec<String>> = modules
        .par_iter()
        .map(|(id, path)| (id.clone(), module_candidates(id, path)))
        .collect();
    debug!(
        candidates = candidates.values().map(Vec::len).sum::<usize>(),
        "extracted import candidates"
    );

    let graph = ImportGraph::assemble(modules, &candidates, config.resolve.strategy);
    info!(
        edges = graph.edge_count(),
        strategy = %config.resolve.strategy,
        "assembled import graph"
    );

    Ok(graph)
}
