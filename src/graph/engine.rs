//
//  engine.rs
//  modgraph
//

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use super::forest::Forest;
use super::matcher::MatchStrategy;
use super::types::*;

/// The module dependency graph: every discovered module plus the
/// deduplicated set of modules each one imports.
///
/// Built once per run and never mutated afterwards. Cycles are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportGraph {
    /// Discovered modules: id -> source path.
    pub(crate) modules: ModuleMap,
    /// Source id -> target ids. Only sources with at least one edge appear.
    pub(crate) edges: BTreeMap<String, BTreeSet<String>>,
}

impl ImportGraph {
    /// Match every source module's candidates against the full module set.
    ///
    /// Candidates that match nothing are dropped. A module may end up
    /// pointing at itself when a candidate resolves to its own id.
    pub fn assemble(
        modules: ModuleMap,
        candidates: &BTreeMap<String, Vec<String>>,
        strategy: MatchStrategy,
    ) -> Self {
        let edges: BTreeMap<String, BTreeSet<String>> = candidates
            .par_iter()
            .filter(|(source, _)| modules.contains_key(*source))
            .filter_map(|(source, imports)| {
                let targets: BTreeSet<String> = imports
                    .iter()
                    .flat_map(|imp| {
                        modules
                            .keys()
                            .filter(move |module| strategy.matches(imp, module))
                    })
                    .cloned()
                    .collect();
                (!targets.is_empty()).then(|| (source.clone(), targets))
            })
            .collect();

        Self { modules, edges }
    }

    // ─── Modules ────────────────────────────────────────────────

    pub fn modules(&self) -> &ModuleMap {
        &self.modules
    }

    pub fn module_path(&self, id: &str) -> Option<&Path> {
        self.modules.get(id).map(|p| p.as_path())
    }

    pub fn contains_module(&self, id: &str) -> bool {
        self.modules.contains_key(id)
    }

    // ─── Edges ──────────────────────────────────────────────────

    /// Sorted targets imported by `source` (empty if none).
    pub fn targets(&self, source: &str) -> impl Iterator<Item = &str> {
        self.edges
            .get(source)
            .into_iter()
            .flat_map(|targets| targets.iter().map(String::as_str))
    }

    /// All edges, grouped by source, each group sorted by target.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges
            .iter()
            .flat_map(|(src, dsts)| dsts.iter().map(move |dst| (src.as_str(), dst.as_str())))
    }

    pub fn edge_list(&self) -> Vec<Edge> {
        self.edges()
            .map(|(source, target)| Edge {
                source: source.to_string(),
                target: target.to_string(),
            })
            .collect()
    }

    pub fn adjacency(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.edges.get(source).is_some_and(|t| t.contains(target))
    }

    // ─── Derived views ──────────────────────────────────────────

    /// Roots, children and leaves derived from the edge set.
    pub fn forest(&self) -> Forest {
        Forest::from_edges(self.edges())
    }

    /// The graph as a petgraph `DiGraph` over every discovered module.
    pub fn to_petgraph(&self) -> (DiGraph<String, ()>, HashMap<String, NodeIndex>) {
        let mut graph = DiGraph::with_capacity(self.modules.len(), self.edge_count());
        let mut index = HashMap::with_capacity(self.modules.len());

        for id in self.modules.keys() {
            index.insert(id.clone(), graph.add_node(id.clone()));
        }
        for (source, target) in self.edges() {
            if let (Some(&from), Some(&to)) = (index.get(source), index.get(target)) {
                graph.add_edge(from, to, ());
            }
        }

        (graph, index)
    }

    /// Import cycles: strongly connected groups of two or more modules,
    /// plus modules that import themselves. Each group is sorted, and the
    /// groups are sorted by their first member.
    pub fn cycles(&self) -> Vec<Vec<String>> {
        let (graph, _) = self.to_petgraph();
        let mut cycles: Vec<Vec<String>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
            .map(|scc| {
                let mut ids: Vec<String> = scc.into_iter().map(|n| graph[n].clone()).collect();
                ids.sort();
                ids
            })
            .collect();
        cycles.sort();
        cycles
    }

    pub fn stats(&self) -> GraphStats {
        let forest = self.forest();
        GraphStats {
            modules: self.modules.len(),
            importing_modules: self.edges.len(),
            edges: self.edge_count(),
            roots: forest.roots().len(),
            leaves: forest.leaves().len(),
            cycles: self.cycles().len(),
        }
    }
}
