//
//  report.rs
//  modgraph
//

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

use super::OutputFormat;
use crate::graph::{GraphStats, ImportGraph};

/// Render a graph in the requested format.
pub fn render(graph: &ImportGraph, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(graph)),
        OutputFormat::Json => render_json(graph),
    }
}

/// Edge list, project tree and leaf list.
pub fn render_text(graph: &ImportGraph) -> String {
    let forest = graph.forest();
    let mut out = String::new();

    out.push_str("IMPORT GRAPH:\n");
    for (source, target) in graph.edges() {
        let _ = writeln!(out, "{source} -> {target}");
    }

    out.push_str("\nPROJECT TREE:\n");
    for line in forest.render_lines() {
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str("\nATOMIC (LEAF) CHUNKS:\n");
    for leaf in forest.leaves() {
        let _ = writeln!(out, " - {leaf}");
    }

    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    modules: BTreeMap<&'a str, String>,
    edges: &'a BTreeMap<String, BTreeSet<String>>,
    roots: &'a [String],
    leaves: &'a [String],
    cycles: Vec<Vec<String>>,
    stats: GraphStats,
}

/// Pretty-printed JSON document with sorted keys.
pub fn render_json(graph: &ImportGraph) -> serde_json::Result<String> {
    let forest = graph.forest();
    let report = JsonReport {
        modules: graph
            .modules()
            .iter()
            .map(|(id, path)| (id.as_str(), path.display().to_string()))
            .collect(),
        edges: graph.adjacency(),
        roots: forest.roots(),
        leaves: forest.leaves(),
        cycles: graph.cycles(),
        stats: graph.stats(),
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::MatchStrategy;
    use std::path::PathBuf;

    fn graph(ids: &[&str], imports: &[(&str, &[&str])]) -> ImportGraph {
        let modules = ids
            .iter()
            .map(|id| (id.to_string(), PathBuf::from(format!("{id}.py"))))
            .collect();
        let candidates = imports
            .iter()
            .map(|(src, imps)| (src.to_string(), imps.iter().map(|s| s.to_string()).collect()))
            .collect();
        ImportGraph::assemble(modules, &candidates, MatchStrategy::Suffix)
    }

    #[test]
    fn test_text_report() {
        let g = graph(
            &["app", "cfg", "db", "env"],
            &[("app", &["db", "cfg"]), ("cfg", &["env"])],
        );
        let expected = "\
IMPORT GRAPH:
app -> cfg
app -> db
cfg -> env

PROJECT TREE:
└─ app
   ├─ cfg
   │  └─ env
   └─ db

ATOMIC (LEAF) CHUNKS:
 - db
 - env
";
        assert_eq!(render_text(&g), expected);
    }

    #[test]
    fn test_text_report_without_edges() {
        let g = graph(&["solo"], &[("solo", &["os"])]);
        assert_eq!(
            render_text(&g),
            "IMPORT GRAPH:\n\nPROJECT TREE:\n\nATOMIC (LEAF) CHUNKS:\n"
        );
    }

    #[test]
    fn test_text_report_with_cycle() {
        let g = graph(&["a", "b"], &[("a", &["b"]), ("b", &["a"])]);
        let text = render_text(&g);
        assert!(text.starts_with("IMPORT GRAPH:\na -> b\nb -> a\n"));
        assert!(text.contains("PROJECT TREE:\n\nATOMIC"));
    }

    #[test]
    fn test_json_report() {
        let g = graph(&["a", "b", "c"], &[("a", &["b"]), ("b", &["a", "c"])]);
        let json: serde_json::Value = serde_json::from_str(&render_json(&g).unwrap()).unwrap();

        assert_eq!(json["modules"]["a"], "a.py");
        assert_eq!(json["edges"]["b"], serde_json::json!(["a", "c"]));
        assert_eq!(json["roots"], serde_json::json!([]));
        assert_eq!(json["leaves"], serde_json::json!(["c"]));
        assert_eq!(json["cycles"], serde_json::json!([["a", "b"]]));
        assert_eq!(json["stats"]["edges"], 3);
    }

    #[test]
    fn test_render_dispatch() {
        let g = graph(&["a", "b"], &[("a", &["b"])]);
        assert_eq!(render(&g, OutputFormat::Text).unwrap(), render_text(&g));
        assert!(render(&g, OutputFormat::Json).unwrap().starts_with('{'));
    }
}
