//! # modgraph
//!
//! Module dependency graph builder for Python source trees.
//!
//! Given a project root, modgraph:
//!
//! - **Discovers** every `.py` file and gives it a dotted module id
//!   (`pkg/sub/mod.py` → `pkg.sub.mod`)
//! - **Extracts** `import` / `from … import …` declarations with tree-sitter
//! - **Resolves** relative imports against the importing module's package
//! - **Matches** the resulting candidates against the module set (exact or
//!   dotted-suffix) to produce directed edges
//! - **Derives** a forest view: roots, children and leaves
//!
//! Files that cannot be decoded or parsed stay in the module set but
//! contribute no edges. Only an unreadable root stops a run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use modgraph::{analyze, Config};
//!
//! let graph = analyze("path/to/project", &Config::default()).unwrap();
//!
//! for (source, target) in graph.edges() {
//!     println!("{source} -> {target}");
//! }
//!
//! let forest = graph.forest();
//! println!("roots: {:?}", forest.roots());
//! println!("leaves: {:?}", forest.leaves());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod parser;

// Re-exports for convenience
pub use config::Config;
pub use error::{ModgraphError, Result};
pub use graph::{Forest, ImportGraph, MatchStrategy};

use std::path::Path;

/// Build the import graph for the project rooted at `root`.
///
/// Every call starts from scratch; nothing is cached between runs.
pub fn analyze<P: AsRef<Path>>(root: P, config: &Config) -> Result<ImportGraph> {
    graph::build_graph(root.as_ref(), config)
}
