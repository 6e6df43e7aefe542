//! Module dependency graph: discovery, resolution, assembly and the
//! derived forest view.

pub mod builder;
pub mod engine;
pub mod forest;
pub mod matcher;
pub mod resolve;
pub mod types;

pub use builder::{build_graph, discover_modules, module_candidates, module_id};
pub use engine::ImportGraph;
pub use forest::Forest;
pub use matcher::MatchStrategy;
pub use resolve::{candidates, resolve_base};
pub use types::{Edge, FromImport, GraphStats, ImportDeclaration, Module, ModuleMap};
