//
//  mod.rs
//  modgraph
//

pub mod extractor;

pub use extractor::{extract_imports, parse_python, try_extract_imports};
