//
//  error.rs
//  modgraph
//

use std::path::PathBuf;

/// Errors that can stop a graph build.
///
/// Per-file problems (unreadable files, bad encodings, syntax errors) are
/// never reported here; those files simply contribute no imports.
#[derive(Debug, thiserror::Error)]
pub enum ModgraphError {
    #[error("Cannot read root directory {0}: {1}")]
    UnreadableRoot(PathBuf, #[source] std::io::Error),

    #[error("Root is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Cannot read config file {0}: {1}")]
    ConfigRead(PathBuf, #[source] std::io::Error),

    #[error("Invalid config file {0}: {1}")]
    ConfigParse(PathBuf, #[source] toml::de::Error),

    #[error("Failed to load Python grammar: {0}")]
    ParserInit(String),

    #[error("Parser produced no tree for module {0}")]
    ParseFailed(String),

    #[error("Syntax error in module {0}")]
    SyntaxError(String),

    #[error("Module {0} is not valid UTF-8")]
    InvalidEncoding(String),
}

pub type Result<T> = std::result::Result<T, ModgraphError>;
