//! CLI module for modgraph.
//!
//! One positional argument, the project root. Without it the usage text is
//! printed and the process exits normally.

pub mod report;

use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

use crate::graph::MatchStrategy;
use crate::{analyze, Config};

pub use report::{render, render_json, render_text};

#[derive(Parser)]
#[command(name = "modgraph")]
#[command(about = "modgraph - Python module dependency graph", long_about = None)]
pub struct Cli {
    /// Project root directory to scan
    pub root: Option<PathBuf>,

    /// Config file (default: <root>/modgraph.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the import matching strategy (suffix | exact)
    #[arg(short, long)]
    pub strategy: Option<MatchStrategy>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log per-file diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Edge list, project tree and leaf list
    Text,
    /// Machine-readable graph document
    Json,
}

/// Usage help, shown when no root is given.
pub fn usage() -> String {
    [
        "Usage: modgraph <root> [options]",
        "",
        "  <root>                          Project root to scan for .py files",
        "",
        "Options:",
        "  -c, --config <file>             Config file (default: <root>/modgraph.toml)",
        "  -s, --strategy <suffix|exact>   Import matching strategy",
        "  -f, --format <text|json>        Output format (default: text)",
        "  -v, --verbose                   Log skipped files to stderr",
        "",
    ]
    .join("\n")
}

/// Run one invocation, writing the report (or usage) to `out`.
///
/// A missing root is not an error: usage is written and the run ends
/// normally.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    let Some(root) = cli.root else {
        out.write_all(usage().as_bytes())?;
        return Ok(());
    };

    let mut config = Config::for_root(&root, cli.config.as_deref())?;
    if let Some(strategy) = cli.strategy {
        config.resolve.strategy = strategy;
    }

    let graph = analyze(&root, &config)?;
    let output = render(&graph, cli.format)
        .map_err(|e| anyhow::anyhow!("Failed to render report: {}", e))?;
    out.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        writeln!(out)?;
    }

    Ok(())
}
