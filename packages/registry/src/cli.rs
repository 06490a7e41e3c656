//! Command-line interface for the registry.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use console::style;

use crate::config::{LoadOptions, DEFAULT_MAX_DOCUMENT_SIZE};
use crate::diagnostics::TracingSink;
use crate::error::Result;
use crate::registry::Registry;
use crate::snapshot::NodeSnapshot;

/// RegelRecht Registry - Inspect XML documents as dotted-path key/value trees.
#[derive(Parser)]
#[command(name = "regelrecht-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Maximum document size in bytes
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DOCUMENT_SIZE)]
    pub max_size: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a document and print every node, one per line.
    Dump {
        /// XML file to load
        file: PathBuf,
    },

    /// Load a document and print the nodes at an absolute key.
    Get {
        /// XML file to load
        file: PathBuf,

        /// Absolute key (e.g., root.config.server.port)
        key: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for `get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `<key> = <value>` lines
    Text,
    /// YAML snapshot of each matching subtree
    Yaml,
}

/// Run the CLI.
///
/// # Returns
/// `false` when the command completed but found nothing to show
pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    let options = LoadOptions::new().with_max_document_size(cli.max_size);

    match cli.command {
        Commands::Dump { file } => dump_command(&file, options),
        Commands::Get { file, key, format } => get_command(&file, &key, format, options),
    }
}

fn load(file: &Path, options: LoadOptions) -> Result<Registry> {
    let mut registry = Registry::new()
        .with_sink(TracingSink)
        .with_options(options);
    registry.read_file(file)?;
    Ok(registry)
}

/// Execute the dump command.
fn dump_command(file: &Path, options: LoadOptions) -> Result<bool> {
    let registry = load(file, options)?;
    print!("{registry}");
    Ok(true)
}

/// Execute the get command.
fn get_command(
    file: &Path,
    key: &str,
    format: OutputFormat,
    options: LoadOptions,
) -> Result<bool> {
    let registry = load(file, options)?;
    let nodes = registry.get_nodes(key);

    if nodes.is_empty() {
        eprintln!(
            "{} {}",
            style("No nodes found for").yellow().bold(),
            style(key).cyan()
        );
        return Ok(false);
    }

    tracing::info!(key, matches = nodes.len(), "Query complete");

    for node in nodes {
        match format {
            OutputFormat::Text => match node.value() {
                Some(value) => println!("{} = {value}", node.key()),
                None => println!("{}", node.key()),
            },
            OutputFormat::Yaml => {
                print!("{}", NodeSnapshot::capture(node).to_yaml()?);
            }
        }
    }

    Ok(true)
}
