use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::ResolveArgs;

/// Order item progress for the production dashboard
///
/// Reads milestone/task snapshots exported by the dashboard's data layer and
/// shows which milestone each order item is currently at, or the completed
/// work once the whole pipeline is finished.
#[derive(Parser)]
#[command(version, about, name = "atelier")]
pub struct Args {
    /// Path to a JSON resolver configuration. Defaults to
    /// $XDG_CONFIG_HOME/atelier/config.json when present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the atelier CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the current milestone of one or more order items
    #[command(alias = "r")]
    Resolve(ResolveArgs),
    /// Print the effective resolver configuration as JSON
    Config,
    /// Print the JSON schema of the snapshot input document
    Schema,
}
