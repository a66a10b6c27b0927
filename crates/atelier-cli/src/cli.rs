//! Command handlers for the atelier CLI.
//!
//! Argument structs carry the clap derives; the handlers turn them into
//! calls on the core [`Resolver`] and hand the markdown to the renderer.

use std::{
    io::Read,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use atelier_core::{
    display::ResolvedOrderItem, OrderItemSnapshot, RenderDecision, Resolver, SnapshotDocument,
};
use clap::Args;
use log::info;
use serde_json::json;

use crate::renderer::TerminalRenderer;

/// Resolve order item snapshots
#[derive(Args)]
pub struct ResolveArgs {
    /// Snapshot file (one order item or an array of them); `-` reads stdin
    pub file: PathBuf,

    /// Show every completed task even when the rollup would collapse
    #[arg(long)]
    pub expand: bool,

    /// Emit the decisions as JSON instead of markdown
    #[arg(long)]
    pub json: bool,

    /// Override the configured collapse threshold
    #[arg(long)]
    pub collapse_threshold: Option<usize>,
}

pub struct Cli {
    resolver: Resolver,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(resolver: Resolver, renderer: TerminalRenderer) -> Self {
        Self { resolver, renderer }
    }

    /// Resolve every snapshot in the input and print the result.
    pub fn resolve(&self, args: &ResolveArgs) -> Result<()> {
        let snapshots = read_snapshots(&args.file)?;
        info!("Resolving {} order item(s)", snapshots.len());

        let resolved: Vec<(&OrderItemSnapshot, RenderDecision)> = snapshots
            .iter()
            .map(|snapshot| (snapshot, self.resolver.resolve_snapshot(snapshot)))
            .collect();

        if args.json {
            let output: Vec<_> = resolved
                .iter()
                .map(|(snapshot, decision)| {
                    json!({
                        "orderItemId": snapshot.order_item_id,
                        "decision": decision,
                    })
                })
                .collect();
            let text = serde_json::to_string_pretty(&output)
                .context("Failed to serialize decisions")?;
            println!("{text}");
            return Ok(());
        }

        if resolved.is_empty() {
            return self.renderer.render("No order items found.\n");
        }

        let markdown: Vec<String> = resolved
            .iter()
            .map(|(snapshot, decision)| {
                ResolvedOrderItem {
                    snapshot,
                    decision,
                    expanded: args.expand,
                }
                .to_string()
            })
            .collect();
        self.renderer.render(&markdown.join("\n"))
    }

    /// Print the configuration the resolver is running with.
    pub fn show_config(&self) -> Result<()> {
        let text = serde_json::to_string_pretty(self.resolver.config())
            .context("Failed to serialize configuration")?;
        println!("{text}");
        Ok(())
    }
}

/// Print the JSON schema of [`SnapshotDocument`].
pub fn show_schema() -> Result<()> {
    let schema = schemars::schema_for!(SnapshotDocument);
    let text = serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?;
    println!("{text}");
    Ok(())
}

fn read_snapshots(path: &Path) -> Result<Vec<OrderItemSnapshot>> {
    let document = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read snapshot from stdin")?;
        SnapshotDocument::from_json(&text).context("Failed to parse snapshot from stdin")?
    } else {
        SnapshotDocument::load(path)
            .with_context(|| format!("Failed to load snapshot {}", path.display()))?
    };
    Ok(document.into_snapshots())
}
