//! Aerolist MCP Server - Main Entry Point
//!
//! This is the main entry point for the checklist editing MCP server.
//! The actual implementation is in the `aerolist` library.

use aerolist::ChecklistServerHandler;
use anyhow::Result;
use clap::Parser;
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Aerolist - edit, export and print aviation-style checklists via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file of checklists to import at startup
    file: Option<String>,

    /// Directory that relative export and import paths resolve against
    #[arg(long, default_value = ".")]
    export_dir: PathBuf,

    /// Start with no checklists instead of the default pre-flight checklist
    #[arg(long)]
    empty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries MCP frames, so logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();

    let args = Args::parse();
    let handler = ChecklistServerHandler::open(args.file.as_deref(), &args.export_dir, !args.empty)?;
    tracing::info!(export_dir = %args.export_dir.display(), "starting checklist server on stdio");
    serve_stdio(handler).await?;
    Ok(())
}
