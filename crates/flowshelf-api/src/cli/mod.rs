//! CLI command definitions and dispatch for the `fshelf` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod browser;
pub mod check;
pub mod facets;
pub mod list;
pub mod render;
pub mod show;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use flowshelf_types::view::LayoutMode;

/// Browse the workflow catalog.
#[derive(Parser)]
#[command(name = "fshelf", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Only log errors (hides warnings such as skipped docs). Command output
    /// is unaffected.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Catalog source: a .json/.toml/.yaml file or a docs directory.
    #[arg(long, global = true, env = "FLOWSHELF_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Path to config.toml (default: ~/.flowshelf/config.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List workflows matching the given filters.
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show every detail of one workflow.
    Show {
        /// Workflow id (e.g. n8n-social).
        id: String,
    },

    /// List platforms, tags and sort options with item counts.
    Facets,

    /// Report catalog data problems. Exits non-zero if any are found.
    Check,

    /// Interactive catalog browser.
    Browse,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Keep only this platform (exact, case-sensitive). "all" disables.
    #[arg(long)]
    pub platform: Option<String>,

    /// Require this tag. Repeat to require several (all must match).
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Case-insensitive text search over title, description and tags.
    #[arg(long, short)]
    pub search: Option<String>,

    /// Sort key (titleAsc, titleDesc, priceAsc, priceDesc, platform).
    #[arg(long)]
    pub sort: Option<String>,

    /// Layout (grid, list).
    #[arg(long)]
    pub layout: Option<LayoutMode>,

    /// Cards per row in grid layout.
    #[arg(long)]
    pub columns: Option<u16>,
}
