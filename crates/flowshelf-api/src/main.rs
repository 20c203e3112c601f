//! Flowshelf CLI entry point.
//!
//! Binary name: `fshelf`
//!
//! Parses CLI arguments, loads config and the workflow catalog, then
//! dispatches to the appropriate command handler or starts the TUI browser.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,flowshelf_core=debug,flowshelf_infra=debug,fshelf=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "fshelf", &mut std::io::stdout());
        return Ok(());
    }

    // Load config and catalog
    let state = AppState::init(cli.catalog.clone(), cli.config.clone())?;
    tracing::debug!(
        source = %state.source.describe(),
        workflows = state.catalog.len(),
        "catalog loaded"
    );

    match cli.command {
        Commands::List(args) => {
            cli::list::list_workflows(&state, &args, cli.json)?;
        }

        Commands::Show { id } => {
            cli::show::show_workflow(&state, &id, cli.json)?;
        }

        Commands::Facets => {
            cli::facets::list_facets(&state, cli.json)?;
        }

        Commands::Check => {
            cli::check::check_catalog(&state, cli.json)?;
        }

        Commands::Browse => {
            let mut session = state.session(state.config.initial_view_state());
            session.refresh();
            cli::browser::run_browser(
                session,
                state.page_meta(),
                usize::from(state.config.effective_grid_columns()),
            )?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
