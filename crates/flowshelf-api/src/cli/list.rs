//! `fshelf list`: one-shot filter, sort and render.

use anyhow::{Context, Result};
use console::style;

use flowshelf_core::present::page_view;
use flowshelf_types::config::{MAX_GRID_COLUMNS, MIN_GRID_COLUMNS};
use flowshelf_types::view::{PlatformFilter, SortKey, ViewState};

use super::ListArgs;
use super::render::results_table;
use crate::state::AppState;

/// Overlay command-line filters on the configured starting state.
pub fn view_state_from_args(base: ViewState, args: &ListArgs) -> ViewState {
    let mut state = base;
    if let Some(platform) = &args.platform {
        state.selected_platform = PlatformFilter::from(platform.as_str());
    }
    for tag in &args.tags {
        if !state.is_tag_selected(tag) {
            state.toggle_tag(tag);
        }
    }
    if let Some(query) = &args.search {
        state.search_query = query.clone();
    }
    if let Some(sort) = &args.sort {
        state.sort_key = SortKey::from_key_lossy(sort);
    }
    if let Some(layout) = args.layout {
        state.layout = layout;
    }
    state
}

/// List workflows as grid cards or list rows.
pub fn list_workflows(state: &AppState, args: &ListArgs, json: bool) -> Result<()> {
    let view = view_state_from_args(state.config.initial_view_state(), args);
    let mut session = state.session(view);
    session.refresh();

    let page = page_view(&session, state.page_meta()).context("Workflow view was not derived")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    println!();
    println!("  {}", style(&page.meta.title).cyan().bold());
    println!("  {}", style(page.tagline).dim());
    println!();
    println!(
        "  {}  {}  {}",
        style(&page.result_label).bold(),
        style(format!("sorted by {}", page.sort_key.label())).dim(),
        style(format!("({} layout)", page.layout)).dim()
    );
    println!();

    if let Some(message) = page.empty_message {
        println!("  {} {}", style("i").blue().bold(), message);
        println!();
        return Ok(());
    }

    let columns = args
        .columns
        .unwrap_or(state.config.grid_columns)
        .clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS);

    println!("{}", results_table(&page, usize::from(columns)));
    println!();

    Ok(())
}
