//! `fshelf facets`: what the filter controls offer.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use flowshelf_core::sort::SORT_REGISTRY;

use crate::state::AppState;

fn count_table(heading: &str, rows: &[(&str, usize)]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new(heading).fg(Color::White),
        Cell::new("Workflows").fg(Color::White),
    ]);
    for (value, count) in rows {
        table.add_row(vec![Cell::new(value).fg(Color::Cyan), Cell::new(count)]);
    }
    table
}

pub fn list_facets(state: &AppState, json: bool) -> Result<()> {
    let platforms = state.catalog.platform_counts();
    let tags = state.catalog.tag_counts();

    if json {
        let sort_options: Vec<_> = SORT_REGISTRY
            .iter()
            .map(|o| serde_json::json!({ "key": o.key, "label": o.label() }))
            .collect();
        let facets = serde_json::json!({
            "source": state.source.describe(),
            "total": state.catalog.len(),
            "platforms": platforms
                .iter()
                .map(|(p, n)| serde_json::json!({ "platform": p, "count": n }))
                .collect::<Vec<_>>(),
            "tags": tags
                .iter()
                .map(|(t, n)| serde_json::json!({ "tag": t, "count": n }))
                .collect::<Vec<_>>(),
            "sort_options": sort_options,
        });
        println!("{}", serde_json::to_string_pretty(&facets)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} workflows from {}",
        style(state.catalog.len()).bold(),
        style(state.source.describe()).dim()
    );
    println!();

    if state.catalog.is_empty() {
        println!("  {} The catalog is empty.", style("i").blue().bold());
        println!();
        return Ok(());
    }

    println!("{}", count_table("Platform", &platforms));
    println!();
    println!("{}", count_table("Tag", &tags));
    println!();
    println!("  {}", style("Sort options:").bold());
    for option in SORT_REGISTRY.iter() {
        println!("    {:<10} {}", option.key.key(), style(option.label()).dim());
    }
    println!();

    Ok(())
}
