//! `fshelf show`: full detail of one workflow.

use anyhow::{bail, Result};
use console::style;

use crate::state::AppState;

pub fn show_workflow(state: &AppState, id: &str, json: bool) -> Result<()> {
    let Some(item) = state.catalog.get(id) else {
        bail!("Workflow '{id}' not found. List ids with: fshelf list --layout list");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
        return Ok(());
    }

    let field = |label: &str, value: &str| {
        let value = if value.is_empty() { "-" } else { value };
        println!("  {}  {}", style(format!("{label:<10}")).bold(), value);
    };

    println!();
    println!("  {}", style(&item.title).cyan().bold());
    println!("  {}", style(&item.description).dim());
    println!();
    field("ID:", &item.id);
    field("Platform:", &item.platform);
    field("Tags:", &item.tags.join(", "));
    field("Price:", &item.price.display().unwrap_or_default());
    field("Docs:", &item.doc_path);
    field(&format!("{}:", item.acquire_label()), &item.download_url);
    field("Image:", &item.image_url);
    if item.price.is_malformed() {
        println!();
        println!(
            "  {} price '{}' is not \"Free\" or a number",
            style("!").yellow().bold(),
            item.price.as_raw()
        );
    }
    println!();

    Ok(())
}
