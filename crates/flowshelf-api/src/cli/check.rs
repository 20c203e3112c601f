//! `fshelf check`: catalog integrity report.

use anyhow::{bail, Result};
use console::style;

use crate::state::AppState;

pub fn check_catalog(state: &AppState, json: bool) -> Result<()> {
    let issues = state.catalog.integrity_issues();

    if json {
        let report = serde_json::json!({
            "source": state.source.describe(),
            "workflows": state.catalog.len(),
            "issues": issues.iter().map(ToString::to_string).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!();
        println!(
            "  Checked {} workflows from {}",
            style(state.catalog.len()).bold(),
            style(state.source.describe()).dim()
        );
        println!();
        if issues.is_empty() {
            println!("  {} No problems found", style("✓").green().bold());
        }
        for issue in &issues {
            println!("  {} {issue}", style("✗").red().bold());
        }
        println!();
    }

    if !issues.is_empty() {
        bail!("{} catalog problem(s) found", issues.len());
    }
    Ok(())
}
