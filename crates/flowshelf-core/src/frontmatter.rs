//! Workflow doc frontmatter parsing.
//!
//! The documentation site keeps one markdown page per workflow. Each page
//! starts with YAML frontmatter delimited by `---` that carries the catalog
//! fields; the markdown body is the page content and is ignored here.

use anyhow::{bail, Context};
use serde::Deserialize;

use flowshelf_types::price::Price;
use flowshelf_types::workflow::WorkflowItem;

/// Catalog fields as written in a doc page. `id` and the links are optional;
/// the loader supplies defaults derived from the file location.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkflowFrontmatter {
    id: Option<String>,
    title: String,
    #[serde(default)]
    description: String,
    platform: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default = "Price::missing")]
    price: Price,
    doc_path: Option<String>,
    #[serde(alias = "jsonUrl")]
    download_url: Option<String>,
    #[serde(default)]
    image_url: String,
}

/// Where a doc page lives, used to fill in fields the frontmatter omits.
#[derive(Debug, Clone)]
pub struct DocLocation {
    /// File name without extension (e.g. "social-media-calendar").
    pub stem: String,
    /// Site path of the page (e.g. "/docs/workflows/n8n/social-media-calendar").
    pub doc_path: String,
}

/// Split a markdown page into YAML frontmatter and body.
///
/// Returns `Ok(None)` if the page has no frontmatter at all, and an error if
/// the opening delimiter is never closed.
pub fn extract_frontmatter(content: &str) -> anyhow::Result<Option<(&str, &str)>> {
    let Some(after_open) = content.strip_prefix("---") else {
        return Ok(None);
    };
    let after_open = after_open
        .strip_prefix("\r\n")
        .or_else(|| after_open.strip_prefix('\n'))
        .unwrap_or(after_open);

    // Empty frontmatter: the closing delimiter follows the opening one.
    let (yaml_str, remainder) = if let Some(rest) = after_open.strip_prefix("---") {
        ("", rest)
    } else {
        let Some(closing_pos) = after_open.find("\n---") else {
            bail!("missing closing frontmatter delimiter '---'");
        };
        (&after_open[..closing_pos], &after_open[closing_pos + 4..])
    };
    let body_str = remainder.trim_start_matches(['\r', '\n']);

    Ok(Some((yaml_str, body_str)))
}

/// Default id for a page without one: `<platform>-<stem>`, lowercased, with
/// whitespace replaced by hyphens.
fn default_id(platform: &str, stem: &str) -> String {
    format!("{platform}-{stem}")
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Parse a workflow doc page into a catalog item.
///
/// Pages without frontmatter, or whose frontmatter has no `platform` key, are
/// ordinary docs rather than catalog entries and yield `Ok(None)`.
pub fn parse_workflow_doc(
    content: &str,
    location: &DocLocation,
) -> anyhow::Result<Option<WorkflowItem>> {
    let Some((yaml_str, _body)) = extract_frontmatter(content)? else {
        return Ok(None);
    };

    if yaml_str.trim().is_empty() {
        return Ok(None);
    }

    let value: serde_yaml_ng::Value =
        serde_yaml_ng::from_str(yaml_str).context("failed to parse frontmatter YAML")?;
    if value.get("platform").is_none() {
        return Ok(None);
    }

    let fm: WorkflowFrontmatter =
        serde_yaml_ng::from_value(value).context("invalid workflow frontmatter")?;

    let id = fm
        .id
        .unwrap_or_else(|| default_id(&fm.platform, &location.stem));

    Ok(Some(WorkflowItem {
        id,
        title: fm.title,
        description: fm.description,
        platform: fm.platform,
        tags: fm.tags,
        price: fm.price,
        doc_path: fm.doc_path.unwrap_or_else(|| location.doc_path.clone()),
        download_url: fm.download_url.unwrap_or_default(),
        image_url: fm.image_url,
    }))
}
