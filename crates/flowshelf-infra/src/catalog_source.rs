//! Catalog sources.
//!
//! The catalog is supplied by an external content collection. It may arrive
//! as a single data file (JSON, TOML or YAML) or as a directory of workflow
//! doc pages whose frontmatter carries the item fields. Either way it is read
//! once, validated, and handed to the core as an immutable [`Catalog`].

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use flowshelf_core::catalog::Catalog;
use flowshelf_core::frontmatter::{parse_workflow_doc, DocLocation};
use flowshelf_types::error::CatalogError;
use flowshelf_types::workflow::WorkflowItem;

/// Site path under which doc pages are served.
const DOCS_URL_PREFIX: &str = "/docs";

/// Extensions recognized as doc pages when scanning a directory.
const DOC_EXTENSIONS: [&str; 2] = ["md", "mdx"];

#[derive(Debug, Error)]
pub enum CatalogSourceError {
    #[error("catalog source not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("unsupported catalog format: {} (expected .json, .toml, .yaml, .yml or a directory)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The built-in three-item sample catalog.
    Sample,
    /// A single JSON, TOML or YAML data file.
    File(PathBuf),
    /// A docs directory scanned for workflow pages.
    Directory(PathBuf),
    /// A configured path that does not exist. Loads as an empty catalog.
    Missing(PathBuf),
}

impl CatalogSource {
    /// Classify a path as a file or directory source.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, CatalogSourceError> {
        match Self::from_path_or_missing(path) {
            CatalogSource::Missing(path) => Err(CatalogSourceError::NotFound(path)),
            source => Ok(source),
        }
    }

    /// Like [`from_path`](Self::from_path), but a path that does not exist
    /// becomes [`CatalogSource::Missing`] instead of an error.
    pub fn from_path_or_missing(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.is_dir() {
            CatalogSource::Directory(path)
        } else if path.is_file() {
            CatalogSource::File(path)
        } else {
            CatalogSource::Missing(path)
        }
    }

    /// Short description for status output.
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Sample => "built-in sample catalog".to_string(),
            CatalogSource::File(path) => path.display().to_string(),
            CatalogSource::Directory(path) => format!("{}/ (workflow docs)", path.display()),
            CatalogSource::Missing(path) => format!("{} (not found)", path.display()),
        }
    }

    /// Read and validate the catalog.
    pub fn load(&self) -> Result<Catalog, CatalogSourceError> {
        let items = match self {
            CatalogSource::Sample => return Ok(Catalog::sample()),
            CatalogSource::File(path) => load_file(path)?,
            CatalogSource::Directory(root) => load_directory(root)?,
            CatalogSource::Missing(path) => {
                tracing::warn!(
                    path = %path.display(),
                    "Catalog source not found, showing an empty catalog"
                );
                return Ok(Catalog::empty());
            }
        };

        tracing::info!(source = %self.describe(), items = items.len(), "Loaded workflow catalog");
        Ok(Catalog::new(items)?)
    }
}

/// A data file holds either a bare list of items or a `workflows` list.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<WorkflowItem>),
    Wrapped { workflows: Vec<WorkflowItem> },
}

impl CatalogDocument {
    fn into_items(self) -> Vec<WorkflowItem> {
        match self {
            CatalogDocument::List(items) => items,
            CatalogDocument::Wrapped { workflows } => workflows,
        }
    }
}

/// TOML has no top-level arrays, so items always sit under `[[workflows]]`.
#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    workflows: Vec<WorkflowItem>,
}

fn read(path: &Path) -> Result<String, CatalogSourceError> {
    std::fs::read_to_string(path).map_err(|source| CatalogSourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_error(path: &Path, err: impl std::fmt::Display) -> CatalogSourceError {
    CatalogSourceError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

fn load_file(path: &Path) -> Result<Vec<WorkflowItem>, CatalogSourceError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "json" => {
            let content = read(path)?;
            serde_json::from_str::<CatalogDocument>(&content)
                .map(CatalogDocument::into_items)
                .map_err(|e| parse_error(path, e))
        }
        "yaml" | "yml" => {
            let content = read(path)?;
            serde_yaml_ng::from_str::<CatalogDocument>(&content)
                .map(CatalogDocument::into_items)
                .map_err(|e| parse_error(path, e))
        }
        "toml" => {
            let content = read(path)?;
            toml::from_str::<TomlCatalog>(&content)
                .map(|doc| doc.workflows)
                .map_err(|e| parse_error(path, e))
        }
        _ => Err(CatalogSourceError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Recursively collect doc pages below `dir`.
fn collect_doc_pages(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), CatalogSourceError> {
    let entries = std::fs::read_dir(dir).map_err(|source| CatalogSourceError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| CatalogSourceError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|source| CatalogSourceError::Io {
            path: path.clone(),
            source,
        })?;

        // Symlinked directories may loop back into the tree.
        if file_type.is_symlink() && path.is_dir() {
            tracing::debug!(path = %path.display(), "Skipping symlinked directory");
            continue;
        }
        if file_type.is_dir() {
            collect_doc_pages(&path, out)?;
            continue;
        }

        let is_doc = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| DOC_EXTENSIONS.contains(&e.to_lowercase().as_str()));
        if is_doc {
            out.push(path);
        }
    }

    Ok(())
}

/// Site path for a page: the docs prefix plus its path below the root,
/// without extension, always with forward slashes.
fn doc_location(root: &Path, page: &Path) -> DocLocation {
    let stem = page
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();

    let relative = page.strip_prefix(root).unwrap_or(page).with_extension("");
    let segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    DocLocation {
        stem,
        doc_path: format!("{DOCS_URL_PREFIX}/{}", segments.join("/")),
    }
}

/// Scan a docs directory for workflow pages.
///
/// Pages are visited in path order so the catalog order is stable. Pages that
/// fail to parse are skipped with a warning.
fn load_directory(root: &Path) -> Result<Vec<WorkflowItem>, CatalogSourceError> {
    let mut pages = Vec::new();
    collect_doc_pages(root, &mut pages)?;
    pages.sort();

    let mut items = Vec::new();
    for page in pages {
        let content = match std::fs::read_to_string(&page) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(
                    page = %page.display(),
                    error = %e,
                    "Skipping unreadable workflow doc"
                );
                continue;
            }
        };

        match parse_workflow_doc(&content, &doc_location(root, &page)) {
            Ok(Some(item)) => items.push(item),
            Ok(None) => {
                tracing::debug!(page = %page.display(), "Not a workflow doc");
            }
            Err(e) => {
                tracing::warn!(
                    page = %page.display(),
                    error = %e,
                    "Skipping corrupted workflow doc"
                );
            }
        }
    }

    Ok(items)
}
