//! Catalog store.
//!
//! The catalog is the immutable, ordered list of workflow records. It is
//! assembled once from a catalog source, validated, and then only ever read.

use std::collections::HashSet;

use flowshelf_types::error::{CatalogError, IntegrityIssue};
use flowshelf_types::price::Price;
use flowshelf_types::workflow::WorkflowItem;

/// An immutable, validated, ordered collection of workflow items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<WorkflowItem>,
}

impl Catalog {
    /// Assemble a catalog from records in source order.
    ///
    /// Rejects empty ids, duplicate ids and blank tags. Malformed prices are
    /// accepted and reported through [`Catalog::integrity_issues`].
    pub fn new(items: Vec<WorkflowItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if item.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
            if item.tags.iter().any(|t| t.trim().is_empty()) {
                return Err(CatalogError::EmptyTag { id: item.id.clone() });
            }
        }

        let catalog = Self { items };
        for issue in catalog.integrity_issues() {
            tracing::warn!(%issue, "Catalog data problem");
        }
        tracing::debug!(items = catalog.len(), "Catalog assembled");
        Ok(catalog)
    }

    /// A catalog with no items. Renders the empty state.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in catalog used when no source is configured.
    pub fn sample() -> Self {
        Self {
            items: sample_items(),
        }
    }

    pub fn items(&self) -> &[WorkflowItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look an item up by id.
    pub fn get(&self, id: &str) -> Option<&WorkflowItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Distinct platforms in first-seen catalog order.
    pub fn platforms(&self) -> Vec<&str> {
        first_seen(self.items.iter().map(|item| item.platform.as_str()))
    }

    /// Distinct tags in first-seen catalog order.
    pub fn tags(&self) -> Vec<&str> {
        first_seen(
            self.items
                .iter()
                .flat_map(|item| item.tags.iter().map(String::as_str)),
        )
    }

    /// Each platform with the number of items targeting it.
    pub fn platform_counts(&self) -> Vec<(&str, usize)> {
        self.platforms()
            .into_iter()
            .map(|p| (p, self.items.iter().filter(|i| i.platform == p).count()))
            .collect()
    }

    /// Each tag with the number of items carrying it.
    pub fn tag_counts(&self) -> Vec<(&str, usize)> {
        self.tags()
            .into_iter()
            .map(|t| (t, self.items.iter().filter(|i| i.has_tag(t)).count()))
            .collect()
    }

    /// Non-fatal data problems, in catalog order.
    pub fn integrity_issues(&self) -> Vec<IntegrityIssue> {
        self.items
            .iter()
            .filter_map(|item| match &item.price {
                Price::Malformed(raw) => Some(IntegrityIssue::MalformedPrice {
                    id: item.id.clone(),
                    raw: raw.clone(),
                }),
                _ => None,
            })
            .collect()
    }
}

fn first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}

fn sample_items() -> Vec<WorkflowItem> {
    vec![
        WorkflowItem {
            id: "n8n-social".to_string(),
            title: "Social Media Content Calendar".to_string(),
            description: "Schedule and post content across multiple social media platforms from a single spreadsheet.".to_string(),
            platform: "n8n".to_string(),
            tags: vec![
                "Social Media".to_string(),
                "Productivity".to_string(),
                "Google Sheets".to_string(),
            ],
            price: Price::Free,
            doc_path: "/docs/workflows/n8n/social-media-calendar".to_string(),
            download_url: "/workflows/n8n/social-media-calendar.json".to_string(),
            image_url: "https://t4.ftcdn.net/jpg/05/18/56/43/240_F_518564320_mq70LbrtjXCvmxjjN5FCXWKzlMDOtp79.jpg".to_string(),
        },
        WorkflowItem {
            id: "zapier-invoice".to_string(),
            title: "Invoice Generator".to_string(),
            description: "Create professional invoices automatically when new clients are added to your CRM.".to_string(),
            platform: "Zapier".to_string(),
            tags: vec![
                "Finance".to_string(),
                "CRM".to_string(),
                "Automation".to_string(),
            ],
            price: Price::Free,
            doc_path: "/docs/workflows/zapier/invoice-generator".to_string(),
            download_url: "/workflows/zapier/invoice-generator.json".to_string(),
            image_url: "https://source.unsplash.com/featured/600x300?invoice".to_string(),
        },
        WorkflowItem {
            id: "n8n-backup".to_string(),
            title: "Automated Data Backup".to_string(),
            description: "Securely backup important files from multiple sources to cloud storage daily.".to_string(),
            platform: "n8n".to_string(),
            tags: vec![
                "Backup".to_string(),
                "Cloud Storage".to_string(),
                "Data Management".to_string(),
            ],
            price: Price::Free,
            doc_path: "/docs/workflows/n8n/automated-data-backup".to_string(),
            download_url: "/workflows/n8n/automated-data-backup.json".to_string(),
            image_url: "https://source.unsplash.com/featured/600x300?data+backup".to_string(),
        },
    ]
}
