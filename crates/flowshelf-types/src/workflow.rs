use serde::{Deserialize, Serialize};

use crate::price::Price;

/// A single entry in the workflow catalog.
///
/// Records are supplied once by the catalog source and never mutated; every
/// filtered or sorted view is derived from them. Field names serialize in
/// camelCase so a content collection exported by the documentation site can
/// be read as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowItem {
    /// Stable identifier, unique within the catalog (e.g. "n8n-social").
    pub id: String,
    pub title: String,
    pub description: String,
    /// Source tool the workflow targets (e.g. "n8n", "Zapier").
    pub platform: String,
    /// Categorical labels. Order is the order shown on the card.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "Price::missing")]
    pub price: Price,
    /// Link to the workflow's documentation page.
    #[serde(default)]
    pub doc_path: String,
    /// Link to the downloadable workflow artifact.
    #[serde(default, alias = "jsonUrl")]
    pub download_url: String,
    #[serde(default)]
    pub image_url: String,
}

impl WorkflowItem {
    /// Whether the item carries `tag` (exact, case-sensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Label of the primary action on a card: `Download` for free workflows,
    /// `Buy` otherwise.
    pub fn acquire_label(&self) -> &'static str {
        if self.price.is_free() { "Download" } else { "Buy" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_camel_case_fields() {
        let json = r#"{
            "id": "zapier-invoice",
            "title": "Invoice Generator",
            "description": "Create invoices.",
            "platform": "Zapier",
            "tags": ["Finance", "CRM"],
            "price": "Free",
            "docPath": "/docs/workflows/zapier/invoice-generator",
            "downloadUrl": "/workflows/zapier/invoice-generator.json",
            "imageUrl": "https://example.com/invoice.png"
        }"#;
        let item: WorkflowItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "zapier-invoice");
        assert_eq!(item.doc_path, "/docs/workflows/zapier/invoice-generator");
        assert_eq!(item.download_url, "/workflows/zapier/invoice-generator.json");
        assert!(item.price.is_free());
        assert!(item.has_tag("CRM"));
        assert!(!item.has_tag("crm"));
    }

    #[test]
    fn json_url_is_accepted_as_download_url() {
        let json = r#"{
            "id": "a", "title": "A", "description": "", "platform": "n8n",
            "jsonUrl": "/workflows/a.json"
        }"#;
        let item: WorkflowItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.download_url, "/workflows/a.json");
        assert!(item.tags.is_empty());
        assert!(item.image_url.is_empty());
    }

    #[test]
    fn acquire_label_follows_price() {
        let mut item: WorkflowItem = serde_json::from_str(
            r#"{"id": "a", "title": "A", "description": "", "platform": "n8n", "price": "Free"}"#,
        )
        .unwrap();
        assert_eq!(item.acquire_label(), "Download");

        item.price = Price::parse("9.99");
        assert_eq!(item.acquire_label(), "Buy");
    }

    #[test]
    fn absent_price_is_hidden_and_flagged() {
        let item: WorkflowItem = serde_json::from_str(
            r#"{"id": "a", "title": "A", "description": "", "platform": "n8n"}"#,
        )
        .unwrap();
        assert!(item.price.is_malformed());
        assert_eq!(item.price.display(), None);
        assert_eq!(item.acquire_label(), "Buy");
    }
}
