use flowshelf_types::price::Price;
use flowshelf_types::workflow::WorkflowItem;

use crate::catalog::Catalog;

/// Build a catalog item with placeholder links.
pub fn workflow(id: &str, title: &str, platform: &str, tags: &[&str], price: &str) -> WorkflowItem {
    WorkflowItem {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} workflow."),
        platform: platform.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        price: Price::parse(price),
        doc_path: format!("/docs/workflows/{id}"),
        download_url: format!("/workflows/{id}.json"),
        image_url: String::new(),
    }
}

pub fn catalog_of(items: Vec<WorkflowItem>) -> Catalog {
    Catalog::new(items).unwrap()
}
