//! Filter engine.
//!
//! Three independent predicates, conjoined when active: platform, tag set
//! (every selected tag must be present) and free-text search. With no
//! predicate active the result is the whole catalog in catalog order.

use flowshelf_types::view::{PlatformFilter, ViewState};
use flowshelf_types::workflow::WorkflowItem;

use crate::catalog::Catalog;

/// Platform predicate. `All` keeps everything; otherwise exact,
/// case-sensitive equality.
pub fn matches_platform(item: &WorkflowItem, filter: &PlatformFilter) -> bool {
    match filter {
        PlatformFilter::All => true,
        PlatformFilter::Only(platform) => item.platform == *platform,
    }
}

/// Tag predicate. An item matches only if it carries every selected tag.
pub fn matches_tags(item: &WorkflowItem, selected: &[String]) -> bool {
    selected.iter().all(|tag| item.has_tag(tag))
}

/// Search predicate. `needle` must already be trimmed and lowercased (see
/// [`ViewState::search_needle`]); `None` keeps everything.
pub fn matches_search(item: &WorkflowItem, needle: Option<&str>) -> bool {
    let Some(needle) = needle else {
        return true;
    };

    item.title.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
        || item.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// Positions of the catalog items that satisfy every active predicate, in
/// catalog order.
pub fn filter_indices(catalog: &Catalog, state: &ViewState) -> Vec<usize> {
    let needle = state.search_needle();

    catalog
        .items()
        .iter()
        .enumerate()
        .filter(|(_, item)| {
            matches_platform(item, &state.selected_platform)
                && matches_tags(item, &state.selected_tags)
                && matches_search(item, needle.as_deref())
        })
        .map(|(i, _)| i)
        .collect()
}
