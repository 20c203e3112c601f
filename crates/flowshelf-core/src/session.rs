//! Browsing session.
//!
//! A `BrowserSession` owns the catalog, the [`ViewState`] and the derived
//! visible list. Every change to a predicate or the sort key re-derives the
//! visible list from the full catalog; a layout change never does.

use flowshelf_types::view::{LayoutMode, PlatformFilter, SortKey, ViewState};
use flowshelf_types::workflow::WorkflowItem;

use crate::catalog::Catalog;
use crate::filter::filter_indices;
use crate::sort::sort_indices;

/// The visible list derived from the catalog and the view state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DerivedView {
    /// Nothing derived yet.
    #[default]
    Pending,
    /// Catalog positions of the visible items, in display order. May be
    /// empty.
    Ready(Vec<usize>),
}

impl DerivedView {
    pub fn indices(&self) -> Option<&[usize]> {
        match self {
            DerivedView::Pending => None,
            DerivedView::Ready(indices) => Some(indices),
        }
    }
}

/// Filter, then sort. Always from the full catalog.
pub fn derive(catalog: &Catalog, state: &ViewState) -> Vec<usize> {
    let mut indices = filter_indices(catalog, state);
    sort_indices(catalog, &mut indices, state.sort_key);
    indices
}

/// A single user's browsing session over one catalog.
#[derive(Debug, Clone)]
pub struct BrowserSession {
    catalog: Catalog,
    state: ViewState,
    view: DerivedView,
}

impl BrowserSession {
    /// Start a session. The view stays [`DerivedView::Pending`] until the
    /// first [`refresh`](Self::refresh) or state change.
    pub fn new(catalog: Catalog, state: ViewState) -> Self {
        Self {
            catalog,
            state,
            view: DerivedView::Pending,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn view(&self) -> &DerivedView {
        &self.view
    }

    /// Re-derive the visible list from scratch.
    pub fn refresh(&mut self) {
        let indices = derive(&self.catalog, &self.state);
        tracing::debug!(
            visible = indices.len(),
            total = self.catalog.len(),
            platform = %self.state.selected_platform,
            tags = self.state.selected_tags.len(),
            sort = %self.state.sort_key,
            "Derived workflow view"
        );
        self.view = DerivedView::Ready(indices);
    }

    pub fn select_platform(&mut self, platform: impl Into<PlatformFilter>) {
        self.state.selected_platform = platform.into();
        self.refresh();
    }

    /// Flip `tag` in the selected set. Returns whether it is now selected.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let selected = self.state.toggle_tag(tag);
        self.refresh();
        selected
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
        self.refresh();
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.state.sort_key = key;
        self.refresh();
    }

    /// Select a comparator by its key string; unknown keys fall back to the
    /// default comparator.
    pub fn set_sort_key(&mut self, key: &str) {
        self.set_sort(SortKey::from_key_lossy(key));
    }

    /// Change layout. The visible list is left untouched.
    pub fn set_layout(&mut self, layout: LayoutMode) {
        self.state.layout = layout;
    }

    pub fn toggle_layout(&mut self) -> LayoutMode {
        self.state.layout = self.state.layout.toggled();
        self.state.layout
    }

    /// Drop the platform, tag and search predicates.
    pub fn clear_filters(&mut self) {
        self.state.clear_filters();
        self.refresh();
    }

    /// Visible items in display order, or `None` before the first
    /// derivation.
    pub fn visible(&self) -> Option<Vec<&WorkflowItem>> {
        let items = self.catalog.items();
        self.view
            .indices()
            .map(|indices| indices.iter().map(|&i| &items[i]).collect())
    }

    pub fn visible_count(&self) -> Option<usize> {
        self.view.indices().map(<[usize]>::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{catalog_of, workflow};

    fn visible_ids(session: &BrowserSession) -> Vec<String> {
        session
            .visible()
            .unwrap()
            .into_iter()
            .map(|item| item.id.clone())
            .collect()
    }

    fn sample_session() -> BrowserSession {
        let mut session = BrowserSession::new(Catalog::sample(), ViewState::default());
        session.refresh();
        session
    }

    #[test]
    fn pending_is_distinct_from_empty() {
        let mut session = BrowserSession::new(Catalog::empty(), ViewState::default());
        assert_eq!(session.view(), &DerivedView::Pending);
        assert!(session.visible().is_none());

        session.refresh();
        assert_eq!(session.view(), &DerivedView::Ready(Vec::new()));
        assert_eq!(session.visible_count(), Some(0));
    }

    #[test]
    fn default_state_shows_catalog_sorted_by_title() {
        let session = sample_session();
        assert_eq!(
            visible_ids(&session),
            vec!["n8n-backup", "zapier-invoice", "n8n-social"]
        );
    }

    #[test]
    fn platform_then_title_desc() {
        let mut session = sample_session();
        session.select_platform("n8n");
        session.set_sort(SortKey::TitleDesc);
        // "Social Media Content Calendar" > "Automated Data Backup"
        assert_eq!(visible_ids(&session), vec!["n8n-social", "n8n-backup"]);
    }

    #[test]
    fn state_changes_rederive() {
        let mut session = sample_session();
        session.set_search("invoice");
        assert_eq!(visible_ids(&session), vec!["zapier-invoice"]);

        session.set_search("");
        assert_eq!(session.visible_count(), Some(3));

        session.toggle_tag("Backup");
        assert_eq!(visible_ids(&session), vec!["n8n-backup"]);

        session.toggle_tag("Backup");
        assert_eq!(session.visible_count(), Some(3));
    }

    #[test]
    fn any_change_derives_from_pending() {
        let mut session = BrowserSession::new(Catalog::sample(), ViewState::default());
        session.select_platform("Zapier");
        assert_eq!(visible_ids(&session), vec!["zapier-invoice"]);
    }

    #[test]
    fn layout_switch_leaves_view_untouched() {
        let mut session = sample_session();
        session.select_platform("n8n");
        let before = session.view().clone();

        session.set_layout(LayoutMode::List);
        assert_eq!(session.view(), &before);
        assert_eq!(session.toggle_layout(), LayoutMode::Grid);
        assert_eq!(session.view(), &before);
        assert_eq!(
            session.state().selected_platform,
            PlatformFilter::Only("n8n".to_string())
        );
    }

    #[test]
    fn layout_switch_does_not_derive_a_pending_view() {
        let mut session = BrowserSession::new(Catalog::sample(), ViewState::default());
        session.set_layout(LayoutMode::List);
        assert_eq!(session.view(), &DerivedView::Pending);
    }

    #[test]
    fn unknown_sort_key_uses_default_comparator() {
        let mut session = sample_session();
        session.set_sort(SortKey::TitleDesc);
        session.set_sort_key("mostPopular");
        assert_eq!(session.state().sort_key, SortKey::TitleAsc);
        assert_eq!(
            visible_ids(&session),
            vec!["n8n-backup", "zapier-invoice", "n8n-social"]
        );
    }

    #[test]
    fn clear_filters_restores_full_catalog() {
        let mut session = sample_session();
        session.select_platform("Zapier");
        session.toggle_tag("Finance");
        session.set_search("crm");
        assert_eq!(session.visible_count(), Some(1));

        session.clear_filters();
        assert_eq!(session.visible_count(), Some(3));
    }

    #[test]
    fn sort_is_applied_after_filter_and_stays_stable() {
        let catalog = catalog_of(vec![
            workflow("b", "Same", "n8n", &["x"], "Free"),
            workflow("skip", "Aaa", "Make", &["x"], "Free"),
            workflow("a", "Same", "n8n", &["x"], "Free"),
        ]);
        let mut session = BrowserSession::new(catalog, ViewState::default());
        session.select_platform("n8n");
        assert_eq!(visible_ids(&session), vec!["b", "a"]);
        session.set_sort(SortKey::TitleDesc);
        assert_eq!(visible_ids(&session), vec!["b", "a"]);
    }

    #[test]
    fn catalog_is_never_mutated() {
        let mut session = sample_session();
        let original = Catalog::sample();
        session.set_sort(SortKey::TitleDesc);
        session.toggle_tag("Finance");
        assert_eq!(session.catalog(), &original);
    }
}
