//! Presentation model.
//!
//! Turns a [`BrowserSession`] into render-ready views: the page header, the
//! filter controls, and one card per visible workflow. Renderers (terminal
//! table, TUI, JSON) only ever read these structs.

use serde::Serialize;

use flowshelf_types::config::BrowserConfig;
use flowshelf_types::view::{LayoutMode, SortKey, ALL_PLATFORMS};
use flowshelf_types::workflow::WorkflowItem;

use crate::session::BrowserSession;
use crate::sort::SORT_REGISTRY;

pub const TAGLINE: &str = "Find automations for your favorite tools.";

pub const NO_MATCHES_MESSAGE: &str =
    "No workflows match your filters. Try adjusting your search criteria.";

const ALL_PLATFORMS_LABEL: &str = "All Platforms";

/// Page title and description handed to the documentation host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl PageMeta {
    pub fn from_config(config: &BrowserConfig) -> Self {
        Self {
            title: config.page_title.clone(),
            description: config.page_description.clone(),
        }
    }
}

impl Default for PageMeta {
    fn default() -> Self {
        Self::from_config(&BrowserConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Open the workflow's documentation page.
    ViewDetails,
    /// Download (free) or buy the workflow artifact.
    Acquire,
    /// Inert "Add" button shown in list layout.
    Add,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardAction {
    pub kind: ActionKind,
    pub label: String,
    /// Link target, passed through unmodified. `None` for inert actions.
    pub href: Option<String>,
    /// Whether the link is a file download.
    pub download: bool,
}

/// Render-ready card for one workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub platform: String,
    pub description: String,
    pub image_url: String,
    /// Tag chips; grid layout only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// `Free` or `$<price>`; absent when the catalog left the price blank.
    pub price: Option<String>,
    pub actions: Vec<CardAction>,
}

fn view_details(item: &WorkflowItem, label: &str) -> CardAction {
    CardAction {
        kind: ActionKind::ViewDetails,
        label: label.to_string(),
        href: Some(item.doc_path.clone()),
        download: false,
    }
}

fn acquire(item: &WorkflowItem) -> CardAction {
    CardAction {
        kind: ActionKind::Acquire,
        label: item.acquire_label().to_string(),
        href: Some(item.download_url.clone()),
        download: true,
    }
}

/// Build the card for `item` in `layout`.
pub fn card_view(item: &WorkflowItem, layout: LayoutMode) -> CardView {
    let (tags, actions) = match layout {
        LayoutMode::Grid => (
            Some(item.tags.clone()),
            vec![view_details(item, "View Details"), acquire(item)],
        ),
        LayoutMode::List => (
            None,
            vec![
                CardAction {
                    kind: ActionKind::Add,
                    label: "Add".to_string(),
                    href: None,
                    download: false,
                },
                acquire(item),
                view_details(item, "View"),
            ],
        ),
    };

    CardView {
        id: item.id.clone(),
        title: item.title.clone(),
        platform: item.platform.clone(),
        description: item.description.clone(),
        image_url: item.image_url.clone(),
        tags,
        price: item.price.display(),
        actions,
    }
}

/// "1 workflow", "3 workflows".
pub fn result_count_label(count: usize) -> String {
    if count == 1 {
        "1 workflow".to_string()
    } else {
        format!("{count} workflows")
    }
}

/// Everything needed to render the results area of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub meta: PageMeta,
    pub tagline: &'static str,
    pub layout: LayoutMode,
    pub sort_key: SortKey,
    pub result_count: usize,
    pub result_label: String,
    pub cards: Vec<CardView>,
    /// Set when nothing matched.
    pub empty_message: Option<&'static str>,
}

/// Build the page for the session's current view. `None` while the view is
/// still pending.
pub fn page_view(session: &BrowserSession, meta: PageMeta) -> Option<PageView> {
    let visible = session.visible()?;
    let layout = session.state().layout;
    let cards: Vec<CardView> = visible
        .into_iter()
        .map(|item| card_view(item, layout))
        .collect();

    Some(PageView {
        meta,
        tagline: TAGLINE,
        layout,
        sort_key: session.state().sort_key,
        result_count: cards.len(),
        result_label: result_count_label(cards.len()),
        empty_message: cards.is_empty().then_some(NO_MATCHES_MESSAGE),
        cards,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagChip {
    pub tag: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortChoice {
    pub key: SortKey,
    pub label: &'static str,
    pub selected: bool,
}

/// The filter bar: search box, platform dropdown, tag buttons, sort select
/// and layout toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Controls {
    pub search_query: String,
    pub platforms: Vec<PlatformOption>,
    pub tags: Vec<TagChip>,
    pub sort_options: Vec<SortChoice>,
    pub layout: LayoutMode,
}

pub fn controls(session: &BrowserSession) -> Controls {
    let state = session.state();
    let current_platform = state.selected_platform.as_value();

    let mut platforms = vec![PlatformOption {
        value: ALL_PLATFORMS.to_string(),
        label: ALL_PLATFORMS_LABEL.to_string(),
        selected: state.selected_platform.is_all(),
    }];
    platforms.extend(
        session
            .catalog()
            .platforms()
            .into_iter()
            .map(|platform| PlatformOption {
                value: platform.to_string(),
                label: platform.to_string(),
                selected: !state.selected_platform.is_all() && platform == current_platform,
            }),
    );

    let tags = session
        .catalog()
        .tags()
        .into_iter()
        .map(|tag| TagChip {
            tag: tag.to_string(),
            selected: state.is_tag_selected(tag),
        })
        .collect();

    let sort_options = SORT_REGISTRY
        .iter()
        .map(|option| SortChoice {
            key: option.key,
            label: option.label(),
            selected: option.key == state.sort_key,
        })
        .collect();

    Controls {
        search_query: state.search_query.clone(),
        platforms,
        tags,
        sort_options,
        layout: state.layout,
    }
}
