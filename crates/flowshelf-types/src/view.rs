//! Session-local view state.
//!
//! `ViewState` holds every user-controlled parameter that drives the visible
//! workflow list: platform, tag set, search text, sort key and layout. It is
//! initialized to defaults, mutated synchronously by interaction handlers,
//! and never persisted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sentinel platform value meaning "no platform filter".
pub const ALL_PLATFORMS: &str = "all";

/// Platform predicate selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlatformFilter {
    #[default]
    All,
    /// Keep only items whose platform equals this value (case-sensitive).
    Only(String),
}

impl PlatformFilter {
    pub fn is_all(&self) -> bool {
        matches!(self, PlatformFilter::All)
    }

    /// The value used in controls: `all` or the platform name.
    pub fn as_value(&self) -> &str {
        match self {
            PlatformFilter::All => ALL_PLATFORMS,
            PlatformFilter::Only(platform) => platform,
        }
    }
}

impl From<String> for PlatformFilter {
    fn from(value: String) -> Self {
        if value == ALL_PLATFORMS {
            PlatformFilter::All
        } else {
            PlatformFilter::Only(value)
        }
    }
}

impl From<&str> for PlatformFilter {
    fn from(value: &str) -> Self {
        PlatformFilter::from(value.to_string())
    }
}

impl From<PlatformFilter> for String {
    fn from(filter: PlatformFilter) -> Self {
        match filter {
            PlatformFilter::All => ALL_PLATFORMS.to_string(),
            PlatformFilter::Only(platform) => platform,
        }
    }
}

impl fmt::Display for PlatformFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

/// How the visible workflows are laid out. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Grid,
    List,
}

impl LayoutMode {
    /// The other layout.
    pub fn toggled(self) -> Self {
        match self {
            LayoutMode::Grid => LayoutMode::List,
            LayoutMode::List => LayoutMode::Grid,
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutMode::Grid => write!(f, "grid"),
            LayoutMode::List => write!(f, "list"),
        }
    }
}

impl FromStr for LayoutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grid" => Ok(LayoutMode::Grid),
            "list" => Ok(LayoutMode::List),
            other => Err(format!("invalid layout: '{other}'")),
        }
    }
}

/// Named comparator selection. The comparators themselves live in the
/// sort registry of `flowshelf-core`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    #[default]
    TitleAsc,
    TitleDesc,
    PriceAsc,
    PriceDesc,
    Platform,
}

impl SortKey {
    /// Every key, in registry order. The first entry is the default.
    pub const ALL: [SortKey; 5] = [
        SortKey::TitleAsc,
        SortKey::TitleDesc,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::Platform,
    ];

    /// Stable key string (`titleAsc`, `priceDesc`, ...).
    pub fn key(self) -> &'static str {
        match self {
            SortKey::TitleAsc => "titleAsc",
            SortKey::TitleDesc => "titleDesc",
            SortKey::PriceAsc => "priceAsc",
            SortKey::PriceDesc => "priceDesc",
            SortKey::Platform => "platform",
        }
    }

    /// Human-readable label for sort controls.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::TitleAsc => "Title (A-Z)",
            SortKey::TitleDesc => "Title (Z-A)",
            SortKey::PriceAsc => "Price (Low to High)",
            SortKey::PriceDesc => "Price (High to Low)",
            SortKey::Platform => "Platform",
        }
    }

    /// Resolve a key string, failing closed to the default comparator.
    pub fn from_key_lossy(key: &str) -> Self {
        key.parse().unwrap_or_else(|_| {
            tracing::warn!(key, "Unknown sort key, falling back to {}", SortKey::default().key());
            SortKey::default()
        })
    }

    /// The key after this one in registry order, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.key() == s)
            .ok_or_else(|| format!("invalid sort key: '{s}'"))
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        SortKey::from_key_lossy(&value)
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.key().to_string()
    }
}

/// The transient, user-controlled parameters of a browsing session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub selected_platform: PlatformFilter,
    /// Tags that must all be present on an item. Insertion-ordered, no
    /// duplicates.
    pub selected_tags: Vec<String>,
    pub search_query: String,
    pub layout: LayoutMode,
    pub sort_key: SortKey,
}

impl ViewState {
    /// Flip membership of `tag` in the selected set.
    ///
    /// Returns `true` when the tag is selected after the call.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if let Some(pos) = self.selected_tags.iter().position(|t| t == tag) {
            self.selected_tags.remove(pos);
            false
        } else {
            self.selected_tags.push(tag.to_string());
            true
        }
    }

    pub fn is_tag_selected(&self, tag: &str) -> bool {
        self.selected_tags.iter().any(|t| t == tag)
    }

    /// Lowercased, trimmed search needle, or `None` when the search predicate
    /// is inactive.
    pub fn search_needle(&self) -> Option<String> {
        let trimmed = self.search_query.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    /// Whether any of the platform, tag or search predicates is active.
    pub fn has_active_predicates(&self) -> bool {
        !self.selected_platform.is_all()
            || !self.selected_tags.is_empty()
            || self.search_needle().is_some()
    }

    /// Reset platform, tags and search. Layout and sort are left alone.
    pub fn clear_filters(&mut self) {
        self.selected_platform = PlatformFilter::All;
        self.selected_tags.clear();
        self.search_query.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_tag_twice_restores_selection() {
        let mut state = ViewState::default();
        state.toggle_tag("Finance");
        let before = state.selected_tags.clone();

        assert!(state.toggle_tag("Backup"));
        assert!(!state.toggle_tag("Backup"));
        assert_eq!(state.selected_tags, before);
    }

    #[test]
    fn toggle_tag_keeps_insertion_order() {
        let mut state = ViewState::default();
        state.toggle_tag("B");
        state.toggle_tag("A");
        state.toggle_tag("C");
        state.toggle_tag("A");
        assert_eq!(state.selected_tags, vec!["B", "C"]);
    }

    #[test]
    fn search_needle_trims_and_lowercases() {
        let mut state = ViewState::default();
        assert_eq!(state.search_needle(), None);

        state.search_query = "   ".to_string();
        assert_eq!(state.search_needle(), None);
        assert!(!state.has_active_predicates());

        state.search_query = "  SoCiAl ".to_string();
        assert_eq!(state.search_needle().as_deref(), Some("social"));
        assert!(state.has_active_predicates());
    }

    #[test]
    fn clear_filters_keeps_layout_and_sort() {
        let mut state = ViewState {
            selected_platform: PlatformFilter::Only("n8n".into()),
            selected_tags: vec!["Backup".into()],
            search_query: "data".into(),
            layout: LayoutMode::List,
            sort_key: SortKey::PriceDesc,
        };
        state.clear_filters();
        assert!(!state.has_active_predicates());
        assert_eq!(state.layout, LayoutMode::List);
        assert_eq!(state.sort_key, SortKey::PriceDesc);
    }

    #[test]
    fn sort_key_round_trips_through_key_strings() {
        for key in SortKey::ALL {
            assert_eq!(key.key().parse::<SortKey>().unwrap(), key);
        }
        assert!("title".parse::<SortKey>().is_err());
    }

    #[test]
    fn unknown_sort_key_fails_closed_to_default() {
        assert_eq!(SortKey::from_key_lossy("newest"), SortKey::TitleAsc);
        let key: SortKey = serde_json::from_str("\"bogus\"").unwrap();
        assert_eq!(key, SortKey::TitleAsc);
    }

    #[test]
    fn sort_key_next_wraps() {
        assert_eq!(SortKey::TitleAsc.next(), SortKey::TitleDesc);
        assert_eq!(SortKey::Platform.next(), SortKey::TitleAsc);
    }

    #[test]
    fn platform_filter_serde() {
        let all: PlatformFilter = serde_json::from_str("\"all\"").unwrap();
        assert!(all.is_all());
        let only: PlatformFilter = serde_json::from_str("\"Zapier\"").unwrap();
        assert_eq!(only, PlatformFilter::Only("Zapier".into()));
        assert_eq!(serde_json::to_string(&only).unwrap(), "\"Zapier\"");
    }

    #[test]
    fn layout_parse_and_toggle() {
        assert_eq!("LIST".parse::<LayoutMode>().unwrap(), LayoutMode::List);
        assert!("table".parse::<LayoutMode>().is_err());
        assert_eq!(LayoutMode::Grid.toggled(), LayoutMode::List);
        assert_eq!(LayoutMode::List.toggled(), LayoutMode::Grid);
    }
}
