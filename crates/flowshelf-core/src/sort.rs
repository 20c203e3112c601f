//! Sort engine.
//!
//! A fixed registry maps each [`SortKey`] to a plain comparison function.
//! Sorting is always stable, so items with equal keys keep their filtered
//! order.

use std::cmp::Ordering;

use flowshelf_types::view::SortKey;
use flowshelf_types::workflow::WorkflowItem;

use crate::catalog::Catalog;
use crate::collate::locale_cmp;

/// A total order over two catalog items.
pub type Comparator = fn(&WorkflowItem, &WorkflowItem) -> Ordering;

/// One entry of the sort registry.
#[derive(Debug, Clone, Copy)]
pub struct SortOption {
    pub key: SortKey,
    pub compare: Comparator,
}

impl SortOption {
    pub fn label(&self) -> &'static str {
        self.key.label()
    }
}

/// Every available comparator. The first entry is the default.
pub static SORT_REGISTRY: [SortOption; 5] = [
    SortOption {
        key: SortKey::TitleAsc,
        compare: title_asc,
    },
    SortOption {
        key: SortKey::TitleDesc,
        compare: title_desc,
    },
    SortOption {
        key: SortKey::PriceAsc,
        compare: price_asc,
    },
    SortOption {
        key: SortKey::PriceDesc,
        compare: price_desc,
    },
    SortOption {
        key: SortKey::Platform,
        compare: platform,
    },
];

fn title_asc(a: &WorkflowItem, b: &WorkflowItem) -> Ordering {
    locale_cmp(&a.title, &b.title)
}

fn title_desc(a: &WorkflowItem, b: &WorkflowItem) -> Ordering {
    locale_cmp(&b.title, &a.title)
}

fn price_asc(a: &WorkflowItem, b: &WorkflowItem) -> Ordering {
    compare_prices(a.price.sort_value(), b.price.sort_value(), false)
}

fn price_desc(a: &WorkflowItem, b: &WorkflowItem) -> Ordering {
    compare_prices(a.price.sort_value(), b.price.sort_value(), true)
}

fn platform(a: &WorkflowItem, b: &WorkflowItem) -> Ordering {
    locale_cmp(&a.platform, &b.platform)
}

/// Malformed prices (no sort value) go last regardless of direction.
fn compare_prices(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.total_cmp(&a),
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Registry entry for `key`, or the default entry if the key is somehow
/// absent from the registry.
pub fn sort_option(key: SortKey) -> &'static SortOption {
    SORT_REGISTRY
        .iter()
        .find(|option| option.key == key)
        .unwrap_or(&SORT_REGISTRY[0])
}

/// Comparator for `key`.
pub fn comparator(key: SortKey) -> Comparator {
    sort_option(key).compare
}

/// Stable-sort catalog positions by the comparator for `key`.
pub fn sort_indices(catalog: &Catalog, indices: &mut [usize], key: SortKey) {
    let compare = comparator(key);
    let items = catalog.items();
    indices.sort_by(|&a, &b| compare(&items[a], &items[b]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{catalog_of, workflow};

    fn sorted_ids(catalog: &Catalog, key: SortKey) -> Vec<&str> {
        let mut indices: Vec<usize> = (0..catalog.len()).collect();
        sort_indices(catalog, &mut indices, key);
        indices
            .into_iter()
            .map(|i| catalog.items()[i].id.as_str())
            .collect()
    }

    #[test]
    fn registry_covers_every_key_in_order() {
        let keys: Vec<SortKey> = SORT_REGISTRY.iter().map(|o| o.key).collect();
        assert_eq!(keys, SortKey::ALL.to_vec());
        assert_eq!(SORT_REGISTRY[0].key, SortKey::default());
        assert_eq!(SORT_REGISTRY[2].label(), "Price (Low to High)");
    }

    #[test]
    fn title_orders() {
        let catalog = Catalog::sample();
        assert_eq!(
            sorted_ids(&catalog, SortKey::TitleAsc),
            vec!["n8n-backup", "zapier-invoice", "n8n-social"]
        );
        assert_eq!(
            sorted_ids(&catalog, SortKey::TitleDesc),
            vec!["n8n-social", "zapier-invoice", "n8n-backup"]
        );
    }

    #[test]
    fn title_sort_ignores_case() {
        let catalog = catalog_of(vec![
            workflow("a", "zebra sync", "n8n", &[], "Free"),
            workflow("b", "Alpha report", "n8n", &[], "Free"),
            workflow("c", "beta digest", "n8n", &[], "Free"),
        ]);
        assert_eq!(sorted_ids(&catalog, SortKey::TitleAsc), vec!["b", "c", "a"]);
    }

    #[test]
    fn price_orders_treat_free_as_zero() {
        let catalog = catalog_of(vec![
            workflow("ten", "Ten", "n8n", &[], "10"),
            workflow("free", "Free one", "n8n", &[], "Free"),
            workflow("two", "Two", "n8n", &[], "2.5"),
        ]);
        assert_eq!(
            sorted_ids(&catalog, SortKey::PriceAsc),
            vec!["free", "two", "ten"]
        );
        assert_eq!(
            sorted_ids(&catalog, SortKey::PriceDesc),
            vec!["ten", "two", "free"]
        );
    }

    #[test]
    fn malformed_prices_sort_last_both_ways() {
        let catalog = catalog_of(vec![
            workflow("bad", "Bad", "n8n", &[], "contact sales"),
            workflow("five", "Five", "n8n", &[], "5"),
            workflow("free", "Free one", "n8n", &[], "Free"),
        ]);
        assert_eq!(
            sorted_ids(&catalog, SortKey::PriceAsc),
            vec!["free", "five", "bad"]
        );
        assert_eq!(
            sorted_ids(&catalog, SortKey::PriceDesc),
            vec!["five", "free", "bad"]
        );
    }

    #[test]
    fn ties_keep_filtered_order() {
        // All free: the price sort must not reorder anything.
        let catalog = Catalog::sample();
        assert_eq!(
            sorted_ids(&catalog, SortKey::PriceAsc),
            vec!["n8n-social", "zapier-invoice", "n8n-backup"]
        );
        assert_eq!(
            sorted_ids(&catalog, SortKey::PriceDesc),
            vec!["n8n-social", "zapier-invoice", "n8n-backup"]
        );
    }

    #[test]
    fn platform_sort_is_stable() {
        let catalog = catalog_of(vec![
            workflow("z1", "Z1", "Zapier", &[], "Free"),
            workflow("n1", "N1", "n8n", &[], "Free"),
            workflow("m1", "M1", "Make", &[], "Free"),
            workflow("n2", "N2", "n8n", &[], "Free"),
        ]);
        assert_eq!(
            sorted_ids(&catalog, SortKey::Platform),
            vec!["m1", "n1", "n2", "z1"]
        );
    }

    #[test]
    fn sorting_a_subset_only_touches_the_subset() {
        let catalog = Catalog::sample();
        let mut indices = vec![2, 0];
        sort_indices(&catalog, &mut indices, SortKey::TitleDesc);
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn accented_titles_and_platforms_sort_by_base_letter() {
        let catalog = catalog_of(vec![
            workflow("zap", "Zapier Digest", "Zapier", &[], "Free"),
            workflow("ecl", "Éclair Sync", "Écoute", &[], "Free"),
            workflow("rfp", "rfp tracker", "n8n", &[], "Free"),
            workflow("res", "résumé builder", "Make", &[], "Free"),
        ]);
        assert_eq!(
            sorted_ids(&catalog, SortKey::TitleAsc),
            vec!["ecl", "res", "rfp", "zap"]
        );
        assert_eq!(
            sorted_ids(&catalog, SortKey::TitleDesc),
            vec!["zap", "rfp", "res", "ecl"]
        );
        assert_eq!(
            sorted_ids(&catalog, SortKey::Platform),
            vec!["ecl", "res", "rfp", "zap"]
        );
    }
}
