//! Locale-aware string ordering.
//!
//! Uses the Unicode Collation Algorithm with the CLDR root collation at
//! tertiary strength, which is what `localeCompare` yields with no locale
//! argument: accents and case only break ties between otherwise equal
//! strings, whitespace sorts before punctuation, punctuation before digits,
//! digits before letters.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};

thread_local! {
    static ROOT_COLLATOR: Option<Collator> = root_collator();
}

fn root_collator() -> Option<Collator> {
    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Root collator unavailable, falling back to case-folded order"
            );
            None
        }
    }
}

/// Compare two strings in display order.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)),
    })
}
