//! Catalog, filter, sort and presentation logic for flowshelf.
//!
//! Everything here is pure: the catalog is handed in already loaded, and every
//! visible list is re-derived from it on demand. No I/O crates are used; the
//! catalog sources live in `flowshelf-infra`.

pub mod catalog;
pub mod collate;
pub mod filter;
pub mod frontmatter;
pub mod present;
pub mod session;
pub mod sort;

#[cfg(test)]
pub(crate) mod test_support;
