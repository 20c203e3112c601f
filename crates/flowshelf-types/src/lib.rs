//! Shared domain types for flowshelf.
//!
//! This crate contains the records the rest of the workspace passes around:
//! workflow catalog items, their prices, the session-local view state, the
//! browser configuration, and the associated error types.
//!
//! Zero infrastructure dependencies -- only serde, thiserror and tracing.

pub mod config;
pub mod error;
pub mod price;
pub mod view;
pub mod workflow;
