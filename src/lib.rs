//! LongView - Dashboard Configuration Engine
//!
//! LongView arranges named groups of typed, sized, refreshable display items
//! into a dashboard. This crate is the non-GUI core: it loads, validates, and
//! persists the declarative YAML document describing the layout, producing
//! line-accurate diagnostics when a document is malformed.

pub mod cli;
pub mod config;
pub mod logging;
pub mod models;

pub use config::{ConfigError, ConfigManager, ValidationError};
pub use models::{Configuration, Group, Item, ItemType, Size};

/// Result type alias for LongView operations
pub type Result<T> = anyhow::Result<T>;
