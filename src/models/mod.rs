//! Data models for LongView dashboard configurations

pub mod configuration;
pub mod item;

pub use configuration::{Configuration, Group};
pub use item::{Item, ItemType, Size};
