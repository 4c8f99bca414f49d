//! Configuration engine for LongView
//!
//! Text flows in through [`parser`], is checked by [`validator`], held by
//! [`manager`], and written back out through [`serializer`]. The UI layer
//! talks to [`ConfigManager`] only.

pub mod diagnostics;
pub mod error;
pub mod manager;
pub mod parser;
pub mod serializer;
pub mod validator;

pub use diagnostics::{DiagnosticTracker, NodeKind, SourceMap};
pub use error::ConfigError;
pub use manager::ConfigManager;
pub use validator::ValidationError;
