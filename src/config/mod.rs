//! Flat-file JSON configuration
//!
//! [`ConfigStore`] binds one JSON file to an in-memory document, addressed by
//! dotted key paths (see [`KeyPath`]). [`StoreOptions`] controls output
//! indentation, the missing-key policy and create-if-missing behavior.

mod format;
mod key_path;
mod options;
mod store;

pub use format::to_pretty_string;
pub use key_path::KeyPath;
pub use options::{StoreOptions, DEFAULT_INDENT};
pub use store::ConfigStore;
