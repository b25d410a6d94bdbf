//! Keiconf - a simple and minimalist flat-file configuration store
//!
//! Loads a JSON document from disk (optionally creating it first), answers
//! dotted-path lookups such as `"server.port"` against it, and writes the
//! whole document back on request. Meant for small projects and prototypes
//! that need settings on disk without a database or a schema.
//!
//! ```no_run
//! use keiconf::{ConfigStore, StoreOptions};
//!
//! let mut store = ConfigStore::new(
//!     "settings/app.json",
//!     StoreOptions::default().create_if_missing(true),
//! )?;
//! store.set("server.port", 8080)?;
//! store.save()?;
//! assert_eq!(store.get("server.port")?, 8080);
//! # Ok::<(), keiconf::ConfigError>(())
//! ```

pub mod config;
pub mod types;

pub use config::{ConfigStore, KeyPath, StoreOptions};
pub use types::{ConfigError, ErrorKind, Result};
