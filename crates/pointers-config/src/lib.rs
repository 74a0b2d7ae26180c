//! Configuration schemas and validation for url-pointers.
//!
//! Two configuration surfaces share one validation engine:
//!
//! - [`StandaloneConfig`]: single-process deployment, Google sign-in always on
//! - [`ServerConfig`]: server deployment, providers selected by `AUTH_PROVIDERS`
//!
//! Validation merges an in-memory object (or JSON file) with
//! `URL_POINTERS_*` environment variables and reports every violation at
//! once rather than stopping at the first.
//!
//! # Modules
//!
//! - [`error`]: Error types, violations and Result alias
//! - [`schema`]: Declarative schema definitions
//! - [`validate`]: The shared validation engine
//! - [`env`]: Environment-variable overlay

pub mod config;
pub mod env;
pub mod error;
pub mod logger;
pub mod schema;
pub mod server;
pub mod standalone;
pub mod validate;

// Re-export key types at crate root for convenience
pub use config::{AllowList, ConfigSchema};
pub use env::{ENV_PREFIX, Environment};
pub use error::{Error, Result, Violation, Violations};
pub use logger::{InfoLogger, LogFacade};
pub use schema::{Field, FieldKind, ProviderFields, ProviderSelection, Requirement, Schema};
pub use server::{GOOGLE_PROVIDER, SERVER_SCHEMA, ServerConfig, TEST_PROVIDER};
pub use standalone::{STANDALONE_SCHEMA, StandaloneConfig};
