//! # rclonex-core - Core Domain Types
//!
//! Foundation crate for rclonex. Provides the remote record model, the static
//! provider schema registry, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, toml, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`RemoteConfig`] - A remote as normalized from the daemon
//! - [`Parameters`] - String parameter map used by forms and create/update calls
//! - [`filter_remotes()`] - Case-insensitive search over name and type
//!
//! ### Provider Schemas (`schema`)
//! - [`ProviderSchema`], [`FieldDescriptor`], [`FieldKind`] - Static form tables
//! - [`resolve_schema()`] - Field list for a provider type (empty when unknown)
//! - [`default_parameters()`] - Seed values for a freshly selected type
//! - [`key_info()`] - At most two summary entries for a remote card
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with auth, transport and daemon classes
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use rclonex_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod paths;
pub mod schema;
pub mod types;

/// Prelude for common imports used throughout all rclonex crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use schema::{
    default_parameters, find_schema, key_info, provider_label, resolve_schema, ChoiceOption,
    FieldDescriptor, FieldKind, ProviderSchema, PROVIDER_SCHEMAS,
};
pub use types::{filter_remotes, Parameters, RemoteConfig, RemoteDraft, UNKNOWN_PROVIDER};
