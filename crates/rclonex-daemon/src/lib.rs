//! # rclonex-daemon - rclone Remote-Control Client
//!
//! Talks to an rclone daemon started with `rclone rcd`. Holds the session,
//! guards every request with it, and maps the `config/*` endpoints onto
//! normalized [`rclonex_core::RemoteConfig`] records.
//!
//! Depends on [`rclonex_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Session
//! - [`Session`] - Daemon URL, Basic credential and display user
//! - [`SessionStore`] - Shared, optionally file-backed session holder
//!
//! ### Transport
//! - [`RcClient`] - JSON POST client with the auth guard and 401 handling
//! - [`RcClientConfig`] - Timeout and user agent
//!
//! ### Remote Configuration
//! - [`RemoteApi`] - Operations the console needs (list, get, create, update,
//!   delete, test, providers)
//! - [`RemoteService`] - [`RemoteApi`] over [`RcClient`], including the
//!   listremotes → dump fallback

pub mod api;
pub mod client;
pub mod protocol;
pub mod remotes;
pub mod session;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Public API re-exports
pub use api::RemoteApi;
pub use client::{RcClient, RcClientConfig, DEFAULT_TIMEOUT_MS};
pub use remotes::{RemoteService, DEFAULT_DETAIL_CONCURRENCY};
pub use session::{DisplayUser, Session, SessionStore, DEFAULT_DISPLAY_NAME, SESSION_FILENAME};
