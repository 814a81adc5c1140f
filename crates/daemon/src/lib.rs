//! # LanShelf Daemon Library
//!
//! This crate provides the LanShelf daemon: a small service that exposes
//! the local filesystem over an unauthenticated HTTP/JSON API for remote
//! browsing from another device on the same network.
//!
//! ## Overview
//!
//! The daemon is a thin CRUD wrapper over OS filesystem calls:
//!
//! - **Filesystem Accessor**: list, stat, read, write, create-directory,
//!   and delete operations, passed straight through to the OS
//! - **Listing Formatter**: sorted, serializable directory listings
//!   (directories first, case-insensitive name order)
//! - **HTTP Endpoint Set**: the `/api/...` routes with a uniform
//!   success/error envelope
//! - **Service Lifecycle**: background listener with explicit start/stop,
//!   plus LAN-IP discovery for the access URL
//!
//! There is no authentication, no path sanitization, and no rate
//! limiting: any caller reachable on the network has unrestricted access
//! to everything the daemon's user can touch. Run it on trusted networks
//! only.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use daemon::config::Config;
//! use daemon::server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load_default()?;
//!     config.validate()?;
//!
//!     let handle = server::serve(&config).await?;
//!     println!("Serving on http://{}", handle.addr());
//!
//!     tokio::signal::ctrl_c().await?;
//!     handle.stop().await;
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading, overrides, and validation
//! - [`fs`]: Filesystem accessor and listing formatter
//! - [`http`]: Router and request handlers
//! - [`net`]: LAN-facing IP discovery
//! - [`server`]: Listener lifecycle

pub mod config;
pub mod fs;
pub mod http;
pub mod net;
pub mod server;

// Re-export the wire contract for convenience
pub use api;

// Re-export config types for convenience
pub use config::Config;

// Re-export filesystem types for convenience
pub use fs::{FsError, RawEntry, RawStat};

// Re-export server types for convenience
pub use server::{serve, ServerHandle};
