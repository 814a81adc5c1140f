//! HTTP endpoint set.
//!
//! Exposes the filesystem accessor and listing formatter as the
//! `/api/...` routes, translating every failure into the uniform
//! `{ success: false, error }` envelope with HTTP 400.

pub mod handlers;

pub use handlers::{router, AppState};
