//! # LanShelf API Library
//!
//! This crate defines the wire contract for the LanShelf HTTP API:
//! the record types returned by listing and stat operations, the request
//! bodies accepted by the write endpoints, and the uniform response
//! envelopes every endpoint answers with.
//!
//! ## Overview
//!
//! Every endpoint responds with a JSON object carrying a `success` flag.
//! On success the payload fields sit alongside the flag; on failure the
//! body is `{ "success": false, "error": "..." }` with an HTTP 400 status.
//! All field names are camelCase on the wire.
//!
//! ## Modules
//!
//! - [`messages`]: Record types, request bodies, and response envelopes

pub mod messages;

pub use messages::{
    CreateDirectoryRequest, CreateFileRequest, ErrorResponse, FileInfo, InfoResponse,
    ListResponse, MessageResponse, PathEntry, ReadResponse, StatusResponse,
};
