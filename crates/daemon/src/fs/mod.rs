//! Filesystem access and listing formatting.
//!
//! The accessor is a thin pass-through to OS calls; the listing module
//! converts raw entry metadata into the sorted wire records the HTTP API
//! returns.

pub mod accessor;
pub mod listing;

pub use accessor::{FsError, RawEntry, RawStat};
pub use listing::{format_entries, to_file_info};
