//! Listing formatter: raw entry metadata to sorted wire records.
//!
//! The ordering produced here is a contract both the on-device display and
//! remote API clients depend on: directories before files, then
//! case-insensitive name ascending. The sort is stable, so ties keep the
//! OS enumeration order.

use std::time::SystemTime;

use api::{FileInfo, PathEntry};
use chrono::{DateTime, SecondsFormat, Utc};

use super::accessor::{RawEntry, RawStat};

/// Format a timestamp as RFC 3339 with second precision.
fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Convert raw directory entries into sorted [`PathEntry`] records.
pub fn format_entries(raw: Vec<RawEntry>) -> Vec<PathEntry> {
    let mut items: Vec<PathEntry> = raw
        .into_iter()
        .map(|entry| PathEntry {
            name: entry.name,
            path: entry.path.to_string_lossy().to_string(),
            is_directory: entry.is_directory,
            size_bytes: entry.size_bytes,
            modified_at: format_timestamp(entry.modified),
        })
        .collect();

    // Directories first, then case-insensitive by name; stable sort
    items.sort_by(|a, b| match (a.is_directory, b.is_directory) {
        (true, false) => std::cmp::Ordering::Less,
        (false, true) => std::cmp::Ordering::Greater,
        _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    });

    items
}

/// Convert a raw stat result into a [`FileInfo`] record.
pub fn to_file_info(raw: RawStat) -> FileInfo {
    FileInfo {
        name: raw.name,
        path: raw.path.to_string_lossy().to_string(),
        is_directory: raw.is_directory,
        size_bytes: raw.size_bytes,
        modified_at: format_timestamp(raw.modified),
        created_at: format_timestamp(raw.created),
    }
}
