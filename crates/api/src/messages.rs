//! Wire types for the LanShelf HTTP API.
//!
//! This module defines the directory-listing records, the request bodies
//! for the write endpoints, and the response envelopes. Everything is
//! serialized as camelCase JSON.

use serde::{Deserialize, Serialize};

/// A single entry in a directory listing.
///
/// Entries are produced fresh on every listing call and never cached;
/// `path` is always the join of the listed directory and `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathEntry {
    /// Entry name (not full path).
    pub name: String,
    /// Absolute path of the entry.
    pub path: String,
    /// Whether the entry is a directory.
    pub is_directory: bool,
    /// Size in bytes (0 for directories).
    pub size_bytes: u64,
    /// Last modification time, RFC 3339.
    pub modified_at: String,
}

/// Metadata for a single path, superset of [`PathEntry`].
///
/// Unlike listing entries, `size_bytes` reports the raw stat size even for
/// directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    /// Entry name (not full path).
    pub name: String,
    /// Absolute path of the entry.
    pub path: String,
    /// Whether the path is a directory.
    pub is_directory: bool,
    /// Raw size in bytes.
    pub size_bytes: u64,
    /// Last modification time, RFC 3339.
    pub modified_at: String,
    /// Creation time, RFC 3339. Falls back to the modification time on
    /// filesystems without a birth time.
    pub created_at: String,
}

/// Request body for `POST /api/file/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFileRequest {
    /// Destination path for the file.
    pub path: String,
    /// File content; empty if omitted.
    #[serde(default)]
    pub content: String,
}

/// Request body for `POST /api/directory/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDirectoryRequest {
    /// Directory path to create. Intermediate parents are created as needed.
    pub path: String,
}

/// Response for `GET /api/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    /// Always true; the status endpoint never fails.
    pub success: bool,
    /// Fixed service liveness marker, always `"online"`.
    pub status: String,
    /// Human-readable device name.
    pub device: String,
    /// The server's default browse path.
    pub current_path: String,
}

/// Response for `GET /api/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub success: bool,
    /// The directory that was listed.
    pub path: String,
    /// Entries sorted directories-first, then case-insensitive by name.
    pub items: Vec<PathEntry>,
}

/// Response for `GET /api/file/info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoResponse {
    pub success: bool,
    pub info: FileInfo,
}

/// Response for `GET /api/file/read`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadResponse {
    pub success: bool,
    /// Full file content, UTF-8.
    pub content: String,
}

/// Confirmation response for the create and delete endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Uniform failure envelope, sent with HTTP 400.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always false.
    pub success: bool,
    /// Non-empty description of the failure.
    pub error: String,
}

impl ErrorResponse {
    /// Create a failure envelope from any displayable error.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_entry_camel_case() {
        let entry = PathEntry {
            name: "notes.txt".to_string(),
            path: "/home/user/notes.txt".to_string(),
            is_directory: false,
            size_bytes: 42,
            modified_at: "2024-01-01T00:00:00Z".to_string(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["isDirectory"], false);
        assert_eq!(json["sizeBytes"], 42);
        assert_eq!(json["modifiedAt"], "2024-01-01T00:00:00Z");
        assert_eq!(json["name"], "notes.txt");
    }

    #[test]
    fn test_file_info_includes_created_at() {
        let info = FileInfo {
            name: "x".to_string(),
            path: "/x".to_string(),
            is_directory: true,
            size_bytes: 4096,
            modified_at: "2024-01-01T00:00:00Z".to_string(),
            created_at: "2023-12-31T00:00:00Z".to_string(),
        };

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["createdAt"], "2023-12-31T00:00:00Z");
        assert_eq!(json["isDirectory"], true);
    }

    #[test]
    fn test_create_file_request_content_defaults_empty() {
        let req: CreateFileRequest = serde_json::from_str(r#"{"path": "/tmp/a.txt"}"#).unwrap();
        assert_eq!(req.path, "/tmp/a.txt");
        assert_eq!(req.content, "");
    }

    #[test]
    fn test_error_response_shape() {
        let resp = ErrorResponse::new("path does not exist: /nope");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], false);
        assert!(!json["error"].as_str().unwrap().is_empty());
    }

    #[test]
    fn test_status_response_round_trip() {
        let resp = StatusResponse {
            success: true,
            status: "online".to_string(),
            device: "LanShelf".to_string(),
            current_path: "/home/user".to_string(),
        };

        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"currentPath\""));

        let back: StatusResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, resp);
    }
}
