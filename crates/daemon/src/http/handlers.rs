//! Request handlers for the LanShelf HTTP API.
//!
//! Every endpoint answers with the uniform envelope: a `success` flag plus
//! the payload on success, or `{ success: false, error }` with HTTP 400 on
//! failure. No endpoint performs authentication or path sanitization; any
//! caller reachable on the network has full access. That open-access
//! contract is inherited from the original tool and documented, not fixed.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tokio_util::io::ReaderStream;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

use api::{
    CreateDirectoryRequest, CreateFileRequest, ErrorResponse, InfoResponse, ListResponse,
    MessageResponse, ReadResponse, StatusResponse,
};

use crate::fs::{self, accessor, FsError};

/// Shared state for the HTTP handlers.
///
/// Immutable for the lifetime of the server: the browse root replaces the
/// original's mutable "current path" global, so there is no state shared
/// with a UI thread and no race on it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Default directory for listings that supply no path.
    pub browse_root: PathBuf,
    /// Device name reported by the status endpoint.
    pub device_name: String,
}

/// A request failure, rendered as the 400 envelope.
#[derive(Debug)]
pub struct ApiError(String);

impl ApiError {
    fn validation(message: &str) -> Self {
        Self(message.to_string())
    }
}

impl From<FsError> for ApiError {
    fn from(err: FsError) -> Self {
        Self(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        debug!("request failed: {}", self.0);
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(self.0))).into_response()
    }
}

/// Query parameters carrying an optional path.
///
/// The path is optional at the extractor level even where the endpoint
/// requires it, so a missing parameter produces the envelope instead of a
/// framework rejection.
#[derive(Debug, Deserialize)]
pub struct PathQuery {
    path: Option<String>,
}

impl PathQuery {
    fn require(self) -> Result<PathBuf, ApiError> {
        self.path
            .map(PathBuf::from)
            .ok_or_else(|| ApiError::validation("path parameter is required"))
    }
}

/// Build the API router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/status", get(status))
        .route("/api/list", get(list))
        .route("/api/file/info", get(file_info))
        .route("/api/file/download", get(download))
        .route("/api/file/read", get(read_file))
        .route("/api/file/create", post(create_file))
        .route("/api/directory/create", post(create_directory))
        .route("/api/delete", delete(delete_item))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /api/status
async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        success: true,
        status: "online".to_string(),
        device: state.device_name.clone(),
        current_path: state.browse_root.to_string_lossy().to_string(),
    })
}

/// GET /api/list
async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PathQuery>,
) -> Result<Json<ListResponse>, ApiError> {
    let path = query
        .path
        .map(PathBuf::from)
        .unwrap_or_else(|| state.browse_root.clone());

    let entries = accessor::list(&path)?;
    Ok(Json(ListResponse {
        success: true,
        path: path.to_string_lossy().to_string(),
        items: fs::format_entries(entries),
    }))
}

/// GET /api/file/info
async fn file_info(Query(query): Query<PathQuery>) -> Result<Json<InfoResponse>, ApiError> {
    let path = query.require()?;
    let raw = accessor::stat(&path)?;

    Ok(Json(InfoResponse {
        success: true,
        info: fs::to_file_info(raw),
    }))
}

/// GET /api/file/download
///
/// Streams the file's bytes as an attachment with its original name.
async fn download(Query(query): Query<PathQuery>) -> Result<Response, ApiError> {
    let path = query.require()?;
    let raw = accessor::stat(&path)?;
    if !raw.is_file {
        return Err(FsError::NotAFile(path).into());
    }

    let file = tokio::fs::File::open(&path)
        .await
        .map_err(|e| ApiError(format!("failed to open file: {e}")))?;

    let mime_type = mime_guess::from_path(&path)
        .first_or_octet_stream()
        .to_string();

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(&mime_type)
            .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream")),
    );
    headers.insert(
        header::CONTENT_LENGTH,
        HeaderValue::from_str(&raw.size_bytes.to_string())
            .unwrap_or_else(|_| HeaderValue::from_static("0")),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{}\"", raw.name))
            .unwrap_or_else(|_| HeaderValue::from_static("attachment; filename=\"download\"")),
    );

    let body = axum::body::Body::from_stream(ReaderStream::new(file));
    Ok((StatusCode::OK, headers, body).into_response())
}

/// GET /api/file/read
async fn read_file(Query(query): Query<PathQuery>) -> Result<Json<ReadResponse>, ApiError> {
    let path = query.require()?;
    let content = accessor::read_text(&path)?;

    Ok(Json(ReadResponse {
        success: true,
        content,
    }))
}

/// POST /api/file/create
async fn create_file(
    body: Result<Json<CreateFileRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError(format!("invalid request body: {e}")))?;

    accessor::write_text(Path::new(&request.path), &request.content)?;
    Ok(Json(MessageResponse {
        success: true,
        message: "File created successfully".to_string(),
    }))
}

/// POST /api/directory/create
async fn create_directory(
    body: Result<Json<CreateDirectoryRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError(format!("invalid request body: {e}")))?;

    accessor::make_directory(Path::new(&request.path))?;
    Ok(Json(MessageResponse {
        success: true,
        message: "Directory created successfully".to_string(),
    }))
}

/// DELETE /api/delete
async fn delete_item(Query(query): Query<PathQuery>) -> Result<Json<MessageResponse>, ApiError> {
    let path = query.require()?;
    accessor::delete(&path)?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Item deleted successfully".to_string(),
    }))
}
