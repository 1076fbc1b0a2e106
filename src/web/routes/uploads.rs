//! Raw retrieval of stored uploads by composite name.

use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};

use crate::web::{AppError, AppState};

/// `GET /uploads/:filename`
pub async fn fetch(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    let bytes = state.files.read(&filename).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::NotFound(format!("no stored file '{filename}'"))
        } else {
            AppError::Internal(e.to_string())
        }
    })?;

    Ok(([(CONTENT_TYPE, content_type_for(&filename))], bytes).into_response())
}

fn content_type_for(name: &str) -> &'static str {
    match name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}
