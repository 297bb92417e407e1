//! Read-only HTTP listing of the flashcards directory.

use crate::models::CsvSource;
use crate::source::list_sources;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Clone)]
pub struct ServerState {
    pub dir: Arc<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct Listing {
    pub files: Vec<CsvSource>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

pub fn router(dir: PathBuf) -> Router {
    Router::new()
        .route("/api/flashcards", get(list_flashcards))
        .with_state(ServerState { dir: Arc::new(dir) })
}

/// `GET /api/flashcards`
pub async fn list_flashcards(State(state): State<ServerState>) -> Response {
    let dir = Arc::clone(&state.dir);
    let result = tokio::task::spawn_blocking(move || list_sources(&dir)).await;

    match result {
        Ok(Ok(files)) => Json(Listing { files }).into_response(),
        Ok(Err(e)) => {
            tracing::error!("error reading flashcards directory: {}", e);
            internal_error()
        }
        Err(e) => {
            tracing::error!("listing task failed: {}", e);
            internal_error()
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "Failed to load flashcards",
        }),
    )
        .into_response()
}

pub async fn serve(dir: PathBuf, addr: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        "serving {} on http://{}/api/flashcards",
        dir.display(),
        listener.local_addr()?
    );
    axum::serve(listener, router(dir)).await
}
