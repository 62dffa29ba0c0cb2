//! `GET /health`: readiness of the pieces a product write depends on.

use std::path::Path;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Readiness report. `status` is `"ok"` only when every check passes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Readiness {
    pub status: &'static str,
    pub version: &'static str,
    /// The pool answers a round-trip query.
    pub database: bool,
    /// The image folder exists and is a directory.
    pub products_folder: bool,
}

impl Readiness {
    fn new(database: bool, products_folder: bool) -> Self {
        let status = if database && products_folder { "ok" } else { "degraded" };
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
            products_folder,
        }
    }
}

async fn is_directory(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}

async fn readiness(State(state): State<AppState>) -> Json<Readiness> {
    let database = match deliverus_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Database not reachable");
            false
        }
    };
    let products_folder = is_directory(&state.config.products_folder).await;
    if !products_folder {
        tracing::warn!(folder = %state.config.products_folder.display(), "Products folder missing");
    }

    Json(Readiness::new(database, products_folder))
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(readiness))
}
