//! Handlers for the `/products` resource.

use std::path::Path as FsPath;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use deliverus_core::error::CoreError;
use deliverus_core::seed_catalog::image_path;
use deliverus_core::types::DbId;
use deliverus_core::upload::UploadedFile;
use deliverus_core::validation::payload::Payload;
use deliverus_core::validation::product::{changes_from_payload, draft_from_payload};
use deliverus_core::validation::rules::ValidationMode;
use deliverus_db::models::product::Product;
use deliverus_db::repositories::ProductRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::ProductPayload;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/products
///
/// Validate a new product, store its image (if any), and insert it.
/// The stored image is removed again when the insert fails.
pub async fn create_product(
    State(state): State<AppState>,
    ProductPayload(payload): ProductPayload,
) -> AppResult<(StatusCode, Json<DataResponse<Product>>)> {
    validate(&state, ValidationMode::Create, &payload).await?;

    let image = store_image(&state.config.products_folder, payload.image.as_ref()).await?;
    let created = async {
        let draft = draft_from_payload(&payload, image.clone())?;
        draft
            .validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;
        Ok::<_, AppError>(ProductRepo::create(&state.pool, &draft).await?)
    }
    .await;
    let product = discard_image_on_error(created, image.as_deref()).await?;

    tracing::info!(
        product_id = product.id,
        restaurant_id = product.restaurant_id,
        "Product created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: product })))
}

/// PUT /api/v1/products/{id}
///
/// Validate and apply changes. The owning restaurant cannot be changed.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ProductPayload(payload): ProductPayload,
) -> AppResult<Json<DataResponse<Product>>> {
    ensure_exists(&state, id).await?;
    validate(&state, ValidationMode::Update, &payload).await?;

    let image = store_image(&state.config.products_folder, payload.image.as_ref()).await?;
    let updated = async {
        let changes = changes_from_payload(&payload, image.clone())?;
        ProductRepo::update(&state.pool, id, &changes)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Product",
                id,
            }))
    }
    .await;
    let product = discard_image_on_error(updated, image.as_deref()).await?;

    tracing::info!(product_id = id, "Product updated");
    Ok(Json(DataResponse { data: product }))
}

/// GET /api/v1/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Product>>> {
    let product = ensure_exists(&state, id).await?;
    Ok(Json(DataResponse { data: product }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn ensure_exists(state: &AppState, id: DbId) -> AppResult<Product> {
    ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))
}

async fn validate(state: &AppState, mode: ValidationMode, payload: &Payload) -> AppResult<()> {
    let result = state.validator.validate(mode, payload).await;
    if result.is_valid {
        Ok(())
    } else {
        Err(AppError::Validation(result.errors))
    }
}

/// Write an accepted upload as `<uuid>.<ext>` under `folder` and return its
/// stored path. Returns `None` when nothing was uploaded.
async fn store_image(folder: &FsPath, file: Option<&UploadedFile>) -> AppResult<Option<String>> {
    let Some(file) = file else {
        return Ok(None);
    };
    let ext = file
        .image_extension()
        .ok_or_else(|| AppError::InternalError("Uploaded image passed validation without a known format".into()))?;

    tokio::fs::create_dir_all(folder)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create image folder: {e}")))?;

    let file_name = format!("{}.{ext}", uuid::Uuid::new_v4());
    tokio::fs::write(folder.join(&file_name), &file.data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store image: {e}")))?;

    tracing::debug!(file = %file_name, bytes = file.size(), "Stored product image");
    Ok(Some(image_path(&folder.to_string_lossy(), &file_name)))
}

/// Remove a freshly stored image when the write it belongs to failed.
async fn discard_image_on_error<T>(result: AppResult<T>, image: Option<&str>) -> AppResult<T> {
    if let (Err(_), Some(path)) = (&result, image) {
        match tokio::fs::remove_file(path).await {
            Ok(()) => tracing::debug!(path, "Removed image of failed product write"),
            Err(err) => tracing::warn!(path, error = %err, "Failed to remove orphaned product image"),
        }
    }
    result
}
