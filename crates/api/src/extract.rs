//! Request extractors.

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Json;
use deliverus_core::upload::UploadedFile;
use deliverus_core::validation::payload::Payload;
use serde_json::{Map, Value};

use crate::error::AppError;

/// Multipart part carrying the product picture.
pub const IMAGE_FIELD: &str = "image";

/// A product create/update body, from either JSON or `multipart/form-data`.
///
/// JSON bodies must be objects and keep their native value types. Multipart
/// text parts become string values; a non-empty `image` file part becomes the
/// payload's upload.
#[derive(Debug)]
pub struct ProductPayload(pub Payload);

impl<S> FromRequest<S> for ProductPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            return read_multipart(multipart).await.map(ProductPayload);
        }

        let Json(fields) = Json::<Map<String, Value>>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Ok(ProductPayload(Payload::new(fields)))
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<Payload, AppError> {
    let mut fields = Map::new();
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == IMAGE_FIELD && field.file_name().is_some() {
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            // Browsers send an empty part when no file was chosen.
            if !data.is_empty() {
                image = Some(UploadedFile {
                    file_name,
                    content_type,
                    data: data.to_vec(),
                });
            }
            continue;
        }

        let text = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        if !name.is_empty() {
            fields.insert(name, Value::String(text));
        }
    }

    Ok(Payload { fields, image })
}
