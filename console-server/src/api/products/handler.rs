//! Product API Handlers
//!
//! Create and update accept multipart forms so image files ride along with
//! the field values. Both mutations answer with the refreshed product list,
//! which is what the console renders after a save.

use axum::{
    Json,
    extract::{Multipart, Path, State},
};
use rust_decimal::Decimal;

use crate::catalog::ProductDraft;
use crate::core::ServerState;
use crate::db::models::{Product, Size};
use crate::services::MediaFile;
use crate::utils::{AppError, AppResult};

/// Read a multipart form into a product draft.
///
/// Text fields: `name`, `brand`, `category`, `price`, repeated `sizes`,
/// repeated `existing_image` (URLs kept from a previous save). File parts
/// arrive under `images`.
async fn read_draft(mut multipart: Multipart) -> AppResult<ProductDraft> {
    let mut draft = ProductDraft::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        match name.as_str() {
            "name" => draft.name = field.text().await?,
            "brand" => draft.brand = Some(field.text().await?.into()),
            "category" => draft.category = Some(field.text().await?.into()),
            "price" => {
                let raw = field.text().await?;
                let price = raw
                    .parse::<Decimal>()
                    .map_err(|_| AppError::validation(format!("Invalid price: {}", raw)))?;
                draft.price = Some(price);
            }
            "sizes" => {
                let raw = field.text().await?;
                let size = raw
                    .parse::<Size>()
                    .map_err(|_| AppError::validation(format!("Unknown size: {}", raw)))?;
                draft.sizes.push(size);
            }
            "existing_image" => draft.image.push(field.text().await?),
            "images" => {
                let filename = field
                    .file_name()
                    .map(str::to_owned)
                    .unwrap_or_else(|| "upload".to_string());
                let content_type = field.content_type().map(str::to_owned);
                let bytes = field.bytes().await?.to_vec();
                draft.attachments.push(MediaFile {
                    filename,
                    content_type,
                    bytes,
                });
            }
            other => {
                tracing::debug!(field = %other, "Ignoring unknown form field");
            }
        }
    }

    Ok(draft)
}

/// GET /api/products
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.products().find_all().await.map_err(AppError::fetch)?;
    Ok(Json(products))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let product = state
        .products()
        .find_by_id(&id)
        .await
        .map_err(AppError::fetch)?
        .ok_or_else(|| AppError::not_found(format!("Product {}", id)))?;
    Ok(Json(product))
}

/// POST /api/products - create from a multipart form
pub async fn create(
    State(state): State<ServerState>,
    multipart: Multipart,
) -> AppResult<Json<Vec<Product>>> {
    let draft = read_draft(multipart).await?;
    state.catalog.save_product(draft, None).await?;
    let products = state.catalog.refresh().await.map_err(AppError::fetch)?;
    Ok(Json(products))
}

/// PUT /api/products/{id} - update from a multipart form
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> AppResult<Json<Vec<Product>>> {
    let draft = read_draft(multipart).await?;
    state.catalog.save_product(draft, Some(&id)).await?;
    let products = state.catalog.refresh().await.map_err(AppError::fetch)?;
    Ok(Json(products))
}

/// DELETE /api/products/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Product>>> {
    state.catalog.delete_product(&id).await?;
    let products = state.catalog.refresh().await.map_err(AppError::fetch)?;
    Ok(Json(products))
}
