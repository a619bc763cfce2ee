//! Catalog Editor
//!
//! Create/update/delete flow for products. Image attachments are uploaded
//! to the external media host concurrently with an all-or-nothing join;
//! the record is written only after every upload resolved. Size selection
//! and the Known/Custom brand handling live here too.

pub mod sizes;

use std::sync::Arc;

use futures::future::try_join_all;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::db::models::{
    Brand, Category, Product, ProductCreate, ProductUpdate, Size,
};
use crate::db::repository::{ProductRepository, RepoError};
use crate::services::{MediaFile, MediaUploader, UploadError};

/// Catalog error types
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid product draft: {0}")]
    InvalidDraft(String),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    Store(#[from] RepoError),
}

/// Editor draft for a new or edited product.
///
/// `image` carries the previously stored URLs; `attachments` the freshly
/// picked files. New uploads replace the stored URLs only when at least one
/// attachment was present (and therefore uploaded successfully).
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub name: String,
    pub brand: Option<Brand>,
    pub category: Option<Category>,
    pub price: Option<Decimal>,
    pub sizes: Vec<Size>,
    pub image: Vec<String>,
    pub attachments: Vec<MediaFile>,
}

/// Catalog editing service
#[derive(Clone)]
pub struct CatalogEditor {
    repo: ProductRepository,
    uploader: Arc<dyn MediaUploader>,
}

impl CatalogEditor {
    pub fn new(repo: ProductRepository, uploader: Arc<dyn MediaUploader>) -> Self {
        Self { repo, uploader }
    }

    /// Save a draft, creating a new product or updating `existing_id`.
    ///
    /// All attachments upload concurrently; if any upload fails the whole
    /// save fails and nothing is written. The draft is consumed either way,
    /// so no partial state survives the call.
    pub async fn save_product(
        &self,
        draft: ProductDraft,
        existing_id: Option<&str>,
    ) -> Result<Product, CatalogError> {
        if draft.name.trim().is_empty() {
            return Err(CatalogError::InvalidDraft("name must not be empty".into()));
        }
        let price = draft
            .price
            .ok_or_else(|| CatalogError::InvalidDraft("price is required".into()))?;

        // Fan out uploads, fan in requiring all-success
        let uploaded: Vec<String> = if draft.attachments.is_empty() {
            Vec::new()
        } else {
            let uploads = draft
                .attachments
                .into_iter()
                .map(|file| self.uploader.upload(file));
            try_join_all(uploads).await?
        };

        let image = if uploaded.is_empty() {
            draft.image
        } else {
            uploaded
        };

        let brand = draft.brand.unwrap_or(Brand::Custom(String::new()));
        let category = draft.category.unwrap_or(Category::Custom(String::new()));
        let sizes = sizes::normalized(&draft.sizes);

        let saved = match existing_id {
            Some(id) => {
                self.repo
                    .update(
                        id,
                        ProductUpdate {
                            name: Some(draft.name),
                            brand: Some(brand),
                            category: Some(category),
                            price: Some(price),
                            image: Some(image),
                            sizes: Some(sizes),
                        },
                    )
                    .await?
            }
            None => {
                self.repo
                    .create(ProductCreate {
                        name: draft.name,
                        brand,
                        category,
                        price,
                        image,
                        sizes,
                    })
                    .await?
            }
        };

        tracing::info!(name = %saved.name, "Product saved");
        Ok(saved)
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), CatalogError> {
        self.repo.delete(id).await?;
        Ok(())
    }

    /// Full collection re-fetch, used after every successful save.
    ///
    /// A pure read, so it reports store errors as-is rather than as a
    /// catalog failure.
    pub async fn refresh(&self) -> Result<Vec<Product>, RepoError> {
        self.repo.find_all().await
    }
}
