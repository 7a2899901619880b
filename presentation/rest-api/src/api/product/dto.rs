use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::changes::UpdateProduct;
use business::domain::product::model::Product;
use business::domain::product::use_cases::create::CreateProductParams;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Free-text description
    #[oai(default)]
    pub description: String,
    /// Unit price, must be greater than zero
    pub price: f64,
    /// Category labels
    #[oai(default)]
    pub categories: Vec<String>,
    /// Image URLs
    #[oai(default)]
    pub images_url: Vec<String>,
}

impl From<CreateProductRequest> for CreateProductParams {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            price: request.price,
            categories: request.categories,
            images_url: request.images_url,
        }
    }
}

/// Partial update. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Object)]
pub struct UpdateProductRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    /// Replaces the whole category list
    #[oai(skip_serializing_if_is_none)]
    pub categories: Option<Vec<String>>,
    #[oai(skip_serializing_if_is_none)]
    pub is_deleted: Option<bool>,
}

impl From<UpdateProductRequest> for UpdateProduct {
    fn from(request: UpdateProductRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            price: request.price,
            categories: request.categories,
            is_deleted: request.is_deleted,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Category labels
    pub categories: Vec<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// Soft-delete flag
    pub is_deleted: bool,
    /// Image URLs
    pub images_url: Vec<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price: product.price,
            categories: product.categories,
            created_at: product.created_at,
            updated_at: product.updated_at,
            is_deleted: product.is_deleted,
            images_url: product.images_url,
        }
    }
}
