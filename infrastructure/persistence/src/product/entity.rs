use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Deserializer, Serialize};

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::value_objects::ProductId;

/// Field names shared by the document layout and the query builders.
pub mod fields {
    pub const ID: &str = "_id";
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const PRICE: &str = "price";
    pub const CATEGORIES: &str = "categories";
    pub const UPDATED_AT: &str = "updated_at";
    pub const IS_DELETED: &str = "is_deleted";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub categories: Vec<String>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images_url: Vec<String>,
}

// Older writers stored missing lists as BSON null.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ProductDocument {
    pub fn from_new(product: &NewProduct) -> Self {
        Self {
            id: None,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            categories: product.categories.clone(),
            created_at: product.created_at,
            updated_at: product.updated_at,
            is_deleted: product.is_deleted,
            images_url: product.images_url.clone(),
        }
    }

    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let id = self
            .id
            .ok_or_else(|| RepositoryError::database_error("stored product has no _id"))?;

        Ok(Product::from_repository(
            ProductId::new(id.to_hex()),
            self.name,
            self.description,
            self.price,
            self.categories,
            self.created_at,
            self.updated_at,
            self.is_deleted,
            self.images_url,
        ))
    }
}
