use chrono::{DateTime, Utc};

use super::changes::store_precision;
use super::errors::ProductError;
use super::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub categories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
    pub images_url: Vec<String>,
}

/// A validated product that has not been persisted yet.
///
/// The store assigns the identifier when it turns this into a [`Product`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub categories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
    pub images_url: Vec<String>,
}

pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub categories: Vec<String>,
    pub images_url: Vec<String>,
}

impl NewProduct {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        Self::new_at(props, Utc::now())
    }

    /// Same as [`NewProduct::new`] with an explicit creation instant.
    pub fn new_at(props: NewProductProps, now: DateTime<Utc>) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::InvalidInput);
        }

        if props.price.is_nan() || props.price <= 0.0 {
            return Err(ProductError::InvalidInput);
        }

        let now = store_precision(now);
        Ok(Self {
            name: props.name,
            description: props.description,
            price: props.price,
            categories: props.categories,
            created_at: now,
            updated_at: now,
            is_deleted: false,
            images_url: props.images_url,
        })
    }

    /// Attaches the store-assigned identifier.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            categories: self.categories,
            created_at: self.created_at,
            updated_at: self.updated_at,
            is_deleted: self.is_deleted,
            images_url: self.images_url,
        }
    }
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: ProductId,
        name: String,
        description: String,
        price: f64,
        categories: Vec<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        is_deleted: bool,
        images_url: Vec<String>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            categories,
            created_at,
            updated_at,
            is_deleted,
            images_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(name: &str, price: f64) -> NewProductProps {
        NewProductProps {
            name: name.to_string(),
            description: "Solid oak".to_string(),
            price,
            categories: vec!["furniture".to_string()],
            images_url: vec![],
        }
    }

    #[test]
    fn should_create_product_when_name_and_price_valid() {
        let result = NewProduct::new(props("Chair", 20.0));

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.name, "Chair");
        assert_eq!(product.price, 20.0);
        assert!(!product.is_deleted);
    }

    #[test]
    fn should_set_updated_at_equal_to_created_at() {
        let product = NewProduct::new(props("Chair", 20.0)).unwrap();

        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn should_stamp_creation_at_millisecond_precision() {
        let now = DateTime::parse_from_rfc3339("2024-03-01T10:00:00.546892706Z")
            .unwrap()
            .with_timezone(&Utc);

        let product = NewProduct::new_at(props("Chair", 20.0), now).unwrap();

        assert_eq!(product.created_at.timestamp_subsec_nanos(), 546_000_000);
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn should_reject_when_name_empty() {
        let result = NewProduct::new(props("", 20.0));

        assert!(matches!(result.unwrap_err(), ProductError::InvalidInput));
    }

    #[test]
    fn should_reject_when_name_only_whitespace() {
        let result = NewProduct::new(props("   ", 20.0));

        assert!(matches!(result.unwrap_err(), ProductError::InvalidInput));
    }

    #[test]
    fn should_reject_when_price_zero() {
        let result = NewProduct::new(props("Chair", 0.0));

        assert!(matches!(result.unwrap_err(), ProductError::InvalidInput));
    }

    #[test]
    fn should_reject_when_price_negative() {
        let result = NewProduct::new(props("Chair", -3.5));

        assert!(matches!(result.unwrap_err(), ProductError::InvalidInput));
    }

    #[test]
    fn should_reject_when_price_nan() {
        let result = NewProduct::new(props("Chair", f64::NAN));

        assert!(matches!(result.unwrap_err(), ProductError::InvalidInput));
    }

    #[test]
    fn should_keep_fields_when_attaching_id() {
        let new_product = NewProduct::new(props("Chair", 20.0)).unwrap();
        let created_at = new_product.created_at;

        let product = new_product.into_product(ProductId::new("65f1c0ffee0000000000abcd"));

        assert_eq!(product.id.as_str(), "65f1c0ffee0000000000abcd");
        assert_eq!(product.name, "Chair");
        assert_eq!(product.categories, vec!["furniture".to_string()]);
        assert_eq!(product.created_at, created_at);
    }
}
