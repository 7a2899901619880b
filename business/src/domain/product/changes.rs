use chrono::{DateTime, Duration, SubsecRound, Utc};

use super::errors::ProductError;
use super::model::Product;

/// Caller-supplied partial patch. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub categories: Option<Vec<String>>,
    pub is_deleted: Option<bool>,
}

impl UpdateProduct {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.categories.is_none()
            && self.is_deleted.is_none()
    }

    /// Stages the present fields together with the update timestamp.
    ///
    /// Fails with `NoFieldsToUpdate` when the patch carries nothing besides
    /// the timestamp.
    pub fn into_changes(self, now: DateTime<Utc>) -> Result<ProductChanges, ProductError> {
        if self.is_empty() {
            return Err(ProductError::NoFieldsToUpdate);
        }

        Ok(ProductChanges {
            name: self.name,
            description: self.description,
            price: self.price,
            categories: self.categories,
            is_deleted: self.is_deleted,
            updated_at: store_precision(now),
        })
    }
}

/// Staged update set applied atomically by the store.
///
/// Only constructible from a non-empty [`UpdateProduct`] or as the soft-delete
/// set, so `updated_at` never travels alone.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductChanges {
    name: Option<String>,
    description: Option<String>,
    price: Option<f64>,
    categories: Option<Vec<String>>,
    is_deleted: Option<bool>,
    updated_at: DateTime<Utc>,
}

impl ProductChanges {
    pub fn soft_delete(now: DateTime<Utc>) -> Self {
        Self {
            name: None,
            description: None,
            price: None,
            categories: None,
            is_deleted: Some(true),
            updated_at: store_precision(now),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn categories(&self) -> Option<&[String]> {
        self.categories.as_deref()
    }

    pub fn is_deleted(&self) -> Option<bool> {
        self.is_deleted
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies the staged set to an in-memory copy of a stored product.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(categories) = &self.categories {
            product.categories = categories.clone();
        }
        if let Some(is_deleted) = self.is_deleted {
            product.is_deleted = is_deleted;
        }
        product.updated_at = next_updated_at(product.updated_at, self.updated_at);
    }
}

/// Smallest step the store can tell apart (BSON datetimes are milliseconds).
pub const UPDATED_AT_RESOLUTION_MS: i64 = 1;

/// Truncates an instant to what the store keeps, so values handed back to
/// callers compare equal to what a later read returns.
pub fn store_precision(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.trunc_subsecs(3)
}

/// Timestamp stored by an update: `now`, bumped past `previous` when the
/// clock has not moved forward at store resolution.
pub fn next_updated_at(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    now.max(previous + Duration::milliseconds(UPDATED_AT_RESOLUTION_MS))
}
