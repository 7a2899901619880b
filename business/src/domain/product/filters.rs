use super::errors::ProductError;
use super::model::Product;

/// Optional-field listing criteria.
///
/// Every field is independently present or absent. `is_deleted` is
/// tri-state: absent means "only products that are not deleted".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilters {
    /// Case-insensitive literal substring of the product name.
    pub name: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
    /// Every listed category must be present on the product.
    pub categories: Option<Vec<String>>,
    pub is_deleted: Option<bool>,
}

impl ProductFilters {
    /// Filters matching every product that is not soft-deleted.
    pub fn active() -> Self {
        Self::default()
    }

    /// Checks the price range.
    ///
    /// An absent bound never fails. A `max_price` of exactly zero counts as
    /// unset here, although the query builder still applies it as `price <= 0`.
    /// A NaN or infinite bound is always rejected.
    pub fn validate(&self) -> Result<(), ProductError> {
        if [self.min_price, self.max_price]
            .into_iter()
            .flatten()
            .any(|bound| !bound.is_finite())
        {
            return Err(ProductError::InvalidRange);
        }

        if let (Some(min), Some(max)) = (self.min_price, self.max_price)
            && max > 0.0
            && min > max
        {
            return Err(ProductError::InvalidRange);
        }
        Ok(())
    }

    /// True when none of the price, category or deletion criteria are set.
    ///
    /// `name` is not considered: a name-only filter takes the same path as
    /// an unfiltered listing.
    pub fn are_filters_empty(&self) -> bool {
        self.min_price.is_none()
            && self.max_price.is_none()
            && self.categories.is_none()
            && self.is_deleted.is_none()
    }

    /// Category constraint, if it actually restricts anything.
    pub fn required_categories(&self) -> Option<&[String]> {
        self.categories
            .as_deref()
            .filter(|categories| !categories.is_empty())
    }

    /// Deletion state the listing is constrained to.
    pub fn deleted_state(&self) -> bool {
        self.is_deleted.unwrap_or(false)
    }

    /// Evaluates the filters against a single product, with the same
    /// semantics the store query has.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(name) = &self.name
            && !product.name.to_lowercase().contains(&name.to_lowercase())
        {
            return false;
        }

        if let Some(min) = self.min_price
            && product.price < min
        {
            return false;
        }

        if let Some(max) = self.max_price
            && product.price > max
        {
            return false;
        }

        if let Some(required) = self.required_categories()
            && !required
                .iter()
                .all(|category| product.categories.contains(category))
        {
            return false;
        }

        product.is_deleted == self.deleted_state()
    }
}
