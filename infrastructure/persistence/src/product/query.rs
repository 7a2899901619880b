//! Translation of domain filters and staged changes into MongoDB documents.

use mongodb::bson::{self, Bson, Document, doc};

use business::domain::product::changes::{ProductChanges, UPDATED_AT_RESOLUTION_MS};
use business::domain::product::filters::ProductFilters;

use super::entity::fields;

/// Builds the `find` filter for a set of listing criteria.
///
/// Both price bounds end up in a single range condition. The name is
/// escaped so it matches as a literal, case-insensitive substring.
pub fn filter_document(filters: &ProductFilters) -> Document {
    let mut filter = Document::new();

    if let Some(name) = &filters.name {
        filter.insert(
            fields::NAME,
            doc! { "$regex": regex::escape(name), "$options": "i" },
        );
    }

    let mut price = Document::new();
    if let Some(min) = filters.min_price {
        price.insert("$gte", min);
    }
    if let Some(max) = filters.max_price {
        price.insert("$lte", max);
    }
    if !price.is_empty() {
        filter.insert(fields::PRICE, price);
    }

    if let Some(categories) = filters.required_categories() {
        filter.insert(fields::CATEGORIES, doc! { "$all": categories.to_vec() });
    }

    filter.insert(fields::IS_DELETED, filters.deleted_state());

    filter
}

/// Builds the single-stage update pipeline for a staged change set.
///
/// Staged values go through `$literal` so strings starting with `$` are not
/// read as field paths. `updated_at` becomes `max(now, previous + 1ms)`.
pub fn update_pipeline(changes: &ProductChanges) -> Vec<Document> {
    let mut set = Document::new();

    if let Some(name) = changes.name() {
        set.insert(fields::NAME, literal(name));
    }
    if let Some(description) = changes.description() {
        set.insert(fields::DESCRIPTION, literal(description));
    }
    if let Some(price) = changes.price() {
        set.insert(fields::PRICE, literal(price));
    }
    if let Some(categories) = changes.categories() {
        set.insert(fields::CATEGORIES, literal(categories.to_vec()));
    }
    if let Some(is_deleted) = changes.is_deleted() {
        set.insert(fields::IS_DELETED, literal(is_deleted));
    }

    let now = bson::DateTime::from_chrono(changes.updated_at());
    set.insert(
        fields::UPDATED_AT,
        doc! {
            "$max": [
                now,
                { "$add": [format!("${}", fields::UPDATED_AT), UPDATED_AT_RESOLUTION_MS] },
            ]
        },
    );

    vec![doc! { "$set": set }]
}

fn literal(value: impl Into<Bson>) -> Document {
    doc! { "$literal": value.into() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::changes::UpdateProduct;
    use chrono::Utc;

    fn staged(patch: UpdateProduct) -> ProductChanges {
        patch.into_changes(Utc::now()).unwrap()
    }

    fn set_stage(pipeline: &[Document]) -> &Document {
        assert_eq!(pipeline.len(), 1);
        pipeline[0].get_document("$set").unwrap()
    }

    #[test]
    fn should_only_exclude_deleted_when_filters_default() {
        let filter = filter_document(&ProductFilters::default());

        assert_eq!(filter, doc! { "is_deleted": false });
    }

    #[test]
    fn should_constrain_to_requested_deleted_state() {
        let filter = filter_document(&ProductFilters {
            is_deleted: Some(true),
            ..Default::default()
        });

        assert_eq!(filter, doc! { "is_deleted": true });
    }

    #[test]
    fn should_combine_min_and_max_into_one_range() {
        let filter = filter_document(&ProductFilters {
            min_price: Some(10.0),
            max_price: Some(50.0),
            ..Default::default()
        });

        assert_eq!(
            filter.get_document("price").unwrap(),
            &doc! { "$gte": 10.0, "$lte": 50.0 }
        );
    }

    #[test]
    fn should_keep_single_bound_when_only_min_given() {
        let filter = filter_document(&ProductFilters {
            min_price: Some(10.0),
            ..Default::default()
        });

        assert_eq!(filter.get_document("price").unwrap(), &doc! { "$gte": 10.0 });
    }

    #[test]
    fn should_keep_zero_max_bound_in_query() {
        let filter = filter_document(&ProductFilters {
            min_price: Some(50.0),
            max_price: Some(0.0),
            ..Default::default()
        });

        assert_eq!(
            filter.get_document("price").unwrap(),
            &doc! { "$gte": 50.0, "$lte": 0.0 }
        );
    }

    #[test]
    fn should_escape_name_for_literal_substring_match() {
        let filter = filter_document(&ProductFilters {
            name: Some("a.b*".to_string()),
            ..Default::default()
        });

        assert_eq!(
            filter.get_document("name").unwrap(),
            &doc! { "$regex": "a\\.b\\*", "$options": "i" }
        );
    }

    #[test]
    fn should_require_all_categories() {
        let filter = filter_document(&ProductFilters {
            categories: Some(vec!["home".to_string(), "wood".to_string()]),
            ..Default::default()
        });

        assert_eq!(
            filter.get_document("categories").unwrap(),
            &doc! { "$all": ["home", "wood"] }
        );
    }

    #[test]
    fn should_skip_empty_category_list() {
        let filter = filter_document(&ProductFilters {
            categories: Some(vec![]),
            ..Default::default()
        });

        assert!(!filter.contains_key("categories"));
    }

    #[test]
    fn should_stage_only_present_fields_plus_updated_at() {
        let pipeline = update_pipeline(&staged(UpdateProduct {
            price: Some(25.0),
            ..Default::default()
        }));
        let set = set_stage(&pipeline);

        let keys: Vec<&str> = set.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["price", "updated_at"]);
        assert_eq!(set.get_document("price").unwrap(), &doc! { "$literal": 25.0 });
    }

    #[test]
    fn should_wrap_dollar_prefixed_strings_as_literals() {
        let pipeline = update_pipeline(&staged(UpdateProduct {
            name: Some("$price".to_string()),
            ..Default::default()
        }));
        let set = set_stage(&pipeline);

        assert_eq!(
            set.get_document("name").unwrap(),
            &doc! { "$literal": "$price" }
        );
    }

    #[test]
    fn should_stage_soft_delete_as_flag_and_timestamp() {
        let pipeline = update_pipeline(&ProductChanges::soft_delete(Utc::now()));
        let set = set_stage(&pipeline);

        let keys: Vec<&str> = set.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["is_deleted", "updated_at"]);
        assert_eq!(
            set.get_document("is_deleted").unwrap(),
            &doc! { "$literal": true }
        );
    }

    #[test]
    fn should_keep_updated_at_strictly_increasing() {
        let now = Utc::now();
        let pipeline = update_pipeline(&ProductChanges::soft_delete(now));
        let set = set_stage(&pipeline);

        assert_eq!(
            set.get_document("updated_at").unwrap(),
            &doc! {
                "$max": [
                    bson::DateTime::from_chrono(now),
                    { "$add": ["$updated_at", 1_i64] },
                ]
            }
        );
    }
}
