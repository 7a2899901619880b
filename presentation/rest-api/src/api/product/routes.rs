use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::filters::ProductFilters;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_filtered::{
    GetFilteredProductsParams, GetFilteredProductsUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_filtered_use_case: Arc<dyn GetFilteredProductsUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_filtered_use_case: Arc<dyn GetFilteredProductsUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_filtered_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Builds listing criteria from raw query parameters. An empty category list
/// is treated as absent.
fn product_filters(
    name: Option<String>,
    min_price: Option<f64>,
    max_price: Option<f64>,
    categories: Vec<String>,
    is_deleted: Option<bool>,
) -> ProductFilters {
    ProductFilters {
        name,
        min_price,
        max_price,
        categories: (!categories.is_empty()).then_some(categories),
        is_deleted,
    }
}

/// Product catalog API
///
/// Endpoints for creating, listing, updating and soft-deleting products.
#[OpenApi(prefix_path = "/v1")]
impl ProductApi {
    /// Create a new product
    ///
    /// Validates the payload and stores a new product.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        match self.create_use_case.execute(body.0.into()).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List products
    ///
    /// Without price, category or deletion criteria this returns every
    /// product that is not soft-deleted. Otherwise every given criterion
    /// must hold. `categories` may be repeated; a product must carry all of
    /// them.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(
        &self,
        name: Query<Option<String>>,
        min_price: Query<Option<f64>>,
        max_price: Query<Option<f64>>,
        categories: Query<Vec<String>>,
        is_deleted: Query<Option<bool>>,
    ) -> ListProductsResponse {
        let filters = product_filters(name.0, min_price.0, max_price.0, categories.0, is_deleted.0);

        let result = if filters.are_filters_empty() {
            self.get_all_use_case.execute().await
        } else {
            self.get_filtered_use_case
                .execute(GetFilteredProductsParams { filters })
                .await
        };

        match result {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                ListProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ListProductsResponse::BadRequest(json),
                    _ => ListProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Applies a partial update. Omitted fields are left unchanged.
    #[oai(path = "/products/:id", method = "patch", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let params = UpdateProductParams {
            id: ProductId::new(id.0),
            changes: body.0.into(),
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Marks the product as deleted and returns it. The record stays in the
    /// store and can still be listed with `is_deleted=true`.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        match self
            .delete_use_case
            .execute(DeleteProductParams {
                id: ProductId::new(id.0),
            })
            .await
        {
            Ok(product) => DeleteProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DeleteProductResponse::BadRequest(json),
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
