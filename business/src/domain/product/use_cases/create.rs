use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct CreateProductParams {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub categories: Vec<String>,
    pub images_url: Vec<String>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
