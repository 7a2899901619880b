use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    /// Liveness checks
    Health,
    /// Product catalog
    Products,
}
