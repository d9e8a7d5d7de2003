//! OpenAPI documentation configuration.
//!
//! The generated document is served by `utoipa-scalar` at `/docs`, with the
//! raw JSON at `/api-docs/openapi.json`.

use crate::api::models::products::{ProductCreate, ProductResponse, ProductUpdate};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::products::list_products,
        crate::api::handlers::products::get_product,
        crate::api::handlers::products::create_product,
        crate::api::handlers::products::update_product,
        crate::api::handlers::products::delete_product,
    ),
    components(schemas(ProductCreate, ProductUpdate, ProductResponse)),
    tags(
        (name = "products", description = "Product catalog management")
    )
)]
pub struct ApiDoc;
