// OpenAPI specification for the gateway

use crate::api;
use crate::catalog::{CreateProductRequest, Product, ProductCreated, ProductList};
use multiapp_core::ErrorResponse;
use utoipa::OpenApi;

/// OpenAPI documentation for the gateway
#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::root,
        api::health::health,
        api::products::list_products,
        api::products::create_product,
        api::cache::get_cache,
        api::cache::set_cache,
    ),
    components(
        schemas(
            Product, ProductList, ProductCreated, CreateProductRequest,
            api::cache::CacheEntry, api::cache::CacheSetResponse,
            api::health::HealthResponse, api::health::ComponentStatus, api::health::RootResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "products", description = "Static product catalog"),
        (name = "cache", description = "Key/value cache pass-through"),
        (name = "health", description = "Banner and dependency health")
    ),
    info(
        title = "Multiapp Gateway API",
        version = "0.1.0",
        description = "Product catalog, Redis pass-through and dependency health",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;
