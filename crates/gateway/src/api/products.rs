// Product catalog HTTP routes

use crate::catalog::{
    catalog, CreateProductRequest, NewProduct, ProductCreated, ProductList, CREATED_MESSAGE,
};
use axum::{
    extract::rejection::JsonRejection, http::StatusCode, routing::get, Json, Router,
};
use chrono::Utc;
use multiapp_core::{ApiError, ErrorResponse};
use serde_json::Value;

pub fn routes() -> Router {
    Router::new().route("/api/products", get(list_products).post(create_product))
}

/// GET /api/products - The catalog and its size
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "Product catalog", body = ProductList)
    ),
    tag = "products"
)]
pub async fn list_products() -> Json<ProductList> {
    Json(ProductList::from(catalog()))
}

/// POST /api/products - Validate and acknowledge a product
///
/// The product is returned but not added to the catalog.
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created successfully", body = ProductCreated),
        (status = 400, description = "Missing required fields or invalid price", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn create_product(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductCreated>), ApiError> {
    let Json(body) = body?;
    let product = NewProduct::from_json(&body)?.into_product(Utc::now());

    tracing::info!(product_id = product.id, name = %product.name, "Product accepted (not persisted)");

    Ok((
        StatusCode::CREATED,
        Json(ProductCreated {
            message: CREATED_MESSAGE.to_string(),
            product,
        }),
    ))
}
