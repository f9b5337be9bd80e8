//! 产品处理器

use axum::{extract::State, http::StatusCode, response::Json};
use uuid::Uuid;

use super::{
    model::{CategoryStats, ListQuery, Product, ProductPayload, SearchQuery},
    service::ProductService,
};
use crate::core::{
    error::CoreError,
    extract::{ApiPath, ApiQuery, ValidatedJson},
};

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

/// 路径中的 ID 不是合法 UUID 时不可能匹配任何产品
fn parse_id(raw: &str) -> Result<Uuid, CoreError> {
    Uuid::parse_str(raw).map_err(|_| CoreError::product_not_found())
}

pub async fn greeting() -> &'static str {
    "Hello World"
}

pub async fn list_products(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.product_service.list(&query)?;
    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<Product>, CoreError> {
    let product = state.product_service.get(parse_id(&id)?)?;
    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ProductPayload>,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    let product = state.product_service.create(payload)?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ValidatedJson(payload): ValidatedJson<ProductPayload>,
) -> Result<Json<Product>, CoreError> {
    let product = state.product_service.update(parse_id(&id)?, payload)?;
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<Product>, CoreError> {
    let product = state.product_service.delete(parse_id(&id)?)?;
    Ok(Json(product))
}

pub async fn search_products(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.product_service.search_by_name(query.name.as_deref())?;
    Ok(Json(products))
}

pub async fn product_stats(
    State(state): State<AppState>,
) -> Result<Json<CategoryStats>, CoreError> {
    let stats = state.product_service.stats()?;
    Ok(Json(stats))
}
