//! 路由与中间件装配

use std::time::Duration;

use axum::{error_handling::HandleErrorLayer, middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::product::handler::{
    create_product, delete_product, get_product, greeting, list_products, product_stats,
    search_products, update_product, AppState,
};
use crate::core::middleware::{
    handle_timeout_error, panic_response, request_logging_middleware, route_not_found,
};

/// 构建完整的 HTTP 路由
///
/// `/api/products/stats` 是静态路径，优先于 `/api/products/{id}` 匹配。
/// 路径存在但方法不匹配时与未知路径一样返回 404。
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(greeting))
        .route("/api/products", get(list_products).post(create_product))
        .route("/api/products/stats", get(product_stats))
        .route(
            "/api/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/api/search", get(search_products))
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout_error))
                .timeout(request_timeout),
        )
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}
