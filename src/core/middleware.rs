//! 核心中间件模块

use std::{any::Any, time::Instant};

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
    BoxError,
};
use tracing::{info, warn};

use super::error::CoreError;

/// 请求日志中间件
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    let response = next.run(req).await;
    let status = response.status();
    let duration = start.elapsed();

    if status.is_server_error() {
        warn!(
            "{} {} - {} - {}ms - User-Agent: {:?}",
            method,
            uri,
            status,
            duration.as_millis(),
            user_agent
        );
    } else {
        info!(
            "{} {} - {} - {}ms - User-Agent: {:?}",
            method,
            uri,
            status,
            duration.as_millis(),
            user_agent
        );
    }

    response
}

/// 处理器 panic 时返回统一的 500 响应，细节由 `CoreError` 记录日志
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "未知 panic".to_string()
    };

    CoreError::InternalServerError(format!("请求处理发生 panic: {}", detail)).into_response()
}

/// 把超时层返回的错误转换为统一的错误响应
pub async fn handle_timeout_error(err: BoxError) -> CoreError {
    if err.is::<tower::timeout::error::Elapsed>() {
        CoreError::Timeout
    } else {
        CoreError::InternalServerError(format!("中间件错误: {}", err))
    }
}

/// 未匹配到路由
pub async fn route_not_found() -> CoreError {
    CoreError::NotFound("Route not found".to_string())
}
