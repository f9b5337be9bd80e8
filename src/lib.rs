//! # 产品管理 REST API
//!
//! 基于 Axum 的单资源 CRUD 服务：
//! - 产品的创建、查询、整体替换与删除
//! - 按分类过滤与分页、按名称搜索
//! - 按分类统计数量
//!
//! 数据保存在进程内存中，重启后丢失。

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

use std::time::Duration;

use axum::Router;

use app::product::{handler::AppState, service::ProductService};
use config::Config;
use infrastructure::store::InMemoryProductStore;

pub use crate::core::error::CoreError;

/// 根据配置装配应用状态
pub fn build_state(config: &Config) -> AppState {
    let store = InMemoryProductStore::new();
    AppState {
        product_service: ProductService::new(store, config.pagination),
    }
}

/// 根据配置构建可直接服务的路由
pub fn build_app(config: &Config) -> Router {
    app::routes::router(
        build_state(config),
        Duration::from_secs(config.http.timeout_seconds),
    )
}
