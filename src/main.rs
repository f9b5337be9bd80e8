use anyhow::Context;
use product_api::{config, infrastructure::logger::Logger};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load_config().context("加载配置失败")?;

    // 文件日志的 guard 必须存活到进程退出
    let _log_guard = Logger::init(&config.logging).context("初始化日志失败")?;

    info!("启动产品 REST API 服务器...");

    let app = product_api::build_app(&config);

    let addr = config.http.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 REST API 服务器运行在 http://{}", listener.local_addr()?);
    info!("📖 API 端点:");
    info!("   GET    /                    - 问候");
    info!("   GET    /api/products        - 产品列表 (支持 category, page, limit)");
    info!("   POST   /api/products        - 创建产品");
    info!("   GET    /api/products/stats  - 按分类统计");
    info!("   GET    /api/products/:id    - 获取产品");
    info!("   PUT    /api/products/:id    - 整体替换产品");
    info!("   DELETE /api/products/:id    - 删除产品");
    info!("   GET    /api/search?name=    - 按名称搜索");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务器已停止");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("监听 Ctrl-C 失败: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("监听 SIGTERM 失败: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("收到停止信号，正在关闭...");
}
