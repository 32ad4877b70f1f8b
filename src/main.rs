mod api;
mod config;
mod error;
mod model;
mod util;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置（config.toml 可选，环境变量覆盖）
    let config = config::AppConfig::load("config.toml").await?;

    // 保持 guard 存活到 main 结束，防止日志丢失
    let _log_guard = util::logging::init(&config.log)?;

    let addr = config.server.addr.clone();

    // 构建应用状态与路由
    let app_state = api::AppState::new(config);
    let app = api::routes::create_router(app_state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(util::shutdown::shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
