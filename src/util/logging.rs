use std::path::PathBuf;
use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, fmt, Layer};
use tracing_subscriber::fmt::time::ChronoLocal;
use crate::config::LogConfig;

/// 初始化日志：同时输出到控制台和文件（按日期滚动）
///
/// 返回的 guard 必须在进程退出前保持存活，否则缓冲中的日志会丢失。
pub fn init(config: &LogConfig) -> Result<WorkerGuard> {
    let log_dir = PathBuf::from(&config.dir);
    if !log_dir.exists() {
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log dir {}", log_dir.display()))?;
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, &config.file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // RUST_LOG 优先，其次使用配置中的级别
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // 本地时区 RFC 3339 时间戳
    let console_layer = fmt::layer()
        .with_timer(ChronoLocal::rfc_3339())
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_filter(filter.clone());

    let file_layer = if config.json {
        fmt::layer()
            .json()
            .with_timer(ChronoLocal::rfc_3339())
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_filter(filter)
            .boxed()
    } else {
        fmt::layer()
            .with_timer(ChronoLocal::rfc_3339())
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_filter(filter)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("日志文件位置: {}/{}", log_dir.display(), config.file_name);

    Ok(guard)
}
