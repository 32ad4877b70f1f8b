use axum::{Router, extract::DefaultBodyLimit, routing::get, routing::post};
use axum::http::{HeaderValue, Method};
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use crate::api::AppState;
use crate::api::handlers;
use crate::config::CorsConfig;

pub fn create_router(state: AppState) -> Router {
    let config = state.config.clone();

    Router::new()
        .route("/", get(handlers::service::info))
        .route("/health", get(handlers::service::health))
        .route("/generate", post(handlers::generate::generate))
        .fallback(handlers::service::not_found)
        // 超限由提取器转换为 413 `{"detail": ...}`
        .layer(DefaultBodyLimit::max(config.server.body_limit_bytes))
        // 所有路由共享同一个并发额度
        .layer(GlobalConcurrencyLimitLayer::new(config.server.max_concurrent_requests))
        .layer(TraceLayer::new_for_http())
        // CORS 层放在最外层，预检请求不占用并发额度
        .layer(cors_layer(&config.cors))
        .with_state(state)
}

/// 前端是静态站点，跨域调用 API
fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let allow_origin = if cors.allows_any_origin() {
        AllowOrigin::from(Any)
    } else {
        let origins = cors.allow_origins.iter().filter_map(|origin| {
            match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!("忽略无效的 CORS 来源 {}: {}", origin, e);
                    None
                }
            }
        });
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600))
}
