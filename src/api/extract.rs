use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::error::AppError;

/// JSON 请求体提取器，失败时返回 [`AppError`]，错误响应统一为 `{"detail": ...}`
///
/// 与 `axum::Json` 的区别：
/// - 缺少 `Content-Type` 时仍按 JSON 解析；非 JSON 的 `Content-Type` 按校验失败（422）处理
/// - 先解析为 [`Value`]，重复的键以最后一次出现的值为准
/// - 请求体大小由 `DefaultBodyLimit` 限制，超限返回 413
pub struct AppJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !accepts_json(req.headers()) {
            return Err(AppError::Validation(
                "Expected a JSON request body (`Content-Type: application/json`)".to_string(),
            ));
        }

        let bytes = Bytes::from_request(req, state).await?;

        let value: Value = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::Validation(format!("Failed to parse the request body as JSON: {}", e))
        })?;

        let payload = serde_json::from_value(value).map_err(|e| {
            AppError::Validation(format!(
                "Failed to deserialize the JSON body into the target type: {}",
                e
            ))
        })?;

        Ok(AppJson(payload))
    }
}

/// 没有 `Content-Type`，或者是 `application/json`、`application/*+json`
fn accepts_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };

    let Ok(content_type) = content_type.to_str() else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}
