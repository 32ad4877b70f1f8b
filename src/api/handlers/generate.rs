use axum::{http::StatusCode, response::IntoResponse, Json};
use crate::api::extract::AppJson;
use crate::model::generate::{GenerateRequest, GenerateResponse};

/// 生成双文字错觉模型
///
/// 几何生成（布尔运算、圆角）尚未实现，目前只回显解析后的参数。
pub async fn generate(AppJson(request): AppJson<GenerateRequest>) -> impl IntoResponse {
    tracing::debug!(
        word_a = %request.word_a,
        word_b = %request.word_b,
        font = %request.font,
        "收到生成请求"
    );

    (StatusCode::OK, Json(GenerateResponse::not_implemented(request)))
}
