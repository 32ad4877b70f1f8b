use serde::Serialize;

/// 服务标题，与前端约定的 API 名称一致
pub const SERVICE_TITLE: &str = "Dual Text Illusion Generator API (Stub)";

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub title: &'static str,
    pub version: &'static str,
}

impl ServiceInfo {
    pub fn current() -> Self {
        Self {
            title: SERVICE_TITLE,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: &'static str,
    pub uptime_secs: u64,
}
