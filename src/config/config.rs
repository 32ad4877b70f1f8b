use config::{Config, Environment, File, Source};
use serde::Deserialize;
use anyhow::{Context, Result};

/// 环境变量前缀，例如 `DUAL_TEXT_SERVER__ADDR=0.0.0.0:9000`
const ENV_PREFIX: &str = "DUAL_TEXT";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            max_concurrent_requests: default_max_concurrent_requests(),
            body_limit_bytes: default_body_limit_bytes(),
        }
    }
}

/// 为空或包含 `"*"` 时允许任意来源
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allow_origins: Vec<String>,
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allow_origins.is_empty() || self.allow_origins.iter().any(|o| o == "*")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_dir")]
    pub dir: String,
    #[serde(default = "default_log_file_name")]
    pub file_name: String,
    /// 默认过滤级别，`RUST_LOG` 优先
    #[serde(default = "default_log_level")]
    pub level: String,
    /// 日志文件按 JSON 行输出
    #[serde(default)]
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
            file_name: default_log_file_name(),
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_addr() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_max_concurrent_requests() -> usize {
    64
}

fn default_body_limit_bytes() -> usize {
    64 * 1024
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_log_file_name() -> String {
    "dual_text_api.log".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

impl AppConfig {
    /// 加载配置：内置默认值 -> 配置文件（可选）-> 环境变量
    pub async fn load(path: &str) -> Result<Self> {
        Self::from_sources(File::with_name(path).required(false), environment())
    }

    #[cfg(test)]
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Self::from_sources(File::from_str(toml, config::FileFormat::Toml), environment())
    }

    fn from_sources<S>(file: S, env: Environment) -> Result<Self>
    where
        S: Source + Send + Sync + 'static,
    {
        let config = Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .context("Failed to load config")?;

        let app_config: AppConfig = config.try_deserialize()
            .context("Failed to deserialize config")?;

        Ok(app_config)
    }
}
