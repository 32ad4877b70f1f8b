mod config;

pub use self::config::{AppConfig, CorsConfig, LogConfig};
