//! Server configuration

use super::error::{Result, ServerError};

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | ENVIRONMENT | development | development / staging / production |
/// | HTTP_PORT | 5000 | HTTP 监听端口 |
/// | DATABASE_PATH | cafes.db | SQLite 数据库文件 |
/// | API_KEY | (开发环境占位) | 新增 / 删除咖啡馆所需的共享密钥 |
/// | PRICE_UPDATE_REQUIRES_KEY | false | 修改价格是否也需要 API_KEY |
/// | MAX_DB_CONNECTIONS | 5 | SQLite 连接池大小 |
/// | LOG_LEVEL | info | 未设置 RUST_LOG 时的默认日志级别 |
/// | LOG_DIR | (未设置) | 按天滚动的日志目录 |
///
/// # 示例
///
/// ```ignore
/// API_KEY=TopSecretAPIKey HTTP_PORT=8080 cargo run -p cafe-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 运行环境: development | staging | production
    pub environment: String,
    /// HTTP API 端口
    pub http_port: u16,
    /// SQLite 数据库文件路径
    pub database_path: String,
    /// Shared secret compared against the `api-key` query parameter
    pub api_key: String,
    /// Whether `/update-price` also requires the shared secret
    pub price_update_requires_key: bool,
    /// Maximum pooled SQLite connections
    pub max_db_connections: u32,
    /// Default log level
    pub log_level: String,
    /// Optional log directory
    pub log_dir: Option<String>,
}

impl Config {
    fn placeholder_secret(name: &str) -> String {
        format!("dev-{name}-not-for-production")
    }

    /// Require a secret env var: must be set and non-empty in non-development environments.
    fn require_secret(name: &str, environment: &str) -> Result<String> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(ServerError::Config(format!(
                        "{name} must be set in {environment} environment"
                    )));
                }
                Self::placeholder_secret(name)
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(ServerError::Config(format!(
                "{name} must not be empty in {environment} environment"
            )));
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Ok(Self {
            api_key: Self::require_secret("API_KEY", &environment)?,
            environment,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "cafes.db".into()),
            price_update_requires_key: std::env::var("PRICE_UPDATE_REQUIRES_KEY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            max_db_connections: std::env::var("MAX_DB_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
        })
    }

    /// Development configuration pointing at `database_path` with a fixed key
    ///
    /// Used by tests and local tooling that must not depend on the process environment.
    pub fn with_overrides(database_path: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            environment: "development".into(),
            http_port: 5000,
            database_path: database_path.into(),
            api_key: api_key.into(),
            price_update_requires_key: false,
            max_db_connections: 5,
            log_level: "info".into(),
            log_dir: None,
        }
    }

    /// Whether `API_KEY` was unset and the development placeholder is in use
    pub fn uses_placeholder_api_key(&self) -> bool {
        self.api_key == Self::placeholder_secret("API_KEY")
    }

    /// Compare a caller-supplied key against the configured secret
    pub fn api_key_matches(&self, candidate: Option<&str>) -> bool {
        candidate.is_some_and(|key| key == self.api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_are_development() {
        let config = Config::with_overrides("/tmp/cafes.db", "secret");
        assert_eq!(config.environment, "development");
        assert!(!config.uses_placeholder_api_key());
        assert_eq!(config.database_path, "/tmp/cafes.db");
        assert!(!config.price_update_requires_key);
    }

    #[test]
    fn test_api_key_matches() {
        let config = Config::with_overrides("cafes.db", "TopSecretAPIKey");
        assert!(config.api_key_matches(Some("TopSecretAPIKey")));
        assert!(!config.api_key_matches(Some("topsecretapikey")));
        assert!(!config.api_key_matches(Some("")));
        assert!(!config.api_key_matches(None));
    }

    #[test]
    fn test_require_secret_fallback_in_development() {
        let val = Config::require_secret("CAFE_TEST_UNSET_SECRET", "development").unwrap();
        assert_eq!(val, "dev-CAFE_TEST_UNSET_SECRET-not-for-production");

        let config = Config::with_overrides("cafes.db", Config::placeholder_secret("API_KEY"));
        assert!(config.uses_placeholder_api_key());
    }

    #[test]
    fn test_require_secret_missing_in_production() {
        let err = Config::require_secret("CAFE_TEST_UNSET_SECRET", "production").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }
}
