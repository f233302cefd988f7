use anyhow::{Result, anyhow};
use ::config::Config;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::sync::Arc;
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub database: Option<DatabaseConfig>,
    pub server: Option<ServerConfig>,
    pub sys: Option<SysConfig>,
    pub store: Option<StoreConfig>,
}
impl AppConfig {
    pub fn new(file: &str) -> Result<Self> {
        let config = Config::builder()
            .add_source(::config::File::with_name(file).required(true))
            .add_source(::config::Environment::with_prefix("APP").separator("_"))
            .build()
            .map_err(|e| anyhow!("Failed to build configuration: {}", e))?;
        let cfg = config.try_deserialize::<AppConfig>().map_err(|e| anyhow!("Failed to deserialize configuration: {}", e))?;
        Ok(cfg)
    }
    pub fn init(file: &str) -> Result<()> {
        let instance = Self::new(file)?;
        INSTANCE.set(Arc::new(instance)).map_err(|_| anyhow!("AppConfig already initialized"))
    }

    pub fn get_database(&self) -> DatabaseConfig {
        self.database.clone().unwrap_or_default()
    }
    pub fn get_server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }
    pub fn get_sys(&self) -> SysConfig {
        self.sys.clone().unwrap_or_default()
    }
    pub fn get_store(&self) -> StoreConfig {
        self.store.clone().unwrap_or_default()
    }
    /// 获取单例
    ///
    /// # Panics
    /// 若未初始化则 panic
    pub fn get() -> Arc<Self> {
        INSTANCE.get().expect("AppConfig is not initialized").clone()
    }
}
static INSTANCE: OnceCell<Arc<AppConfig>> = OnceCell::new();
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DatabaseConfig {
    pub url: String,
    pub db_name: String,
}
#[derive(Debug, Deserialize, Clone)]
pub struct SysConfig {
    //全局日志级别
    pub log_level: String,
}
impl Default for SysConfig {
    fn default() -> Self {
        Self { log_level: "info".to_string() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}
impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 8080 }
    }
}

/// 成员存储后端
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Mongo,
    /// 进程内存储，重启即丢失
    Memory,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_sections_missing() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get_server().port, 8080);
        assert_eq!(cfg.get_sys().log_level, "info");
        assert_eq!(cfg.get_store().backend, StoreBackend::Mongo);
    }

    #[test]
    fn test_deserialize_toml() {
        let raw = r#"
            [server]
            host = "0.0.0.0"
            port = 9000
            [store]
            backend = "memory"
        "#;
        let cfg: AppConfig = Config::builder()
            .add_source(::config::File::from_str(raw, ::config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.get_server().host, "0.0.0.0");
        assert_eq!(cfg.get_store().backend, StoreBackend::Memory);
        assert!(cfg.database.is_none());
    }
}
