//! 配置服务
//!
//! 配置文件：`<config_dir>/record-manager/config.json`，不存在时使用默认值。
//! 环境变量优先于文件中的值。

use std::path::{Path, PathBuf};

use record_manager_store::{StoreConfig, DEFAULT_TABLE};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 配置目录下的应用子目录
const APP_DIR: &str = "record-manager";
/// 配置文件名
const CONFIG_FILE: &str = "config.json";
/// 默认请求超时（秒）
const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_URL: &str = "RECORD_MANAGER_URL";
pub const ENV_API_KEY: &str = "RECORD_MANAGER_API_KEY";
pub const ENV_TABLE: &str = "RECORD_MANAGER_TABLE";
pub const ENV_BACKEND: &str = "RECORD_MANAGER_BACKEND";

/// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing setting `store.{name}` (config file or {env})")]
    MissingSetting {
        name: &'static str,
        env: &'static str,
    },

    #[error("Unknown store backend '{0}', expected 'supabase' or 'memory'")]
    UnknownBackend(String),

    #[error("Could not determine the user config directory")]
    NoConfigDir,
}

/// 存储后端类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Supabase,
    Memory,
}

impl std::str::FromStr for BackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "supabase" => Ok(Self::Supabase),
            "memory" => Ok(Self::Memory),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

const fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// 存储设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default)]
    pub backend: BackendKind,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            url: String::new(),
            api_key: String::new(),
            table: default_table(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn default_language() -> String {
    "en-US".to_string()
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreSettings,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreSettings::default(),
            language: default_language(),
            theme: Theme::Dark,
        }
    }
}

impl AppConfig {
    /// 转换为 store 配置
    ///
    /// Supabase 后端要求 url 与 api_key 均非空。
    pub fn store_config(&self) -> Result<StoreConfig, ConfigError> {
        let store = &self.store;
        match store.backend {
            BackendKind::Memory => Ok(StoreConfig::Memory {
                table: store.table.clone(),
            }),
            BackendKind::Supabase => {
                if store.url.trim().is_empty() {
                    return Err(ConfigError::MissingSetting {
                        name: "url",
                        env: ENV_URL,
                    });
                }
                if store.api_key.trim().is_empty() {
                    return Err(ConfigError::MissingSetting {
                        name: "api_key",
                        env: ENV_API_KEY,
                    });
                }
                Ok(StoreConfig::Supabase {
                    url: store.url.clone(),
                    api_key: store.api_key.clone(),
                    table: store.table.clone(),
                    timeout_secs: Some(store.timeout_secs),
                })
            }
        }
    }
}

/// 用环境变量覆盖配置
///
/// `lookup` 通常为 `|k| std::env::var(k).ok()`，测试中可替换。空值视为未设置。
pub fn apply_env_overrides(
    config: &mut AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(backend) = get(ENV_BACKEND) {
        config.store.backend = backend.parse()?;
    }
    if let Some(url) = get(ENV_URL) {
        config.store.url = url;
    }
    if let Some(key) = get(ENV_API_KEY) {
        config.store.api_key = key;
    }
    if let Some(table) = get(ENV_TABLE) {
        config.store.table = table;
    }
    Ok(())
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// 基于 JSON 文件的配置服务
pub struct FileConfigService {
    path: PathBuf,
}

impl FileConfigService {
    /// 使用默认路径
    pub fn new() -> Result<Self, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_path(dir.join(APP_DIR).join(CONFIG_FILE)))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 加载配置；首次运行时写出一份默认配置作为模板
    ///
    /// 写入失败只记录警告，仍返回默认配置。
    pub fn load_or_create(&self) -> Result<AppConfig, ConfigError> {
        if self.path.exists() {
            return self.load();
        }
        let config = AppConfig::default();
        match self.save(&config) {
            Ok(()) => log::info!("Wrote default config to {}", self.path.display()),
            Err(e) => log::warn!("Could not write default config: {e}"),
        }
        Ok(config)
    }

    fn io_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ConfigService for FileConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            log::info!(
                "Config file {} not found, using defaults",
                self.path.display()
            );
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }
        let content = serde_json::to_string_pretty(config).map_err(|source| {
            ConfigError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;
        std::fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }
}
