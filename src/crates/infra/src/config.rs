use crate::repository::in_memory::artist_index::ArtistIndexRule;
use config::{Config, ConfigError, Environment, File};
use dotenvy::dotenv;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawConfig {
    ignoredarticles: String,
    indexgroups: String,
    /// 分组时优先使用艺术家的 sort_name
    prefer_sort_tags: bool,
    /// 目录快照文件（JSON）
    catalog_path: String,
    /// 未经认证层解析时使用的用户
    default_user: String,
    /// 日志配置
    log: RawLogConfig,
}

/// 日志配置（原始配置）
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawLogConfig {
    /// 日志级别，RUST_LOG 环境变量优先
    level: String,
    /// 日志文件路径
    file: String,
}

impl Default for RawLogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: "app.log".to_string(),
        }
    }
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            ignoredarticles: "The El La Los Las Le Les Os As O A".to_string(),
            indexgroups: "A B C D E F G H I J K L M N O P Q R S T U V W X-Z(XYZ) [Unknown]([)"
                .to_string(),
            prefer_sort_tags: true,
            catalog_path: "./data/catalog.json".to_string(),
            default_user: "admin".to_string(),
            log: RawLogConfig::default(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: String,
    pub file: String,
}

#[derive(Debug, Clone)]
pub struct AppConfigImpl {
    ignoredarticles: String,
    indexgroups: String,
    prefer_sort_tags: bool,
    catalog_path: String,
    default_user: String,
    log: LogConfig,
}

impl AppConfigImpl {
    fn new(data: RawConfig) -> Self {
        AppConfigImpl {
            ignoredarticles: data.ignoredarticles,
            indexgroups: data.indexgroups,
            prefer_sort_tags: data.prefer_sort_tags,
            catalog_path: data.catalog_path,
            default_user: data.default_user,
            log: LogConfig {
                level: data.log.level,
                file: data.log.file,
            },
        }
    }

    /// 读取 ./config.{toml,yaml,json}（可选）和 APP__ 前缀的环境变量，
    /// 例如 APP__CATALOG_PATH、APP__LOG__LEVEL
    pub fn load() -> Result<AppConfigImpl, ConfigError> {
        dotenv().ok();
        Self::build(File::with_name("config").required(false))
    }

    /// 从指定的配置文件读取，环境变量仍然可以覆盖
    pub fn load_from(path: &Path) -> Result<AppConfigImpl, ConfigError> {
        Self::build(File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<AppConfigImpl, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        let raw: RawConfig = config.try_deserialize()?; // serde 自动填充默认值
        Ok(AppConfigImpl::new(raw))
    }

    pub fn indexgroups(&self) -> String {
        self.indexgroups.clone()
    }

    pub fn ignored_articles(&self) -> Vec<String> {
        self.ignoredarticles
            .split_whitespace()
            .map(|s| s.to_string())
            .collect()
    }

    pub fn prefer_sort_tags(&self) -> bool {
        self.prefer_sort_tags
    }

    pub fn catalog_path(&self) -> String {
        self.catalog_path.clone()
    }

    pub fn default_user(&self) -> String {
        self.default_user.clone()
    }

    pub fn log(&self) -> LogConfig {
        self.log.clone()
    }

    pub fn index_rule(&self) -> ArtistIndexRule {
        ArtistIndexRule::new(
            &self.indexgroups,
            self.prefer_sort_tags,
            self.ignored_articles(),
        )
    }
}
