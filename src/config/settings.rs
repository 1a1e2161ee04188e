// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::models::etymology::EtymologySourceKind;
use crate::utils::retry_policy::RetryPolicy;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum SettingsError {
    /// 配置源加载或反序列化失败
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    /// 配置值无效
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// 应用程序配置设置
///
/// 包含笔记字段、更新策略、词源来源、缓存、媒体目录、重试和HTTP等配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 笔记字段配置
    pub fields: FieldSettings,
    /// 字段更新策略
    pub update: UpdateSettings,
    /// 词源来源配置
    pub source: SourceSettings,
    /// 缓存配置
    pub cache: CacheSettings,
    /// 媒体目录配置
    pub media: MediaSettings,
    /// 重试配置
    pub retry: RetrySettings,
    /// HTTP客户端配置
    pub http: HttpSettings,
}

/// 笔记字段配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct FieldSettings {
    /// 词汇字段（汉字来源）
    pub vocab_field: String,
    /// okjiten词源目标字段
    pub kanji_etym_field: String,
    /// dong-chinese词源目标字段
    pub dong_kanji_etym_field: String,
}

/// 字段更新策略设置
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSettings {
    /// 目标字段已有内容时是否覆盖
    pub force_update: bool,
    /// 词源条目之间的分隔标记
    pub separator: String,
}

/// 词源来源设置
#[derive(Debug, Clone, Deserialize)]
pub struct SourceSettings {
    /// 使用的词源站点
    pub kind: EtymologySourceKind,
    /// okjiten站点根地址
    pub okjiten_base_url: String,
    /// okjiten索引页（按顺序探测）
    pub okjiten_index_pages: Vec<String>,
    /// dong-chinese字典页前缀
    pub dong_base_url: String,
    /// tangorin汉字查询地址
    pub tangorin_base_url: String,
}

/// 缓存设置
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    /// JSON缓存文件路径
    pub path: PathBuf,
}

/// 媒体目录设置
#[derive(Debug, Clone, Deserialize)]
pub struct MediaSettings {
    /// 图片保存目录
    pub dir: PathBuf,
}

/// 重试设置
#[derive(Debug, Clone, Deserialize)]
pub struct RetrySettings {
    /// 每个请求的最大尝试次数
    pub max_retries: u32,
    /// 抖动幅度（毫秒）
    pub jitter_ms: u64,
    /// okjiten与tangorin页面的基础等待（毫秒）
    pub page_delay_ms: u64,
    /// dong-chinese页面的基础等待（毫秒）
    pub dictionary_delay_ms: u64,
    /// 图片下载的基础等待（毫秒）
    pub image_delay_ms: u64,
}

/// HTTP客户端设置
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    /// 单次请求超时时间（秒）
    pub timeout_secs: u64,
    /// User-Agent
    pub user_agent: String,
}

impl RetrySettings {
    fn policy(&self, delay_ms: u64) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            base_delay: Duration::from_millis(delay_ms),
            jitter: Duration::from_millis(self.jitter_ms),
        }
    }

    /// okjiten索引页、详情页和tangorin使用的重试策略
    pub fn page_policy(&self) -> RetryPolicy {
        self.policy(self.page_delay_ms)
    }

    /// dong-chinese使用的重试策略
    pub fn dictionary_policy(&self) -> RetryPolicy {
        self.policy(self.dictionary_delay_ms)
    }

    /// 图片下载使用的重试策略
    pub fn image_policy(&self) -> RetryPolicy {
        self.policy(self.image_delay_ms)
    }
}

impl HttpSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加：内置默认值、`config/default`、`config/{APP_ENVIRONMENT}`、
    /// 以 `KANJI_ETYM` 为前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(SettingsError)` - 配置加载失败或校验未通过
    pub fn new() -> Result<Self, SettingsError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("KANJI_ETYM").separator("__"));

        Self::finish(builder)
    }

    /// 从指定配置文件加载（文件必须存在），环境变量仍然生效
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let builder = Self::with_defaults()?
            .add_source(File::from(path))
            .add_source(Environment::with_prefix("KANJI_ETYM").separator("__"));

        Self::finish(builder)
    }

    /// 仅使用内置默认值
    pub fn defaults() -> Result<Self, SettingsError> {
        Self::finish(Self::with_defaults()?)
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            // Note fields
            .set_default("fields.vocab_field", "Vocab")?
            .set_default("fields.kanji_etym_field", "Okjiten_Kanji_Etym")?
            .set_default("fields.dong_kanji_etym_field", "Dong_Kanji_Etym")?
            // Update policy
            .set_default("update.force_update", false)?
            .set_default("update.separator", "<pseudo-newline>")?
            // Sources
            .set_default("source.kind", "okjiten")?
            .set_default("source.okjiten_base_url", "https://okjiten.jp/")?
            .set_default(
                "source.okjiten_index_pages",
                vec![
                    "10-jyouyoukanjiitiran.html",
                    "8-jouyoukanjigai.html",
                    "9-jinmeiyoukanji.html",
                ],
            )?
            .set_default(
                "source.dong_base_url",
                "https://www.dong-chinese.com/dictionary/",
            )?
            .set_default("source.tangorin_base_url", "https://tangorin.com/kanji")?
            // Cache and media
            .set_default("cache.path", "kanji_etymology_cache.json")?
            .set_default("media.dir", "./collection.media")?
            // Retry budgets
            .set_default("retry.max_retries", 10)?
            .set_default("retry.jitter_ms", 20)?
            .set_default("retry.page_delay_ms", 80)?
            .set_default("retry.dictionary_delay_ms", 50)?
            .set_default("retry.image_delay_ms", 100)?
            // HTTP client
            .set_default("http.timeout_secs", 15)?
            .set_default(
                "http.user_agent",
                "Mozilla/5.0 (compatible; kanji-etym/0.1)",
            )
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// 校验配置值
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.retry.max_retries == 0 {
            return Err(SettingsError::Invalid(
                "retry.max_retries must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("fields.vocab_field", &self.fields.vocab_field),
            ("fields.kanji_etym_field", &self.fields.kanji_etym_field),
            ("fields.dong_kanji_etym_field", &self.fields.dong_kanji_etym_field),
        ] {
            if value.trim().is_empty() {
                return Err(SettingsError::Invalid(format!("{} must not be empty", name)));
            }
        }
        if self.source.okjiten_index_pages.is_empty() {
            return Err(SettingsError::Invalid(
                "source.okjiten_index_pages must list at least one page".to_string(),
            ));
        }
        Ok(())
    }

    /// 当前词源来源对应的目标字段
    pub fn target_field(&self) -> &str {
        match self.source.kind {
            EtymologySourceKind::Okjiten => &self.fields.kanji_etym_field,
            EtymologySourceKind::DongChinese => &self.fields.dong_kanji_etym_field,
        }
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
