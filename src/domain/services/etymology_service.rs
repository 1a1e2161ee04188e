// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::models::etymology::{EtymologyRecord, EtymologySourceKind};
use crate::domain::repositories::etymology_cache_repository::EtymologyCacheRepository;
use crate::domain::repositories::media_repository::MediaRepository;
use crate::domain::sources::source::EtymologySource;
use crate::engines::resilient_fetcher::ResilientFetcher;
use crate::utils::kanji::extract_kanji;
use crate::utils::retry_policy::RetryPolicy;

/// 词源编排服务
///
/// 逐字处理：先查缓存，未命中时调用词源来源，成功后写缓存并下载图片。
/// 任何一步失败都只影响当前汉字
pub struct EtymologyService {
    /// 词源缓存
    cache: Arc<dyn EtymologyCacheRepository>,
    /// 当前选用的词源来源
    source: Arc<dyn EtymologySource>,
    /// 图片下载使用的抓取器
    fetcher: Arc<ResilientFetcher>,
    /// 媒体目录
    media: Arc<dyn MediaRepository>,
    /// 图片下载的重试策略
    image_policy: RetryPolicy,
    /// okjiten条目之间的分隔标记
    separator: String,
}

impl EtymologyService {
    /// 创建词源编排服务
    ///
    /// # 参数
    ///
    /// * `cache` - 词源缓存
    /// * `source` - 词源来源
    /// * `fetcher` - 图片下载使用的抓取器
    /// * `media` - 媒体目录
    /// * `image_policy` - 图片下载的重试策略
    /// * `separator` - 字段中条目之间的分隔标记
    pub fn new(
        cache: Arc<dyn EtymologyCacheRepository>,
        source: Arc<dyn EtymologySource>,
        fetcher: Arc<ResilientFetcher>,
        media: Arc<dyn MediaRepository>,
        image_policy: RetryPolicy,
        separator: impl Into<String>,
    ) -> Self {
        Self {
            cache,
            source,
            fetcher,
            media,
            image_policy,
            separator: separator.into(),
        }
    }

    /// 按顺序解析每个汉字的词源
    ///
    /// 没有结果的汉字被跳过，因此返回的记录数不超过输入的汉字数
    pub async fn resolve(&self, characters: &[char]) -> Vec<EtymologyRecord> {
        let mut records = Vec::with_capacity(characters.len());

        for &character in characters {
            if let Some(record) = self.cached(character).await {
                debug!("Cache hit for {}", character);
                records.push(record);
                continue;
            }

            let Some(record) = self.source.lookup(character).await else {
                debug!("No etymology for {} from {}", character, self.source.kind());
                continue;
            };

            if let Err(e) = self.cache.store(character, &record).await {
                warn!("Failed to cache etymology for {}: {}", character, e);
            }
            if record.has_image() {
                self.download_image(&record.online_image_url, &record.image_filename)
                    .await;
            }

            records.push(record);
        }

        records
    }

    /// 来源一致的缓存记录才算命中
    async fn cached(&self, character: char) -> Option<EtymologyRecord> {
        match self.cache.lookup(character).await {
            Ok(Some(record)) if record.source == self.source.kind() => Some(record),
            Ok(Some(record)) => {
                debug!(
                    "Cached {} came from {}, scraping {} instead",
                    character,
                    record.source,
                    self.source.kind()
                );
                None
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Cache lookup for {} failed: {}", character, e);
                None
            }
        }
    }

    /// 下载图片到媒体目录
    ///
    /// 同名文件已存在时不再下载；失败只记录日志
    ///
    /// # 返回值
    ///
    /// 图片是否已在媒体目录中
    pub async fn download_image(&self, url: &str, filename: &str) -> bool {
        match self.media.exists(filename).await {
            Ok(true) => {
                debug!("Image {} already present", filename);
                return true;
            }
            Ok(false) => {}
            Err(e) => {
                warn!("Cannot check media file {}: {}", filename, e);
                return false;
            }
        }

        let Some(bytes) = self.fetcher.fetch_bytes(url, &self.image_policy).await else {
            warn!("Could not download image {}", url);
            return false;
        };

        match self.media.save(filename, &bytes).await {
            Ok(()) => {
                info!("Saved image {} ({} bytes)", filename, bytes.len());
                true
            }
            Err(e) => {
                warn!("Failed to save image {}: {}", filename, e);
                false
            }
        }
    }

    /// 把记录组装为笔记字段的内容
    pub fn render_field(&self, records: &[EtymologyRecord]) -> String {
        match self.source.kind() {
            EtymologySourceKind::Okjiten => records
                .iter()
                .map(EtymologyRecord::field_entry)
                .collect::<Vec<_>>()
                .join(self.separator.as_str())
                .replace("\\n", "")
                .replace('\n', "")
                .trim()
                .to_string(),
            EtymologySourceKind::DongChinese => records
                .iter()
                .map(EtymologyRecord::summary_line)
                .collect(),
        }
    }

    /// 从任意文本提取汉字并生成字段内容
    pub async fn etymology_for_text(&self, text: &str) -> String {
        let characters = extract_kanji(text);
        let records = self.resolve(&characters).await;
        self.render_field(&records)
    }
}

#[cfg(test)]
#[path = "etymology_service_test.rs"]
mod tests;
