// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use crate::domain::models::etymology::{EtymologyRecord, EtymologySourceKind};
use crate::domain::sources::source::EtymologySource;
use crate::engines::resilient_fetcher::ResilientFetcher;
use crate::infrastructure::sources::tangorin::TangorinDictionary;
use crate::utils::retry_policy::RetryPolicy;
use crate::utils::text_processing::normalize_etymology;
use crate::utils::url_utils::resolve_url;

/// 本地图片文件名前缀，防止媒体目录清理未引用的文件
pub const IMAGE_FILENAME_PREFIX: &str = "_okijiten-";

/// 汉字构成分类，用于识别备用的词源行
pub const KANJI_CLASSES: [&str; 6] = [
    "象形文字",
    "指事文字",
    "会意文字",
    "会意兼形声文字",
    "形声文字",
    "国字",
];

/// 没有 `th` 时词源文本通常所在的行
const FALLBACK_ROW_INDEX: usize = 8;
/// 详情页至少包含的区块数
const MIN_TABLES: usize = 3;
/// 词源文本所在的区块
const ETYMOLOGY_TABLE_INDEX: usize = 2;

/// 索引页中指向单字详情页的链接
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexAnchor {
    pub href: Option<String>,
}

/// 汉字索引页
pub struct OkjitenIndexPage {
    document: Html,
}

impl OkjitenIndexPage {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// 查找文本恰好为该汉字的 `<a>`
    pub fn find_anchor(&self, character: char) -> Option<IndexAnchor> {
        let selector = Selector::parse("a").ok()?;
        let mut buf = [0u8; 4];
        let needle = character.encode_utf8(&mut buf);

        self.document
            .select(&selector)
            .find(|anchor| anchor.text().collect::<String>().trim() == needle)
            .map(|anchor| IndexAnchor {
                href: anchor.value().attr("href").map(str::to_string),
            })
    }
}

/// 详情页抽取结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailExtract {
    /// 字源图片的 `src`
    pub image_src: Option<String>,
    /// 整理后的词源说明
    pub etymology_text: String,
}

/// 单字详情页
pub struct OkjitenDetailPage {
    document: Html,
}

impl OkjitenDetailPage {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// 所有 `td[colspan="12"]` 区块
    pub fn find_tables(&self) -> Vec<ElementRef<'_>> {
        match Selector::parse(r#"td[colspan="12"]"#) {
            Ok(selector) => self.document.select(&selector).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// 按区块顺序找到第一个 `td[height="100"]`，取其中第一张图片
    pub fn find_illustration_src(&self, tables: &[ElementRef<'_>]) -> Option<String> {
        let cell_selector = Selector::parse(r#"td[height="100"]"#).ok()?;
        let img_selector = Selector::parse("img").ok()?;

        let cell = tables
            .iter()
            .find_map(|table| table.select(&cell_selector).next())?;
        let src = cell
            .select(&img_selector)
            .next()?
            .value()
            .attr("src")?
            .trim();

        if src.is_empty() {
            None
        } else {
            Some(src.to_string())
        }
    }

    /// 区块中 `th[align="left"]` 的文本
    pub fn find_header_cell(&self, table: ElementRef<'_>) -> Option<String> {
        let selector = Selector::parse(r#"th[align="left"]"#).ok()?;
        table
            .select(&selector)
            .next()
            .map(|th| th.text().collect())
    }

    /// 备用位置的行，只在包含汉字构成分类时采用
    pub fn find_classified_row(&self, table: ElementRef<'_>) -> Option<String> {
        let selector = Selector::parse("tr").ok()?;
        let text: String = table
            .select(&selector)
            .nth(FALLBACK_ROW_INDEX)?
            .text()
            .collect();

        if KANJI_CLASSES.iter().any(|class| text.contains(class)) {
            Some(text)
        } else {
            None
        }
    }

    /// 组合各步骤；区块不足三个时返回 `None`
    pub fn extract(&self) -> Option<DetailExtract> {
        let tables = self.find_tables();
        if tables.len() < MIN_TABLES {
            debug!("Detail page has {} tables, expected {}", tables.len(), MIN_TABLES);
            return None;
        }

        let main_body = tables[ETYMOLOGY_TABLE_INDEX];
        let etymology_text = self
            .find_header_cell(main_body)
            .or_else(|| self.find_classified_row(main_body))
            .map(|text| normalize_etymology(&text))
            .unwrap_or_default();

        Some(DetailExtract {
            image_src: self.find_illustration_src(&tables),
            etymology_text,
        })
    }
}

/// 本地文件名：前缀加上扁平化后的 `src`
pub fn image_filename(src: &str) -> String {
    let flattened: String = src
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("{}{}", IMAGE_FILENAME_PREFIX, flattened)
}

/// 笔记中的图片标签
pub fn embed_markup(filename: &str) -> String {
    format!("<img src = \"{}\">", filename)
}

fn anchor_in_index(html: &str, character: char) -> Option<IndexAnchor> {
    OkjitenIndexPage::parse(html).find_anchor(character)
}

fn extract_detail(html: &str) -> Option<DetailExtract> {
    OkjitenDetailPage::parse(html).extract()
}

/// okjiten词源来源
pub struct OkjitenSource {
    fetcher: Arc<ResilientFetcher>,
    base_url: Url,
    index_pages: Vec<String>,
    dictionary: TangorinDictionary,
    policy: RetryPolicy,
}

impl OkjitenSource {
    pub fn new(
        fetcher: Arc<ResilientFetcher>,
        base_url: Url,
        index_pages: Vec<String>,
        dictionary: TangorinDictionary,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            fetcher,
            base_url,
            index_pages,
            dictionary,
            policy,
        }
    }

    /// 按顺序探测索引页，返回详情页的相对地址
    async fn locate(&self, character: char) -> Option<String> {
        for page in &self.index_pages {
            let index_url = match resolve_url(&self.base_url, page) {
                Ok(url) => url,
                Err(e) => {
                    debug!("Skipping index page {}: {}", page, e);
                    continue;
                }
            };
            let Some(html) = self.fetcher.fetch_text(index_url.as_str(), &self.policy).await
            else {
                continue;
            };

            if let Some(anchor) = anchor_in_index(&html, character) {
                debug!("Found {} on {}", character, index_url);
                if anchor.href.is_none() {
                    debug!("Anchor for {} has no href", character);
                }
                return anchor.href;
            }
        }

        debug!("{} is not listed on any okjiten index page", character);
        None
    }

    fn build_record(
        &self,
        character: char,
        extract: DetailExtract,
        definition: String,
    ) -> EtymologyRecord {
        let mut record = EtymologyRecord::new(character, EtymologySourceKind::Okjiten);
        record.definition = definition;
        record.etymology_text = extract.etymology_text;

        if let Some(src) = extract.image_src {
            match resolve_url(&self.base_url, &src) {
                Ok(url) => {
                    record.image_filename = image_filename(&src);
                    record.embed_markup = embed_markup(&record.image_filename);
                    record.online_image_url = url.to_string();
                }
                Err(e) => debug!("Unusable image src {} for {}: {}", src, character, e),
            }
        }

        record
    }
}

#[async_trait]
impl EtymologySource for OkjitenSource {
    async fn lookup(&self, character: char) -> Option<EtymologyRecord> {
        let href = self.locate(character).await?;
        let detail_url = match resolve_url(&self.base_url, &href) {
            Ok(url) => url,
            Err(e) => {
                debug!("Bad detail href {} for {}: {}", href, character, e);
                return None;
            }
        };

        let html = self
            .fetcher
            .fetch_text(detail_url.as_str(), &self.policy)
            .await?;
        let Some(extract) = extract_detail(&html) else {
            debug!("Skipping {}: detail page {} is incomplete", character, detail_url);
            return None;
        };

        let definition = self.dictionary.definition(character).await;
        Some(self.build_record(character, extract, definition))
    }

    fn kind(&self) -> EtymologySourceKind {
        EtymologySourceKind::Okjiten
    }
}

#[cfg(test)]
#[path = "okjiten_test.rs"]
mod tests;
