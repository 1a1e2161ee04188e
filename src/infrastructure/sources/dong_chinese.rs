// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use async_trait::async_trait;
use scraper::{Html, Selector};
use serde_json::Value;
use tracing::debug;

use crate::domain::models::etymology::{EtymologyRecord, EtymologySourceKind};
use crate::domain::sources::source::EtymologySource;
use crate::engines::resilient_fetcher::ResilientFetcher;
use crate::utils::retry_policy::RetryPolicy;
use crate::utils::text_processing::{first_keyword, slice_between};
use crate::utils::url_utils::encoded_path;

/// 依次定位内嵌JSON的标记，每次取最后一次出现之后的文本
const CHAR_DATA_MARKERS: [&str; 3] = ["<script>window[\"", "__sink__charData_", "]="];
/// JSON赋值语句的结尾
const SCRIPT_END: &str = ";</script>";
/// 站点没有该字时的错误标记
pub const WORD_NOT_FOUND: &str = "\"error\":\"Word not found\"";

const DEFINITION_BLOCK: &str =
    r#"div.MuiGrid-root.MuiGrid-item.MuiGrid-grid-xs-12[style="padding:8px"]"#;
const DEFINITION_OPEN: &str = "<span><span><span>";
const DEFINITION_CLOSE: &str = "</span></span><a href=";

/// dong-chinese词源来源
pub struct DongChineseSource {
    fetcher: Arc<ResilientFetcher>,
    base_url: String,
    policy: RetryPolicy,
}

impl DongChineseSource {
    pub fn new(fetcher: Arc<ResilientFetcher>, base_url: &str, policy: RetryPolicy) -> Self {
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        Self {
            fetcher,
            base_url,
            policy,
        }
    }

    /// 字典页地址
    pub fn page_url(&self, character: char) -> String {
        encoded_path(&self.base_url, character)
    }
}

#[async_trait]
impl EtymologySource for DongChineseSource {
    async fn lookup(&self, character: char) -> Option<EtymologyRecord> {
        let html = self
            .fetcher
            .fetch_text(&self.page_url(character), &self.policy)
            .await?;

        let record = parse_entry(character, &html);
        if record.is_none() {
            debug!("{} not found on dong-chinese", character);
        }
        record
    }

    fn kind(&self) -> EtymologySourceKind {
        EtymologySourceKind::DongChinese
    }
}

/// 从页面源码中切出字数据JSON
pub fn slice_char_data(html: &str) -> &str {
    let tail = CHAR_DATA_MARKERS.iter().fold(html, |text, marker| {
        text.rsplit_once(marker).map(|(_, rest)| rest).unwrap_or(text)
    });
    tail.split(SCRIPT_END).next().unwrap_or(tail)
}

/// 解析字数据；站点报告未收录或JSON无法解析时返回 `None`
pub fn parse_char_data(html: &str) -> Option<Value> {
    let slice = slice_char_data(html);
    if slice.contains(WORD_NOT_FOUND) {
        return None;
    }
    match serde_json::from_str(slice) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("Embedded char data is not valid JSON: {}", e);
            None
        }
    }
}

/// JSON值的展示文本
///
/// `null` 输出为空串，数组以 `,` 连接（如 `iconic,distinguishing`）；
/// 旧版插件生成的字段中对应位置是 `None` 与 `['iconic']` 形式
fn value_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| value_text(Some(item)))
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(","),
        Some(other) => other.to_string(),
    }
}

/// 词源文本：`hint` 后接每个部件 ` [字-类型-提示]`
pub fn render_etymology(data: &Value) -> String {
    let mut text = value_text(data.get("hint"));

    if let Some(Value::Array(components)) = data.get("components") {
        for component in components {
            text.push_str(&format!(
                " [{}-{}-{}]",
                value_text(component.get("character")),
                value_text(component.get("type")),
                value_text(component.get("hint"))
            ));
        }
    }

    text
}

/// 从释义区块中按位置切出第一个关键词
pub fn parse_definition(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(DEFINITION_BLOCK).ok()?;
    let block = document.select(&selector).next()?.html();

    let definition = slice_between(&block, DEFINITION_OPEN, DEFINITION_CLOSE)?;
    let keyword = first_keyword(definition).trim();
    if keyword.is_empty() {
        None
    } else {
        Some(keyword.to_string())
    }
}

/// 解析整页为词源记录
pub fn parse_entry(character: char, html: &str) -> Option<EtymologyRecord> {
    let data = parse_char_data(html)?;

    let mut record = EtymologyRecord::new(character, EtymologySourceKind::DongChinese);
    record.definition = parse_definition(html).unwrap_or_default();
    record.etymology_text = render_etymology(&data);
    Some(record)
}
