// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

use crate::engines::resilient_fetcher::ResilientFetcher;
use crate::utils::retry_policy::RetryPolicy;
use crate::utils::text_processing::limit_senses;

/// 保留的英文义项数量
pub const MAX_SENSES: usize = 3;

/// tangorin汉字释义查询
pub struct TangorinDictionary {
    fetcher: Arc<ResilientFetcher>,
    base_url: Url,
    policy: RetryPolicy,
}

impl TangorinDictionary {
    pub fn new(
        fetcher: Arc<ResilientFetcher>,
        base_url: &str,
        policy: RetryPolicy,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            fetcher,
            base_url: Url::parse(base_url)?,
            policy,
        })
    }

    /// 获取汉字的简短英文释义，找不到时返回空字符串
    pub async fn definition(&self, character: char) -> String {
        let url = lookup_url(&self.base_url, character);
        let Some(html) = self.fetcher.fetch_text(url.as_str(), &self.policy).await else {
            return String::new();
        };

        parse_meanings(&html).unwrap_or_else(|| {
            debug!("No meanings block for {} on tangorin", character);
            String::new()
        })
    }
}

/// 查询地址：`{base}?search={字}`
pub fn lookup_url(base_url: &Url, character: char) -> Url {
    let mut url = base_url.clone();
    url.query_pairs_mut()
        .append_pair("search", &character.to_string());
    url
}

/// 解析 `p.k-meanings`，最多保留三个义项
pub fn parse_meanings(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("p.k-meanings").ok()?;
    let meanings = document
        .select(&selector)
        .next()?
        .text()
        .collect::<String>();

    Some(limit_senses(&meanings, MAX_SENSES))
}
