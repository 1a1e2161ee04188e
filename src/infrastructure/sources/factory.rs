// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use tracing::info;

use crate::config::settings::Settings;
use crate::domain::models::etymology::EtymologySourceKind;
use crate::domain::sources::source::EtymologySource;
use crate::engines::resilient_fetcher::ResilientFetcher;
use crate::infrastructure::sources::dong_chinese::DongChineseSource;
use crate::infrastructure::sources::okjiten::OkjitenSource;
use crate::infrastructure::sources::tangorin::TangorinDictionary;
use crate::utils::url_utils::parse_base_url;

/// 按配置创建词源来源
///
/// # 参数
///
/// * `settings` - 应用配置，决定来源类型、站点地址和重试策略
/// * `fetcher` - 共享的重试抓取器
///
/// # 返回值
///
/// * `Ok(Arc<dyn EtymologySource>)` - 创建好的来源
/// * `Err(url::ParseError)` - 配置中的站点地址无效
pub fn create_source(
    settings: &Settings,
    fetcher: Arc<ResilientFetcher>,
) -> Result<Arc<dyn EtymologySource>, url::ParseError> {
    let source: Arc<dyn EtymologySource> = match settings.source.kind {
        EtymologySourceKind::Okjiten => {
            let dictionary = TangorinDictionary::new(
                fetcher.clone(),
                &settings.source.tangorin_base_url,
                settings.retry.page_policy(),
            )?;
            Arc::new(OkjitenSource::new(
                fetcher,
                parse_base_url(&settings.source.okjiten_base_url)?,
                settings.source.okjiten_index_pages.clone(),
                dictionary,
                settings.retry.page_policy(),
            ))
        }
        EtymologySourceKind::DongChinese => Arc::new(DongChineseSource::new(
            fetcher,
            &settings.source.dong_base_url,
            settings.retry.dictionary_policy(),
        )),
    };

    info!("Etymology source: {}", source.kind());
    Ok(source)
}
