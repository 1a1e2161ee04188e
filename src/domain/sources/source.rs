// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

use crate::domain::models::etymology::{EtymologyRecord, EtymologySourceKind};

/// 词源站点特质
///
/// 每个站点一种抓取策略，输出契约相同：能找到的字段尽量填充，其余留空
#[async_trait]
pub trait EtymologySource: Send + Sync {
    /// 抓取单个汉字的词源
    ///
    /// 页面无法获取或站点上没有该字时返回 `None`，调用方直接跳过该字
    async fn lookup(&self, character: char) -> Option<EtymologyRecord>;

    /// 来源类型
    fn kind(&self) -> EtymologySourceKind;
}
