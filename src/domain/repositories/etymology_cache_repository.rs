// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::etymology::EtymologyRecord;

/// 缓存错误类型
#[derive(Error, Debug)]
pub enum CacheError {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 序列化错误
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 词源缓存仓库特质
///
/// 以汉字为键的持久化存储，不淘汰、不过期
#[async_trait]
pub trait EtymologyCacheRepository: Send + Sync {
    /// 查询汉字的缓存记录；存储不存在时先初始化为空，损坏时视为未命中
    async fn lookup(&self, character: char) -> Result<Option<EtymologyRecord>, CacheError>;

    /// 写入（覆盖）汉字的记录
    async fn store(&self, character: char, record: &EtymologyRecord) -> Result<(), CacheError>;

    /// 已缓存的汉字数量
    async fn len(&self) -> Result<usize, CacheError>;
}
