// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

/// 媒体存储错误类型
#[derive(Error, Debug)]
pub enum MediaError {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 文件名不合法
    #[error("Invalid media filename: {0}")]
    InvalidFilename(String),
}

/// 媒体仓库特质
///
/// 对应宿主程序的媒体目录
#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// 检查媒体目录中是否已有同名文件
    async fn exists(&self, filename: &str) -> Result<bool, MediaError>;

    /// 保存文件
    async fn save(&self, filename: &str, data: &[u8]) -> Result<(), MediaError>;
}
