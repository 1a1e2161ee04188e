// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::repositories::media_repository::{MediaError, MediaRepository};

/// 本地媒体目录实现
///
/// 路径由宿主环境提供（抽认卡程序的媒体目录）
pub struct LocalMediaStorage {
    base_path: PathBuf,
}

impl LocalMediaStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// 文件名只能是单个路径段
    fn get_full_path(&self, filename: &str) -> Result<PathBuf, MediaError> {
        let invalid = filename.is_empty()
            || filename == "."
            || filename == ".."
            || filename.contains('/')
            || filename.contains('\\');
        if invalid {
            return Err(MediaError::InvalidFilename(filename.to_string()));
        }
        Ok(self.base_path.join(filename))
    }
}

#[async_trait]
impl MediaRepository for LocalMediaStorage {
    async fn exists(&self, filename: &str) -> Result<bool, MediaError> {
        let full_path = self.get_full_path(filename)?;
        Ok(fs::try_exists(&full_path).await?)
    }

    async fn save(&self, filename: &str, data: &[u8]) -> Result<(), MediaError> {
        let full_path = self.get_full_path(filename)?;

        // 确保目录存在
        fs::create_dir_all(&self.base_path).await?;

        let mut file = fs::File::create(&full_path).await?;
        file.write_all(data).await?;
        file.flush().await?;

        Ok(())
    }
}
