// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::models::etymology::EtymologyRecord;
use crate::domain::repositories::etymology_cache_repository::{
    CacheError, EtymologyCacheRepository,
};

/// 缓存文件内容：汉字 → 原始JSON条目
///
/// 条目按需逐个解析，无法解析的条目原样保留，写入时不会丢失
type CacheMap = BTreeMap<String, Value>;

/// 损坏文件的备份后缀
const CORRUPT_SUFFIX: &str = "corrupt";

/// JSON文件缓存
///
/// 每次读写都完整加载文件；先读后写且不加锁，
/// 多个进程同时写入可能丢失更新
pub struct JsonFileCache {
    path: PathBuf,
}

impl JsonFileCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 损坏文件的备份路径：`<path>.corrupt`
    pub fn corrupt_backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".");
        name.push(CORRUPT_SUFFIX);
        PathBuf::from(name)
    }

    /// 读取缓存文件；不存在时创建空文件
    ///
    /// 整个文件无法解析时先备份到 `<path>.corrupt`，再按空缓存处理
    async fn load(&self) -> Result<CacheMap, CacheError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Initializing etymology cache at {}", self.path.display());
                let empty = CacheMap::new();
                self.save(&empty).await?;
                return Ok(empty);
            }
            Err(e) => return Err(CacheError::Io(e)),
        };

        match serde_json::from_str::<CacheMap>(&content) {
            Ok(map) => Ok(map),
            Err(e) => {
                let backup = self.corrupt_backup_path();
                warn!(
                    "Etymology cache {} is unreadable, treating as empty (backup at {}): {}",
                    self.path.display(),
                    backup.display(),
                    e
                );
                fs::write(&backup, content).await?;
                Ok(CacheMap::new())
            }
        }
    }

    async fn save(&self, map: &CacheMap) -> Result<(), CacheError> {
        // 确保目录存在
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }

    /// 解析单个条目；`null` 与无法解析的条目都视为未命中
    fn decode(&self, key: &str, value: &Value) -> Option<EtymologyRecord> {
        if value.is_null() {
            return None;
        }
        match serde_json::from_value::<EtymologyRecord>(value.clone()) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(
                    "Skipping malformed cache entry {} in {}: {}",
                    key,
                    self.path.display(),
                    e
                );
                None
            }
        }
    }
}

#[async_trait]
impl EtymologyCacheRepository for JsonFileCache {
    async fn lookup(&self, character: char) -> Result<Option<EtymologyRecord>, CacheError> {
        let map = self.load().await?;
        let key = character.to_string();
        Ok(map.get(&key).and_then(|value| self.decode(&key, value)))
    }

    async fn store(&self, character: char, record: &EtymologyRecord) -> Result<(), CacheError> {
        let mut map = self.load().await?;
        map.insert(character.to_string(), serde_json::to_value(record)?);
        self.save(&map).await
    }

    async fn len(&self) -> Result<usize, CacheError> {
        let map = self.load().await?;
        Ok(map
            .iter()
            .filter(|(key, value)| self.decode(key, value).is_some())
            .count())
    }
}
