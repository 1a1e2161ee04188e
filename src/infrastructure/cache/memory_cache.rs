// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::models::etymology::EtymologyRecord;
use crate::domain::repositories::etymology_cache_repository::{
    CacheError, EtymologyCacheRepository,
};

/// 内存缓存
///
/// 进程结束即丢失，用于测试和 `--no-cache` 运行
#[derive(Default)]
pub struct InMemoryCache {
    entries: RwLock<HashMap<char, EtymologyRecord>>,
    writes: AtomicUsize,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 累计写入次数
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EtymologyCacheRepository for InMemoryCache {
    async fn lookup(&self, character: char) -> Result<Option<EtymologyRecord>, CacheError> {
        Ok(self.entries.read().await.get(&character).cloned())
    }

    async fn store(&self, character: char, record: &EtymologyRecord) -> Result<(), CacheError> {
        self.entries.write().await.insert(character, record.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn len(&self) -> Result<usize, CacheError> {
        Ok(self.entries.read().await.len())
    }
}
