// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use kanji_etym::domain::models::etymology::{EtymologyRecord, EtymologySourceKind};
use kanji_etym::domain::repositories::etymology_cache_repository::EtymologyCacheRepository;
use kanji_etym::infrastructure::cache::json_file_cache::JsonFileCache;

#[tokio::test]
async fn test_cache_file_from_previous_run_is_reused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kanji_etymology_cache.json");
    std::fs::write(
        &path,
        r#"{
  "休": {
    "character": "休",
    "definition": "rest",
    "etymology_text": "会意文字",
    "source": "okjiten"
  },
  "夢": null
}"#,
    )
    .unwrap();

    let cache: Arc<dyn EtymologyCacheRepository> = Arc::new(JsonFileCache::new(&path));

    let record = cache.lookup('休').await.unwrap().unwrap();
    assert_eq!(record.definition, "rest");
    assert_eq!(record.image_filename, "");
    assert_eq!(cache.lookup('夢').await.unwrap(), None);
    assert_eq!(cache.len().await.unwrap(), 1);
}

#[tokio::test]
async fn test_two_handles_share_one_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("cache.json");

    let writer = JsonFileCache::new(&path);
    let mut record = EtymologyRecord::new('木', EtymologySourceKind::DongChinese);
    record.etymology_text = "Depicts a tree.".to_string();
    writer.store('木', &record).await.unwrap();

    let reader = JsonFileCache::new(&path);
    assert_eq!(reader.lookup('木').await.unwrap(), Some(record));
}
