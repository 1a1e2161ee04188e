// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use kanji_etym::config::settings::Settings;
use kanji_etym::domain::models::etymology::EtymologySourceKind;
use kanji_etym::domain::services::etymology_service::EtymologyService;
use kanji_etym::engines::reqwest_engine::ReqwestEngine;
use kanji_etym::engines::resilient_fetcher::ResilientFetcher;
use kanji_etym::infrastructure::cache::json_file_cache::JsonFileCache;
use kanji_etym::infrastructure::sources::factory::create_source;
use kanji_etym::infrastructure::storage::LocalMediaStorage;
use wiremock::MockServer;

/// 指向模拟站点、关闭等待时间的配置
pub fn settings_for(server: &MockServer, kind: EtymologySourceKind, workdir: &Path) -> Settings {
    let mut settings = Settings::defaults().unwrap();
    settings.source.kind = kind;
    settings.source.okjiten_base_url = format!("{}/okjiten/", server.uri());
    settings.source.tangorin_base_url = format!("{}/tangorin/kanji", server.uri());
    settings.source.dong_base_url = format!("{}/dong/dictionary/", server.uri());
    settings.cache.path = workdir.join("kanji_etymology_cache.json");
    settings.media.dir = workdir.join("collection.media");
    settings.retry.max_retries = 2;
    settings.retry.jitter_ms = 0;
    settings.retry.page_delay_ms = 0;
    settings.retry.dictionary_delay_ms = 0;
    settings.retry.image_delay_ms = 0;
    settings
}

/// 与命令行相同的组装方式
pub fn build_service(settings: &Settings) -> Arc<EtymologyService> {
    let engine = Arc::new(ReqwestEngine::new(&settings.http).unwrap());
    let fetcher = Arc::new(ResilientFetcher::new(engine));
    let source = create_source(settings, fetcher.clone()).unwrap();

    Arc::new(EtymologyService::new(
        Arc::new(JsonFileCache::new(settings.cache.path.clone())),
        source,
        fetcher,
        Arc::new(LocalMediaStorage::new(settings.media.dir.clone())),
        settings.retry.image_policy(),
        settings.update.separator.clone(),
    ))
}

pub fn media_file(settings: &Settings, name: &str) -> PathBuf {
    settings.media.dir.join(name)
}
