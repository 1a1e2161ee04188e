// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use kanji_etym::application::use_cases::generate_etymology_fields::GenerateEtymologyFieldsUseCase;
use kanji_etym::config::settings::Settings;
use kanji_etym::domain::models::etymology::EtymologySourceKind;
use kanji_etym::domain::models::note::Note;
use kanji_etym::domain::repositories::etymology_cache_repository::EtymologyCacheRepository;
use kanji_etym::domain::services::etymology_service::EtymologyService;
use kanji_etym::engines::reqwest_engine::ReqwestEngine;
use kanji_etym::engines::resilient_fetcher::ResilientFetcher;
use kanji_etym::infrastructure::cache::json_file_cache::JsonFileCache;
use kanji_etym::infrastructure::cache::memory_cache::InMemoryCache;
use kanji_etym::infrastructure::sources::factory::create_source;
use kanji_etym::infrastructure::storage::LocalMediaStorage;
use kanji_etym::utils::telemetry;
use tracing::info;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// 配置文件（默认读取 config/default.toml）
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// 词源来源：okjiten 或 dong_chinese
    #[arg(short, long, global = true)]
    source: Option<EtymologySourceKind>,

    /// 只在内存中缓存，不读写缓存文件
    #[arg(long, global = true)]
    no_cache: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 打印一段文本中汉字的词源字段
    Text {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// 为JSON笔记文件中的每条笔记生成词源字段（原地写回）
    Notes {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// 覆盖已有内容
        #[arg(short, long)]
        force: bool,
    },
}

/// 主函数
///
/// 加载配置，组装抓取器、词源来源、缓存和媒体目录，然后执行子命令
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Settings::new()?,
    };
    if let Some(kind) = cli.source {
        settings.source.kind = kind;
    }
    info!("Configuration loaded, source {}", settings.source.kind);

    let engine = Arc::new(ReqwestEngine::new(&settings.http)?);
    let fetcher = Arc::new(ResilientFetcher::new(engine));
    let source = create_source(&settings, fetcher.clone())?;
    let cache: Arc<dyn EtymologyCacheRepository> = if cli.no_cache {
        Arc::new(InMemoryCache::new())
    } else {
        Arc::new(JsonFileCache::new(settings.cache.path.clone()))
    };
    let media = Arc::new(LocalMediaStorage::new(settings.media.dir.clone()));

    let service = Arc::new(EtymologyService::new(
        cache.clone(),
        source,
        fetcher,
        media,
        settings.retry.image_policy(),
        settings.update.separator.clone(),
    ));

    match cli.command {
        Command::Text { text } => {
            let field = service.etymology_for_text(&text.join(" ")).await;
            println!("{}", field);
        }
        Command::Notes { file, force } => {
            let content = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("reading {}", file.display()))?;
            let mut notes: Vec<Note> = serde_json::from_str(&content)
                .with_context(|| format!("parsing notes in {}", file.display()))?;

            let use_case = GenerateEtymologyFieldsUseCase::new(
                service,
                settings.fields.vocab_field.clone(),
                settings.target_field(),
                force || settings.update.force_update,
            );
            let summary = use_case.execute(&mut notes).await;

            tokio::fs::write(&file, serde_json::to_string_pretty(&notes)?)
                .await
                .with_context(|| format!("writing {}", file.display()))?;
            println!("{}", summary.message());
        }
    }

    match cache.len().await {
        Ok(count) => info!("Etymology cache holds {} characters", count),
        Err(e) => info!("Etymology cache size unavailable: {}", e),
    }

    Ok(())
}
