// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::models::note::{BatchSummary, Note, NoteError, NoteOutcome};
use crate::domain::services::etymology_service::EtymologyService;
use crate::utils::kanji::extract_kanji;

/// 批量生成笔记词源字段的用例
///
/// 笔记逐条处理；单条笔记出错只记入汇总，不会中断批处理
pub struct GenerateEtymologyFieldsUseCase {
    service: Arc<EtymologyService>,
    source_field: String,
    target_field: String,
    force_update: bool,
}

impl GenerateEtymologyFieldsUseCase {
    /// 创建用例
    ///
    /// # 参数
    ///
    /// * `service` - 词源编排服务
    /// * `source_field` - 读取汉字的词汇字段
    /// * `target_field` - 写入词源的字段
    /// * `force_update` - 是否覆盖已有内容
    pub fn new(
        service: Arc<EtymologyService>,
        source_field: impl Into<String>,
        target_field: impl Into<String>,
        force_update: bool,
    ) -> Self {
        Self {
            service,
            source_field: source_field.into(),
            target_field: target_field.into(),
            force_update,
        }
    }

    /// 处理一批笔记
    pub async fn execute(&self, notes: &mut [Note]) -> BatchSummary {
        let mut summary = BatchSummary {
            total: notes.len(),
            ..Default::default()
        };
        info!(
            "Generating {} for {} notes",
            self.target_field, summary.total
        );

        for note in notes.iter_mut() {
            match self.process_note(note).await {
                Ok(outcome) => {
                    debug!("Note {}: {:?}", note.id, outcome);
                    summary.completed += 1;
                    if outcome == NoteOutcome::Updated {
                        summary.updated += 1;
                    }
                }
                Err(e) => {
                    error!("Failed to process note {}: {}", note.id, e);
                    summary.failures.push((note.id, e.to_string()));
                }
            }
        }

        info!("{}", summary.message());
        summary
    }

    /// 处理单条笔记
    ///
    /// 词源在检查目标字段之前抓取，因此即使保留旧内容，缓存也会被填充
    pub async fn process_note(&self, note: &mut Note) -> Result<NoteOutcome, NoteError> {
        let note_id = note.id;
        let vocab = note
            .field(&self.source_field)
            .ok_or_else(|| NoteError::MissingField {
                note_id,
                field: self.source_field.clone(),
            })?;
        if vocab.trim().is_empty() {
            return Ok(NoteOutcome::EmptySource);
        }

        let characters = extract_kanji(vocab);
        if characters.is_empty() {
            return Ok(NoteOutcome::NoKanji);
        }

        let records = self.service.resolve(&characters).await;
        let rendered = self.service.render_field(&records);
        if rendered.is_empty() {
            return Ok(NoteOutcome::NoEtymology);
        }

        let target = note
            .fields
            .get_mut(&self.target_field)
            .ok_or_else(|| NoteError::MissingField {
                note_id,
                field: self.target_field.clone(),
            })?;

        if !self.force_update && !target.is_empty() {
            return Ok(NoteOutcome::KeptExisting);
        }

        *target = rendered;
        Ok(NoteOutcome::Updated)
    }
}
