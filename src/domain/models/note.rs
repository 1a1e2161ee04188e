// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 抽认卡笔记
///
/// 宿主程序中的笔记只暴露字段名到字段值的映射
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// 笔记ID
    pub id: i64,
    /// 字段
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl Note {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            fields: BTreeMap::new(),
        }
    }

    /// 设置字段（链式）
    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_string(), value.to_string());
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// 单条笔记的处理错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoteError {
    /// 笔记上不存在该字段
    #[error("note {note_id} has no field named {field}")]
    MissingField { note_id: i64, field: String },
}

/// 单条笔记的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteOutcome {
    /// 目标字段已写入
    Updated,
    /// 目标字段已有内容且未开启强制更新
    KeptExisting,
    /// 词汇字段为空
    EmptySource,
    /// 词汇中没有汉字
    NoKanji,
    /// 没有找到任何词源
    NoEtymology,
}

/// 一次批处理的汇总
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// 笔记总数
    pub total: usize,
    /// 处理完成的笔记数（出错的笔记不计入）
    pub completed: usize,
    /// 目标字段被写入的笔记数
    pub updated: usize,
    /// 出错的笔记及错误信息
    pub failures: Vec<(i64, String)>,
}

impl BatchSummary {
    /// 面向用户的汇总信息
    pub fn message(&self) -> String {
        format!(
            "Extraction done for {} out of {} notes",
            self.completed, self.total
        )
    }
}
