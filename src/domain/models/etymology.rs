// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 词源数据来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EtymologySourceKind {
    /// dong-chinese：页面脚本中内嵌JSON
    DongChinese,
    /// okjiten：索引页 + 单字详情页
    Okjiten,
}

impl EtymologySourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EtymologySourceKind::DongChinese => "dong_chinese",
            EtymologySourceKind::Okjiten => "okjiten",
        }
    }
}

impl fmt::Display for EtymologySourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EtymologySourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "okjiten" => Ok(EtymologySourceKind::Okjiten),
            "dong_chinese" | "dong-chinese" | "dong" => Ok(EtymologySourceKind::DongChinese),
            other => Err(format!("unknown etymology source: {}", other)),
        }
    }
}

/// 单个汉字的词源记录
///
/// 除 `character` 与 `source` 外，其余字段都可能为空：
/// 抓取在某一步没有结果是合法的终态
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtymologyRecord {
    /// 汉字本身
    pub character: char,
    /// 简短英文释义
    #[serde(default)]
    pub definition: String,
    /// 词源说明（HTML片段）
    #[serde(default)]
    pub etymology_text: String,
    /// 保存到媒体目录的文件名
    #[serde(default)]
    pub image_filename: String,
    /// 图片的在线地址
    #[serde(default)]
    pub online_image_url: String,
    /// 嵌入笔记字段的图片标签
    #[serde(default)]
    pub embed_markup: String,
    /// 数据来源
    pub source: EtymologySourceKind,
}

impl EtymologyRecord {
    /// 创建只包含汉字和来源的空记录
    pub fn new(character: char, source: EtymologySourceKind) -> Self {
        Self {
            character,
            definition: String::new(),
            etymology_text: String::new(),
            image_filename: String::new(),
            online_image_url: String::new(),
            embed_markup: String::new(),
            source,
        }
    }

    /// 是否引用了需要下载的图片
    pub fn has_image(&self) -> bool {
        !self.online_image_url.is_empty() && !self.image_filename.is_empty()
    }

    /// 笔记字段中的单个条目：`字(释义) | 图片 | 词源`
    pub fn field_entry(&self) -> String {
        format!(
            "{}({}) | {} | {}",
            self.character, self.definition, self.embed_markup, self.etymology_text
        )
    }

    /// 摘要行：`<b>字</b>(释义): 词源<br>`，无释义时只输出 `: `
    pub fn summary_line(&self) -> String {
        let mut line = format!("<b>{}</b>", self.character);
        if self.definition.is_empty() {
            line.push_str(": ");
        } else {
            line.push_str(&format!("({}): ", self.definition));
        }
        line.push_str(&self.etymology_text);
        line.push_str("<br>");
        line
    }
}
