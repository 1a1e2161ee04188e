// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 词源文本处理
//!
//! 站点抓取到的文本在写入笔记字段前需要统一整理

/// 笔记字段中使用的换行标记
pub const LINE_BREAK: &str = "<br>";

/// 注释符号，okjiten用它分隔补充说明
pub const NOTE_MARK: char = '※';

/// 移除所有空白字符（包括全角空格）
pub fn strip_whitespace(text: &str) -> String {
    text.split_whitespace().collect()
}

/// 整理词源说明：去掉空白，并把 `※` 换成换行标记
pub fn normalize_etymology(text: &str) -> String {
    strip_whitespace(text).replace(NOTE_MARK, LINE_BREAK)
}

/// 取释义中的第一个关键词
///
/// 先按 `; ` 截断，再按 `, ` 截断
pub fn first_keyword(definition: &str) -> &str {
    let head = definition.split("; ").next().unwrap_or_default();
    head.split(", ").next().unwrap_or_default()
}

/// 最多保留 `limit` 个以 `; ` 分隔的义项
pub fn limit_senses(meanings: &str, limit: usize) -> String {
    meanings
        .trim()
        .split("; ")
        .take(limit)
        .collect::<Vec<_>>()
        .join("; ")
}

/// 截取两个标记之间的文本
///
/// 两个标记都必须存在，否则返回 `None`
pub fn slice_between<'a>(text: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let start = text.rfind(open)? + open.len();
    let rest = &text[start..];
    let end = rest.find(close)?;
    Some(&rest[..end])
}
