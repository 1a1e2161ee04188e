// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashSet;

/// CJK统一表意文字基本区的起点
pub const KANJI_RANGE_START: char = '\u{4E00}';
/// CJK统一表意文字基本区的终点
pub const KANJI_RANGE_END: char = '\u{9FFF}';

/// 判断字符是否位于 U+4E00–U+9FFF
pub fn is_kanji(c: char) -> bool {
    (KANJI_RANGE_START..=KANJI_RANGE_END).contains(&c)
}

/// 从任意文本中提取汉字
///
/// 按首次出现的顺序返回去重后的汉字，假名、拉丁字母和标点全部丢弃
///
/// # 参数
///
/// * `text` - 词汇文本，可以为空
///
/// # 返回值
///
/// 有序且无重复的汉字列表
pub fn extract_kanji(text: &str) -> Vec<char> {
    let mut seen = HashSet::new();
    text.chars()
        .filter(|c| is_kanji(*c))
        .filter(|c| seen.insert(*c))
        .collect()
}
