// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};

/// 将可能为相对路径的URL转换为绝对路径URL
pub fn resolve_url(base_url: &Url, path: &str) -> Result<Url, ParseError> {
    base_url.join(path)
}

/// 解析站点根地址，确保以 `/` 结尾以便拼接相对路径
pub fn parse_base_url(raw: &str) -> Result<Url, ParseError> {
    if raw.ends_with('/') {
        Url::parse(raw)
    } else {
        Url::parse(&format!("{}/", raw))
    }
}

/// 拼接路径段，汉字按 UTF-8 百分号编码
pub fn encoded_path(prefix: &str, character: char) -> String {
    format!("{}{}", prefix, urlencoding::encode(&character.to_string()))
}
