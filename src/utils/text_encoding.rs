// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use tracing::debug;

/// 从 Content-Type 中读取 charset
pub fn charset_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    content_type
        .split(';')
        .map(str::trim)
        .find_map(|part| {
            let (key, value) = part.split_once('=')?;
            if key.trim().eq_ignore_ascii_case("charset") {
                Some(value.trim().trim_matches('"'))
            } else {
                None
            }
        })
        .and_then(|label| Encoding::for_label(label.as_bytes()))
}

/// 将响应体解码为UTF-8字符串
///
/// 优先使用响应头声明的编码；否则若内容本身是合法UTF-8则直接使用；
/// 最后交给 chardetng 检测（日文站点可能仍在使用 Shift_JIS）
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(encoding) = content_type.and_then(charset_from_content_type) {
        let (decoded, _, _) = encoding.decode(body);
        return decoded.into_owned();
    }

    if let Ok(text) = std::str::from_utf8(body) {
        return text.to_string();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    debug!("Detected body encoding: {}", encoding.name());

    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}
