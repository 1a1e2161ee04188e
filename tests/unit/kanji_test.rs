// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use kanji_etym::utils::kanji::{extract_kanji, is_kanji};

#[test]
fn test_extracts_unique_kanji_in_order() {
    assert_eq!(
        extract_kanji("自業自得だと思わないか！夢"),
        vec!['自', '業', '得', '思', '夢']
    );
}

#[test]
fn test_no_kanji_in_latin_or_kana() {
    assert!(extract_kanji("").is_empty());
    assert!(extract_kanji("kanji etymology").is_empty());
    assert!(extract_kanji("ひらがなとカタカナ").is_empty());
}

#[test]
fn test_extension_blocks_are_ignored() {
    // U+3400 (extension A) sits below the unified block
    assert!(!is_kanji('\u{3400}'));
    assert!(is_kanji('一'));
}
