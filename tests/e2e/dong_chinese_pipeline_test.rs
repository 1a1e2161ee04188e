// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use kanji_etym::application::use_cases::generate_etymology_fields::GenerateEtymologyFieldsUseCase;
use kanji_etym::domain::models::etymology::EtymologySourceKind;
use kanji_etym::domain::models::note::Note;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::helpers::{build_service, settings_for};

const TREE_PAGE: &str = r#"<html><body>
<div class="MuiGrid-root MuiGrid-item MuiGrid-grid-xs-12" style="padding:8px"><span><span><span>tree; wood</span></span><a href="/dictionary/search/tree">tree</a></span></div>
<script>window["__sink__charData_木"]={"char":"木","hint":"Depicts a tree.","components":[{"character":"木","type":["iconic"],"hint":null}]};</script>
</body></html>"#;

const NOT_FOUND_PAGE: &str = r#"<html><body>
<script>window["__sink__charData_夢"]={"error":"Word not found"};</script>
</body></html>"#;

#[tokio::test]
async fn test_dong_chinese_pipeline_writes_summary_lines() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dong/dictionary/%E6%9C%A8"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(TREE_PAGE, "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/dong/dictionary/%E5%A4%A2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(NOT_FOUND_PAGE, "text/html; charset=utf-8"),
        )
        .expect(2)
        .mount(&server)
        .await;

    let workdir = tempfile::tempdir().unwrap();
    let settings = settings_for(&server, EtymologySourceKind::DongChinese, workdir.path());
    assert_eq!(settings.target_field(), "Dong_Kanji_Etym");

    let use_case = GenerateEtymologyFieldsUseCase::new(
        build_service(&settings),
        settings.fields.vocab_field.clone(),
        settings.target_field(),
        false,
    );
    let mut notes = vec![
        Note::new(10)
            .with_field("Vocab", "木と夢")
            .with_field("Dong_Kanji_Etym", ""),
        Note::new(11)
            .with_field("Vocab", "夢")
            .with_field("Dong_Kanji_Etym", ""),
    ];

    let summary = use_case.execute(&mut notes).await;

    assert_eq!(summary.completed, 2);
    assert_eq!(summary.updated, 1);
    assert_eq!(
        notes[0].field("Dong_Kanji_Etym"),
        Some("<b>木</b>(tree): Depicts a tree. [木-iconic-]<br>")
    );
    // a character the site does not know is looked up again on the next note
    assert_eq!(notes[1].field("Dong_Kanji_Etym"), Some(""));
}
