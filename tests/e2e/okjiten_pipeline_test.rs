// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use kanji_etym::application::use_cases::generate_etymology_fields::GenerateEtymologyFieldsUseCase;
use kanji_etym::domain::models::etymology::EtymologySourceKind;
use kanji_etym::domain::models::note::Note;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::helpers::{build_service, media_file, settings_for};

const JOUYOU_INDEX: &str = r#"<html><body><table>
<tr><td><a href="kanji1.html">一</a></td><td><a href="kanji2.html">右</a></td></tr>
</table></body></html>"#;

const HYOUGAI_INDEX: &str = r#"<html><body><table>
<tr><td><a href="kanji32.html">休</a></td></tr>
</table></body></html>"#;

const DETAIL: &str = r#"<html><head><meta charset="Shift_JIS"></head><body><table>
<tr><td colspan="12"><table><tr><td>漢字の成り立ち</td></tr></table></td></tr>
<tr><td colspan="12"><table><tr><td height="100"><img src="kanji-gif/32.gif"></td></tr></table></td></tr>
<tr><td colspan="12"><table><tr><th align="left">
  会意文字。 人と木から休むを表す。 ※旧字は休
</th></tr></table></td></tr>
</table></body></html>"#;

const TANGORIN: &str =
    r#"<html><body><p class="k-meanings">rest; day off; retire; sleep</p></body></html>"#;

const EXPECTED_FIELD: &str = "休(rest; day off; retire) | <img src = \"_okijiten-kanji-gif_32.gif\"> | 会意文字。人と木から休むを表す。<br>旧字は休";

async fn mount_okjiten(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/okjiten/10-jyouyoukanjiitiran.html"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(JOUYOU_INDEX, "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/okjiten/8-jouyoukanjigai.html"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(HYOUGAI_INDEX, "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(server)
        .await;

    let (detail_sjis, _, _) = encoding_rs::SHIFT_JIS.encode(DETAIL);
    Mock::given(method("GET"))
        .and(path("/okjiten/kanji32.html"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(detail_sjis.into_owned(), "text/html; charset=Shift_JIS"),
        )
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tangorin/kanji"))
        .and(query_param("search", "休"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(TANGORIN, "text/html; charset=utf-8"))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/okjiten/kanji-gif/32.gif"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"GIF89a".to_vec(), "image/gif"))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_okjiten_pipeline_fills_notes_and_media() {
    let server = MockServer::start().await;
    mount_okjiten(&server).await;
    let workdir = tempfile::tempdir().unwrap();
    let settings = settings_for(&server, EtymologySourceKind::Okjiten, workdir.path());

    let use_case = GenerateEtymologyFieldsUseCase::new(
        build_service(&settings),
        settings.fields.vocab_field.clone(),
        settings.target_field(),
        false,
    );
    let mut notes = vec![
        Note::new(1)
            .with_field("Vocab", "休む")
            .with_field("Okjiten_Kanji_Etym", ""),
        Note::new(2)
            .with_field("Vocab", "ひらがな")
            .with_field("Okjiten_Kanji_Etym", ""),
    ];

    let summary = use_case.execute(&mut notes).await;

    assert_eq!(summary.message(), "Extraction done for 2 out of 2 notes");
    assert_eq!(summary.updated, 1);
    assert_eq!(notes[0].field("Okjiten_Kanji_Etym"), Some(EXPECTED_FIELD));
    assert_eq!(notes[1].field("Okjiten_Kanji_Etym"), Some(""));

    let image = std::fs::read(media_file(&settings, "_okijiten-kanji-gif_32.gif")).unwrap();
    assert_eq!(image, b"GIF89a");

    let cache = std::fs::read_to_string(&settings.cache.path).unwrap();
    assert!(cache.contains("\"休\": {"));
    assert!(cache.contains("\"source\": \"okjiten\""));
}

#[tokio::test]
async fn test_okjiten_cache_survives_restart_without_network() {
    let server = MockServer::start().await;
    // every route may be hit once in total across both runs
    mount_okjiten(&server).await;
    let workdir = tempfile::tempdir().unwrap();
    let settings = settings_for(&server, EtymologySourceKind::Okjiten, workdir.path());

    let first = build_service(&settings).etymology_for_text("休").await;
    let second = build_service(&settings).etymology_for_text("休み").await;

    assert_eq!(first, EXPECTED_FIELD);
    assert_eq!(second, EXPECTED_FIELD);
    assert!(!first.contains('\n'));
}

#[tokio::test]
async fn test_okjiten_unlisted_character_probes_every_index_page() {
    let server = MockServer::start().await;
    for page in [
        "/okjiten/10-jyouyoukanjiitiran.html",
        "/okjiten/8-jouyoukanjigai.html",
        "/okjiten/9-jinmeiyoukanji.html",
    ] {
        Mock::given(method("GET"))
            .and(path(page))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(JOUYOU_INDEX, "text/html; charset=utf-8"),
            )
            .expect(1)
            .mount(&server)
            .await;
    }
    let workdir = tempfile::tempdir().unwrap();
    let settings = settings_for(&server, EtymologySourceKind::Okjiten, workdir.path());

    let field = build_service(&settings).etymology_for_text("憩").await;

    assert_eq!(field, "");
    let cache = std::fs::read_to_string(&settings.cache.path).unwrap();
    assert!(!cache.contains('憩'));
}
