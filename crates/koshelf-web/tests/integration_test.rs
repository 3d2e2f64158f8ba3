//! Integration tests for koshelf-web crate.
//!
//! The backend is a wiremock server; the browser is a recording shell.

use async_trait::async_trait;
use koshelf_common::test_utils::{init_test_logging, language_fixtures, locale_fixtures};
use koshelf_common::{KoShelfError, Result};
use koshelf_i18n::{LocaleDescriptor, StaticLocaleSource, Translator};
use koshelf_web::{
    keys, load_options, plan_share, recap_year_path, switch_language, BrowserShell, KoShelfApi,
    KeyValueStore, LanguageApi, LanguageCookie, MemoryStore, MonthGroup, ShareAction,
    ShareEnvironment, SortOrder, SortToggle, Timeline, LANGUAGES_PATH, SET_LANGUAGE_PATH,
};
use parking_lot::Mutex;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Records every browser call in order.
struct RecordingShell {
    current: Url,
    calls: Mutex<Vec<String>>,
}

impl RecordingShell {
    fn at(url: &str) -> Self {
        Self {
            current: Url::parse(url).unwrap(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().push(call.into());
    }
}

#[async_trait]
impl BrowserShell for RecordingShell {
    fn set_cookie(&self, cookie: &str) -> Result<()> {
        self.record(format!("cookie {cookie}"));
        Ok(())
    }

    async fn clear_caches(&self) -> Result<usize> {
        self.record("clear_caches");
        Ok(3)
    }

    async fn unregister_service_workers(&self) -> Result<usize> {
        self.record("unregister_service_workers");
        Ok(1)
    }

    fn current_url(&self) -> Url {
        self.current.clone()
    }

    fn navigate(&self, url: &Url) -> Result<()> {
        self.record(format!("navigate {}", url.path()));
        Ok(())
    }
}

fn api_for(server: &MockServer) -> KoShelfApi {
    KoShelfApi::new(Url::parse(&server.uri()).unwrap())
}

#[tokio::test]
async fn test_language_options_from_backend() {
    init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LANGUAGES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(language_fixtures::sample_languages()))
        .expect(1)
        .mount(&server)
        .await;

    let options = load_options(
        &api_for(&server),
        &LanguageCookie::default(),
        "theme=dark",
        Some("pt-BR"),
    )
    .await
    .unwrap();

    let selected: Vec<&str> = options
        .iter()
        .filter(|option| option.selected)
        .map(|option| option.code.as_str())
        .collect();
    assert_eq!(options.len(), 3);
    assert_eq!(selected, vec!["pt"]);
}

#[tokio::test]
async fn test_switch_language_end_to_end() {
    init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SET_LANGUAGE_PATH))
        .and(body_json(json!({ "lang": "pt" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let shell = RecordingShell::at("http://localhost:3000/recap/2024/?t=5");
    let target = switch_language(&api_for(&server), &shell, &LanguageCookie::default(), "pt")
        .await
        .unwrap();

    assert_eq!(
        shell.calls(),
        vec![
            "cookie koshelf_lang=pt;path=/;max-age=31536000;SameSite=Strict".to_string(),
            "clear_caches".to_string(),
            "unregister_service_workers".to_string(),
            "navigate /recap/2024/".to_string(),
        ]
    );
    let stamp: i64 = target
        .query_pairs()
        .find(|(key, _)| key == "t")
        .map(|(_, value)| value.parse().unwrap())
        .unwrap();
    assert!(stamp > 5);
}

#[tokio::test]
async fn test_switch_language_server_error_stops_flow() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SET_LANGUAGE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let shell = RecordingShell::at("http://localhost:3000/");
    let result =
        switch_language(&api_for(&server), &shell, &LanguageCookie::default(), "de").await;

    match result {
        Err(KoShelfError::Api { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected api error, got {other:?}"),
    }
    assert_eq!(shell.calls().len(), 1);
}

#[tokio::test]
async fn test_languages_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LANGUAGES_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = api_for(&server).languages().await;
    assert!(matches!(result, Err(KoShelfError::Api { status: 503, .. })));
}

#[tokio::test]
async fn test_recap_page_flow() {
    let translator = Translator::new(StaticLocaleSource::new(
        LocaleDescriptor::from_json(locale_fixtures::en_us_descriptor_json()).unwrap(),
    ));
    translator.init().await;

    let store = MemoryStore::new();
    store.set_raw(keys::RECAP_SORT_NEWEST, "false").unwrap();

    let mut timeline = Timeline::new(vec![
        MonthGroup::new("December", vec![12, 11]),
        MonthGroup::new("November", vec![10]),
    ]);
    let mut toggle = SortToggle::new(&store);
    toggle.apply_initial(&mut timeline);
    assert_eq!(timeline.groups[0].header, "November");
    assert_eq!(toggle.label(&translator), "Oldest first");

    assert_eq!(toggle.toggle(&mut timeline).unwrap(), SortOrder::NewestFirst);
    assert_eq!(timeline.groups[0].items, vec![12, 11]);
    assert_eq!(store.get_raw(keys::RECAP_SORT_NEWEST).as_deref(), Some("true"));

    assert_eq!(recap_year_path(2023, Some("all")), "/recap/2023/");

    let desktop = ShareEnvironment {
        user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string(),
        max_touch_points: Some(0),
        web_share_supported: false,
    };
    assert!(matches!(
        plan_share(&desktop, &translator, Some("/r.webp"), Some("koshelf_2023_story.webp")),
        Some(ShareAction::Download { .. })
    ));
}
