//! Integration tests for koshelf-cli crate.
//!
//! These tests run commands against a mock KoShelf site.

use clap::Parser;
use koshelf_cli::{load_config, App, Cli, Command};
use koshelf_common::test_utils::{
    create_temp_dir, init_test_logging, language_fixtures, locale_fixtures,
};
use koshelf_config::{Config, ConfigLoader};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn site() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assets/json/locales.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(locale_fixtures::en_us_descriptor_json()),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/languages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(language_fixtures::sample_languages()))
        .mount(&server)
        .await;
    server
}

fn config_for(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.server.base_url = server.uri();
    config
}

async fn run(app: &App, args: &[&str]) -> String {
    let cli = Cli::try_parse_from(std::iter::once("koshelf").chain(args.iter().copied())).unwrap();
    let mut out = Vec::new();
    app.run(&cli.command, &mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_translate_command() {
    init_test_logging();
    let server = site().await;
    let app = App::from_config(&config_for(&server)).unwrap();

    let output = run(&app, &["translate", "foo", "foo.bar", "missing.key"]).await;
    assert_eq!(output, "Foo\nBar\nmissing.key\n");

    let output = run(&app, &["translate", "items-count", "--count", "1"]).await;
    assert_eq!(output, "One item\n");

    let output = run(&app, &["translate", "welcome", "--var", "name=Ana"]).await;
    assert_eq!(output, "Welcome, Ana!\n");
}

#[tokio::test]
async fn test_language_commands() {
    let server = site().await;
    let app = App::from_config(&config_for(&server)).unwrap();

    assert_eq!(run(&app, &["language"]).await, "en-US\n");
    assert_eq!(
        run(&app, &["languages"]).await,
        "de: Deutsch\nen: English\npt: Português (Brasil)\n"
    );
}

#[tokio::test]
async fn test_unreachable_site_uses_default_locale() {
    let mut config = Config::default();
    config.server.base_url = "http://127.0.0.1:9".to_string();
    config.server.timeout_seconds = 2;
    config.i18n.default_locale = "de-DE".to_string();

    let app = App::from_config(&config).unwrap();
    assert_eq!(run(&app, &["language"]).await, "de-DE\n");
    assert_eq!(run(&app, &["translate", "share"]).await, "share\n");
}

#[tokio::test]
async fn test_languages_failure_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/languages"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = App::from_config(&config_for(&server)).unwrap();
    let mut out = Vec::new();
    assert!(app.run(&Command::Languages, &mut out).await.is_err());
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_load_config_applies_flag_override() {
    let dir = create_temp_dir();
    let file = dir.path().join("koshelf.toml");

    let mut stored = Config::default();
    stored.server.base_url = "http://stored.local".to_string();
    ConfigLoader::new(&file).save(&stored).await.unwrap();

    let config = load_config(&file, Some("http://flag.local:8080")).await.unwrap();
    assert_eq!(config.server.base_url, "http://flag.local:8080");

    assert!(load_config(&file, Some("ftp://nope")).await.is_err());
}
