//! HTTP provider integration tests.
//!
//! Starts an axum server shaped like PokeAPI and exercises `HttpProvider`
//! (and a browser on top of it) against it.

#![cfg(feature = "http")]


use std::time::Duration;

use creature_browser::{
    Browser, BrowserConfig, CreatureId, HttpConfig, HttpProvider, Phase, Provider, ProviderError,
    VariantKey,
};

use server::start_server;

fn provider(base: &str) -> HttpProvider {
    HttpProvider::with_base_url(base).unwrap()
}

#[tokio::test]
async fn fetch_decodes_creature() {
    let base = start_server().await;
    let creature = provider(&base).fetch(CreatureId::new(1)).await.unwrap();

    assert_eq!(creature.name(), "bulbasaur");
    assert_eq!(creature.reference(VariantKey::FrontDefault), Some("fd1"));
    assert_eq!(creature.reference(VariantKey::BackShiny), Some("bs1"));
}

#[tokio::test]
async fn null_sprites_are_omitted() {
    let base = start_server().await;
    let creature = provider(&base).fetch(CreatureId::new(2)).await.unwrap();

    assert_eq!(creature.name(), "ivysaur");
    assert!(creature.has_variant(VariantKey::FrontDefault));
    assert!(!creature.has_variant(VariantKey::BackShiny));
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let base = start_server().await;
    let err = provider(&base).fetch(CreatureId::new(9999)).await.unwrap_err();
    assert_eq!(err, ProviderError::NotFound(CreatureId::new(9999)));
}

#[tokio::test]
async fn server_error_is_status() {
    let base = start_server().await;
    let err = provider(&base).fetch(CreatureId::new(500)).await.unwrap_err();
    assert_eq!(err, ProviderError::Status(500));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let base = start_server().await;
    let err = provider(&base).fetch(CreatureId::new(3)).await.unwrap_err();
    assert!(matches!(err, ProviderError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn slow_response_times_out_as_transport_error() {
    let base = start_server().await;
    let provider = HttpProvider::new(HttpConfig {
        base_url: base,
        timeout: Duration::from_millis(100),
    })
    .unwrap();

    let err = provider.fetch(CreatureId::new(99)).await.unwrap_err();
    assert!(matches!(err, ProviderError::Transport(_)), "got {:?}", err);
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    let provider = provider("http://127.0.0.1:1");
    let err = provider.fetch(CreatureId::new(1)).await.unwrap_err();
    assert!(matches!(err, ProviderError::Transport(_)), "got {:?}", err);
}

#[tokio::test]
async fn browser_over_http() {
    let base = start_server().await;
    let mut browser = Browser::new(provider(&base), BrowserConfig::default());
    browser.settle().await;
    assert_eq!(browser.view().name(), Some("bulbasaur"));

    browser.next();
    browser.select_variant(VariantKey::BackDefault);
    browser.settle().await;
    assert_eq!(browser.view().name(), Some("ivysaur"));
    assert_eq!(browser.view().reference(), Some("bd2"));

    // 404 keeps ivysaur on screen.
    browser.set_id_from_text("9999");
    browser.settle().await;
    assert_eq!(browser.view().name(), Some("ivysaur"));
    assert_eq!(browser.phase(), Phase::Loaded(CreatureId::new(2)));
}
