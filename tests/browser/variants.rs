//! Variant selection against loaded creatures.

use creature_browser::{Browser, BrowserConfig, Creature, InMemoryProvider, VariantKey};

use crate::support::scenario_provider;

#[tokio::test]
async fn bulbasaur_ivysaur_walkthrough() {
    let mut browser = Browser::new(scenario_provider(), BrowserConfig::default());
    browser.settle().await;
    assert_eq!(browser.view().name(), Some("bulbasaur"));
    assert_eq!(browser.view().reference(), Some("fd1"));

    browser.next();
    browser.settle().await;
    assert_eq!(browser.view().name(), Some("ivysaur"));
    assert_eq!(browser.view().reference(), Some("fd2"));

    browser.select_variant(VariantKey::BackShiny);
    assert_eq!(browser.view().name(), Some("ivysaur"));
    assert_eq!(browser.view().reference(), Some("bs2"));

    // The selection outlives the creature it was made on.
    browser.previous();
    browser.settle().await;
    assert_eq!(browser.view().name(), Some("bulbasaur"));
    assert_eq!(browser.selected_variant(), VariantKey::BackShiny);
    assert_eq!(browser.view().reference(), Some("bs1"));
}

#[tokio::test]
async fn selecting_a_variant_never_fetches() {
    let provider = scenario_provider();
    let mut browser = Browser::new(provider.clone(), BrowserConfig::default());
    browser.settle().await;
    let calls = provider.call_count();

    assert!(browser.select_variant_text("back-default"));
    tokio::task::yield_now().await;
    browser.pump();

    assert_eq!(provider.call_count(), calls);
    assert_eq!(browser.id_text(), "1");
    assert!(browser.state().pending().is_none());
    assert_eq!(browser.view().reference(), Some("bd1"));
}

#[tokio::test]
async fn each_selector_button_resolves_its_sprite() {
    let mut browser = Browser::new(scenario_provider(), BrowserConfig::default());
    browser.settle().await;

    let cases = [
        ("front-default", "fd1"),
        ("back-default", "bd1"),
        ("front-shiny", "fs1"),
        ("back-shiny", "bs1"),
    ];
    for (key, expected) in cases {
        assert!(browser.select_variant_text(key));
        assert_eq!(browser.view().reference(), Some(expected), "variant {}", key);
    }
}

#[tokio::test]
async fn unknown_variant_is_ignored() {
    let mut browser = Browser::new(scenario_provider(), BrowserConfig::default());
    browser.settle().await;
    browser.select_variant(VariantKey::FrontShiny);

    assert!(!browser.select_variant_text("sideways"));
    assert_eq!(browser.selected_variant(), VariantKey::FrontShiny);
    assert_eq!(browser.view().reference(), Some("fs1"));
}

#[tokio::test]
async fn selection_before_first_load_applies_once_loaded() {
    let mut browser = Browser::new(scenario_provider(), BrowserConfig::default());
    browser.select_variant(VariantKey::FrontShiny);
    assert_eq!(browser.view().reference(), None);

    browser.settle().await;
    assert_eq!(browser.view().reference(), Some("fs1"));
}

#[tokio::test]
async fn creature_without_selected_sprite_shows_no_reference() {
    let provider = InMemoryProvider::new()
        .with(1, Creature::new("ditto").with_variant(VariantKey::FrontDefault, "fd132"));
    let config = BrowserConfig::default().with_default_variant(VariantKey::BackShiny);
    let mut browser = Browser::new(provider, config);
    browser.settle().await;

    let view = browser.view();
    assert_eq!(view.name(), Some("ditto"));
    assert_eq!(view.selected, VariantKey::BackShiny);
    assert_eq!(view.reference(), None);
}
