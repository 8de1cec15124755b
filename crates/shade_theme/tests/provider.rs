use pretty_assertions::assert_eq;
use shade_theme::themes::main_palette;
use shade_theme::{
    keys, Color, ColorToken, FixedStyle, FontToken, FontWeight, GradientToken, ImageRef,
    ImageToken, InterfaceStyle, MemoryStore, PreferredAppearance, StyleSource, ThemeConfig,
    ThemeDefaults, ThemeError, ThemeId, ThemeProvider, ThemeRegistry,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn provider_over(store: &MemoryStore, style: InterfaceStyle) -> ThemeProvider {
    ThemeProvider::new(
        ThemeRegistry::builtin(),
        store.clone(),
        FixedStyle(style),
        ThemeDefaults {
            theme: ThemeId::new("mainTheme"),
            preferred_appearance: PreferredAppearance::System,
        },
    )
    .unwrap()
}

fn contrast() -> ThemeId {
    ThemeId::new("contrastTheme")
}

#[test]
fn fresh_store_uses_defaults() {
    let store = MemoryStore::new();
    let provider = provider_over(&store, InterfaceStyle::Light);

    assert_eq!(provider.theme(), &ThemeId::new("mainTheme"));
    assert_eq!(provider.preferred_appearance(), PreferredAppearance::System);
}

#[test]
fn set_theme_twice_writes_once() {
    let store = MemoryStore::new();
    let mut provider = provider_over(&store, InterfaceStyle::Light);

    provider.set_theme(contrast()).unwrap();
    provider.set_theme(contrast()).unwrap();

    assert_eq!(store.write_count(), 1);
    assert_eq!(store.raw(keys::THEME), Some(b"\"contrastTheme\"".to_vec()));
}

#[test]
fn set_preferred_appearance_twice_writes_once() {
    let store = MemoryStore::new();
    let mut provider = provider_over(&store, InterfaceStyle::Light);

    provider.set_preferred_appearance(PreferredAppearance::Light);
    provider.set_preferred_appearance(PreferredAppearance::Light);
    assert_eq!(store.write_count(), 1);
    assert_eq!(
        store.raw(keys::PREFERRED_APPEARANCE),
        Some(b"\"light\"".to_vec())
    );
}

#[test]
fn setting_the_default_theme_is_a_noop() {
    let store = MemoryStore::new();
    let mut provider = provider_over(&store, InterfaceStyle::Light);
    provider.set_theme(ThemeId::main()).unwrap();
    assert_eq!(store.write_count(), 0);
}

#[test]
fn preferred_appearance_round_trips_through_a_fresh_provider() {
    let store = MemoryStore::new();
    let mut provider = provider_over(&store, InterfaceStyle::Light);
    provider.set_preferred_appearance(PreferredAppearance::Dark);
    provider.set_theme(contrast()).unwrap();
    drop(provider);

    let restored = provider_over(&store, InterfaceStyle::Light);
    assert_eq!(restored.preferred_appearance(), PreferredAppearance::Dark);
    assert_eq!(restored.theme(), &contrast());
}

#[test]
fn appearance_override_beats_system_style_and_stored_preference() {
    for style in [InterfaceStyle::Light, InterfaceStyle::Dark, InterfaceStyle::Unspecified] {
        let store = MemoryStore::new();
        let mut provider = provider_over(&store, style);
        provider.set_theme(contrast()).unwrap();
        provider.set_preferred_appearance(PreferredAppearance::Light);

        let bg = provider.color(
            ColorToken::BackgroundPrimary,
            Some(PreferredAppearance::Dark),
            None,
        );
        assert_eq!(bg, Color::BLACK, "system style {style}");
    }
}

#[test]
fn system_preference_follows_style_source() {
    let store = MemoryStore::new();
    store.insert_raw(keys::THEME, "\"contrastTheme\"");

    let dark = provider_over(&store, InterfaceStyle::Dark);
    assert_eq!(dark.color(ColorToken::TextPrimary, None, None), Color::WHITE);

    let light = provider_over(&store, InterfaceStyle::Light);
    assert_eq!(light.color(ColorToken::TextPrimary, None, None), Color::BLACK);

    let unspecified = provider_over(&store, InterfaceStyle::Unspecified);
    assert_eq!(
        unspecified.color(ColorToken::TextPrimary, None, None),
        Color::BLACK
    );
}

#[test]
fn theme_override_applies_to_one_lookup() {
    let store = MemoryStore::new();
    let provider = provider_over(&store, InterfaceStyle::Dark);

    assert_eq!(
        provider.color(ColorToken::BackgroundPrimary, None, Some(&contrast())),
        Color::BLACK
    );
    assert_eq!(
        provider.color(ColorToken::BackgroundPrimary, None, None),
        main_palette::IVORY
    );
    assert_eq!(provider.theme(), &ThemeId::main());
}

#[test]
fn images_gradients_and_fonts_resolve_through_the_provider() {
    let store = MemoryStore::new();
    let provider = provider_over(&store, InterfaceStyle::Dark);
    let contrast_id = contrast();
    let theme = Some(&contrast_id);

    assert_eq!(
        provider.image(ImageToken::SplashLogo, None, theme),
        ImageRef::named("splash_logo_dark")
    );
    assert_eq!(
        provider.image(ImageToken::SplashLogo, Some(PreferredAppearance::Light), None),
        ImageRef::named("splash_logo")
    );

    let gradient = provider.gradient(GradientToken::MainColorBg, None, None);
    assert_eq!(
        gradient.colors().collect::<Vec<_>>(),
        vec![main_palette::IVORY, main_palette::CREAM]
    );

    let font = provider.font(FontToken::BodyRegular, None, theme);
    assert_eq!(font.font.weight, FontWeight::Medium);
    assert_eq!(font.metrics.point_size, 17.0);
}

#[test]
fn corrupt_or_unknown_persisted_values_fall_back() {
    let store = MemoryStore::new();
    store.insert_raw(keys::THEME, "\"retroTheme\"");
    store.insert_raw(keys::PREFERRED_APPEARANCE, "not json");

    let provider = provider_over(&store, InterfaceStyle::Light);
    assert_eq!(provider.theme(), &ThemeId::main());
    assert_eq!(provider.preferred_appearance(), PreferredAppearance::System);
}

#[test]
#[should_panic(expected = "accessing undefined theme")]
fn resolving_against_an_undefined_theme_panics() {
    let store = MemoryStore::new();
    let provider = provider_over(&store, InterfaceStyle::Light);
    provider.color(ColorToken::TextPrimary, None, Some(&ThemeId::new("retroTheme")));
}

#[test]
fn provider_is_shareable_across_reader_threads() {
    let store = MemoryStore::new();
    let provider = provider_over(&store, InterfaceStyle::Dark);

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for &token in ColorToken::ALL {
                    provider.color(token, None, Some(&contrast()));
                }
            });
        }
    });
}

#[test]
fn misspelled_default_theme_in_config_is_an_error() {
    let config = ThemeConfig::from_toml_str("default_theme = \"mainThem\"").unwrap();
    let result = ThemeProvider::new(
        ThemeRegistry::builtin(),
        MemoryStore::new(),
        FixedStyle(InterfaceStyle::Light),
        config.defaults(),
    );
    assert!(matches!(result, Err(ThemeError::UnknownTheme(ref id)) if id.as_str() == "mainThem"));
}

/// Style source that counts how often it is asked
#[derive(Clone, Default)]
struct CountingStyle(Arc<AtomicUsize>);

impl StyleSource for CountingStyle {
    fn current_style(&self) -> InterfaceStyle {
        self.0.fetch_add(1, Ordering::SeqCst);
        InterfaceStyle::Dark
    }
}

#[test]
fn system_style_is_queried_only_for_system_preference_lookups() {
    let style = CountingStyle::default();
    let provider = ThemeProvider::new(
        ThemeRegistry::builtin(),
        MemoryStore::new(),
        style.clone(),
        ThemeDefaults::default(),
    )
    .unwrap();
    let contrast_id = contrast();

    // Static main theme values never need the system style.
    for &token in ColorToken::ALL {
        provider.color(token, None, None);
    }
    provider.gradient(GradientToken::MainColorBg, None, None);
    // Forced preferences never do either.
    provider.color(
        ColorToken::BackgroundPrimary,
        Some(PreferredAppearance::Light),
        Some(&contrast_id),
    );
    provider.font(FontToken::BodyRegular, Some(PreferredAppearance::Dark), Some(&contrast_id));
    assert_eq!(style.0.load(Ordering::SeqCst), 0);

    assert_eq!(
        provider.color(ColorToken::BackgroundPrimary, None, Some(&contrast_id)),
        Color::BLACK
    );
    assert_eq!(style.0.load(Ordering::SeqCst), 1);
}
