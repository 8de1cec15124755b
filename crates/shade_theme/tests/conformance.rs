use shade_theme::{
    AssetTable, ColorToken, FontToken, GradientToken, ImageToken, InterfaceStyle,
    PreferredAppearance, ThemeRegistry,
};

const STYLES: [InterfaceStyle; 3] = [
    InterfaceStyle::Unspecified,
    InterfaceStyle::Light,
    InterfaceStyle::Dark,
];

fn for_each_table(mut f: impl FnMut(&dyn AssetTable)) {
    let registry = ThemeRegistry::builtin();
    assert!(!registry.is_empty());
    for id in registry.ids() {
        f(registry.table(&id));
    }
}

#[test]
fn every_theme_resolves_every_color() {
    for_each_table(|table| {
        for &token in ColorToken::ALL {
            let appearance = table.color(token);
            for &pref in PreferredAppearance::all() {
                for style in STYLES {
                    let c = appearance.resolve(pref, style);
                    assert!(
                        (0.0..=1.0).contains(&c.a),
                        "theme={} token={token} alpha out of range",
                        table.id()
                    );
                }
            }
        }
    });
}

#[test]
fn every_theme_resolves_every_font() {
    for_each_table(|table| {
        for &token in FontToken::ALL {
            let set = table.font(token);
            assert_eq!(set.text_style, token.text_style());
            for &pref in PreferredAppearance::all() {
                for style in STYLES {
                    let font = set.appearance.resolve(pref, style);
                    assert_eq!(
                        font.size,
                        set.metrics.point_size,
                        "theme={} token={token}",
                        table.id()
                    );
                }
            }
        }
    });
}

#[test]
fn every_theme_resolves_every_image() {
    for_each_table(|table| {
        for &token in ImageToken::ALL {
            let appearance = table.image(token);
            for &pref in PreferredAppearance::all() {
                for style in STYLES {
                    assert!(!appearance.resolve(pref, style).name().is_empty());
                }
            }
        }
    });
}

#[test]
fn every_theme_resolves_every_gradient() {
    for_each_table(|table| {
        for &token in GradientToken::ALL {
            let appearance = table.gradient(token);
            for &pref in PreferredAppearance::all() {
                for style in STYLES {
                    let gradient = appearance.resolve(pref, style);
                    assert!(
                        gradient.stops.len() >= 2,
                        "theme={} token={token} needs at least two stops",
                        table.id()
                    );
                }
            }
        }
    });
}

#[test]
fn themes_share_the_type_scale() {
    let registry = ThemeRegistry::builtin();
    let ids = registry.ids();
    for &token in FontToken::ALL {
        let metrics: Vec<_> = ids
            .iter()
            .map(|id| registry.table(id).font(token).metrics)
            .collect();
        assert!(
            metrics.windows(2).all(|w| w[0] == w[1]),
            "token={token} metrics differ across themes: {metrics:?}"
        );
    }
}
